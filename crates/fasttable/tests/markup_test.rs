
use fasttable::{FastTable, Popover, Row, TableError, TableOptions, Widget};
use fixtures::*;
use rstest::*;

#[rstest]
fn test_load_rows_derives_header_cells_in_order(animal_rows: Vec<Row>) {
	let mut table = FastTable::new();
	table.load_rows(animal_rows).unwrap();
	let markup = table.render_markup(Some("t1"));

	let head_start = markup.html.find("<thead>").unwrap() + "<thead>".len();
	let head_end = markup.html.find("</thead>").unwrap();
	let head = &markup.html[head_start..head_end];
	assert_eq!(head.matches("<th").count(), 2);
	assert!(head.find("Animal").unwrap() < head.find("Color").unwrap());
}

#[rstest]
fn test_load_rows_empty_propagates_error() {
	let mut table = FastTable::new();
	assert!(matches!(table.load_rows(vec![]), Err(TableError::NoRows)));
}

#[rstest]
fn test_three_column_rows_render_three_headers() {
	let mut table = FastTable::with_options(TableOptions::new().with_widgets(vec![]));
	table
		.load_rows(vec![Row::from_iter([("a", "1"), ("b", "2"), ("c", "3")])])
		.unwrap();
	let markup = table.render_markup(Some("t1"));
	assert!(markup.html.contains("<th>a</th><th>b</th><th>c</th>"));
}

#[rstest]
fn test_hidden_column_absent_from_head_and_body(user_rows: Vec<Row>) {
	let mut table = FastTable::with_options(
		TableOptions::new().with_widgets(vec![]).hide_column("id"),
	);
	table.load_rows(user_rows).unwrap();
	let markup = table.render_markup(Some("t1"));

	assert!(!markup.html.contains("<th>id</th>"));
	assert!(!markup.html.contains("<td>1</td>"));
	assert!(markup.html.contains("<th>Name</th><th>Email</th>"));
	assert!(markup.html.contains("<td>Alice</td>"));
}

#[rstest]
fn test_hidden_columns_preserve_remaining_order(user_rows: Vec<Row>) {
	let mut table = FastTable::with_options(
		TableOptions::new().with_widgets(vec![]).hide_column("Name"),
	);
	table.load_rows(user_rows).unwrap();
	let markup = table.render_markup(Some("t1"));
	assert!(markup.html.contains("<th>id</th><th>Email</th>"));
}

#[rstest]
fn test_append_row_renders_last(plain_table: FastTable) {
	let mut table = plain_table;
	table.append_row(Row::from_iter([("Animal", "Owl"), ("Color", "Grey")]));
	let markup = table.render_markup(Some("t1"));

	let owl = markup.html.find("<td>Owl</td>").unwrap();
	let snake = markup.html.find("<td>Snake</td>").unwrap();
	assert!(snake < owl);
}

#[rstest]
fn test_generated_ids_differ_between_renders(full_table: FastTable) {
	let first = full_table.render_markup(None);
	let second = full_table.render_markup(None);
	assert_ne!(first.table_id, second.table_id);
	assert!(first.html.contains(first.table_id.as_str()));
	assert!(second.html.contains(second.table_id.as_str()));
}

#[rstest]
fn test_container_class_ties_to_table_id(full_table: FastTable) {
	let markup = full_table.render_markup(Some("myTable"));
	assert!(
		markup
			.html
			.contains("<div class=\"FastTableContainer sortTable-myTable\">")
	);
	assert!(markup.html.contains("<table id=\"myTable\" class=\"table\">"));
}

#[rstest]
fn test_pager_footer_only_with_pager_widget(animal_rows: Vec<Row>) {
	let mut with_pager = FastTable::with_options(
		TableOptions::new().with_widgets(vec![Widget::Pager]),
	);
	with_pager.load_rows(animal_rows.clone()).unwrap();
	let markup = with_pager.render_markup(Some("t1"));
	assert!(markup.html.contains("<tfoot>"));
	assert!(markup.html.contains("colspan=\"2\""));

	let mut without = FastTable::with_options(
		TableOptions::new().with_widgets(widgets_without(&Widget::Pager)),
	);
	without.load_rows(animal_rows).unwrap();
	let markup = without.render_markup(Some("t1"));
	assert!(!markup.html.contains("<tfoot>"));
	assert!(!markup.html.contains("ts-pager"));
}

#[rstest]
fn test_export_button_only_with_output_widget(animal_rows: Vec<Row>) {
	let mut with_output = FastTable::with_options(
		TableOptions::new().with_widgets(vec![Widget::Output]),
	);
	with_output.load_rows(animal_rows.clone()).unwrap();
	let markup = with_output.render_markup(Some("t1"));
	assert!(markup.html.contains("Export / Save"));
	assert!(markup.html.contains("save-menu"));

	let mut without = FastTable::with_options(
		TableOptions::new().with_widgets(widgets_without(&Widget::Output)),
	);
	without.load_rows(animal_rows).unwrap();
	let markup = without.render_markup(Some("t1"));
	assert!(!markup.html.contains("Export / Save"));
	assert!(!markup.html.contains("save-menu"));
}

#[rstest]
fn test_extra_buttons_render_in_button_group(animal_rows: Vec<Row>) {
	let mut table = FastTable::with_options(
		TableOptions::new()
			.with_widgets(vec![])
			.with_extra_buttons("<a class=\"btn btn-default\" href=\"/new\">New</a>"),
	);
	table.load_rows(animal_rows).unwrap();
	let markup = table.render_markup(Some("t1"));
	assert!(
		markup.html.contains(
			"<div class=\"btn-group pull-right\"><a class=\"btn btn-default\" href=\"/new\">New</a></div>"
		)
	);
}

#[rstest]
fn test_popover_attributes_only_on_annotated_column(animal_rows: Vec<Row>) {
	let mut table = FastTable::with_options(
		TableOptions::new().with_widgets(vec![]).with_popover(
			"Animal",
			Popover::new()
				.with_title("Type of Animal")
				.with_content("This is the animal type"),
		),
	);
	table.load_rows(animal_rows).unwrap();
	let markup = table.render_markup(Some("t1"));

	assert!(markup.html.contains("title=\"Type of Animal\""));
	assert!(markup.html.contains("<th>Color</th>"));
	assert_eq!(markup.html.matches("data-toggle=\"popover\"").count(), 1);
}

#[rstest]
fn test_animal_example_shape(animal_rows: Vec<Row>) {
	let mut table = FastTable::with_options(TableOptions::new().with_widgets(vec![]));
	table.load_rows(animal_rows[..2].to_vec()).unwrap();
	let markup = table.render_markup(Some("t1"));

	assert!(markup.html.contains("<th>Animal</th><th>Color</th>"));
	assert_eq!(markup.html.matches("<tr>").count(), 2);
	assert_eq!(markup.html.matches("<td>").count(), 4);
	assert!(!markup.html.contains("<tfoot>"));
	assert!(!markup.html.contains("Export / Save"));
}

#[rstest]
fn test_accessor_round_trip() {
	let mut table = FastTable::new();
	let columns = vec!["Animal".to_string(), "Color".to_string()];
	let rows = vec![Row::from_iter([("Animal", "Dog"), ("Color", "Brown")])];
	table.set_columns(columns.clone());
	table.set_rows(rows.clone());
	assert_eq!(table.columns(), columns.as_slice());
	assert_eq!(table.rows(), rows.as_slice());
}

#[rstest]
fn test_rows_ingested_from_json_keep_document_order() {
	let rows: Vec<Row> = serde_json::from_str(
		r#"[{"Animal": "Dog", "Color": "Brown"}, {"Animal": "Cat", "Color": "Black"}]"#,
	)
	.unwrap();
	let mut table = FastTable::with_options(TableOptions::new().with_widgets(vec![]));
	table.load_rows(rows).unwrap();
	assert_eq!(table.columns(), ["Animal", "Color"]);
}
