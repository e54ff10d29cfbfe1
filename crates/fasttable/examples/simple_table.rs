//! Renders the animal/color sample table and prints the markup and script.
//!
//! Embed the two printed fragments in a page that already includes the
//! tablesorter and Bootstrap assets (see `fasttable::resource_links`).

use fasttable::{FastTable, Popover, Row, TableError, TableOptions};

fn main() -> Result<(), TableError> {
	let data = vec![
		Row::from_iter([("Animal", "Dog"), ("Color", "Brown")]),
		Row::from_iter([("Animal", "Cat"), ("Color", "Black")]),
		Row::from_iter([("Animal", "Turtle"), ("Color", "Green")]),
		Row::from_iter([("Animal", "Dog"), ("Color", "unknown")]),
		Row::from_iter([("Animal", "Snake"), ("Color", "Red")]),
	];

	let options = TableOptions::new().with_popover(
		"Animal",
		Popover::new()
			.with_title("Type of Animal")
			.with_content("This is the animal type"),
	);

	let mut table = FastTable::with_options(options);
	table.load_rows(data)?;

	let markup = table.render_markup(None);
	let script = table.render_script(&markup.table_id);

	println!("{}", markup.html);
	println!("{}", script);

	Ok(())
}
