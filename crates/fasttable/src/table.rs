//! The table renderer: data accessors plus markup and script generation.

use std::fmt;

use uuid::Uuid;

use crate::error::{Result, TableError};
use crate::markup;
use crate::options::{TableOptions, Widget};
use crate::row::Row;
use crate::script;

/// Identifier of a rendered table.
///
/// Produced by [`FastTable::render_markup`] and consumed by
/// [`FastTable::render_script`]. Making the script generator demand this
/// value guarantees markup was rendered first, so the script always
/// references an id that exists in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableId(String);

impl TableId {
	/// Returns the id as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Generates a fresh id, unique across tables on the same page.
	pub(crate) fn generate() -> Self {
		TableId(format!("viewTable{}", Uuid::new_v4().simple()))
	}
}

impl fmt::Display for TableId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for TableId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Result of rendering table markup.
#[derive(Debug, Clone)]
pub struct RenderedMarkup {
	/// The HTML fragment: container, button group, table, optional pager
	pub html: String,
	/// The id the table element carries; pass to
	/// [`FastTable::render_script`]
	pub table_id: TableId,
}

/// Server-side renderer for sortable, filterable, pageable tables.
///
/// `FastTable` holds rows, a column set, and rendering options, and
/// produces two pieces of text: an HTML fragment
/// ([`render_markup`](FastTable::render_markup)) and the `<script>` block
/// that activates the tablesorter widgets on it
/// ([`render_script`](FastTable::render_script)). Sorting, filtering,
/// paging and export all happen client-side; this type only generates the
/// markup and configuration they need.
///
/// One instance renders one table; in a request-serving context construct
/// a fresh instance per render rather than sharing one across requests.
///
/// # Examples
///
/// ```
/// use fasttable::{FastTable, Row};
///
/// let mut table = FastTable::new();
/// table.load_rows(vec![
///     Row::from_iter([("Animal", "Dog"), ("Color", "Brown")]),
///     Row::from_iter([("Animal", "Cat"), ("Color", "Black")]),
/// ])?;
///
/// let markup = table.render_markup(None);
/// let script = table.render_script(&markup.table_id);
///
/// assert!(markup.html.contains("<th>Animal</th>"));
/// assert!(script.contains(markup.table_id.as_str()));
/// # Ok::<(), fasttable::TableError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FastTable {
	columns: Vec<String>,
	rows: Vec<Row>,
	options: TableOptions,
}

impl FastTable {
	/// Creates an empty table with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty table with the given options.
	pub fn with_options(options: TableOptions) -> Self {
		Self {
			columns: Vec::new(),
			rows: Vec::new(),
			options,
		}
	}

	/// Returns the column set.
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	/// Returns the loaded rows.
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Returns the rendering options.
	pub fn options(&self) -> &TableOptions {
		&self.options
	}

	/// Returns the rendering options for in-place adjustment.
	pub fn options_mut(&mut self) -> &mut TableOptions {
		&mut self.options
	}

	/// Replaces the column set.
	///
	/// No validation against loaded rows is performed; rows missing a
	/// column render empty cells for it.
	pub fn set_columns(&mut self, columns: Vec<String>) {
		self.columns = columns;
	}

	/// Replaces all row data. The column set is left untouched.
	pub fn set_rows(&mut self, rows: Vec<Row>) {
		self.rows = rows;
	}

	/// Appends one row to the end of the table.
	pub fn append_row(&mut self, row: Row) {
		self.rows.push(row);
	}

	/// Loads rows and derives the column set from the first row's keys.
	///
	/// This is the primary ingestion entry point for query results. The
	/// first row supplies the column order; later rows are assumed to share
	/// it and are not reconciled.
	///
	/// # Errors
	///
	/// Returns [`TableError::NoRows`] when `rows` is empty, since column
	/// derivation needs a first row.
	pub fn load_rows(&mut self, rows: Vec<Row>) -> Result<()> {
		let first = rows.first().ok_or(TableError::NoRows)?;
		self.columns = first.columns().map(str::to_string).collect();
		self.rows = rows;
		Ok(())
	}

	/// Renders the table markup.
	///
	/// With `Some(id)` the table carries the caller's id verbatim; with
	/// `None` a fresh page-unique id is generated. The resolved id comes
	/// back in [`RenderedMarkup::table_id`] for
	/// [`render_script`](FastTable::render_script).
	///
	/// Empty row or column sets are not errors; the head and body simply
	/// degenerate to empty sections.
	pub fn render_markup(&self, table_id: Option<&str>) -> RenderedMarkup {
		let table_id = match table_id {
			Some(id) => TableId(id.to_string()),
			None => TableId::generate(),
		};

		tracing::debug!(
			table_id = %table_id,
			rows = self.rows.len(),
			columns = self.columns.len(),
			"rendering table markup"
		);

		let head = markup::head_html(&self.columns, &self.options);
		let body = markup::body_html(&self.rows, &self.columns, &self.options);

		let container_class = format!("sortTable-{}", table_id);

		let mut extra_buttons = self.options.extra_buttons.clone();
		if self.options.has_widget(&Widget::Output) {
			extra_buttons.push_str(&markup::export_menu(&container_class));
		}

		let pager = if self.options.has_widget(&Widget::Pager) {
			markup::pager_footer(self.visible_column_count())
		} else {
			String::new()
		};

		let html = format!(
			"<div class=\"FastTableContainer {container}\">\
			 <div class=\"btn-group pull-right\">{buttons}</div>\
			 <table id=\"{id}\" class=\"{classes}\">\n\
			 <thead>{head}</thead>\n\
			 {pager}\n\
			 <tbody>{body}</tbody>\n</table>\n\
			 </div>",
			container = container_class,
			buttons = extra_buttons,
			id = table_id,
			classes = self.options.table_classes,
			head = head,
			pager = pager,
			body = body,
		);

		RenderedMarkup { html, table_id }
	}

	/// Renders the `<script>` block activating the widgets on the table.
	///
	/// Takes the [`TableId`] returned by
	/// [`render_markup`](FastTable::render_markup) so the script always
	/// targets markup that was actually generated.
	pub fn render_script(&self, table_id: &TableId) -> String {
		tracing::debug!(table_id = %table_id, "rendering table script");
		script::script_html(table_id.as_str(), &self.options)
	}

	fn visible_column_count(&self) -> usize {
		self.columns
			.iter()
			.filter(|column| !self.options.is_hidden(column))
			.count()
	}
}
