//! Rendering options: widget selection, popovers, and table configuration.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tablesorter widget activated through the configuration's widget list.
///
/// The five names the renderer understands map to the bundled markup and
/// script blocks; anything else passes through verbatim via
/// [`Widget::Custom`], so widgets this crate knows nothing about can still
/// be activated client-side.
///
/// # Examples
///
/// ```
/// use fasttable::Widget;
///
/// assert_eq!(Widget::Pager.as_str(), "pager");
/// assert_eq!(Widget::from("zebra"), Widget::Zebra);
/// assert_eq!(Widget::from("uitheme"), Widget::Custom("uitheme".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
	/// Per-column filter row
	Filter,
	/// Column visibility menu
	Columns,
	/// Alternating row striping
	Zebra,
	/// Client-side paging controls
	Pager,
	/// Export / save menu
	Output,
	/// Any other widget name, passed through unvalidated
	Custom(String),
}

impl Widget {
	/// Returns the name emitted into the configuration's widget list.
	pub fn as_str(&self) -> &str {
		match self {
			Widget::Filter => "filter",
			Widget::Columns => "columns",
			Widget::Zebra => "zebra",
			Widget::Pager => "pager",
			Widget::Output => "output",
			Widget::Custom(name) => name,
		}
	}
}

impl From<&str> for Widget {
	fn from(name: &str) -> Self {
		match name {
			"filter" => Widget::Filter,
			"columns" => Widget::Columns,
			"zebra" => Widget::Zebra,
			"pager" => Widget::Pager,
			"output" => Widget::Output,
			other => Widget::Custom(other.to_string()),
		}
	}
}

impl fmt::Display for Widget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

// Widgets serialize as their wire names so a widget list read back from
// configuration is the same list that was written.

impl Serialize for Widget {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Widget {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let name = String::deserialize(deserializer)?;
		Ok(Widget::from(name.as_str()))
	}
}

/// Bootstrap popover annotation for a column header.
///
/// Unset fields fall back at render time: the title to the column name, the
/// content to the empty string, the placement to
/// [`TableOptions::popover_placement`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Popover {
	/// Popover title; the column name when unset or empty
	pub title: Option<String>,
	/// Popover body text; empty when unset
	pub content: Option<String>,
	/// Whether the content is interpreted as HTML by the popover widget
	pub html: bool,
	/// Placement relative to the header (`top`, `bottom`, `left`, `right`)
	pub placement: Option<String>,
}

impl Popover {
	/// Creates an empty popover annotation.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the popover title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the popover content.
	pub fn with_content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	/// Marks the content as HTML.
	pub fn with_html(mut self, html: bool) -> Self {
		self.html = html;
		self
	}

	/// Sets an explicit placement.
	pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
		self.placement = Some(placement.into());
		self
	}
}

/// Configuration for a rendered table.
///
/// All fields are public and carry the defaults documented on each; the
/// `with_*` builders exist for fluent construction.
///
/// # Examples
///
/// ```
/// use fasttable::{Popover, TableOptions, Widget};
///
/// let options = TableOptions::new()
///     .with_widgets(vec![Widget::Filter, Widget::Zebra])
///     .with_theme("blue")
///     .hide_column("id")
///     .with_popover("Animal", Popover::new().with_title("Type of Animal"));
///
/// assert_eq!(options.theme, "blue");
/// assert!(options.is_hidden("id"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
	/// CSS classes applied to the `<table>` element (default `"table"`)
	pub table_classes: String,
	/// tablesorter theme name (default `"bootstrap"`)
	pub theme: String,
	/// Widgets activated on the table (default: filter, columns, zebra,
	/// pager, output)
	pub widgets: Vec<Widget>,
	/// Placement used by column popovers without an explicit one
	/// (default `"top"`)
	pub popover_placement: String,
	/// Raw HTML fragment placed in the top-right button group next to the
	/// export menu (default empty)
	pub extra_buttons: String,
	/// Columns excluded from rendered head and body (default empty)
	pub hidden_columns: Vec<String>,
	/// Popover annotations keyed by column name (default empty)
	pub popovers: HashMap<String, Popover>,
	/// Escape cell text instead of passing raw HTML through
	/// (default `false`, matching the tablesorter convention of
	/// server-trusted cell markup)
	pub escape_cells: bool,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			table_classes: "table".to_string(),
			theme: "bootstrap".to_string(),
			widgets: vec![
				Widget::Filter,
				Widget::Columns,
				Widget::Zebra,
				Widget::Pager,
				Widget::Output,
			],
			popover_placement: "top".to_string(),
			extra_buttons: String::new(),
			hidden_columns: Vec::new(),
			popovers: HashMap::new(),
			escape_cells: false,
		}
	}
}

impl TableOptions {
	/// Creates options with the documented defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the CSS classes applied to the `<table>` element.
	pub fn with_table_classes(mut self, classes: impl Into<String>) -> Self {
		self.table_classes = classes.into();
		self
	}

	/// Sets the tablesorter theme.
	pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
		self.theme = theme.into();
		self
	}

	/// Replaces the widget list.
	pub fn with_widgets(mut self, widgets: Vec<Widget>) -> Self {
		self.widgets = widgets;
		self
	}

	/// Sets the default popover placement.
	pub fn with_popover_placement(mut self, placement: impl Into<String>) -> Self {
		self.popover_placement = placement.into();
		self
	}

	/// Sets the extra-buttons HTML fragment.
	pub fn with_extra_buttons(mut self, html: impl Into<String>) -> Self {
		self.extra_buttons = html.into();
		self
	}

	/// Hides a column from rendered output.
	pub fn hide_column(mut self, column: impl Into<String>) -> Self {
		self.hidden_columns.push(column.into());
		self
	}

	/// Attaches a popover annotation to a column header.
	pub fn with_popover(mut self, column: impl Into<String>, popover: Popover) -> Self {
		self.popovers.insert(column.into(), popover);
		self
	}

	/// Escapes cell text instead of passing raw HTML through.
	pub fn with_escaped_cells(mut self, escape: bool) -> Self {
		self.escape_cells = escape;
		self
	}

	/// Returns whether a widget is in the widget list.
	pub fn has_widget(&self, widget: &Widget) -> bool {
		self.widgets.contains(widget)
	}

	/// Returns whether a column is hidden.
	pub fn is_hidden(&self, column: &str) -> bool {
		self.hidden_columns.iter().any(|hidden| hidden == column)
	}
}
