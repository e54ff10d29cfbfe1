//! Row type: an ordered mapping from column names to cell values.

use std::borrow::Cow;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One row of table data.
///
/// A row maps column names to cell values and preserves insertion order.
/// The first row loaded through [`FastTable::load_rows`] supplies the
/// column set in exactly this order, so `Row` never reorders its entries.
///
/// Cell values are [`serde_json::Value`], so strings, numbers and booleans
/// all work directly. String values may contain raw HTML; whether they are
/// escaped at render time is decided by
/// [`TableOptions::escape_cells`](crate::TableOptions).
///
/// [`FastTable::load_rows`]: crate::FastTable::load_rows
///
/// # Examples
///
/// ```
/// use fasttable::Row;
///
/// let row = Row::from_iter([("Animal", "Dog"), ("Color", "Brown")]);
/// assert_eq!(row.text("Animal"), "Dog");
/// assert_eq!(row.columns().collect::<Vec<_>>(), ["Animal", "Color"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
	cells: Vec<(String, Value)>,
}

impl Row {
	/// Creates an empty row.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a cell value, replacing any existing value for the column.
	///
	/// A replaced column keeps its original position; a new column is
	/// appended at the end.
	///
	/// # Examples
	///
	/// ```
	/// use fasttable::Row;
	///
	/// let row = Row::new().set("Animal", "Dog").set("Legs", 4);
	/// assert_eq!(row.text("Legs"), "4");
	/// ```
	pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(column, value);
		self
	}

	/// Sets a cell value on an existing row.
	///
	/// Same replacement semantics as [`Row::set`].
	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
		let column = column.into();
		let value = value.into();
		match self.cells.iter_mut().find(|(name, _)| *name == column) {
			Some((_, cell)) => *cell = value,
			None => self.cells.push((column, value)),
		}
	}

	/// Returns the raw cell value for a column, if present.
	pub fn get(&self, column: &str) -> Option<&Value> {
		self.cells
			.iter()
			.find(|(name, _)| name == column)
			.map(|(_, value)| value)
	}

	/// Returns the cell text for a column as it will appear in markup.
	///
	/// String values are returned as-is (no JSON quoting), null and missing
	/// columns render as the empty string, and everything else uses its JSON
	/// text form.
	pub fn text(&self, column: &str) -> Cow<'_, str> {
		match self.get(column) {
			Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
			Some(Value::Null) | None => Cow::Borrowed(""),
			Some(other) => Cow::Owned(other.to_string()),
		}
	}

	/// Iterates the column names in insertion order.
	pub fn columns(&self) -> impl Iterator<Item = &str> {
		self.cells.iter().map(|(name, _)| name.as_str())
	}

	/// Returns the number of cells in the row.
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Returns `true` if the row has no cells.
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Row
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut row = Row::new();
		for (column, value) in iter {
			row.insert(column, value);
		}
		row
	}
}

// Serialized as a JSON object. The hand-written impls keep the cells in
// insertion order in both directions; a derive through an intermediate map
// would lose the order that column derivation depends on.

impl Serialize for Row {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.cells.len()))?;
		for (column, value) in &self.cells {
			map.serialize_entry(column, value)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for Row {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct RowVisitor;

		impl<'de> Visitor<'de> for RowVisitor {
			type Value = Row;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a map of column names to cell values")
			}

			fn visit_map<A>(self, mut access: A) -> Result<Row, A::Error>
			where
				A: MapAccess<'de>,
			{
				let mut cells = Vec::with_capacity(access.size_hint().unwrap_or(0));
				while let Some((column, value)) = access.next_entry::<String, Value>()? {
					cells.push((column, value));
				}
				Ok(Row { cells })
			}
		}

		deserializer.deserialize_map(RowVisitor)
	}
}
