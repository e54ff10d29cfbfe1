//! Server-rendered data tables for Reinhardt-style web apps, backed by
//! jQuery tablesorter.
//!
//! This crate turns rows of key-value records into an HTML table fragment
//! plus the `<script>` block that activates tablesorter widgets (sorting,
//! filtering, paging, column visibility, export) on it. All of the actual
//! sort/filter/page/export logic runs client-side in the widget library;
//! this crate is the generator for the markup and configuration it
//! consumes.
//!
//! # Features
//!
//! - **Row ingestion**: ordered key-value rows, column set derived from the
//!   first row ([`FastTable::load_rows`])
//! - **Typed configuration**: widget selection, hidden columns, header
//!   popovers, themes ([`TableOptions`])
//! - **Markup generation**: head/body/pager/export-menu fragments with
//!   page-unique table ids ([`FastTable::render_markup`])
//! - **Script generation**: tablesorter initialization plus pager, export,
//!   and popover wiring ([`FastTable::render_script`])
//!
//! # Example
//!
//! ```
//! use fasttable::{FastTable, Popover, Row, TableOptions};
//!
//! let options = TableOptions::new()
//!     .with_popover("Animal", Popover::new().with_title("Type of Animal"));
//!
//! let mut table = FastTable::with_options(options);
//! table.load_rows(vec![
//!     Row::from_iter([("Animal", "Dog"), ("Color", "Brown")]),
//!     Row::from_iter([("Animal", "Cat"), ("Color", "Black")]),
//! ])?;
//!
//! let markup = table.render_markup(None);
//! let script = table.render_script(&markup.table_id);
//!
//! // Embed `markup.html` in the page body and `script` after it.
//! assert!(markup.html.contains("<th "));
//! assert!(script.starts_with("<script>"));
//! # Ok::<(), fasttable::TableError>(())
//! ```
//!
//! The page itself must include the tablesorter and Bootstrap assets;
//! [`resource_links`] returns the tags to get started.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod options;
pub mod row;
pub mod table;

mod html;
mod markup;
mod script;

// Re-exports for convenience
pub use error::{Result, TableError};
pub use markup::resource_links;
pub use options::{Popover, TableOptions, Widget};
pub use row::Row;
pub use table::{FastTable, RenderedMarkup, TableId};
