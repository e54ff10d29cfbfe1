//! HTML fragment generation: head, body, pager footer, export menu.

use crate::html::{escape, fill};
use crate::options::TableOptions;
use crate::row::Row;

/// Pager footer placed between `<thead>` and `<tbody>`. The page-number
/// select stays empty; the pager widget populates it client-side.
const PAGER_FOOTER: &str = r#"
<tfoot>
    <tr>
      <th colspan="{colspan}" class="ts-pager form-inline">
        <div class="btn-group btn-group-sm" role="group">
          <button type="button" class="btn btn-default first"><span class="glyphicon glyphicon-step-backward"></span></button>
          <button type="button" class="btn btn-default prev"><span class="glyphicon glyphicon-backward"></span></button>
        </div>
        <span class="pagedisplay"></span>
        <div class="btn-group btn-group-sm" role="group">
          <button type="button" class="btn btn-default next"><span class="glyphicon glyphicon-forward"></span></button>
          <button type="button" class="btn btn-default last"><span class="glyphicon glyphicon-step-forward"></span></button>
        </div>
        <select class="form-control input-sm pagesize" title="Select page size">
          <option value="5">5</option>
          <option selected="selected" value="10">10</option>
          <option value="20">20</option>
          <option value="30">30</option>
          <option value="all">All Rows</option>
        </select>
        <select class="form-control input-sm pagenum" title="Select page number"></select>
      </th>
    </tr>
</tfoot>"#;

/// Export / save button and its options dropdown. `{container}` is the
/// table's container class so the all-pages shortcut drives the right
/// pager when several tables share a page.
const EXPORT_MENU: &str = r#"
    <button type="button" class="btn btn-default download"><i class="fa fa-download"></i> Export / Save</button>
    <button type="button" class="btn btn-default dropdown-toggle" data-toggle="dropdown">
        <span class="caret"></span>
        <span class="sr-only">Toggle Dropdown</span>
    </button>
    <ul class="dropdown-menu save-menu" role="menu" style="min-width: 20em; padding: .25em">
        <li>
            <h5><span class="sectionTitle2">Output Options</span></h5>
        </li>
        <li>
            <label>Column Separator: <input class="output-separator-input" size="2" value="," type="text"></label>
            <p class="well well-sm">
                <button type="button" class="output-separator btn btn-default btn-xs active" title="comma">,</button>
                <button type="button" class="output-separator btn btn-default btn-xs" title="semi-colon">;</button>
                <button type="button" class="output-separator btn btn-default btn-xs" title="tab">Tab</button>
                <button type="button" class="output-separator btn btn-default btn-xs" title="space">Space</button>
                <button type="button" class="output-separator btn btn-default btn-xs" title="output JSON">json</button>
                <button type="button" class="output-separator btn btn-default btn-xs" title="output Array (see note)">array</button>
            </p>
        </li>
        <li>
            <h5>Output Type</h5>
            <div class="btn-group output-download-popup" data-toggle="buttons" title="Download file or open in Popup window">
                <label class="btn btn-default btn-sm active">
                    <input name="delivery1" class="output-popup" checked="" type="radio"> Text Popup
                </label>
                <label class="btn btn-default btn-sm">
                    <input name="delivery1" class="output-download" type="radio"> Spreadsheet
                </label>
            </div>
        </li>
        <li>
            <label>Include:</label><br>
            <div class="btn-group output-filter-all" data-toggle="buttons" title="Output only filtered, visible, selected, selected+visible or all rows">
                <label class="btn btn-default btn-sm active">
                    <input name="getrows1" class="output-filter" checked="checked" type="radio"> This Page
                </label>
                <label class="btn btn-default btn-sm">
                    <input name="getrows1" class="output-all" type="radio" onclick='$(".{container} .pagesize").val("all").trigger("change");'> All Pages
                </label>
            </div>
        </li>
        <li>
            <button class="output-header btn btn-default btn-sm active" title="Include table header">Header</button>
            <button class="output-footer btn btn-default btn-sm" title="Include table footer">Footer</button>
        </li>
        <li class="divider"></li>
        <li>
            <label>Replace quotes: <input class="output-replacequotes" size="2" value="'" type="text"></label>
            <button type="button" class="output-quotes btn btn-default btn-xs active" title="single quote">'</button>
            <button type="button" class="output-quotes btn btn-default btn-xs" title="left double quote">&#8220;</button>
            <button type="button" class="output-quotes btn btn-default btn-xs" title="escaped quote">\"</button>
        </li>
        <li><label title="Remove extra white space from each cell">Trim spaces: <input class="output-trim" checked="" type="checkbox"></label></li>
        <li><label title="Include HTML from cells in output">Include HTML: <input class="output-html" type="checkbox"></label></li>
        <li><label title="Wrap all values in quotes">Wrap in Quotes: <input class="output-wrap" type="checkbox"></label></li>
        <li><label title="Choose a download filename">Filename: <input class="output-filename form-control" size="15" value="mytable.csv" type="text"></label></li>
    </ul>
"#;

/// Stylesheet and script tags a page needs before the rendered table works.
///
/// This is a get-started helper; serve the assets from wherever suits the
/// deployment and drop this fragment into the page `<head>`.
const RESOURCE_LINKS: &str = r#"<link href="resources/css/theme.bootstrap.css" rel="stylesheet" />
<script src="resources/js/jquery.tablesorter.min.js"></script>
<script src="resources/js/jquery.tablesorter.widgets.min.js"></script>
<link href="resources/css/jquery.tablesorter.pager.css" rel="stylesheet" />
<script src="resources/js/jquery.tablesorter.pager.min.js"></script>
<script src="resources/js/parser-input-select.min.js"></script>
<script src="resources/js/widget-output.min.js"></script>"#;

/// Returns the stylesheet/script tags the rendered table depends on.
pub fn resource_links() -> &'static str {
	RESOURCE_LINKS
}

/// Builds the `<th>` cells for every non-hidden column.
pub(crate) fn head_html(columns: &[String], options: &TableOptions) -> String {
	columns
		.iter()
		.filter(|column| !options.is_hidden(column))
		.map(|column| match popover_attrs(column, options) {
			Some(attrs) => format!("<th {}>{}</th>", attrs, column),
			None => format!("<th>{}</th>", column),
		})
		.collect::<Vec<_>>()
		.join("")
}

/// Builds the hover/popover data attributes for a column header, if the
/// column has popover metadata configured.
fn popover_attrs(column: &str, options: &TableOptions) -> Option<String> {
	let popover = options.popovers.get(column)?;

	let title = popover
		.title
		.as_deref()
		.filter(|title| !title.is_empty())
		.unwrap_or(column);
	let content = popover.content.as_deref().unwrap_or("");
	let placement = popover
		.placement
		.as_deref()
		.unwrap_or(&options.popover_placement);

	Some(format!(
		"data-toggle=\"popover\" data-placement=\"{}\" title=\"{}\" data-content=\"{}\" \
		 data-trigger=\"hover\" data-container=\"body\" data-html=\"{}\"",
		placement,
		escape(title),
		escape(content),
		popover.html,
	))
}

/// Builds the `<tr>` rows for the table body.
///
/// Cells follow column order, not row key order, so rows with missing or
/// extra keys still line up under the right headers. Cell text passes
/// through unescaped unless [`TableOptions::escape_cells`] is set.
pub(crate) fn body_html(rows: &[Row], columns: &[String], options: &TableOptions) -> String {
	rows.iter()
		.map(|row| {
			let cells = columns
				.iter()
				.filter(|column| !options.is_hidden(column))
				.map(|column| {
					let text = row.text(column);
					if options.escape_cells {
						format!("<td>{}</td>", escape(&text))
					} else {
						format!("<td>{}</td>", text)
					}
				})
				.collect::<Vec<_>>()
				.join("");
			format!("<tr>{}</tr>\n", cells)
		})
		.collect::<Vec<_>>()
		.join("")
}

/// Builds the pager footer with the colspan covering the visible columns.
pub(crate) fn pager_footer(visible_columns: usize) -> String {
	fill(PAGER_FOOTER, &[("colspan", &visible_columns.to_string())])
}

/// Builds the export menu scoped to the table's container class.
pub(crate) fn export_menu(container_class: &str) -> String {
	fill(EXPORT_MENU, &[("container", container_class)])
}
