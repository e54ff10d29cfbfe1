//! Client-side configuration script generation.
//!
//! Everything here is text assembly: the emitted `<script>` block invokes
//! the tablesorter initialization API on the rendered table and appends the
//! pager, export, and popover wiring the selected widgets need. The actual
//! sorting/filtering/paging/export logic runs in the browser, not here.

use crate::html::fill;
use crate::options::{TableOptions, Widget};

const SCRIPT_TEMPLATE: &str = r##"<script>
    $('#{table_id}').tablesorter({
        theme: "{theme}",

        widgets: [ {widgets} ],

        widgetOptions: {
            filter_reset : ".reset",
            filter_cssFilter: "form-control",
{output_options}
        }
    }){pager_code};
{output_handlers}
{popover_code}
</script>
"##;

/// Pager call appended to the initialization chain. The `{page}`-style
/// patterns in the output string are consumed by the pager widget itself.
const PAGER_CODE: &str = r##"
       .tablesorterPager({

    size: 10,

    // target the pager markup - see the table footer
    container: $("#{table_id} .ts-pager"),

    // target the pager page select dropdown - choose a page
    cssGoto  : ".pagenum",

    // setting this to false only hides non-visible rows; needed if rows
    // are added or removed while the pager is enabled
    removeRows: false,

    // possible variables: {page}, {totalPages}, {filteredPages},
    // {startRow}, {endRow}, {filteredRows} and {totalRows}
    output: '{startRow} - {endRow} / {filteredRows} ({totalRows})'

  })"##;

const OUTPUT_OPTIONS: &str = r##"
            output_separator     : ',',         // ',' 'json', 'array' or separator (e.g. ';')
            output_hiddenColumns : false,       // include hidden columns in the output
            output_includeFooter : false,       // include footer rows in the output
            output_includeHeader : true,        // include header rows in the output
            output_headerRows    : false,       // output all header rows (if multiple rows)
            output_dataAttrib    : 'data-name', // data-attribute containing alternate cell text
            output_delivery      : 'p',         // (p)opup, (d)ownload
            output_saveRows      : 'f',         // (a)ll, (v)isible, (f)iltered, jQuery filter selector or filter function
            output_duplicateSpans: true,        // duplicate output data in tbody colspan/rowspan
            output_replaceQuote  : '“',    // change quote to left double quote
            output_includeHTML   : false,       // output includes all cell HTML (except the header cells)
            output_trimSpaces    : true,        // remove extra white-space characters from beginning & end
            output_wrapQuotes    : true,        // wrap every cell output in quotes
            output_popupStyle    : 'width=580,height=310',
            output_saveFileName  : 'mytable.csv',
            // callback executed after the content of the table has been processed
            output_formatContent : function(config, widgetOptions, data) {
                return data.content;
            },
            // return false to stop delivery & handle the data elsewhere
            output_callback      : function(config, data, url) {
                return true;
            },
            // used when outputting JSON & any header cell has a colspan - unique names required
            output_callbackJSON  : function($cell, txt, cellIndex) {
                return txt + '(' + cellIndex + ')';
            },
            output_encoding      : 'data:application/octet-stream;charset=utf8,',
            // hook for an external save plugin such as FileSaver.js
            output_savePlugin    : null"##;

/// Interactive wiring for the export menu, scoped to the table container so
/// several tables can carry their own menus on one page.
const OUTPUT_HANDLERS: &str = r##"
    (function() {
        var $container = $(".sortTable-{table_id}");

        $container.find('.dropdown-toggle').click(function(e) {
            // clicking inside the dropdown would otherwise close the menu
            $container.find('.dropdown-menu').toggle();
            return false;
        });
        // separator & replace-quotes buttons update the value
        $container.find('.output-separator').click(function() {
            $container.find('.output-separator').removeClass('active');
            var txt = $(this).addClass('active').html();
            $container.find('.output-separator-input').val( txt );
            $container.find('.output-filename').val(function(i, v) {
                // change filename extension based on separator
                var filetype = (txt === 'json' || txt === 'array') ? 'js' :
                    txt === ',' ? 'csv' : 'txt';
                return v.replace(/\.\w+$/, '.' + filetype);
            });
            return false;
        });
        $container.find('.output-quotes').click(function() {
            $container.find('.output-quotes').removeClass('active');
            $container.find('.output-replacequotes').val( $(this).addClass('active').text() );
            return false;
        });
        // header/footer toggle buttons
        $container.find('.output-header, .output-footer').click(function() {
            $(this).toggleClass('active');
        });
        // the download button only needs to trigger an "output" event on the table
        $container.find('.download').click(function() {
            var $table = $container.find('table'),
                wo = $table[0].config.widgetOptions,
                val = $container.find('.output-filter-all :checked').attr('class');
            wo.output_saveRows     = val === 'output-filter' ? 'f' :
                val === 'output-visible' ? 'v' :
                    val === 'output-selected' ? '.checked' :
                        val === 'output-sel-vis' ? '.checked:visible' :
                            'a';
            val = $container.find('.output-download-popup :checked').attr('class');
            wo.output_delivery     = val === 'output-download' ? 'd' : 'p';
            wo.output_separator    = $container.find('.output-separator-input').val();
            wo.output_replaceQuote = $container.find('.output-replacequotes').val();
            wo.output_trimSpaces   = $container.find('.output-trim').is(':checked');
            wo.output_includeHTML  = $container.find('.output-html').is(':checked');
            wo.output_wrapQuotes   = $container.find('.output-wrap').is(':checked');
            wo.output_saveFileName = $container.find('.output-filename').val();
            wo.output_includeHeader = $container.find('button.output-header').is(".active");
            wo.output_includeFooter = $container.find('button.output-footer').is(".active");

            $table.trigger('outputTable');
            return false;
        });
    })();"##;

const POPOVER_ACTIVATION: &str =
	r##"
    $(function () {  $('#{table_id} [data-toggle="popover"]').popover() });"##;

/// Assembles the full `<script>` block for a rendered table.
pub(crate) fn script_html(table_id: &str, options: &TableOptions) -> String {
	let widgets = options
		.widgets
		.iter()
		.map(|widget| format!("\"{}\"", widget.as_str()))
		.collect::<Vec<_>>()
		.join(", ");

	let pager_code = if options.has_widget(&Widget::Pager) {
		fill(PAGER_CODE, &[("table_id", table_id)])
	} else {
		String::new()
	};

	let (output_options, output_handlers) = if options.has_widget(&Widget::Output) {
		(
			OUTPUT_OPTIONS.to_string(),
			fill(OUTPUT_HANDLERS, &[("table_id", table_id)]),
		)
	} else {
		(String::new(), String::new())
	};

	let popover_code = if options.popovers.is_empty() {
		String::new()
	} else {
		fill(POPOVER_ACTIVATION, &[("table_id", table_id)])
	};

	fill(
		SCRIPT_TEMPLATE,
		&[
			("table_id", table_id),
			("theme", &options.theme),
			("widgets", &widgets),
			("output_options", &output_options),
			("pager_code", &pager_code),
			("output_handlers", &output_handlers),
			("popover_code", &popover_code),
		],
	)
}
