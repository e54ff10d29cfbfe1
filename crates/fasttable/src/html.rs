//! HTML helpers shared by the markup and script generators.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. Returns a
/// borrowed reference if no escaping is needed, or an owned string if any
/// characters were escaped.
pub(crate) fn escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for ch in s.chars() {
			match ch {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(ch),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Substitutes `{key}` placeholders in a fragment template.
///
/// Values are inserted verbatim. The templates this is applied to are
/// trusted constants in this crate; placeholder keys not present in `args`
/// (such as the `{page}`/`{totalRows}` patterns the pager widget consumes
/// at runtime) are left untouched.
pub(crate) fn fill(template: &str, args: &[(&str, &str)]) -> String {
	let mut result = template.to_string();
	for (key, value) in args {
		let placeholder = format!("{{{}}}", key);
		result = result.replace(&placeholder, value);
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_no_special_chars() {
		assert_eq!(escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[test]
	fn test_escape_ampersand() {
		assert_eq!(
			escape("a & b"),
			Cow::<str>::Owned("a &amp; b".to_string())
		);
	}

	#[test]
	fn test_escape_angle_brackets() {
		assert_eq!(
			escape("<div>"),
			Cow::<str>::Owned("&lt;div&gt;".to_string())
		);
	}

	#[test]
	fn test_escape_quotes() {
		assert_eq!(
			escape("\"test\" 'value'"),
			Cow::<str>::Owned("&quot;test&quot; &#x27;value&#x27;".to_string())
		);
	}

	#[test]
	fn test_escape_empty_string() {
		assert_eq!(escape(""), "");
	}

	#[test]
	fn test_escape_multibyte() {
		assert_eq!(escape("こんにちは<>&"), "こんにちは&lt;&gt;&amp;");
	}

	#[test]
	fn test_fill_single_placeholder() {
		assert_eq!(
			fill("<div id=\"{id}\"></div>", &[("id", "t1")]),
			"<div id=\"t1\"></div>"
		);
	}

	#[test]
	fn test_fill_repeated_placeholder() {
		assert_eq!(
			fill("{id} and {id}", &[("id", "x")]),
			"x and x"
		);
	}

	#[test]
	fn test_fill_leaves_unknown_placeholders() {
		assert_eq!(
			fill("output: '{startRow} / {id}'", &[("id", "t1")]),
			"output: '{startRow} / t1'"
		);
	}

	#[test]
	fn test_fill_no_args() {
		let args: [(&str, &str); 0] = [];
		assert_eq!(fill("{literal}", &args), "{literal}");
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_output_has_no_special_chars(s in "\\PC*") {
			let escaped = escape(&s);
			assert!(!escaped.contains('<'));
			assert!(!escaped.contains('>'));
			assert!(!escaped.contains('"'));
			assert!(!escaped.contains('\''));
		}

		#[test]
		fn prop_escape_clean_input_borrows(s in "[^<>&\"']*") {
			let escaped = escape(&s);
			assert_eq!(escaped, s);
			assert!(matches!(escaped, Cow::Borrowed(_)));
		}

		#[test]
		fn prop_escape_never_shrinks(s in "\\PC*") {
			assert!(escape(&s).len() >= s.len());
		}

		#[test]
		fn prop_fill_without_args_is_identity(template in "\\PC*") {
			let args: [(&str, &str); 0] = [];
			assert_eq!(fill(&template, &args), template);
		}
	}
}
