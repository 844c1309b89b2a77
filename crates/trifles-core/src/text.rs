//! Word capitalisation.
//!
//! A word starts at the beginning of the string or right after any
//! non-alphanumeric character, so hyphens and punctuation split words just
//! like whitespace does.

use serde_json::Value;

use crate::{
  Result,
  error::{Error, json_type_name},
};

/// Uppercase the first character of every word in `text`.
///
/// The remainder of each word is left as-is and every delimiter is copied
/// verbatim. The output always has the same number of `char`s as the input.
///
/// ```
/// use trifles_core::capitalize_words;
///
/// assert_eq!(
///   capitalize_words("hello-world! this is a test."),
///   "Hello-World! This Is A Test."
/// );
/// ```
pub fn capitalize_words(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut at_word_start = true;

  for c in text.chars() {
    let is_word_char = c.is_alphanumeric();
    if at_word_start && is_word_char {
      out.push(to_upper_single(c));
    } else {
      out.push(c);
    }
    at_word_start = !is_word_char;
  }

  tracing::trace!(len = text.len(), "capitalized words");
  out
}

/// [`capitalize_words`] over a dynamic value. Only JSON strings are accepted;
/// anything else is rejected rather than coerced.
pub fn capitalize_value(value: &Value) -> Result<String> {
  match value {
    Value::String(s) => Ok(capitalize_words(s)),
    other => Err(Error::InvalidArgument {
      expected: "string",
      found:    json_type_name(other),
    }),
  }
}

/// Uppercase mapping of `c` when it is a single `char`; otherwise `c` itself
/// (e.g. `ß` would expand to `SS`).
fn to_upper_single(c: char) -> char {
  let mut upper = c.to_uppercase();
  match (upper.next(), upper.next()) {
    (Some(u), None) => u,
    _ => c,
  }
}
