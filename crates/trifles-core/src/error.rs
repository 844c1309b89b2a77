//! Error types for `trifles-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A dynamic (JSON) input had the wrong type.
  #[error("invalid argument: expected {expected}, found {found}")]
  InvalidArgument {
    expected: &'static str,
    found:    &'static str,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The JSON type name of `value`, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
  match value {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "boolean",
    serde_json::Value::Number(_) => "number",
    serde_json::Value::String(_) => "string",
    serde_json::Value::Array(_) => "array",
    serde_json::Value::Object(_) => "object",
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn invalid_argument_message_names_both_types() {
    let err = Error::InvalidArgument {
      expected: "string",
      found:    json_type_name(&json!([1, 2])),
    };
    assert_eq!(
      err.to_string(),
      "invalid argument: expected string, found array"
    );
  }

  #[test]
  fn type_names_cover_every_variant() {
    assert_eq!(json_type_name(&json!(null)), "null");
    assert_eq!(json_type_name(&json!(true)), "boolean");
    assert_eq!(json_type_name(&json!(1.5)), "number");
    assert_eq!(json_type_name(&json!("x")), "string");
    assert_eq!(json_type_name(&json!({})), "object");
  }
}
