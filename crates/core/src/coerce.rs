//! Literal coercion for passthrough option values.
//!
//! Values are coerced through a closed set of literal forms; nothing is
//! evaluated. In order:
//!
//! 1. `true` / `false` (any case) → boolean
//! 2. `null` → null
//! 3. integer → number
//! 4. finite float → number
//! 5. JSON array, object, or double-quoted string → that JSON value
//! 6. single-quoted string → its contents
//! 7. anything else without brackets, quotes, or backslashes → plain string

use serde_json::Value;

/// Characters that only make sense inside a structured literal.
const STRUCTURAL: &[char] = &['{', '}', '[', ']', '(', ')', '"', '\'', '`', '\\'];

/// Coerces a raw option value into a settings value.
///
/// # Errors
///
/// Returns a reason string when the value looks like a structured literal
/// but does not parse as one.
pub fn coerce_value(raw: &str) -> Result<Value, String> {
	let raw = raw.trim();

	if let Some(b) = parse_bool(raw) {
		return Ok(Value::Bool(b));
	}
	if raw == "null" {
		return Ok(Value::Null);
	}
	if let Ok(int) = parse_int(raw) {
		return Ok(Value::from(int));
	}
	if let Some(float) = parse_float(raw) {
		return Ok(Value::from(float));
	}
	if raw.starts_with(['[', '{', '"']) {
		return serde_json::from_str(raw).map_err(|e| format!("invalid literal: {e}"));
	}
	if let Some(inner) = raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\''))
		&& !inner.contains('\'')
	{
		return Ok(Value::String(inner.to_string()));
	}
	if let Some(c) = raw.chars().find(|c| STRUCTURAL.contains(c)) {
		return Err(format!("unsupported literal syntax '{c}'"));
	}

	Ok(Value::String(raw.to_string()))
}

/// Parses `true`/`false`, ignoring case.
pub fn parse_bool(value: &str) -> Option<bool> {
	match value.to_lowercase().as_str() {
		"true" => Some(true),
		"false" => Some(false),
		_ => None,
	}
}

/// Parse an integer value.
pub fn parse_int(value: &str) -> Result<i64, String> {
	value
		.parse::<i64>()
		.map_err(|_| format!("invalid integer: '{value}'"))
}

/// Parses a finite float; `inf` and `nan` spellings are not numbers here.
fn parse_float(value: &str) -> Option<f64> {
	if !value.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.')) {
		return None;
	}
	value.parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	use super::*;

	#[rstest]
	#[case("true", json!(true))]
	#[case("FALSE", json!(false))]
	#[case("null", Value::Null)]
	#[case("42", json!(42))]
	#[case("-7", json!(-7))]
	#[case("2.5", json!(2.5))]
	#[case(".5", json!(0.5))]
	#[case("[80, 100]", json!([80, 100]))]
	#[case(r#"{"a": 1}"#, json!({"a": 1}))]
	#[case(r#""quoted""#, json!("quoted"))]
	#[case("'single'", json!("single"))]
	#[case("monokai", json!("monokai"))]
	#[case("inf", json!("inf"))]
	#[case("nan", json!("nan"))]
	#[case("  padded  ", json!("padded"))]
	fn test_coerce(#[case] raw: &str, #[case] expected: Value) {
		assert_eq!(coerce_value(raw), Ok(expected));
	}

	#[rstest]
	#[case("{bad")]
	#[case("[1, 2")]
	#[case(r#""unterminated"#)]
	#[case("__import__('os')")]
	#[case("a\\b")]
	#[case("'it's'")]
	fn test_coerce_rejects(#[case] raw: &str) {
		assert!(coerce_value(raw).is_err(), "{raw} should not coerce");
	}

	#[test]
	fn test_parse_int_message() {
		assert_eq!(parse_int("four"), Err("invalid integer: 'four'".to_string()));
	}
}
