//! Tolerant reading of integer fields that exporters write either as
//! numbers or as strings.
//!
//! Contract of [`parse_int_field`]:
//!   • a JSON number is accepted when it is an integer that fits `i64`
//!     (`5` yes, `5.0` and `1e3` no). `-0` reads as 0; serde_json hands
//!     it over as the float `-0.0`, so that one float is let through;
//!   • a JSON string loses at most one leading and one trailing literal
//!     `"`, then the rest must be a base-10 `i64` literal. Whitespace is
//!     not trimmed.
//!
//! So `5`, `"5"` and `"\"5\""` all read as 5.

use crate::model::wire::NumberOrString;

pub fn parse_int_field(raw: &NumberOrString) -> Option<i64> {
    match raw {
        NumberOrString::Number(n) => n.as_i64().or_else(|| negative_zero(n).then_some(0)),
        NumberOrString::Text(s) => strip_quote_layer(s).parse().ok(),
    }
}

fn negative_zero(n: &serde_json::Number) -> bool {
    n.as_f64()
        .is_some_and(|f| f == 0.0 && f.is_sign_negative())
}

fn strip_quote_layer(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> NumberOrString {
        NumberOrString::Text(s.into())
    }

    fn number(json: &str) -> NumberOrString {
        NumberOrString::Number(serde_json::from_str(json).expect("number literal"))
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_int_field(&number("5")), Some(5));
        assert_eq!(parse_int_field(&number("-3")), Some(-3));
        assert_eq!(parse_int_field(&number("-0")), Some(0));
        assert_eq!(parse_int_field(&number("0.0")), None);
        assert_eq!(parse_int_field(&number("5.0")), None);
        assert_eq!(parse_int_field(&number("1e3")), None);
        assert_eq!(parse_int_field(&number("18446744073709551615")), None);
    }

    #[test]
    fn plain_strings() {
        assert_eq!(parse_int_field(&text("123")), Some(123));
        assert_eq!(parse_int_field(&text("-1")), Some(-1));
        assert_eq!(parse_int_field(&text("-0")), Some(0));
        assert_eq!(parse_int_field(&text("12.5")), None);
        assert_eq!(parse_int_field(&text("")), None);
        assert_eq!(parse_int_field(&text(" 7")), None);
        assert_eq!(parse_int_field(&text("abc")), None);
    }

    #[test]
    fn strings_outside_i64_are_rejected() {
        assert_eq!(parse_int_field(&text("9223372036854775807")), Some(i64::MAX));
        assert_eq!(parse_int_field(&text("-9223372036854775808")), Some(i64::MIN));
        assert_eq!(parse_int_field(&text("9223372036854775808")), None);
        assert_eq!(parse_int_field(&text(r#""-9223372036854775809""#)), None);
    }

    #[test]
    fn one_embedded_quote_layer_is_stripped() {
        assert_eq!(parse_int_field(&text(r#""7""#)), Some(7));
        assert_eq!(parse_int_field(&text(r#""-2""#)), Some(-2));
        assert_eq!(parse_int_field(&text(r#"""7"""#)), None);
        assert_eq!(parse_int_field(&text(r#"""#)), None);
    }
}
