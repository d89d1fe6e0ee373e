//! Parsing of the `Diffuse` color tuple.
//!
//! Capture tools dump the color as text such as `R8G8B8A8_UNORM(255, 0x80, 12, 0)`
//! where the four tokens are in alpha, red, green, blue order.

use crate::error::ConvertError;
use crate::schema::COLOR;
use std::str::FromStr;

/// A four channel color in output (RGBA) order.
///
/// Channels are not clamped to `0..=255`; whatever the dump contains is passed through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub alpha: i32,
}

impl Color {
    pub fn new(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse an `...(<alpha>, <red>, <green>, <blue>)` tuple.
    ///
    /// Any prefix before the parenthesized group is accepted, as is anything after it.
    /// The last `(` that opens a well-formed four token group is used.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let [alpha, red, green, blue] =
            find_tuple(text).ok_or_else(|| ConvertError::MalformedColor {
                row: 0,
                value: text.to_string(),
            })?;

        Ok(Self {
            red: parse_channel(red)?,
            green: parse_channel(green)?,
            blue: parse_channel(blue)?,
            alpha: parse_channel(alpha)?,
        })
    }
}

impl FromStr for Color {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn find_tuple(text: &str) -> Option<[&str; 4]> {
    text.rmatch_indices('(')
        .find_map(|(open, _)| tuple_at(&text[open + 1..]))
}

/// Split `a, b, c, d)...` into its four tokens.
fn tuple_at(rest: &str) -> Option<[&str; 4]> {
    let close = rest.find(')')?;
    let mut tokens = [""; 4];
    let mut parts = rest[..close].split(',');

    for slot in tokens.iter_mut() {
        let token = parts.next()?.trim();
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return None;
        }
        *slot = token;
    }

    if parts.next().is_some() {
        return None;
    }
    Some(tokens)
}

/// Decimal or `0x`-prefixed hexadecimal integer.
fn parse_channel(token: &str) -> Result<i32, ConvertError> {
    let hex = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"));

    let parsed = match hex {
        // Hex literals are bit patterns, so 0xFFFFFFFF is -1 like a 32-bit int.
        Some(digits) => u32::from_str_radix(digits, 16).map(|v| v as i32).ok(),
        None => token.parse::<i32>().ok(),
    };

    parsed.ok_or_else(|| ConvertError::InvalidInteger {
        row: 0,
        field: COLOR.to_string(),
        value: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reorders_argb_to_rgba() {
        let color = Color::parse("foo(10, 20, 30, 40)").unwrap();
        assert_eq!(color, Color::new(20, 30, 40, 10));
    }

    #[test]
    fn test_parse_hex_and_decimal_mix() {
        let color: Color = "R8G8B8A8_UNORM(0xFF, 0x80, 12, 0X0a)".parse().unwrap();
        assert_eq!(color, Color::new(128, 12, 10, 255));
    }

    #[test]
    fn test_parse_whitespace_around_commas() {
        let color = Color::parse("(1,2 ,  3,4)").unwrap();
        assert_eq!(color, Color::new(2, 3, 4, 1));
    }

    #[test]
    fn test_parse_values_are_not_clamped() {
        let color = Color::parse("(300, -1, 0x1FF, 0)").unwrap();
        assert_eq!(color, Color::new(-1, 511, 0, 300));
    }

    #[test]
    fn test_parse_skips_non_tuple_parentheses() {
        let color = Color::parse("float4(x) (1, 2, 3, 4)").unwrap();
        assert_eq!(color, Color::new(2, 3, 4, 1));
    }

    #[test]
    fn test_parse_last_tuple_wins() {
        let color = Color::parse("a(1, 2, 3, 4) b(10, 20, 30, 40)").unwrap();
        assert_eq!(color, Color::new(20, 30, 40, 10));
    }

    #[test]
    fn test_parse_falls_back_past_trailing_junk() {
        let color = Color::parse("(1, 2, 3, 4) (unused)").unwrap();
        assert_eq!(color, Color::new(2, 3, 4, 1));
    }

    #[test]
    fn test_parse_wrong_shape_is_malformed() {
        for text in ["", "1, 2, 3, 4", "(1, 2, 3)", "(1, 2, 3, 4, 5)", "(1, 2, 3, 4", "(1,, 3, 4)"] {
            assert!(
                matches!(Color::parse(text), Err(ConvertError::MalformedColor { .. })),
                "expected malformed for {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_bad_token_is_invalid_integer() {
        match Color::parse("(1, 2x, 3, 4)") {
            Err(ConvertError::InvalidInteger { field, value, .. }) => {
                assert_eq!(field, "Diffuse");
                assert_eq!(value, "2x");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            Color::parse("(0xZZ, 2, 3, 4)"),
            Err(ConvertError::InvalidInteger { .. })
        ));
    }
}
