//! Low-level nom parser functions for configuration directive values.
//!
//! Every directive value arrives as a raw string (`// font_size_item = 9`).
//! These parsers turn it into the typed value its option expects.

use crate::dimension::PageSize;
use crate::font::StandardFont;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{map_opt, map_res, opt, recognize, value};
use nom::sequence::{delimited, pair, separated_pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur while parsing a directive value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueParseError {
    #[error("Parse error: {0}")]
    Parse(String),
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(72.0, tag_no_case("in")),
        value(72.0 / 2.54, tag_no_case("cm")),
        value(72.0 / 25.4, tag_no_case("mm")),
    ))
    .parse(input)
}

// --- Value Parsers ---

/// Parses a length with an optional unit (e.g. "12", "12pt", "10mm", "0.5in")
/// and returns it in points.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_f32(input)?;
    let (input, unit) = opt(delimited(space0, parse_unit, space0)).parse(input)?;
    Ok((input, number * unit.unwrap_or(1.0)))
}

/// Parses a grey level in `0..=255`. Fractional values are rounded.
pub fn parse_gray_level(input: &str) -> IResult<&str, u8> {
    map_opt(parse_f32, |v| {
        if (0.0..=255.0).contains(&v) {
            Some(v.round() as u8)
        } else {
            None
        }
    })
    .parse(input)
}

/// Parses a boolean flag. Accepts true/false, yes/no, on/off and 1/0.
pub fn parse_flag(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, tag_no_case("true")),
        value(false, tag_no_case("false")),
        value(true, tag_no_case("yes")),
        value(false, tag_no_case("no")),
        value(true, tag_no_case("on")),
        value(false, tag_no_case("off")),
        value(true, char('1')),
        value(false, char('0')),
    ))
    .parse(input)
}

/// Parses a page size: a known name (`A5`, `letter`) or `<width> x <height>`.
pub fn parse_page_size(input: &str) -> IResult<&str, PageSize> {
    alt((
        map_opt(take_while1(|c: char| c.is_ascii_alphanumeric()), PageSize::from_name),
        map_opt(
            separated_pair(parse_length, delimited(space0, char('x'), space0), parse_length),
            |(width, height)| {
                if width > 0.0 && height > 0.0 {
                    Some(PageSize::Custom { width, height })
                } else {
                    None
                }
            },
        ),
    ))
    .parse(input)
}

/// Parses the PostScript name of one of the standard fonts.
pub fn parse_standard_font(input: &str) -> IResult<&str, StandardFont> {
    map_opt(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
        StandardFont::from_name,
    )
    .parse(input)
}

/// Helper to run a nom parser over the whole (trimmed) input and convert
/// its result to a `Result<T, ValueParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, ValueParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(ValueParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(ValueParseError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(run_parser(parse_length, "12pt").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, " 1in ").unwrap(), 72.0);
        assert!((run_parser(parse_length, "10mm").unwrap() - 28.3465).abs() < 0.001);
        assert_eq!(run_parser(parse_length, "10").unwrap(), 10.0);
        assert_eq!(run_parser(parse_length, "2.5").unwrap(), 2.5);
        assert!(run_parser(parse_length, "abc").is_err());
        assert!(run_parser(parse_length, "10 parsecs").is_err());
    }

    #[test]
    fn test_parse_gray_level() {
        assert_eq!(run_parser(parse_gray_level, "211").unwrap(), 211);
        assert_eq!(run_parser(parse_gray_level, "211.0").unwrap(), 211);
        assert!(run_parser(parse_gray_level, "256").is_err());
        assert!(run_parser(parse_gray_level, "-1").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(run_parser(parse_flag, "TRUE").unwrap());
        assert!(!run_parser(parse_flag, "off").unwrap());
        assert!(run_parser(parse_flag, "1").unwrap());
        assert!(run_parser(parse_flag, "maybe").is_err());
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(run_parser(parse_page_size, "A5").unwrap(), PageSize::A5);
        assert_eq!(run_parser(parse_page_size, "letter").unwrap(), PageSize::Letter);
        assert_eq!(
            run_parser(parse_page_size, "300 x 400").unwrap(),
            PageSize::Custom { width: 300.0, height: 400.0 }
        );
        assert!(run_parser(parse_page_size, "B7").is_err());
        assert!(run_parser(parse_page_size, "0x400").is_err());
    }

    #[test]
    fn test_parse_standard_font() {
        assert_eq!(
            run_parser(parse_standard_font, "Helvetica-Bold").unwrap(),
            StandardFont::HelveticaBold
        );
        assert!(run_parser(parse_standard_font, "Wingdings").is_err());
    }
}
