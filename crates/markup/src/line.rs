//! Classification of single markup lines.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::value;
use nom::sequence::terminated;
use nom::{IResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Directive,
    Section,
    BoldExcluded,
    BoldEnumerated,
    Item,
    SubItem,
    Centered,
}

/// What a trimmed line asks the parser to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Directive { key: &'a str, value: &'a str },
    BadDirective(&'a str),
    Section(&'a str),
    Item { left: Option<&'a str>, right: Option<&'a str> },
    SubItem { left: Option<&'a str>, right: Option<&'a str> },
    BoldSubItem { text: &'a str, enumerated: bool },
    Centered(&'a str),
    Ignored,
}

// `**` must be tried before `*`.
fn prefix(input: &str) -> IResult<&str, Prefix> {
    alt((
        value(Prefix::Directive, tag("//")),
        value(Prefix::Section, tag("#")),
        value(Prefix::BoldExcluded, tag("**")),
        value(Prefix::BoldEnumerated, tag("*")),
        value(Prefix::Item, tag("-")),
        value(Prefix::SubItem, tag("+")),
        value(Prefix::Centered, tag("=")),
    ))
    .parse(input)
}

/// Splits at the first occurrence of `separator`, dropping it.
fn split_once_on<'a>(input: &'a str, separator: &'static str) -> IResult<&'a str, &'a str> {
    terminated(take_until(separator), tag(separator)).parse(input)
}

fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// `left..right`, `left` or `..right`.
fn row_texts(body: &str) -> (Option<&str>, Option<&str>) {
    match split_once_on(body, "..") {
        Ok((right, left)) => (non_empty(left), non_empty(right)),
        Err(_) => (non_empty(body), None),
    }
}

fn directive(body: &str) -> Line<'_> {
    match split_once_on(body, "=") {
        Ok((value, key)) => Line::Directive {
            key: key.trim(),
            value: value.trim(),
        },
        Err(_) => Line::BadDirective(body.trim()),
    }
}

pub(crate) fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    let Ok((body, prefix)) = prefix(line) else {
        return Line::Ignored;
    };
    match prefix {
        Prefix::Directive => directive(body),
        Prefix::Section => Line::Section(body.trim()),
        Prefix::BoldExcluded => Line::BoldSubItem {
            text: body.trim(),
            enumerated: false,
        },
        Prefix::BoldEnumerated => Line::BoldSubItem {
            text: body.trim(),
            enumerated: true,
        },
        Prefix::Item => {
            let (left, right) = row_texts(body);
            Line::Item { left, right }
        }
        Prefix::SubItem => {
            let (left, right) = row_texts(body);
            Line::SubItem { left, right }
        }
        Prefix::Centered => Line::Centered(body.trim()),
    }
}
