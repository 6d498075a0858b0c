//! A small BibTeX reader built on `nom`.
//!
//! Supports `{}`/`()` delimited entries, braced, quoted and bare values,
//! `#` concatenation, `@string` macros and the three-letter month macros.
//! `@comment` and `@preamble` blocks are skipped, as is any `@` in free
//! text that does not open an entry.

use std::collections::{HashMap, HashSet};

use cldf_model::{BibEntry, Bibliography};
use nom::{
    IResult, Offset,
    branch::alt,
    bytes::complete::{is_not, take_while1},
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map, opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, terminated, tuple},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BibtexError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: duplicate citation key '{key}'")]
    DuplicateKey { key: String, line: usize },
}

const MONTHS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// Parse a BibTeX document into a bibliography, keeping entry order.
///
/// Citation keys are compared case-insensitively when checking for
/// duplicates, the way BibTeX itself resolves them.
pub fn parse_bibtex(input: &str) -> Result<Bibliography, BibtexError> {
    Reader::new(input.trim_start_matches('\u{feff}')).read()
}

// ============================================================================
// Grammar
// ============================================================================

/// One operand of a `#` concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Macro(&'a str),
}

type Field<'a> = (&'a str, Vec<Piece<'a>>);

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '-' | ':' | '.' | '+' | '/' | '\'')
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_identifier_char)(input)
}

/// Text with balanced braces, nested groups kept verbatim.
fn balanced(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((is_not("{}"), braced_group))))(input)
}

fn braced_group(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('{'), balanced, char('}')))(input)
}

fn paren_body(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((is_not("{})"), braced_group))))(input)
}

fn quoted_body(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((is_not("\"{}"), braced_group))))(input)
}

fn piece(input: &str) -> IResult<&str, Piece<'_>> {
    alt((
        map(delimited(char('{'), balanced, char('}')), Piece::Literal),
        map(delimited(char('"'), quoted_body, char('"')), Piece::Literal),
        map(digit1, Piece::Literal),
        map(identifier, Piece::Macro),
    ))(input)
}

fn value(input: &str) -> IResult<&str, Vec<Piece<'_>>> {
    separated_list1(tuple((multispace0, char('#'), multispace0)), piece)(input)
}

fn field(input: &str) -> IResult<&str, Field<'_>> {
    separated_pair(identifier, tuple((multispace0, char('='), multispace0)), value)(input)
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// `key, name = value, ...` with an optional trailing comma.
fn entry_body(input: &str) -> IResult<&str, (&str, Vec<Field<'_>>)> {
    let (input, _) = multispace0(input)?;
    let (input, key) = take_while1(|ch: char| ch != ',' && !ch.is_whitespace())(input)?;
    let (input, fields) = many0(preceded(comma, field))(input)?;
    let (input, _) = opt(comma)(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (key, fields)))
}

/// `@type{` or `@type(`, yielding the type and the opening delimiter.
fn entry_header(input: &str) -> IResult<&str, (&str, char)> {
    preceded(
        char('@'),
        pair(delimited(multispace0, identifier, multispace0), one_of("{(")),
    )(input)
}

/// The body up to the delimiter matching `open`, which is consumed.
fn block(input: &str, open: char) -> IResult<&str, &str> {
    if open == '{' {
        terminated(balanced, char('}'))(input)
    } else {
        terminated(paren_body, char(')'))(input)
    }
}

fn failed_at<'a>(err: nom::Err<nom::error::Error<&'a str>>, fallback: &'a str) -> &'a str {
    match err {
        nom::Err::Error(err) | nom::Err::Failure(err) => err.input,
        nom::Err::Incomplete(_) => fallback,
    }
}

// ============================================================================
// Reader
// ============================================================================

struct Reader<'a> {
    source: &'a str,
    macros: HashMap<String, String>,
}

impl<'a> Reader<'a> {
    fn new(source: &'a str) -> Self {
        let macros = MONTHS
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        Self { source, macros }
    }

    fn read(mut self) -> Result<Bibliography, BibtexError> {
        let mut bibliography = Bibliography::new();
        let mut seen = HashSet::new();
        let mut rest = self.source;
        while let Some(at) = rest.find('@') {
            rest = &rest[at..];
            let Ok((after_header, (kind, open))) = entry_header(rest) else {
                rest = &rest['@'.len_utf8()..];
                continue;
            };
            let line = self.line_at(rest);
            let (after_block, body) = block(after_header, open).map_err(|_| unterminated(line))?;
            rest = after_block;

            let kind = kind.to_lowercase();
            match kind.as_str() {
                "comment" | "preamble" => {}
                "string" => self.define_macro(body)?,
                _ => {
                    let entry = self.read_entry(&kind, body)?;
                    if !seen.insert(entry.key.to_lowercase()) {
                        return Err(BibtexError::DuplicateKey {
                            key: entry.key,
                            line,
                        });
                    }
                    bibliography.insert(entry);
                }
            }
        }
        Ok(bibliography)
    }

    fn define_macro(&mut self, body: &'a str) -> Result<(), BibtexError> {
        let (_, (name, pieces)) = all_consuming(delimited(multispace0, field, multispace0))(body)
            .map_err(|err| self.syntax(failed_at(err, body), "malformed @string definition"))?;
        let value = self.expand(&pieces)?;
        self.macros.insert(name.to_lowercase(), value);
        Ok(())
    }

    fn read_entry(&self, entry_type: &str, body: &'a str) -> Result<BibEntry, BibtexError> {
        let (_, (key, fields)) = all_consuming(entry_body)(body)
            .map_err(|err| self.syntax(failed_at(err, body), "malformed entry"))?;
        let mut entry = BibEntry::new(entry_type, key);
        for (name, pieces) in fields {
            entry.fields.insert(name.to_lowercase(), self.expand(&pieces)?);
        }
        Ok(entry)
    }

    fn expand(&self, pieces: &[Piece<'a>]) -> Result<String, BibtexError> {
        let mut value = String::new();
        for piece in pieces {
            match *piece {
                Piece::Literal(text) => value.push_str(text),
                Piece::Macro(name) => {
                    let Some(expanded) = self.macros.get(&name.to_lowercase()) else {
                        let message = format!("undefined macro '{}'", name.to_lowercase());
                        return Err(self.syntax(name, message));
                    };
                    value.push_str(expanded);
                }
            }
        }
        Ok(collapse_whitespace(&value))
    }

    /// 1-based line of a position inside the source.
    fn line_at(&self, at: &str) -> usize {
        let offset = self.source.offset(at);
        self.source[..offset].matches('\n').count() + 1
    }

    fn syntax(&self, at: &str, message: impl Into<String>) -> BibtexError {
        syntax(self.line_at(at), message)
    }
}

fn syntax(line: usize, message: impl Into<String>) -> BibtexError {
    BibtexError::Syntax {
        line,
        message: message.into(),
    }
}

fn unterminated(line: usize) -> BibtexError {
    syntax(line, "unterminated entry")
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
