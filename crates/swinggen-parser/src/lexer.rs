//! Line-level tokenization for the description language.

use nom::{bytes::complete::take_till1, IResult};

/// Two-character marker opening a comment line.
const COMMENT_MARKER: &str = "//";

/// A trimmed, non-empty input line tagged with its source position.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    pub content: &'a str,
    /// 1-based line number in the original source.
    pub number: u32,
}

/// Split input into trimmed, non-empty lines.
///
/// Comment lines are kept; unlike blank lines they are significant to the
/// tree builder.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Line {
                    content: trimmed,
                    number: (i + 1) as u32,
                })
            }
        })
        .collect()
}

/// Classification of one trimmed, non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<'a> {
    /// A `//` line, carrying the whole original (trimmed) line.
    Comment(&'a str),
    /// Leading keyword (upper-cased) and optional remainder (original case).
    Word {
        keyword: String,
        rest: Option<&'a str>,
    },
}

/// Take the leading run of non-whitespace characters.
fn word(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Split a line into `(keyword, remainder)` on the first whitespace run.
///
/// The keyword is upper-cased; the remainder keeps its original case and is
/// `None` when the line holds a single word.
pub(crate) fn split_keyword(content: &str) -> (String, Option<&str>) {
    match word(content) {
        Ok((rest, keyword)) => {
            let rest = rest.trim_start();
            let rest = (!rest.is_empty()).then_some(rest);
            (keyword.to_ascii_uppercase(), rest)
        }
        // Lines reaching the classifier are trimmed and non-empty, so the
        // word parser cannot fail; keep a total fallback anyway.
        Err(_) => (content.to_ascii_uppercase(), None),
    }
}

/// Classify one trimmed, non-empty line.
pub fn classify(content: &str) -> Classified<'_> {
    if content.starts_with(COMMENT_MARKER) {
        return Classified::Comment(content);
    }
    let (keyword, rest) = split_keyword(content);
    Classified::Word { keyword, rest }
}
