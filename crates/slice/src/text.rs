//! Turning text into element sequences and back.

use crate::error::SliceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// How text is split into elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Separator {
    /// One element per line (`\n` or `\r\n`)
    #[default]
    Line,
    /// Comma-separated, each element trimmed
    Comma,
    /// Runs of whitespace
    Whitespace,
    /// Any single character, elements kept verbatim
    Char(char),
}

impl Separator {
    /// Splits `text` into elements. Empty text yields no elements.
    ///
    /// # Example
    /// ```
    /// use foodshare_slice::Separator;
    ///
    /// assert_eq!(Separator::Comma.split("a, b,c"), vec!["a", "b", "c"]);
    /// assert!(Separator::Line.split("").is_empty());
    /// ```
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Line => text.lines().collect(),
            Separator::Whitespace => text.split_whitespace().collect(),
            Separator::Comma => {
                let text = trim_line_ending(text);
                if text.trim().is_empty() {
                    return Vec::new();
                }
                text.split(',').map(str::trim).collect()
            }
            Separator::Char(c) => {
                let text = trim_line_ending(text);
                if text.is_empty() {
                    return Vec::new();
                }
                text.split(*c).collect()
            }
        }
    }

    /// Joins elements back into text.
    pub fn join<S: AsRef<str>>(&self, elements: &[S]) -> String {
        let glue = match self {
            Separator::Line => "\n".to_string(),
            Separator::Comma => ",".to_string(),
            Separator::Whitespace => " ".to_string(),
            Separator::Char(c) => c.to_string(),
        };

        let mut out = String::new();
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                out.push_str(&glue);
            }
            out.push_str(element.as_ref());
        }
        out
    }

    /// Rebuilds `text` with only the elements at indices `keep`.
    ///
    /// Elements outside `keep` are cut out together with the separators
    /// that follow a removed head and precede a removed tail. Everything
    /// else, including line endings, spacing and the text around the first
    /// and last element, is kept byte for byte. An empty `keep` yields an
    /// empty string.
    ///
    /// # Example
    /// ```
    /// use foodshare_slice::Separator;
    ///
    /// let text = "// header\r\nfn main() {}\r\n";
    /// assert_eq!(Separator::Line.retain(text, 1..2), "fn main() {}\r\n");
    /// ```
    pub fn retain(&self, text: &str, keep: Range<usize>) -> String {
        let elements = self.split(text);
        let (Some(&first), Some(&last)) = (elements.first(), elements.last()) else {
            return text.to_string();
        };

        let end = keep.end.min(elements.len());
        let start = keep.start.min(end);
        if start == end {
            return String::new();
        }

        // Every element borrows from `text`, so its position is a byte offset.
        let offset = |element: &str| element.as_ptr() as usize - text.as_ptr() as usize;
        let last_kept = elements[end - 1];

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..offset(first)]);
        out.push_str(&text[offset(elements[start])..offset(last_kept) + last_kept.len()]);
        out.push_str(&text[offset(last) + last.len()..]);
        out
    }
}

/// Input piped from a shell usually carries one trailing newline.
fn trim_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

impl FromStr for Separator {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Separator::Line),
            "comma" => Ok(Separator::Comma),
            "whitespace" => Ok(Separator::Whitespace),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Separator::Char(c)),
                    _ => Err(SliceError::InvalidSeparator(other.to_string())),
                }
            }
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = SliceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(separator: Separator) -> Self {
        separator.to_string()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Line => f.write_str("line"),
            Separator::Comma => f.write_str("comma"),
            Separator::Whitespace => f.write_str("whitespace"),
            Separator::Char(c) => write!(f, "{c}"),
        }
    }
}
