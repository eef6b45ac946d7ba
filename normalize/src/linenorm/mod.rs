//! Converts one raw line of extracted PDF text into its fields.
//!
//! Columns in the extracted text are separated by runs of two or more
//! spaces, while a single space normally sits inside a multi-word value
//! ("1999 Mazda Miata"). The text extraction sometimes closes a column gap
//! down to a single space, or to nothing. The [RuleSet] marks those
//! boundaries with [DELIMITER] before the remaining space runs are collapsed
//! and the line is split.
//!
//! No attempt is made to validate the number of fields here.
//!
//! The process is not idempotent: joining the output with single spaces and
//! normalising it again will not in general reproduce the same fields.


use lazy_regex::regex_replace_all;

use crate::rules::{DELIMITER, RuleSet};

/// Splits raw lines into fields using a [RuleSet].
#[derive(Clone, Copy, Debug)]
pub struct LineNormalizer<'a> {
    rules: &'a RuleSet,
}

impl Default for LineNormalizer<'static> {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl<'a> LineNormalizer<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the trimmed fields of `line`, in order.
    pub fn normalize(&self, line: &str) -> Vec<String> {
        let line = self.rules.apply(line);
        // Pairs of spaces, so an odd run leaves one space to be trimmed.
        let line = regex_replace_all!(r"(?:  )+", &line, "\t");
        split_fields(&line)
    }
}

/// Normalises `line` with the built-in rules.
pub fn normalize_line(line: &str) -> Vec<String> {
    LineNormalizer::default().normalize(line)
}

/// Splits on [DELIMITER] and trims each field. A delimiter at the very end of
/// the line does not produce trailing empty fields.
fn split_fields(line: &str) -> Vec<String> {
    let mut pieces: Vec<&str> = line.split(DELIMITER).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
        .into_iter()
        .map(|piece| piece.trim().to_string())
        .collect()
}
