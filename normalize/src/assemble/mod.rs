//! Builds the [ResultTable] of a document from the raw text of its pages.

#[cfg(test)]
mod tests;

use crate::{
    linenorm::LineNormalizer,
    record::{Record, ResultTable},
};

/// Number of title/header lines at the top of the first page. Their layout
/// does not follow the data rows, so they are skipped rather than parsed.
pub const FIRST_PAGE_HEADER_LINES: usize = 3;

/// What to do about lines that do not split into a full row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RejectPolicy {
    /// Drop them and carry on.
    #[default]
    Lenient,
    /// Drop them, but fail the document if more than this fraction of its
    /// data lines was dropped.
    MaxRatio(f64),
}

impl RejectPolicy {
    pub fn from_max_ratio(max_ratio: Option<f64>) -> Self {
        match max_ratio {
            Some(max_ratio) => Self::MaxRatio(max_ratio),
            None => Self::Lenient,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("{rejected} of {considered} data lines were rejected, above the allowed ratio {max_ratio}")]
pub struct RejectionThresholdExceeded {
    pub rejected: usize,
    pub considered: usize,
    pub max_ratio: f64,
}

/// A line that was dropped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedLine {
    /// 1-based page number.
    pub page: usize,
    pub line: String,
    pub fields: Vec<String>,
}

/// Result of assembling a document.
#[derive(Debug, Default, PartialEq)]
pub struct Assembled {
    pub table: ResultTable,
    pub rejected: Vec<RejectedLine>,
    /// Number of data lines handed to the normaliser.
    pub considered: usize,
}

/// Turns page text into records.
#[derive(Clone, Copy, Debug)]
pub struct Assembler<'a> {
    normalizer: LineNormalizer<'a>,
    policy: RejectPolicy,
}

impl Default for Assembler<'static> {
    fn default() -> Self {
        Self::new(LineNormalizer::default(), RejectPolicy::default())
    }
}

impl<'a> Assembler<'a> {
    pub fn new(normalizer: LineNormalizer<'a>, policy: RejectPolicy) -> Self {
        Self { normalizer, policy }
    }

    /// Assembles the pages of one document, given in page order.
    pub fn assemble<I, S>(&self, pages: I) -> Result<Assembled, RejectionThresholdExceeded>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assembled = Assembled::default();
        for (page_index, text) in pages.into_iter().enumerate() {
            self.assemble_page(page_index, text.as_ref(), &mut assembled);
        }
        self.check_policy(&assembled)?;
        Ok(assembled)
    }

    fn assemble_page(&self, page_index: usize, text: &str, assembled: &mut Assembled) {
        let page = page_index + 1;
        let skip = if page_index == 0 {
            FIRST_PAGE_HEADER_LINES
        } else {
            0
        };

        let records_before = assembled.table.len();
        let rejected_before = assembled.rejected.len();

        for line in text.lines().filter(|line| !line.is_empty()).skip(skip) {
            assembled.considered += 1;
            let fields = self.normalizer.normalize(line);
            match Record::try_from(fields.clone()) {
                Ok(record) => assembled.table.push(record),
                Err(err) => {
                    log::warn!("page {page}: discarding line ({err}): {fields:?}");
                    assembled.rejected.push(RejectedLine {
                        page,
                        line: line.to_string(),
                        fields,
                    });
                }
            }
        }

        log::debug!(
            "page {page}: {} records, {} lines rejected",
            assembled.table.len() - records_before,
            assembled.rejected.len() - rejected_before,
        );
    }

    fn check_policy(&self, assembled: &Assembled) -> Result<(), RejectionThresholdExceeded> {
        let RejectPolicy::MaxRatio(max_ratio) = self.policy else {
            return Ok(());
        };
        if assembled.considered == 0 {
            return Ok(());
        }

        let rejected = assembled.rejected.len();
        let ratio = rejected as f64 / assembled.considered as f64;
        if ratio > max_ratio {
            Err(RejectionThresholdExceeded {
                rejected,
                considered: assembled.considered,
                max_ratio,
            })
        } else {
            Ok(())
        }
    }
}
