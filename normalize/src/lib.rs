//! Extracts race results tables from the text of PDF results sheets.
//!
//! Each line of page text is split into fields by [linenorm::LineNormalizer],
//! and [assemble::Assembler] keeps the lines that produce a full
//! [record::Record] for every column in [schema::Column].

pub mod assemble;
pub mod batch;
pub mod csvout;
pub mod document;
pub mod linenorm;
pub mod pagesource;
pub mod record;
pub mod rules;
pub mod schema;
#[cfg(test)]
mod testutil;
