//! Source of raw per-page text for a PDF document.

use std::{
    panic::{self, AssertUnwindSafe},
    path::Path,
};

use anyhow::{Context, Result, anyhow};

/// Raw text of a single page, as produced by text extraction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PageText {
    pub text: String,
}

impl AsRef<str> for PageText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<String> for PageText {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for PageText {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

pub trait PageSource {
    /// Reads the text of every page of the PDF at `pdf_path`, in page order.
    fn pages(&self, pdf_path: &Path) -> Result<Vec<PageText>>;
}

/// [PageSource] backed by the pure Rust `pdf-extract` crate.
#[derive(Debug, Default)]
pub struct PdfExtractPageSource;

impl PageSource for PdfExtractPageSource {
    fn pages(&self, pdf_path: &Path) -> Result<Vec<PageText>> {
        let data =
            std::fs::read(pdf_path).with_context(|| format!("reading PDF {:?}", pdf_path))?;

        // pdf-extract can panic on malformed input rather than returning an
        // error.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&data)
        }));
        let pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(err)) => {
                return Err(anyhow!("extracting text from PDF {:?}: {}", pdf_path, err));
            }
            Err(_) => {
                return Err(anyhow!(
                    "extracting text from PDF {:?}: malformed document",
                    pdf_path
                ));
            }
        };

        log::debug!("extracted {} pages from {:?}", pages.len(), pdf_path);

        Ok(pages.into_iter().map(PageText::from).collect())
    }
}
