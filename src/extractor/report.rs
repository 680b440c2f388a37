use crate::error::Result;
use crate::extractor::string_extractor::{ExtractedString, ExtractedStrings, ExtractionPass};
use crate::scanner::{ClassifiedFiles, FileClass};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Last `/`-separated segment of a path string.
///
/// Only `/` is treated as a separator, so a path using another separator is
/// returned whole.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

impl ExtractedString {
    pub fn filename(&self) -> String {
        basename(&self.path.to_string_lossy()).to_string()
    }

    /// `<basename>\t<text>`
    pub fn to_line(&self) -> String {
        format!("{}\t{}", self.filename(), self.text)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionSummary {
    pub swift_sources: usize,
    pub storyboards: usize,
    pub xibs: usize,
    pub quoted_literals: usize,
    pub multiline_literals: usize,
    pub storyboard_attributes: usize,
    pub xib_attributes: usize,
    pub total_records: usize,
    pub duration_ms: u64,
}

impl ExtractionSummary {
    pub fn new(files: &ClassifiedFiles, strings: &ExtractedStrings, duration: Duration) -> Self {
        Self {
            swift_sources: files.files(FileClass::SwiftSource).len(),
            storyboards: files.files(FileClass::Storyboard).len(),
            xibs: files.files(FileClass::Xib).len(),
            quoted_literals: strings.pass(ExtractionPass::QuotedLiteral).len(),
            multiline_literals: strings.pass(ExtractionPass::MultilineLiteral).len(),
            storyboard_attributes: strings.pass(ExtractionPass::StoryboardAttribute).len(),
            xib_attributes: strings.pass(ExtractionPass::XibAttribute).len(),
            total_records: strings.len(),
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn display_summary(&self) -> String {
        format!(
            "Extraction Results:\n  Files: {} swift, {} storyboard, {} xib\n  Strings: {} quoted, {} multiline, {} storyboard, {} xib ({} total)\n",
            self.swift_sources,
            self.storyboards,
            self.xibs,
            self.quoted_literals,
            self.multiline_literals,
            self.storyboard_attributes,
            self.xib_attributes,
            self.total_records
        )
    }
}

#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub records: Vec<ExtractedString>,
    pub summary: ExtractionSummary,
}

impl ExtractionReport {
    pub fn new(files: &ClassifiedFiles, strings: ExtractedStrings, duration: Duration) -> Self {
        let summary = ExtractionSummary::new(files, &strings, duration);
        Self {
            records: strings.into_records(),
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records joined by `\n`, without a trailing newline.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(ExtractedString::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Emits the whole report in one write. Nothing is written when there
    /// are no records.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let rendered = self.render();
        if rendered.is_empty() {
            return Ok(());
        }

        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
