use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extractor::content::read_content;
use crate::extractor::patterns::ExtractionPattern;
use crate::scanner::{ClassifiedFiles, FileClass};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Which extraction pass produced a record. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPass {
    QuotedLiteral,
    MultilineLiteral,
    StoryboardAttribute,
    XibAttribute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub path: PathBuf,
    pub text: String,
    pub pass: ExtractionPass,
}

impl ExtractedString {
    pub fn new(path: &Path, text: String, pass: ExtractionPass) -> Self {
        Self {
            path: path.to_path_buf(),
            text,
            pass,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionProgress {
    pub files_processed: usize,
    pub current_file: Option<String>,
}

impl ExtractionProgress {
    pub fn update_file(&mut self, filename: String) {
        self.files_processed += 1;
        self.current_file = Some(filename);
    }
}

/// Records of each pass, kept apart until the report flattens them.
#[derive(Debug, Clone, Default)]
pub struct ExtractedStrings {
    pub quoted_literals: Vec<ExtractedString>,
    pub multiline_literals: Vec<ExtractedString>,
    pub storyboard_attributes: Vec<ExtractedString>,
    pub xib_attributes: Vec<ExtractedString>,
}

impl ExtractedStrings {
    pub fn pass(&self, pass: ExtractionPass) -> &[ExtractedString] {
        match pass {
            ExtractionPass::QuotedLiteral => &self.quoted_literals,
            ExtractionPass::MultilineLiteral => &self.multiline_literals,
            ExtractionPass::StoryboardAttribute => &self.storyboard_attributes,
            ExtractionPass::XibAttribute => &self.xib_attributes,
        }
    }

    pub fn len(&self) -> usize {
        self.quoted_literals.len()
            + self.multiline_literals.len()
            + self.storyboard_attributes.len()
            + self.xib_attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swift quoted, swift multiline, storyboard, xib.
    pub fn into_records(self) -> Vec<ExtractedString> {
        let mut records = self.quoted_literals;
        records.extend(self.multiline_literals);
        records.extend(self.storyboard_attributes);
        records.extend(self.xib_attributes);
        records
    }
}

pub struct StringExtractor {
    quoted_literal: ExtractionPattern,
    multiline_literal: Option<ExtractionPattern>,
    attributes: Vec<ExtractionPattern>,
}

impl StringExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let multiline_literal = if config.multiline_literals {
            Some(ExtractionPattern::multiline_literal()?)
        } else {
            None
        };

        let attributes = config
            .attributes
            .iter()
            .map(|name| ExtractionPattern::attribute(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            quoted_literal: ExtractionPattern::quoted_literal()?,
            multiline_literal,
            attributes,
        })
    }

    pub fn patterns(&self) -> Vec<&str> {
        std::iter::once(&self.quoted_literal)
            .chain(self.multiline_literal.as_ref())
            .chain(self.attributes.iter())
            .map(ExtractionPattern::as_str)
            .collect()
    }

    /// Quoted-literal records and multiline-literal records of one source file.
    pub fn source_strings(
        &self,
        path: &Path,
        content: &str,
    ) -> (Vec<ExtractedString>, Vec<ExtractedString>) {
        let quoted = records(path, ExtractionPass::QuotedLiteral, self.quoted_literal.collect(content));

        let multiline = match &self.multiline_literal {
            Some(pattern) => records(path, ExtractionPass::MultilineLiteral, pattern.collect(content)),
            None => Vec::new(),
        };

        (quoted, multiline)
    }

    /// Attribute values of one interface file, grouped by attribute in
    /// configured order rather than by position in the markup.
    pub fn interface_strings(
        &self,
        path: &Path,
        content: &str,
        pass: ExtractionPass,
    ) -> Vec<ExtractedString> {
        self.attributes
            .iter()
            .flat_map(|pattern| pattern.collect(content))
            .map(|text| ExtractedString::new(path, text, pass))
            .collect()
    }

    pub fn extract(
        &self,
        files: &ClassifiedFiles,
        progress_callback: Option<&dyn Fn(&ExtractionProgress)>,
    ) -> Result<ExtractedStrings> {
        let mut progress = ExtractionProgress::default();
        let mut report_progress = |path: &Path| {
            progress.update_file(display_name(path));
            if let Some(callback) = progress_callback {
                callback(&progress);
            }
        };

        // Each source file is read once; its two passes stay separate so the
        // report can list every quoted literal before any multiline one.
        let mut quoted_literals = Vec::new();
        let mut multiline_literals = Vec::new();
        for path in files.files(FileClass::SwiftSource) {
            let content = read_content(path)?;
            let (quoted, multiline) = self.source_strings(path, &content);
            quoted_literals.extend(quoted);
            multiline_literals.extend(multiline);
            report_progress(path);
        }

        let mut storyboard_attributes = Vec::new();
        for path in files.files(FileClass::Storyboard) {
            let content = read_content(path)?;
            storyboard_attributes.extend(self.interface_strings(
                path,
                &content,
                ExtractionPass::StoryboardAttribute,
            ));
            report_progress(path);
        }

        let mut xib_attributes = Vec::new();
        for path in files.files(FileClass::Xib) {
            let content = read_content(path)?;
            xib_attributes.extend(self.interface_strings(
                path,
                &content,
                ExtractionPass::XibAttribute,
            ));
            report_progress(path);
        }

        Ok(ExtractedStrings {
            quoted_literals,
            multiline_literals,
            storyboard_attributes,
            xib_attributes,
        })
    }
}

fn records(path: &Path, pass: ExtractionPass, texts: Vec<String>) -> Vec<ExtractedString> {
    texts
        .into_iter()
        .map(|text| ExtractedString::new(path, text, pass))
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
