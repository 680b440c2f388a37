pub mod content;
pub mod patterns;
pub mod report;
pub mod string_extractor;

pub use content::read_content;
pub use patterns::ExtractionPattern;
pub use report::{basename, ExtractionReport, ExtractionSummary};
pub use string_extractor::{
    ExtractedString, ExtractedStrings, ExtractionPass, ExtractionProgress, StringExtractor,
};
