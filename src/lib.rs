pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, LogFormat};
pub use config::{
    ClassificationConfig, CliOverrides, Config, ExtractionConfig, MatchMode, ScanConfig,
};
pub use error::{LocStringsError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    basename, ExtractedString, ExtractionPass, ExtractionReport, ExtractionSummary,
    StringExtractor,
};
pub use scanner::{path_matches, ClassifiedFiles, FileClass, FileClassifier, FileWalker};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::Path;
use std::time::Instant;

/// Main library interface for LocStrings functionality
pub struct LocStrings {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl LocStrings {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self::with_progress(config, output_mode, verbose, quiet, !quiet)
    }

    pub fn with_progress(
        config: Config,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
        show_progress: bool,
    ) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
            progress_manager: ProgressManager::new(show_progress),
        }
    }

    /// Create LocStrings instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;

        Ok(Self::with_progress(
            config,
            cli_args.output_mode(),
            cli_args.verbosity_level(),
            cli_args.quiet,
            cli_args.show_progress(),
        ))
    }

    /// List and classify the files under `root`
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> Result<ClassifiedFiles> {
        let root = root.as_ref();
        self.output_formatter
            .start_operation(&format!("Scanning {}", root.display()));

        let spinner = self.progress_manager.create_spinner("Listing files");
        let listed = FileWalker::new(&self.config.scan).walk(root);
        spinner.finish_and_clear();
        let paths = listed?;

        let classifier = FileClassifier::new(&self.config.classification);
        let files = classifier.classify(&paths);

        self.output_formatter.debug(&format!(
            "Listed {} files; {} swift, {} storyboard, {} xib ({:?} matching)",
            paths.len(),
            files.swift_sources.len(),
            files.storyboards.len(),
            files.xibs.len(),
            classifier.match_mode()
        ));

        Ok(files)
    }

    /// Run the whole pipeline and return the report without printing it
    pub fn extract_strings<P: AsRef<Path>>(&self, root: P) -> Result<ExtractionReport> {
        let start_time = Instant::now();

        let string_extractor = StringExtractor::new(&self.config.extraction)?;
        for pattern in string_extractor.patterns() {
            self.output_formatter.debug(&format!("Pattern: {}", pattern));
        }

        let files = self.scan(root)?;
        if files.is_empty() {
            self.output_formatter
                .warning("No .swift, .storyboard or .xib files found");
        } else {
            self.output_formatter
                .info(&format!("Found {} files to read", files.total()));
        }

        self.output_formatter.start_operation("Extracting strings");
        let file_progress = self
            .progress_manager
            .create_file_progress(files.total() as u64);
        let progress_callback = {
            let pb = file_progress.clone();
            move |progress: &extractor::ExtractionProgress| {
                ui::progress::update_file_progress(&pb, progress);
            }
        };

        let extracted = match string_extractor.extract(&files, Some(&progress_callback)) {
            Ok(extracted) => extracted,
            Err(e) => {
                file_progress.abandon();
                return Err(e);
            }
        };

        ui::progress::finish_progress_with_summary(
            &file_progress,
            &format!("Extracted {} strings", extracted.len()),
            start_time.elapsed(),
        );
        self.progress_manager.clear();

        let report = ExtractionReport::new(&files, extracted, start_time.elapsed());
        self.output_formatter
            .debug(&report.summary.display_summary());

        Ok(report)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Get progress manager reference
    pub fn progress_manager(&self) -> &ProgressManager {
        &self.progress_manager
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &LocStringsError) {
        self.progress_manager
            .suspend(|| self.output_formatter.print_user_friendly_error(error));
    }
}

/// Runs the pipeline with default configuration and no diagnostics
pub fn extract_strings<P: AsRef<Path>>(root: P) -> Result<ExtractionReport> {
    LocStrings::new(Config::default(), OutputMode::Plain, 0, true).extract_strings(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn quiet(config: Config) -> LocStrings {
        LocStrings::new(config, OutputMode::Plain, 0, true)
    }

    #[test]
    fn test_locstrings_creation() {
        let locstrings = quiet(Config::default());
        assert!(!locstrings.progress_manager().is_enabled());
        assert_eq!(locstrings.config().extraction.attributes.len(), 3);
    }

    #[test]
    fn test_extract_strings_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let nested = root.join("App").join("Views").join("Cells");
        fs::create_dir_all(&nested).unwrap();

        fs::write(root.join("A.swift"), "let x = \"hello\"").unwrap();
        fs::write(
            nested.join("Main.storyboard"),
            r#"<label title="World" text="Hello"/>"#,
        )
        .unwrap();
        fs::write(root.join("notes.md"), "\"ignored\"").unwrap();

        let report = extract_strings(root).unwrap();

        assert_eq!(
            report.render(),
            "A.swift\thello\nMain.storyboard\tHello\nMain.storyboard\tWorld"
        );
        assert_eq!(report.summary.storyboards, 1);
    }

    #[test]
    fn test_extract_strings_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("B.swift"), "\"b\" \"c\"").unwrap();
        fs::write(root.join("A.swift"), "\"a\"").unwrap();
        fs::write(root.join("V.xib"), r#"placeholder="p""#).unwrap();

        let first = extract_strings(root).unwrap().render();
        let second = extract_strings(root).unwrap().render();

        assert_eq!(first, second);
        assert_eq!(first, "A.swift\ta\nB.swift\tb\nB.swift\tc\nV.xib\tp");
    }

    #[test]
    fn test_empty_tree_has_empty_report() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("readme.md"), "\"x\"").unwrap();

        let report = extract_strings(temp_dir.path()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.render(), "");
    }

    #[test]
    fn test_scan_uses_configured_match_mode() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("readme.swift.txt"), "").unwrap();

        let files = quiet(Config::default()).scan(temp_dir.path()).unwrap();
        assert_eq!(files.swift_sources.len(), 1);

        let mut config = Config::default();
        config.classification.match_mode = MatchMode::Suffix;
        let files = quiet(config).scan(temp_dir.path()).unwrap();
        assert!(files.swift_sources.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = extract_strings(temp_dir.path().join("missing"));
        assert!(matches!(result, Err(LocStringsError::InvalidPath { .. })));
    }

    #[test]
    fn test_invalid_utf8_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A.swift"), "\"ok\"").unwrap();
        fs::write(temp_dir.path().join("B.swift"), [0xFF, 0xFE]).unwrap();

        let result = extract_strings(temp_dir.path());
        assert!(matches!(result, Err(LocStringsError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        LocStrings::generate_sample_config(&config_path).unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.classification.xib_token, ".xib");
    }
}
