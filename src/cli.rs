use crate::config::{CliOverrides, Config, MatchMode};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "locstrings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract localizable strings from Swift sources, storyboards and xibs")]
#[command(
    long_about = "LocStrings walks a source tree, pulls string literals out of .swift files and \
                  text/title/placeholder attributes out of .storyboard and .xib files, and prints \
                  one `<file>\\t<string>` line per string for localization review."
)]
#[command(after_help = "EXAMPLES:\n  \
    locstrings ./MyApp > strings.tsv\n  \
    locstrings ./MyApp --match-mode suffix -v\n  \
    locstrings ./MyApp --dry-run\n  \
    locstrings --generate-config --config locstrings.toml")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Root directory to scan
    #[arg(required_unless_present = "generate_config")]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// How classification tokens are matched against paths
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,

    /// Skip the triple-quoted literal pass
    #[arg(long)]
    pub no_multiline: bool,

    /// Format of diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors reach stderr)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Do not draw progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// List classified files without extracting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Write the default configuration to --config (or locstrings.toml)")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable colored output
    Human,
    /// One JSON object per line
    Json,
    /// Plain text output
    Plain,
}

impl From<LogFormat> for OutputMode {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Human => OutputMode::Human,
            LogFormat::Json => OutputMode::Json,
            LogFormat::Plain => OutputMode::Plain,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let multiline = if self.no_multiline { Some(false) } else { None };

        CliOverrides::new()
            .with_match_mode(self.match_mode)
            .with_multiline_literals(multiline)
    }

    pub fn output_mode(&self) -> OutputMode {
        self.log_format.into()
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::path::Path;

    #[test]
    fn test_parse_root() {
        let cli = Cli::try_parse_from(["locstrings", "./MyApp"]).unwrap();
        assert_eq!(cli.root.as_deref(), Some(Path::new("./MyApp")));
        assert_eq!(cli.log_format, LogFormat::Human);
        assert!(cli.show_progress());
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_missing_root_is_a_usage_error() {
        let err = Cli::try_parse_from(["locstrings", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_generate_config_without_root() {
        let cli = Cli::try_parse_from(["locstrings", "--generate-config"]).unwrap();
        assert!(cli.generate_config);
        assert!(cli.root.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["locstrings", ".", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "locstrings",
            ".",
            "--match-mode",
            "suffix",
            "--no-multiline",
        ])
        .unwrap();

        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.match_mode, Some(MatchMode::Suffix));
        assert_eq!(overrides.multiline_literals, Some(false));

        let defaults = Cli::try_parse_from(["locstrings", "."]).unwrap();
        let overrides = defaults.create_cli_overrides();
        assert!(overrides.match_mode.is_none());
        assert!(overrides.multiline_literals.is_none());
    }

    #[test]
    fn test_log_format_and_verbosity() {
        let cli = Cli::try_parse_from(["locstrings", ".", "--log-format", "json", "-vv"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Json);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = Cli::try_parse_from(["locstrings", ".", "-q"]).unwrap();
        assert_eq!(quiet.verbosity_level(), 0);
        assert!(!quiet.show_progress());
    }
}
