use clap::Parser;
use locstrings::{Cli, LocStrings, LocStringsError, OutputFormatter, UserFriendlyError};
use std::io;
use std::process;

const DEFAULT_CONFIG_FILE: &str = "locstrings.toml";

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let locstrings = match LocStrings::from_cli(&cli) {
        Ok(locstrings) => locstrings,
        Err(e) => {
            print_startup_error(&cli, &e);
            return exit_code_for(&e);
        }
    };

    // clap guarantees a root unless --generate-config was given
    let Some(root) = cli.root.as_deref() else {
        return 2;
    };

    if cli.dry_run {
        return handle_dry_run(&locstrings, root);
    }

    match locstrings.extract_strings(root) {
        Ok(report) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = report.write_to(&mut handle) {
                locstrings.handle_error(&e);
                return exit_code_for(&e);
            }

            locstrings
                .output_formatter()
                .print_extraction_summary(&report.summary);
            0
        }
        Err(e) => {
            locstrings.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &LocStringsError) -> i32 {
    match error {
        LocStringsError::InvalidPath { .. } => 3,
        LocStringsError::DirectoryRead { .. } => 4,
        LocStringsError::FileRead { .. } | LocStringsError::InvalidEncoding { .. } => 5,
        LocStringsError::Config { .. } | LocStringsError::Pattern { .. } => 6,
        LocStringsError::Io(_) => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    match LocStrings::generate_sample_config(&config_path) {
        Ok(()) => {
            eprintln!("Generated sample configuration file: {}", config_path);
            eprintln!("\nTo use this configuration:");
            eprintln!("  locstrings <root> --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(locstrings: &LocStrings, root: &std::path::Path) -> i32 {
    let formatter = locstrings.output_formatter();

    let files = match locstrings.scan(root) {
        Ok(files) => files,
        Err(e) => {
            locstrings.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    let config = locstrings.config();
    formatter.print_separator();
    eprintln!("Match mode: {:?}", config.classification.match_mode);
    eprintln!("Attributes: {}", config.extraction.attributes.join(", "));
    eprintln!("Multiline literals: {}", config.extraction.multiline_literals);
    formatter.print_separator();

    formatter.print_classified_files(&files);
    0
}

fn print_startup_error(cli: &Cli, error: &LocStringsError) {
    let formatter = OutputFormatter::new(cli.output_mode(), 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli::try_parse_from([
            "locstrings",
            "--generate-config",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[classification]"));
    }

    #[test]
    fn test_dry_run_mode() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A.swift"), "\"a\"").unwrap();

        let cli = Cli::try_parse_from([
            "locstrings",
            temp_dir.path().to_str().unwrap(),
            "--dry-run",
            "-q",
        ])
        .unwrap();
        let locstrings = LocStrings::from_cli(&cli).unwrap();

        assert_eq!(handle_dry_run(&locstrings, temp_dir.path()), 0);
    }

    #[test]
    fn test_dry_run_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let cli = Cli::try_parse_from(["locstrings", missing.to_str().unwrap(), "-q"]).unwrap();
        let locstrings = LocStrings::from_cli(&cli).unwrap();

        assert_eq!(handle_dry_run(&locstrings, &missing), 3);
    }

    #[test]
    fn test_exit_codes() {
        let invalid = LocStringsError::InvalidPath {
            path: "x".to_string(),
        };
        assert_eq!(exit_code_for(&invalid), 3);

        let encoding = LocStringsError::InvalidEncoding {
            path: "x".to_string(),
        };
        assert_eq!(exit_code_for(&encoding), 5);

        let config = LocStringsError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(exit_code_for(&config), 6);
    }
}
