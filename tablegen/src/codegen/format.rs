//! Best-effort formatting of staged files
//!
//! Nothing in here returns an error: a missing or failing formatter is logged
//! and the staged files are promoted as rendered.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::promote::collect_files;

/// Post-processing formatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    /// External `rustfmt` process
    #[default]
    Rustfmt,
    /// In-process `syn` + `prettyplease`. Plain `//` comments are dropped,
    /// doc comments survive.
    Prettyplease,
    /// Leave files as rendered
    None,
}

impl FromStr for Formatter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rustfmt" => Ok(Formatter::Rustfmt),
            "prettyplease" => Ok(Formatter::Prettyplease),
            "none" => Ok(Formatter::None),
            other => Err(format!(
                "unknown formatter `{}` (expected rustfmt, prettyplease or none)",
                other
            )),
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Formatter::Rustfmt => "rustfmt",
            Formatter::Prettyplease => "prettyplease",
            Formatter::None => "none",
        };
        f.write_str(name)
    }
}

/// What the post-processor did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Every file was formatted
    Formatted(usize),
    /// Formatting was not attempted
    Skipped(String),
    /// The formatter ran but failed on some or all files
    Failed(String),
}

/// Format every file below `dir` with `formatter`
pub fn format_dir(formatter: Formatter, rustfmt: &Path, dir: &Path) -> FormatOutcome {
    let files = match collect_files(dir) {
        Ok(files) => files,
        Err(e) => {
            warn!("Cannot list {} for formatting: {}", dir.display(), e);
            return FormatOutcome::Failed(e.to_string());
        }
    };

    let outcome = match formatter {
        Formatter::None => FormatOutcome::Skipped("formatting disabled".into()),
        _ if files.is_empty() => FormatOutcome::Skipped("nothing to format".into()),
        Formatter::Rustfmt => run_rustfmt(rustfmt, dir, &files),
        Formatter::Prettyplease => run_prettyplease(&files),
    };

    match &outcome {
        FormatOutcome::Formatted(n) => info!("Formatted {} files with {}", n, formatter),
        FormatOutcome::Skipped(reason) => info!("Skipping formatting: {}", reason),
        FormatOutcome::Failed(_) => {}
    }
    outcome
}

fn run_rustfmt(rustfmt: &Path, dir: &Path, files: &[std::path::PathBuf]) -> FormatOutcome {
    let available = Command::new(rustfmt)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);
    if !available {
        return FormatOutcome::Skipped(format!(
            "{} is not installed, cannot format generated files",
            rustfmt.display()
        ));
    }

    info!("Running {} on {}", rustfmt.display(), dir.display());
    let result = Command::new(rustfmt)
        .args(["--edition", "2021"])
        .args(files)
        .status();

    match result {
        Ok(status) if status.success() => FormatOutcome::Formatted(files.len()),
        Ok(status) => {
            let message = format!("{} exited with {}", rustfmt.display(), status);
            warn!(
                "Formatting failed: {}, in directory: {}, probably invalid Rust",
                message,
                dir.display()
            );
            FormatOutcome::Failed(message)
        }
        Err(e) => {
            warn!(
                "Formatting failed: {}, in directory: {}, could not start {}",
                e,
                dir.display(),
                rustfmt.display()
            );
            FormatOutcome::Failed(e.to_string())
        }
    }
}

fn run_prettyplease(files: &[std::path::PathBuf]) -> FormatOutcome {
    let mut failures = Vec::new();
    for file in files {
        if let Err(message) = prettyplease_file(file) {
            warn!(
                "Formatting failed: {}, file: {}, the template probably produced invalid Rust",
                message,
                file.display()
            );
            failures.push(message);
        }
    }

    if failures.is_empty() {
        FormatOutcome::Formatted(files.len())
    } else {
        FormatOutcome::Failed(failures.join("; "))
    }
}

fn prettyplease_file(path: &Path) -> Result<(), String> {
    let source = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let syntax = syn::parse_file(&source).map_err(|e| e.to_string())?;
    std::fs::write(path, prettyplease::unparse(&syntax)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formatter() {
        assert_eq!("rustfmt".parse::<Formatter>().unwrap(), Formatter::Rustfmt);
        assert_eq!("PrettyPlease".parse::<Formatter>().unwrap(), Formatter::Prettyplease);
        assert_eq!("none".parse::<Formatter>().unwrap(), Formatter::None);
        assert!("gofmt".parse::<Formatter>().is_err());
        assert_eq!(Formatter::Prettyplease.to_string(), "prettyplease");
    }

    #[test]
    fn test_none_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("user.rs");
        std::fs::write(&file, "pub struct   User{}").unwrap();

        let outcome = format_dir(Formatter::None, Path::new("rustfmt"), dir.path());
        assert!(matches!(outcome, FormatOutcome::Skipped(_)));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "pub struct   User{}");
    }

    #[test]
    fn test_missing_rustfmt_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("user.rs");
        std::fs::write(&file, "pub struct   User{}").unwrap();

        let outcome = format_dir(
            Formatter::Rustfmt,
            Path::new("tablegen-no-such-formatter"),
            dir.path(),
        );
        assert!(matches!(outcome, FormatOutcome::Skipped(_)));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "pub struct   User{}");
    }

    #[test]
    fn test_prettyplease_formats_valid_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("user.rs");
        std::fs::write(&file, "pub struct   User{pub id:i32}").unwrap();

        let outcome = format_dir(Formatter::Prettyplease, Path::new("rustfmt"), dir.path());
        assert_eq!(outcome, FormatOutcome::Formatted(1));
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "pub struct User {\n    pub id: i32,\n}\n"
        );
    }

    #[test]
    fn test_prettyplease_failure_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a.rs");
        let bad = dir.path().join("b.rs");
        std::fs::write(&good, "pub struct A{}").unwrap();
        std::fs::write(&bad, "pub struct {").unwrap();

        let outcome = format_dir(Formatter::Prettyplease, Path::new("rustfmt"), dir.path());
        assert!(matches!(outcome, FormatOutcome::Failed(_)));
        assert_eq!(std::fs::read_to_string(&bad).unwrap(), "pub struct {");
        assert_eq!(std::fs::read_to_string(&good).unwrap(), "pub struct A {}\n");
    }
}
