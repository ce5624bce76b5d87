//! External formatting pass.
//!
//! Formatting is cosmetic: the header is already written when the
//! formatter runs, and a failing formatter leaves it in place.

use crate::error::FormatError;
use std::path::Path;
use std::process::Command;

/// Default formatter program.
pub const DEFAULT_FORMATTER: &str = "astyle";

/// Fixed astyle options; the file path is appended last.
pub const ASTYLE_ARGS: [&str; 12] = [
    "--style=otbs",
    "--attach-namespaces",
    "--attach-classes",
    "--indent=spaces=4",
    "--convert-tabs",
    "--align-reference=name",
    "--keep-one-line-statements",
    "--pad-header",
    "--pad-oper",
    "--unpad-paren",
    "--max-continuation-indent=120",
    "-n",
];

/// Formats a written header in place.
pub trait Formatter {
    /// Formats the file at `path`.
    ///
    /// # Errors
    /// Returns `FormatError` if the formatter is unavailable or fails.
    fn format_file(&self, path: &Path) -> Result<(), FormatError>;
}

/// Runs astyle as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct Astyle {
    program: String,
}

impl Astyle {
    /// Creates a formatter running `program` with the astyle options.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the program this formatter runs.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for Astyle {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER)
    }
}

impl Formatter for Astyle {
    fn format_file(&self, path: &Path) -> Result<(), FormatError> {
        let output = Command::new(&self.program)
            .args(ASTYLE_ARGS)
            .arg(path)
            .output()
            .map_err(|source| FormatError::Unavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::info!(path = %path.display(), "formatted header");
        Ok(())
    }
}

/// Formatter that leaves the file untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn format_file(&self, _path: &Path) -> Result<(), FormatError> {
        Ok(())
    }
}
