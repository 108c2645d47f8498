//! File input utilities.

use std::io::Read;

use super::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> CliResult<(String, String)> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| CliError::Io {
                name: "<stdin>".to_string(),
                source,
            })?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            name: path.to_string(),
            source,
        })?;
        Ok((content, path.to_string()))
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}
