pub mod codes;
pub mod countries;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::leaderboard::tools::error::{Result, ToolError};

/// Reads a whole file and splits it into lines without their terminators.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let source = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ToolError::MissingInput(path.to_path_buf()),
        _ => ToolError::Io(err),
    })?;
    let lines: Vec<String> = source.lines().map(str::to_string).collect();
    debug!(path = %path.display(), line_count = lines.len(), "loaded input");
    Ok(lines)
}
