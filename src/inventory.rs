//! Domain inventory loading.

use std::path::Path;

use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error_handling::InputError;

/// Reads a newline-delimited domain inventory.
///
/// Blank lines and lines starting with `#` are skipped; everything else is
/// returned trimmed, in file order. Duplicates are kept here and collapsed by
/// the scanner.
///
/// # Errors
///
/// Returns `InputError::InventoryNotFound` if `path` does not exist and
/// `InputError::InventoryRead` for any other I/O failure.
pub async fn load_inventory(path: &Path) -> Result<Vec<String>, InputError> {
    let read_error = |source: std::io::Error| InputError::InventoryRead {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::open(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InputError::InventoryNotFound(path.to_path_buf())
        } else {
            read_error(e)
        }
    })?;

    let mut lines = BufReader::new(file).lines();
    let mut domains = Vec::new();
    while let Some(line) = lines.next_line().await.map_err(read_error)? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        domains.push(trimmed.to_string());
    }

    info!("Loaded {} domain(s) from {}", domains.len(), path.display());
    Ok(domains)
}
