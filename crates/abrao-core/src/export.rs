//! Saving exported profile documents

use std::path::{Path, PathBuf};

use crate::error::{AbraoError, Result};

/// File name for an exported profile: `<orcid>.xml`, with anything outside
/// `[0-9A-Za-z-]` replaced so a hostile id cannot escape the directory.
pub fn export_file_name(orcid: &str) -> String {
    let safe: String = orcid
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let stem = if safe.is_empty() { "perfil".to_string() } else { safe };
    format!("{}.xml", stem)
}

/// Write the document into `directory`, creating it if needed.
pub fn save_document(directory: &Path, orcid: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)
        .map_err(|e| AbraoError::Export(format!("{}: {}", directory.display(), e)))?;
    let path = directory.join(export_file_name(orcid));
    std::fs::write(&path, bytes)
        .map_err(|e| AbraoError::Export(format!("{}: {}", path.display(), e)))?;
    tracing::info!("Exported {} bytes to {:?}", bytes.len(), path);
    Ok(path)
}
