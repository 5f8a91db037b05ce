use arc_conformance_domain::DomainError;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a fresh temporary file the candidate can read.
///
/// The file is removed when the returned handle is dropped.
pub fn stage_input(label: &str, contents: &str) -> Result<NamedTempFile, DomainError> {
    let mut file = tempfile::Builder::new()
        .prefix(&format!("arc-{}-", label))
        .tempfile()
        .map_err(|e| DomainError::IoError(format!("Failed to create {} file: {}", label, e)))?;

    file.write_all(contents.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| DomainError::IoError(format!("Failed to write {} file: {}", label, e)))?;

    Ok(file)
}

pub fn path_arg(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}
