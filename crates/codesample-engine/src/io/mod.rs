use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions of documents that can hold code blocks.
pub const MARKUP_EXTENSIONS: &[&str] = &["html", "htm"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentRoot(String),
    #[error("{0} is not under the content directory")]
    OutsideContentRoot(PathBuf),
}

/// Read a markup document and return its content
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a markup document
pub fn write_file(
    relative_path: &RelativePath,
    content_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(content_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markup documents under the content directory, sorted
pub fn scan_markup_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentRoot(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    log::debug!("found {} markup file(s) under {}", files.len(), content_root.display());
    Ok(files)
}

/// Path of `path` relative to `content_root`, for use with [`read_file`] and
/// [`write_file`].
pub fn relative_to(content_root: &Path, path: &Path) -> Result<RelativePathBuf, IoError> {
    let stripped = path
        .strip_prefix(content_root)
        .map_err(|_| IoError::OutsideContentRoot(path.to_path_buf()))?;
    RelativePathBuf::from_path(stripped).map_err(|_| IoError::OutsideContentRoot(path.to_path_buf()))
}

pub fn is_markup_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKUP_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_markup_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_root(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentRoot(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
