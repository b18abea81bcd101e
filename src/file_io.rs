//! File loading and saving for the open document

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::Document;

/// Load a file into a document
///
/// A path that does not exist yet opens an empty document bound to that
/// path; the file is created on the first save.
pub fn load(path: &Path, tab_stop: usize) -> Result<Document> {
    match std::fs::read(path) {
        Ok(content) => {
            let mut doc = Document::from_bytes(&content, tab_stop);
            doc.file_path = Some(path.to_path_buf());
            tracing::info!("Loaded {} ({} rows)", path.display(), doc.num_rows());
            Ok(doc)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("{} does not exist yet, starting empty", path.display());
            Ok(Document::new_with_path(PathBuf::from(path), tab_stop))
        }
        Err(e) => Err(e).with_context(|| format!("failed to open {}", path.display())),
    }
}

/// Write serialized document bytes to `path`, returning the byte count
///
/// The file is created with mode 0644 if missing, truncated to the new
/// length, then written in full.
pub fn save(path: &Path, content: &[u8]) -> io::Result<usize> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.set_len(content.len() as u64)?;
    file.write_all(content)?;
    file.flush()?;
    tracing::info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(content.len())
}
