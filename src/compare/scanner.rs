use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::PlagError;

/// A regular file in the scanned folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub file_name: String,
    pub path: PathBuf,
}

/// Reads `path` as text, replacing invalid UTF-8 with U+FFFD.
///
/// Fails with `InvalidRequest` when `path` is not a regular file and with
/// `TooLarge` when it exceeds `max_bytes`.
pub async fn read_document(path: &Path, max_bytes: u64) -> Result<String, PlagError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| PlagError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(PlagError::InvalidRequest(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > max_bytes {
        return Err(PlagError::TooLarge(format!(
            "{} is {} bytes (limit {})",
            path.display(),
            metadata.len(),
            max_bytes
        )));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PlagError::from_io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Regular files directly inside `folder`, sorted by name.
///
/// Subdirectories, symlinks and other special entries are skipped.
pub async fn list_candidates(folder: &Path) -> Result<Vec<Candidate>, PlagError> {
    let metadata = tokio::fs::metadata(folder)
        .await
        .map_err(|e| PlagError::from_io(folder, e))?;
    if !metadata.is_dir() {
        return Err(PlagError::InvalidRequest(format!(
            "{} is not a directory",
            folder.display()
        )));
    }

    let mut entries = tokio::fs::read_dir(folder)
        .await
        .map_err(|e| PlagError::from_io(folder, e))?;

    let mut candidates = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| PlagError::from_io(folder, e))?
    {
        let file_type = match entry.file_type().await {
            Ok(ft) => ft,
            Err(e) => {
                warn!(
                    entry = %entry.path().display(),
                    error = %e,
                    "Cannot stat directory entry, skipping"
                );
                continue;
            }
        };
        // DirEntry::file_type does not follow symlinks.
        if !file_type.is_file() {
            continue;
        }
        candidates.push(Candidate {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    debug!(folder = %folder.display(), count = candidates.len(), "Listed candidates");
    Ok(candidates)
}

/// Final path component of `path`, used for self-match detection.
pub fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_candidates_sorted_regular_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "c").unwrap();

        let names: Vec<_> = list_candidates(dir.path())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.file_name)
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_candidates_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.txt"), "x").unwrap();
        let real = dir.path().join("real.txt");
        std::os::unix::fs::symlink(real, dir.path().join("link.txt")).unwrap();

        let candidates = list_candidates(dir.path()).await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].file_name, "real.txt");
    }

    #[tokio::test]
    async fn test_list_candidates_missing_folder() {
        let err = list_candidates(Path::new("/nonexistent/plagcheck")).await.unwrap_err();
        assert!(matches!(err, PlagError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_candidates_on_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, "x").unwrap();
        let err = list_candidates(&file).await.unwrap_err();
        assert!(matches!(err, PlagError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_read_document_lossy_utf8() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bin.txt");
        fs::write(&file, [b'o', b'k', 0xFF]).unwrap();
        let text = read_document(&file, 1024).await.unwrap();
        assert_eq!(text, "ok\u{FFFD}");
    }

    #[tokio::test]
    async fn test_read_document_size_limit() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("big.txt");
        fs::write(&file, "0123456789").unwrap();
        let err = read_document(&file, 5).await.unwrap_err();
        assert!(matches!(err, PlagError::TooLarge(_)));
        assert!(read_document(&file, 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_read_document_directory() {
        let dir = TempDir::new().unwrap();
        let err = read_document(dir.path(), 1024).await.unwrap_err();
        assert!(matches!(err, PlagError::InvalidRequest(_)));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/a/b/essay.txt")).as_deref(), Some("essay.txt"));
        assert_eq!(base_name(Path::new("/")), None);
    }
}
