use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Lazily yield every regular file under `root`, depth first.
///
/// Directories are descended into but not yielded. Directory symlinks are not
/// followed, so there is no cycle detection; a symlink that resolves to a
/// regular file is yielded like one. Any unreadable entry surfaces as an error
/// item.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if is_input_file(&entry) => {
                debug!("Found input file {}", entry.path().display());
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(e.into())),
        })
}

fn is_input_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_files_recurses_and_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("nested/a.txt"), "a").unwrap();
        fs::write(dir.path().join("nested/deeper/c.md"), "c").unwrap();

        let files: Vec<PathBuf> = walk_files(dir.path()).collect::<Result<_>>().unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("b.txt"),
                PathBuf::from("nested/a.txt"),
                PathBuf::from("nested/deeper/c.md"),
            ]
        );
    }

    #[test]
    fn test_walk_files_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(walk_files(dir.path()).count(), 0);
    }

    #[test]
    fn test_walk_files_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let items: Vec<_> = walk_files(&missing).collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_files_yields_symlinked_file() {
        let target = TempDir::new().unwrap();
        let real = target.path().join("real.txt");
        fs::write(&real, "http://example.com").unwrap();

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("links.txt")).unwrap();

        let files: Vec<PathBuf> = walk_files(dir.path()).collect::<Result<_>>().unwrap();
        assert_eq!(files, vec![dir.path().join("links.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_files_does_not_descend_symlinked_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/a.txt"), "a").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("loop")).unwrap();

        let files: Vec<PathBuf> = walk_files(dir.path()).collect::<Result<_>>().unwrap();
        assert_eq!(files, vec![dir.path().join("real/a.txt")]);
    }
}
