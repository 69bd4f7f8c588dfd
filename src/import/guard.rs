//! Tracks which sources have already been imported

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Remembers imported sources so the same file is not appended twice
///
/// The playlist itself has no notion of "already imported"; hosts keep one
/// of these next to it and clear it when the playlist is reset.
#[derive(Debug, Clone, Default)]
pub struct ImportGuard {
    seen: HashSet<PathBuf>,
}

impl ImportGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as imported
    ///
    /// Returns `false` if it was already recorded. Paths are compared after
    /// canonicalization when the file exists.
    pub fn mark(&mut self, path: &Path) -> bool {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.seen.insert(key)
    }

    /// Whether `path` was already imported
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.seen.contains(&key)
    }

    /// Forget every recorded source
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_twice() {
        let mut guard = ImportGuard::new();
        let path = Path::new("/nonexistent/songs.txt");

        assert!(!guard.contains(path));
        assert!(guard.mark(path));
        assert!(guard.contains(path));
        assert!(!guard.mark(path));

        guard.clear();
        assert!(guard.mark(path));
    }
}
