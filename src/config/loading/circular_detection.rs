use std::path::{Path, PathBuf};

use crate::{MarqueeError, Result};

/// Stack of files currently being loaded, used to reject import cycles.
#[derive(Debug, Default)]
pub(super) struct ImportChain {
    files: Vec<PathBuf>,
}

impl ImportChain {
    /// Pushes `path` onto the chain.
    ///
    /// # Errors
    /// Returns `MarqueeError::CircularImport` if `path` is already being loaded.
    pub(super) fn enter(&mut self, path: &Path) -> Result<()> {
        if self.files.iter().any(|p| p == path) {
            let mut names: Vec<String> = self.files.iter().map(|p| file_label(p)).collect();
            names.push(file_label(path));

            return Err(MarqueeError::CircularImport { chain: names });
        }

        self.files.push(path.to_path_buf());
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.files.pop();
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
