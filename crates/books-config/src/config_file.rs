//! Config file lookup
//!
//! `.books-page.toml` is looked up in the current directory first, then
//! in the home directory. The first readable file wins.

use std::path::{Path, PathBuf};

/// Name of the config file in every searched directory
pub const CONFIG_FILE_NAME: &str = ".books-page.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Directories searched for the config file, in priority order
fn search_dirs() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".")];
    candidates.extend(dirs::home_dir());
    candidates
}

/// Read the config file from the first of `candidates` that has one
fn find_in(candidates: &[PathBuf]) -> Option<ConfigFile> {
    candidates
        .iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| read(&path))
}

fn read(path: &Path) -> Option<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(ConfigFile {
            path: path.to_path_buf(),
            content,
        }),
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}

/// Load the config file from the current directory or the home directory
pub fn load_config_file() -> Option<ConfigFile> {
    find_in(&search_dirs())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory for one test
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("books-config-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_first_directory_wins() {
        let local = scratch_dir("local-wins-local");
        let home = scratch_dir("local-wins-home");
        std::fs::write(local.join(CONFIG_FILE_NAME), "status_history = 1").unwrap();
        std::fs::write(home.join(CONFIG_FILE_NAME), "status_history = 2").unwrap();

        let found = find_in(&[local.clone(), home]).unwrap();
        assert_eq!(found.path, local.join(CONFIG_FILE_NAME));
        assert_eq!(found.content, "status_history = 1");
    }

    #[test]
    fn test_falls_back_to_later_directory() {
        let local = scratch_dir("fallback-local");
        let home = scratch_dir("fallback-home");
        std::fs::write(home.join(CONFIG_FILE_NAME), "status_history = 2").unwrap();

        let found = find_in(&[local, home.clone()]).unwrap();
        assert_eq!(found.path, home.join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(find_in(&[scratch_dir("empty")]), None);
    }

    #[test]
    fn test_search_starts_in_current_directory() {
        assert_eq!(search_dirs()[0], PathBuf::from("."));
    }
}
