//! File-based store for puzzle inputs
//!
//! Inputs arrive out of band (downloaded by the user); the store only ever
//! reads `{dir}/{year}_day{day:02}.txt`.

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Default input directory: `./inputs` when present, else a per-user
    /// cache directory.
    pub fn default_dir() -> PathBuf {
        let local = PathBuf::from("inputs");
        if local.is_dir() {
            return local;
        }
        dirs::cache_dir()
            .map(|dir| dir.join("aoc23"))
            .unwrap_or(local)
    }

    /// Expected file path for a specific year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Whether an input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).exists()
    }

    /// Read the input for a year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        if !path.exists() {
            return Err(InputError::Missing { year, day, path });
        }
        fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_format() {
        let store = InputStore::new(PathBuf::from("somewhere"));
        assert!(
            store
                .path(2023, 1)
                .to_string_lossy()
                .ends_with("2023_day01.txt")
        );
        assert!(
            store
                .path(2023, 25)
                .to_string_lossy()
                .ends_with("2023_day25.txt")
        );
    }

    #[test]
    fn missing_input_names_the_expected_path() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 1));
        let err = store.load(2023, 1).unwrap_err();
        assert!(matches!(err, InputError::Missing { year: 2023, day: 1, .. }));
        assert!(err.to_string().contains("2023_day01.txt"));
    }

    #[test]
    fn load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        std::fs::write(store.path(2023, 4), "Card 1: 1 | 1\n").unwrap();
        assert!(store.contains(2023, 4));
        assert_eq!(store.load(2023, 4).unwrap(), "Card 1: 1 | 1\n");
    }
}
