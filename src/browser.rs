use std::env;
use std::path::{Path, PathBuf};

pub struct BrowserFinder;
impl BrowserFinder {
    /// Resolves the first usable candidate: absolute paths are checked
    /// directly, bare program names are searched on PATH.
    pub fn locate_in<'a, I>(candidates: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for candidate in candidates {
            let path = Path::new(candidate);

            if path.is_absolute() {
                if path.is_file() {
                    return Some(path.to_path_buf());
                }
                continue;
            }

            if let Some(found) = Self::search_path(candidate) {
                return Some(found);
            }
        }

        None
    }

    fn search_path(program: &str) -> Option<PathBuf> {
        let path_var = env::var_os("PATH")?;

        for dir in env::split_paths(&path_var) {
            let candidate = dir.join(program);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::BrowserFinder;
    use std::fs::File;

    #[test]
    fn finds_absolute_candidate() {
        let path = std::env::temp_dir().join("fetchmd-test-browser-absolute");
        File::create(&path).unwrap();

        let candidate = path.to_string_lossy().to_string();
        let found = BrowserFinder::locate_in([candidate.as_str()]);
        assert_eq!(found, Some(path.clone()));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let found = BrowserFinder::locate_in([
            "fetchmd-test-no-such-binary",
            "/fetchmd-test/no/such/path",
        ]);
        assert_eq!(found, None);
    }
}
