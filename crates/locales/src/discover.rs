//! Locale directory and file discovery.
//!
//! A theme's locale directory can sit in a handful of conventional places
//! relative to the previewed file. Discovery checks a fixed candidate list
//! first, then falls back to scanning one level of subdirectories for a
//! nested `locales` folder. First hit wins; no hit is a normal outcome.

use std::fs;
use std::path::{Path, PathBuf};

/// Candidate locale directories relative to the base directory, in
/// preference order. `..` covers previewing a file inside `sections/`.
const CANDIDATE_DIRS: [&str; 5] = [
    "locales",
    "app/locales",
    "theme/locales",
    "src/locales",
    "../locales",
];

/// Directory names the one-level fallback scan never descends into.
const SKIPPED_DIRS: [&str; 5] = ["node_modules", "target", "vendor", "dist", "build"];

/// Locale file names inside a locale directory, in preference order.
/// `en.default.schema.json` carries editor-facing schema strings; the plain
/// storefront file is the fallback.
pub fn locale_file_candidates() -> [&'static str; 2] {
    ["en.default.schema.json", "en.default.json"]
}

/// Locate the locale directory for the given base directory, if any.
pub fn find_locales_dir(base: &Path) -> Option<PathBuf> {
    for candidate in CANDIDATE_DIRS {
        let dir = base.join(candidate);
        if dir.is_dir() {
            return Some(dir);
        }
    }
    scan_one_level(base)
}

/// Scan immediate subdirectories of `base` for a nested `locales` folder,
/// skipping hidden and dependency directories. Entries are visited in name
/// order so the result is deterministic across platforms.
fn scan_one_level(base: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(base).ok()?;
    let mut subdirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && !is_skipped(path))
        .collect();
    subdirs.sort();

    for subdir in subdirs {
        let nested = subdir.join("locales");
        if nested.is_dir() {
            return Some(nested);
        }
    }
    None
}

fn is_skipped(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return true;
    };
    name.starts_with('.') || SKIPPED_DIRS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// A fresh base directory nested one level inside a tempdir, so the
    /// `../locales` candidate stays inside the fixture.
    fn fixture_base() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let base = tmp.path().join("theme-project");
        fs::create_dir_all(&base).expect("mkdir");
        (tmp, base)
    }

    #[test]
    fn direct_locales_dir_wins_over_nested() {
        let (_tmp, base) = fixture_base();
        fs::create_dir_all(base.join("locales")).expect("mkdir");
        fs::create_dir_all(base.join("theme/locales")).expect("mkdir");
        assert_eq!(find_locales_dir(&base), Some(base.join("locales")));
    }

    #[test]
    fn app_locales_is_found_when_locales_is_absent() {
        let (_tmp, base) = fixture_base();
        fs::create_dir_all(base.join("app/locales")).expect("mkdir");
        assert_eq!(find_locales_dir(&base), Some(base.join("app/locales")));
    }

    #[test]
    fn parent_level_locales_is_found() {
        let (_tmp, base) = fixture_base();
        fs::create_dir_all(base.join("../locales")).expect("mkdir");
        assert_eq!(find_locales_dir(&base), Some(base.join("../locales")));
    }

    #[test]
    fn one_level_scan_skips_dependency_and_hidden_dirs() {
        let (_tmp, base) = fixture_base();
        fs::create_dir_all(base.join("node_modules/locales")).expect("mkdir");
        fs::create_dir_all(base.join(".git/locales")).expect("mkdir");
        fs::create_dir_all(base.join("storefront/locales")).expect("mkdir");
        assert_eq!(
            find_locales_dir(&base),
            Some(base.join("storefront/locales"))
        );
    }

    #[test]
    fn absence_is_a_normal_outcome() {
        let (_tmp, base) = fixture_base();
        assert_eq!(find_locales_dir(&base), None);
    }
}
