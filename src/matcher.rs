//! Asset name matching against configured selectors.
//!
//! A selector is either an exact asset name or a shell-style glob
//! (`*`, `?`, `[...]`, `{a,b}`).

use globset::{Glob, GlobBuilder, GlobMatcher};

/// Check whether `asset_name` is selected by `selector`.
///
/// Exact equality always matches. Otherwise the selector is compiled as a
/// glob; a malformed glob matches nothing.
pub fn matches(asset_name: &str, selector: &str) -> bool {
    Selector::new(selector).is_match(asset_name)
}

/// A selector compiled once and reused for every asset
#[derive(Debug, Clone)]
pub struct Selector {
    raw: String,
    glob: Option<GlobMatcher>,
}

impl Selector {
    /// Compile a selector. Invalid globs fall back to exact-name matching.
    pub fn new(raw: &str) -> Self {
        let glob = match compile_glob(raw) {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(e) => {
                log::debug!("Selector '{}' is not a valid glob: {}", raw, e);
                None
            }
        };

        Self {
            raw: raw.to_string(),
            glob,
        }
    }

    /// The selector as configured
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether an asset name is selected
    pub fn is_match(&self, asset_name: &str) -> bool {
        if asset_name == self.raw {
            return true;
        }
        self.glob
            .as_ref()
            .is_some_and(|glob| glob.is_match(asset_name))
    }
}

/// Asset names are flat file names, so `*` may cross any character and the
/// pattern is case sensitive.
fn compile_glob(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .case_insensitive(false)
        .backslash_escape(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_matches() {
        assert!(matches("app_1.0_amd64.deb", "app_1.0_amd64.deb"));
    }

    #[test]
    fn test_exact_name_with_glob_metacharacters() {
        // "[" alone is an invalid glob, equality still wins
        assert!(matches("weird[name.deb", "weird[name.deb"));
        assert!(!matches("other.deb", "weird[name.deb"));
    }

    #[test]
    fn test_star_matches_any_run() {
        assert!(matches("app_1.0_amd64.deb", "*.deb"));
        assert!(matches(".deb", "*.deb"));
        assert!(!matches("app_1.0.tar.gz", "*.deb"));
    }

    #[test]
    fn test_question_mark_matches_single_char() {
        assert!(matches("app_1.0_amd64.deb", "app_1.?_amd64.deb"));
        assert!(!matches("app_1.10_amd64.deb", "app_1.?_amd64.deb"));
    }

    #[test]
    fn test_character_class() {
        assert!(matches("app_1.0_amd64.deb", "app_[0-9].0_*.deb"));
        assert!(!matches("app_x.0_amd64.deb", "app_[0-9].0_*.deb"));
        assert!(matches("app_x.0_amd64.deb", "app_[!0-9].0_*.deb"));
    }

    #[test]
    fn test_brace_alternation() {
        assert!(matches("app_1.0_amd64.deb", "*_{amd64,arm64}.deb"));
        assert!(matches("app_1.0_arm64.deb", "*_{amd64,arm64}.deb"));
        assert!(!matches("app_1.0_i386.deb", "*_{amd64,arm64}.deb"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches("APP.DEB", "*.deb"));
    }

    #[test]
    fn test_malformed_glob_matches_nothing() {
        assert!(!matches("app.deb", "app[.deb"));
        assert!(!matches("app.deb", "{app.deb"));
    }

    #[test]
    fn test_compiled_selector_reusable() {
        let selector = Selector::new("*.tar.gz");
        assert_eq!(selector.as_str(), "*.tar.gz");
        assert!(selector.is_match("app_1.0.tar.gz"));
        assert!(selector.is_match("other.tar.gz"));
        assert!(!selector.is_match("app_1.0_amd64.deb"));
    }
}
