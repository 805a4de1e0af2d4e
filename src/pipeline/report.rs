//! Outcome of a completed run

use crate::selector::MatchedAsset;

/// What a successful run selected and published
#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    /// Release the assets came from
    pub release_tag: String,
    /// Total assets attached to the release
    pub release_assets: usize,
    /// Selected assets in processing order (duplicates included)
    pub matched: Vec<MatchedAsset>,
    /// File names added to the target repo, in order
    pub published: Vec<String>,
    /// Whether Aptly calls were skipped
    pub dry_run: bool,
}

impl PublishReport {
    /// Nothing matched the selectors
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}
