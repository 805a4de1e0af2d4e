//! Release asset selection

use crate::github::ReleaseAsset;
use crate::matcher::Selector;

/// A release asset picked by one of the configured selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedAsset {
    /// The selected asset
    pub asset: ReleaseAsset,
    /// Selector that picked it
    pub selector: String,
}

impl MatchedAsset {
    /// Asset file name
    pub fn name(&self) -> &str {
        &self.asset.name
    }
}

/// Pick the assets matched by the selectors.
///
/// Produces one entry per matching (asset, selector) pair, assets in API
/// order and selectors in configured order within each asset. An asset
/// matched by several selectors is returned once per selector and will be
/// published that many times.
pub fn select_assets(assets: &[ReleaseAsset], selectors: &[String]) -> Vec<MatchedAsset> {
    let compiled: Vec<Selector> = selectors.iter().map(|s| Selector::new(s)).collect();

    let mut matched = Vec::new();
    for asset in assets {
        for selector in &compiled {
            if selector.is_match(&asset.name) {
                matched.push(MatchedAsset {
                    asset: asset.clone(),
                    selector: selector.as_str().to_string(),
                });
            }
        }
    }
    matched
}
