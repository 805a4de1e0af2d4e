//! Sequential publish of selected release assets into Aptly.

use crate::aptly::AptlyClient;
use crate::cli::RuntimeConfig;
use crate::config::PublishSettings;
use crate::error::{GitHubError, Result};
use crate::github::GitHubReleaseClient;
use crate::selector::{MatchedAsset, select_assets};

use super::report::PublishReport;
use super::stage::stage_payload;

/// Runs one publish with clients built once from the settings
pub struct PublishPipeline<'a> {
    settings: &'a PublishSettings,
    config: &'a RuntimeConfig,
    github: GitHubReleaseClient,
    aptly: AptlyClient,
}

impl<'a> PublishPipeline<'a> {
    /// Build both API clients. No request is sent.
    pub fn new(settings: &'a PublishSettings, config: &'a RuntimeConfig) -> Result<Self> {
        Ok(Self {
            settings,
            config,
            github: GitHubReleaseClient::new(&settings.github)?,
            aptly: AptlyClient::new(&settings.aptly)?,
        })
    }

    /// Publish every selected asset, stopping at the first failure
    pub async fn run(&self) -> Result<PublishReport> {
        let settings = self.settings;

        self.config.progress_println(&format!(
            "Fetching release {} from {}/{}",
            settings.release_tag, settings.owner, settings.repo
        ));
        let release = self
            .github
            .get_release_by_tag(&settings.owner, &settings.repo, &settings.release_tag)
            .await?;

        let matched = select_assets(&release.assets, &settings.selectors);
        self.config.println(&format!(
            "   Selected {} of {} asset(s)",
            matched.len(),
            release.assets.len()
        ));
        for m in &matched {
            self.config.indent(&format!("{} (matched '{}')", m.name(), m.selector));
        }

        let mut report = PublishReport {
            release_tag: release.tag_name.clone(),
            release_assets: release.assets.len(),
            matched,
            published: Vec::new(),
            dry_run: settings.dry_run,
        };

        if settings.dry_run {
            self.config
                .warning_println("Dry run: skipping all Aptly operations");
            return Ok(report);
        }

        self.aptly
            .ensure_repo_exists(&settings.target.staging_repo)
            .await?;

        let total = report.matched.len();
        for (index, matched) in report.matched.iter().enumerate() {
            self.config.progress_println(&format!(
                "[{}/{}] Publishing {}",
                index + 1,
                total,
                matched.name()
            ));
            self.publish_asset(matched).await?;
            report.published.push(matched.name().to_string());
            self.config
                .success_println(&format!("Published {}", matched.name()));
        }

        Ok(report)
    }

    /// Download → stage → upload → register → republish for one asset
    async fn publish_asset(&self, matched: &MatchedAsset) -> Result<()> {
        let settings = self.settings;
        let target = &settings.target;
        let name = matched.name();

        if name.is_empty() {
            return Err(GitHubError::InvalidResponse {
                operation: "get_release_by_tag".to_string(),
                reason: format!("asset {} has an empty name", matched.asset.id),
            }
            .into());
        }

        let content = self
            .github
            .download_asset(&settings.owner, &settings.repo, &matched.asset)
            .await?;
        let content = stage_payload(name, content).await?;

        self.aptly.upload_file(&target.dir, content, name).await?;
        self.aptly
            .register_file(&target.repo, &target.dir, name)
            .await?;
        self.aptly.republish(&target.distribution).await?;

        Ok(())
    }
}
