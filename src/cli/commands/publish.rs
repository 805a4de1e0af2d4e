//! Publish command execution.
//!
//! Validates settings, then runs the publish pipeline against GitHub and Aptly.

use crate::cli::{Args, RuntimeConfig};
use crate::config::PublishSettings;
use crate::error::Result;
use crate::pipeline::{PublishPipeline, PublishReport};

/// Execute the publish command
pub(super) async fn execute_publish(args: &Args, config: &RuntimeConfig) -> Result<PublishReport> {
    // Configuration errors surface here, before any request is sent
    let settings = PublishSettings::from_args(args)?;
    log::debug!("{:?}", settings);

    config.section("Publish release assets to Aptly");
    config.println(&format!(
        "   Source: {}/{}@{}",
        settings.owner, settings.repo, settings.release_tag
    ));
    config.println(&format!(
        "   Target: {} (repo {}, dir {}, distribution {})",
        settings.aptly.url, settings.target.repo, settings.target.dir, settings.target.distribution
    ));

    let pipeline = PublishPipeline::new(&settings, config)?;
    let report = pipeline.run().await?;

    if report.dry_run {
        config.success_println(&format!(
            "Dry run complete: {} asset(s) would be published",
            report.matched.len()
        ));
    } else if report.is_empty() {
        config.warning_println(&format!(
            "No assets of release {} matched the selectors",
            report.release_tag
        ));
    } else {
        config.success_println(&format!(
            "🎉 Published {} file(s) from release {}",
            report.published.len(),
            report.release_tag
        ));
    }

    Ok(report)
}
