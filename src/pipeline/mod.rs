//! Publish pipeline: release lookup, asset selection and Aptly publishing.
//!
//! `FetchRelease → SelectAssets → EnsureRepo → (Download → Stage → Upload →
//! Register → Republish)*`. The first error aborts the run.

mod report;
mod run;
mod stage;

pub use report::PublishReport;
pub use run::PublishPipeline;
