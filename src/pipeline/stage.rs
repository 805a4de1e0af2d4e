//! Local staging of downloaded asset payloads

use std::ffi::OsStr;
use std::path::Path;

use bytes::Bytes;

use crate::error::Result;

/// Write the payload to a file in a fresh temporary directory and read it back.
///
/// The directory is removed when this returns, so staging files never outlive
/// a single asset iteration.
pub(super) async fn stage_payload(file_name: &str, content: Bytes) -> Result<Bytes> {
    let staging_dir = tempfile::Builder::new()
        .prefix("kodegen-aptly-")
        .tempdir()?;

    // Asset names are flat; strip anything that would escape the staging dir
    let local_name = Path::new(file_name)
        .file_name()
        .unwrap_or_else(|| OsStr::new("asset"));
    let path = staging_dir.path().join(local_name);

    tokio::fs::write(&path, &content).await?;
    let staged = tokio::fs::read(&path).await?;
    log::debug!("Staged {} ({} bytes)", path.display(), staged.len());

    Ok(Bytes::from(staged))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stage_round_trips_payload() {
        let payload = Bytes::from_static(b"!<arch>\ndebian-binary");
        let staged = stage_payload("app_1.0_amd64.deb", payload.clone())
            .await
            .expect("staging succeeds");
        assert_eq!(staged, payload);
    }

    #[tokio::test]
    async fn test_stage_handles_path_like_names() {
        let staged = stage_payload("../escape.deb", Bytes::from_static(b"x"))
            .await
            .expect("staging succeeds");
        assert_eq!(&staged[..], b"x");
    }
}
