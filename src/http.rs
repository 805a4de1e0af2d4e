//! HTTP utilities shared by the GitHub and Aptly clients.

use url::Url;

/// User agent sent with every request (GitHub rejects requests without one)
pub const USER_AGENT_VALUE: &str = concat!("kodegen_aptly_publish/", env!("CARGO_PKG_VERSION"));

/// Append percent-encoded path segments to a base URL.
///
/// Trailing slashes on the base are ignored, so `https://host/api` and
/// `https://host/api/` produce the same endpoint.
///
/// Returns `None` for URLs that cannot carry a path (e.g. `mailto:`), which
/// configuration validation already rejects.
pub fn endpoint(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().ok()?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Some(url)
}
