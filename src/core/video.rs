//! Remediation video links: URL normalization and opening in the browser.

/// Normalize a YouTube watch URL to its embed form; other URLs pass through.
pub fn embed_url(url: &str) -> String {
    if let Some((_, rest)) = url.split_once("youtube.com/watch?v=") {
        let video_id = rest.split('&').next().unwrap_or("");
        return format!("https://www.youtube.com/embed/{}", video_id);
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let video_id = rest.split('?').next().unwrap_or("");
        return format!("https://www.youtube.com/embed/{}", video_id);
    }
    url.to_string()
}

/// Open a video link in the system browser. Failures are logged, not fatal:
/// the URL stays visible on screen for manual use.
pub fn open_link(url: &str) {
    if let Err(e) = opener::open(url) {
        log::warn!("failed to open {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_converted() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn watch_url_strips_extra_params() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc123&t=42s"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn short_url_converted() {
        assert_eq!(
            embed_url("https://youtu.be/xyz?si=share"),
            "https://www.youtube.com/embed/xyz"
        );
    }

    #[test]
    fn other_urls_pass_through() {
        assert_eq!(
            embed_url("https://vimeo.com/12345"),
            "https://vimeo.com/12345"
        );
    }
}
