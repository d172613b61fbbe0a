//! Embeddable video-id extraction.
//!
//! Lesson videos are authored as ordinary share or watch URLs. Extraction
//! failure is a rendering concern only: callers get `None` and skip the
//! player, never an error.

use regex::Regex;

/// Extract the embeddable video id from a watch, share, or embed URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    let pattern = r"(?:youtu\.be/|v=|/v/|/embed/|/watch\?v=|/watch\?.+&v=)([^&?/]+)";
    match Regex::new(pattern) {
        Ok(re) => re
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        Err(_) => None,
    }
}

/// Build the embed URL for an extracted id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?modestbranding=1&rel=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_common_url_shapes() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn unextractable_urls_yield_none() {
        assert_eq!(extract_video_id("https://example.com/lecture.mp4"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn embed_url_wraps_the_id() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?modestbranding=1&rel=0"
        );
    }
}
