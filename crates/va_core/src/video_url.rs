use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::ValidationError;

lazy_static! {
    static ref YOUTUBE_URL: Regex =
        Regex::new(r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/)").unwrap();
}

/// Clean up a user-supplied video URL and check it points at a YouTube video.
///
/// Query parameters other than the `v` of a `/watch` link are dropped, so
/// tracking and start-time parameters never reach the backend.
pub fn normalize_video_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let formatted = strip_query(trimmed);
    Url::parse(&formatted).map_err(|_| ValidationError::Malformed)?;

    if !YOUTUBE_URL.is_match(&formatted) {
        return Err(ValidationError::NotYouTube);
    }

    Ok(formatted)
}

fn strip_query(url: &str) -> String {
    let Some((path, query)) = url.split_once('?') else {
        return url.to_string();
    };

    if path.ends_with("/watch") {
        if let Some(video_id) = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .filter(|id| !id.is_empty())
        {
            return format!("{}?v={}", path, video_id);
        }
    }

    path.to_string()
}
