use serde::{Deserialize, Deserializer, Serialize};

// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope returned by the summarization backend for `/process-video`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    #[serde(default)]
    pub video_data: Option<VideoData>,
    #[serde(default)]
    pub llm_article_data: Option<LlmArticle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ArticleResult {
    /// The video id, if the backend sent a non-empty one.
    pub fn video_id(&self) -> Option<&str> {
        self.video_data
            .as_ref()
            .map(|video| video.video_id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.video_data
            .as_ref()
            .map(|video| video.title.as_str())
            .filter(|title| !title.is_empty())
    }

    /// True when there is a summary or at least one article section.
    pub fn has_article_content(&self) -> bool {
        self.llm_article_data
            .as_ref()
            .map_or(false, LlmArticle::has_content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VideoData {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmArticle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub table_of_contents: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub article_sections: Vec<ArticleSection>,
}

impl LlmArticle {
    pub fn has_content(&self) -> bool {
        !self.summary.is_empty() || !self.article_sections.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSection {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_block: String,
    #[serde(default)]
    pub timestamp_seconds: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevant_to_search_intent: bool,
}

/// Body posted by the view controller to the proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessVideoRequest {
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_intent: Option<String>,
}

impl ProcessVideoRequest {
    /// `search_intent` is trimmed and dropped when empty.
    pub fn new(video_url: impl Into<String>, search_intent: &str) -> Self {
        let search_intent = search_intent.trim();
        Self {
            video_url: video_url.into(),
            search_intent: (!search_intent.is_empty()).then(|| search_intent.to_string()),
        }
    }
}

/// Error envelope of the backend (FastAPI `detail`) or of the proxy (`message`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Usually a string, but FastAPI validation errors send a list.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// `detail` first, then `message`; empty values are skipped.
    pub fn reason(&self) -> Option<String> {
        let detail = match &self.detail {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        detail
            .filter(|d| !d.is_empty())
            .or_else(|| self.message.clone().filter(|m| !m.is_empty()))
    }
}

/// Error envelope produced by the proxy itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyErrorBody {
    pub message: String,
    pub error_detail: String,
}
