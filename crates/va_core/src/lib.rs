pub mod config;
pub mod error;
pub mod types;
pub mod video_url;

pub use config::{ProxyConfig, UpstreamTarget, ViewConfig};
pub use error::{Error, ValidationError};
pub use types::{
    ApiErrorBody, ArticleResult, ArticleSection, LlmArticle, ProcessVideoRequest, ProxyErrorBody,
    VideoData,
};
pub use video_url::normalize_video_url;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{ArticleResult, Error, ProcessVideoRequest, Result};
}
