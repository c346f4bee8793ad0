pub mod api;
pub mod controller;
pub mod format;
pub mod history;
pub mod outcome;
pub mod player;
pub mod render;
pub mod surface;

pub use api::{ApiResponse, ArticleApi, HttpArticleApi};
pub use controller::{SubmitOutcome, ViewController, ViewState};
pub use history::{History, HistoryEntry, HistoryItem, MAX_HISTORY_ITEMS};
pub use outcome::{classify_response, Failure, FailureKind, Outcome};
pub use player::{
    HeadlessWidget, JumpOutcome, PlaybackState, PlayerController, PlayerInstance, PlayerOptions,
    PlayerStage, PlayerUpdate, PlayerWidget,
};
pub use render::RenderModel;
pub use surface::{DisplaySurface, MemorySurface};

pub mod prelude {
    pub use crate::{ArticleApi, DisplaySurface, PlayerWidget, ViewController};
    pub use va_core::{ArticleResult, Error, Result};
}
