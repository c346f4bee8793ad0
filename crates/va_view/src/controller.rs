use va_core::{normalize_video_url, ArticleResult, ProcessVideoRequest, Result, ValidationError};

use crate::api::ArticleApi;
use crate::history::{History, HistoryEntry};
use crate::outcome::{classify_response, Failure, FailureKind, Outcome};
use crate::player::{player_error_message, JumpOutcome, PlayerController, PlayerUpdate, PlayerWidget};
use crate::render::RenderModel;
use crate::surface::DisplaySurface;

const DEFAULT_COPY_TITLE: &str = "Video Article";

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rendered { video_id: Option<String> },
    Rejected(ValidationError),
    Failed(Failure),
}

/// All mutable UI state, owned by one controller.
pub struct ViewState {
    pub history: History,
    pub player: PlayerController,
    pub active_video_id: Option<String>,
    pub busy: bool,
    pub displayed_error: Option<Failure>,
    pub current: Option<RenderModel>,
}

pub struct ViewController<A, S> {
    api: A,
    surface: S,
    state: ViewState,
}

impl<A: ArticleApi, S: DisplaySurface> ViewController<A, S> {
    pub fn new(api: A, surface: S, widget: Box<dyn PlayerWidget>) -> Self {
        let mut controller = Self {
            api,
            surface,
            state: ViewState {
                history: History::new(),
                player: PlayerController::new(widget),
                active_video_id: None,
                busy: false,
                displayed_error: None,
                current: None,
            },
        };
        controller.render_history();
        controller
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Validate, submit and display one video.
    ///
    /// A rejected URL never reaches the busy state. Once the request is
    /// sent, the busy indicator is cleared on every exit path. Submissions
    /// cannot overlap: this borrows the controller mutably until it returns.
    pub async fn submit(&mut self, video_url: &str, search_intent: &str) -> SubmitOutcome {
        self.clear_error();
        let video_url = match normalize_video_url(video_url) {
            Ok(url) => url,
            Err(e) => {
                self.display_failure(Failure::from(e.clone()));
                return SubmitOutcome::Rejected(e);
            }
        };

        self.set_busy(true);
        let outcome = self.load(video_url, search_intent).await;
        self.set_busy(false);
        outcome
    }

    async fn load(&mut self, video_url: String, search_intent: &str) -> SubmitOutcome {
        let request = ProcessVideoRequest::new(video_url, search_intent);
        tracing::info!("Processing {}", request.video_url);

        let response = match self.api.process_video(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Request to the API failed: {}", e);
                let failure = Failure::network();
                self.display_failure(failure.clone());
                return SubmitOutcome::Failed(failure);
            }
        };

        match classify_response(response.status, &response.body) {
            Outcome::Article(result) | Outcome::MetadataOnly(result) => {
                self.render(result.clone(), true);
                SubmitOutcome::Rendered {
                    video_id: result.video_id().map(str::to_string),
                }
            }
            Outcome::Failure(failure) => {
                self.display_failure(failure.clone());
                SubmitOutcome::Failed(failure)
            }
        }
    }

    /// Show `result`. Only fresh submissions touch the history order and
    /// scroll to the output.
    pub fn render(&mut self, result: ArticleResult, is_new_submission: bool) {
        self.clear_error();
        let model = RenderModel::from_result(&result);

        let update = self.state.player.request(result.video_id(), result.title());
        self.apply_player_update(update);

        match result.video_id().map(str::to_string) {
            Some(video_id) => {
                if is_new_submission {
                    if let Ok(entry) = HistoryEntry::try_from(result) {
                        if let Some(evicted) = self.state.history.push(entry) {
                            tracing::debug!("History full, dropped {}", evicted.video_id());
                        }
                    }
                }
                self.state.active_video_id = Some(video_id);
            }
            None => self.state.active_video_id = None,
        }
        self.render_history();

        self.surface.show_output(&model);
        self.surface.set_copy_visible(model.copy_visible);
        if is_new_submission {
            self.surface.scroll_to_output();
        }
        self.state.current = Some(model);
    }

    /// Replay a history entry. Out-of-range indices are ignored.
    pub fn open_history(&mut self, index: usize) -> bool {
        let Some(entry) = self.state.history.get(index) else {
            return false;
        };
        tracing::info!("Loading from history: {}", entry.title());
        let result = entry.result().clone();
        self.render(result, false);
        true
    }

    /// Handle a click on a section's timestamp link.
    pub async fn jump_to_timestamp(&mut self, video_id: &str, seconds: u64) -> JumpOutcome {
        let outcome = self.state.player.jump_to(video_id, seconds).await;
        if outcome == JumpOutcome::Seeked {
            self.surface.scroll_to_player();
        }
        outcome
    }

    /// The embed widget finished loading.
    pub fn on_player_ready(&mut self) {
        if let Some(update) = self.state.player.on_api_ready() {
            self.apply_player_update(update);
        }
    }

    /// The embed player reported `code`. Returns whether it was shown.
    ///
    /// A rendered article stays visible, and backend errors already on
    /// screen are not replaced.
    pub fn on_player_error(&mut self, code: i32) -> bool {
        let message = player_error_message(code);
        tracing::error!("{}", message);

        if self
            .state
            .displayed_error
            .as_ref()
            .map_or(false, |shown| shown.kind.is_backend())
        {
            return false;
        }

        self.surface.show_error(&message);
        self.state.displayed_error = Some(Failure::new(FailureKind::Player, message));
        true
    }

    /// Copy the current article as plain text. Returns `false` when there is
    /// nothing to copy.
    pub fn copy_to_clipboard(&mut self) -> Result<bool> {
        let Some(model) = &self.state.current else {
            return Ok(false);
        };
        let title = model
            .video
            .as_ref()
            .map(|_| self.state.player.title())
            .unwrap_or(DEFAULT_COPY_TITLE);

        match model.clipboard_text(title) {
            Some(text) => {
                self.surface.write_clipboard(&text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn display_failure(&mut self, failure: Failure) {
        self.surface.show_error(&failure.message);
        self.surface.hide_output();
        self.surface.set_copy_visible(false);
        if failure.kind.hides_player() {
            self.surface.hide_player();
        }
        self.state.current = None;
        self.state.displayed_error = Some(failure);
    }

    fn clear_error(&mut self) {
        self.surface.clear_error();
        self.state.displayed_error = None;
    }

    fn set_busy(&mut self, busy: bool) {
        self.state.busy = busy;
        self.surface.set_busy(busy);
    }

    fn apply_player_update(&mut self, update: PlayerUpdate) {
        match update {
            PlayerUpdate::Show(title) => self.surface.show_player(&title),
            PlayerUpdate::Hide => self.surface.hide_player(),
            PlayerUpdate::Queued => {}
        }
    }

    fn render_history(&mut self) {
        let items = self.state.history.items(self.state.active_video_id.as_deref());
        self.surface.render_history(&items);
    }
}
