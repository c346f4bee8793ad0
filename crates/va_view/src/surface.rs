use va_core::Result;

use crate::history::HistoryItem;
use crate::render::RenderModel;

/// Where the view controller draws. Implementations own all the platform
/// specifics; the controller only decides what is shown.
pub trait DisplaySurface {
    /// Busy indicator on and submit control disabled, or the reverse.
    fn set_busy(&mut self, busy: bool);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);
    fn show_output(&mut self, model: &RenderModel);
    fn hide_output(&mut self);
    fn set_copy_visible(&mut self, visible: bool);
    fn show_player(&mut self, title: &str);
    fn hide_player(&mut self);
    fn render_history(&mut self, items: &[HistoryItem]);
    fn scroll_to_output(&mut self) {}
    fn scroll_to_player(&mut self) {}
    fn write_clipboard(&mut self, text: &str) -> Result<()>;
}

/// Keeps the displayed state in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub busy: bool,
    pub error: Option<String>,
    pub output: Option<RenderModel>,
    pub copy_visible: bool,
    pub player_title: Option<String>,
    pub history: Vec<HistoryItem>,
    pub output_scrolls: usize,
    pub player_scrolls: usize,
    pub clipboard: Option<String>,
    /// Every busy toggle, in order.
    pub busy_changes: Vec<bool>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_history_item(&self) -> Option<&HistoryItem> {
        self.history.iter().find(|item| item.active)
    }
}

impl DisplaySurface for MemorySurface {
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.busy_changes.push(busy);
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn show_output(&mut self, model: &RenderModel) {
        self.output = Some(model.clone());
    }

    fn hide_output(&mut self) {
        self.output = None;
    }

    fn set_copy_visible(&mut self, visible: bool) {
        self.copy_visible = visible;
    }

    fn show_player(&mut self, title: &str) {
        self.player_title = Some(title.to_string());
    }

    fn hide_player(&mut self) {
        self.player_title = None;
    }

    fn render_history(&mut self, items: &[HistoryItem]) {
        self.history = items.to_vec();
    }

    fn scroll_to_output(&mut self) {
        self.output_scrolls += 1;
    }

    fn scroll_to_player(&mut self) {
        self.player_scrolls += 1;
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}
