use va_core::Result;
use va_view::history::HistoryItem;
use va_view::render::{BodyView, SummaryView, TocView};
use va_view::{DisplaySurface, RenderModel};

/// Prints the view to stdout.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    player_title: Option<String>,
}

impl DisplaySurface for TerminalSurface {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            println!("⏳ Processing...");
        }
    }

    fn show_error(&mut self, message: &str) {
        println!("❌ {}", message);
    }

    fn clear_error(&mut self) {}

    fn show_output(&mut self, model: &RenderModel) {
        if let Some(title) = &self.player_title {
            println!("\n🎬 {}", title);
        }

        println!("\nSummary");
        match &model.summary {
            SummaryView::Lines(lines) => lines.iter().for_each(|line| println!("  {}", line)),
            SummaryView::Placeholder(text) => println!("  {}", text),
        }

        match &model.table_of_contents {
            TocView::Entries(entries) => {
                println!("\nTable of Contents");
                for (i, entry) in entries.iter().enumerate() {
                    println!("  {}. {} (#{})", i + 1, entry.title, entry.anchor);
                }
            }
            TocView::Placeholder(text) => println!("\nTable of Contents\n  {}", text),
            TocView::Empty => {}
        }

        match &model.body {
            BodyView::Sections(sections) => {
                println!("\nArticle");
                for section in sections {
                    let marker = if section.relevant { "★ " } else { "" };
                    println!("\n  {}{}", marker, section.heading);
                    for paragraph in &section.paragraphs {
                        println!("    {}", paragraph);
                    }
                    if let Some(link) = &section.timestamp {
                        println!("    ▶ {} (:jump {})", link.tooltip(), link.seconds);
                    }
                }
            }
            BodyView::Placeholder(text) => println!("\nArticle\n  {}", text),
            BodyView::Empty => {}
        }
        println!();
    }

    fn hide_output(&mut self) {}

    fn set_copy_visible(&mut self, visible: bool) {
        if visible {
            println!("📋 :copy to export the article");
        }
    }

    fn show_player(&mut self, title: &str) {
        self.player_title = Some(title.to_string());
    }

    fn hide_player(&mut self) {
        self.player_title = None;
    }

    fn render_history(&mut self, items: &[HistoryItem]) {
        tracing::debug!("History now has {} entries", items.len());
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        println!("----- article -----\n{}\n-------------------", text);
        Ok(())
    }
}

/// Listing for the `:history` command.
pub fn print_history(items: &[HistoryItem]) {
    if items.is_empty() {
        println!("No history yet.");
        return;
    }
    for item in items {
        let marker = if item.active { "→" } else { " " };
        println!("{} [{}] {} ({})", marker, item.index, item.title, item.video_id);
    }
}
