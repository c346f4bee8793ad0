use va_core::{ArticleResult, ArticleSection};

use crate::format::{format_timestamp, paragraphs, section_anchor, summary_lines};

pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_TABLE_OF_CONTENTS: &str = "No table of contents available.";
pub const NO_ARTICLE_CONTENT: &str = "No article content available.";
pub const METADATA_ONLY: &str = "Video metadata fetched, but no article content could be generated (e.g., missing transcript or LLM processing issue).";
pub const UNTITLED_SECTION: &str = "Untitled Section";

/// Everything the display surface needs to show one result. Built without
/// touching any display state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub video: Option<VideoView>,
    pub summary: SummaryView,
    pub table_of_contents: TocView,
    pub body: BodyView,
    pub copy_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoView {
    pub video_id: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryView {
    Lines(Vec<String>),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocView {
    Entries(Vec<TocEntry>),
    Placeholder(&'static str),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    Sections(Vec<SectionView>),
    Placeholder(&'static str),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub anchor: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub relevant: bool,
    pub timestamp: Option<TimestampLink>,
}

/// Jump-to-time affordance attached to the end of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampLink {
    pub video_id: String,
    pub seconds: u64,
    pub label: String,
}

impl TimestampLink {
    pub fn tooltip(&self) -> String {
        format!("Play from {}", self.label)
    }
}

impl RenderModel {
    pub fn from_result(result: &ArticleResult) -> Self {
        let video = result.video_id().map(|video_id| VideoView {
            video_id: video_id.to_string(),
            title: result.title().map(str::to_string),
        });

        let Some(article) = &result.llm_article_data else {
            // metadata without an article gets its own notice instead of
            // the individual placeholders, even when the id is blank
            let has_metadata = result.video_data.is_some();
            let summary = if has_metadata {
                SummaryView::Placeholder(METADATA_ONLY)
            } else {
                SummaryView::Placeholder(NO_SUMMARY)
            };
            let (table_of_contents, body) = if has_metadata {
                (TocView::Empty, BodyView::Empty)
            } else {
                (
                    TocView::Placeholder(NO_TABLE_OF_CONTENTS),
                    BodyView::Placeholder(NO_ARTICLE_CONTENT),
                )
            };
            return Self {
                video,
                summary,
                table_of_contents,
                body,
                copy_visible: false,
            };
        };

        let summary = if article.summary.is_empty() {
            SummaryView::Placeholder(NO_SUMMARY)
        } else {
            SummaryView::Lines(summary_lines(&article.summary))
        };

        let table_of_contents = if article.table_of_contents.is_empty() {
            TocView::Placeholder(NO_TABLE_OF_CONTENTS)
        } else {
            TocView::Entries(
                article
                    .table_of_contents
                    .iter()
                    .map(|title| TocEntry {
                        title: title.clone(),
                        anchor: section_anchor(title),
                    })
                    .collect(),
            )
        };

        let video_id = video.as_ref().map(|v| v.video_id.as_str());
        let body = if article.article_sections.is_empty() {
            BodyView::Placeholder(NO_ARTICLE_CONTENT)
        } else {
            BodyView::Sections(
                article
                    .article_sections
                    .iter()
                    .enumerate()
                    .map(|(index, section)| section_view(index, section, video_id))
                    .collect(),
            )
        };

        Self {
            video,
            summary,
            table_of_contents,
            body,
            copy_visible: article.has_content(),
        }
    }

    pub fn sections(&self) -> &[SectionView] {
        match &self.body {
            BodyView::Sections(sections) => sections,
            _ => &[],
        }
    }

    /// Plain-text export of the article. `None` when there is nothing to
    /// copy besides the title.
    pub fn clipboard_text(&self, title: &str) -> Option<String> {
        let mut text = format!("{}\n\n", title);

        if let SummaryView::Lines(lines) = &self.summary {
            let summary = lines.join("\n");
            let summary = summary.trim();
            if !summary.is_empty() {
                text.push_str(&format!("Summary:\n{}\n\n", summary));
            }
        }

        if let TocView::Entries(entries) = &self.table_of_contents {
            text.push_str("Table of Contents:\n");
            for entry in entries {
                text.push_str(&format!("- {}\n", entry.title.trim()));
            }
            text.push('\n');
        }

        let sections = self.sections();
        if !sections.is_empty() {
            text.push_str("Full Article:\n");
            for section in sections {
                text.push_str(&format!("\n## {}\n", section.heading.trim()));
                let content = section
                    .paragraphs
                    .iter()
                    .map(|p| p.trim())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                if !content.is_empty() {
                    text.push_str(&content);
                    text.push_str("\n\n");
                }
            }
        }

        let text = text.trim();
        if text.strip_prefix(title.trim()).map_or(false, |rest| rest.trim().is_empty()) {
            return None;
        }
        Some(text.to_string())
    }
}

fn section_view(index: usize, section: &ArticleSection, video_id: Option<&str>) -> SectionView {
    let heading = section.heading.as_deref().filter(|h| !h.is_empty());
    let anchor = match heading {
        Some(heading) => section_anchor(heading),
        None => format!("section-untitled-section-{}", index),
    };

    let timestamp = match (section.timestamp_seconds, video_id) {
        (Some(seconds), Some(video_id)) if seconds.is_finite() && seconds >= 0.0 => Some(TimestampLink {
            video_id: video_id.to_string(),
            seconds: seconds.floor() as u64,
            label: format_timestamp(seconds),
        }),
        _ => None,
    };

    SectionView {
        anchor,
        heading: heading.unwrap_or(UNTITLED_SECTION).to_string(),
        paragraphs: paragraphs(&section.content_block),
        relevant: section.relevant_to_search_intent,
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use va_core::{LlmArticle, VideoData};

    fn section(heading: Option<&str>, content: &str, ts: Option<f64>) -> ArticleSection {
        ArticleSection {
            heading: heading.map(str::to_string),
            content_block: content.to_string(),
            timestamp_seconds: ts,
            relevant_to_search_intent: false,
        }
    }

    fn result(article: Option<LlmArticle>) -> ArticleResult {
        ArticleResult {
            video_data: Some(VideoData {
                video_id: "x".to_string(),
                title: "T".to_string(),
                error: None,
            }),
            llm_article_data: article,
            message: None,
        }
    }

    #[test]
    fn test_summary_only() {
        let model = RenderModel::from_result(&result(Some(LlmArticle {
            summary: "S".to_string(),
            ..Default::default()
        })));

        assert_eq!(model.summary, SummaryView::Lines(vec!["S".to_string()]));
        assert_eq!(model.table_of_contents, TocView::Placeholder(NO_TABLE_OF_CONTENTS));
        assert_eq!(model.body, BodyView::Placeholder(NO_ARTICLE_CONTENT));
        assert_eq!(model.video.as_ref().map(|v| v.video_id.as_str()), Some("x"));
        assert!(model.copy_visible);
    }

    #[test]
    fn test_sections_and_timestamps() {
        let mut relevant = section(Some("Deep Dive"), "Body\r\n\r\nMore", Some(3725.7));
        relevant.relevant_to_search_intent = true;
        let model = RenderModel::from_result(&result(Some(LlmArticle {
            summary: String::new(),
            table_of_contents: vec!["Deep Dive".to_string()],
            article_sections: vec![relevant, section(None, "", None)],
        })));

        assert_eq!(model.summary, SummaryView::Placeholder(NO_SUMMARY));
        assert!(model.copy_visible);

        let TocView::Entries(entries) = &model.table_of_contents else {
            panic!("expected toc entries");
        };
        let sections = model.sections();
        assert_eq!(entries[0].anchor, sections[0].anchor);

        assert!(sections[0].relevant);
        assert_eq!(sections[0].paragraphs, vec!["Body", "More"]);
        assert_eq!(
            sections[0].timestamp,
            Some(TimestampLink {
                video_id: "x".to_string(),
                seconds: 3725,
                label: "01:02:05".to_string(),
            })
        );
        assert_eq!(sections[0].timestamp.as_ref().unwrap().tooltip(), "Play from 01:02:05");

        assert_eq!(sections[1].heading, UNTITLED_SECTION);
        assert_eq!(sections[1].anchor, "section-untitled-section-1");
        assert!(sections[1].timestamp.is_none());
    }

    #[test]
    fn test_no_timestamp_without_video_id() {
        let mut no_video = result(Some(LlmArticle {
            article_sections: vec![section(Some("A"), "a", Some(10.0))],
            ..Default::default()
        }));
        no_video.video_data = None;

        let model = RenderModel::from_result(&no_video);
        assert!(model.video.is_none());
        assert!(model.sections()[0].timestamp.is_none());
    }

    #[test]
    fn test_metadata_only() {
        let model = RenderModel::from_result(&result(None));
        assert_eq!(model.summary, SummaryView::Placeholder(METADATA_ONLY));
        assert_eq!(model.table_of_contents, TocView::Empty);
        assert_eq!(model.body, BodyView::Empty);
        assert!(!model.copy_visible);
    }

    #[test]
    fn test_metadata_only_with_blank_id() {
        let mut blank = result(None);
        if let Some(video) = blank.video_data.as_mut() {
            video.video_id.clear();
        }
        let model = RenderModel::from_result(&blank);
        assert!(model.video.is_none());
        assert_eq!(model.summary, SummaryView::Placeholder(METADATA_ONLY));
        assert_eq!(model.table_of_contents, TocView::Empty);
        assert_eq!(model.body, BodyView::Empty);

        let nothing = ArticleResult::default();
        let model = RenderModel::from_result(&nothing);
        assert_eq!(model.summary, SummaryView::Placeholder(NO_SUMMARY));
        assert_eq!(model.body, BodyView::Placeholder(NO_ARTICLE_CONTENT));
    }

    #[test]
    fn test_clipboard_text() {
        let model = RenderModel::from_result(&result(Some(LlmArticle {
            summary: "Short summary.".to_string(),
            table_of_contents: vec!["Intro".to_string(), "Outro".to_string()],
            article_sections: vec![
                section(Some("Intro"), "Hello.\n\nWorld.", Some(5.0)),
                section(Some("Outro"), "", None),
            ],
        })));

        let text = model.clipboard_text("My Video").unwrap();
        assert_eq!(
            text,
            "My Video\n\nSummary:\nShort summary.\n\nTable of Contents:\n- Intro\n- Outro\n\nFull Article:\n\n## Intro\nHello.\nWorld.\n\n\n## Outro"
        );
    }

    #[test]
    fn test_clipboard_text_empty() {
        let model = RenderModel::from_result(&result(None));
        assert_eq!(model.clipboard_text("My Video"), None);
    }
}
