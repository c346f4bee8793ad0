//! Text helpers shared by the render model.

/// `HH:MM:SS`, each part floored and zero padded. Hours are not wrapped.
pub fn format_timestamp(total_seconds: f64) -> String {
    let hours = (total_seconds / 3600.0).floor();
    let remaining = total_seconds % 3600.0;
    let minutes = (remaining / 60.0).floor();
    let seconds = (remaining % 60.0).floor();
    format!("{:02}:{:02}:{:02}", hours as u64, minutes as u64, seconds as u64)
}

/// Anchor id for a heading: whitespace runs become `-`, lowercased, then
/// percent-encoded.
pub fn section_anchor(heading: &str) -> String {
    let mut dashed = String::with_capacity(heading.len());
    let mut in_whitespace = false;
    for c in heading.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                dashed.push('-');
            }
            in_whitespace = true;
        } else {
            dashed.push(c);
            in_whitespace = false;
        }
    }
    format!("section-{}", encode_uri_component(&dashed.to_lowercase()))
}

// Like JavaScript's `encodeURIComponent`, which leaves `!'()*` as is.
fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Paragraphs of a content block: CRLF normalized, split on newline runs,
/// blank paragraphs dropped.
pub fn paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split('\n')
        .filter(|p| !p.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Summary lines as displayed, blank lines kept.
pub fn summary_lines(summary: &str) -> Vec<String> {
    summary.replace("\r\n", "\n").split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(3725.0), "01:02:05");
        assert_eq!(format_timestamp(59.0), "00:00:59");
        assert_eq!(format_timestamp(0.0), "00:00:00");
        assert_eq!(format_timestamp(59.9), "00:00:59");
        assert_eq!(format_timestamp(36000.0 * 10.0), "100:00:00");
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(section_anchor("Getting Started"), "section-getting-started");
        assert_eq!(section_anchor("Q&A   Time"), "section-q%26a-time");
        assert_eq!(section_anchor("Café"), "section-caf%C3%A9");
        assert_eq!(section_anchor(" padded "), "section--padded-");
        assert_eq!(section_anchor("What's new (2024)!*"), "section-what's-new-(2024)!*");
    }

    #[test]
    fn test_paragraphs() {
        let text = "First line.\r\n\r\nSecond line.\n   \nThird.";
        assert_eq!(paragraphs(text), vec!["First line.", "Second line.", "Third."]);
        assert!(paragraphs("\n\n").is_empty());
    }

    #[test]
    fn test_summary_lines_keep_blank_lines() {
        assert_eq!(summary_lines("Intro\n\n- point"), vec!["Intro", "", "- point"]);
    }
}
