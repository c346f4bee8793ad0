use tokio::io::{AsyncBufReadExt, BufReader};
use va_view::{ArticleApi, DisplaySurface, JumpOutcome, ViewController};

use crate::terminal::print_history;

const HELP: &str = "\
<url> [search intent]   process a video
:history                list recent videos
:open <n>               show history entry n
:jump <seconds>         seek the current video
:copy                   print the article as plain text
:help                   this message
:quit                   leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Submit { url: String, search_intent: String },
    History,
    Open(usize),
    Jump(u64),
    Copy,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let Some(rest) = line.strip_prefix(':') else {
        let (url, intent) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        return Command::Submit {
            url: url.to_string(),
            search_intent: intent.trim().to_string(),
        };
    };

    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let arg = arg.trim();
    match name {
        "history" | "h" => Command::History,
        "open" | "o" => arg.parse().map(Command::Open).unwrap_or_else(|_| Command::Unknown(line.to_string())),
        "jump" | "j" => arg.parse().map(Command::Jump).unwrap_or_else(|_| Command::Unknown(line.to_string())),
        "copy" | "c" => Command::Copy,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

pub async fn run<A, S>(view: &mut ViewController<A, S>) -> std::io::Result<()>
where
    A: ArticleApi,
    S: DisplaySurface,
{
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Submit { url, search_intent } => {
                let outcome = view.submit(&url, &search_intent).await;
                tracing::debug!("Submission finished: {:?}", outcome);
            }
            Command::History => {
                let state = view.state();
                print_history(&state.history.items(state.active_video_id.as_deref()));
            }
            Command::Open(index) => {
                if !view.open_history(index) {
                    println!("No history entry {}", index);
                }
            }
            Command::Jump(seconds) => {
                let Some(video_id) = view.state().active_video_id.clone() else {
                    println!("Nothing is loaded.");
                    continue;
                };
                match view.jump_to_timestamp(&video_id, seconds).await {
                    JumpOutcome::Seeked => println!("▶ {}s", seconds),
                    other => println!("Could not seek: {:?}", other),
                }
            }
            Command::Copy => match view.copy_to_clipboard() {
                Ok(true) => {}
                Ok(false) => println!("Nothing to copy."),
                Err(e) => println!("Copy failed: {}", e),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(input) => println!("Unknown command: {} (try :help)", input),
        }
    }
    Ok(())
}
