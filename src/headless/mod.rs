//! Headless mode - NDJSON events on stdout, commands on stdin
//!
//! Every [`EngineEvent`] is turned into one or more [`HeadlessEvent`]s and
//! written as a single JSON line tagged with an `"event"` field:
//!
//! ```json
//! {"event":"page_loaded","page":"init","route":"/","timestamp":1704700001000}
//! {"event":"log","severity":"info","line":"[INFO] starting","timestamp":1704700002000}
//! {"event":"init_state","state":"succeeded","timestamp":1704700002001}
//! ```
//!
//! Commands are read one per line from stdin; see [`parse_command`].

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use igpanel_app::{ActionKind, EngineEvent, Message, PromptKind};
use igpanel_core::{AccountStatus, InitState, Page};
use serde::Serialize;

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    PageLoaded {
        page: Page,
        route: String,
        timestamp: i64,
    },

    Log {
        severity: String,
        line: String,
        timestamp: i64,
    },

    LogCleared {
        timestamp: i64,
    },

    InitState {
        state: InitState,
        timestamp: i64,
    },

    Prompt {
        kind: String,
        title: String,
        message: String,
        timestamp: i64,
    },

    Notification {
        kind: String,
        message: String,
        timestamp: i64,
    },

    Accounts {
        initialized: bool,
        accounts: Vec<AccountStatus>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        timestamp: i64,
    },

    Connection {
        state: String,
        timestamp: i64,
    },

    Shutdown {
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Translate one engine event; a log batch becomes one event per line
    pub fn from_engine_event(event: &EngineEvent) -> Vec<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::PageLoaded { page } => vec![Self::PageLoaded {
                page: *page,
                route: page.route().to_string(),
                timestamp,
            }],
            EngineEvent::LogEntry { entry } => vec![Self::Log {
                severity: entry.severity.label().to_string(),
                line: entry.line.clone(),
                timestamp: entry.timestamp.timestamp_millis(),
            }],
            EngineEvent::LogBatch { entries } => entries
                .iter()
                .map(|entry| Self::Log {
                    severity: entry.severity.label().to_string(),
                    line: entry.line.clone(),
                    timestamp: entry.timestamp.timestamp_millis(),
                })
                .collect(),
            EngineEvent::LogCleared => vec![Self::LogCleared { timestamp }],
            EngineEvent::InitStateChanged { state } => vec![Self::InitState {
                state: *state,
                timestamp,
            }],
            EngineEvent::PromptShown { prompt } => vec![Self::Prompt {
                kind: match prompt.kind {
                    PromptKind::Success => "success",
                    PromptKind::Error => "error",
                }
                .to_string(),
                title: prompt.title.clone(),
                message: prompt.message.clone(),
                timestamp,
            }],
            EngineEvent::Notification { toast } => vec![Self::Notification {
                kind: toast.kind.label().to_string(),
                message: toast.message.clone(),
                timestamp,
            }],
            EngineEvent::AccountsUpdated { snapshot } => vec![Self::Accounts {
                initialized: snapshot.initialized,
                accounts: snapshot.accounts.clone(),
                message: snapshot.message.clone(),
                timestamp,
            }],
            EngineEvent::ConnectionChanged { state } => vec![Self::Connection {
                state: state.label().to_string(),
                timestamp,
            }],
            EngineEvent::Shutdown => vec![Self::Shutdown { timestamp }],
        }
    }

    /// Write this event as one JSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
        out.flush()
    }

    /// Current time in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Parse one stdin command line
///
/// Returns `Ok(None)` for blank lines. Missing arguments are passed through
/// empty so the engine reports them like an empty form field.
pub fn parse_command(line: &str) -> Result<Option<Message>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let message = match word {
        "init" => Message::StartInit,
        "refresh" => Message::RefreshAccounts,
        "clear" => Message::ClearLogs,
        "dismiss" => Message::DismissPrompt,
        "q" | "quit" => Message::Quit,
        other => {
            let kind = ActionKind::from_command(other)
                .ok_or_else(|| format!("Unknown command: {other}"))?;
            action_message(kind, rest)
        }
    };
    Ok(Some(message))
}

fn action_message(kind: ActionKind, args: &str) -> Message {
    let mut username = String::new();
    let mut url = String::new();
    let mut comment = String::new();

    match kind {
        ActionKind::Follow | ActionKind::Unfollow => username = args.to_string(),
        ActionKind::Comment | ActionKind::CommentAi => {
            let (first, text) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
            url = first.to_string();
            comment = text.trim().to_string();
        }
        _ => url = args.to_string(),
    }

    Message::SubmitWith {
        kind,
        username,
        url,
        comment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use igpanel_app::{Toast, ToastKind};
    use igpanel_core::LogEntry;
    use std::time::Instant;

    fn submit(msg: Message) -> (ActionKind, String, String, String) {
        match msg {
            Message::SubmitWith {
                kind,
                username,
                url,
                comment,
            } => (kind, username, url, comment),
            other => panic!("expected SubmitWith, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(parse_command("init"), Ok(Some(Message::StartInit))));
        assert!(matches!(
            parse_command(" refresh "),
            Ok(Some(Message::RefreshAccounts))
        ));
        assert!(matches!(parse_command("clear"), Ok(Some(Message::ClearLogs))));
        assert!(matches!(parse_command("quit"), Ok(Some(Message::Quit))));
        assert!(matches!(parse_command(""), Ok(None)));
    }

    #[test]
    fn test_parse_follow() {
        let msg = parse_command("follow alice").unwrap().unwrap();
        assert_eq!(
            submit(msg),
            (ActionKind::Follow, "alice".into(), String::new(), String::new())
        );
    }

    #[test]
    fn test_parse_url_action() {
        let msg = parse_command("unsave https://instagram.com/p/1").unwrap().unwrap();
        let (kind, _, url, _) = submit(msg);
        assert_eq!(kind, ActionKind::Unsave);
        assert_eq!(url, "https://instagram.com/p/1");
    }

    #[test]
    fn test_parse_comment_keeps_whole_text() {
        let msg = parse_command("comment-ai https://instagram.com/p/1 nice  shot!")
            .unwrap()
            .unwrap();
        let (kind, _, url, comment) = submit(msg);
        assert_eq!(kind, ActionKind::CommentAi);
        assert_eq!(url, "https://instagram.com/p/1");
        assert_eq!(comment, "nice  shot!");
    }

    #[test]
    fn test_parse_missing_argument_passes_empty() {
        let msg = parse_command("follow").unwrap().unwrap();
        let (kind, username, _, _) = submit(msg);
        assert_eq!(kind, ActionKind::Follow);
        assert!(username.is_empty());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_command("launch rockets").unwrap_err(),
            "Unknown command: launch"
        );
    }

    #[test]
    fn test_log_batch_expands() {
        let event = EngineEvent::LogBatch {
            entries: vec![
                LogEntry::from_line("[INFO] starting"),
                LogEntry::from_line("[SUCCESS] done"),
            ],
        };
        let out = HeadlessEvent::from_engine_event(&event);
        assert_eq!(out.len(), 2);
        assert!(matches!(&out[1], HeadlessEvent::Log { severity, .. } if severity == "success"));
    }

    #[test]
    fn test_serialized_shape() {
        let toast = Toast {
            id: 1,
            kind: ToastKind::Warning,
            message: "Enter a username".into(),
            expires_at: Instant::now(),
        };
        let events = HeadlessEvent::from_engine_event(&EngineEvent::Notification { toast });

        let mut out = Vec::new();
        events[0].write_to(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["event"], "notification");
        assert_eq!(json["kind"], "warning");
        assert_eq!(json["message"], "Enter a username");
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn test_page_and_init_state_shape() {
        let page = HeadlessEvent::from_engine_event(&EngineEvent::PageLoaded {
            page: Page::Dashboard,
        });
        let json = serde_json::to_value(&page[0]).unwrap();
        assert_eq!(json["event"], "page_loaded");
        assert_eq!(json["page"], "dashboard");
        assert_eq!(json["route"], "/dashboard");

        let init = HeadlessEvent::from_engine_event(&EngineEvent::InitStateChanged {
            state: InitState::Failed,
        });
        let json = serde_json::to_value(&init[0]).unwrap();
        assert_eq!(json["event"], "init_state");
        assert_eq!(json["state"], "failed");
    }
}
