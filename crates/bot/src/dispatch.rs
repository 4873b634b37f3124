//! Dispatch — route inbound chat text to engine calls and reply text.
//!
//! Transport-agnostic on purpose: [`handle_text`] takes a chat id and
//! raw text and returns what, if anything, should be sent back. The
//! Telegram layer in `runtime::serve` only delivers the result, which
//! keeps every authorization and menu rule testable against a fake
//! engine.

use crate::flow::{FlowKind, PendingFlow, Selection};
use crate::state::SharedState;
use engine::client::EngineError;
use engine::format;

pub const BOT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A reply to send back to the chat, optionally with a one-time
/// selection keyboard (one row per button label).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub text: String,
    pub keyboard: Option<Vec<String>>,
}

impl Outgoing {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ps,
    Logs,
    Restart,
    Images,
    Version,
}

/// Exact-match, case-sensitive command tokens. `/ps extra` is not a
/// command.
fn parse_command(text: &str) -> Option<Command> {
    match text {
        "/ps" => Some(Command::Ps),
        "/logs" => Some(Command::Logs),
        "/restart" => Some(Command::Restart),
        "/images" => Some(Command::Images),
        "/version" => Some(Command::Version),
        _ => None,
    }
}

/// Handle one inbound message. `None` means nothing is sent back.
pub async fn handle_text(state: &SharedState, chat_id: i64, text: &str) -> Option<Outgoing> {
    tracing::info!(chat_id, text, "inbound message");

    if !state.allow_list.is_allowed(chat_id) {
        tracing::warn!(chat_id, "unauthorized access blocked");
        return None;
    }

    if let Some(command) = parse_command(text) {
        return Some(run_command(state, chat_id, command).await);
    }

    // Not a command; the text may answer a pending menu.
    resolve_flow(state, chat_id, text).await
}

async fn run_command(state: &SharedState, chat_id: i64, command: Command) -> Outgoing {
    match command {
        Command::Ps => match state.engine.list_containers().await {
            Ok(containers) => Outgoing::text(format::render_containers(&containers)),
            Err(e) => engine_failure(e),
        },
        Command::Images => match state.engine.list_images().await {
            Ok(images) => Outgoing::text(format::render_images(&images)),
            Err(e) => engine_failure(e),
        },
        Command::Version => match state.engine.server_version().await {
            Ok(version) => Outgoing::text(format::render_version(BOT_VERSION, &version)),
            Err(e) => engine_failure(e),
        },
        Command::Logs => open_menu(state, chat_id, FlowKind::Logs).await,
        Command::Restart => open_menu(state, chat_id, FlowKind::Restart).await,
    }
}

/// Engine failures are echoed to the chat verbatim. No retries.
fn engine_failure(err: EngineError) -> Outgoing {
    tracing::error!(error = %err, "engine call failed");
    Outgoing::text(err.to_string())
}

/// Enumerate containers and park a menu for this chat. An enumeration
/// failure produces only the error text, no menu and no state change.
async fn open_menu(state: &SharedState, chat_id: i64, kind: FlowKind) -> Outgoing {
    let names = match state.engine.container_names().await {
        Ok(names) => names,
        Err(e) => return engine_failure(e),
    };

    let flow = PendingFlow::open(kind, &names);
    let buttons = flow.buttons.clone();
    state.flows.insert(chat_id, flow);

    Outgoing {
        text: "Select container:".to_string(),
        keyboard: Some(buttons),
    }
}

async fn resolve_flow(state: &SharedState, chat_id: i64, text: &str) -> Option<Outgoing> {
    let flow = {
        let entry = state.flows.get(&chat_id)?;
        if entry.expired() {
            drop(entry);
            state.flows.remove(&chat_id);
            return None;
        }
        entry.value().clone()
    };

    match flow.resolve(text) {
        Selection::NoMatch => None,
        Selection::Cancel => {
            state.flows.remove(&chat_id);
            Some(Outgoing::text("Cancelled."))
        }
        Selection::Container(name) => {
            state.flows.remove(&chat_id);
            Some(run_selection(state, flow.kind, &name).await)
        }
    }
}

async fn run_selection(state: &SharedState, kind: FlowKind, name: &str) -> Outgoing {
    match kind {
        FlowKind::Logs => match state.engine.tail_logs(name).await {
            Ok(logs) => Outgoing::text(logs),
            Err(e) => engine_failure(e),
        },
        FlowKind::Restart => match state.engine.restart_container(name).await {
            Ok(()) => Outgoing::text("Container restarted."),
            Err(e) => engine_failure(e),
        },
    }
}
