//! Selection flow — pending per-chat container menus for `/logs` and `/restart`.

use std::time::{Duration, Instant};

/// How long a pending menu stays answerable before it is dropped.
pub const FLOW_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Logs,
    Restart,
}

impl FlowKind {
    pub fn action_label(&self) -> &'static str {
        match self {
            FlowKind::Logs => "Logs",
            FlowKind::Restart => "Restart",
        }
    }

    pub fn cancel_label(&self) -> String {
        format!("Cancel {}", self.action_label())
    }
}

/// How a chat's reply matched against a pending menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Cancel,
    Container(String),
    NoMatch,
}

/// A menu waiting for the chat's next message.
#[derive(Debug, Clone)]
pub struct PendingFlow {
    pub kind: FlowKind,
    /// Button labels, one `"<Action> <name>"` per container plus the
    /// trailing cancel button.
    pub buttons: Vec<String>,
    pub opened_at: Instant,
}

impl PendingFlow {
    pub fn open(kind: FlowKind, names: &[String]) -> Self {
        let mut buttons: Vec<String> = names
            .iter()
            .map(|name| format!("{} {}", kind.action_label(), name))
            .collect();
        buttons.push(kind.cancel_label());
        Self {
            kind,
            buttons,
            opened_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.opened_at.elapsed() > FLOW_TTL
    }

    /// Match the chat's reply against this menu. Only exact button text
    /// counts; the container name is everything after the first space.
    pub fn resolve(&self, reply: &str) -> Selection {
        if reply == self.kind.cancel_label() {
            return Selection::Cancel;
        }
        if self.buttons.iter().any(|button| button == reply) {
            if let Some((_, name)) = reply.split_once(' ') {
                return Selection::Container(name.to_string());
            }
        }
        Selection::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn menu_has_one_button_per_container_plus_cancel() {
        let flow = PendingFlow::open(FlowKind::Restart, &names(&["web", "db"]));
        assert_eq!(flow.buttons, vec!["Restart web", "Restart db", "Cancel Restart"]);
    }

    #[test]
    fn logs_menu_uses_logs_labels() {
        let flow = PendingFlow::open(FlowKind::Logs, &names(&["web"]));
        assert_eq!(flow.buttons, vec!["Logs web", "Cancel Logs"]);
    }

    #[test]
    fn empty_container_list_still_offers_cancel() {
        let flow = PendingFlow::open(FlowKind::Logs, &[]);
        assert_eq!(flow.buttons, vec!["Cancel Logs"]);
    }

    #[test]
    fn matching_button_resolves_to_the_name() {
        let flow = PendingFlow::open(FlowKind::Restart, &names(&["web", "db"]));
        assert_eq!(
            flow.resolve("Restart web"),
            Selection::Container("web".to_string())
        );
    }

    #[test]
    fn name_is_everything_after_the_first_space() {
        let flow = PendingFlow::open(FlowKind::Logs, &names(&["my app"]));
        assert_eq!(
            flow.resolve("Logs my app"),
            Selection::Container("my app".to_string())
        );
    }

    #[test]
    fn cancel_button_resolves_to_cancel() {
        let flow = PendingFlow::open(FlowKind::Restart, &names(&["web"]));
        assert_eq!(flow.resolve("Cancel Restart"), Selection::Cancel);
    }

    #[test]
    fn unknown_reply_does_not_match() {
        let flow = PendingFlow::open(FlowKind::Restart, &names(&["web"]));
        assert_eq!(flow.resolve("Restart db"), Selection::NoMatch);
        assert_eq!(flow.resolve("restart web"), Selection::NoMatch);
        assert_eq!(flow.resolve("Cancel Logs"), Selection::NoMatch);
        assert_eq!(flow.resolve(""), Selection::NoMatch);
    }

    #[test]
    fn fresh_flow_is_not_expired() {
        let flow = PendingFlow::open(FlowKind::Logs, &names(&["web"]));
        assert!(!flow.expired());
    }

    #[test]
    fn backdated_flow_is_expired() {
        let mut flow = PendingFlow::open(FlowKind::Logs, &names(&["web"]));
        flow.opened_at = Instant::now() - (FLOW_TTL + Duration::from_secs(1));
        assert!(flow.expired());
    }
}
