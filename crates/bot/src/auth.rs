//! Authorization — static chat-id allow-list.

use std::collections::HashSet;

/// Static allow-list of Telegram chat ids.
///
/// An empty list authorizes nobody; there is no implicit open mode.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    ids: HashSet<i64>,
}

impl AllowList {
    pub fn new(ids: &[i64]) -> Self {
        Self {
            ids: ids.iter().copied().collect(),
        }
    }

    /// Pure membership check with no side effects.
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        self.ids.contains(&chat_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_chat_is_allowed() {
        let list = AllowList::new(&[42, -100123]);
        assert!(list.is_allowed(42));
        assert!(list.is_allowed(-100123));
    }

    #[test]
    fn unlisted_chat_is_denied() {
        let list = AllowList::new(&[42]);
        assert!(!list.is_allowed(43));
    }

    #[test]
    fn empty_list_denies_everyone() {
        let list = AllowList::new(&[]);
        assert!(list.is_empty());
        assert!(!list.is_allowed(0));
        assert!(!list.is_allowed(42));
    }
}
