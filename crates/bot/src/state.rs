//! Bot state — shared handler state, pending flows keyed per chat.

use std::sync::Arc;

use dashmap::DashMap;

use crate::auth::AllowList;
use crate::flow::PendingFlow;
use engine::ops::EngineOps;

pub struct BotState {
    pub engine: Arc<dyn EngineOps>,
    pub allow_list: AllowList,
    /// Pending selection menus keyed by chat id, so concurrent chats
    /// cannot clobber each other's menu.
    pub flows: DashMap<i64, PendingFlow>,
}

impl BotState {
    pub fn new(engine: Arc<dyn EngineOps>, allow_list: AllowList) -> Self {
        Self {
            engine,
            allow_list,
            flows: DashMap::new(),
        }
    }
}

pub type SharedState = Arc<BotState>;
