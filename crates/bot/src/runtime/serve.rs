//! Serve — register bot commands and run the Telegram long-polling loop.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand, KeyboardButton, KeyboardMarkup};
use tracing::{info, warn};

use crate::conf::BotConfig;
use crate::dispatch::{self, Outgoing};
use crate::state::SharedState;

/// Announce the bot to Telegram, notify allowed chats, and poll for
/// updates until the process is stopped.
pub async fn serve(state: SharedState, config: BotConfig) -> anyhow::Result<()> {
    let bot = Bot::new(config.telegram_token.clone());

    if let Err(e) = bot
        .set_my_commands(vec![
            BotCommand::new("ps", "List containers"),
            BotCommand::new("logs", "Tail container logs"),
            BotCommand::new("restart", "Restart a container"),
            BotCommand::new("images", "List images"),
            BotCommand::new("version", "Show bot and Docker version"),
        ])
        .await
    {
        warn!("set_my_commands failed: {}", e);
    }

    // Best-effort startup notice to every allowed chat.
    for chat_id in &config.allowed_chat_ids {
        if let Err(e) = bot
            .send_message(ChatId(*chat_id), "*Chatops bot started*")
            .await
        {
            warn!(chat_id = *chat_id, "startup notice failed: {}", e);
        }
    }

    info!("Listening for Telegram updates");

    let shared = Arc::clone(&state);
    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let state = Arc::clone(&shared);
        async move { handle_update(bot, msg, state).await }
    })
    .await;

    Ok(())
}

/// One inbound update: extract the text, dispatch, deliver any reply.
/// Telegram send failures are logged and never fatal.
async fn handle_update(bot: Bot, msg: Message, state: SharedState) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Some(outgoing) = dispatch::handle_text(&state, chat_id.0, text).await {
        deliver(&bot, chat_id, outgoing).await;
    }

    Ok(())
}

async fn deliver(bot: &Bot, chat_id: ChatId, outgoing: Outgoing) {
    let request = bot.send_message(chat_id, outgoing.text);

    let result = match outgoing.keyboard {
        Some(buttons) => {
            let rows: Vec<Vec<KeyboardButton>> = buttons
                .into_iter()
                .map(|label| vec![KeyboardButton::new(label)])
                .collect();
            let markup = KeyboardMarkup::new(rows).one_time_keyboard().selective();
            request.reply_markup(markup).await
        }
        None => request.await,
    };

    if let Err(e) = result {
        warn!(chat_id = chat_id.0, "send failed: {}", e);
    }
}
