//! Telegram Dispatcher
//!
//! teloxide 长轮询与路由:
//! - /start, /help → 使用说明
//! - 非命令文本   → 生成图片
//! - 其他更新     → 忽略

use std::sync::Arc;

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::utils::command::BotCommands;

use super::listener::ChatListener;
use crate::domain::{ChatId, RequesterId};

type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Bot 命令
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "tampilkan petunjuk penggunaan")]
    Start,
    #[command(description = "tampilkan petunjuk penggunaan")]
    Help,
}

/// 更新路由
pub fn schema() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(command_endpoint),
        )
        .branch(dptree::filter(|msg: Message| is_prompt(msg.text())).endpoint(text_endpoint))
}

/// 命令以外的文本才作为提示词
fn is_prompt(text: Option<&str>) -> bool {
    text.map_or(false, |t| !t.starts_with('/'))
}

/// 发送者缺失（如频道消息）时退回到聊天标识
fn requester_of(msg: &Message) -> RequesterId {
    msg.from
        .as_ref()
        .map(|user| RequesterId(user.id.0))
        .unwrap_or_else(|| RequesterId(msg.chat.id.0.unsigned_abs()))
}

async fn command_endpoint(
    listener: Arc<ChatListener>,
    msg: Message,
    cmd: Command,
) -> Result<(), HandlerError> {
    let chat = ChatId(msg.chat.id.0);
    match cmd {
        Command::Start | Command::Help => {
            if let Err(e) = listener.on_start(chat).await {
                listener.on_failure(chat, &e.to_string()).await;
            }
        }
    }
    Ok(())
}

async fn text_endpoint(listener: Arc<ChatListener>, msg: Message) -> Result<(), HandlerError> {
    if let Some(text) = msg.text() {
        listener
            .on_text(ChatId(msg.chat.id.0), requester_of(&msg), text)
            .await;
    }
    Ok(())
}

/// 用 getMe 校验 token，失败即终止启动
pub async fn verify_bot(bot: &Bot) -> Result<Me, teloxide::RequestError> {
    let me = bot.get_me().await?;
    tracing::info!(username = %me.username(), "Telegram bot authenticated");
    Ok(me)
}

/// 启动长轮询，直到 future 被丢弃
pub async fn run_dispatcher(bot: Bot, listener: Arc<ChatListener>) {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!(error = %e, "Failed to register bot commands");
    }

    tracing::info!("Bot sedang berjalan...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![listener])
        .default_handler(|upd| async move {
            tracing::debug!(update_id = upd.id.0, "Ignored update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .build()
        .dispatch()
        .await;
}
