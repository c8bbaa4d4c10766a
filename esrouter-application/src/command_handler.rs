//! 命令处理器（CommandHandler）
//!
use crate::command::Command;
use crate::command_result::CommandResult;
use async_trait::async_trait;
use esrouter_domain::event::Event;

/// 命令处理器：将命令翻译为领域事件，并产出本次处理结果
///
/// - 处理结果不可缺省（由返回类型保证）；
/// - 结果已携带错误时事件会被忽略，持久化整体跳过；
/// - 成功但无事件产出（`None`）时同样不触发持久化。
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// 处理命令，返回（可选的）领域事件与处理结果
    async fn deal(&self, cmd: &Command) -> (Option<Event>, CommandResult);
}
