//! 鉴权协议（Auther）
//!
//! 路由器启用鉴权关卡后，每条命令在处理前都会经过该协议。
//!
use crate::command::Command;
use crate::error::AppError;
use async_trait::async_trait;

/// 命令鉴权：放行返回 `Ok(())`，拒绝返回 `AppError::Authorization`
#[async_trait]
pub trait Auther: Send + Sync {
    async fn authorize(&self, cmd: &Command) -> Result<(), AppError>;
}
