//! 应用层错误定义
//!
use esrouter_domain::error::DomainError;

/// 应用层统一错误：命令校验与鉴权环节使用
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),

    #[error("authorization: {0}")]
    Authorization(String),
}

/// 分发错误类别
///
/// 合并进 `CommandResult` 的规范错误类别，`Display` 文本即结果的规范消息。
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// 命令非法，或没有注册对应处理器（对调用方刻意不可区分）
    #[error("invalid command, or no handler registered")]
    InvalidCommand,

    /// 鉴权被拒绝
    #[error("not authorized")]
    AuthFailed,

    /// 事件持久化失败；结果消息保留存储侧原始错误文本
    #[error("failed to store event")]
    FailedStoreEvent,
}
