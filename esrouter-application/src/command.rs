//! 应用层命令（Command）
//!
//! 表达“意图”的写操作请求：由名称定位处理器，载荷对路由核心保持不透明。
//! - 构造后不可变，按引用传入路由器完成单次分发；
//! - 建议保持语义化的“动宾结构”命名，如 `user.create`、`order.close`。
//!
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// 具名命令：名称 + 不透明载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    name: String,
    payload: serde_json::Value,
}

impl Command {
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// 命令自校验：名称不能为空或仅含空白
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "command name must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
