//! 命令结果（CommandResult）
//!
//! 单次分发唯一的结果记录：由处理器产出，再由路由器合并持久化结果后
//! 返回给调用方。构造方法维持不变式：错误标志与错误类别/消息的有无一致。
//!
use crate::error::DispatchError;
use esrouter_domain::store::{StoreReceipt, StoreResult};

/// 单次命令分发的结果
#[derive(Debug, Default)]
pub struct CommandResult {
    error: bool,
    kind: Option<DispatchError>,
    message: Option<String>,
    payload: Option<serde_json::Value>,
    receipt: Option<StoreReceipt>,
}

impl CommandResult {
    /// 成功结果
    pub fn ok() -> Self {
        Self::default()
    }

    /// 携带处理器载荷的成功结果
    pub fn ok_with_payload(payload: serde_json::Value) -> Self {
        Self {
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// 以规范错误类别构造失败结果，消息取该类别的规范文本
    pub fn rejected(kind: DispatchError) -> Self {
        Self {
            error: true,
            message: Some(kind.to_string()),
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// 处理器自定义的失败结果，错误类别对路由核心不透明
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// 合并单次持久化结果：
    /// - 存储失败时置为 `FailedStoreEvent`，消息保留存储侧原始错误文本；
    /// - 无论成败，存储回执一经分配即附加到结果上。
    pub fn merge_store(&mut self, outcome: StoreResult) {
        let (receipt, error) = outcome.into_parts();

        if let Some(err) = error {
            self.error = true;
            self.kind = Some(DispatchError::FailedStoreEvent);
            self.message = Some(err.to_string());
        }
        if let Some(receipt) = receipt {
            self.receipt = Some(receipt);
        }
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn kind(&self) -> Option<DispatchError> {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    pub fn receipt(&self) -> Option<&StoreReceipt> {
        self.receipt.as_ref()
    }
}
