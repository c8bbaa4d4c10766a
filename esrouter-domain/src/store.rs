//! 事件存储协议（EventStore）
//!
//! 定义单次事件持久化的统一抽象与结果：
//! - `EventStore`：由上层注入的持久化接口；
//! - `StoreResult`：单次持久化的结果，错误与回执可同时存在；
//! - `StoreReceipt`：存储侧分配的元数据（序号、落盘时间）。
//!
//! 该模块只约定协议，不包含重试、超时与取消语义，
//! 这些由具体存储实现及其调用方负责。
//!
use crate::error::DomainError;
use crate::event::Event;
use async_trait::async_trait;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 存储回执：由存储实现分配的持久化元数据
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreReceipt {
    sequence_number: u64,
    stored_at: DateTime<Utc>,
}

impl StoreReceipt {
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn stored_at(&self) -> &DateTime<Utc> {
        &self.stored_at
    }
}

/// 单次持久化结果
///
/// 部分失败时已分配的元数据不应被丢弃，因此错误与回执可同时存在。
/// 由结果合并方一次性消费。
#[derive(Debug, Default)]
pub struct StoreResult {
    receipt: Option<StoreReceipt>,
    error: Option<DomainError>,
}

impl StoreResult {
    /// 持久化成功
    pub fn stored(receipt: StoreReceipt) -> Self {
        Self {
            receipt: Some(receipt),
            error: None,
        }
    }

    /// 持久化失败
    pub fn failed(error: DomainError) -> Self {
        Self {
            receipt: None,
            error: Some(error),
        }
    }

    /// 持久化失败，但存储侧已分配部分元数据
    pub fn failed_with_receipt(error: DomainError, receipt: StoreReceipt) -> Self {
        Self {
            receipt: Some(receipt),
            error: Some(error),
        }
    }

    pub fn receipt(&self) -> Option<&StoreReceipt> {
        self.receipt.as_ref()
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.error.as_ref()
    }

    /// 拆解为（回执，错误），供结果合并方消费
    pub fn into_parts(self) -> (Option<StoreReceipt>, Option<DomainError>) {
        (self.receipt, self.error)
    }
}

/// 事件存储：负责将事件持久化为不可变事实
#[async_trait]
pub trait EventStore: Send + Sync {
    /// 持久化单个事件，返回本次持久化结果
    async fn store(&self, event: &Event) -> StoreResult;
}
