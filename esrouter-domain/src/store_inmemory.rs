//! 内存版事件存储（InMemoryEventStore）
//!
//! 基于 `tokio::sync::RwLock` 的追加日志，满足 `EventStore` 协议：
//! - `store`：追加事件并分配自增序号（从 1 开始）；
//! - `events`：克隆当前日志，用于断言与排查；
//! - 典型用途：测试环境、示例与本地开发。
//!
//! 注意：该实现不具备持久性，生产环境应注入真实存储后端。

use crate::event::Event;
use crate::store::{EventStore, StoreReceipt, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// 简单的内存事件存储实现
#[derive(Default)]
pub struct InMemoryEventStore {
    log: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回当前已持久化事件的副本
    pub async fn events(&self) -> Vec<Event> {
        self.log.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.log.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.log.read().await.is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn store(&self, event: &Event) -> StoreResult {
        let mut log = self.log.write().await;
        log.push(event.clone());

        let receipt = StoreReceipt::builder()
            .sequence_number(log.len() as u64)
            .stored_at(Utc::now())
            .build();

        StoreResult::stored(receipt)
    }
}
