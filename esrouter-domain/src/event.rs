//! 领域事件（Event）
//!
//! 命令处理器从命令推导出的领域事实，是传入事件存储的持久化单元。
//! 路由核心不解释其内部结构，仅负责转交给存储实现。
//!
use crate::error::DomainResult;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 领域事件：标识、类型、发生时间与不透明载荷
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    event_id: String,
    event_type: String,
    occurred_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl Event {
    /// 以随机事件标识与当前时间创建事件
    pub fn new(event_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            event_type: event_type.into(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// 将任意可序列化载荷编码为事件
    pub fn from_payload<T>(event_type: impl Into<String>, payload: &T) -> DomainResult<Self>
    where
        T: Serialize,
    {
        Ok(Self::new(event_type, serde_json::to_value(payload)?))
    }

    /// 将事件载荷解码为具体类型
    pub fn decode_payload<T>(&self) -> DomainResult<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

impl Event {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
