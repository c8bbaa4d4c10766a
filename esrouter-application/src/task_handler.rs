//! 任务处理器（TaskHandler）
//!
//! 按名称注册到路由器的后台任务处理协议。本路由核心只维护注册表，
//! 不包含任务分发路径；调用语义由核心之外的调度器定义。
//!
use async_trait::async_trait;

/// 任务处理器：处理一条不透明的任务载荷
#[async_trait]
pub trait TaskHandler: Send + Sync {
    async fn run(&self, payload: &serde_json::Value) -> anyhow::Result<()>;
}
