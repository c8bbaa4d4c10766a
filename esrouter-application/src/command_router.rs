//! 命令路由器（CommandRouter）
//!
//! 事件溯源写入路径的分发核心：
//! - 并发安全的处理器注册表，命令表与任务表相互独立；
//! - 一次性配置的鉴权关卡；
//! - 按 校验 → 查找 → 鉴权 → 处理 → 持久化 → 结果合并 编排的分发管线，
//!   任一环节失败即短路返回。
//!
//! 注册通常发生在启动阶段，但协议允许与分发并发进行；
//! 同名条目以最后一次注册为准。
//!
use crate::auth::Auther;
use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::command_result::CommandResult;
use crate::error::DispatchError;
use crate::task_handler::TaskHandler;
use dashmap::DashMap;
use esrouter_domain::store::EventStore;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// 命令路由器：注册表 + 鉴权关卡 + 分发管线
pub struct CommandRouter {
    cmd_handlers: DashMap<String, Arc<dyn CommandHandler>>,
    task_handlers: DashMap<String, Arc<dyn TaskHandler>>,
    store: Arc<dyn EventStore>,
    auther: OnceLock<Arc<dyn Auther>>,
}

impl CommandRouter {
    /// 以注入的事件存储创建路由器
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            cmd_handlers: DashMap::new(),
            task_handlers: DashMap::new(),
            store,
            auther: OnceLock::new(),
        }
    }

    /// 注册命令处理器：同一个处理器可注册到多个名称
    pub fn add_command_handler<I, S>(&self, handler: Arc<dyn CommandHandler>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.cmd_handlers.insert(name.into(), handler.clone());
        }
    }

    /// 注册任务处理器：同一个处理器可注册到多个名称
    pub fn add_task_handler<I, S>(&self, handler: Arc<dyn TaskHandler>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.task_handlers.insert(name.into(), handler.clone());
        }
    }

    /// 安装鉴权器并启用鉴权关卡
    ///
    /// 一次性配置：重复调用属于编程错误，直接 panic 而非返回错误。
    pub fn set_auther(&self, auther: Arc<dyn Auther>) {
        if self.auther.set(auther).is_err() {
            panic!("auther already set");
        }
    }

    /// 查询某命令名当前是否有已注册的处理器
    pub fn has_command_handler(&self, name: &str) -> bool {
        self.cmd_handlers.contains_key(name)
    }

    /// 按名称取出任务处理器
    ///
    /// 本核心不调用任务处理器，取出后的调用由外部调度器负责。
    pub fn task_handler(&self, name: &str) -> Option<Arc<dyn TaskHandler>> {
        self.task_handlers.get(name).map(|h| h.clone())
    }

    /// 分发单条命令，返回合并后的命令结果
    ///
    /// 管线各环节的短路语义：
    /// 1. 校验失败 → `InvalidCommand`，不触达处理器与存储；
    /// 2. 未注册处理器 → 同样返回 `InvalidCommand`；
    /// 3. 鉴权拒绝 → `AuthFailed`；
    /// 4. 处理器结果已携带错误 → 原样返回，跳过持久化；
    /// 5. 持久化失败 → `FailedStoreEvent`，消息保留存储侧错误文本；
    /// 6. 无论持久化成败，存储回执一经分配即合并进结果。
    pub async fn push(&self, cmd: &Command) -> CommandResult {
        if cmd.validate().is_err() {
            debug!(name = cmd.name(), "command rejected by validation");
            return CommandResult::rejected(DispatchError::InvalidCommand);
        }

        // 先克隆出处理器引用，避免跨 await 持有分片锁
        let Some(handler) = self.cmd_handlers.get(cmd.name()).map(|h| h.clone()) else {
            debug!(name = cmd.name(), "no command handler registered");
            return CommandResult::rejected(DispatchError::InvalidCommand);
        };

        if let Some(auther) = self.auther.get() {
            if let Err(err) = auther.authorize(cmd).await {
                warn!(name = cmd.name(), %err, "command rejected by authorizer");
                return CommandResult::rejected(DispatchError::AuthFailed);
            }
        }

        let (event, mut result) = handler.deal(cmd).await;
        if result.is_error() {
            return result;
        }

        // 成功但无事件产出：没有可持久化的事实，结果原样返回
        let Some(event) = event else {
            return result;
        };

        let outcome = self.store.store(&event).await;
        if let Some(err) = outcome.error() {
            warn!(name = cmd.name(), %err, "failed to store event");
        }
        result.merge_store(outcome);

        result
    }
}
