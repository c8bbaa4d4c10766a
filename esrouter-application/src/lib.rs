//! 应用层命令路由（esrouter-application）
//!
//! 事件溯源写入路径的前端：接收具名命令，按
//! 校验 → 查找 → 鉴权 → 处理 → 持久化 → 结果合并
//! 的顺序编排单次分发，任一环节失败即短路返回。
//! - 命令与自校验（`command`）；
//! - 处理器协议（`command_handler`/`task_handler`）；
//! - 鉴权协议（`auth`）；
//! - 命令结果与持久化结果合并（`command_result`）；
//! - 路由器（`command_router`）：并发安全的处理器注册表与分发管线。
//!
pub mod auth;
pub mod command;
pub mod command_handler;
pub mod command_result;
pub mod command_router;
pub mod error;
pub mod task_handler;

pub use command_router::CommandRouter;
