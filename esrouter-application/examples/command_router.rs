use async_trait::async_trait;
use esrouter_application::CommandRouter;
use esrouter_application::auth::Auther;
use esrouter_application::command::Command;
use esrouter_application::command_handler::CommandHandler;
use esrouter_application::command_result::CommandResult;
use esrouter_application::error::AppError;
use esrouter_domain::InMemoryEventStore;
use esrouter_domain::event::Event;
use serde_json::json;
use std::sync::Arc;

struct CreateUserHandler;

#[async_trait]
impl CommandHandler for CreateUserHandler {
    async fn deal(&self, cmd: &Command) -> (Option<Event>, CommandResult) {
        let Some(name) = cmd.payload().get("name").and_then(|v| v.as_str()) else {
            return (None, CommandResult::failed("missing field: name"));
        };

        let event = Event::new("user.created", json!({ "name": name }));
        (Some(event), CommandResult::ok_with_payload(json!({ "name": name })))
    }
}

struct AllowAll;

#[async_trait]
impl Auther for AllowAll {
    async fn authorize(&self, _cmd: &Command) -> Result<(), AppError> {
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let store = Arc::new(InMemoryEventStore::new());
    let router = CommandRouter::new(store.clone());

    router.add_command_handler(Arc::new(CreateUserHandler), ["user.create"]);
    router.set_auther(Arc::new(AllowAll));

    let res = router
        .push(&Command::new("user.create", json!({ "name": "Alice" })))
        .await;
    println!(
        "user.create: error={}, seq={:?}",
        res.is_error(),
        res.receipt().map(|r| r.sequence_number())
    );

    // 未注册的命令 -> InvalidCommand
    let res = router.push(&Command::new("user.delete", json!({ "id": 42 }))).await;
    println!("user.delete: {:?}", res.message());

    // 处理器自定义失败 -> 原样返回，不持久化
    let res = router.push(&Command::new("user.create", json!({}))).await;
    println!("user.create (bad payload): {:?}", res.message());

    println!("stored events: {}", store.len().await);
}
