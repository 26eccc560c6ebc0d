//! Ports (interfaces) for the application layer

pub mod gateway;
pub mod tool_executor;

pub use gateway::{ChatGateway, GatewayError, ResponseFormat};
pub use tool_executor::{NoTools, ToolExecutorPort};
