//! Model gateway adapters

pub mod openai;

pub use openai::OpenAiGateway;
