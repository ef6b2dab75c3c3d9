pub mod chat;
pub mod data_mining;
pub mod handlers;
pub mod prompts;
