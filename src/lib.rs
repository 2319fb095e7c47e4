pub mod analyst;
pub mod config;
pub mod core;
pub mod knowledge;
pub mod llm;
pub mod prompts;
pub mod transport;
