pub mod llm;
pub mod memory;
pub mod news;
pub mod signals;
pub mod sqlite;
pub mod translation;
