pub mod completion;
pub mod news_source;
pub mod report_repository;
pub mod signal_provider;
pub mod stage;
pub mod translation;
