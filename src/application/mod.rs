pub mod activity_log;
pub mod collector;
pub mod composer;
pub mod export;
pub mod insights;
pub mod pipeline;
pub mod sentiment;
pub mod translator;
