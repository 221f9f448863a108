pub mod activity;
pub mod analysis;
pub mod collected_data;
pub mod query;
pub mod report;
