pub mod migrations;
pub mod report_repo;
