pub mod report_repo;
