pub mod config_service;
pub mod dto;
pub mod flat_file_progress_store;
pub mod jsonl_paper_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::flat_file_progress_store::FlatFileProgressStore;
pub use crate::jsonl_paper_repository::JsonlPaperRepository;
pub use crate::paths::TriagePaths;
