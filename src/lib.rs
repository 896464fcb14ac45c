pub mod audio;
pub mod config;
pub mod database;
pub mod dataset;
pub mod error;
pub mod export;
pub mod models;
pub mod quiz;

pub use error::{AppError, Result};
pub use models::{
    LearningSession, ReviewRecord, ReviewStore, Settings, VocabularyCatalog, VocabularyItem,
};
