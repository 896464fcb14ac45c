pub mod catalog;
pub mod guided;
pub mod learning_session;
pub mod progress;
pub mod queue;
pub mod review_record;
pub mod review_store;
pub mod settings;
pub mod sm2;
pub mod vocabulary;

pub use catalog::VocabularyCatalog;
pub use guided::{GuidedSession, GuidedStage};
pub use learning_session::{GradeOutcome, LearningSession};
pub use progress::{DashboardStats, Progress, StreakPolicy};
pub use queue::{StudyQueue, build_queue};
pub use review_record::ReviewRecord;
pub use review_store::{ItemState, ReviewStore};
pub use settings::Settings;
pub use vocabulary::{Category, VocabularyItem};
