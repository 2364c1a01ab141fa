//! Domain model (category, task, board, progress, ...).
//!
//! ドメイン層は ports / impls に依存しません（純粋なデータと関数のみ）。

pub mod board;
pub mod category;
pub mod errors;
pub mod ids;
pub mod progress;
pub mod samples;
pub mod task;

pub use board::TaskBoard;
pub use category::Category;
pub use errors::{UnknownCategory, ValidationError};
pub use ids::TaskId;
pub use progress::{CategoryProgress, Rarity, compute_progress};
pub use samples::SAMPLE_TASKS;
pub use task::Task;
