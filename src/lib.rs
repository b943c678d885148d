//! Core task store for the task-tracker CLI.
pub mod store;
pub mod task;

pub use store::{TaskError, TaskStore};
pub use task::{DATETIME_FORMAT, Filter, Mark, Status, Task};
