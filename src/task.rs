use serde::{Deserialize, Serialize};

/// Display pattern for task timestamps in listings.
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A single tracked unit of work.
///
/// The id doubles as the task's key in the persisted collection, so it is
/// skipped during (de)serialization and restored from the key on load.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
pub struct Task {
    #[serde(skip)]
    pub id: u32,
    pub description: String,
    pub status: Status,
    #[serde(rename = "created-at")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updated-at")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Task {
    /// `created_at` rendered with [`DATETIME_FORMAT`].
    pub fn created_at_display(&self) -> String {
        self.created_at.format(DATETIME_FORMAT).to_string()
    }

    /// `updated_at` rendered with [`DATETIME_FORMAT`].
    pub fn updated_at_display(&self) -> String {
        self.updated_at.format(DATETIME_FORMAT).to_string()
    }
}

/// Lifecycle state of a task.
#[derive(Debug, Default, Eq, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        };
        write!(f, "{label}")
    }
}

/// Statuses a task can be marked with. `Todo` is only ever the initial
/// state, so it is not a settable target.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Mark {
    InProgress,
    Done,
}

impl From<Mark> for Status {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::InProgress => Status::InProgress,
            Mark::Done => Status::Done,
        }
    }
}

/// Optional status narrowing for list queries.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy)]
pub enum Filter {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

impl Filter {
    /// Whether a task with the given status belongs in the filtered listing.
    pub fn matches(&self, status: Status) -> bool {
        match self {
            Filter::All => true,
            Filter::Todo => status == Status::Todo,
            Filter::InProgress => status == Status::InProgress,
            Filter::Done => status == Status::Done,
        }
    }
}
