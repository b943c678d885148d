use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::task::{Filter, Mark, Status, Task};

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TaskError {
    #[error("no task found with ID {0}")]
    NotFound(u32),
}

/// The in-memory mapping of id to [`Task`] plus the id counter, backed by a
/// pair of files under a save directory.
///
/// Mutations only touch memory; nothing reaches disk until [`TaskStore::save`]
/// is called. A process that exits without saving loses that run's changes.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: BTreeMap<u32, Task>,
    last_id: u32,
    save_dir: PathBuf,
    data_path: PathBuf,
    id_path: PathBuf,
}

impl TaskStore {
    /// Loads a store from the given save directory and resource file names.
    ///
    /// A missing or unparsable collection or counter file is treated as a
    /// first run: empty mapping, zero counter. Never fails.
    pub fn load(save_dir: &Path, data_file: &str, id_file: &str) -> Self {
        let data_path = save_dir.join(data_file);
        let id_path = save_dir.join(id_file);

        let mut tasks: BTreeMap<u32, Task> = fs::read_to_string(&data_path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        // The id is the map key on disk, not a field of the record.
        for (id, task) in &mut tasks {
            task.id = *id;
        }

        let stored_id = fs::read_to_string(&id_path)
            .ok()
            .and_then(|contents| contents.trim().parse().ok())
            .unwrap_or(0);
        // A stale counter file must never cause an id to be reused.
        let highest_task_id = tasks.keys().next_back().copied().unwrap_or(0);
        let last_id = stored_id.max(highest_task_id);

        Self {
            tasks,
            last_id,
            save_dir: save_dir.to_path_buf(),
            data_path,
            id_path,
        }
    }

    /// Adds a new todo task and returns its id. Ids are sequential starting
    /// at 1 and are never reused, even after deletions.
    pub fn add(&mut self, description: String) -> u32 {
        self.last_id += 1;
        let new_id = self.last_id;
        let now = chrono::Utc::now();
        self.tasks.insert(
            new_id,
            Task {
                id: new_id,
                description,
                status: Status::Todo,
                created_at: now,
                updated_at: now,
            },
        );
        new_id
    }

    /// Removes the task with the given id.
    pub fn delete(&mut self, id: u32) -> Result<(), TaskError> {
        self.tasks.remove(&id).ok_or(TaskError::NotFound(id))?;
        Ok(())
    }

    /// Replaces a task's description and refreshes its `updated_at`.
    pub fn update(&mut self, id: u32, description: String) -> Result<(), TaskError> {
        let task = self.tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
        task.description = description;
        task.updated_at = chrono::Utc::now();
        Ok(())
    }

    /// Sets a task's status and refreshes its `updated_at`.
    pub fn mark(&mut self, id: u32, mark: Mark) -> Result<(), TaskError> {
        let task = self.tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
        task.status = mark.into();
        task.updated_at = chrono::Utc::now();
        Ok(())
    }

    /// Iterates over tasks matching the filter, ascending by id.
    ///
    /// The iterator is lazy and read-only; call again to restart.
    pub fn list(&self, filter: Filter) -> impl Iterator<Item = &Task> {
        self.tasks
            .values()
            .filter(move |task| filter.matches(task.status))
    }

    /// Writes the full mapping and the id counter to the save directory,
    /// creating the directory if it does not exist yet.
    pub fn save(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.save_dir)?;
        serde_json::to_writer_pretty(File::create(&self.data_path)?, &self.tasks)?;
        fs::write(&self.id_path, self.last_id.to_string())
    }
}
