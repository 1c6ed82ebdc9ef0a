use super::TaskRepository;
use crate::error::{Result, TaskError};
use crate::model::Task;
use crate::task_list::TaskList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<path>.bak`, next to the task file.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(TaskError::Io)?;
            }
        }
        Ok(())
    }
}

impl TaskRepository for JsonFileStore {
    fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file, starting from seed list");
            return Ok(TaskList::seeded());
        }

        let content = fs::read_to_string(&self.path).map_err(TaskError::Io)?;
        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(TaskError::Serialization)?;
        info!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(TaskList::from(tasks))
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(tasks.tasks()).map_err(TaskError::Serialization)?;
        fs::write(&self.path, content).map_err(TaskError::Io)?;
        info!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn back_up(&mut self) -> Result<()> {
        if !self.path.is_file() {
            return Ok(());
        }
        let backup = self.backup_path();
        fs::copy(&self.path, &backup).map_err(TaskError::Io)?;
        warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "kept a copy of the unreadable task file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_tasks;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_seed_list() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("database.json"));

        let list = store.load().unwrap();
        assert_eq!(list.into_tasks(), seed_tasks());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp.path().join("database.json"));
        let list = TaskList::from(vec![
            Task::new("Do projects"),
            Task::new("watch sunset").with_done(true),
            Task::new("ünïcødé ✓"),
        ]);

        store.save(&list).unwrap();
        assert_eq!(store.load().unwrap(), list);
    }

    #[test]
    fn save_writes_pretty_array_with_task_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("database.json");
        let mut store = JsonFileStore::new(&path);
        store
            .save(&TaskList::from(vec![Task::new("Do projects")]))
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[\n  {\n    \"task\": \"Do projects\",\n    \"done\": false\n  }\n]"
        );
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("tasks.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&TaskList::new()).unwrap();
        assert!(path.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn garbage_file_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("database.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, TaskError::Serialization(_)));
        assert!(err.is_persistence());
    }

    #[test]
    fn back_up_copies_unreadable_file_before_save() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("database.json");
        fs::write(&path, "{ not json").unwrap();
        let mut store = JsonFileStore::new(&path);

        assert!(store.load().is_err());
        store.back_up().unwrap();
        store.save(&TaskList::new()).unwrap();

        assert_eq!(store.backup_path(), temp.path().join("database.json.bak"));
        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), "{ not json");
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn back_up_without_file_does_nothing() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp.path().join("database.json"));

        store.back_up().unwrap();
        assert!(!store.backup_path().exists());
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        // A directory exists at the path but cannot be read as a file.
        let err = JsonFileStore::new(temp.path()).load().unwrap_err();
        assert!(matches!(err, TaskError::Io(_)));
    }

    #[test]
    fn reads_reference_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("database.json");
        fs::write(
            &path,
            r#"[
  { "task": "Do projects", "done": false },
  { "task": "watch sunset", "done": true }
]"#,
        )
        .unwrap();

        let list = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.tasks()[1].done);
    }
}
