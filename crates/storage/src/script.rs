// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task script store

use atrec_core::token;
use atrec_core::{shell_quote, ScriptRetention, Task, TaskId, TASK_ID_VAR};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sub-directory of the data root holding pending scripts
pub const TASKS_DIR: &str = "tasks";
/// Where archived scripts go after a normal run
pub const COMPLETED_DIR: &str = "completed";
/// Where archived scripts go when cancelled
pub const FAILED_DIR: &str = "failed";

const SCRIPT_EXT: &str = "sh";

/// Errors that can occur in script store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task script not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode task definition: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Scripts keyed by task id under `<data_root>/tasks`
#[derive(Debug, Clone)]
pub struct TaskScriptStore {
    tasks_dir: PathBuf,
    chmod: fn(&Path) -> io::Result<()>,
}

impl TaskScriptStore {
    pub fn new(data_root: impl AsRef<Path>) -> Self {
        Self {
            tasks_dir: data_root.as_ref().join(TASKS_DIR),
            chmod: set_executable,
        }
    }

    /// Replace the step that marks scripts executable
    #[cfg(any(test, feature = "test-support"))]
    pub fn with_chmod(mut self, chmod: fn(&Path) -> io::Result<()>) -> Self {
        self.chmod = chmod;
        self
    }

    pub fn tasks_dir(&self) -> &Path {
        &self.tasks_dir
    }

    pub fn completed_dir(&self) -> PathBuf {
        self.tasks_dir.join(COMPLETED_DIR)
    }

    pub fn failed_dir(&self) -> PathBuf {
        self.tasks_dir.join(FAILED_DIR)
    }

    /// `<data_root>/tasks/<id>.sh`
    pub fn path_for(&self, id: TaskId) -> PathBuf {
        self.tasks_dir.join(script_file_name(id))
    }

    pub fn exists(&self, id: TaskId) -> bool {
        self.path_for(id).is_file()
    }

    /// Create the tasks directory if needed
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.tasks_dir).map_err(StoreError::io(&self.tasks_dir))
    }

    /// Render and write the script for `task`, returning its path
    ///
    /// The file is not yet executable; see [`Self::make_executable`].
    pub fn write(&self, task: &Task, retention: ScriptRetention) -> Result<PathBuf, StoreError> {
        let path = self.path_for(task.id);
        let script = render_script(task, retention, &path, &self.completed_dir())?;
        fs::write(&path, script).map_err(StoreError::io(&path))?;
        Ok(path)
    }

    /// Replace the script text of an existing task, keeping its mode
    pub fn overwrite(&self, id: TaskId, text: &str) -> Result<(), StoreError> {
        let path = self.path_for(id);
        fs::write(&path, text).map_err(StoreError::io(&path))
    }

    /// Mark the script executable (`0755`)
    pub fn make_executable(&self, id: TaskId) -> Result<(), StoreError> {
        let path = self.path_for(id);
        (self.chmod)(&path).map_err(StoreError::io(&path))
    }

    pub fn read(&self, id: TaskId) -> Result<String, StoreError> {
        let path = self.path_for(id);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound(path)),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    /// Move the script into `failed/`; a missing script is not an error
    pub fn move_to_failed(&self, id: TaskId) -> Result<(), StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(());
        }

        let failed = self.failed_dir();
        fs::create_dir_all(&failed).map_err(StoreError::io(&failed))?;
        let target = failed.join(script_file_name(id));
        match fs::rename(&path, &target) {
            Ok(()) => Ok(()),
            // Fired and self-cleaned between the check and the move
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    /// Delete the script; a missing script is not an error
    pub fn remove(&self, id: TaskId) -> Result<(), StoreError> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    /// Drop the script the way `retention` says cancelled scripts go
    pub fn retire(&self, id: TaskId, retention: ScriptRetention) -> Result<(), StoreError> {
        match retention {
            ScriptRetention::Delete => self.remove(id),
            ScriptRetention::Archive => self.move_to_failed(id),
        }
    }
}

fn script_file_name(id: TaskId) -> String {
    format!("{}.{}", id, SCRIPT_EXT)
}

/// Render the executable script for a task
///
/// Layout: shebang, comment header, exported id and definition, the command,
/// then a cleanup stanza chosen by `retention`. The script exits with the
/// command's status.
pub fn render_script(
    task: &Task,
    retention: ScriptRetention,
    script_path: &Path,
    completed_dir: &Path,
) -> Result<String, StoreError> {
    let definition = token::render_definition(task)?;
    let script = shell_quote(&script_path.to_string_lossy());

    let cleanup = match retention {
        ScriptRetention::Delete => format!("rm -f -- {}", script),
        ScriptRetention::Archive => {
            let dir = shell_quote(&completed_dir.to_string_lossy());
            format!("mkdir -p -- {dir} && mv -f -- {script} {dir}/")
        }
    };

    Ok(format!(
        "#!/bin/sh\n\
         # atrec task {id}\n\
         # name: {name}\n\
         # start: {start}\n\
         # retention: {retention}\n\
         \n\
         export {id_assignment}\n\
         export {definition}\n\
         \n\
         {command}\n\
         status=$?\n\
         \n\
         {cleanup}\n\
         exit $status\n",
        id = task.id,
        name = single_line(&task.name),
        start = task.start_time.to_rfc3339(),
        retention = retention_label(retention),
        id_assignment = token::render_assignment(TASK_ID_VAR, &task.id.to_string()),
        command = task.command,
    ))
}

fn retention_label(retention: ScriptRetention) -> &'static str {
    match retention {
        ScriptRetention::Delete => "delete",
        ScriptRetention::Archive => "archive",
    }
}

// Header lines are comments; a newline in a name would end the comment.
fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_executable(path: &Path) -> io::Result<()> {
    fs::metadata(path).map(|_| ())
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
