//! Test helpers for behavioral specifications.
//!
//! Each `Project` is a scratch directory holding a data root, a config file
//! (found through `$ATREC_CONFIG`), and fake `at`/`atq`/`atrm` scripts placed
//! first on `PATH`. The fakes keep their jobs as files under `spool/jobs/<n>`.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub use similar_asserts::assert_eq;

const FAKE_AT: &str = include_str!("fake_tools/at");
const FAKE_ATQ: &str = include_str!("fake_tools/atq");
const FAKE_ATRM: &str = include_str!("fake_tools/atrm");
const FAKE_CAPTURE: &str = include_str!("fake_tools/fake-ffmpeg");

/// A start time far enough ahead to always be in the future
pub const FUTURE_START: &str = "2099-07-04T19:45:00Z";
pub const FUTURE_END: &str = "2099-07-04T20:15:00Z";

pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Scratch project with default settings (scripts deleted after use)
    pub fn empty() -> Self {
        Self::with_config("")
    }

    /// Scratch project with extra config lines appended
    pub fn with_config(extra: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Self { dir };

        for (name, text) in [
            ("at", FAKE_AT),
            ("atq", FAKE_ATQ),
            ("atrm", FAKE_ATRM),
            ("fake-ffmpeg", FAKE_CAPTURE),
        ] {
            project.executable(&format!("bin/{}", name), text);
        }
        fs::create_dir_all(project.spool().join("jobs")).unwrap();

        let config = format!(
            "data_root = {:?}\n\
             {}\n\
             [capture]\n\
             program = {:?}\n\
             output_dir = {:?}\n",
            project.data_root().display().to_string(),
            extra,
            project.path().join("bin/fake-ffmpeg").display().to_string(),
            project.path().join("media").display().to_string(),
        );
        project.file("config.toml", &config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_root(&self) -> PathBuf {
        self.path().join("data")
    }

    pub fn tasks_dir(&self) -> PathBuf {
        self.data_root().join("tasks")
    }

    pub fn spool(&self) -> PathBuf {
        self.path().join("spool")
    }

    /// Create a file with content
    pub fn file(&self, path: &str, content: &str) {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    fn executable(&self, path: &str, content: &str) {
        self.file(path, content);
        let full = self.path().join(path);
        fs::set_permissions(full, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Scripts currently under `<data_root>/tasks`, by file name
    pub fn task_scripts(&self) -> Vec<String> {
        list_files(&self.tasks_dir())
    }

    /// Job ids the fake queue holds
    pub fn queued_jobs(&self) -> Vec<String> {
        list_files(&self.spool().join("jobs"))
    }

    /// Make the next `at` submission fail with this stderr
    pub fn break_at(&self, stderr: &str) {
        self.file("spool/at.fail", stderr);
    }

    /// Make `atq` fail with this stderr
    pub fn break_atq(&self, stderr: &str) {
        self.file("spool/atq.fail", stderr);
    }

    /// Whether `atrm` was ever invoked
    pub fn atrm_called(&self) -> bool {
        self.spool().join("atrm.log").exists()
    }

    /// Run a queued job the way atd would, then drop it from the queue
    pub fn fire(&self, job: &str) {
        let job_file = self.spool().join("jobs").join(job);
        let status = std::process::Command::new("sh")
            .arg(&job_file)
            .env("ATREC_FAKE_SPOOL", self.spool())
            .status()
            .unwrap();
        assert!(status.success(), "job {} exited with {}", job, status);
        fs::remove_file(job_file).unwrap();
    }

    /// Build an atrec command against this project
    pub fn atrec(&self) -> Cli {
        let path = format!(
            "{}:{}",
            self.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::cargo_bin("atrec").unwrap();
        cmd.env("PATH", path)
            .env("ATREC_FAKE_SPOOL", self.spool())
            .env("ATREC_CONFIG", self.path().join("config.toml"))
            .env_remove("ATREC_LOG");
        Cli { cmd }
    }

    /// Schedule a recording with the standard test window; returns the task id
    pub fn schedule(&self, name: &str) -> String {
        self.atrec()
            .args(&schedule_args(name, FUTURE_START, FUTURE_END))
            .passes()
            .stdout()
            .trim()
            .to_string()
    }
}

pub fn schedule_args(name: &str, start: &str, end: &str) -> Vec<String> {
    [
        "schedule",
        "--name",
        name,
        "--channel-id",
        "ch-7",
        "--channel-name",
        "Channel 7",
        "--url",
        "http://tuner.local/stream/7",
        "--filename",
        "news.ts",
        "--start",
        start,
        "--end",
        end,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args<S: AsRef<std::ffi::OsStr>>(mut self, args: &[S]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and expect success
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            run.output.status.success(),
            "expected success, got {}\nstdout: {}\nstderr: {}",
            run.output.status,
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and expect failure
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout: {}",
            run.stdout()
        );
        run
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain {:?}:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected.to_string());
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain {:?}:\n{}",
            expected,
            stderr
        );
        self
    }
}
