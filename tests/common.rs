#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktracker")
}

/// Isolated HOME plus a database path inside it, removed on drop.
pub struct TestEnv {
    pub home: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let home = TempDir::new().expect("create temp home");
        let db = home
            .path()
            .join(format!("{}_rworktracker.sqlite", name))
            .to_string_lossy()
            .to_string();
        Self { home, db }
    }

    /// Command bound to this environment's HOME and database.
    pub fn cmd(&self) -> Command {
        let mut c = rwt();
        c.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db]);
        c
    }

    /// `init` in test mode (no config file written).
    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn add(&self, hours: &str, at: Option<&str>) {
        let mut c = self.cmd();
        c.args(["add", hours]);
        if let Some(at) = at {
            c.args(["--at", at]);
        }
        c.assert().success();
    }

    pub fn out_path(&self, file: &str) -> PathBuf {
        self.home.path().join(file)
    }

    pub fn db_path(&self) -> &Path {
        Path::new(&self.db)
    }
}
