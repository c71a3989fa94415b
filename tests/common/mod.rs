#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bundle");

/// A private copy of the fixture bundle; every test mutates its own tree.
pub struct Bundle {
    tmp: TempDir,
}

impl Bundle {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        copy_tree(Path::new(FIXTURE), tmp.path());
        Self { tmp }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn module(&self, name: &str) -> PathBuf {
        self.root().join("node_modules").join(name)
    }

    pub fn descriptor(&self, name: &str) -> serde_json::Value {
        let raw = fs::read_to_string(self.module(name).join("package.json"))
            .expect("read package.json");
        serde_json::from_str(&raw).expect("valid package.json")
    }
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("create dir");
    for entry in fs::read_dir(from).expect("read fixture dir") {
        let entry = entry.expect("fixture entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("file type").is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("copy fixture file");
        }
    }
}
