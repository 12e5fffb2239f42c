//! Shared test infrastructure for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Front matter for a well-formed ARC.
pub struct Front<'a> {
    pub arc: &'a str,
    pub title: &'a str,
    pub topic: &'a str,
    pub status: &'a str,
}

impl<'a> Front<'a> {
    pub fn new(arc: &'a str) -> Self {
        Self {
            arc,
            title: "X",
            topic: "Protocol",
            status: "Draft",
        }
    }

    pub fn render(&self) -> String {
        format!(
            "---\narc: {}\ntitle: {}\nauthors: Y\ndiscussion:\ntopic: {}\nstatus: {}\ncreated: 2021-01-01\n---\n",
            self.arc, self.title, self.topic, self.status
        )
    }
}

/// A throwaway ARC repository checkout with a `site/src/` directory.
pub struct ArcRepo {
    temp: TempDir,
}

impl ArcRepo {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(temp.path().join("site/src")).expect("create site/src");
        let repo = Self { temp };
        repo.write_readme(
            "arc-0000",
            &format!(
                "{}\n## Abstract\n\nTemplate body.\n",
                Front {
                    title: "Template",
                    topic: "Meta",
                    status: "Living",
                    ..Front::new("0")
                }
                .render()
            ),
        );
        repo
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn index_path(&self) -> PathBuf {
        self.root().join("site/src/arcs.json")
    }

    pub fn write_readme(&self, dir: &str, contents: &str) {
        let path = self.root().join(dir);
        fs::create_dir_all(&path).expect("create ARC dir");
        fs::write(path.join("README.md"), contents).expect("write README");
    }

    pub fn write_arc(&self, dir: &str, front: Front<'_>, body: &str) {
        self.write_readme(dir, &format!("{}{body}", front.render()));
    }

    /// Run the `arcs` binary from the repo root.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_arcs"))
            .args(args)
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .output()
            .expect("run arcs")
    }

    pub fn read_index(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.index_path()).expect("read arcs.json");
        serde_json::from_str(&content).expect("parse arcs.json")
    }
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
