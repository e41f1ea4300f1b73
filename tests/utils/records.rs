//! Temporary record corpora on disk for exercising the file scanner
#![allow(dead_code)] // Test utilities may not all be used in every test

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A record file under the system temp dir, removed on drop.
pub struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    pub fn with_lines(lines: &[&str]) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "pokerhands-{}-{}.txt",
            std::process::id(),
            id
        ));
        fs::write(&path, lines.join("\n")).expect("record file should be writable");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RecordFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
