//! Test helpers for laying out evaluate command inputs on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Manifest used across CLI tests: three stops, two items, a two-by-two grid.
pub(super) const MANIFEST_JSON: &str = r#"{
    "title": "two items",
    "total_items": 2,
    "total_stops": 3,
    "grid_width": 2,
    "grid_height": 2,
    "items": [
        {"id": 1, "pickup_stop": 1, "drop_off_stop": 2, "weight": 10},
        {"id": 2, "pickup_stop": 1, "drop_off_stop": 3, "weight": 20}
    ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

/// Temporary directory holding a manifest and a decision vector.
pub(super) struct Inputs {
    _dir: TempDir,
    root: Utf8PathBuf,
    manifest: Utf8PathBuf,
    decision: Utf8PathBuf,
}

impl Inputs {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let manifest = root.join("manifest.json");
        let decision = root.join("decision.json");
        Self {
            _dir: dir,
            root,
            manifest,
            decision,
        }
    }

    /// Write the shared manifest and the given decision vector.
    pub(super) fn with_decision(decision: &str) -> Self {
        let inputs = Self::new();
        write_utf8(&inputs.manifest, MANIFEST_JSON.as_bytes());
        write_utf8(&inputs.decision, decision.as_bytes());
        inputs
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn manifest(&self) -> &Utf8Path {
        &self.manifest
    }

    pub(super) fn decision(&self) -> &Utf8Path {
        &self.decision
    }
}
