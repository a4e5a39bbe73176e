//! Test helpers for composing CLI inputs and catalog fixtures.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use roamwise_core::{Catalog, Month};
use roamwise_core::test_support::sample_catalog;
use tempfile::TempDir;

use crate::recommend::{RecommendArgs, RecommendConfig};

/// Write `contents` to `path`, creating parent directories as needed.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    let mut file = roamwise_fs::create_utf8_file(path).expect("create file");
    file.write_all(contents).expect("write file");
}

/// A temporary directory addressed with UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Write the sample catalog to `catalog.json` and return its path.
    pub(super) fn sample_catalog_file(&self) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        let destinations = sample_catalog();
        let document = serde_json::json!({ "destinations": destinations });
        let payload = serde_json::to_vec_pretty(&document).expect("serialize catalog");
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn july() -> Month {
    Month::new(7).expect("valid month")
}

/// Arguments naming only a concept.
pub(super) fn args_for(concept: &str) -> RecommendArgs {
    RecommendArgs {
        concept: Some(concept.to_owned()),
        ..RecommendArgs::default()
    }
}

/// Resolve `args` against July.
pub(super) fn resolve_in_july(args: RecommendArgs) -> RecommendConfig {
    RecommendConfig::resolve(args, july()).expect("config should resolve")
}

pub(super) fn bundled() -> Catalog {
    Catalog::bundled().expect("bundled catalog parses")
}
