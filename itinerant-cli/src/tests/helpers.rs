//! Test helpers for writing trip requests and catalogs to a scratch directory.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use itinerant_core::test_support::sample_catalog;
use itinerant_core::{PoolCatalog, TripRequest};
use tempfile::TempDir;

/// Write `contents` to `path`, creating or truncating the file.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    let parent = path.parent().expect("path should have a parent");
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority()).expect("open parent");
    let name = path.file_name().expect("path should have a file name");
    let mut file = dir.create(name).expect("create file");
    file.write_all(contents).expect("write file");
}

/// A two day Lisbon trip for two with a modest daily budget.
pub(super) fn lisbon_request() -> TripRequest {
    TripRequest::single_city("Lisbon", 2, 80).with_party_size(2)
}

/// Scratch directory holding a request and a catalog file.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) request_path: Utf8PathBuf,
    pub(super) catalog_path: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let request_path = root.join("request.json");
        let catalog_path = root.join("catalog.json");
        Self {
            _dir: dir,
            root,
            request_path,
            catalog_path,
        }
    }

    pub(super) fn write_request(&self, request: &TripRequest) {
        let payload = serde_json::to_string_pretty(request).expect("serialise request");
        write_utf8(&self.request_path, payload.as_bytes());
    }

    pub(super) fn write_catalog(&self, catalog: &PoolCatalog) {
        let payload = serde_json::to_string_pretty(catalog).expect("serialise catalog");
        write_utf8(&self.catalog_path, payload.as_bytes());
    }

    /// Write the Lisbon request and the Lisbon/Porto sample catalog.
    pub(super) fn with_sample_inputs() -> Self {
        let workspace = Self::new();
        workspace.write_request(&lisbon_request());
        workspace.write_catalog(&sample_catalog());
        workspace
    }
}
