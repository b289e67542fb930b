//! Fixture files shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const QUEENS_PROFILE: &str = r#"{
  "city": "Queens",
  "age_range": "Late 20s",
  "life_stage": ["Working full time"],
  "conditions": ["Anxiety"]
}"#;

pub(super) const SMALL_CATALOG: &str = r#"{
  "version": 1,
  "communities": [
    {
      "key": "night_owls",
      "name": "Night Owls",
      "requires": ["insomnia"],
      "boosts": ["anxiety"]
    }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}
