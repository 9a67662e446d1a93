pub mod mock_session;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory with the hindi, tamil and (malformed) kannada fixtures
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Write `<key>.json` into `dir`
pub fn write_resource(dir: &Path, key: &str, contents: &str) {
    std::fs::write(dir.join(format!("{}.json", key)), contents).expect("Failed to write resource");
}

/// Yield to spawned tasks until `check` passes
pub async fn wait_until(check: impl Fn() -> bool) {
    for _ in 0..100 {
        if check() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("Timed out waiting for condition");
}
