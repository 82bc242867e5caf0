//! Shared helpers for store integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use figurelab_core::clip::Clip;
use figurelab_test_support::FixedClock;
use uuid::Uuid;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> FixedClock {
    FixedClock::default()
}

/// A fresh, not-yet-created directory under the system temp dir.
pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("figurelab-test-{}", Uuid::new_v4()))
}

/// Writes `clips` as a corpus file inside `dir` and returns its path.
pub async fn write_corpus(dir: &Path, clips: &[Clip]) -> PathBuf {
    tokio::fs::create_dir_all(dir).await.unwrap();
    let path = dir.join("corpus.json");
    tokio::fs::write(&path, serde_json::to_vec(clips).unwrap())
        .await
        .unwrap();
    path
}

/// The three-clip salsa corpus used across tests, plus one bachata clip.
pub fn corpus() -> Vec<Clip> {
    vec![
        Clip::new("A", "Basic", "salsa").with_final_tags(["x"]),
        Clip::new("B", "Right turn", "salsa")
            .with_initial_tags(["x"])
            .with_final_tags(["y"])
            .with_payload("thumbnail", serde_json::json!("thumbs/b.jpg")),
        Clip::new("C", "Copa", "salsa").with_initial_tags(["z"]),
        Clip::new("D", "Sway", "bachata")
            .with_initial_tags(["x"])
            .with_final_tags(["x"]),
    ]
}
