//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};

/// Sentence used throughout the counting scenarios
#[allow(dead_code)]
pub const SAMPLE_TEXT: &str =
    "the quick brown fox jumps over the lazy dog. The quick brown fox is quick.";

/// lcm(1..=12), so `POWER_LAW_C / rank` is exact for every rank used
#[allow(dead_code)]
pub const POWER_LAW_C: usize = 27_720;

/// Write `contents` to `name` inside `dir`
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write fixture {name}: {e}"));
    path
}

/// Text whose word counts follow `count = POWER_LAW_C / rank` for ranks 1..=12
#[allow(dead_code)]
pub fn power_law_text() -> String {
    let mut text = String::new();
    for rank in 1..=12usize {
        let word = format!("w{}", char::from(b'a' + (rank - 1) as u8));
        for _ in 0..POWER_LAW_C / rank {
            text.push_str(&word);
            text.push(' ');
        }
    }
    text
}
