//! File system cache for fetched responses.
//!
//! Completed match days never change, so their payloads are stored as
//! pretty-printed JSON under the platform cache directory and read back on
//! later runs.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Path: ~/.cache/bfv-api/competition_{id}_day_{n}.json
pub fn match_day_path(competition_id: &str, match_day: u32) -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("bfv-api").join(format!(
        "competition_{}_day_{}.json",
        competition_id, match_day
    ))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
