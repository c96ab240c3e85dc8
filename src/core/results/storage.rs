//! Results file persistence (results.json).

use std::fs;
use std::io;

use serde::{Deserialize, Serialize};

use crate::core::paths;

use super::ExamResult;

#[derive(Debug, Serialize, Deserialize)]
struct ResultsFile {
    results: Vec<ExamResult>,
}

fn results_path() -> Option<std::path::PathBuf> {
    paths::data_dir().map(|d| d.join("results.json"))
}

fn ensure_data_dir() -> io::Result<std::path::PathBuf> {
    let dir = paths::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No data directory"))?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load all stored results. Returns an empty list when no data dir or the file
/// is absent (first run). Propagates IO errors (permission, disk) and JSON
/// parse errors.
pub(super) fn load_all() -> io::Result<Vec<ExamResult>> {
    let path = match results_path() {
        Some(p) => p,
        None => return Ok(vec![]),
    };
    let data = match fs::read_to_string(&path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(e),
    };
    let file: ResultsFile = serde_json::from_str(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    Ok(file.results)
}

/// Write all results atomically (tmp file + rename).
pub(super) fn save_all(results: &[ExamResult]) -> io::Result<()> {
    ensure_data_dir()?;
    let path =
        results_path().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No results path"))?;
    let file = ResultsFile {
        results: results.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}
