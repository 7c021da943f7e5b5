//! Recording of response bodies as offline test fixtures.
//! Compiled only when the `test-mode` feature is enabled; `tests/common.rs`
//! replays the files through `fixture(name)`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("MESSARI_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// `/api/v1/news` + `page=2` becomes `api_v1_news__page_2`; no query, no suffix.
pub(crate) fn fixture_name(path: &str, query: Option<&str>) -> String {
    let base = sanitize(path.trim_start_matches('/'));
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}__{}", sanitize(q)),
        None => base,
    }
}

pub(crate) fn record_fixture(name: &str, body: &str) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    fs::create_dir_all(&dir)?;
    let file = dir.join(format!("{name}.json"));
    fs::write(&file, body)?;

    if env::var("MESSARI_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("MESSARI_RECORD: wrote fixture to {}", file.display());
    }
    Ok(())
}
