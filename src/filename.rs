// filename.rs
// Safe storage filenames from whatever the uploader's browser reported.

use chrono::Utc;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

pub const MAX_BASE_LEN: usize = 100;

/// Builds a storage-safe filename.
///
/// The extension is taken after the last `.` and lower-cased; the base name is
/// stripped of diacritics, whitespace runs become `_`, anything outside
/// `[A-Za-z0-9_.-]` is dropped and the result is capped at [`MAX_BASE_LEN`]
/// characters. An empty input gets a timestamped placeholder without extension.
pub fn sanitize(original_name: &str) -> String {
    if original_name.is_empty() {
        return format!("file_{}", Utc::now().timestamp_millis());
    }

    let (base, extension) = match original_name.rfind('.') {
        Some(idx) => (
            &original_name[..idx],
            original_name[idx + 1..].to_lowercase(),
        ),
        None => (original_name, String::new()),
    };

    let normalized = normalize_base(base);
    if extension.is_empty() {
        normalized
    } else {
        format!("{normalized}.{extension}")
    }
}

fn normalize_base(base: &str) -> String {
    let mut out = String::with_capacity(base.len());
    let mut in_whitespace = false;

    for ch in base.nfd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.') {
            out.push(ch);
        }
    }

    out.chars().take(MAX_BASE_LEN).collect()
}

/// Object key for an upload: `<company>/<category>/<file>`.
pub fn storage_path(company_id: &str, category: &str, original_name: &str) -> String {
    format!(
        "{}/{}/{}",
        path_segment(company_id, "sin_empresa"),
        path_segment(category, "general"),
        sanitize(original_name)
    )
}

// A single key segment: normalized, no leading or trailing dots.
fn path_segment(raw: &str, fallback: &str) -> String {
    let segment = normalize_base(raw);
    let segment = segment.trim_matches('.');
    if segment.is_empty() {
        fallback.to_string()
    } else {
        segment.to_string()
    }
}
