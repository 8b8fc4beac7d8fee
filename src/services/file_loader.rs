// File Loading Service
// Accepts plain-text uploads only

use crate::error::{AppError, AppResult};
use std::path::Path;
use tracing::info;

const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub file_name: String,
    pub text: String,
}

impl LoadedText {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

fn is_txt(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("txt"))
}

/// Decode an in-memory upload as UTF-8 text.
pub fn decode_upload(file_name: &str, bytes: Vec<u8>) -> AppResult<LoadedText> {
    if !is_txt(file_name) {
        return Err(AppError::UnsupportedFile(file_name.to_string()));
    }

    let text = String::from_utf8(bytes).map_err(|source| AppError::Decode {
        file_name: file_name.to_string(),
        source,
    })?;
    let text = match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    };

    Ok(LoadedText { file_name: file_name.to_string(), text })
}

pub fn load_text_file(path: &Path) -> AppResult<LoadedText> {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "input.txt".to_string());

    if !is_txt(&file_name) {
        return Err(AppError::UnsupportedFile(file_name));
    }

    let bytes = std::fs::read(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = decode_upload(&file_name, bytes)?;
    info!(file = %loaded.file_name, chars = loaded.char_count(), "file.loaded");
    Ok(loaded)
}
