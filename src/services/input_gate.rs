// Input length gating. Caller-side only; the scorer accepts anything.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum InputCheck {
    Missing,
    TooShort { chars: usize, min_chars: usize },
    Ready { chars: usize },
}

pub fn check_input(text: &str, min_chars: usize) -> InputCheck {
    if text.trim().is_empty() {
        return InputCheck::Missing;
    }
    let chars = text.chars().count();
    if chars < min_chars {
        InputCheck::TooShort { chars, min_chars }
    } else {
        InputCheck::Ready { chars }
    }
}

impl InputCheck {
    /// Analysis may proceed. `force` overrides the length check but never
    /// a missing input.
    pub fn allows_analysis(&self, force: bool) -> bool {
        match self {
            InputCheck::Missing => false,
            InputCheck::TooShort { .. } => force,
            InputCheck::Ready { .. } => true,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            InputCheck::Missing => Some("請先上傳一個 .txt 檔案或等待檔案讀取完成。".to_string()),
            InputCheck::TooShort { chars, min_chars } => Some(format!(
                "警告：文本內容少於 {} 字（目前 {} 字），模擬結果可能不準確。",
                min_chars, chars
            )),
            InputCheck::Ready { .. } => None,
        }
    }
}
