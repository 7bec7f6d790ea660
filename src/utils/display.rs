// 표시 폭 계산 - 좁은 터미널에 맞춘 문자열 축약

use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 최대 너비를 넘으면 끝을 `...`으로 자른다.
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }
    let prefix = take_prefix_by_width(text, max_width - ELLIPSIS.width());
    format!("{}{}", prefix, ELLIPSIS)
}

/// 경로를 최대 너비에 맞춰 축약한다.
/// HOME 아래 경로는 `~`로 표시하고, 그래도 길면 앞부분을 `...`으로 생략한다.
pub fn shorten_path(path: &Path, max_width: usize) -> String {
    let text = shorten_home(path);
    if text.width() <= max_width {
        return text;
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(&text, max_width);
    }
    let suffix = take_suffix_by_width(&text, max_width - ELLIPSIS.width());
    format!("{}{}", ELLIPSIS, suffix)
}

fn shorten_home(path: &Path) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.display().to_string();
    };
    match path.strip_prefix(&home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("short", 10), "short");
        assert_eq!(fit_width("verylongstring", 10), "verylon...");
        assert_eq!(fit_width("verylongstring", 3), "ver");
    }

    #[test]
    fn test_fit_width_wide_chars() {
        let value = "가나다라마바사아자차";
        assert!(fit_width(value, 9).width() <= 9);
    }

    #[test]
    fn test_shorten_path_long() {
        let path = PathBuf::from("/srv/projects/archive/2024/reports/quarterly/final");
        let shortened = shorten_path(&path, 20);
        assert!(shortened.starts_with("..."));
        assert!(shortened.ends_with("final"));
        assert!(shortened.width() <= 20);
    }

    #[test]
    fn test_shorten_path_short() {
        let path = PathBuf::from("/tmp/docs");
        assert_eq!(shorten_path(&path, 40), "/tmp/docs");
    }
}
