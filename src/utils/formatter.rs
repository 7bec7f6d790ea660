// Formatters - 파일 크기 포맷팅/파싱

use crate::utils::error::{FileSiftError, Result};

/// 크기 단위 (1024 배수)
pub const SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
///
/// ```text
/// format_file_size(0)         == "0 B"
/// format_file_size(512)       == "512 B"
/// format_file_size(1536)      == "1.5 KB"
/// format_file_size(1_048_576) == "1.0 MB"
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes < TB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    }
}

/// 크기 문자열을 바이트로 변환
///
/// 대소문자 무시, 공백 무시. `"10MB"`, `"1.5 kb"`, `"512"` (단위 없으면 바이트).
pub fn parse_size(input: &str) -> Result<u64> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if normalized.is_empty() {
        return Err(FileSiftError::InvalidSize(input.to_string()));
    }

    let split_at = normalized
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(normalized.len());
    let (num_str, label) = normalized.split_at(split_at);

    let num: f64 = num_str
        .parse()
        .map_err(|_| FileSiftError::InvalidSize(input.to_string()))?;

    let exp = if label.is_empty() {
        0
    } else {
        SIZE_UNITS
            .iter()
            .position(|unit| *unit == label)
            .ok_or_else(|| FileSiftError::InvalidSize(input.to_string()))?
    };

    Ok((num * 1024f64.powi(exp as i32)) as u64)
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
        assert_eq!(format_file_size(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn test_parse_size_with_units() {
        assert_eq!(parse_size("1B").unwrap(), 1);
        assert_eq!(parse_size("1KB").unwrap(), 1024);
        assert_eq!(parse_size("10mb").unwrap(), 10 * 1024 * 1024);
        assert_eq!(parse_size("1.5 KB").unwrap(), 1536);
        assert_eq!(parse_size(" 2 gb ").unwrap(), 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_bare_number_is_bytes() {
        assert_eq!(parse_size("0").unwrap(), 0);
        assert_eq!(parse_size("100").unwrap(), 100);
    }

    #[test]
    fn test_parse_size_rejects_invalid() {
        assert!(parse_size("").is_err());
        assert!(parse_size("KB").is_err());
        assert!(parse_size("10XB").is_err());
        assert!(parse_size("1.2.3MB").is_err());
        assert!(matches!(
            parse_size("abc"),
            Err(FileSiftError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "file", "files"), "1 file");
        assert_eq!(pluralize(3, "file", "files"), "3 files");
        assert_eq!(pluralize(0, "item", "items"), "0 items");
    }
}
