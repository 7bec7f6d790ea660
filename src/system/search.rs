//! 파일 검색과 필터 평가
//!
//! 디렉토리를 재귀 탐색해 필터를 모두 만족하는 파일만 남긴다.
//! 값이 비었거나 해석할 수 없는 조건은 적용하지 않는다.

use crate::models::filter::{is_blank_list, FilterCriteria};
use crate::models::FileRecord;
use crate::system::filesystem::{FileInfo, FileSystem};
use crate::utils::error::Result;
use crate::utils::formatter::{format_file_size, parse_size};
use std::path::{Path, PathBuf};

/// 개별 필터
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFilter {
    /// stem에 태그 중 하나라도 포함 (대소문자 무시)
    Tags(Vec<String>),
    /// 확장자 중 하나와 일치 (앞의 점은 선택, 조건만 소문자로 바꾸고 파일 확장자는 그대로 비교)
    Extensions(Vec<String>),
    /// 최소 크기 (바이트, 포함)
    SizeMin(u64),
    /// 최대 크기 (바이트, 포함)
    SizeMax(u64),
}

impl FileFilter {
    pub fn matches(&self, file: &FileInfo) -> bool {
        match self {
            FileFilter::Tags(tags) => {
                let stem = file.stem.to_uppercase();
                tags.iter()
                    .any(|tag| stem.contains(tag.trim().to_uppercase().as_str()))
            }
            FileFilter::Extensions(extensions) => {
                let actual = file.extension.trim_start_matches('.');
                extensions.iter().any(|ext| {
                    let wanted = ext.trim().to_lowercase();
                    wanted.trim_start_matches('.') == actual
                })
            }
            FileFilter::SizeMin(min) => file.size >= *min,
            FileFilter::SizeMax(max) => file.size <= *max,
        }
    }
}

/// 유효한 필터 모음 (모두 만족해야 통과)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<FileFilter>,
}

impl FilterSet {
    /// 조건에서 유효한 필터만 추린다
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut filters = Vec::new();

        if !is_blank_list(&criteria.tags) {
            filters.push(FileFilter::Tags(criteria.tags.clone()));
        }
        if !is_blank_list(&criteria.extensions) {
            filters.push(FileFilter::Extensions(criteria.extensions.clone()));
        }
        if let Some(min) = parse_size_filter("size_min", &criteria.size_min) {
            filters.push(FileFilter::SizeMin(min));
        }
        if let Some(max) = parse_size_filter("size_max", &criteria.size_max) {
            filters.push(FileFilter::SizeMax(max));
        }

        Self { filters }
    }

    /// 유효한 조건 수
    pub fn count(&self) -> usize {
        self.filters.len()
    }

    pub fn matches_all(&self, file: &FileInfo) -> bool {
        self.filters.iter().all(|f| f.matches(file))
    }
}

fn parse_size_filter(name: &str, raw: &str) -> Option<u64> {
    if raw.is_empty() {
        return None;
    }
    match parse_size(raw) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::debug!(filter = name, value = raw, error = %e, "ignoring size filter");
            None
        }
    }
}

/// 디렉토리 검색
#[derive(Debug, Clone)]
pub struct FileSearch {
    root: PathBuf,
    filters: FilterSet,
}

impl FileSearch {
    /// 필터 없는 검색
    pub fn new(root: &Path) -> Self {
        Self {
            root: normalize(root),
            filters: FilterSet::default(),
        }
    }

    pub fn with_filters(root: &Path, criteria: &FilterCriteria) -> Self {
        Self {
            root: normalize(root),
            filters: FilterSet::from_criteria(criteria),
        }
    }

    /// 검색 실행
    pub fn run(&self, filesystem: &FileSystem) -> Result<Vec<FileInfo>> {
        let mut results = Vec::new();
        for path in filesystem.walk_files(&self.root)? {
            let info = match FileInfo::from_path(&path) {
                Ok(info) => info,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    continue;
                }
            };
            if self.filters.matches_all(&info) {
                results.push(info);
            }
        }
        tracing::debug!(
            root = %self.root.display(),
            filters = self.filters.count(),
            results = results.len(),
            "search finished"
        );
        Ok(results)
    }
}

/// 검색 결과를 화면용 레코드로 변환
pub fn to_record(info: &FileInfo) -> FileRecord {
    FileRecord::new(info.path.clone())
        .field("name", info.name.clone())
        .field("dir", info.dir.display().to_string())
        .field("size", format_file_size(info.size))
}

/// `.`과 중복 구분자를 정리한 경로
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn info(name: &str, size: u64) -> FileInfo {
        let (stem, extension) = crate::system::filesystem::split_extension(name);
        FileInfo {
            path: PathBuf::from("/docs").join(name),
            name: name.to_string(),
            dir: PathBuf::from("/docs"),
            stem,
            extension,
            size,
        }
    }

    fn criteria(tags: &[&str], extensions: &[&str], min: &str, max: &str) -> FilterCriteria {
        FilterCriteria {
            tags: tags.iter().map(|s| s.to_string()).collect(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            size_min: min.to_string(),
            size_max: max.to_string(),
        }
    }

    #[test]
    fn test_blank_and_invalid_criteria_are_ignored() {
        let set = FilterSet::from_criteria(&criteria(&[""], &[""], "", "lots"));
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn test_tag_matches_stem_case_insensitive() {
        let set = FilterSet::from_criteria(&criteria(&[" invoice "], &[], "", ""));
        assert!(set.matches_all(&info("Invoice_2024.pdf", 10)));
        assert!(!set.matches_all(&info("receipt.pdf", 10)));
        // 확장자는 stem이 아님
        assert!(!FilterSet::from_criteria(&criteria(&["pdf"], &[], "", ""))
            .matches_all(&info("receipt.pdf", 10)));
    }

    #[test]
    fn test_extension_with_or_without_dot() {
        let set = FilterSet::from_criteria(&criteria(&[], &["pdf", ".TXT"], "", ""));
        assert!(set.matches_all(&info("a.pdf", 1)));
        assert!(set.matches_all(&info("b.txt", 1)));
        assert!(!set.matches_all(&info("c.md", 1)));
    }

    #[test]
    fn test_extension_compares_file_extension_as_is() {
        let set = FilterSet::from_criteria(&criteria(&[], &["PDF"], "", ""));
        assert!(set.matches_all(&info("a.pdf", 1)));
        assert!(!set.matches_all(&info("SCAN.PDF", 1)));
    }

    #[test]
    fn test_empty_extension_entry_matches_files_without_extension() {
        let set = FilterSet::from_criteria(&criteria(&[], &["md", ""], "", ""));
        assert!(set.matches_all(&info("README", 1)));
        assert!(set.matches_all(&info("notes.md", 1)));
        assert!(!set.matches_all(&info("a.pdf", 1)));
    }

    #[test]
    fn test_size_bounds_are_inclusive() {
        let set = FilterSet::from_criteria(&criteria(&[], &[], "1KB", "2KB"));
        assert_eq!(set.count(), 2);
        assert!(set.matches_all(&info("a.bin", 1024)));
        assert!(set.matches_all(&info("b.bin", 2048)));
        assert!(!set.matches_all(&info("c.bin", 1023)));
        assert!(!set.matches_all(&info("d.bin", 2049)));
    }

    #[test]
    fn test_all_filters_must_match() {
        let set = FilterSet::from_criteria(&criteria(&["report"], &["pdf"], "", "100"));
        assert!(set.matches_all(&info("report.pdf", 100)));
        assert!(!set.matches_all(&info("report.pdf", 101)));
        assert!(!set.matches_all(&info("report.txt", 10)));
    }

    #[test]
    fn test_search_run_and_records() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("keep.pdf"), "12345").unwrap();
        fs::write(temp.path().join("skip.txt"), "1").unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/also.pdf"), "1").unwrap();

        let filesystem = FileSystem::new();
        let all = FileSearch::new(temp.path()).run(&filesystem).unwrap();
        assert_eq!(all.len(), 3);

        let found = FileSearch::with_filters(temp.path(), &criteria(&[], &["pdf"], "", ""))
            .run(&filesystem)
            .unwrap();
        let names: Vec<&str> = found.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["keep.pdf", "also.pdf"]);

        let record = to_record(&found[0]);
        let keys: Vec<&str> = record.display_fields().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "dir", "size"]);
        assert_eq!(record.get("size"), Some("5 B"));
    }

    #[test]
    fn test_normalize_strips_dot_segments() {
        let search = FileSearch::new(Path::new("/docs/./reports/"));
        assert_eq!(search.root, PathBuf::from("/docs/reports"));
    }
}
