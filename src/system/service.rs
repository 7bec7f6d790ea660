//! 로컬 파일 서비스
//!
//! 브라우저가 호출하는 검색/필터/일괄 작업의 실제 구현 (동기).

use crate::models::operation::{OperationReport, OperationType};
use crate::models::{FileRecord, FilterCriteria};
use crate::system::filesystem::{split_extension, FileSystem};
use crate::system::search::{to_record, FileSearch};
use crate::utils::error::{FileSiftError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalFileService {
    filesystem: FileSystem,
}

impl LocalFileService {
    pub fn new(filesystem: FileSystem) -> Self {
        Self { filesystem }
    }

    pub fn filesystem(&self) -> &FileSystem {
        &self.filesystem
    }

    /// 필터 없는 재귀 목록
    pub fn simple_search(&self, dir: &Path) -> Result<Vec<FileRecord>> {
        let results = FileSearch::new(dir).run(&self.filesystem)?;
        Ok(results.iter().map(to_record).collect())
    }

    /// 필터 적용 목록
    pub fn apply_filter(&self, dir: &Path, criteria: &FilterCriteria) -> Result<Vec<FileRecord>> {
        let results = FileSearch::with_filters(dir, criteria).run(&self.filesystem)?;
        Ok(results.iter().map(to_record).collect())
    }

    /// 각 파일을 `dest/<name>`으로 이동
    pub fn move_all(&self, records: &[FileRecord], dest: &Path) -> OperationReport {
        self.for_each(OperationType::Move, records, |src| {
            let target = dest.join(file_name(src));
            self.filesystem.move_file(src, &target).map(|_| ())
        })
    }

    /// 각 파일을 `dest/<stem>_copy<ext>`로 복사
    pub fn copy_all(&self, records: &[FileRecord], dest: &Path) -> OperationReport {
        self.for_each(OperationType::Copy, records, |src| {
            let target = dest.join(copy_name(src));
            self.filesystem.copy_file(src, &target).map(|_| ())
        })
    }

    pub fn delete_all(&self, records: &[FileRecord]) -> OperationReport {
        self.for_each(OperationType::Delete, records, |src| {
            self.filesystem.delete_file(src).map(|_| ())
        })
    }

    /// i번째 파일을 같은 디렉토리에서 `<stem>_<i><ext>`로 변경
    ///
    /// 다른 디렉토리를 가리키는 stem이면 모든 항목이 실패로 기록된다.
    pub fn rename_all(&self, records: &[FileRecord], new_stem: &str) -> OperationReport {
        let mut index = 0usize;
        self.for_each(OperationType::Rename, records, |src| {
            validate_stem(new_stem)?;
            let target = numbered_name(src, new_stem, index);
            index += 1;
            self.filesystem.rename_path(src, &target)
        })
    }

    /// 모든 항목을 처리하고 결과를 모은다 (실패해도 계속)
    fn for_each<F>(
        &self,
        operation_type: OperationType,
        records: &[FileRecord],
        mut op: F,
    ) -> OperationReport
    where
        F: FnMut(&Path) -> Result<()>,
    {
        let mut report = OperationReport::new(operation_type);
        for record in records {
            let src = record.path();
            match op(src) {
                Ok(()) => report.record_success(),
                Err(e) => {
                    tracing::warn!(
                        operation = operation_type.name(),
                        path = %src.display(),
                        error = %e,
                        "file operation failed"
                    );
                    report.record_failure(src.to_path_buf(), e.to_string());
                }
            }
        }
        tracing::info!(
            operation = operation_type.name(),
            succeeded = report.succeeded,
            failed = report.failures.len(),
            "bulk operation finished"
        );
        report
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// 복사본 이름: `report.pdf` -> `report_copy.pdf`
pub fn copy_name(path: &Path) -> String {
    let (stem, extension) = split_extension(&file_name(path));
    format!("{}_copy{}", stem, extension)
}

/// 새 이름의 stem 검사 (경로 구분자, `.`/`..` 거부)
pub fn validate_stem(stem: &str) -> Result<()> {
    if stem.is_empty() || stem == "." || stem == ".." || stem.contains(['/', '\\']) {
        return Err(FileSiftError::InvalidName(stem.to_string()));
    }
    Ok(())
}

/// 번호 붙인 새 경로: (`/d/a.txt`, "photo", 2) -> `/d/photo_2.txt`
pub fn numbered_name(path: &Path, new_stem: &str, index: usize) -> PathBuf {
    let (_, extension) = split_extension(&file_name(path));
    let name = format!("{}_{}{}", new_stem, index, extension);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
