//! 호스트 API 경계
//!
//! 브라우저 컨트롤러가 외부에 요청하는 연산 전체. 각 호출은 await 지점이며
//! 컨트롤러는 결과가 올 때까지 양보한다.

use crate::models::{FileRecord, FilterCriteria, OperationReport};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 외부 파일 서비스 + 창 제어
#[allow(async_fn_in_trait)]
pub trait HostApi {
    /// 폴더 선택기 (취소 시 빈 목록)
    async fn open_folder_picker(&self) -> Result<Vec<PathBuf>>;

    /// 필터 없는 목록
    async fn simple_search(&self, dir: &Path) -> Result<Vec<FileRecord>>;

    /// 필터 적용 목록
    async fn apply_filter(&self, dir: &Path, criteria: &FilterCriteria)
        -> Result<Vec<FileRecord>>;

    async fn move_all(&self, files: &[FileRecord], dest: &Path) -> Result<OperationReport>;

    async fn copy_all(&self, files: &[FileRecord], dest: &Path) -> Result<OperationReport>;

    async fn delete_all(&self, files: &[FileRecord]) -> Result<OperationReport>;

    async fn rename_all(&self, files: &[FileRecord], new_stem: &str) -> Result<OperationReport>;

    fn minimize_window(&self);

    fn restore_window(&self);

    fn close_window(&self);
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use crate::models::OperationType;
    use crate::utils::error::FileSiftError;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    /// 기록된 호출
    #[derive(Debug, Clone, PartialEq)]
    pub enum HostCall {
        Picker,
        SimpleSearch(PathBuf),
        ApplyFilter(PathBuf, FilterCriteria),
        MoveAll(Vec<PathBuf>, PathBuf),
        CopyAll(Vec<PathBuf>, PathBuf),
        DeleteAll(Vec<PathBuf>),
        RenameAll(Vec<PathBuf>, String),
        Minimize,
        Restore,
        Close,
    }

    /// 응답을 미리 심어두고 호출을 기록하는 테스트용 호스트
    #[derive(Default)]
    pub struct MockHost {
        pub calls: RefCell<Vec<HostCall>>,
        pub picks: RefCell<VecDeque<Vec<PathBuf>>>,
        pub listings: RefCell<HashMap<PathBuf, Vec<FileRecord>>>,
        pub filtered: RefCell<Vec<FileRecord>>,
        pub fail_search: RefCell<bool>,
    }

    impl MockHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_listing(self, dir: &str, records: Vec<FileRecord>) -> Self {
            self.listings
                .borrow_mut()
                .insert(PathBuf::from(dir), records);
            self
        }

        /// 이미 빌린 상태에서 목록 응답 교체
        pub fn set_listing(&self, dir: &str, records: Vec<FileRecord>) {
            self.listings
                .borrow_mut()
                .insert(PathBuf::from(dir), records);
        }

        pub fn push_pick(&self, paths: &[&str]) {
            self.picks
                .borrow_mut()
                .push_back(paths.iter().map(PathBuf::from).collect());
        }

        pub fn calls(&self) -> Vec<HostCall> {
            self.calls.borrow().clone()
        }

        pub fn clear_calls(&self) {
            self.calls.borrow_mut().clear();
        }

        fn record(&self, call: HostCall) {
            self.calls.borrow_mut().push(call);
        }

        fn paths(files: &[FileRecord]) -> Vec<PathBuf> {
            files.iter().map(|f| f.path().to_path_buf()).collect()
        }

        fn report(operation_type: OperationType, files: &[FileRecord]) -> OperationReport {
            let mut report = OperationReport::new(operation_type);
            for _ in files {
                report.record_success();
            }
            report
        }
    }

    impl HostApi for MockHost {
        async fn open_folder_picker(&self) -> Result<Vec<PathBuf>> {
            self.record(HostCall::Picker);
            Ok(self.picks.borrow_mut().pop_front().unwrap_or_default())
        }

        async fn simple_search(&self, dir: &Path) -> Result<Vec<FileRecord>> {
            self.record(HostCall::SimpleSearch(dir.to_path_buf()));
            if *self.fail_search.borrow() {
                return Err(FileSiftError::PathNotFound {
                    path: dir.to_path_buf(),
                });
            }
            Ok(self
                .listings
                .borrow()
                .get(dir)
                .cloned()
                .unwrap_or_default())
        }

        async fn apply_filter(
            &self,
            dir: &Path,
            criteria: &FilterCriteria,
        ) -> Result<Vec<FileRecord>> {
            self.record(HostCall::ApplyFilter(dir.to_path_buf(), criteria.clone()));
            Ok(self.filtered.borrow().clone())
        }

        async fn move_all(&self, files: &[FileRecord], dest: &Path) -> Result<OperationReport> {
            self.record(HostCall::MoveAll(Self::paths(files), dest.to_path_buf()));
            Ok(Self::report(OperationType::Move, files))
        }

        async fn copy_all(&self, files: &[FileRecord], dest: &Path) -> Result<OperationReport> {
            self.record(HostCall::CopyAll(Self::paths(files), dest.to_path_buf()));
            Ok(Self::report(OperationType::Copy, files))
        }

        async fn delete_all(&self, files: &[FileRecord]) -> Result<OperationReport> {
            self.record(HostCall::DeleteAll(Self::paths(files)));
            Ok(Self::report(OperationType::Delete, files))
        }

        async fn rename_all(&self, files: &[FileRecord], new_stem: &str) -> Result<OperationReport> {
            self.record(HostCall::RenameAll(Self::paths(files), new_stem.to_string()));
            Ok(Self::report(OperationType::Rename, files))
        }

        fn minimize_window(&self) {
            self.record(HostCall::Minimize);
        }

        fn restore_window(&self) {
            self.record(HostCall::Restore);
        }

        fn close_window(&self) {
            self.record(HostCall::Close);
        }
    }
}
