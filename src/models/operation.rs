//! 일괄 파일 작업 모델
//!
//! 이동/복사/삭제/이름 변경 결과를 항목 단위로 보고한다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 작업 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Move,
    Copy,
    Delete,
    Rename,
}

impl OperationType {
    /// 작업 유형 이름 반환
    pub fn name(&self) -> &'static str {
        match self {
            OperationType::Move => "Move",
            OperationType::Copy => "Copy",
            OperationType::Delete => "Delete",
            OperationType::Rename => "Rename",
        }
    }

    /// 목적지 폴더가 필요한 작업인지
    pub fn needs_destination(&self) -> bool {
        matches!(self, OperationType::Move | OperationType::Copy)
    }
}

impl std::str::FromStr for OperationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "move" => Ok(OperationType::Move),
            "copy" => Ok(OperationType::Copy),
            "delete" => Ok(OperationType::Delete),
            "rename" => Ok(OperationType::Rename),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

/// 실패한 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// 작업 결과 보고
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    pub operation_type: OperationType,
    /// 성공한 항목 수
    pub succeeded: usize,
    /// 실패 목록
    pub failures: Vec<OperationFailure>,
}

impl OperationReport {
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            operation_type,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.failures.push(OperationFailure {
            path,
            reason: reason.into(),
        });
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 한 줄 요약 (토스트용)
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "{}: {} of {} done",
                self.operation_type.name(),
                self.succeeded,
                self.total()
            )
        } else {
            format!(
                "{}: {} of {} done, {} failed",
                self.operation_type.name(),
                self.succeeded,
                self.total(),
                self.failures.len()
            )
        }
    }
}
