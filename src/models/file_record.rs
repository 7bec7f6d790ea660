use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 경로 필드 이름 (화면에 표시하지 않음)
pub const PATH_FIELD: &str = "path";

/// 파일 레코드의 필드 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    /// 필드 이름 (카테고리 라벨로 사용)
    pub key: String,
    /// 표시 값
    pub value: String,
}

/// 파일 서비스가 돌려주는 파일 한 건
///
/// 필드 스키마는 서비스가 정하며, UI는 `path`를 제외한 필드를
/// 순서대로 표시만 한다. 선택/대상 집합의 키는 `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    path: PathBuf,
    fields: Vec<RecordField>,
}

impl FileRecord {
    /// 경로만 가진 레코드 생성 (`path` 필드 포함)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let fields = vec![RecordField {
            key: PATH_FIELD.to_string(),
            value: path.display().to_string(),
        }];
        Self { path, fields }
    }

    /// 표시 필드 추가 (빌더)
    ///
    /// `path` 키는 경로와 어긋나지 않도록 무시된다.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key == PATH_FIELD {
            return self;
        }
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(existing) => existing.value = value,
            None => self.fields.push(RecordField { key, value }),
        }
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 표시용 필드 (`path` 제외)
    pub fn display_fields(&self) -> impl Iterator<Item = &RecordField> {
        self.fields.iter().filter(|f| f.key != PATH_FIELD)
    }

    /// 특정 필드 값 조회
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }
}
