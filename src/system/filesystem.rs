use crate::utils::error::{FileSiftError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 삭제 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// 영구 삭제
    #[default]
    Permanent,
    /// 휴지통으로 이동
    Trash,
}

/// 파일 하나의 메타데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    /// 파일 이름 (확장자 포함)
    pub name: String,
    /// 상위 디렉토리
    pub dir: PathBuf,
    /// 확장자를 뺀 이름
    pub stem: String,
    /// 점을 포함한 확장자 (없으면 빈 문자열)
    pub extension: String,
    /// 바이트 단위 크기
    pub size: u64,
}

impl FileInfo {
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| FileSiftError::from_io(e, path))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let (stem, extension) = split_extension(&name);
        Ok(Self {
            path: path.to_path_buf(),
            name,
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            stem,
            extension,
            size: metadata.len(),
        })
    }
}

/// 파일 이름을 (stem, ".ext")로 분리
///
/// 점으로 시작하는 이름(".bashrc")은 확장자가 없는 것으로 본다.
pub fn split_extension(name: &str) -> (String, String) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && !name[..idx].chars().all(|c| c == '.') => {
            (name[..idx].to_string(), name[idx..].to_string())
        }
        _ => (name.to_string(), String::new()),
    }
}

/// 파일 시스템 모듈
#[derive(Debug, Clone, Default)]
pub struct FileSystem {
    delete_mode: DeleteMode,
}

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delete_mode(delete_mode: DeleteMode) -> Self {
        Self { delete_mode }
    }

    /// 디렉토리 재귀 탐색
    ///
    /// 위에서 아래로, 각 디렉토리의 파일을 이름순으로 먼저 나열한 뒤 하위 디렉토리로 내려간다.
    /// 심볼릭 링크 디렉토리는 따라가지 않는다.
    pub fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(FileSiftError::PathNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(FileSiftError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        self.walk_into(root, &mut files, true)?;
        Ok(files)
    }

    fn walk_into(&self, dir: &Path, files: &mut Vec<PathBuf>, is_root: bool) -> Result<()> {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            // 루트가 아니면 읽을 수 없는 디렉토리는 건너뜀
            Err(e) if !is_root => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return Ok(());
            }
            Err(e) => return Err(FileSiftError::from_io(e, dir)),
        };

        let mut entries: Vec<(String, PathBuf)> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| (entry.file_name().to_string_lossy().to_string(), entry.path()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut subdirs = Vec::new();
        for (_, path) in entries {
            let Ok(link_metadata) = fs::symlink_metadata(&path) else {
                continue;
            };
            if link_metadata.is_dir() {
                subdirs.push(path);
            } else if link_metadata.is_file() || path.is_file() {
                files.push(path);
            }
        }

        for subdir in subdirs {
            self.walk_into(&subdir, files, false)?;
        }
        Ok(())
    }

    /// 하위 디렉토리 목록 (이름순)
    pub fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let read_dir = fs::read_dir(dir).map_err(|e| FileSiftError::from_io(e, dir))?;
        let mut dirs: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        Ok(dirs)
    }

    /// 파일 복사
    ///
    /// 반환값: 복사된 바이트 수
    #[allow(clippy::unused_self)]
    pub fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        if src == dest || dest.exists() {
            return Err(FileSiftError::CopyFailed {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
                reason: "destination already exists".to_string(),
            });
        }

        if !src.exists() {
            return Err(FileSiftError::PathNotFound {
                path: src.to_path_buf(),
            });
        }

        fs::copy(src, dest).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileSiftError::PermissionDenied {
                    path: dest.to_path_buf(),
                }
            } else {
                FileSiftError::CopyFailed {
                    src: src.to_path_buf(),
                    dest: dest.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })
    }

    /// 파일 이동
    ///
    /// 먼저 rename을 시도하고, 다른 파일시스템으로 옮길 때만 복사 후 삭제합니다.
    /// 원본 삭제에 실패하면 만든 복사본을 지워 한쪽에만 남긴다.
    pub fn move_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        if src == dest || dest.exists() {
            return Err(FileSiftError::MoveFailed {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
                reason: "destination already exists".to_string(),
            });
        }

        if !src.exists() {
            return Err(FileSiftError::PathNotFound {
                path: src.to_path_buf(),
            });
        }

        let file_size = src.metadata().map(|m| m.len()).unwrap_or(0);

        match fs::rename(src, dest) {
            Ok(()) => return Ok(file_size),
            Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
                tracing::debug!(src = %src.display(), "rename crosses devices, copying");
            }
            Err(e) => {
                return Err(FileSiftError::MoveFailed {
                    src: src.to_path_buf(),
                    dest: dest.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }

        self.copy_file(src, dest)?;
        if let Err(e) = fs::remove_file(src) {
            if let Err(cleanup) = fs::remove_file(dest) {
                tracing::warn!(
                    path = %dest.display(),
                    error = %cleanup,
                    "failed to remove copy after aborted move"
                );
            }
            return Err(FileSiftError::MoveFailed {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
                reason: format!("Failed to remove source after copy: {}", e),
            });
        }

        Ok(file_size)
    }

    /// 파일 삭제 (설정된 삭제 방식 사용)
    pub fn delete_file(&self, path: &Path) -> Result<u64> {
        if !path.exists() {
            return Err(FileSiftError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        let size = path.metadata().map(|m| m.len()).unwrap_or(0);

        match self.delete_mode {
            DeleteMode::Permanent => fs::remove_file(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    FileSiftError::PermissionDenied {
                        path: path.to_path_buf(),
                    }
                } else {
                    FileSiftError::DeleteFailed {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    }
                }
            })?,
            DeleteMode::Trash => trash::delete(path).map_err(|e| FileSiftError::DeleteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?,
        }

        Ok(size)
    }

    /// 이름 변경
    #[allow(clippy::unused_self)]
    pub fn rename_path(&self, src: &Path, dest: &Path) -> Result<()> {
        if !src.exists() {
            return Err(FileSiftError::PathNotFound {
                path: src.to_path_buf(),
            });
        }
        if src == dest {
            return Ok(());
        }
        if dest.exists() {
            return Err(FileSiftError::RenameFailed {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
                reason: "destination already exists".to_string(),
            });
        }

        fs::rename(src, dest).map_err(|e| FileSiftError::RenameFailed {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
