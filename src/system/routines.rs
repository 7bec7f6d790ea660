//! 정리 루틴 저장소
//!
//! 루틴 하나당 `<name>.toml` 파일 하나. 실행 시 작업마다 필터 검색 후 해당 작업을 적용한다.

use crate::models::operation::{OperationReport, OperationType};
use crate::models::{Routine, RoutineTask};
use crate::system::service::{validate_stem, LocalFileService};
use crate::utils::error::{FileSiftError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RoutineStore {
    dir: PathBuf,
}

impl RoutineStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.toml", name))
    }

    pub fn save(&self, routine: &Routine) -> Result<PathBuf> {
        validate_name(&routine.name)?;
        fs::create_dir_all(&self.dir).map_err(|e| FileSiftError::from_io(e, &self.dir))?;
        let data = toml::to_string_pretty(routine)
            .map_err(|e| FileSiftError::Config(format!("cannot encode routine: {e}")))?;
        let path = self.path_for(&routine.name);
        fs::write(&path, data).map_err(|e| FileSiftError::from_io(e, &path))?;
        tracing::info!(routine = %routine.name, path = %path.display(), "routine saved");
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<Routine> {
        validate_name(name)?;
        let path = self.path_for(name);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FileSiftError::RoutineNotFound(name.to_string()))
            }
            Err(e) => return Err(FileSiftError::from_io(e, &path)),
        };
        toml::from_str(&data)
            .map_err(|e| FileSiftError::Config(format!("{}: {e}", path.display())))
    }

    /// 저장된 루틴 이름 (정렬)
    pub fn list(&self) -> Result<Vec<String>> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FileSiftError::from_io(e, &self.dir)),
        };
        let mut names: Vec<String> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("toml"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        names.sort();
        Ok(names)
    }

    /// 이름으로 불러와 작업을 추가하고 저장 (없으면 새로 만듦)
    pub fn add_task(&self, name: &str, task: RoutineTask) -> Result<Routine> {
        let mut routine = match self.load(name) {
            Ok(routine) => routine,
            Err(FileSiftError::RoutineNotFound(_)) => Routine::new(name),
            Err(e) => return Err(e),
        };
        validate_task(&task)?;
        routine.push_task(task);
        self.save(&routine)?;
        Ok(routine)
    }
}

/// 루틴 실행
///
/// 모든 작업의 설정을 먼저 검사한 뒤 순서대로 실행한다.
/// 설정 오류가 있으면 아무 작업도 실행하지 않는다. 검색 실패는 즉시 중단한다.
pub fn run_routine(routine: &Routine, service: &LocalFileService) -> Result<Vec<OperationReport>> {
    for task in &routine.tasks {
        validate_task(task)?;
    }
    let mut reports = Vec::with_capacity(routine.tasks.len());
    for (i, task) in routine.tasks.iter().enumerate() {
        let files = service.apply_filter(&task.dir, &task.filters)?;
        tracing::info!(
            routine = %routine.name,
            task = i,
            action = task.action.name(),
            files = files.len(),
            "running routine task"
        );
        let report = match task.action {
            OperationType::Move => service.move_all(&files, required(&task.destination)?),
            OperationType::Copy => service.copy_all(&files, required(&task.destination)?),
            OperationType::Delete => service.delete_all(&files),
            OperationType::Rename => {
                let stem = task.stem.as_deref().unwrap_or_default();
                service.rename_all(&files, stem)
            }
        };
        reports.push(report);
    }
    Ok(reports)
}

fn required(destination: &Option<PathBuf>) -> Result<&Path> {
    destination
        .as_deref()
        .ok_or_else(|| FileSiftError::Config("task needs a destination".to_string()))
}

fn validate_task(task: &RoutineTask) -> Result<()> {
    if task.action.needs_destination() && task.destination.is_none() {
        return Err(FileSiftError::Config(format!(
            "{} task needs a destination",
            task.action.name().to_lowercase()
        )));
    }
    if task.action == OperationType::Rename
        && task.stem.as_deref().map(str::is_empty).unwrap_or(true)
    {
        return Err(FileSiftError::Config(
            "rename task needs a stem".to_string(),
        ));
    }
    if let Some(stem) = task.stem.as_deref().filter(|s| !s.is_empty()) {
        validate_stem(stem)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ' '));
    if valid {
        Ok(())
    } else {
        Err(FileSiftError::Config(format!("invalid routine name: {name:?}")))
    }
}
