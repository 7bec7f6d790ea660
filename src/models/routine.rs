use crate::models::filter::FilterCriteria;
use crate::models::operation::OperationType;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 정리 루틴의 작업 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTask {
    pub action: OperationType,
    /// 검색할 디렉토리
    pub dir: PathBuf,
    #[serde(default)]
    pub filters: FilterCriteria,
    /// 이동/복사 목적지
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    /// 이름 변경 시 새 stem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
}

/// 이름 붙은 정리 루틴 (TOML 파일 하나)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    /// 마지막 실행 시각
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<DateTime<Local>>,
    #[serde(default)]
    pub tasks: Vec<RoutineTask>,
}

impl Routine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_run: None,
            tasks: Vec::new(),
        }
    }

    pub fn push_task(&mut self, task: RoutineTask) {
        self.tasks.push(task);
    }

    pub fn mark_run(&mut self, at: DateTime<Local>) {
        self.last_run = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routine_toml_roundtrip_keeps_optional_fields_out() {
        let mut routine = Routine::new("cleanup");
        routine.push_task(RoutineTask {
            action: OperationType::Delete,
            dir: PathBuf::from("/tmp/downloads"),
            filters: FilterCriteria {
                extensions: vec!["tmp".to_string()],
                ..Default::default()
            },
            destination: None,
            stem: None,
        });

        let text = toml::to_string_pretty(&routine).unwrap();
        assert!(text.contains("action = \"delete\""));
        assert!(!text.contains("destination"));
        assert!(!text.contains("last_run"));

        let parsed: Routine = toml::from_str(&text).unwrap();
        assert_eq!(parsed, routine);
    }

    #[test]
    fn test_mark_run_is_persisted() {
        let mut routine = Routine::new("nightly");
        let at = Local::now();
        routine.mark_run(at);

        let text = toml::to_string_pretty(&routine).unwrap();
        assert!(text.contains("last_run"));
        let parsed: Routine = toml::from_str(&text).unwrap();
        assert_eq!(parsed.last_run.map(|t| t.timestamp()), Some(at.timestamp()));
    }
}
