use serde::{Deserialize, Serialize};

/// 필터 조건
///
/// 폼 입력을 가공 없이 담는다. 빈 입력은 빈 문자열 한 개(`[""]`)로 남고,
/// 유효성 판단은 파일 서비스 쪽 몫이다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
    /// 최소 크기 (예: "10MB")
    #[serde(default)]
    pub size_min: String,
    /// 최대 크기
    #[serde(default)]
    pub size_max: String,
}

impl FilterCriteria {
    /// 적용할 조건이 하나도 없는지
    pub fn is_blank(&self) -> bool {
        is_blank_list(&self.tags)
            && is_blank_list(&self.extensions)
            && self.size_min.is_empty()
            && self.size_max.is_empty()
    }
}

/// `[]` 또는 `[""]`
pub fn is_blank_list(values: &[String]) -> bool {
    values.is_empty() || (values.len() == 1 && values[0].is_empty())
}

/// 필터 폼의 원본 입력값
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    /// 쉼표 구분 태그
    pub tags: String,
    /// 쉼표 구분 확장자
    pub extensions: String,
    pub size_min_value: String,
    pub size_min_unit: String,
    pub size_max_value: String,
    pub size_max_unit: String,
}

impl FilterForm {
    /// 폼 입력을 조건으로 조립
    ///
    /// 쉼표 분리는 trim/중복 제거 없이 그대로 한다. 크기는 값과 단위를 이어 붙인다.
    pub fn compose(&self) -> FilterCriteria {
        FilterCriteria {
            tags: split_list(&self.tags),
            extensions: split_list(&self.extensions),
            size_min: format!("{}{}", self.size_min_value, self.size_min_unit),
            size_max: format!("{}{}", self.size_max_value, self.size_max_unit),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_raw_items() {
        let form = FilterForm {
            tags: "a,b".to_string(),
            extensions: " pdf, txt".to_string(),
            ..Default::default()
        };
        let criteria = form.compose();

        assert_eq!(criteria.tags, vec!["a", "b"]);
        assert_eq!(criteria.extensions, vec![" pdf", " txt"]);
    }

    #[test]
    fn test_empty_input_yields_single_empty_item() {
        let criteria = FilterForm::default().compose();

        assert_eq!(criteria.tags, vec![String::new()]);
        assert_eq!(criteria.extensions, vec![String::new()]);
        assert_eq!(criteria.size_min, "");
        assert_eq!(criteria.size_max, "");
        assert!(criteria.is_blank());
    }

    #[test]
    fn test_size_value_and_unit_are_concatenated() {
        let form = FilterForm {
            size_min_value: "10".to_string(),
            size_min_unit: "KB".to_string(),
            size_max_value: "2".to_string(),
            size_max_unit: "MB".to_string(),
            ..Default::default()
        };
        let criteria = form.compose();

        assert_eq!(criteria.size_min, "10KB");
        assert_eq!(criteria.size_max, "2MB");
        assert!(!criteria.is_blank());
    }

    #[test]
    fn test_criteria_toml_missing_keys_default() {
        let criteria: FilterCriteria =
            toml::from_str("tags = [\"x\"]\nsize_min = \"1KB\"").unwrap();
        assert_eq!(criteria.tags, vec!["x"]);
        assert_eq!(criteria.size_min, "1KB");
        assert!(criteria.extensions.is_empty());
    }
}
