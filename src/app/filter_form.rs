//! 필터 패널 폼 편집 상태

use super::text_edit::TextInput;
use crate::models::FilterForm;
use crate::utils::formatter::SIZE_UNITS;

/// 폼 입력 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Tags,
    Extensions,
    SizeMin,
    SizeMax,
}

impl FilterField {
    const ORDER: [FilterField; 4] = [
        FilterField::Tags,
        FilterField::Extensions,
        FilterField::SizeMin,
        FilterField::SizeMax,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Tags => "Tags",
            FilterField::Extensions => "Extensions",
            FilterField::SizeMin => "Min size",
            FilterField::SizeMax => "Max size",
        }
    }

    pub fn is_size(&self) -> bool {
        matches!(self, FilterField::SizeMin | FilterField::SizeMax)
    }

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(&self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// 필터 폼 상태
///
/// 필드 값은 패널을 닫아도 유지된다.
#[derive(Debug, Clone, Default)]
pub struct FilterFormState {
    pub tags: TextInput,
    pub extensions: TextInput,
    pub size_min: TextInput,
    pub size_max: TextInput,
    /// `SIZE_UNITS` 인덱스
    pub size_min_unit: usize,
    pub size_max_unit: usize,
    pub focus: FilterField,
}

impl FilterFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self, field: FilterField) -> &TextInput {
        match field {
            FilterField::Tags => &self.tags,
            FilterField::Extensions => &self.extensions,
            FilterField::SizeMin => &self.size_min,
            FilterField::SizeMax => &self.size_max,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            FilterField::Tags => &mut self.tags,
            FilterField::Extensions => &mut self.extensions,
            FilterField::SizeMin => &mut self.size_min,
            FilterField::SizeMax => &mut self.size_max,
        }
    }

    pub fn unit(&self, field: FilterField) -> Option<&'static str> {
        match field {
            FilterField::SizeMin => Some(SIZE_UNITS[self.size_min_unit]),
            FilterField::SizeMax => Some(SIZE_UNITS[self.size_max_unit]),
            _ => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 크기 필드의 단위 순환 (크기 필드가 아니면 무시)
    pub fn cycle_unit(&mut self, forward: bool) {
        let slot = match self.focus {
            FilterField::SizeMin => &mut self.size_min_unit,
            FilterField::SizeMax => &mut self.size_max_unit,
            _ => return,
        };
        let len = SIZE_UNITS.len();
        *slot = if forward {
            (*slot + 1) % len
        } else {
            (*slot + len - 1) % len
        };
    }

    /// 크기 필드에는 숫자와 소수점만 입력된다
    pub fn insert_char(&mut self, c: char) {
        if self.focus.is_size() && !(c.is_ascii_digit() || c == '.') {
            return;
        }
        self.focused_input_mut().insert_char(c);
    }

    /// 입력값을 폼 값으로 변환
    pub fn to_form(&self) -> FilterForm {
        FilterForm {
            tags: self.tags.value().to_string(),
            extensions: self.extensions.value().to_string(),
            size_min_value: self.size_min.value().to_string(),
            size_min_unit: unit_for_value(&self.size_min, self.size_min_unit),
            size_max_value: self.size_max.value().to_string(),
            size_max_unit: unit_for_value(&self.size_max, self.size_max_unit),
        }
    }

    /// 모든 입력 초기화
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 값이 비어 있으면 단위도 비운다 (빈 크기 조건)
fn unit_for_value(input: &TextInput, unit: usize) -> String {
    if input.value().is_empty() {
        String::new()
    } else {
        SIZE_UNITS[unit].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_around() {
        let mut form = FilterFormState::new();
        form.focus_prev();
        assert_eq!(form.focus, FilterField::SizeMax);
        form.focus_next();
        assert_eq!(form.focus, FilterField::Tags);
    }

    #[test]
    fn test_size_field_accepts_numbers_only() {
        let mut form = FilterFormState::new();
        form.focus = FilterField::SizeMin;
        for c in "1a.5".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.size_min.value(), "1.5");
    }

    #[test]
    fn test_to_form_joins_units_only_with_values() {
        let mut form = FilterFormState::new();
        form.focus = FilterField::SizeMax;
        form.insert_char('2');
        form.cycle_unit(true);
        form.cycle_unit(true);

        let composed = form.to_form().compose();
        assert_eq!(composed.size_min, "");
        assert_eq!(composed.size_max, "2MB");
    }

    #[test]
    fn test_cycle_unit_ignored_on_text_fields() {
        let mut form = FilterFormState::new();
        form.cycle_unit(false);
        assert_eq!(form.size_min_unit, 0);
        assert_eq!(form.size_max_unit, 0);
    }
}
