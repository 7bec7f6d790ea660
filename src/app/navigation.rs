use super::*;

impl<H: HostApi> App<H> {
    // === 커서 이동 ===

    fn max_index(&self) -> usize {
        self.browser.files().len().saturating_sub(1)
    }

    fn page_size(&self) -> usize {
        self.layout.visible_rows().max(1)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.adjust_scroll_offset();
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor < self.max_index() {
            self.cursor += 1;
            self.adjust_scroll_offset();
        }
    }

    /// 페이지 위로 이동
    pub fn move_cursor_page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page_size());
        self.adjust_scroll_offset();
    }

    /// 페이지 아래로 이동
    pub fn move_cursor_page_down(&mut self) {
        self.cursor = (self.cursor + self.page_size()).min(self.max_index());
        self.adjust_scroll_offset();
    }

    /// 맨 위로 이동 (Home / g)
    pub fn go_to_top(&mut self) {
        self.cursor = 0;
        self.adjust_scroll_offset();
    }

    /// 맨 아래로 이동 (End / G)
    pub fn go_to_bottom(&mut self) {
        self.cursor = self.max_index();
        self.adjust_scroll_offset();
    }

    /// 커서 행이 보이도록 스크롤 조정
    pub(super) fn adjust_scroll_offset(&mut self) {
        let visible = self.layout.visible_rows();
        if visible == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor + 1 - visible;
        }
    }

    /// 목록이 교체된 뒤 커서를 범위 안으로
    pub(super) fn after_list_change(&mut self) {
        self.cursor = self.cursor.min(self.max_index());
        let visible = self.layout.visible_rows();
        let max_scroll = self.browser.files().len().saturating_sub(visible.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        self.adjust_scroll_offset();
    }

    // === 선택 ===

    /// 커서 파일 선택 토글 후 다음 행으로
    pub fn toggle_selection_and_move_down(&mut self) {
        if self.browser.toggle_selection_at(self.cursor).is_some() {
            self.move_cursor_down();
        }
    }
}
