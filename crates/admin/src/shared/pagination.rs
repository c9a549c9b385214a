/// Состояние пагинации списка
///
/// Размер страницы определяет сервер; он запоминается как наибольшее число
/// записей среди полученных непустых страниц, и из него выводится `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: usize,
    /// 0, пока не получено ни одной непустой страницы
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            page_size: 0,
        }
    }
}

impl Pagination {
    /// Учесть ответ сервера: `total_count` записей всего, `page_len` на странице
    ///
    /// Короткая последняя страница не уменьшает запомненный размер страницы.
    pub fn observe(&mut self, total_count: usize, page_len: usize) {
        self.page_size = self.page_size.max(page_len);
        self.total_count = total_count;
        self.total_pages = total_pages(total_count, self.page_size);
        self.current_page = self.clamp(self.current_page);
    }

    fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }

    /// Следующая страница; `false` на последней странице
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Предыдущая страница; `false` на первой странице
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Перейти на страницу (с ограничением диапазоном); `true` если страница изменилась
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = self.clamp(page);
        let moved = target != self.current_page;
        self.current_page = target;
        moved
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// `ceil(total / page_len)`, не меньше 1; пустая страница считается размером 1
pub fn total_pages(total_count: usize, page_len: usize) -> u32 {
    let page_len = page_len.max(1);
    let pages = total_count.div_ceil(page_len).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
