use std::ops::Range;

/// Walks `total` rows in windows of `page_size`, starting at offset 0.
#[derive(Debug, Clone)]
pub struct Pager {
    offset: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset < self.total
    }
}

impl Iterator for Pager {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.total);
        let window = self.offset..end;
        self.offset = end;
        Some(window)
    }
}
