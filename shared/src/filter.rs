//! Free-text search and paging over in-memory record lists.

/// A record that can be matched by the search box.
pub trait Searchable {
    /// Fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, needle_lowercase: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lowercase))
    }
}

/// Case-insensitive substring match; an empty query keeps every record.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    records.iter().filter(|record| record.matches(&needle)).collect()
}

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of an already filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Zero-based, clamped into range.
    pub index: usize,
    pub count: usize,
    pub total: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn of(items: &'a [T], index: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = items.len();
        let count = total.div_ceil(page_size).max(1);
        let index = index.min(count - 1);
        let start = (index * page_size).min(total);
        let end = (start + page_size).min(total);

        Self {
            items: &items[start..end],
            index,
            count,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let rows = [Row("Anita", "Logistics"), Row("Ravi", "Production")];
        let hits = filter_records(&rows, "PROD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Ravi");
    }

    #[test]
    fn empty_query_keeps_order() {
        let rows = [Row("b", "x"), Row("a", "y")];
        let names: Vec<_> = filter_records(&rows, "").iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn pages_are_clamped() {
        let items: Vec<u32> = (0..45).collect();
        let last = Page::of(&items, 7, DEFAULT_PAGE_SIZE);
        assert_eq!(last.index, 2);
        assert_eq!(last.count, 3);
        assert_eq!(last.items, &items[40..45]);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = Page::of(&items, 0, DEFAULT_PAGE_SIZE);
        assert_eq!(page.count, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }
}
