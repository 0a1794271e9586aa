// Client-side filtering over a list view's in-memory collection.
//
// Three independent predicates, combined with AND:
// - free-text term, case-insensitive substring over the record's search fields
// - category equality, ignored when nothing is selected
// - tri-state flag
//
// Filtering is pure and keeps the collection order.

pub const DISPLAY_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagFilter {
    #[default]
    All,
    OnlyTrue,
    OnlyFalse,
}

impl FlagFilter {
    pub fn matches(self, flag: bool) -> bool {
        match self {
            FlagFilter::All => true,
            FlagFilter::OnlyTrue => flag,
            FlagFilter::OnlyFalse => !flag,
        }
    }
}

pub trait Filterable {
    fn search_fields(&self) -> Vec<&str>;
    fn category(&self) -> &str;
    fn flag(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub term: String,
    pub category: Option<String>,
    pub flag: FlagFilter,
}

impl FilterState {
    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        self.matches_term(record) && self.matches_category(record) && self.flag.matches(record.flag())
    }

    pub fn apply<'a, R: Filterable>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    fn matches_term<R: Filterable>(&self, record: &R) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let needle = self.term.to_lowercase();
        record
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_category<R: Filterable>(&self, record: &R) -> bool {
        match self.category.as_deref() {
            Some(selected) if !selected.is_empty() => record.category() == selected,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, R> {
    pub items: Vec<&'a R>,
    pub index: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Slice an already filtered view into display pages. Out of range indexes yield an empty page.
pub fn paginate<R>(items: Vec<&R>, index: usize, size: usize) -> Page<'_, R> {
    let total = items.len();
    let size = size.max(1);
    let page_count = total.div_ceil(size);
    let items = items.into_iter().skip(index.saturating_mul(size)).take(size).collect();
    Page {
        items,
        index,
        page_count,
        total,
    }
}
