//! Query translation: raw request parameters → a deterministic
//! {filters, sort, skip, limit} contract executed by the store.

/// Pagination with the documented fallback: anything missing, non-numeric
/// or below 1 becomes page=1, per_page=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub page: usize,
    pub per_page: usize,
}

impl PageDescriptor {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_PER_PAGE: usize = 10;

    pub fn from_raw(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: parse_positive(page, Self::DEFAULT_PAGE),
            per_page: parse_positive(per_page, Self::DEFAULT_PER_PAGE),
        }
    }

    /// Always >= 0 since page >= 1.
    pub fn skip(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(|v| v.trim().parse::<usize>().ok()) {
        Some(n) if n >= 1 => n,
        _ => default,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// Newest first, by the record's creation timestamp.
    CreatedDesc,
}

/// The normalized selection the store executes. Built only through
/// [`Selection::paged`] / [`Selection::unpaged`] and `filter` so the
/// empty-value elision rule cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub filters: Vec<(String, String)>,
    pub sort: Option<Sort>,
    pub skip: usize,
    pub limit: Option<usize>,
}

impl Selection {
    pub fn paged(page: PageDescriptor) -> Self {
        Self {
            filters: Vec::new(),
            sort: None,
            skip: page.skip(),
            limit: Some(page.per_page),
        }
    }

    /// Count queries reuse the filter rule but skip pagination entirely.
    pub fn unpaged() -> Self {
        Self {
            filters: Vec::new(),
            sort: None,
            skip: 0,
            limit: None,
        }
    }

    /// Add an equality filter. An empty value means "no constraint" and is
    /// dropped, never treated as "match empty string".
    pub fn filter(mut self, field: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.filters.push((field.to_string(), value.to_string()));
        }
        self
    }

    /// Event severities are stored title-cased ("Warning", "Normal"), so the
    /// filter value is normalized the same way before matching.
    pub fn filter_title_cased(self, field: &str, value: &str) -> Self {
        let normalized = title_case(value);
        self.filter(field, &normalized)
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn matches(&self, get: impl Fn(&str) -> Option<String>) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| get(field).as_deref() == Some(value.as_str()))
    }
}

/// Uppercase the first letter of every whitespace-separated word, leaving
/// the rest of each word untouched.
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
