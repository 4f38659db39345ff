/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: i32 = 10;

/// Parameters for a bounded scan over all users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of records to return. Always positive.
    pub limit: i32,
    /// Opaque continuation token from a previous page.
    pub cursor: Option<String>,
}

impl PageRequest {
    /// Creates a page request, falling back to [`DEFAULT_PAGE_LIMIT`] for a
    /// non-positive limit and dropping an empty cursor.
    pub fn new(limit: i32, cursor: Option<String>) -> Self {
        Self {
            limit: if limit > 0 { limit } else { DEFAULT_PAGE_LIMIT },
            cursor: cursor.filter(|c| !c.is_empty()),
        }
    }

    /// Builds a page request from raw query-string values.
    pub fn from_query(limit: Option<&str>, cursor: Option<&str>) -> Self {
        Self::new(parse_limit(limit), cursor.map(str::to_string))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, None)
    }
}

/// Parses a page size, falling back to [`DEFAULT_PAGE_LIMIT`] when the value
/// is missing, unparsable (surrounding whitespace included) or not positive.
///
/// # Examples
///
/// ```
/// use userbase_core::storage::{parse_limit, DEFAULT_PAGE_LIMIT};
///
/// assert_eq!(parse_limit(Some("25")), 25);
/// assert_eq!(parse_limit(Some("0")), DEFAULT_PAGE_LIMIT);
/// assert_eq!(parse_limit(Some("ten")), DEFAULT_PAGE_LIMIT);
/// assert_eq!(parse_limit(None), DEFAULT_PAGE_LIMIT);
/// ```
pub fn parse_limit(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.parse::<i32>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_PAGE_LIMIT)
}

/// One page of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Present only when more data may remain.
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// An exhausted page: no items and no cursor.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_accepts_positive() {
        assert_eq!(parse_limit(Some("1")), 1);
    }

    #[test]
    fn test_parse_limit_falls_back() {
        assert_eq!(parse_limit(Some("-3")), DEFAULT_PAGE_LIMIT);
        assert_eq!(parse_limit(Some(" 50 ")), DEFAULT_PAGE_LIMIT);
        assert_eq!(parse_limit(Some("")), DEFAULT_PAGE_LIMIT);
        assert_eq!(parse_limit(Some("1.5")), DEFAULT_PAGE_LIMIT);
        assert_eq!(parse_limit(Some("99999999999")), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_page_request_drops_empty_cursor() {
        let request = PageRequest::from_query(None, Some(""));
        assert_eq!(request.cursor, None);
        assert_eq!(request.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_page_request_keeps_cursor() {
        let request = PageRequest::from_query(Some("2"), Some(r#"{"email":{"S":"a@b.com"}}"#));
        assert_eq!(request.limit, 2);
        assert_eq!(
            request.cursor.as_deref(),
            Some(r#"{"email":{"S":"a@b.com"}}"#)
        );
    }

    #[test]
    fn test_page_request_new_clamps_limit() {
        assert_eq!(PageRequest::new(0, None).limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(PageRequest::default().limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<u8> = Page::empty();
        assert!(page.items.is_empty());
        assert!(page.next_cursor.is_none());
    }
}
