//! Search and filter predicates shared by every console list page.
//!
//! All list pages filter the same way: a free-text query matched as a
//! case-insensitive substring against a fixed set of fields, combined with an
//! optional status filter where the sentinel `"all"` (or no value) disables it.

/// Status filter value that matches every record.
pub const STATUS_ALL: &str = "all";

/// Return `true` when `query` is blank or is a case-insensitive substring of
/// at least one of `fields`.
///
/// # Examples
///
/// ```
/// use turfdesk_core::search::matches_query;
/// assert!(matches_query("", &["anything"]));
/// assert!(matches_query("ELITE", &["Elite Sports Arena", "Mumbai"]));
/// assert!(!matches_query("pune", &["Elite Sports Arena", "Mumbai"]));
/// ```
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Return `true` when the status filter is absent, `"all"`, or equals
/// `status` ignoring ASCII case.
pub fn matches_status(filter: Option<&str>, status: &str) -> bool {
    match filter.map(str::trim) {
        None | Some("") => true,
        Some(f) if f.eq_ignore_ascii_case(STATUS_ALL) => true,
        Some(f) => f.eq_ignore_ascii_case(status),
    }
}

/// Records that can be searched from a console list page.
pub trait Searchable {
    /// The fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// The status label used by the status filter, if the record has one.
    fn status_label(&self) -> Option<&str> {
        None
    }
}

/// Apply a free-text query and a status filter to a slice of records,
/// cloning the matches in their original order.
pub fn filter_records<T>(records: &[T], query: Option<&str>, status: Option<&str>) -> Vec<T>
where
    T: Searchable + Clone,
{
    let query = query.unwrap_or("");
    records
        .iter()
        .filter(|r| matches_query(query, &r.search_fields()))
        .filter(|r| match r.status_label() {
            Some(label) => matches_status(status, label),
            None => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        email: &'static str,
        status: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.email]
        }

        fn status_label(&self) -> Option<&str> {
            Some(self.status)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Vikram Singh", email: "vikram@example.com", status: "active" },
            Row { name: "Sneha Reddy", email: "sneha@example.com", status: "blocked" },
        ]
    }

    #[test]
    fn empty_query_returns_full_list() {
        assert_eq!(filter_records(&rows(), Some(""), None), rows());
        assert_eq!(filter_records(&rows(), None, None), rows());
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        assert_eq!(filter_records(&rows(), Some("   "), None).len(), 2);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let found = filter_records(&rows(), Some("SNEHA@"), None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Sneha Reddy");
    }

    #[test]
    fn query_matches_any_field() {
        assert_eq!(filter_records(&rows(), Some("singh"), None).len(), 1);
        assert_eq!(filter_records(&rows(), Some("example.com"), None).len(), 2);
    }

    #[test]
    fn status_all_disables_filter() {
        assert_eq!(filter_records(&rows(), None, Some("all")).len(), 2);
        assert_eq!(filter_records(&rows(), None, Some("ALL")).len(), 2);
    }

    #[test]
    fn status_filter_is_case_insensitive() {
        let found = filter_records(&rows(), None, Some("Blocked"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, "blocked");
    }

    #[test]
    fn query_and_status_combine() {
        assert!(filter_records(&rows(), Some("vikram"), Some("blocked")).is_empty());
    }
}
