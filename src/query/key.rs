//! Cache keys for remote queries.

use std::collections::BTreeMap;
use std::fmt;

/// Identity of one remote query.
///
/// Two keys are equal iff every component is equal; equality drives cache
/// hits. Filters live in a `BTreeMap` so their ordering is canonical and
/// key equality never depends on insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: String,
    id: Option<String>,
    filters: BTreeMap<String, String>,
    page: Option<u64>,
    take: Option<u64>,
}

impl QueryKey {
    /// Key for one page of a collection.
    pub fn list(resource: &str, page: u64, take: u64) -> Self {
        Self {
            resource: resource.to_string(),
            id: None,
            filters: BTreeMap::new(),
            page: Some(page),
            take: Some(take),
        }
    }

    /// Key for a single-item detail query.
    pub fn detail(resource: &str, id: &str) -> Self {
        Self {
            resource: resource.to_string(),
            id: Some(id.to_string()),
            filters: BTreeMap::new(),
            page: None,
            take: None,
        }
    }

    /// Key for a singleton query with no id or pager (e.g. the current user).
    pub fn singleton(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            id: None,
            filters: BTreeMap::new(),
            page: None,
            take: None,
        }
    }

    pub fn with_filter(mut self, name: &str, value: impl Into<String>) -> Self {
        self.filters.insert(name.to_string(), value.into());
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn page(&self) -> Option<u64> {
        self.page
    }

    pub fn take(&self) -> Option<u64> {
        self.take
    }

    /// Whether this key belongs to the given resource namespace.
    /// Invalidation after a mutation matches on this.
    pub fn is_resource(&self, resource: &str) -> bool {
        self.resource == resource
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource)?;
        if let Some(id) = &self.id {
            write!(f, "/{}", id)?;
        }
        for (name, value) in &self.filters {
            write!(f, "?{}={}", name, value)?;
        }
        if let (Some(page), Some(take)) = (self.page, self.take) {
            write!(f, "#page={},take={}", page, take)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_component_wise() {
        let a = QueryKey::list("problems", 1, 5);
        let b = QueryKey::list("problems", 1, 5);
        let c = QueryKey::list("problems", 2, 5);
        let d = QueryKey::list("problems", 1, 10);
        let e = QueryKey::list("pages", 1, 5);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(a, e);
    }

    #[test]
    fn test_filter_order_does_not_matter() {
        let a = QueryKey::list("page-users", 1, 5)
            .with_filter("pageId", "pg-1")
            .with_filter("role", "OPERATOR");
        let b = QueryKey::list("page-users", 1, 5)
            .with_filter("role", "OPERATOR")
            .with_filter("pageId", "pg-1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_detail_and_list_keys_are_distinct() {
        let list = QueryKey::list("pages", 1, 5);
        let detail = QueryKey::detail("page", "pg-1");
        assert_ne!(list, detail);
        assert!(list.is_resource("pages"));
        assert!(detail.is_resource("page"));
        assert!(!detail.is_resource("pages"));
    }

    #[test]
    fn test_display_is_stable() {
        let key = QueryKey::list("page-users", 2, 10).with_filter("pageId", "pg-1");
        assert_eq!(key.to_string(), "page-users?pageId=pg-1#page=2,take=10");
        assert_eq!(QueryKey::detail("page", "pg-1").to_string(), "page/pg-1");
    }
}
