//! Client-side page routing table
//!
//! Four static paths resolved synchronously, no guards and no
//! parameters. Unknown paths resolve to `None`; whether the app wants
//! a catch-all page on top of that is a product decision left to the
//! caller.

/// Dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Orders,
    Employees,
    Planning,
}

/// Path-to-page mapping, in navigation order.
pub const ROUTES: [(&str, Page); 4] = [
    ("/", Page::Dashboard),
    ("/orders", Page::Orders),
    ("/employees", Page::Employees),
    ("/planning", Page::Planning),
];

impl Page {
    /// Resolve a path against the routing table
    pub fn resolve(path: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| *page)
    }

    /// Canonical path for this page
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Orders => "/orders",
            Self::Employees => "/employees",
            Self::Planning => "/planning",
        }
    }

    /// Route name used in navigation
    pub fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Orders => "orders",
            Self::Employees => "employees",
            Self::Planning => "planning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(Page::resolve("/"), Some(Page::Dashboard));
        assert_eq!(Page::resolve("/orders"), Some(Page::Orders));
        assert_eq!(Page::resolve("/employees"), Some(Page::Employees));
        assert_eq!(Page::resolve("/planning"), Some(Page::Planning));
    }

    #[test]
    fn test_unknown_path_resolves_to_none() {
        assert_eq!(Page::resolve("/settings"), None);
        assert_eq!(Page::resolve("/orders/"), None);
        assert_eq!(Page::resolve(""), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for (path, page) in ROUTES {
            assert_eq!(Page::resolve(path), Some(page));
            assert_eq!(page.path(), path);
        }
    }
}
