/// A single link in the site navigation.
///
/// `path` doubles as the render key and as the value compared against the
/// router's current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub display_name: &'static str,
    pub path: &'static str,
}

impl NavigationEntry {
    pub const fn new(display_name: &'static str, path: &'static str) -> Self {
        Self { display_name, path }
    }

    /// Exact match only. `/about/team` does not activate `/about`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Navigation table shown in both the desktop bar and the mobile overlay, in display order.
pub const NAV_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry::new("Home", "/"),
    NavigationEntry::new("About us", "/about"),
    NavigationEntry::new("How it works", "/services"),
    NavigationEntry::new("Contact us", "/blog"),
    NavigationEntry::new("FAQ's", "/contact"),
];

/// The entry highlighted for `current_path`, if any.
///
/// Paths in the table are unique, so at most one entry can match. Pages
/// outside the table (e.g. a 404) highlight nothing.
pub fn active_entry<'a>(
    entries: &'a [NavigationEntry],
    current_path: &str,
) -> Option<&'a NavigationEntry> {
    entries.iter().find(|entry| entry.is_active(current_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_five_unique_paths() {
        assert_eq!(NAV_ENTRIES.len(), 5);
        let paths: HashSet<_> = NAV_ENTRIES.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), NAV_ENTRIES.len());
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = NAV_ENTRIES.iter().map(|e| e.display_name).collect();
        assert_eq!(
            names,
            vec!["Home", "About us", "How it works", "Contact us", "FAQ's"]
        );
    }

    #[test]
    fn test_exact_match_only() {
        let about = NavigationEntry::new("About us", "/about");
        assert!(about.is_active("/about"));
        assert!(!about.is_active("/about/"));
        assert!(!about.is_active("/about/team"));
        assert!(!about.is_active("/About"));

        // Root must not match everything that starts with a slash
        let home = NAV_ENTRIES[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
    }

    #[test]
    fn test_at_most_one_active() {
        for path in ["/", "/about", "/services", "/blog", "/contact", "/pricing", ""] {
            let count = NAV_ENTRIES.iter().filter(|e| e.is_active(path)).count();
            assert!(count <= 1, "{} entries active for {:?}", count, path);
        }
    }

    #[test]
    fn test_active_entry() {
        let entry = active_entry(NAV_ENTRIES, "/about").unwrap();
        assert_eq!(entry.display_name, "About us");

        assert_eq!(
            active_entry(NAV_ENTRIES, "/contact").map(|e| e.display_name),
            Some("FAQ's")
        );
        assert!(active_entry(NAV_ENTRIES, "/pricing").is_none());
    }
}
