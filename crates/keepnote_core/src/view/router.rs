//! Path routing and navigation drawer state.
//!
//! # Invariants
//! - Exactly three paths are recognized; anything else resolves to `/`.
//! - Navigation holds no note state, only the current route.

use crate::model::category::Category;
use log::debug;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One of the three collection screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Notes,
    Archive,
    Trash,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Notes, Route::Archive, Route::Trash];

    /// Canonical path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Notes => "/",
            Self::Archive => "/archive",
            Self::Trash => "/delete",
        }
    }

    /// Screen title shown above the cards.
    pub fn title(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Archive => "Archive",
            Self::Trash => "Trash",
        }
    }

    /// Category rendered by this route.
    pub fn category(self) -> Category {
        match self {
            Self::Notes => Category::Active,
            Self::Archive => Category::Archived,
            Self::Trash => Category::Trashed,
        }
    }

    /// Maps an exact path to its route.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Resolves `path`, redirecting unknown paths to `/`.
    pub fn resolve(path: &str) -> Resolution {
        match Self::from_path(path) {
            Some(route) => Resolution {
                route,
                redirected: false,
            },
            None => Resolution {
                route: Self::Notes,
                redirected: true,
            },
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    /// `true` when the requested path was unknown.
    pub redirected: bool,
}

/// Drawer entry linking to one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: u8,
    pub name: &'static str,
    pub route: Route,
}

/// Drawer entries in display order.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        id: 1,
        name: "Notes",
        route: Route::Notes,
    },
    NavItem {
        id: 2,
        name: "Archives",
        route: Route::Archive,
    },
    NavItem {
        id: 3,
        name: "Trash",
        route: Route::Trash,
    },
];

/// Current route plus drawer chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
    highlighted: Option<usize>,
    drawer_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Route::Notes,
            highlighted: None,
            drawer_open: true,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Index into `NAV_ITEMS` of the last clicked entry.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Navigates to `path`, following the unknown-path redirect.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = Route::resolve(path);
        if resolution.redirected {
            debug!("event=route_redirect module=router status=ok to=/");
        }
        self.current = resolution.route;
        resolution
    }

    /// Clicks a drawer entry: highlights it and navigates to its route.
    ///
    /// Returns `None` for an index outside `NAV_ITEMS`.
    pub fn click_nav(&mut self, index: usize) -> Option<Route> {
        let item = NAV_ITEMS.get(index)?;
        self.highlighted = Some(index);
        self.current = item.route;
        Some(item.route)
    }

    /// Header menu button.
    pub fn toggle_drawer(&mut self) -> bool {
        self.drawer_open = !self.drawer_open;
        self.drawer_open
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigator, Route, NAV_ITEMS};
    use crate::model::category::Category;

    #[test]
    fn known_paths_map_to_categories() {
        assert_eq!(Route::resolve("/").route.category(), Category::Active);
        assert_eq!(
            Route::resolve("/archive").route.category(),
            Category::Archived
        );
        assert_eq!(Route::resolve("/delete").route.category(), Category::Trashed);
    }

    #[test]
    fn unknown_paths_redirect_home() {
        for path in ["/trash", "", "/archive/", "/ARCHIVE", "/notes/1"] {
            let resolution = Route::resolve(path);
            assert_eq!(resolution.route, Route::Notes, "path {path:?}");
            assert!(resolution.redirected, "path {path:?}");
        }
    }

    #[test]
    fn nav_click_highlights_and_navigates() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.highlighted(), None);

        assert_eq!(navigator.click_nav(2), Some(Route::Trash));
        assert_eq!(navigator.current(), Route::Trash);
        assert_eq!(navigator.highlighted(), Some(2));
        assert_eq!(navigator.click_nav(NAV_ITEMS.len()), None);
        assert_eq!(navigator.highlighted(), Some(2));
    }

    #[test]
    fn navigate_keeps_highlight_untouched() {
        let mut navigator = Navigator::new();
        navigator.click_nav(1);
        navigator.navigate("/nowhere");
        assert_eq!(navigator.current(), Route::Notes);
        assert_eq!(navigator.highlighted(), Some(1));
    }

    #[test]
    fn drawer_starts_open_and_toggles() {
        let mut navigator = Navigator::new();
        assert!(navigator.is_drawer_open());
        assert!(!navigator.toggle_drawer());
        assert!(navigator.toggle_drawer());
    }
}
