//! Core domain types: pages, routes and navigation items

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the running application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// One of the four top-level pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Portfolio,
    Contact,
    About,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 4] = [Page::Home, Page::Portfolio, Page::Contact, Page::About];

    /// Stable identifier used by the router (`"home"`, `"portfolio"`, ...)
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Portfolio => "portfolio",
            Page::Contact => "contact",
            Page::About => "about",
        }
    }

    /// Parse a page identifier. Matching is exact, like the router's switch.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.id() == id)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// The router's current destination.
///
/// Navigation accepts arbitrary identifiers; anything that is not a known
/// page lands on [`Route::NotFound`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Page(Page),
    NotFound(String),
}

impl Route {
    pub fn from_id(id: &str) -> Self {
        match Page::from_id(id) {
            Some(page) => Route::Page(page),
            None => Route::NotFound(id.to_string()),
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Page(page) => Some(*page),
            Route::NotFound(_) => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Route::Page(page) => page.id(),
            Route::NotFound(id) => id,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Page(Page::Home)
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        Route::Page(page)
    }
}

/// Icon slot for a navigation item; resolved to a glyph by the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Code,
    Phone,
    Briefcase,
}

/// Accent token used only for active-state highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Orange,
    Green,
    Indigo,
}

/// A fixed navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub page: Page,
    pub icon: NavIcon,
    /// Foreground accent when active
    pub color: Accent,
    /// Background accent when active
    pub active_bg: Accent,
}

/// The navigation bar's destinations, in display order
pub const NAV_ITEMS: [NavigationItem; 4] = [
    NavigationItem {
        name: "Home",
        page: Page::Home,
        icon: NavIcon::Home,
        color: Accent::Blue,
        active_bg: Accent::Blue,
    },
    NavigationItem {
        name: "Portfolio",
        page: Page::Portfolio,
        icon: NavIcon::Code,
        color: Accent::Orange,
        active_bg: Accent::Orange,
    },
    NavigationItem {
        name: "Contact Us",
        page: Page::Contact,
        icon: NavIcon::Phone,
        color: Accent::Green,
        active_bg: Accent::Green,
    },
    NavigationItem {
        name: "About",
        page: Page::About,
        icon: NavIcon::Briefcase,
        color: Accent::Indigo,
        active_bg: Accent::Indigo,
    },
];

/// Position of a page's item in [`NAV_ITEMS`]
pub fn nav_index(page: Page) -> usize {
    NAV_ITEMS
        .iter()
        .position(|item| item.page == page)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn test_page_from_id_is_exact() {
        assert_eq!(Page::from_id("Home"), None);
        assert_eq!(Page::from_id(" home"), None);
        assert_eq!(Page::from_id(""), None);
    }

    #[test]
    fn test_route_from_unknown_id_is_not_found() {
        assert_eq!(
            Route::from_id("pricing"),
            Route::NotFound("pricing".to_string())
        );
        assert_eq!(Route::from_id("pricing").page(), None);
        assert_eq!(Route::from_id("pricing").id(), "pricing");
    }

    #[test]
    fn test_route_defaults_to_home() {
        assert_eq!(Route::default(), Route::Page(Page::Home));
    }

    #[test]
    fn test_nav_items_cover_every_page_once() {
        assert_eq!(NAV_ITEMS.len(), Page::ALL.len());
        for (index, page) in Page::ALL.into_iter().enumerate() {
            assert_eq!(NAV_ITEMS[index].page, page);
            assert_eq!(nav_index(page), index);
        }
    }

    #[test]
    fn test_nav_item_names() {
        let names: Vec<_> = NAV_ITEMS.iter().map(|item| item.name).collect();
        assert_eq!(names, ["Home", "Portfolio", "Contact Us", "About"]);
    }

    #[test]
    fn test_page_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            page: Page,
        }
        let parsed: Wrapper = toml::from_str("page = \"contact\"").unwrap();
        assert_eq!(parsed.page, Page::Contact);
    }
}
