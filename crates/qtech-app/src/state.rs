//! Application state (Model in TEA pattern)

use qtech_core::{nav_index, AppPhase, Page, Route, NAV_ITEMS};

use crate::config::Settings;
use crate::contact::ContactState;
use crate::portfolio::PortfolioState;

/// How long a footer notice stays visible, in ticks (50ms each)
pub const NOTICE_TICKS: u64 = 100;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Navigation bar
    #[default]
    Nav,
    /// The mounted view's body
    Body,
}

/// Identifies one mount of a view.
///
/// Every navigation mounts a view under a fresh id; async completions carry
/// the id they were issued for and are dropped when it no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u64);

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// The body currently mounted under the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Home,
    Portfolio(PortfolioState),
    Contact(ContactState),
    About,
    /// Fallback body for an unknown page id
    NotFound(String),
}

impl ActiveView {
    /// Fresh view state for a route
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Page(Page::Home) => ActiveView::Home,
            Route::Page(Page::Portfolio) => ActiveView::Portfolio(PortfolioState::new()),
            Route::Page(Page::Contact) => ActiveView::Contact(ContactState::new()),
            Route::Page(Page::About) => ActiveView::About,
            Route::NotFound(id) => ActiveView::NotFound(id.clone()),
        }
    }

    /// Whether the body has anything to focus
    pub fn is_interactive(&self) -> bool {
        matches!(self, ActiveView::Portfolio(_) | ActiveView::Contact(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedView {
    pub id: ViewId,
    pub view: ActiveView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient status line shown in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    expires_at: u64,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current router destination
    pub route: Route,

    /// The single mounted body
    pub mounted: MountedView,

    next_view_id: u64,

    pub focus: Focus,

    /// Highlighted navigation item
    pub nav_cursor: usize,

    pub settings: Settings,

    pub phase: AppPhase,

    pub notice: Option<Notice>,

    /// Animation frame counter, advanced on every tick
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State at the home page with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Route::default())
    }

    pub fn with_settings(settings: Settings, route: Route) -> Self {
        let nav_cursor = route.page().map(nav_index).unwrap_or(0);
        Self {
            mounted: MountedView {
                id: ViewId(0),
                view: ActiveView::for_route(&route),
            },
            route,
            next_view_id: 1,
            focus: Focus::Nav,
            nav_cursor,
            settings,
            phase: AppPhase::Running,
            notice: None,
            tick: 0,
        }
    }

    /// Route to a new destination.
    ///
    /// Navigating to the current route keeps the mounted view. Anything else
    /// mounts a fresh view under a new [`ViewId`]. Returns `true` when the
    /// route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.route {
            return false;
        }

        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;

        self.mounted = MountedView {
            id,
            view: ActiveView::for_route(&route),
        };
        if let Some(page) = route.page() {
            self.nav_cursor = nav_index(page);
        }
        self.route = route;
        self.focus = Focus::Nav;
        true
    }

    pub fn view_id(&self) -> ViewId {
        self.mounted.id
    }

    pub fn view(&self) -> &ActiveView {
        &self.mounted.view
    }

    pub fn current_page(&self) -> Option<Page> {
        self.route.page()
    }

    pub fn portfolio(&self) -> Option<&PortfolioState> {
        match &self.mounted.view {
            ActiveView::Portfolio(state) => Some(state),
            _ => None,
        }
    }

    pub fn portfolio_mut(&mut self) -> Option<&mut PortfolioState> {
        match &mut self.mounted.view {
            ActiveView::Portfolio(state) => Some(state),
            _ => None,
        }
    }

    pub fn contact(&self) -> Option<&ContactState> {
        match &self.mounted.view {
            ActiveView::Contact(state) => Some(state),
            _ => None,
        }
    }

    pub fn contact_mut(&mut self) -> Option<&mut ContactState> {
        match &mut self.mounted.view {
            ActiveView::Contact(state) => Some(state),
            _ => None,
        }
    }

    /// The contact state, only if it belongs to the given mount
    pub fn contact_for(&mut self, id: ViewId) -> Option<&mut ContactState> {
        if self.mounted.id != id {
            return None;
        }
        self.contact_mut()
    }

    pub fn nav_next(&mut self) {
        self.nav_cursor = (self.nav_cursor + 1) % NAV_ITEMS.len();
    }

    pub fn nav_previous(&mut self) {
        self.nav_cursor = (self.nav_cursor + NAV_ITEMS.len() - 1) % NAV_ITEMS.len();
    }

    /// Page under the navigation cursor
    pub fn nav_target(&self) -> Page {
        NAV_ITEMS[self.nav_cursor.min(NAV_ITEMS.len() - 1)].page
    }

    pub fn set_notice(&mut self, message: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice {
            message: message.into(),
            level,
            expires_at: self.tick + NOTICE_TICKS,
        });
    }

    /// Advance the animation frame and expire old notices
    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| self.tick >= notice.expires_at)
        {
            self.notice = None;
        }
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
