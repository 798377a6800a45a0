//! Widget components for the site shell and its pages

mod about;
mod contact;
mod footer;
mod header;
mod home;
mod nav_bar;
mod not_found;
mod portfolio;
pub mod text;

pub use about::AboutView;
pub use contact::ContactView;
pub use footer::Footer;
pub use header::SiteHeader;
pub use home::HomeView;
pub use nav_bar::NavBar;
pub use not_found::NotFoundView;
pub use portfolio::PortfolioView;
