//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod error_display;
mod loading_spinner;
mod page_header;
mod state_selector;
mod tab_bar;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use state_selector::StateSelector;
pub use tab_bar::TabBar;
