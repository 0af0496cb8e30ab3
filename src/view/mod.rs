//! Pure view models for the connectors dashboard
//!
//! Nothing in here draws to a terminal; the `ui` module renders these.

pub mod card;
pub mod widget;

pub use card::{CardAction, CardCommand, CardView, ImageSource, LoadedCard, present};
pub use widget::{DashboardWidget, GridCell, WidgetInputs, WidgetLayout};
