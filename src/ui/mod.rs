// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

pub use layout::{LayoutManager, LayoutMode, LayoutRequest};
pub use theme::{Theme, ThemeManager};
