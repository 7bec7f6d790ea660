// Core Layer
pub mod actions;
pub mod browser;

pub use browser::{Browser, FileGroupView};
