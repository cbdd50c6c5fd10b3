//! UI modules: window layout and theme.

pub mod main_window;
pub mod theme;
