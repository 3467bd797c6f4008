pub mod format;
pub mod search_bar;
pub mod theme;
