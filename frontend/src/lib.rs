pub mod components;
pub mod config;
pub mod scroll_lock;
