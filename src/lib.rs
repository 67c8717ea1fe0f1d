pub mod app;
pub mod checkpoint_log;
pub mod config;
pub mod format;
pub mod gui;
pub mod refresh;
pub mod tracker;
