pub mod ai;
pub mod analyst;
pub mod app;
pub mod classifier;
pub mod config;
pub mod feed;
pub mod form;
pub mod ids;
pub mod prompts;
pub mod seed;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
