//! HTTP API for the stockroom dashboard: configuration, routing, view shaping,
//! settings, navigation and the placeholder reports.

pub mod app;
pub mod config;
pub mod navigation;
pub mod reports;
pub mod settings;
