//! # servicospro-client
//!
//! Client-side runtime for ServiçosPro pages: the API access façade with
//! loading-state bracketing and connectivity toasts, the notification badge
//! poller, and the persisted light/dark theme preference.
//!
//! The page host builds an [`app::App`] from [`config::ClientConfig`],
//! calls `start()` to begin polling, and renders whatever the shared
//! handles (badges, toasts, loading regions, theme) report.

pub mod app;
pub mod config;
pub mod net;
pub mod services;
pub mod theme;
pub mod ui;
