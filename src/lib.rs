//! termfolio: a configuration-driven portfolio rendered as a terminal session.
//!
//! The crate splits into a pure content pipeline and an interactive shell
//! around it:
//!
//! - [`config`] holds the static content record (`PortfolioConfig`).
//! - [`render`] turns the record into an immutable transcript of fake
//!   command/output lines.
//! - [`app`] owns the interactive state: prompt, dispatcher, timers,
//!   overlays.
//! - [`view`] draws the app state with ratatui.
//! - [`services`] carries the ambient pieces: clock abstraction, clipboard,
//!   form submission, logging setup.

pub mod app;
pub mod config;
pub mod render;
pub mod services;
pub mod view;
