//! Ambient services: clock, clipboard, form submission, logging.

pub mod clipboard;
pub mod form_post;
pub mod time_source;
pub mod tracing_setup;
