//! # camcal-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered calendar page** at `/` — complete
//!   HTML with **zero JavaScript**, buttons are plain `<form>` elements
//! - Serve the stylesheet and other static assets under `/static`
//! - Map the domain page model into HTML via an [askama](https://docs.rs/askama)
//!   template
//!
//! ## Dependency rule
//! Depends on `camcal-domain` only. Never leaks axum types into the domain.

pub mod calendar;
pub mod error;
pub mod router;
pub mod state;
