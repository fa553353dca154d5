//! # camcal-domain
//!
//! Pure domain model for the camcal report-calendar page.
//!
//! ## Responsibilities
//! - Foundational types: [`month::Month`], the [`key::MonthKey`] composite
//!   key, and [`color::HexColor`]
//! - Define the [`calendar::Calendar`] configuration (years, hidden months,
//!   per-year palettes, link base) and enforce its invariants
//! - Build the [`page::CalendarPage`] render model — the pure function from
//!   configuration to what the page shows
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or external IO crates.
//! HTML production and HTTP belong to the adapter layer.

pub mod calendar;
pub mod color;
pub mod error;
pub mod key;
pub mod month;
pub mod page;
