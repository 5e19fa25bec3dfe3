//! Data processing for COVID-19 case records.
//!
//! This crate turns raw case rows into the record set the dashboard draws:
//! sample and deduplicate, repair coordinates, project to Web Mercator,
//! classify risk, then filter by the user's selection.

pub mod classify;
pub mod filter;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod sampling;
pub mod style;
