//! ICS export.
//!
//! This module renders a [`crate::Schedule`] as an RFC 5545 calendar document.

mod generate;
pub mod text;

pub use generate::{IcsDocument, PRODUCT_ID, UID_DOMAIN, export_filename, generate_ics};
