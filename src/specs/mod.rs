// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives on one page* and *how to pull it out*.
//!
//! ## What lives here
//! - **Pure text/HTML parsing** of a fetched page (no networking).
//! - **Pattern choice & precedence** (e.g. prefer the `NN%―` vote marker, fall
//!   back to filtered plain percentages).
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`), **record shaping** (`record`) and
//!   **persistence** (`store`). Specs only extract.
//!
//! ## Testing notes
//! - Specs are testable **offline** against literal text or saved HTML.
pub mod voting;
