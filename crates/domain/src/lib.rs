//! # bricklog-domain
//!
//! Pure domain model for the bricklog LEGO set catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **LEGO set** record and its wire shape
//! - Define the validated **draft** used to create a set and the **change set**
//!   used to update one
//! - Contain all invariant enforcement (required fields, price sanity)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod lego_set;
