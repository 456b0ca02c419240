//! Business logic services.
//!
//! Services sit between HTTP handlers and the store. They validate input,
//! turn "not found" into errors, and log mutations.

pub mod product_service;
