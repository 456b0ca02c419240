//! Data models for the product collection and its request payloads.

/// Product record and create/update payloads
pub mod product;
