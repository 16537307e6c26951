//! Queries

mod material_queries;

pub use material_queries::*;
