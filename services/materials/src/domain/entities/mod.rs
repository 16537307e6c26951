//! 领域实体

mod material;

pub use material::*;
