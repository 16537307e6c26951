//! 仓储接口

mod material_repository;

pub use material_repository::*;
