//! 领域层
//!
//! 物料实体、值对象（ID、列集合、搜索词）和仓储接口

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
