//! 强类型 ID 定义

use derive_more::{Display, From};

/// 物料 ID，由存储在插入时分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display("{_0}")]
pub struct MaterialId(pub i32);
