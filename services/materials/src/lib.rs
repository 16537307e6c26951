//! Materials desk library
//!
//! 物料表的数据访问层与控制台表现层

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
