//! 值对象

mod ids;
mod schema;
mod search_term;

pub use ids::*;
pub use schema::*;
pub use search_term::*;
