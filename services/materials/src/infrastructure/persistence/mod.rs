//! Persistence implementations

mod connection;
mod converters;
mod ddl;
mod postgres;
mod rows;
mod statements;

pub use connection::{connect, postgres_config};
pub use ddl::{create_table_sql, ensure_table};
pub use postgres::PostgresMaterialRepository;
pub use statements::MaterialStatements;
