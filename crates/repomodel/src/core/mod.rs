//! Core abstractions for database-agnostic metadata introspection.
//!
//! - [`schema`]: Raw table, column, and foreign key descriptors
//! - [`jdbc`]: JDBC-style type, rule, and deferrability codes
//! - [`traits`]: The [`MetadataSource`] trait and its [`SchemaScope`]
//!
//! Metadata sources (`source/postgres`, `source/snapshot`) implement these
//! abstractions; the builders consume them without knowing which database
//! produced them.

pub mod jdbc;
pub mod schema;
pub mod traits;

pub use schema::{DbColumn, DbForeignKey, DbForeignKeyColumn, DbTable};
pub use traits::{like_match, MetadataSource, SchemaScope};
