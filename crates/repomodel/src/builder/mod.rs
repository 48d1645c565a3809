//! Builders turning raw metadata descriptors into model objects.
//!
//! [`EntityBuilder`] drives [`ColumnBuilder`] and [`ForeignKeyBuilder`] for
//! one table. None of them can fail: rule problems degrade single columns and
//! are reported to the [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).

mod column;
mod entity;
mod foreign_key;

#[cfg(test)]
pub(crate) mod testing;

pub use column::ColumnBuilder;
pub use entity::EntityBuilder;
pub use foreign_key::ForeignKeyBuilder;
