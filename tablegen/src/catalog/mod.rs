//! Schema catalog access
//!
//! The generator only needs two read-only questions answered: which base
//! tables live in a schema, and which columns a table has. [`Catalog`] is that
//! seam; [`MySqlCatalog`] answers it from `information_schema`, while
//! [`StaticCatalog`] answers it from memory.

mod memory;
mod metadata;
mod mysql;

pub use memory::StaticCatalog;
pub use metadata::*;
pub use mysql::MySqlCatalog;

use async_trait::async_trait;

use crate::error::Result;

/// A source of table and column metadata.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List the base tables of `schema`, ordered by table name.
    async fn tables(&self, schema: &str) -> Result<Vec<TableInfo>>;

    /// List the columns of `schema.table`, ordered by ordinal position.
    async fn columns(&self, schema: &str, table: &str) -> Result<Vec<Field>>;
}

