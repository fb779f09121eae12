//! In-memory catalog

use async_trait::async_trait;

use super::{Catalog, Field, TableInfo};
use crate::error::Result;

/// A [`Catalog`] over tables held in memory.
///
/// Follows the same ordering contract as the MySQL catalog: tables come back
/// sorted by name, columns in the order they were added. The schema name is
/// ignored, every lookup answers from the same table set.
///
/// ```
/// use tablegen::catalog::{Field, StaticCatalog, TableInfo};
///
/// let catalog = StaticCatalog::new().table(
///     TableInfo::new("user", "User table"),
///     vec![Field::new("id", "int", false)],
/// );
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tables: Vec<(TableInfo, Vec<Field>)>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table with its columns, replacing a table of the same name.
    pub fn table(mut self, table: TableInfo, columns: Vec<Field>) -> Self {
        self.tables.retain(|(t, _)| t.name != table.name);
        self.tables.push((table, columns));
        self
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn tables(&self, _schema: &str) -> Result<Vec<TableInfo>> {
        let mut tables: Vec<TableInfo> = self.tables.iter().map(|(t, _)| t.clone()).collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tables)
    }

    async fn columns(&self, _schema: &str, table: &str) -> Result<Vec<Field>> {
        Ok(self
            .tables
            .iter()
            .find(|(t, _)| t.name == table)
            .map(|(_, columns)| columns.clone())
            .unwrap_or_default())
    }
}
