//! Per-table render bundles
//!
//! Catalog rows are never modified. Every derived value (identifier, tag,
//! mapped type) is computed from the raw column into a new [`ModelField`], so
//! the serialization tag always comes from the column name as stored.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::naming::{to_identifier, to_tag_name};
use super::type_resolver::FieldType;
use crate::catalog::{Catalog, Field, TableInfo};
use crate::config::CodegenConfig;
use crate::error::Result;

/// A column ready for the template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelField {
    /// Normalized identifier, e.g. `CreateTime`
    pub name: String,
    /// Serialization key, e.g. `createTime`
    pub tag: String,
    /// Column name as stored, e.g. `create_time`
    pub column: String,
    pub desc: String,
    pub kind: FieldType,
    /// Rust spelling of `kind`
    pub rust_type: &'static str,
    /// Catalog `DATA_TYPE`
    pub db_type: String,
    pub is_null: String,
    pub nullable: bool,
    pub column_type: String,
    pub length: u64,
}

impl ModelField {
    pub fn from_column(column: &Field) -> Result<Self> {
        let kind = FieldType::from_db_type(&column.data_type)?;
        Ok(Self {
            name: to_identifier(&column.name),
            tag: to_tag_name(&column.name),
            column: column.name.clone(),
            desc: column.desc.clone(),
            kind,
            rust_type: kind.to_type_string(),
            db_type: column.data_type.clone(),
            is_null: column.is_null.clone(),
            nullable: column.nullable(),
            column_type: column.column_type.clone(),
            length: column.length,
        })
    }
}

/// Table metadata as seen by the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelTable {
    /// Normalized identifier, e.g. `UserProfile`
    pub name: String,
    pub comment: String,
}

/// Everything one template invocation needs for one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactBundle {
    /// Table name as stored; names the generated file
    pub origin_table_name: String,
    pub package_name: String,
    pub table_info: ModelTable,
    pub fields: Vec<ModelField>,
    /// Same order as `fields`
    pub tag_fields: Vec<String>,
}

impl ArtifactBundle {
    pub fn build(table: &TableInfo, columns: &[Field], package_name: &str) -> Result<Self> {
        let fields = columns
            .iter()
            .map(ModelField::from_column)
            .collect::<Result<Vec<_>>>()?;
        let tag_fields = fields.iter().map(|f| f.tag.clone()).collect();

        Ok(Self {
            origin_table_name: table.name.clone(),
            package_name: package_name.to_string(),
            table_info: ModelTable {
                name: to_identifier(&table.name),
                comment: table.comment.clone(),
            },
            fields,
            tag_fields,
        })
    }

    /// Staged file name: `<origin_table_name>.<extension>`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.origin_table_name, extension)
    }

    /// Whether any field maps to a timestamp
    pub fn has_time(&self) -> bool {
        self.fields.iter().any(|f| f.kind.needs_chrono())
    }
}

/// Read the schema and build one bundle per selected table, in catalog order
pub async fn build_bundles<C: Catalog + ?Sized>(
    catalog: &C,
    config: &CodegenConfig,
) -> Result<Vec<ArtifactBundle>> {
    let tables = catalog.tables(&config.table_schema).await?;
    let found = tables.len();
    let tables = filter_tables(tables, &config.include_tables, &config.exclude_tables);
    debug!(
        "After filtering: {} of {} tables (include={}, exclude={})",
        tables.len(),
        found,
        config.include_tables,
        config.exclude_tables
    );

    let mut bundles = Vec::with_capacity(tables.len());
    for table in &tables {
        let columns = catalog.columns(&config.table_schema, &table.name).await?;
        let bundle = ArtifactBundle::build(table, &columns, config.package_name())?;
        debug!(
            "Bundle {} -> {} ({} fields)",
            bundle.origin_table_name,
            bundle.table_info.name,
            bundle.fields.len()
        );
        bundles.push(bundle);
    }

    Ok(bundles)
}

/// Filter tables based on include/exclude patterns
fn filter_tables(tables: Vec<TableInfo>, include: &str, exclude: &str) -> Vec<TableInfo> {
    let include_all = include.trim() == "*" || include.trim().is_empty();
    let include_set: HashSet<&str> = if include_all {
        HashSet::new()
    } else {
        include.split(',').map(str::trim).collect()
    };
    let exclude_set: HashSet<&str> = exclude
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    tables
        .into_iter()
        .filter(|t| {
            let included = include_all || include_set.contains(t.name.as_str());
            included && !exclude_set.contains(t.name.as_str())
        })
        .collect()
}
