//! Raw metadata rows as returned by the catalog

use std::fmt;

use serde::{Deserialize, Serialize};

/// A base table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name, exactly as stored in the catalog
    pub name: String,

    /// Table comment, or the table name when the table has none
    pub comment: String,
}

impl TableInfo {
    pub fn new(name: &str, comment: &str) -> Self {
        let comment = if comment.is_empty() { name } else { comment };
        Self {
            name: name.to_string(),
            comment: comment.to_string(),
        }
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {:<16}, comment: {}", self.name, self.comment)
    }
}

/// A column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name, exactly as stored in the catalog
    pub name: String,

    /// Column comment (may be empty)
    pub desc: String,

    /// Bare data type, e.g. `varchar`
    pub data_type: String,

    /// `YES` or `NO`
    pub is_null: String,

    /// Full column type, e.g. `varchar(64)` or `int unsigned`
    pub column_type: String,

    /// Declared maximum character length, 0 when not applicable
    pub length: u64,
}

impl Field {
    /// Convenience constructor for a column without comment or length
    pub fn new(name: &str, data_type: &str, nullable: bool) -> Self {
        Self {
            name: name.to_string(),
            desc: String::new(),
            data_type: data_type.to_string(),
            is_null: if nullable { "YES" } else { "NO" }.to_string(),
            column_type: data_type.to_string(),
            length: 0,
        }
    }

    /// Whether the column accepts NULL
    pub fn nullable(&self) -> bool {
        self.is_null.eq_ignore_ascii_case("YES")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|{:>15}|{:>15}|{:>15}|{:>15}|{:>10}|{:>10}|",
            self.name, self.desc, self.data_type, self.is_null, self.column_type, self.length
        )
    }
}
