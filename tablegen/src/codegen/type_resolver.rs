//! MySQL to Rust type mapping

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Target type of a generated field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Timestamp,
    Bool,
    Int,
    BigInt,
    Bytes,
    Float,
    Double,
}

impl FieldType {
    /// Map a catalog `DATA_TYPE` to a field type
    ///
    /// The table is closed: an unknown type means the generated model could
    /// not compile, so it is an error rather than a fallback to `String`.
    pub fn from_db_type(data_type: &str) -> Result<Self> {
        let field_type = match data_type.trim().to_ascii_lowercase().as_str() {
            "varchar" | "longtext" | "char" | "text" => FieldType::Text,
            "datetime" | "date" | "time" => FieldType::Timestamp,
            "tinyint" => FieldType::Bool,
            "int" | "timestamp" | "integer" => FieldType::Int,
            "bigint" => FieldType::BigInt,
            "blob" | "varbinary" => FieldType::Bytes,
            "float" => FieldType::Float,
            "double" => FieldType::Double,
            _ => return Err(CodegenError::UnsupportedDataType(data_type.to_string())),
        };
        Ok(field_type)
    }

    /// Get the type string for code generation
    pub fn to_type_string(&self) -> &'static str {
        match self {
            FieldType::Text => "String",
            FieldType::Timestamp => "NaiveDateTime",
            FieldType::Bool => "bool",
            FieldType::Int => "i32",
            FieldType::BigInt => "i64",
            FieldType::Bytes => "Vec<u8>",
            FieldType::Float => "f32",
            FieldType::Double => "f64",
        }
    }

    /// Check if this type needs the chrono import
    pub fn needs_chrono(&self) -> bool {
        matches!(self, FieldType::Timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_types() {
        for t in ["varchar", "longtext", "char", "text"] {
            assert_eq!(FieldType::from_db_type(t).unwrap(), FieldType::Text);
        }
    }

    #[test]
    fn test_time_types() {
        for t in ["datetime", "date", "time"] {
            let field_type = FieldType::from_db_type(t).unwrap();
            assert_eq!(field_type, FieldType::Timestamp);
            assert!(field_type.needs_chrono());
        }
    }

    #[test]
    fn test_numeric_types() {
        assert_eq!(FieldType::from_db_type("tinyint").unwrap(), FieldType::Bool);
        assert_eq!(FieldType::from_db_type("int").unwrap(), FieldType::Int);
        assert_eq!(FieldType::from_db_type("integer").unwrap(), FieldType::Int);
        assert_eq!(FieldType::from_db_type("timestamp").unwrap(), FieldType::Int);
        assert_eq!(FieldType::from_db_type("bigint").unwrap(), FieldType::BigInt);
        assert_eq!(FieldType::from_db_type("float").unwrap(), FieldType::Float);
        assert_eq!(FieldType::from_db_type("double").unwrap(), FieldType::Double);
        assert!(!FieldType::Int.needs_chrono());
    }

    #[test]
    fn test_binary_types() {
        assert_eq!(FieldType::from_db_type("blob").unwrap(), FieldType::Bytes);
        assert_eq!(FieldType::from_db_type("varbinary").unwrap(), FieldType::Bytes);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(FieldType::from_db_type("VARCHAR").unwrap(), FieldType::Text);
        assert_eq!(FieldType::from_db_type(" BigInt ").unwrap(), FieldType::BigInt);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        for t in ["json", "decimal", "enum", "smallint", ""] {
            let err = FieldType::from_db_type(t).unwrap_err();
            assert!(matches!(err, CodegenError::UnsupportedDataType(_)));
        }
        assert_eq!(
            FieldType::from_db_type("json").unwrap_err().to_string(),
            "json not convert"
        );
    }

    #[test]
    fn test_type_string() {
        assert_eq!(FieldType::Text.to_type_string(), "String");
        assert_eq!(FieldType::Timestamp.to_type_string(), "NaiveDateTime");
        assert_eq!(FieldType::Bytes.to_type_string(), "Vec<u8>");
        assert_eq!(FieldType::BigInt.to_type_string(), "i64");
    }
}
