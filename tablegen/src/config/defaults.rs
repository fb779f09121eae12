//! Default configuration values - single source of truth

/// Default package (output sub-directory) name
pub const PACKAGE_NAME: &str = "model";

/// The only supported catalog dialect
pub const DRIVER_NAME: &str = "mysql";

/// Default template file, resolved against the working directory
pub const MODEL_TEMPLATE: &str = "model.tpl";

/// Field name that receives the auto-create timestamp annotation
pub const CREATE_TIME: &str = "CreateTime";

/// Field name that receives the auto-update timestamp annotation
pub const UPDATE_TIME: &str = "UpdateTime";

/// Extension of generated files
pub const FILE_EXTENSION: &str = "rs";

/// External formatter binary
pub const RUSTFMT_PATH: &str = "rustfmt";

/// Render worker count (0 = available parallelism)
pub const WORKERS: usize = 0;

/// Default include tables pattern (all tables)
pub const INCLUDE_TABLES: &str = "*";

/// Default exclude tables pattern (none)
pub const EXCLUDE_TABLES: &str = "";

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;
