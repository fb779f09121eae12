//! Code generation module

mod format;
mod model;
mod naming;
mod pool;
mod promote;
mod render;
mod type_resolver;

pub use format::{format_dir, FormatOutcome, Formatter};
pub use model::*;
pub use naming::*;
pub use pool::{default_workers, render_all};
pub use promote::promote;
pub use render::{TemplateRenderer, TimeMarkers, DEFAULT_TEMPLATE};
pub use type_resolver::*;
