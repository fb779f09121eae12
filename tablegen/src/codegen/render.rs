//! Template rendering
//!
//! Templates are minijinja templates rendered against an [`ArtifactBundle`].
//! Besides the bundle, every template sees:
//!
//! - `has_time(fields)` - true when any field is a timestamp (import chrono)
//! - `auto_time(name)` - `autoUpdateTime` / `autoCreateTime` for the configured
//!   marker fields, empty otherwise
//! - `| field_ident` - Rust field identifier for a normalized name

use std::path::Path;

use minijinja::{AutoEscape, Environment, Error, UndefinedBehavior, Value};

use super::model::ArtifactBundle;
use super::naming::field_ident;
use crate::error::{CodegenError, Result};

/// Built-in template, used when the working directory has no `model.tpl`
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/model.tpl");

/// Field names that get automatic timestamp annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMarkers {
    create: String,
    update: String,
}

impl TimeMarkers {
    pub fn new(create: &str, update: &str) -> Self {
        Self {
            create: create.to_string(),
            update: update.to_string(),
        }
    }

    /// Annotation for a normalized field name. The update marker wins when
    /// both markers are configured to the same name.
    pub fn annotation(&self, name: &str) -> &'static str {
        if name == self.update {
            "autoUpdateTime"
        } else if name == self.create {
            "autoCreateTime"
        } else {
            ""
        }
    }
}

/// A compiled template plus its helpers
pub struct TemplateRenderer {
    env: Environment<'static>,
    name: String,
}

impl TemplateRenderer {
    /// Load the template from disk
    pub fn from_file(path: &Path, markers: TimeMarkers) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::Template(format!(
                "Failed to read template {}: {}",
                path.display(),
                e
            ))
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_source(&name, source, markers)
    }

    /// Compile a template from source
    pub fn from_source(
        name: &str,
        source: impl Into<String>,
        markers: TimeMarkers,
    ) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_function("has_time", has_time);
        env.add_function("auto_time", move |name: String| {
            markers.annotation(&name).to_string()
        });
        env.add_filter("field_ident", field_ident_filter);

        env.add_template_owned(name.to_string(), source.into())?;

        Ok(Self {
            env,
            name: name.to_string(),
        })
    }

    /// Render one bundle
    pub fn render(&self, bundle: &ArtifactBundle) -> Result<String> {
        let render_error = |e: Error| CodegenError::Render {
            table: bundle.origin_table_name.clone(),
            message: e.to_string(),
        };
        let template = self.env.get_template(&self.name).map_err(render_error)?;
        template.render(bundle).map_err(render_error)
    }
}

fn has_time(fields: Value) -> std::result::Result<bool, Error> {
    for field in fields.try_iter()? {
        if field.get_attr("kind")?.as_str() == Some("timestamp") {
            return Ok(true);
        }
    }
    Ok(false)
}

fn field_ident_filter(name: String) -> String {
    field_ident(&name)
}
