//! Concurrent rendering into the staging directory

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use super::model::ArtifactBundle;
use super::render::TemplateRenderer;
use crate::error::{CodegenError, Result};

/// Worker count used when the configuration asks for 0
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Render every bundle into `staging`, at most `workers` at a time.
///
/// Each unit owns its bundle and writes its own file, so units share nothing
/// but the read-only renderer. All units are awaited even after a failure;
/// the first failure is then returned, and the caller is expected to discard
/// the staging directory. On success the staged paths come back sorted.
pub async fn render_all(
    bundles: Vec<ArtifactBundle>,
    renderer: Arc<TemplateRenderer>,
    staging: &Path,
    extension: &str,
    workers: usize,
) -> Result<Vec<PathBuf>> {
    let workers = if workers == 0 {
        default_workers()
    } else {
        workers
    };
    let limit = Arc::new(Semaphore::new(workers));
    let total = bundles.len();
    debug!("Rendering {} tables with {} workers", total, workers);

    let mut set = JoinSet::new();
    for bundle in bundles {
        let permit = limit
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| CodegenError::Worker(e.to_string()))?;
        let renderer = Arc::clone(&renderer);
        let path = staging.join(bundle.file_name(extension));

        set.spawn_blocking(move || {
            let _permit = permit;
            render_unit(&renderer, &bundle, &path).map(|()| path)
        });
    }

    let mut written = Vec::with_capacity(total);
    let mut first_error = None;
    while let Some(joined) = set.join_next().await {
        let outcome = joined
            .map_err(|e| CodegenError::Worker(e.to_string()))
            .and_then(|rendered| rendered);
        match outcome {
            Ok(path) => written.push(path),
            Err(e) => {
                error!("{}", e);
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    written.sort();
    Ok(written)
}

fn render_unit(renderer: &TemplateRenderer, bundle: &ArtifactBundle, path: &Path) -> Result<()> {
    let code = renderer.render(bundle)?;
    std::fs::write(path, code).map_err(|e| CodegenError::Render {
        table: bundle.origin_table_name.clone(),
        message: format!("failed to write {}: {}", path.display(), e),
    })?;
    debug!("Rendered {} -> {}", bundle.origin_table_name, path.display());
    Ok(())
}
