//! Template file watcher for hot reload.

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::view::TemplateView;

/// Reloads a [`TemplateView`] whenever its file changes on disk.
pub struct TemplateWatcher {
    view: Arc<TemplateView>,
    path: PathBuf,
}

impl TemplateWatcher {
    /// Returns `None` for views that are not backed by a file.
    pub fn new(view: Arc<TemplateView>) -> Option<Self> {
        let path = view.path()?.to_path_buf();
        Some(Self { view, path })
    }

    /// Start watching. The returned watcher must be kept alive.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors which save by renaming over the original are still seen.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let view = self.view.clone();
        let file_name = self.path.file_name().map(|n| n.to_os_string());
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let relevant = (event.kind.is_modify() || event.kind.is_create())
                        && event
                            .paths
                            .iter()
                            .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if relevant {
                        tracing::info!("Template change detected, reloading...");
                        if let Err(e) = view.reload() {
                            tracing::error!(error = %e, "Failed to reload template. Keeping current template.");
                        }
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(Path::new(&dir), RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Template watcher started");
        Ok(watcher)
    }
}
