use std::sync::Arc;

use applink_directory::Directory;
use applink_store::JsonFileDeletionLog;

#[derive(Clone)]
pub struct AppState {
    directory: Arc<dyn Directory>,
    deletion_log: Arc<JsonFileDeletionLog>,
}

impl AppState {
    pub fn new(directory: Arc<dyn Directory>, deletion_log: JsonFileDeletionLog) -> Self {
        Self {
            directory,
            deletion_log: Arc::new(deletion_log),
        }
    }

    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }

    pub fn deletion_log(&self) -> &JsonFileDeletionLog {
        &self.deletion_log
    }
}
