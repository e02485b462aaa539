use std::path::PathBuf;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    /// Served verbatim at the document path and rendered at `/`.
    pub(crate) data_file: PathBuf,
}
