use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("invalid bundle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bundle root must be an array, an object with a \"files\" array, or a flat path-to-content map")]
    UnrecognizedShape,

    #[error("script entry is missing a \"path\" or \"name\" field")]
    MissingPath,

    #[error("script entry {path:?} is missing a \"content\", \"source\", or \"Source\" field")]
    MissingContent { path: String },
}
