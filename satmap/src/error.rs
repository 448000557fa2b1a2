#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source '{0}' is already part of the style")]
    DuplicateSource(String),

    #[error("layer '{0}' is already part of the style")]
    DuplicateLayer(String),

    #[error("image '{0}' is already part of the style")]
    DuplicateImage(String),

    #[error("layer '{layer}' refers to unknown source '{source_id}'")]
    UnknownSource { layer: String, source_id: String },

    #[error("location permission has not been granted")]
    PermissionNotGranted,

    #[error("map has no loaded style to bind the location component to")]
    StyleNotLoaded,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
