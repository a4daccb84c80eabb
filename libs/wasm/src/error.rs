use scene_io::ImportError;
use scene_model::ModelError;
use scene_sync::SyncError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced to the browser host.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

impl From<SessionError> for JsValue {
    fn from(err: SessionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
