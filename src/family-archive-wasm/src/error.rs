use wasm_bindgen::JsValue;

/// Errors raised by the gallery
#[derive(thiserror::Error, Debug)]
pub enum GalleryError {
    #[error("Browser window is not available")]
    NoWindow,

    #[error("Document is not available")]
    NoDocument,

    #[error("Mount point not found: #{0}")]
    MissingMountPoint(String),

    #[error("Unknown video: {0}")]
    UnknownVideo(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

impl From<JsValue> for GalleryError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        GalleryError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for GalleryError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        GalleryError::Js(err.to_string())
    }
}

impl From<GalleryError> for JsValue {
    fn from(err: GalleryError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GalleryError::UnknownVideo("abc123".to_string()).to_string(),
            "Unknown video: abc123"
        );
        assert_eq!(
            GalleryError::MissingMountPoint("app".to_string()).to_string(),
            "Mount point not found: #app"
        );
    }
}
