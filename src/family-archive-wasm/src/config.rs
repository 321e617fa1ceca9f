use crate::error::{GalleryError, Result};
use log::LevelFilter;
use serde::Deserialize;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::JsValue;

/// Options accepted by `new ArchiveGallery(config)`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    /// Id of the element the page is rendered into
    pub mount_id: String,
    pub log_level: String,
    /// Use `navigator.share` when the browser has it; false forces the
    /// clipboard fallback
    pub native_share: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            log_level: "info".to_string(),
            native_share: true,
        }
    }
}

impl GalleryConfig {
    /// Read config from an optional JS object; `undefined`/`null` mean defaults
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        let config: Self = from_value(value).map_err(|e| GalleryError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mount_id.trim().is_empty() {
            return Err(GalleryError::InvalidConfig("mountId must not be empty".to_string()));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| GalleryError::InvalidConfig(format!("unknown logLevel '{}'", self.log_level)))
    }
}
