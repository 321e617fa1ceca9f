mod app;
mod catalog;
mod config;
mod dom;
mod error;
mod links;
mod logging;
mod reconcile;
mod render;
mod share;
mod state;
mod types;
mod view;

pub use error::GalleryError;
pub use types::{Category, VideoRecord};

use catalog::Catalog;
use config::GalleryConfig;
use dom::Runtime;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use std::rc::Rc;
use types::Action;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // Set panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Family archive gallery - renders the page and owns the player/toast state
#[wasm_bindgen]
pub struct ArchiveGallery {
    runtime: Rc<Runtime>,
}

#[wasm_bindgen]
impl ArchiveGallery {
    /// Create a gallery over the built-in catalog. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ArchiveGallery, JsValue> {
        let config = GalleryConfig::from_js(config)?;
        logging::init(config.level_filter()?);

        Ok(Self {
            runtime: Runtime::new(config, Catalog::builtin()),
        })
    }

    /// Render into the configured mount point and start handling clicks
    pub fn mount(&self) -> Result<(), JsValue> {
        self.runtime.mount()?;
        Ok(())
    }

    /// Open the player on a video (or switch the playing video)
    pub fn select(&self, video_id: String) -> Result<(), JsValue> {
        self.runtime.dispatch(Action::Select(video_id))?;
        Ok(())
    }

    /// Close the player
    pub fn close(&self) -> Result<(), JsValue> {
        self.runtime.dispatch(Action::Close)?;
        Ok(())
    }

    /// Share the playing video, or copy its link when native sharing is unavailable
    pub fn share(&self) -> Result<(), JsValue> {
        self.runtime.dispatch(Action::Share)?;
        Ok(())
    }

    /// Currently playing video, or `null`
    #[wasm_bindgen(js_name = activeVideo)]
    pub fn active_video(&self) -> Result<JsValue, JsValue> {
        let active = self.runtime.app().state().overlay.active();
        match active {
            Some(record) => to_js(record),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = isToastVisible)]
    pub fn is_toast_visible(&self) -> bool {
        self.runtime.app().state().toast.is_visible()
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.runtime.is_mounted()
    }

    /// All videos in page order
    pub fn catalog(&self) -> Result<JsValue, JsValue> {
        let app = self.runtime.app();
        let records: Vec<&VideoRecord> = app.catalog().records().collect();
        to_js(&records)
    }

    /// Player and toast state
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.runtime.app().snapshot())
    }

    /// Get statistics
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let app = self.runtime.app();

        let stats = serde_json::json!({
            "totalVideos": app.catalog().len(),
            "sections": app.catalog().sections().len(),
            "overlayOpen": app.state().overlay.is_open(),
            "toastVisible": app.state().toast.is_visible(),
            "mounted": self.runtime.is_mounted(),
        });

        to_js(&stats)
    }
}

/// Plain JS objects and `null` instead of `Map`s and `undefined`
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

/// Create a gallery and mount it in one call
#[wasm_bindgen(js_name = mountGallery)]
pub fn mount_gallery(config: JsValue) -> Result<ArchiveGallery, JsValue> {
    let gallery = ArchiveGallery::new(config)?;
    gallery.mount()?;
    Ok(gallery)
}

// Re-export key types for JavaScript
#[wasm_bindgen(typescript_custom_section)]
const TYPESCRIPT_TYPES: &'static str = r#"
export type VideoCategory = 'full' | 'wedding' | 'kid' | 'barua';

export interface VideoRecord {
    id: string;
    title: string;
    description: string;
    category: VideoCategory;
    date?: string;
    duration?: string;
}

export interface GalleryConfig {
    mountId?: string;
    logLevel?: 'off' | 'error' | 'warn' | 'info' | 'debug' | 'trace';
    nativeShare?: boolean;
}

export interface GallerySnapshot {
    activeVideo: VideoRecord | null;
    toastVisible: boolean;
    toastHideAt?: number;
}

export interface GalleryStats {
    totalVideos: number;
    sections: number;
    overlayOpen: boolean;
    toastVisible: boolean;
    mounted: boolean;
}
"#;
