//! Browser glue: materializes view trees, applies reconciler output and
//! bridges clicks, timers and the share/clipboard APIs into `GalleryApp`.

use crate::app::GalleryApp;
use crate::catalog::Catalog;
use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::render::{self, OVERLAY_CLASS, TOAST_CLASS, TOAST_VISIBLE_CLASS};
use crate::share::ShareHost;
use crate::state::ToastTicket;
use crate::types::{Action, DomOperation, SharePayload};
use crate::view::{Node, ACTION_ATTR, VIDEO_ATTR};
use js_sys::{Function, Promise, Reflect};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Event, Navigator, Window};

fn window() -> Result<Window> {
    web_sys::window().ok_or(GalleryError::NoWindow)
}

fn document() -> Result<Document> {
    window()?.document().ok_or(GalleryError::NoDocument)
}

fn navigator() -> Option<Navigator> {
    web_sys::window().map(|w| w.navigator())
}

/// Owns the rendered page inside the mount point
pub struct DomRenderer {
    document: Document,
    root: Element,
}

impl DomRenderer {
    /// Render the static page into `#mount_id`, replacing its contents
    pub fn mount(document: Document, mount_id: &str, catalog: &Catalog) -> Result<Self> {
        let mount = document
            .get_element_by_id(mount_id)
            .ok_or_else(|| GalleryError::MissingMountPoint(mount_id.to_string()))?;

        let renderer = Self {
            document,
            root: mount,
        };

        let page = renderer.materialize(&Node::from(render::page(catalog)))?;
        renderer.root.set_inner_html("");
        renderer.root.append_child(&page)?;

        Ok(renderer)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    fn materialize(&self, node: &Node) -> Result<web_sys::Node> {
        match node {
            Node::Text(content) => Ok(self.document.create_text_node(content).into()),
            Node::Element(el) => {
                let element = self.document.create_element(el.tag)?;
                for (name, value) in &el.attrs {
                    element.set_attribute(name, value)?;
                }
                for child in &el.children {
                    element.append_child(&self.materialize(child)?)?;
                }
                Ok(element.into())
            }
        }
    }

    fn find(&self, class: &str) -> Result<Option<Element>> {
        Ok(self.root.query_selector(&format!(".{class}"))?)
    }

    fn toast(&self) -> Result<Element> {
        self.find(TOAST_CLASS)?
            .ok_or_else(|| GalleryError::Js(format!("missing .{TOAST_CLASS} element")))
    }

    fn page_root(&self) -> Result<Element> {
        self.find(render::ROOT_CLASS)?
            .ok_or_else(|| GalleryError::Js(format!("missing .{} element", render::ROOT_CLASS)))
    }

    /// Apply reconciler output to the live DOM
    pub fn apply(&self, operations: &[DomOperation]) -> Result<()> {
        for op in operations {
            match op {
                DomOperation::MountOverlay { video } => {
                    let overlay = self.materialize(&Node::from(render::overlay(video)))?;
                    self.page_root()?.append_child(&overlay)?;
                }
                DomOperation::RetargetOverlay { video, .. } => {
                    let overlay = self.materialize(&Node::from(render::overlay(video)))?;
                    match self.find(OVERLAY_CLASS)? {
                        Some(existing) => existing.replace_with_with_node_1(&overlay)?,
                        None => {
                            self.page_root()?.append_child(&overlay)?;
                        }
                    }
                }
                DomOperation::UnmountOverlay => {
                    if let Some(existing) = self.find(OVERLAY_CLASS)? {
                        existing.remove();
                    }
                }
                DomOperation::ShowToast => self.toast()?.class_list().add_1(TOAST_VISIBLE_CLASS)?,
                DomOperation::HideToast => self.toast()?.class_list().remove_1(TOAST_VISIBLE_CLASS)?,
            }
        }
        Ok(())
    }
}

/// Shared page-lifetime runtime behind `ArchiveGallery`
pub struct Runtime {
    config: GalleryConfig,
    app: RefCell<GalleryApp>,
    renderer: RefCell<Option<DomRenderer>>,
}

impl Runtime {
    pub fn new(config: GalleryConfig, catalog: Catalog) -> Rc<Self> {
        Rc::new(Self {
            config,
            app: RefCell::new(GalleryApp::new(catalog)),
            renderer: RefCell::new(None),
        })
    }

    pub fn app(&self) -> std::cell::Ref<'_, GalleryApp> {
        self.app.borrow()
    }

    pub fn is_mounted(&self) -> bool {
        self.renderer.borrow().is_some()
    }

    /// Render the page and start listening for clicks
    pub fn mount(self: &Rc<Self>) -> Result<()> {
        if self.is_mounted() {
            log::warn!("gallery already mounted on #{}", self.config.mount_id);
            return Ok(());
        }

        let renderer = {
            let app = self.app.borrow();
            DomRenderer::mount(document()?, &self.config.mount_id, app.catalog())?
        };
        let ops = self.app.borrow_mut().resync();
        renderer.apply(&ops)?;
        install_click_handler(renderer.root(), Rc::downgrade(self))?;

        log::info!(
            "gallery mounted on #{} with {} videos",
            self.config.mount_id,
            self.app.borrow().catalog().len()
        );
        *self.renderer.borrow_mut() = Some(renderer);
        Ok(())
    }

    pub fn dispatch(self: &Rc<Self>, action: Action) -> Result<()> {
        let host = BrowserHost::new(self);
        let ops = self.app.borrow_mut().handle(action, &host)?;
        self.render(&ops)
    }

    pub fn expire_toast(&self, generation: u64) {
        let ops = self.app.borrow_mut().expire_toast(generation);
        if let Err(err) = self.render(&ops) {
            log::error!("failed to hide toast: {err}");
        }
    }

    fn render(&self, ops: &[DomOperation]) -> Result<()> {
        match self.renderer.borrow().as_ref() {
            Some(renderer) => renderer.apply(ops),
            // Not mounted yet: `mount` replays the state through `resync`
            None => Ok(()),
        }
    }
}

/// One delegated listener on the mount point reads the clicked element's markers
fn install_click_handler(root: &Element, runtime: Weak<Runtime>) -> Result<()> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(runtime) = runtime.upgrade() else {
            return;
        };
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(marked)) = target.closest(&format!("[{ACTION_ATTR}]")) else {
            return;
        };

        let action = Action::from_markers(
            marked.get_attribute(ACTION_ATTR).as_deref(),
            marked.get_attribute(VIDEO_ATTR).as_deref(),
        );
        if let Some(action) = action {
            event.prevent_default();
            if let Err(err) = runtime.dispatch(action) {
                log::error!("click handling failed: {err}");
            }
        }
    });

    root.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    handler.forget();
    Ok(())
}

/// `ShareHost` backed by `navigator.share`, `navigator.clipboard` and `setTimeout`
struct BrowserHost {
    runtime: Weak<Runtime>,
    native_enabled: bool,
}

impl BrowserHost {
    fn new(runtime: &Rc<Runtime>) -> Self {
        Self {
            runtime: Rc::downgrade(runtime),
            native_enabled: runtime.config.native_share,
        }
    }
}

/// Look up `target[name]` and call it with one argument, normalizing the result to a promise
fn call_method(target: &JsValue, name: &str, arg: &JsValue) -> Result<Promise> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let result = method.call1(target, arg)?;
    Ok(Promise::resolve(&result))
}

fn has_method(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

impl ShareHost for BrowserHost {
    fn native_share_available(&self) -> bool {
        self.native_enabled && navigator().map(|nav| has_method(&nav, "share")).unwrap_or(false)
    }

    fn native_share(&self, payload: &SharePayload) {
        let Some(nav) = navigator() else {
            return;
        };

        let shared = serde_wasm_bindgen::to_value(payload)
            .map_err(GalleryError::from)
            .and_then(|data| call_method(&nav, "share", &data));

        match shared {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::info!("native share dismissed: {}", GalleryError::from(err));
                }
            }),
            Err(err) => log::info!("native share failed: {err}"),
        }
    }

    fn copy_to_clipboard(&self, text: &str) {
        let Some(nav) = navigator() else {
            return;
        };

        let written = Reflect::get(&nav, &JsValue::from_str("clipboard"))
            .map_err(GalleryError::from)
            .and_then(|clipboard| {
                if clipboard.is_undefined() || clipboard.is_null() {
                    return Err(GalleryError::Js("clipboard API unavailable".to_string()));
                }
                call_method(&clipboard, "writeText", &JsValue::from_str(text))
            });

        match written {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("clipboard write failed: {}", GalleryError::from(err));
                }
            }),
            Err(err) => log::warn!("clipboard write failed: {err}"),
        }
    }

    fn schedule_toast_hide(&self, ticket: ToastTicket) {
        let runtime = self.runtime.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.expire_toast(ticket.generation);
            }
        });

        let scheduled = window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                ticket.delay_ms as i32,
            )
            .map_err(GalleryError::from)
        });
        if let Err(err) = scheduled {
            log::error!("failed to schedule toast hide: {err}");
        }
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
