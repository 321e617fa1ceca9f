use crate::catalog::Catalog;
use crate::error::{GalleryError, Result};
use crate::reconcile::DomReconciler;
use crate::share::{self, ShareHost, SharePlan};
use crate::state::GalleryState;
use crate::types::{Action, DomOperation, GallerySnapshot, VideoRecord};

/// Top-level gallery controller.
///
/// Owns the only mutable state on the page. Every mutation returns the DOM
/// operations that bring the rendered page in line with the new state.
pub struct GalleryApp {
    catalog: Catalog,
    state: GalleryState,
    reconciler: DomReconciler,
}

impl GalleryApp {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: GalleryState::default(),
            reconciler: DomReconciler::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Dispatch a click action
    pub fn handle(&mut self, action: Action, host: &dyn ShareHost) -> Result<Vec<DomOperation>> {
        match action {
            Action::Select(video_id) => self.select(&video_id),
            Action::Close => Ok(self.close()),
            Action::Share => Ok(self.share(host).1),
        }
    }

    pub fn select(&mut self, video_id: &str) -> Result<Vec<DomOperation>> {
        let record = self
            .catalog
            .get(video_id)
            .ok_or_else(|| GalleryError::UnknownVideo(video_id.to_string()))?;
        Ok(self.select_record(record))
    }

    pub fn select_record(&mut self, record: &'static VideoRecord) -> Vec<DomOperation> {
        log::debug!("playing {} ({})", record.id, record.title);
        self.state.overlay.select(record);
        self.sync()
    }

    pub fn close(&mut self) -> Vec<DomOperation> {
        if let Some(record) = self.state.overlay.active() {
            log::debug!("closing player on {}", record.id);
        }
        self.state.overlay.close();
        self.sync()
    }

    /// Share the active video, falling back to the clipboard and a toast
    pub fn share(&mut self, host: &dyn ShareHost) -> (SharePlan, Vec<DomOperation>) {
        let plan = share::plan(self.state.overlay.active(), host.native_share_available());

        match &plan {
            SharePlan::Nothing => log::debug!("share ignored, no active video"),
            SharePlan::Native(payload) => host.native_share(payload),
            SharePlan::Clipboard { url } => {
                host.copy_to_clipboard(url);
                let ticket = self.state.toast.show(host.now_ms());
                host.schedule_toast_hide(ticket);
            }
        }

        let ops = self.sync();
        (plan, ops)
    }

    /// Hide timer callback; stale generations are ignored
    pub fn expire_toast(&mut self, generation: u64) -> Vec<DomOperation> {
        if !self.state.toast.expire(generation) {
            log::trace!(
                "toast timer {generation} is stale (current {})",
                self.state.toast.generation()
            );
        }
        self.sync()
    }

    /// Operations that rebuild the dynamic parts of a freshly rendered page
    pub fn resync(&mut self) -> Vec<DomOperation> {
        self.reconciler.reset();
        self.sync()
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            active_video: self.state.overlay.active().copied(),
            toast_visible: self.state.toast.is_visible(),
            toast_hide_at: self.state.toast.hide_at(),
        }
    }

    fn sync(&mut self) -> Vec<DomOperation> {
        self.reconciler.reconcile(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Section;
    use crate::state::{PlayerOverlay, ToastTicket};
    use crate::types::{Category, SectionId, SharePayload};
    use std::cell::{Cell, RefCell};

    static SAMPLE: [VideoRecord; 1] = [VideoRecord {
        id: "abc123",
        title: "T1",
        description: "D1",
        category: Category::Wedding,
        date: None,
        duration: None,
    }];

    static SAMPLE_FEATURE: VideoRecord = VideoRecord {
        id: "full1",
        title: "Full",
        description: "Everything",
        category: Category::Full,
        date: None,
        duration: None,
    };

    static SAMPLE_SECTIONS: [Section; 1] = [Section {
        id: SectionId::Wedding,
        title: "Wedding",
        subtitle: "",
        records: &SAMPLE,
    }];

    /// Host double with a manual clock and timer queue
    #[derive(Default)]
    struct FakeHost {
        native: bool,
        now: Cell<f64>,
        shared: RefCell<Vec<SharePayload>>,
        clipboard: RefCell<Vec<String>>,
        timers: RefCell<Vec<(f64, u64)>>,
    }

    impl FakeHost {
        fn native() -> Self {
            Self {
                native: true,
                ..Default::default()
            }
        }

        /// Advance the clock to `t`, firing due timers in order
        fn advance_to(&self, app: &mut GalleryApp, t: f64) -> Vec<DomOperation> {
            let mut ops = Vec::new();
            loop {
                let due = {
                    let mut timers = self.timers.borrow_mut();
                    timers.sort_by(|a, b| a.0.total_cmp(&b.0));
                    if timers.first().map(|(at, _)| *at <= t).unwrap_or(false) {
                        Some(timers.remove(0))
                    } else {
                        None
                    }
                };
                match due {
                    Some((at, generation)) => {
                        self.now.set(at);
                        ops.extend(app.expire_toast(generation));
                    }
                    None => break,
                }
            }
            self.now.set(t);
            ops
        }
    }

    impl ShareHost for FakeHost {
        fn native_share_available(&self) -> bool {
            self.native
        }

        fn native_share(&self, payload: &SharePayload) {
            self.shared.borrow_mut().push(payload.clone());
        }

        fn copy_to_clipboard(&self, text: &str) {
            self.clipboard.borrow_mut().push(text.to_string());
        }

        fn schedule_toast_hide(&self, ticket: ToastTicket) {
            let due = self.now.get() + f64::from(ticket.delay_ms);
            self.timers.borrow_mut().push((due, ticket.generation));
        }

        fn now_ms(&self) -> f64 {
            self.now.get()
        }
    }

    fn sample_app() -> GalleryApp {
        GalleryApp::new(Catalog::new(&SAMPLE_SECTIONS, &SAMPLE_FEATURE))
    }

    #[test]
    fn test_select_every_record() {
        let mut app = GalleryApp::new(Catalog::builtin());
        let records: Vec<&'static VideoRecord> = app.catalog().records().collect();

        for record in records {
            app.select(record.id).unwrap();
            assert_eq!(app.state().overlay, PlayerOverlay::Open(record));

            let active = app.state().overlay.active().unwrap();
            assert_eq!(
                active.embed_url(),
                format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1", record.id)
            );
        }
    }

    #[test]
    fn test_close_from_any_record() {
        let mut app = GalleryApp::new(Catalog::builtin());
        let records: Vec<&'static VideoRecord> = app.catalog().records().collect();

        for record in records {
            app.select_record(record);
            let ops = app.close();
            assert_eq!(app.state().overlay, PlayerOverlay::Closed);
            assert_eq!(ops, vec![DomOperation::UnmountOverlay]);
        }
    }

    #[test]
    fn test_switch_without_intermediate_close() {
        let mut app = GalleryApp::new(Catalog::builtin());

        let first = app.select("mENjog07xDM").unwrap();
        assert!(matches!(first.as_slice(), [DomOperation::MountOverlay { .. }]));

        let second = app.select("h72wvLEPrYA").unwrap();
        assert_eq!(
            second,
            vec![DomOperation::RetargetOverlay {
                from: "mENjog07xDM",
                video: app.catalog().feature(),
            }]
        );
        assert_eq!(app.state().overlay.active().map(|r| r.id), Some("h72wvLEPrYA"));
    }

    #[test]
    fn test_unknown_video_keeps_state() {
        let mut app = GalleryApp::new(Catalog::builtin());
        app.select("QsrXPrTWlfM").unwrap();

        let err = app.select("missing").unwrap_err();
        assert!(matches!(err, GalleryError::UnknownVideo(id) if id == "missing"));
        assert_eq!(app.state().overlay.active().map(|r| r.id), Some("QsrXPrTWlfM"));
    }

    #[test]
    fn test_scenario_select_sample_card() {
        let mut app = sample_app();
        let host = FakeHost::default();

        app.handle(Action::Select("abc123".to_string()), &host).unwrap();

        let active = app.state().overlay.active().unwrap();
        assert_eq!(active.id, "abc123");
        assert_eq!(
            active.embed_url(),
            "https://www.youtube.com/embed/abc123?autoplay=1&rel=0&modestbranding=1"
        );
    }

    #[test]
    fn test_scenario_clipboard_fallback() {
        let mut app = sample_app();
        let host = FakeHost::default();
        app.select("abc123").unwrap();

        let (plan, ops) = app.share(&host);
        assert!(matches!(plan, SharePlan::Clipboard { .. }));
        assert_eq!(ops, vec![DomOperation::ShowToast]);
        assert_eq!(*host.clipboard.borrow(), vec!["https://www.youtube.com/watch?v=abc123".to_string()]);
        assert!(app.state().toast.is_visible());

        // Still up just before the deadline
        assert!(host.advance_to(&mut app, 2_999.0).is_empty());
        assert!(app.state().toast.is_visible());

        assert_eq!(host.advance_to(&mut app, 3_000.0), vec![DomOperation::HideToast]);
        assert!(!app.state().toast.is_visible());
    }

    #[test]
    fn test_second_share_restarts_timer() {
        let mut app = sample_app();
        let host = FakeHost::default();
        app.select("abc123").unwrap();

        app.share(&host);
        host.advance_to(&mut app, 2_000.0);
        let (_, ops) = app.share(&host);
        assert!(ops.is_empty(), "toast already visible, no second toast");
        assert_eq!(app.state().toast.hide_at(), Some(5_000.0));

        // The first timer fires at 3000 and must not hide the toast
        assert!(host.advance_to(&mut app, 4_999.0).is_empty());
        assert!(app.state().toast.is_visible());

        assert_eq!(host.advance_to(&mut app, 5_000.0), vec![DomOperation::HideToast]);
        assert!(!app.state().toast.is_visible());
    }

    #[test]
    fn test_native_share_skips_toast() {
        let mut app = sample_app();
        let host = FakeHost::native();
        app.select("abc123").unwrap();

        let (plan, ops) = app.share(&host);
        assert!(matches!(plan, SharePlan::Native(_)));
        assert!(ops.is_empty());
        assert!(!app.state().toast.is_visible());
        assert!(host.clipboard.borrow().is_empty());

        let shared = host.shared.borrow();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].title, "T1");
        assert_eq!(shared[0].url, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_share_without_active_video() {
        let mut app = sample_app();
        let host = FakeHost::default();

        let (plan, ops) = app.share(&host);
        assert_eq!(plan, SharePlan::Nothing);
        assert!(ops.is_empty());
        assert!(host.clipboard.borrow().is_empty());
        assert!(host.timers.borrow().is_empty());
    }

    #[test]
    fn test_toast_survives_closing_overlay() {
        let mut app = sample_app();
        let host = FakeHost::default();
        app.select("abc123").unwrap();
        app.share(&host);

        assert_eq!(app.close(), vec![DomOperation::UnmountOverlay]);
        assert!(app.state().toast.is_visible());

        assert_eq!(host.advance_to(&mut app, 3_000.0), vec![DomOperation::HideToast]);
    }

    #[test]
    fn test_resync_and_snapshot() {
        let mut app = sample_app();
        let host = FakeHost::default();
        app.select("abc123").unwrap();
        app.share(&host);

        let ops = app.resync();
        assert_eq!(
            ops,
            vec![
                DomOperation::ShowToast,
                DomOperation::MountOverlay { video: &SAMPLE[0] },
            ]
        );

        let snapshot = app.snapshot();
        assert_eq!(snapshot.active_video.map(|r| r.id), Some("abc123"));
        assert!(snapshot.toast_visible);
        assert_eq!(snapshot.toast_hide_at, Some(3_000.0));
    }
}
