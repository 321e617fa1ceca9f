use crate::types::VideoRecord;

/// How long the "link copied" toast stays up after the last share
pub const TOAST_DURATION_MS: u32 = 3000;

/// Player modal: at most one video is playing at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerOverlay {
    #[default]
    Closed,
    Open(&'static VideoRecord),
}

impl PlayerOverlay {
    /// Open on `record`, replacing whatever was playing
    pub fn select(&mut self, record: &'static VideoRecord) {
        *self = PlayerOverlay::Open(record);
    }

    pub fn close(&mut self) {
        *self = PlayerOverlay::Closed;
    }

    pub fn active(&self) -> Option<&'static VideoRecord> {
        match *self {
            PlayerOverlay::Open(record) => Some(record),
            PlayerOverlay::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PlayerOverlay::Open(_))
    }
}

/// Hide request for the toast, tagged with the show that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket {
    pub generation: u64,
    pub delay_ms: u32,
}

/// Transient confirmation toast.
///
/// Every `show` bumps the generation. A hide timer only takes effect when it
/// carries the current generation, so re-showing restarts the countdown and
/// timers left over from earlier shows fire as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToastState {
    visible: bool,
    generation: u64,
    hide_at: Option<f64>,
}

impl ToastState {
    pub fn show(&mut self, now_ms: f64) -> ToastTicket {
        self.generation += 1;
        self.visible = true;
        self.hide_at = Some(now_ms + f64::from(TOAST_DURATION_MS));

        ToastTicket {
            generation: self.generation,
            delay_ms: TOAST_DURATION_MS,
        }
    }

    /// Returns true when this call hid the toast
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }

        self.visible = false;
        self.hide_at = None;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Deadline of the pending hide, if the toast is up
    pub fn hide_at(&self) -> Option<f64> {
        self.hide_at
    }
}

/// Page-session state owned by the gallery
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GalleryState {
    pub overlay: PlayerOverlay,
    pub toast: ToastState,
}
