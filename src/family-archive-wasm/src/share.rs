use crate::state::ToastTicket;
use crate::types::{SharePayload, VideoRecord};

pub const SHARE_TEXT_PREFIX: &str = "Watch this memory from our family archive: ";

/// Host environment capabilities consumed by the share action.
///
/// Implementations must not call back into the gallery synchronously; the
/// gallery is mutably borrowed while these run.
pub trait ShareHost {
    fn native_share_available(&self) -> bool;

    /// Hand the payload to the share sheet. Cancellation and failure are the
    /// host's to log.
    fn native_share(&self, payload: &SharePayload);

    fn copy_to_clipboard(&self, text: &str);

    /// Arrange for `GalleryApp::expire_toast(ticket.generation)` to run after
    /// `ticket.delay_ms`.
    fn schedule_toast_hide(&self, ticket: ToastTicket);

    fn now_ms(&self) -> f64;
}

/// What a share click will do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharePlan {
    /// No video is open
    Nothing,
    Native(SharePayload),
    Clipboard { url: String },
}

pub fn payload_for(record: &VideoRecord) -> SharePayload {
    SharePayload {
        title: record.title.to_string(),
        text: format!("{SHARE_TEXT_PREFIX}{}", record.title),
        url: record.watch_url(),
    }
}

pub fn plan(active: Option<&VideoRecord>, native_available: bool) -> SharePlan {
    match active {
        None => SharePlan::Nothing,
        Some(record) if native_available => SharePlan::Native(payload_for(record)),
        Some(record) => SharePlan::Clipboard {
            url: record.watch_url(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    static SAMPLE: VideoRecord = VideoRecord {
        id: "abc123",
        title: "T1",
        description: "D1",
        category: Category::Wedding,
        date: None,
        duration: None,
    };

    #[test]
    fn test_payload() {
        let payload = payload_for(&SAMPLE);
        assert_eq!(payload.title, "T1");
        assert_eq!(payload.text, "Watch this memory from our family archive: T1");
        assert_eq!(payload.url, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_plan_prefers_native_share() {
        assert_eq!(plan(Some(&SAMPLE), true), SharePlan::Native(payload_for(&SAMPLE)));
    }

    #[test]
    fn test_plan_falls_back_to_clipboard() {
        assert_eq!(
            plan(Some(&SAMPLE), false),
            SharePlan::Clipboard {
                url: "https://www.youtube.com/watch?v=abc123".to_string()
            }
        );
    }

    #[test]
    fn test_plan_without_active_video() {
        assert_eq!(plan(None, true), SharePlan::Nothing);
        assert_eq!(plan(None, false), SharePlan::Nothing);
    }
}
