use crate::links;
use serde::Serialize;

/// Grouping tag for a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Full,
    Wedding,
    Kid,
    Barua,
}

impl Category {
    /// Section of the page this category is grouped under
    pub fn section(self) -> SectionId {
        match self {
            Category::Full => SectionId::Feature,
            Category::Wedding => SectionId::Wedding,
            Category::Kid | Category::Barua => SectionId::Rituals,
        }
    }
}

/// Fixed page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Wedding,
    Rituals,
    Feature,
}

/// Video metadata for one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
}

impl VideoRecord {
    pub fn thumbnail_url(&self) -> String {
        links::thumbnail_url(self.id)
    }

    pub fn embed_url(&self) -> String {
        links::embed_url(self.id)
    }

    pub fn watch_url(&self) -> String {
        links::watch_url(self.id)
    }
}

/// Payload handed to the host's native share sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// User intent carried by a clickable element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(String),
    Close,
    Share,
}

impl Action {
    pub const SELECT: &'static str = "select";
    pub const CLOSE: &'static str = "close";
    pub const SHARE: &'static str = "share";

    /// Rebuild an action from the `data-action` / `data-video` markers of a clicked element
    pub fn from_markers(action: Option<&str>, video_id: Option<&str>) -> Option<Self> {
        match (action?, video_id) {
            (Self::SELECT, Some(id)) if !id.is_empty() => Some(Action::Select(id.to_string())),
            (Self::CLOSE, _) => Some(Action::Close),
            (Self::SHARE, _) => Some(Action::Share),
            _ => None,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Action::Select(_) => Self::SELECT,
            Action::Close => Self::CLOSE,
            Action::Share => Self::SHARE,
        }
    }
}

/// DOM operation for reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum DomOperation {
    MountOverlay { video: &'static VideoRecord },
    RetargetOverlay { from: &'static str, video: &'static VideoRecord },
    UnmountOverlay,
    ShowToast,
    HideToast,
}

/// Gallery state as exposed to JavaScript
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySnapshot {
    pub active_video: Option<VideoRecord>,
    pub toast_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast_hide_at: Option<f64>,
}
