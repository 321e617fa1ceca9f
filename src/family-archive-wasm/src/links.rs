//! URL templates for the external video host

/// Still image shown on a card
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// Embedded player: autoplay on, no related-content suggestions
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0&modestbranding=1")
}

/// Canonical watch page, used for the external link and for sharing
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}
