use crate::catalog::{Catalog, Section};
use crate::types::{Action, SectionId, VideoRecord};
use crate::view::{el, Element, Node};

pub const ROOT_CLASS: &str = "archive-app";
pub const CARD_CLASS: &str = "archive-card";
pub const OVERLAY_CLASS: &str = "archive-player";
pub const TOAST_CLASS: &str = "archive-toast";
pub const TOAST_VISIBLE_CLASS: &str = "is-visible";
pub const TOAST_MESSAGE: &str = "Link copied to clipboard";

/// Whole page minus the overlay, which is mounted on demand
pub fn page(catalog: &Catalog) -> Element {
    el("div")
        .class(ROOT_CLASS)
        .child(toast())
        .child(header())
        .child(
            el("main")
                .class("archive-main")
                .child(hero())
                .children(catalog.sections().iter().map(|s| Node::from(section(s))))
                .child(feature_panel(catalog.feature())),
        )
}

pub fn header() -> Element {
    el("header").class("archive-header").child(
        el("div")
            .class("archive-header-inner")
            .child(
                el("div")
                    .class("brand")
                    .child(el("div").class("brand-badge").attr("aria-hidden", "true").text("🎥"))
                    .child(
                        el("div")
                            .child(el("h1").class("brand-title").text("The Digital Archive"))
                            .child(el("p").class("brand-subtitle").text("Established 2026 •")),
                    ),
            )
            .child(
                el("button")
                    .class("pill-button")
                    .attr("type", "button")
                    .child(el("span").class("pill-icon").attr("aria-hidden", "true").text("♥"))
                    .text("Memories"),
            ),
    )
}

pub fn hero() -> Element {
    el("section").class("hero").child(
        el("div")
            .class("hero-inner")
            .child(
                el("div")
                    .class("hero-pill")
                    .child(el("span").attr("aria-hidden", "true").text("✦ "))
                    .text("Restoration Project v2.0"),
            )
            .child(
                el("h2")
                    .class("hero-title")
                    .text("Restoring the ")
                    .child(el("br"))
                    .child(el("span").class("hero-accent").text("forgotten")),
            ),
    )
}

pub fn section(section: &Section) -> Element {
    el("section")
        .class("archive-section")
        .attr("data-section", section_key(section))
        .child(
            el("div")
                .class("section-heading")
                .child(el("h3").class("section-title").text(section.title))
                .child(el("p").class("section-subtitle").text(section.subtitle)),
        )
        .child(
            el("div")
                .class("card-grid")
                .children(section.records.iter().map(|r| Node::from(card(r)))),
        )
}

fn section_key(section: &Section) -> &'static str {
    match section.id {
        SectionId::Wedding => "wedding",
        SectionId::Rituals => "rituals",
        SectionId::Feature => "feature",
    }
}

/// One clickable card per record
pub fn card(record: &VideoRecord) -> Element {
    let mut thumb = el("div").class("card-thumb").child(
        el("img")
            .attr("src", record.thumbnail_url())
            .attr("alt", record.title)
            .attr("loading", "lazy"),
    );
    thumb = thumb.child(el("div").class("card-play").attr("aria-hidden", "true").text("▶"));
    if let Some(duration) = record.duration {
        thumb = thumb.child(el("span").class("duration-badge").text(format!("⏱ {duration}")));
    }

    let mut body = el("div").class("card-body");
    if let Some(date) = record.date {
        body = body.child(el("span").class("date-label").text(date));
    }
    body = body
        .child(el("h3").class("card-title").text(record.title))
        .child(el("p").class("card-desc clamp-2").text(format!("\"{}\"", record.description)))
        .child(el("span").class("card-cta").text("Play Archive ›"));

    el("div")
        .class(CARD_CLASS)
        .attr("role", "button")
        .attr("tabindex", "0")
        .on_click(&Action::Select(record.id.to_string()))
        .child(thumb)
        .child(body)
}

/// Promotional panel for the full-length feature
pub fn feature_panel(record: &VideoRecord) -> Element {
    let select = Action::Select(record.id.to_string());

    el("section").class("feature-panel").child(
        el("div")
            .class("feature-inner")
            .child(
                el("div")
                    .class("feature-copy")
                    .child(el("div").class("feature-label").text("🎞 Feature Presentation"))
                    .child(
                        el("h3")
                            .class("feature-title")
                            .text("The Complete ")
                            .child(el("br"))
                            .text("Merged Archive"),
                    )
                    .child(
                        el("button")
                            .class("feature-button")
                            .attr("type", "button")
                            .on_click(&select)
                            .text("▶ Watch 3.5 Hour Movie"),
                    ),
            )
            .child(
                el("div")
                    .class("feature-thumb")
                    .on_click(&select)
                    .child(el("img").attr("src", record.thumbnail_url()).attr("alt", "Full Movie"))
                    .child(el("div").class("feature-play").attr("aria-hidden", "true").text("▶")),
            ),
    )
}

/// Modal player for the active record
pub fn overlay(record: &VideoRecord) -> Element {
    let meta = el("div")
        .class("player-meta")
        .child(el("span").text(record.date.unwrap_or_default()))
        .child(el("span").class("meta-dot").attr("aria-hidden", "true"))
        .child(el("span").text(record.duration.unwrap_or_default()));

    el("div")
        .class(OVERLAY_CLASS)
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("data-playing", record.id)
        .child(
            el("div")
                .class("player-frame")
                .child(
                    el("div")
                        .class("player-header")
                        .child(
                            el("div")
                                .child(el("span").class("now-playing").text("Now Playing"))
                                .child(el("h4").class("player-title").text(record.title)),
                        )
                        .child(
                            el("button")
                                .class("player-close")
                                .attr("type", "button")
                                .attr("aria-label", "Close player")
                                .on_click(&Action::Close)
                                .text("✕"),
                        ),
                )
                .child(
                    el("div").class("player-embed").child(
                        el("iframe")
                            .attr("src", record.embed_url())
                            .attr("title", record.title)
                            .attr("allow", "autoplay; fullscreen")
                            .attr("allowfullscreen", ""),
                    ),
                )
                .child(
                    el("div")
                        .class("player-footer")
                        .child(
                            el("div")
                                .class("player-info")
                                .child(el("p").class("player-desc").text(format!("\"{}\"", record.description)))
                                .child(meta),
                        )
                        .child(
                            el("div")
                                .class("player-actions")
                                .child(
                                    el("a")
                                        .class("watch-external")
                                        .attr("href", record.watch_url())
                                        .attr("target", "_blank")
                                        .attr("rel", "noopener noreferrer")
                                        .text("YouTube ↗"),
                                )
                                .child(
                                    el("button")
                                        .class("share-button")
                                        .attr("type", "button")
                                        .on_click(&Action::Share)
                                        .text("Share"),
                                ),
                        ),
                ),
        )
}

/// Toast is always in the tree; visibility is a class toggle
pub fn toast() -> Element {
    el("div")
        .class(TOAST_CLASS)
        .attr("role", "status")
        .attr("aria-live", "polite")
        .child(el("span").class("toast-check").attr("aria-hidden", "true").text("✓"))
        .child(el("span").class("toast-text").text(TOAST_MESSAGE))
}
