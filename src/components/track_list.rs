use crate::components::{BrowsingSignal, Controller, Icon};
use dioxus::prelude::*;
use tracing::warn;

/// Tracks of the album being browsed. Clicking one plays it.
#[component]
pub fn TrackList() -> Element {
    let browsing = use_context::<BrowsingSignal>().0;
    let controller = use_context::<Controller>();
    let listing = browsing();
    let current = controller
        .read()
        .session()
        .now_playing
        .clone();

    rsx! {
        ul { class: "list-items",
            for (index, track) in listing.tracks.iter().enumerate() {
                TrackRow {
                    key: "{listing.album}-{index}",
                    track: track.clone(),
                    album: listing.album.clone(),
                    active: current
                        .as_ref()
                        .map(|now| now.track == *track && now.album == listing.album)
                        .unwrap_or(false),
                    onclick: {
                        let listing = listing.clone();
                        let track = track.clone();
                        let mut controller = controller;
                        move |_| {
                            if let Err(err) = controller.write().load(&listing, &track, true) {
                                warn!(track = %track, error = %err, "failed to play track");
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn TrackRow(
    track: String,
    album: String,
    active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        li {
            class: if active { "track-row active" } else { "track-row" },
            onclick: move |e| onclick.call(e),
            Icon { name: "music".to_string(), class: "icon".to_string() }
            div { class: "info",
                div { class: "track-name", "{track}" }
                div { class: "track-album", "{album}" }
            }
            div { class: "play-now",
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}
