use crate::components::{Controller, Icon};
use dioxus::prelude::*;
use tracing::{debug, warn};

mod controls;

use controls::{MuteButton, NextButton, PlayPauseButton, PrevButton};

#[component]
pub fn PlayerBar() -> Element {
    let mut controller = use_context::<Controller>();

    let session = controller.read().session().clone();
    let track = session.current_track().unwrap_or_default().to_string();
    let album = session
        .now_playing
        .as_ref()
        .map(|now| now.album.clone())
        .unwrap_or_default();

    let on_seek_input = move |e: Event<FormData>| {
        let Ok(percent) = e.value().parse::<f64>() else {
            return;
        };
        if let Err(err) = controller.write().seek(percent.clamp(0.0, 100.0) / 100.0) {
            debug!(error = %err, "seek ignored");
        }
    };

    let on_volume_change = move |e: Event<FormData>| match e.value().parse::<f64>() {
        Ok(level) => controller.write().set_volume(level.clamp(0.0, 100.0).round() as u8),
        Err(err) => warn!(value = %e.value(), error = %err, "unreadable volume level"),
    };

    rsx! {
        footer { class: "player-bar",
            div { class: "song-info",
                Icon { name: "music".to_string(), class: "icon".to_string() }
                div {
                    div { class: "song-title", "{track}" }
                    if !album.is_empty() {
                        div { class: "song-album", "{album}" }
                    }
                }
            }

            div { class: "player-controls",
                div { class: "buttons",
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                }
                div { class: "seek",
                    input {
                        id: "seek-bar",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: "{session.seek_fill}",
                        oninput: on_seek_input,
                    }
                    span { class: "time", "{session.time_display}" }
                }
            }

            div { class: "volume",
                MuteButton {}
                input {
                    id: "volume-slider",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: session.volume_level as i32,
                    oninput: on_volume_change,
                }
            }
        }
    }
}
