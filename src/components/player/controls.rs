use crate::components::{Controller, Icon};
use crate::player::PlaybackState;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<Controller>();
    let session = controller.read().session().clone();

    let on_toggle = move |_| {
        if let Err(err) = controller.write().toggle_play_pause() {
            warn!(error = %err, "play/pause failed");
        }
    };

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "control primary",
            disabled: session.state == PlaybackState::NoneLoaded,
            onclick: on_toggle,
            if session.is_playing() {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let mut controller = use_context::<Controller>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "control",
            onclick: move |_| {
                if let Err(err) = controller.write().previous() {
                    warn!(error = %err, "failed to load previous track");
                }
            },
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let mut controller = use_context::<Controller>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "control",
            onclick: move |_| {
                if let Err(err) = controller.write().next() {
                    warn!(error = %err, "failed to load next track");
                }
            },
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}

/// Volume icon doubles as the mute toggle.
#[component]
pub(super) fn MuteButton() -> Element {
    let mut controller = use_context::<Controller>();
    let muted = controller.read().session().muted;

    rsx! {
        button {
            id: "mute-btn",
            r#type: "button",
            class: "control",
            onclick: move |_| controller.write().toggle_mute(),
            if muted {
                Icon { name: "mute".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "volume".to_string(), class: "icon".to_string() }
            }
        }
    }
}
