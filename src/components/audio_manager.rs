//! Audio Manager - owns the page's `<audio>` element outside the render cycle
//! and forwards its events into the playback controller.

use crate::player::{ActiveBackend, PlaybackController};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::player::HtmlAudioBackend;
#[cfg(not(target_arch = "wasm32"))]
use crate::player::DetachedBackend;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Shared handle to the single playback controller.
pub type Controller = Signal<PlaybackController<ActiveBackend>>;

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "songshelf-audio";

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Stream instead of buffering whole files
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
pub fn create_backend() -> Option<ActiveBackend> {
    get_or_create_audio_element().map(HtmlAudioBackend::new)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create_backend() -> Option<ActiveBackend> {
    Some(DetachedBackend::default())
}

/// Hooks the audio element's events up to the controller.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<Controller>();

    use_hook(move || {
        let Some(audio) = get_or_create_audio_element() else {
            tracing::error!("no audio element available");
            return;
        };

        let runtime = Runtime::current();
        let listen = |handler: fn(&mut PlaybackController<ActiveBackend>)| {
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                handler(&mut *controller.write());
            }) as Box<dyn FnMut()>)
        };

        let time_closure = listen(|player| player.tick());
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        let metadata_closure = listen(|player| player.tick());
        audio.set_onloadedmetadata(Some(metadata_closure.as_ref().unchecked_ref()));
        metadata_closure.forget();

        let play_closure = listen(|player| player.sync_playing(true));
        audio.set_onplay(Some(play_closure.as_ref().unchecked_ref()));
        play_closure.forget();

        let pause_closure = listen(|player| player.sync_playing(false));
        audio.set_onpause(Some(pause_closure.as_ref().unchecked_ref()));
        pause_closure.forget();
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}
