use crate::api::{load_settings, MediaServerClient, StreamLocator, TrackListing};
use crate::components::{
    create_backend, AlbumGrid, AudioController, Controller, Icon, PlayerBar, Sidebar,
};
use crate::player::{AlbumSelection, PlaybackController, PlaybackState};
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Tracks shown in the library panel. Not necessarily the album that is
/// playing; the controller keeps its own listing for navigation.
#[derive(Clone, Copy)]
pub struct BrowsingSignal(pub Signal<TrackListing>);

#[derive(Clone, Copy)]
pub struct SidebarOpenSignal(pub Signal<bool>);

/// Settings-dependent pieces built once the settings document has resolved.
#[derive(Clone)]
struct Boot {
    client: MediaServerClient,
    locator: StreamLocator,
}

async fn boot() -> Result<Boot, String> {
    let settings = load_settings().await;
    let client = MediaServerClient::new(settings).map_err(|e| e.to_string())?;
    let locator = client.stream_locator().map_err(|e| e.to_string())?;
    Ok(Boot { client, locator })
}

#[component]
pub fn AppRoot() -> Element {
    let boot = use_resource(boot);

    let view = match &*boot.read() {
        Some(Ok(ready)) => rsx! {
            AppShell { client: ready.client.clone(), locator: ready.locator.clone() }
        },
        Some(Err(message)) => rsx! {
            div { class: "boot-error", "Unable to start the player: {message}" }
        },
        None => rsx! {
            div { class: "boot-loading",
                Icon { name: "loader".to_string(), class: "icon-lg".to_string() }
            }
        },
    };
    view
}

#[component]
fn AppShell(client: MediaServerClient, locator: StreamLocator) -> Element {
    let settings = client.settings().clone();
    let backend = use_hook(create_backend);

    let Some(backend) = backend else {
        return rsx! {
            div { class: "boot-error", "This browser has no audio support." }
        };
    };

    let controller: Controller = use_signal(|| {
        PlaybackController::new(backend, locator.clone(), settings.initial_volume)
    });
    let browsing = use_signal(TrackListing::default);
    let selection = use_signal(AlbumSelection::default);
    let sidebar_open = use_signal(|| false);

    use_context_provider(|| client.clone());
    use_context_provider(|| controller);
    use_context_provider(|| selection);
    use_context_provider(|| BrowsingSignal(browsing));
    use_context_provider(|| SidebarOpenSignal(sidebar_open));

    // Show the default album and cue a track before the user picks anything.
    use_future({
        let client = client.clone();
        let mut browsing = browsing;
        let mut selection = selection;
        let mut controller = controller;
        move || {
            let client = client.clone();
            let settings = client.settings().clone();
            let ticket = selection.write().begin();
            async move {
                let listing = match client.get_tracks(&settings.default_album).await {
                    Ok(listing) => listing,
                    Err(err) => {
                        warn!(album = %settings.default_album, error = %err, "failed to list default album");
                        return;
                    }
                };
                // A card picked while this was in flight wins.
                if !selection.peek().is_current(ticket) {
                    return;
                }
                browsing.set(listing.clone());

                if controller.peek().session().state != PlaybackState::NoneLoaded {
                    return;
                }
                let index = if settings.initial_track < listing.len() {
                    settings.initial_track
                } else {
                    debug!(
                        initial = settings.initial_track,
                        len = listing.len(),
                        "initial track out of range, cueing the first"
                    );
                    0
                };
                if let Err(err) = controller.write().load_index(&listing, index, false) {
                    warn!(album = %listing.album, error = %err, "nothing to cue");
                }
            }
        }
    });

    rsx! {
        AudioController {}
        div { class: "app-shell",
            Sidebar {}
            main { class: "main-panel",
                header { class: "page-header",
                    OpenSidebarButton {}
                    h1 { class: "page-title", "Albums" }
                }
                AlbumGrid {}
            }
        }
        PlayerBar {}
    }
}

#[component]
fn OpenSidebarButton() -> Element {
    let mut open = use_context::<SidebarOpenSignal>().0;

    rsx! {
        button {
            class: "hamburger",
            r#type: "button",
            onclick: move |_| open.set(true),
            Icon { name: "menu".to_string(), class: "icon".to_string() }
        }
    }
}

/// Select an album: fetch its tracks, show them and cue the first one paused.
/// A response arriving after a newer selection is dropped.
pub fn select_album(
    folder: String,
    client: MediaServerClient,
    mut selection: Signal<AlbumSelection>,
    mut browsing: Signal<TrackListing>,
    mut controller: Controller,
) {
    let ticket = selection.write().begin();

    spawn(async move {
        let listing = match client.get_tracks(&folder).await {
            Ok(listing) => listing,
            Err(err) => {
                warn!(folder = %folder, error = %err, "failed to list album");
                return;
            }
        };
        if !selection.peek().is_current(ticket) {
            debug!(folder = %folder, "dropping tracks of a superseded selection");
            return;
        }

        browsing.set(listing.clone());
        if listing.is_empty() {
            return;
        }
        if let Err(err) = controller.write().load_index(&listing, 0, false) {
            warn!(folder = %folder, error = %err, "failed to cue album");
        }
    });
}
