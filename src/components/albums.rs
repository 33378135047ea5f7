use crate::api::{Album, MediaServerClient};
use crate::components::{select_album, BrowsingSignal, Controller, Icon};
use crate::player::AlbumSelection;
use dioxus::prelude::*;
use tracing::warn;

/// Album cards for every folder under the songs root that has metadata.
#[component]
pub fn AlbumGrid() -> Element {
    let client = use_context::<MediaServerClient>();
    let controller = use_context::<Controller>();
    let selection = use_context::<Signal<AlbumSelection>>();
    let browsing = use_context::<BrowsingSignal>().0;

    let albums = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.get_albums().await {
                    Ok(albums) => albums,
                    Err(err) => {
                        warn!(error = %err, "failed to list albums");
                        Vec::new()
                    }
                }
            }
        }
    });

    match albums() {
        Some(albums) if albums.is_empty() => rsx! {
            div { class: "empty-state",
                Icon { name: "album".to_string(), class: "icon-lg".to_string() }
                p { "No albums found" }
            }
        },
        Some(albums) => rsx! {
            div { class: "card-container",
                for album in albums {
                    AlbumCard {
                        key: "{album.folder}",
                        album: album.clone(),
                        onclick: {
                            let client = client.clone();
                            let folder = album.folder.clone();
                            move |_| {
                                select_album(
                                    folder.clone(),
                                    client.clone(),
                                    selection,
                                    browsing,
                                    controller,
                                );
                            }
                        },
                    }
                }
            }
        },
        None => rsx! {
            div { class: "empty-state",
                Icon { name: "loader".to_string(), class: "icon-lg".to_string() }
            }
        },
    }
}

#[component]
pub fn AlbumCard(album: Album, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "card",
            "data-folder": "{album.folder}",
            onclick: move |e| onclick.call(e),
            div { class: "card-play",
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
            img {
                class: "card-cover",
                src: "{album.cover_url}",
                alt: "{album.title}",
                loading: "lazy",
            }
            h2 { "{album.title}" }
            p { "{album.description}" }
        }
    }
}
