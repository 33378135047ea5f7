use crate::components::{BrowsingSignal, Icon, SidebarOpenSignal, TrackList};
use dioxus::prelude::*;

/// Library panel with the browsed album's tracks. Slides in on narrow screens.
#[component]
pub fn Sidebar() -> Element {
    let mut open = use_context::<SidebarOpenSignal>().0;
    let browsing = use_context::<BrowsingSignal>().0;
    let album = browsing().album;

    rsx! {
        aside { class: if open() { "left open" } else { "left" },
            div { class: "library-header",
                Icon { name: "music".to_string(), class: "icon".to_string() }
                h2 { "Your Library" }
                button {
                    class: "close",
                    r#type: "button",
                    onclick: move |_| open.set(false),
                    Icon { name: "x".to_string(), class: "icon".to_string() }
                }
            }
            if !album.is_empty() {
                p { class: "library-album", "{album}" }
            }
            TrackList {}
        }
    }
}
