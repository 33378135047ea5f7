use dioxus::prelude::*;

/// Outline shapes are stroked, solid ones filled.
#[derive(Clone, Copy, PartialEq)]
enum Style {
    Outline,
    Solid,
}

/// Path data on a 24x24 grid.
fn glyph(name: &str) -> (Style, &'static [&'static str]) {
    match name {
        "album" => (
            Style::Outline,
            &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M12 7a5 5 0 1 0 0 10a5 5 0 1 0 0-10z",
                "M12 11a1 1 0 1 0 0 2a1 1 0 1 0 0-2z",
            ],
        ),
        "play" => (Style::Solid, &["M6 3l14 9l-14 9z"]),
        "pause" => (Style::Solid, &["M6 4h4v16H6z", "M14 4h4v16h-4z"]),
        "prev" => (Style::Solid, &["M19 20L9 12l10-8z", "M4 5h2v14H4z"]),
        "next" => (Style::Solid, &["M5 4l10 8l-10 8z", "M18 5h2v14h-2z"]),
        "volume" => (
            Style::Outline,
            &[
                "M11 5L6 9H2v6h4l5 4z",
                "M15.5 8.5a5 5 0 0 1 0 7",
                "M19 5a10 10 0 0 1 0 14",
            ],
        ),
        "mute" => (Style::Outline, &["M11 5L6 9H2v6h4l5 4z", "M23 9l-6 6", "M17 9l6 6"]),
        "music" => (
            Style::Outline,
            &[
                "M9 18V5l12-2v13",
                "M6 15a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
                "M18 13a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            ],
        ),
        "menu" => (Style::Outline, &["M3 6h18", "M3 12h18", "M3 18h18"]),
        "x" => (Style::Outline, &["M18 6L6 18", "M6 6l12 12"]),
        "loader" => (Style::Outline, &["M12 2a10 10 0 0 1 10 10"]),
        _ => (Style::Outline, &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z"]),
    }
}

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let (style, paths) = glyph(&name);
    let class = if name == "loader" {
        format!("{class} spin")
    } else {
        class
    };
    let (fill, stroke) = match style {
        Style::Solid => ("currentColor", "none"),
        Style::Outline => ("none", "currentColor"),
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "{stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths.iter() {
                path { d: *d }
            }
        }
    }
}
