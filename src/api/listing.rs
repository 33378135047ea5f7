// Directory-listing scraping. The file server only speaks HTML, so everything
// here works from anchor `href` values resolved against the listing's own URL.
use url::Url;

/// Extracts the `href` of every anchor tag, in document order.
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    let lower = html.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut hrefs = Vec::new();
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find("<a") {
        let tag_start = cursor + found + 2;
        cursor = tag_start;
        match bytes.get(tag_start) {
            Some(b) if b.is_ascii_whitespace() => {}
            _ => continue,
        }
        let Some(tag_len) = lower[tag_start..].find('>') else {
            break;
        };
        let tag_end = tag_start + tag_len;
        if let Some(href) = href_attribute(&html[tag_start..tag_end]) {
            hrefs.push(unescape_entities(&href));
        }
        cursor = tag_end;
    }

    hrefs
}

fn href_attribute(tag: &str) -> Option<String> {
    let chars: Vec<char> = tag.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && (chars[i].is_whitespace() || chars[i] == '/') {
            i += 1;
        }
        let name_start = i;
        while i < chars.len() && !chars[i].is_whitespace() && chars[i] != '=' && chars[i] != '/'
        {
            i += 1;
        }
        let name: String = chars[name_start..i].iter().collect();
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() || chars[i] != '=' {
            if name.is_empty() {
                i += 1;
            }
            continue;
        }
        i += 1;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }

        let value = match chars.get(i) {
            Some(&quote) if quote == '"' || quote == '\'' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && chars[end] != quote {
                    end += 1;
                }
                i = end + 1;
                chars[start..end.min(chars.len())].iter().collect::<String>()
            }
            _ => {
                let start = i;
                while i < chars.len() && !chars[i].is_whitespace() {
                    i += 1;
                }
                chars[start..i].iter().collect::<String>()
            }
        };

        if name.eq_ignore_ascii_case("href") {
            return Some(value);
        }
    }

    None
}

fn unescape_entities(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Anchor targets resolved to absolute URLs. Unresolvable hrefs are dropped.
pub fn resolve_links(base: &Url, html: &str) -> Vec<Url> {
    anchor_hrefs(html)
        .iter()
        .filter_map(|href| base.join(href).ok())
        .collect()
}

/// Path of `link` relative to `dir`, when `link` lives on the same origin
/// below `dir`.
fn relative_path<'a>(dir: &Url, link: &'a Url) -> Option<&'a str> {
    if link.origin() != dir.origin() {
        return None;
    }
    link.path().strip_prefix(dir.path())
}

/// Album folder names linked from the songs root listing: direct sub-folders
/// only, decoded, first occurrence wins.
pub fn album_folders(root: &Url, html: &str) -> Vec<String> {
    let mut folders: Vec<String> = Vec::new();

    for link in resolve_links(root, html) {
        let Some(rest) = relative_path(root, &link) else {
            continue;
        };
        let Some(segment) = rest.strip_suffix('/') else {
            continue;
        };
        if segment.is_empty() || segment.contains('/') {
            continue;
        }
        let Ok(folder) = urlencoding::decode(segment) else {
            continue;
        };
        let folder = folder.into_owned();
        if !folders.contains(&folder) {
            folders.push(folder);
        }
    }

    folders
}

/// Track names linked from an album listing, in listing order. Only files
/// directly inside the album whose decoded name ends in `.{extension}` count;
/// the extension is stripped once.
pub fn track_names(album: &Url, html: &str, extension: &str) -> Vec<String> {
    let suffix = format!(".{extension}");

    resolve_links(album, html)
        .iter()
        .filter_map(|link| {
            let rest = relative_path(album, link)?;
            if rest.is_empty() || rest.contains('/') {
                return None;
            }
            let decoded = urlencoding::decode(rest).ok()?;
            let name = decoded.strip_suffix(suffix.as_str())?;
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn url(value: &str) -> Url {
        Url::parse(value).unwrap()
    }

    const ROOT_LISTING: &str = r#"<!DOCTYPE HTML>
<html><head><title>Directory listing for /songs/</title></head>
<body><h1>Directory listing for /songs/</h1><hr><ul>
<li><a href="../">../</a></li>
<li><a href="Diljit/">Diljit/</a></li>
<li><A HREF='/songs/Night%20Drive/' class="dir">Night Drive/</A></li>
<li><a href="readme.txt">readme.txt</a></li>
<li><a href="Diljit/">Diljit/ (again)</a></li>
<li><a href="Diljit/extras/">nested</a></li>
<li><a href="http://elsewhere.example/songs/Foreign/">foreign</a></li>
</ul><hr></body></html>"#;

    #[test]
    fn extracts_hrefs_in_document_order() {
        let hrefs = anchor_hrefs(
            r#"<p><a href="one">1</a><abbr>x</abbr><a class=x href=two>2</a><a name="n">no</a></p>"#,
        );
        assert_eq!(hrefs, vec!["one", "two"]);
    }

    #[test]
    fn href_entities_are_unescaped() {
        let hrefs = anchor_hrefs(r#"<a href="Rock%20&amp;%20Roll.opus">x</a>"#);
        assert_eq!(hrefs, vec!["Rock%20&%20Roll.opus"]);
    }

    #[test]
    fn album_folders_are_direct_children_of_root() {
        let folders = album_folders(&url("http://localhost:8000/songs/"), ROOT_LISTING);
        assert_eq!(folders, vec!["Diljit", "Night Drive"]);
    }

    #[test]
    fn track_names_keep_server_order_and_skip_other_files() {
        let html = r#"<ul>
<li><a href="Zebra.opus">Zebra.opus</a></li>
<li><a href="cover.jpg">cover.jpg</a></li>
<li><a href="info.json">info.json</a></li>
<li><a href="Alpha%20Beta.opus">Alpha Beta.opus</a></li>
<li><a href="notes.opus.txt">notes.opus.txt</a></li>
<li><a href="/songs/Diljit/G.O.A.T.opus">G.O.A.T.opus</a></li>
<li><a href="/songs/Other/Stray.opus">Stray.opus</a></li>
<li><a href=".opus">.opus</a></li>
</ul>"#;
        let names = track_names(&url("http://localhost:8000/songs/Diljit/"), html, "opus");
        assert_eq!(names, vec!["Zebra", "Alpha Beta", "G.O.A.T"]);
    }

    #[test]
    fn extension_is_stripped_exactly_once() {
        let html = r#"<a href="Loop.opus.opus">Loop</a>"#;
        let names = track_names(&url("http://h/songs/A/"), html, "opus");
        assert_eq!(names, vec!["Loop.opus"]);
    }

    #[test]
    fn extension_is_checked_after_decoding() {
        let html = r#"<a href="Encoded%2Eopus">x</a><a href="Upper.OPUS">y</a>"#;
        let names = track_names(&url("http://h/songs/A/"), html, "opus");
        assert_eq!(names, vec!["Encoded"]);
    }

    proptest! {
        #[test]
        fn listed_tracks_round_trip_through_listing(
            names in proptest::collection::vec("[A-Za-z0-9 ()',&._-]{1,16}", 0..8),
        ) {
            let mut html = String::from("<ul><li><a href=\"../\">../</a></li>");
            for name in &names {
                html.push_str(&format!(
                    "<li><a href=\"{}.opus\">{}</a></li><li><a href=\"{}.jpg\">art</a></li>",
                    urlencoding::encode(name),
                    name,
                    urlencoding::encode(name),
                ));
            }
            html.push_str("</ul>");

            let parsed = track_names(&url("http://h/songs/Mix/"), &html, "opus");
            prop_assert_eq!(parsed, names);
        }
    }
}
