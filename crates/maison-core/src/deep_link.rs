//! Room pre-selection from a URL query string, e.g. `?room=garden-suite`.

use maison_domain::{RoomCatalog, RoomCatalogEntry};
use percent_encoding::percent_decode_str;

const ROOM_KEYS: [&str; 2] = ["room", "roomid"];

/// Extracts the requested room key from a query string or full URL.
///
/// The first non-empty `room`/`roomId` parameter wins. Values are
/// percent-decoded with `+` read as a space.
pub fn room_from_query(query: &str) -> Option<String> {
    let query = query.split('#').next().unwrap_or_default();
    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None => query,
    };

    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            if !ROOM_KEYS.contains(&key.to_ascii_lowercase().as_str()) {
                return None;
            }
            let value = decode_component(value)?;
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
        .next()
}

/// Resolves the deep-linked room against the catalog by id or slug.
pub fn resolve_deep_link<'a>(catalog: &'a RoomCatalog, query: &str) -> Option<&'a RoomCatalogEntry> {
    room_from_query(query).and_then(|key| catalog.resolve(&key))
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|value| value.into_owned())
}
