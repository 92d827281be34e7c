//! Normalization of upstream payloads into canonical records.
//!
//! Sources disagree on key names, nesting and value types. Every field is
//! read from a prioritized list of alternate paths and falls back to a
//! documented default, so normalization never fails and never leaves a
//! field unset.

use anitrack_core::{
    placeholder_id, ContentItem, EpisodeItem, Error, Result, StreamSource, SubOrDub,
    DEFAULT_EPISODE_DURATION, PLACEHOLDER_IMAGE,
};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::config::SourceKind;

const CONTENT_ID_KEYS: &[&str] = &["id", "animeId", "mal_id"];
const TITLE_KEYS: &[&str] = &["title", "animeTitle", "name", "title_english"];
const IMAGE_KEYS: &[&str] = &[
    "image",
    "animeImg",
    "img",
    "images.jpg.large_image_url",
    "images.jpg.image_url",
];
const SYNOPSIS_KEYS: &[&str] = &["description", "synopsis"];
const RELEASE_DATE_KEYS: &[&str] = &[
    "releaseDate",
    "releasedDate",
    "aired.from",
    "aired",
    "released",
];
const YEAR_KEYS: &[&str] = &["year", "releasedYear", "aired.prop.from.year"];
const TOTAL_EPISODES_KEYS: &[&str] = &["totalEpisodes", "episodes", "episodeCount"];
const RATING_KEYS: &[&str] = &["rating", "score"];
const VIEW_COUNT_KEYS: &[&str] = &["viewCount", "members", "views"];
const URL_KEYS: &[&str] = &["url", "animeUrl"];

const EPISODE_ID_KEYS: &[&str] = &["episodeId", "id"];
const EPISODE_PARENT_KEYS: &[&str] = &["animeId", "id"];
const EPISODE_NUMBER_KEYS: &[&str] = &["number", "episodeNum", "episode", "episodeNumber"];
const EPISODE_TITLE_KEYS: &[&str] = &["title", "episodeTitle"];
const THUMBNAIL_KEYS: &[&str] = &[
    "image",
    "thumbnail",
    "animeImg",
    "img",
    "images.jpg.image_url",
];
const EPISODE_DATE_KEYS: &[&str] = &["releaseDate", "airDate", "aired"];
const EPISODE_URL_KEYS: &[&str] = &["url", "episodeUrl"];

const STREAM_URL_KEYS: &[&str] = &["url", "file"];
const STREAM_QUALITY_KEYS: &[&str] = &["quality", "label"];

/// Follow a dotted path such as `images.jpg.image_url`.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}

/// Non-empty string, or a number rendered as one.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative integer from a number or a numeric string.
///
/// Fractions are truncated; negatives, NaN and garbage yield `None`.
pub fn coerce_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<u64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    }
}

fn first_text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| lookup(value, k).and_then(as_text))
}

fn first_u64(value: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|k| lookup(value, k).and_then(coerce_u64))
}

/// Text of a string, or the `name` of an object.
fn name_of(value: &Value) -> Option<String> {
    as_text(value).or_else(|| value.get("name").and_then(as_text))
}

fn parse_genres(value: &Value) -> Vec<String> {
    value
        .get("genres")
        .and_then(Value::as_array)
        .map(|genres| genres.iter().filter_map(name_of).collect())
        .unwrap_or_default()
}

fn parse_studio(value: &Value) -> Option<String> {
    value.get("studio").and_then(as_text).or_else(|| {
        value
            .get("studios")
            .and_then(Value::as_array)
            .and_then(|studios| studios.iter().find_map(name_of))
    })
}

/// Reduce timestamps to `YYYY-MM-DD`; anything unrecognized is kept as is.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.date_naive().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.to_string();
    }
    raw.to_string()
}

/// Leading four-digit year of a date-ish string.
fn year_from_date(date: &str) -> Option<i32> {
    let digits = date.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits
        .parse()
        .ok()
        .filter(|year| (1900..=2100).contains(year))
}

/// Normalize upstream airing states onto "ongoing" / "completed".
pub fn normalize_status(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "unknown".to_string();
    };
    let lower = raw.to_lowercase();
    if lower.contains("completed") || lower.contains("finished") {
        "completed".to_string()
    } else if lower.contains("ongoing") || lower.contains("currently airing") {
        "ongoing".to_string()
    } else {
        lower
    }
}

/// First rating-like field that is actually numeric.
///
/// Jikan uses `rating` for the age rating ("PG-13 ..."), so non-numeric
/// values are skipped in favour of `score`.
fn parse_rating(value: &Value) -> String {
    RATING_KEYS
        .iter()
        .filter_map(|k| value.get(*k).and_then(as_text))
        .find(|text| text.parse::<f64>().is_ok_and(f64::is_finite))
        .unwrap_or_else(|| "0".to_string())
}

fn parse_sub_or_dub(value: &Value) -> SubOrDub {
    value
        .get("subOrDub")
        .and_then(Value::as_str)
        .map(SubOrDub::from_tag)
        .unwrap_or_default()
}

fn parse_total_episodes(value: &Value) -> u32 {
    first_u64(value, TOTAL_EPISODES_KEYS)
        .or_else(|| {
            value
                .get("episodes")
                .and_then(Value::as_array)
                .map(|episodes| episodes.len() as u64)
        })
        .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

fn parse_duration(value: &Value) -> String {
    match value.get("duration") {
        Some(Value::Number(n)) => n
            .as_u64()
            .map_or_else(|| DEFAULT_EPISODE_DURATION.to_string(), |m| format!("{m} min")),
        Some(other) => as_text(other).unwrap_or_else(|| DEFAULT_EPISODE_DURATION.to_string()),
        None => DEFAULT_EPISODE_DURATION.to_string(),
    }
}

/// Normalize an anime object. Never fails.
pub fn normalize_content(value: &Value) -> ContentItem {
    let (id, synthetic_id) = first_text(value, CONTENT_ID_KEYS)
        .map_or_else(|| (placeholder_id(), true), |id| (id, false));
    let title = first_text(value, TITLE_KEYS).unwrap_or_else(|| "Unknown Title".to_string());

    let release_date = first_text(value, RELEASE_DATE_KEYS)
        .map(|d| normalize_date(&d))
        .unwrap_or_default();
    let year = first_u64(value, YEAR_KEYS)
        .and_then(|y| i32::try_from(y).ok())
        .or_else(|| year_from_date(&release_date));

    let mut item = ContentItem::new(id, title);
    item.synthetic_id = synthetic_id;
    item.image = first_text(value, IMAGE_KEYS).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    item.studio = parse_studio(value);
    item.year = year;
    item.genres = parse_genres(value);
    item.synopsis = first_text(value, SYNOPSIS_KEYS).unwrap_or_default();
    item.release_date = release_date;
    item.status = normalize_status(value.get("status").and_then(Value::as_str));
    item.total_episodes = parse_total_episodes(value);
    item.rating = parse_rating(value);
    item.view_count = first_u64(value, VIEW_COUNT_KEYS);
    item.content_type = value
        .get("type")
        .and_then(as_text)
        .unwrap_or_else(|| "TV".to_string());
    item.sub_or_dub = parse_sub_or_dub(value);
    item.url = first_text(value, URL_KEYS);

    item.episodes = value
        .get("episodes")
        .and_then(Value::as_array)
        .map(|episodes| {
            episodes
                .iter()
                .map(|ep| normalize_episode(ep, Some(&item.id)))
                .collect()
        })
        .unwrap_or_default();

    // ids derived from a placeholder parent are no more stable than it is
    if item.synthetic_id {
        for episode in &mut item.episodes {
            if episode.id == EpisodeItem::derived_id(&item.id, episode.number) {
                episode.synthetic_id = true;
            }
        }
    }

    item
}

/// Normalize an episode object. Never fails.
///
/// `parent` overrides the anime back-reference; without it the reference is
/// read from the payload and defaults to the episode's own id. With a
/// parent, a missing episode id is derived from the parent and the number.
pub fn normalize_episode(value: &Value, parent: Option<&str>) -> EpisodeItem {
    let number = first_u64(value, EPISODE_NUMBER_KEYS)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1);
    let (id, synthetic_id) = match (first_text(value, EPISODE_ID_KEYS), parent) {
        (Some(id), _) => (id, false),
        (None, Some(parent)) => (EpisodeItem::derived_id(parent, number), false),
        (None, None) => (placeholder_id(), true),
    };
    let anime_id = parent
        .map(ToString::to_string)
        .or_else(|| first_text(value, EPISODE_PARENT_KEYS))
        .unwrap_or_else(|| id.clone());

    let mut episode = EpisodeItem::new(id, anime_id, number);
    episode.synthetic_id = synthetic_id;
    if let Some(title) = first_text(value, EPISODE_TITLE_KEYS) {
        episode.title = title;
    }
    episode.thumbnail =
        first_text(value, THUMBNAIL_KEYS).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    episode.duration = parse_duration(value);
    episode.release_date = first_text(value, EPISODE_DATE_KEYS)
        .map(|d| normalize_date(&d))
        .unwrap_or_default();
    episode.streaming_url = value.get("streamingUrl").and_then(as_text);
    episode.download_url = value.get("downloadUrl").and_then(as_text);
    episode.sub_or_dub = parse_sub_or_dub(value);
    episode.url = first_text(value, EPISODE_URL_KEYS).unwrap_or_default();
    episode
}

/// A stream descriptor, if it carries a playable URL.
pub fn normalize_stream_source(value: &Value) -> Option<StreamSource> {
    let url = first_text(value, STREAM_URL_KEYS)?;
    let mut source = StreamSource::new(url);
    source.quality = first_text(value, STREAM_QUALITY_KEYS);
    source.is_m3u8 = ["isM3U8", "isM3u8"]
        .iter()
        .find_map(|k| value.get(*k).and_then(Value::as_bool))
        .unwrap_or_else(|| source.url.contains(".m3u8"));
    Some(source)
}

/// The results collection of a listing payload.
///
/// Accepts a bare array or an array under one of the kind's envelope keys.
/// An empty collection counts as "no results".
pub fn results_array(payload: &Value, kind: SourceKind) -> Result<&[Value]> {
    let items = payload.as_array().or_else(|| {
        kind.envelope_keys()
            .iter()
            .find_map(|k| payload.get(*k).and_then(Value::as_array))
    });

    match items {
        Some(items) if !items.is_empty() => Ok(items.as_slice()),
        Some(_) => Err(Error::Shape("results collection is empty".into())),
        None => Err(Error::Shape("payload has no results collection".into())),
    }
}

fn looks_like_detail(value: &Value) -> bool {
    value.is_object()
        && (CONTENT_ID_KEYS.iter().any(|k| value.get(*k).and_then(as_text).is_some())
            || TITLE_KEYS.iter().any(|k| value.get(*k).and_then(as_text).is_some()))
}

/// The detail object of a single-item payload.
///
/// Usable when the payload, or an object under one of the kind's envelope
/// keys, carries an id-like or title-like field.
pub fn detail_object(payload: &Value, kind: SourceKind) -> Result<&Value> {
    if looks_like_detail(payload) {
        return Ok(payload);
    }
    kind.envelope_keys()
        .iter()
        .filter_map(|k| payload.get(*k))
        .find(|inner| looks_like_detail(inner))
        .ok_or_else(|| Error::Shape("payload has neither an id nor a title".into()))
}

/// Playable stream descriptors of a watch payload.
pub fn stream_sources(payload: &Value, kind: SourceKind) -> Result<Vec<StreamSource>> {
    let list = payload
        .get("sources")
        .or_else(|| {
            kind.envelope_keys()
                .iter()
                .find_map(|k| payload.get(*k).and_then(|inner| inner.get("sources")))
        })
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Shape("payload has no stream sources".into()))?;

    let sources: Vec<StreamSource> = list.iter().filter_map(normalize_stream_source).collect();
    if sources.is_empty() {
        return Err(Error::Shape("no stream source carries a playable url".into()));
    }
    Ok(sources)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_object_yields_defaults() {
        let item = normalize_content(&json!({}));
        assert!(!item.id.is_empty());
        assert!(item.synthetic_id);
        assert_eq!(item.title, "Unknown Title");
        assert_eq!(item.image, PLACEHOLDER_IMAGE);
        assert_eq!(item.studio, None);
        assert_eq!(item.year, None);
        assert!(item.genres.is_empty());
        assert_eq!(item.synopsis, "");
        assert_eq!(item.release_date, "");
        assert_eq!(item.status, "unknown");
        assert_eq!(item.total_episodes, 0);
        assert_eq!(item.rating, "0");
        assert_eq!(item.view_count, None);
        assert_eq!(item.content_type, "TV");
        assert_eq!(item.sub_or_dub, SubOrDub::Sub);
        assert_eq!(item.url, None);

        let episode = normalize_episode(&json!({}), None);
        assert!(!episode.id.is_empty());
        assert!(episode.synthetic_id);
        assert_eq!(episode.number, 1);
        assert_eq!(episode.title, "Episode 1");
        assert_eq!(episode.duration, "24 min");
        assert_eq!(episode.sub_or_dub, SubOrDub::Sub);
        assert_eq!(episode.anime_id, episode.id);
    }

    #[test]
    fn test_consumet_search_item() {
        let item = normalize_content(&json!({
            "id": "one-piece",
            "title": "One Piece",
            "url": "https://gogoanime.example/category/one-piece",
            "image": "https://img.example/one-piece.png",
            "releaseDate": "1999",
            "subOrDub": "dub"
        }));
        assert_eq!(item.id, "one-piece");
        assert!(!item.synthetic_id);
        assert_eq!(item.release_date, "1999");
        assert_eq!(item.year, Some(1999));
        assert_eq!(item.sub_or_dub, SubOrDub::Dub);
        assert_eq!(
            item.url.as_deref(),
            Some("https://gogoanime.example/category/one-piece")
        );
    }

    #[test]
    fn test_jikan_item() {
        let item = normalize_content(&json!({
            "mal_id": 21,
            "title": "One Piece",
            "images": {"jpg": {"image_url": "https://cdn.example/21.jpg"}},
            "type": "TV",
            "episodes": null,
            "status": "Currently Airing",
            "aired": {"from": "1999-10-20T00:00:00+00:00"},
            "rating": "PG-13 - Teens 13 or older",
            "score": 8.71,
            "members": 2_400_000,
            "synopsis": "Gol D. Roger was known as the Pirate King.",
            "year": null,
            "studios": [{"mal_id": 18, "name": "Toei Animation"}],
            "genres": [{"name": "Action"}, {"name": "Adventure"}]
        }));
        assert_eq!(item.id, "21");
        assert_eq!(item.image, "https://cdn.example/21.jpg");
        assert_eq!(item.status, "ongoing");
        assert_eq!(item.release_date, "1999-10-20");
        assert_eq!(item.year, Some(1999));
        assert_eq!(item.rating, "8.71");
        assert_eq!(item.view_count, Some(2_400_000));
        assert_eq!(item.studio.as_deref(), Some("Toei Animation"));
        assert_eq!(item.genres, vec!["Action", "Adventure"]);
        assert_eq!(item.total_episodes, 0);
    }

    #[test]
    fn test_alternate_keys_and_numeric_strings() {
        let item = normalize_content(&json!({
            "animeId": "naruto",
            "animeTitle": "Naruto",
            "animeImg": "https://img.example/naruto.png",
            "totalEpisodes": "220",
            "rating": "7.9",
            "status": "Completed",
            "genres": ["Action", "", "Comedy"],
            "studio": "Pierrot"
        }));
        assert_eq!(item.id, "naruto");
        assert_eq!(item.title, "Naruto");
        assert_eq!(item.image, "https://img.example/naruto.png");
        assert_eq!(item.total_episodes, 220);
        assert_eq!(item.rating, "7.9");
        assert_eq!(item.status, "completed");
        assert_eq!(item.genres, vec!["Action", "Comedy"]);
        assert_eq!(item.studio.as_deref(), Some("Pierrot"));
    }

    #[test]
    fn test_embedded_episodes() {
        let item = normalize_content(&json!({
            "id": "frieren",
            "title": "Frieren",
            "episodes": [
                {"id": "frieren-episode-1", "number": 1},
                {"id": "frieren-episode-2", "number": "2", "title": "It Didn't Have to Be Magic"}
            ]
        }));
        assert_eq!(item.total_episodes, 2);
        assert_eq!(item.episodes.len(), 2);
        assert_eq!(item.episodes[0].anime_id, "frieren");
        assert_eq!(item.episodes[1].number, 2);
        assert_eq!(item.episodes[1].title, "It Didn't Have to Be Magic");
    }

    #[test]
    fn test_recent_episode_item() {
        let episode = normalize_episode(
            &json!({
                "id": "spy-x-family",
                "episodeId": "spy-x-family-episode-12",
                "episodeNumber": 12,
                "title": "SPY x FAMILY",
                "image": "https://img.example/spy.png",
                "url": "https://gogoanime.example/spy-x-family-episode-12"
            }),
            None,
        );
        assert_eq!(episode.id, "spy-x-family-episode-12");
        assert_eq!(episode.anime_id, "spy-x-family");
        assert_eq!(episode.number, 12);
        assert_eq!(episode.thumbnail, "https://img.example/spy.png");
    }

    #[test]
    fn test_embedded_episode_without_id_derives_from_parent() {
        let item = normalize_content(&json!({
            "id": "x",
            "episodes": [{"number": 1}, {"number": "2"}, {"id": "x-special", "number": 3}]
        }));
        let ids: Vec<_> = item.episodes.iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(ids, ["x-episode-1", "x-episode-2", "x-special"]);
        assert!(item.episodes.iter().all(EpisodeItem::is_persistable));

        let again = normalize_content(&json!({"id": "x", "episodes": [{"number": 1}]}));
        assert_eq!(again.episodes[0], item.episodes[0]);
    }

    #[test]
    fn test_episodes_of_placeholder_parent_are_synthetic() {
        let item = normalize_content(&json!({"title": "Nameless", "episodes": [{"number": 4}]}));
        assert!(item.synthetic_id);
        assert_eq!(item.episodes[0].id, format!("{}-episode-4", item.id));
        assert!(item.episodes[0].synthetic_id);
    }

    #[test]
    fn test_episode_number_fallbacks() {
        assert_eq!(normalize_episode(&json!({"number": "abc"}), None).number, 1);
        assert_eq!(normalize_episode(&json!({"number": 0}), None).number, 1);
        assert_eq!(normalize_episode(&json!({"number": -3}), None).number, 1);
        assert_eq!(normalize_episode(&json!({"episodeNum": " 7 "}), None).number, 7);
        assert_eq!(normalize_episode(&json!({"duration": 23}), None).duration, "23 min");
    }

    #[test]
    fn test_coerce_u64() {
        assert_eq!(coerce_u64(&json!(12)), Some(12));
        assert_eq!(coerce_u64(&json!(12.9)), Some(12));
        assert_eq!(coerce_u64(&json!("12")), Some(12));
        assert_eq!(coerce_u64(&json!("12.5")), Some(12));
        assert_eq!(coerce_u64(&json!(-1)), None);
        assert_eq!(coerce_u64(&json!("NaN")), None);
        assert_eq!(coerce_u64(&json!("twelve")), None);
        assert_eq!(coerce_u64(&json!(null)), None);
    }

    #[test]
    fn test_normalize_status() {
        assert_eq!(normalize_status(None), "unknown");
        assert_eq!(normalize_status(Some("  ")), "unknown");
        assert_eq!(normalize_status(Some("Finished Airing")), "completed");
        assert_eq!(normalize_status(Some("Ongoing")), "ongoing");
        assert_eq!(normalize_status(Some("Not yet aired")), "not yet aired");
    }

    #[test]
    fn test_results_array() {
        let payload = json!({"currentPage": 1, "results": [{"id": "a"}]});
        assert_eq!(results_array(&payload, SourceKind::Consumet).unwrap().len(), 1);

        let payload = json!({"data": [{"mal_id": 1}], "results": []});
        assert_eq!(results_array(&payload, SourceKind::Jikan).unwrap().len(), 1);

        let payload = json!([{"id": "a"}, {"id": "b"}]);
        assert_eq!(results_array(&payload, SourceKind::Generic).unwrap().len(), 2);

        assert!(results_array(&json!({"results": []}), SourceKind::Consumet).is_err());
        assert!(results_array(&json!({"message": "x"}), SourceKind::Consumet).is_err());
    }

    #[test]
    fn test_detail_object() {
        let payload = json!({"id": "one-piece", "title": "One Piece"});
        assert_eq!(
            detail_object(&payload, SourceKind::Consumet).unwrap()["id"],
            "one-piece"
        );

        let payload = json!({"data": {"mal_id": 21, "title": "One Piece"}});
        assert_eq!(detail_object(&payload, SourceKind::Jikan).unwrap()["mal_id"], 21);

        let payload = json!({"title": "Only a title"});
        assert!(detail_object(&payload, SourceKind::Consumet).is_ok());

        assert!(detail_object(&json!({"message": "Not found"}), SourceKind::Jikan).is_err());
        assert!(detail_object(&json!([1, 2]), SourceKind::Generic).is_err());
    }

    #[test]
    fn test_stream_sources() {
        let payload = json!({
            "headers": {"Referer": "https://example.org"},
            "sources": [
                {"url": "https://cdn.example/480.m3u8", "quality": "480p", "isM3U8": true},
                {"quality": "720p"},
                {"file": "https://cdn.example/1080.mp4", "label": "1080p"}
            ]
        });
        let sources = stream_sources(&payload, SourceKind::Consumet).unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources[0].is_m3u8);
        assert_eq!(sources[1].quality.as_deref(), Some("1080p"));
        assert!(!sources[1].is_m3u8);

        assert!(stream_sources(&json!({"sources": []}), SourceKind::Consumet).is_err());
        assert!(
            stream_sources(&json!({"sources": [{"quality": "1080p"}]}), SourceKind::Consumet)
                .is_err()
        );
        assert!(stream_sources(&json!({}), SourceKind::Consumet).is_err());
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2019-04-06T00:00:00+00:00"), "2019-04-06");
        assert_eq!(normalize_date("2019-04-06"), "2019-04-06");
        assert_eq!(normalize_date("Apr 6, 2019"), "Apr 6, 2019");
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            any::<f64>().prop_map(|f| json!(f)),
            ".{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::hash_map(
                    prop_oneof![
                        Just("id".to_string()),
                        Just("title".to_string()),
                        Just("episodes".to_string()),
                        Just("genres".to_string()),
                        Just("number".to_string()),
                        Just("releaseDate".to_string()),
                        "[a-z]{1,6}",
                    ],
                    inner,
                    0..6
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_normalization_is_total(value in arb_json()) {
            let item = normalize_content(&value);
            prop_assert!(!item.id.is_empty());
            prop_assert!(!item.title.is_empty());
            prop_assert!(!item.rating.is_empty());

            let episode = normalize_episode(&value, None);
            prop_assert!(!episode.id.is_empty());
            prop_assert!(!episode.anime_id.is_empty());
            prop_assert!(episode.number >= 1);
            prop_assert!(!episode.duration.is_empty());
        }
    }
}
