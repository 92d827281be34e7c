//! Built-in records served when every source is down.

use anitrack_core::{ContentItem, EpisodeItem};

/// The static fallback catalog.
pub fn catalog() -> Vec<ContentItem> {
    let mut one_piece = ContentItem::new("one-piece", "One Piece");
    one_piece.image = "https://cdn.myanimelist.net/images/anime/6/73245.jpg".to_string();
    one_piece.studio = Some("Toei Animation".to_string());
    one_piece.year = Some(1999);
    one_piece.genres = vec![
        "Action".to_string(),
        "Adventure".to_string(),
        "Fantasy".to_string(),
    ];
    one_piece.synopsis = "Monkey D. Luffy sets out to find the legendary treasure One Piece \
        and become King of the Pirates."
        .to_string();
    one_piece.release_date = "1999-10-20".to_string();
    one_piece.status = "ongoing".to_string();
    one_piece.total_episodes = 1100;
    one_piece.rating = "8.7".to_string();

    let mut demon_slayer = ContentItem::new(
        "demon-slayer-kimetsu-no-yaiba",
        "Demon Slayer: Kimetsu no Yaiba",
    );
    demon_slayer.image = "https://cdn.myanimelist.net/images/anime/1286/99889.jpg".to_string();
    demon_slayer.studio = Some("ufotable".to_string());
    demon_slayer.year = Some(2019);
    demon_slayer.genres = vec![
        "Action".to_string(),
        "Fantasy".to_string(),
        "Supernatural".to_string(),
    ];
    demon_slayer.synopsis = "Tanjirou Kamado joins the Demon Slayer Corps after his family \
        is slaughtered and his sister turned into a demon."
        .to_string();
    demon_slayer.release_date = "2019-04-06".to_string();
    demon_slayer.status = "completed".to_string();
    demon_slayer.total_episodes = 26;
    demon_slayer.rating = "8.5".to_string();

    vec![one_piece, demon_slayer]
}

/// Catalog entries whose title contains `query`, ignoring case.
pub fn search(query: &str) -> Vec<ContentItem> {
    catalog()
        .into_iter()
        .filter(|item| item.title_matches(query))
        .collect()
}

/// Placeholder episode list for `anime_id`.
pub fn episodes(anime_id: &str) -> Vec<EpisodeItem> {
    vec![EpisodeItem::new(EpisodeItem::derived_id(anime_id, 1), anime_id, 1)]
}

/// Placeholder for the recent-episodes feed.
pub fn recent_episodes() -> Vec<EpisodeItem> {
    episodes("one-piece")
}
