use store::MediaRecord;

/// Records whose title or channel contains `query`, ignoring case.
///
/// `None` means "no filter": the query was empty or whitespace and the full
/// loaded set should be shown.
pub fn filter_records(records: &[MediaRecord], query: &str) -> Option<Vec<MediaRecord>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let hits: Vec<MediaRecord> = records
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle)
                || r.channel_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    tracing::debug!("search.filter_records: query_len={} hits={}", needle.len(), hits.len());
    Some(hits)
}

/// Banner shown above the grid while a filter is active.
pub fn results_banner(query: &str, hits: usize) -> String {
    let query = query.trim();
    if hits > 0 {
        format!("Found {hits} results for \"{query}\"")
    } else {
        format!("No results found for \"{query}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MediaKind;

    fn video(id: &str, title: &str, channel: &str) -> MediaRecord {
        MediaRecord {
            id: id.to_string(),
            title: title.to_string(),
            channel_name: channel.to_string(),
            view_count_label: String::new(),
            upload_time_label: String::new(),
            thumbnail_url: String::new(),
            channel_avatar_url: String::new(),
            duration_label: String::new(),
            kind: MediaKind::LongForm,
        }
    }

    fn loaded() -> Vec<MediaRecord> {
        vec![
            video("1", "Saturn's Majestic Rings", "Planetary Society"),
            video("2", "Mars Rover Discovery", "NASA"),
            video("3", "Andromeda Galaxy Approaching", "Deep Sky Atlas"),
        ]
    }

    #[test]
    fn matches_title_case_insensitively() {
        let hits = filter_records(&loaded(), "mars").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Mars Rover Discovery");
    }

    #[test]
    fn matches_channel_name() {
        let hits = filter_records(&loaded(), "DEEP sky").unwrap();
        assert_eq!(hits.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["3"]);
    }

    #[test]
    fn empty_or_blank_query_clears_filter() {
        assert_eq!(filter_records(&loaded(), ""), None);
        assert_eq!(filter_records(&loaded(), "   \t"), None);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(filter_records(&loaded(), "  rings ").unwrap().len(), 1);
    }

    #[test]
    fn keeps_loaded_order() {
        let hits = filter_records(&loaded(), "a").unwrap();
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn no_match_is_empty_not_cleared() {
        assert_eq!(filter_records(&loaded(), "quasar"), Some(Vec::new()));
    }

    #[test]
    fn banner_text() {
        assert_eq!(results_banner(" mars ", 1), "Found 1 results for \"mars\"");
        assert_eq!(results_banner("quasar", 0), "No results found for \"quasar\"");
    }
}
