use crate::storage::memory::StoredRecord;
use crate::types::{MediaKind, MediaRecord};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Newest upload in the local catalogue; older entries step back from here.
const CATALOGUE_EPOCH: OffsetDateTime = datetime!(2024-06-01 18:00 UTC);

const THUMBNAILS: [&str; 6] = [
    "https://images.unsplash.com/photo-1446776709462-d6b525c57bd3?w=640&h=360&fit=crop",
    "https://images.unsplash.com/photo-1614728263952-84ea256f9679?w=640&h=360&fit=crop",
    "https://images.unsplash.com/photo-1502134249126-9f3755a50d78?w=640&h=360&fit=crop",
    "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=640&h=360&fit=crop",
    "https://images.unsplash.com/photo-1534996858221-380b92700493?w=640&h=360&fit=crop",
    "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=640&h=360&fit=crop",
];

/// Long-form entries: (title, channel, views, duration).
const VIDEOS: &[(&str, &str, &str, &str)] = &[
    ("Mars Rover Discovery", "NASA", "1.2M views", "18:42"),
    ("Inside the James Webb Space Telescope", "Space Engineering", "3.4M views", "32:10"),
    ("The Pillars of Creation Explained", "Hubble Stories", "845K views", "12:05"),
    ("How Black Holes Bend Light", "Physics Explained", "2.1M views", "21:37"),
    ("Saturn's Rings Are Disappearing", "Planetary Society", "967K views", "14:58"),
    ("A Tour of the Andromeda Galaxy", "Deep Sky Atlas", "1.5M views", "27:12"),
    ("Why Pluto Is Not a Planet", "Astronomy Simplified", "4.2M views", "09:46"),
    ("Landing on Titan: The Huygens Probe", "ESA", "612K views", "23:20"),
    ("The Search for Exoplanets", "SETI Institute", "733K views", "41:03"),
    ("Neutron Stars in Ten Minutes", "Physics Explained", "1.1M views", "10:01"),
    ("Building the Artemis Rocket", "NASA", "2.8M views", "36:44"),
    ("What Happens When Galaxies Collide", "Deep Sky Atlas", "1.9M views", "19:15"),
    ("Jupiter's Great Red Spot Up Close", "Juno Mission", "502K views", "08:33"),
    ("The Cosmic Microwave Background", "Cosmology Today", "388K views", "29:58"),
    ("Solar Flares and Space Weather", "Heliophysics Lab", "271K views", "16:24"),
    ("Astrophotography for Beginners", "Backyard Stargazer", "654K views", "24:41"),
    ("The Life Cycle of a Star", "Astronomy Simplified", "3.0M views", "13:07"),
    ("Europa's Hidden Ocean", "Planetary Society", "820K views", "17:52"),
    ("Dark Matter: The Invisible Universe", "Cosmology Today", "2.2M views", "38:16"),
    ("Voyager: 45 Years in Deep Space", "NASA", "1.7M views", "44:30"),
    ("The Kuiper Belt and Beyond", "Deep Sky Atlas", "295K views", "20:09"),
    ("How Telescopes Actually Work", "Space Engineering", "1.3M views", "15:48"),
    ("Gravitational Waves Detected", "Physics Explained", "2.6M views", "22:22"),
    ("The Moon's Far Side", "Lunar Reconnaissance", "447K views", "11:11"),
    ("Comets: Visitors from the Oort Cloud", "Hubble Stories", "359K views", "18:00"),
    ("Living on the International Space Station", "ESA", "5.1M views", "34:27"),
    ("Supernova 1987A Revisited", "Cosmology Today", "214K views", "26:35"),
    ("Venus: Earth's Evil Twin", "Planetary Society", "1.0M views", "12:49"),
];

/// Short-form entries: (title, channel, views, duration).
const SHORTS: &[(&str, &str, &str, &str)] = &[
    ("The Pillars of Creation in 30 seconds", "Hubble Stories", "412K views", "0:30"),
    ("Saturn's Majestic Rings", "Planetary Society", "289K views", "0:45"),
    ("Andromeda Is Coming", "Deep Sky Atlas", "1.1M views", "0:58"),
    ("Black Hole Event Horizon", "Physics Explained", "2.0M views", "0:52"),
    ("Mars Sunset from Perseverance", "NASA", "980K views", "0:40"),
    ("ISS Flyover Timelapse", "Backyard Stargazer", "155K views", "0:25"),
    ("A Day on Venus Is Longer Than Its Year", "Astronomy Simplified", "670K views", "0:35"),
    ("Northern Lights from Orbit", "ESA", "1.4M views", "0:59"),
    ("How Big Is the Sun?", "Astronomy Simplified", "3.3M views", "0:42"),
    ("Jupiter's Moons in Motion", "Juno Mission", "233K views", "0:33"),
    ("Meteor Shower Tonight", "Backyard Stargazer", "98K views", "0:20"),
    ("Neutron Star Spin Rate", "Physics Explained", "540K views", "0:28"),
];

/// The catalogue served by the local in-memory store.
pub fn catalogue() -> Vec<StoredRecord> {
    let mut records = build(MediaKind::LongForm, VIDEOS, Duration::hours(9));
    records.extend(build(MediaKind::ShortForm, SHORTS, Duration::hours(5)));
    tracing::debug!("seed.catalogue: records={}", records.len());
    records
}

fn build(
    kind: MediaKind,
    entries: &[(&str, &str, &str, &str)],
    spacing: Duration,
) -> Vec<StoredRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (title, channel, views, duration))| {
            let age = spacing * (i as i32 + 1);
            StoredRecord {
                record: MediaRecord {
                    id: format!("{}-{:03}", kind.as_db(), i + 1),
                    title: title.to_string(),
                    channel_name: channel.to_string(),
                    view_count_label: views.to_string(),
                    upload_time_label: age_label(age),
                    thumbnail_url: THUMBNAILS[i % THUMBNAILS.len()].to_string(),
                    channel_avatar_url: avatar_url(channel),
                    duration_label: duration.to_string(),
                    kind,
                },
                uploaded_at: CATALOGUE_EPOCH - age,
            }
        })
        .collect()
}

fn avatar_url(channel: &str) -> String {
    let seed: String = channel
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("https://api.dicebear.com/7.x/shapes/svg?seed={seed}")
}

fn age_label(age: Duration) -> String {
    let hours = age.whole_hours();
    match hours {
        h if h < 24 => format!("{h} hours ago"),
        h if h < 48 => "1 day ago".to_string(),
        h if h < 24 * 7 => format!("{} days ago", h / 24),
        h if h < 24 * 14 => "1 week ago".to_string(),
        h => format!("{} weeks ago", h / (24 * 7)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_fills_more_than_one_page() {
        let records = catalogue();
        let videos = records.iter().filter(|r| r.record.kind == MediaKind::LongForm).count();
        let shorts = records.iter().filter(|r| r.record.kind == MediaKind::ShortForm).count();
        assert!(videos > MediaKind::LongForm.page_size() * 2);
        assert!(shorts >= MediaKind::ShortForm.page_size());
    }

    #[test]
    fn ids_are_unique() {
        let records = catalogue();
        let ids: HashSet<&str> = records.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn age_labels() {
        assert_eq!(age_label(Duration::hours(5)), "5 hours ago");
        assert_eq!(age_label(Duration::hours(30)), "1 day ago");
        assert_eq!(age_label(Duration::hours(72)), "3 days ago");
        assert_eq!(age_label(Duration::hours(24 * 8)), "1 week ago");
        assert_eq!(age_label(Duration::hours(24 * 21)), "3 weeks ago");
    }
}
