/// An item of the vertical shorts feed. Counters and the liked flag are
/// view-local and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortClip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub hashtags: Vec<String>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub is_liked: bool,
}

impl ShortClip {
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }

    /// Text copied to the clipboard when the platform cannot share.
    pub fn share_text(&self, page_url: &str) -> String {
        format!("{} - {}", self.title, page_url)
    }
}

/// Flip the like on the clip with `id`; other clips are untouched.
pub fn toggle_like(clips: &mut [ShortClip], id: &str) {
    if let Some(clip) = clips.iter_mut().find(|c| c.id == id) {
        clip.toggle_like();
    }
}

/// Compact counter label: 12400 -> "12.4K", 2_000_000 -> "2.0M".
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

fn clip(
    id: &str,
    title: &str,
    description: &str,
    image_url: &str,
    hashtags: &[&str],
    (likes, comments, shares): (u64, u64, u64),
    is_liked: bool,
) -> ShortClip {
    ShortClip {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        hashtags: hashtags.iter().map(|t| t.to_string()).collect(),
        likes,
        comments,
        shares,
        is_liked,
    }
}

/// Fixed catalogue the shorts view starts from.
pub fn catalogue() -> Vec<ShortClip> {
    vec![
        clip(
            "1",
            "The Pillars of Creation - Eagle Nebula",
            "Witness the birthplace of stars in this stunning Hubble image of the Eagle Nebula's iconic pillars.",
            "https://images.unsplash.com/photo-1446776709462-d6b525c57bd3?w=400&h=800&fit=crop",
            &["#astronomy", "#hubble", "#nebula", "#space", "#nasa"],
            (12_400, 890, 340),
            false,
        ),
        clip(
            "2",
            "Saturn's Majestic Rings",
            "Explore the incredible ring system of Saturn captured by the Cassini spacecraft.",
            "https://images.unsplash.com/photo-1614728263952-84ea256f9679?w=400&h=800&fit=crop",
            &["#saturn", "#cassini", "#rings", "#planets", "#space"],
            (8_900, 456, 234),
            true,
        ),
        clip(
            "3",
            "Andromeda Galaxy Approaching",
            "Did you know the Andromeda Galaxy is racing toward us at 250,000 mph? Don't worry, collision is in 4.5 billion years!",
            "https://images.unsplash.com/photo-1502134249126-9f3755a50d78?w=400&h=800&fit=crop",
            &["#andromeda", "#galaxy", "#milkyway", "#collision", "#future"],
            (15_600, 1_200, 567),
            false,
        ),
        clip(
            "4",
            "Black Hole Event Horizon",
            "Journey to the edge of a black hole where time stands still and space warps beyond imagination.",
            "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=400&h=800&fit=crop",
            &["#blackhole", "#eventhorizon", "#physics", "#spacetime", "#science"],
            (20_100, 1_580, 890),
            false,
        ),
        clip(
            "5",
            "Mars Rover Discovery",
            "Latest images from Perseverance reveal ancient river beds on Mars, evidence of water flowing billions of years ago.",
            "https://images.unsplash.com/photo-1534996858221-380b92700493?w=400&h=800&fit=crop",
            &["#mars", "#perseverance", "#rover", "#water", "#discovery"],
            (9_800, 567, 289),
            true,
        ),
    ]
}
