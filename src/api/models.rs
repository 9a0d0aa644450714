use serde::Deserialize;

/// One upstream fighter record, taken verbatim from the Octagon API.
/// Everything arrives as strings; the optional profile fields default to
/// empty and are mapped to sentinel buckets at aggregation time.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    /// Upstream map key, stamped in by the client after decoding.
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub wins: String,
    #[serde(default)]
    pub losses: String,
    #[serde(default)]
    pub draws: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub fighting_style: String,
    #[serde(default)]
    pub place_of_birth: String,
    #[serde(default)]
    pub trains_at: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub reach: String,
    #[serde(default)]
    pub leg_reach: String,
    #[serde(default)]
    pub octagon_debut: String,
}

impl Fighter {
    /// Wins over decided bouts, 0 when there are none. Unparsable record
    /// strings count as zero rather than erroring out.
    pub fn win_rate(&self) -> f64 {
        let wins = self.wins.trim().parse::<u32>().unwrap_or(0);
        let losses = self.losses.trim().parse::<u32>().unwrap_or(0);
        let decided = wins + losses;
        if decided == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(decided)
        }
    }

    /// URL slug for the detail view: lowercase name, spaces replaced by `-`.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

// Tattoo trivia entry from the companion service
#[derive(Debug, Deserialize, Clone)]
pub struct Tattoo {
    pub id: i64,
    pub name: String,
    pub kanji: String,
    #[serde(default)]
    pub image_before: String,
    #[serde(default)]
    pub image_after: String,
}

/// Locates a fighter by its detail-view slug.
pub fn find_by_slug<'a>(fighters: &'a [Fighter], slug: &str) -> Option<&'a Fighter> {
    fighters.iter().find(|f| f.slug() == slug)
}
