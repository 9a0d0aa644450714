use crate::api::models::Fighter;
use clap::ValueEnum;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Bucket for fighters with no age on record.
pub const UNKNOWN_AGE: &str = "Unknown";
/// Bucket for fighters with a blank or unmapped profile field.
pub const OTHERS: &str = "Others";

/// Chart caps carried over from the original presentation.
pub const MAX_COUNTRY_GROUPS: usize = 20;
pub const MAX_GYM_GROUPS: usize = 10;

/// Canonical names for fighting-style variants. Matched against the whole
/// trimmed style string, case-insensitively.
const STYLE_SYNONYMS: [(&str, &str); 7] = [
    ("Wrestler", "Wrestling"),
    ("Brazilian Jiu-Jitsu", "Jiu-Jitsu"),
    ("Boxer", "Boxing"),
    ("Kickboxer", "Kickboxing"),
    ("Striker", "Striking"),
    ("Brawler", "Brawl"),
    ("Grappler", "Grappling"),
];

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Age,
    Background,
    Country,
    Gym,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Count,
    WinRate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupStat {
    pub key: String,
    pub count: usize,
    pub average_win_rate: f64,
}

impl GroupStat {
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Count => self.count as f64,
            Metric::WinRate => self.average_win_rate,
        }
    }
}

impl Dimension {
    /// The bucket label a fighter falls into for this dimension.
    pub fn key_for(&self, fighter: &Fighter) -> String {
        match self {
            Dimension::Age => non_blank(&fighter.age, UNKNOWN_AGE),
            Dimension::Background => normalize_style(&fighter.fighting_style),
            Dimension::Country => extract_country(&fighter.place_of_birth),
            Dimension::Gym => non_blank(&fighter.trains_at, OTHERS),
        }
    }

    pub fn sentinel(&self) -> &'static str {
        match self {
            Dimension::Age => UNKNOWN_AGE,
            _ => OTHERS,
        }
    }

    fn cap(&self) -> Option<usize> {
        match self {
            Dimension::Country => Some(MAX_COUNTRY_GROUPS),
            Dimension::Gym => Some(MAX_GYM_GROUPS),
            _ => None,
        }
    }
}

fn non_blank(value: &str, sentinel: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        sentinel.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Maps fighting-style variants onto a canonical label; blank styles fall
/// into the "Others" bucket, unmapped ones pass through trimmed.
pub fn normalize_style(style: &str) -> String {
    let trimmed = style.trim();
    if trimmed.is_empty() {
        return OTHERS.to_string();
    }
    for (variant, canonical) in STYLE_SYNONYMS {
        if trimmed.eq_ignore_ascii_case(variant) {
            return canonical.to_string();
        }
    }
    trimmed.to_string()
}

/// Takes the country out of a "City, Region, Country" birthplace string:
/// the last comma-separated segment, or the whole string when there is no
/// comma. Blank input goes to "Others".
pub fn extract_country(place_of_birth: &str) -> String {
    let trimmed = place_of_birth.trim();
    if trimmed.is_empty() {
        return OTHERS.to_string();
    }
    let segment = trimmed.rsplit(',').next().unwrap_or(trimmed);
    segment.trim().to_string()
}

/// Groups the fighter list along one dimension and computes the per-bucket
/// count and average win rate in a single pass.
///
/// Ordering: ages sort numerically ascending; every other dimension sorts
/// by the chosen metric descending. The unknown/"Others" bucket is always
/// last regardless of its value. Country and gym results are capped at the
/// top 20 and top 10 buckets.
pub fn aggregate(fighters: &[Fighter], dimension: Dimension, metric: Metric) -> Vec<GroupStat> {
    let mut accumulators: HashMap<String, (usize, f64)> = HashMap::new();

    for fighter in fighters {
        let key = dimension.key_for(fighter);
        let entry = accumulators.entry(key).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += fighter.win_rate();
    }

    let mut stats: Vec<GroupStat> = accumulators
        .into_iter()
        .map(|(key, (count, rate_sum))| GroupStat {
            key,
            count,
            average_win_rate: if count > 0 { rate_sum / count as f64 } else { 0.0 },
        })
        .collect();

    let sentinel = dimension.sentinel();
    stats.sort_by(|a, b| {
        match (a.key == sentinel, b.key == sentinel) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }
        let primary = match dimension {
            Dimension::Age => numeric_age(&a.key).cmp(&numeric_age(&b.key)),
            _ => b
                .metric_value(metric)
                .partial_cmp(&a.metric_value(metric))
                .unwrap_or(Ordering::Equal),
        };
        // Key as tie-break so equal buckets come out in a stable order.
        primary.then_with(|| a.key.cmp(&b.key))
    });

    if let Some(cap) = dimension.cap() {
        stats.truncate(cap);
    }

    stats
}

fn numeric_age(key: &str) -> u32 {
    key.parse().unwrap_or(u32::MAX)
}
