use crate::models::{DiscoveryFilter, EngagementTier, Facets, FollowerTier, InfluencerProfile};

/// Check if a profile passes every constraint of a discovery filter
///
/// This is Stage 1 of the matching pipeline and the whole of catalog
/// discovery. String constraints are case-insensitive substring matches;
/// an empty value or `"all"` means no constraint.
#[inline]
pub fn matches_filter(profile: &InfluencerProfile, filter: &DiscoveryFilter) -> bool {
    if let Some(term) = active(&filter.search) {
        let hit = [
            profile.name.as_str(),
            profile.username.as_str(),
            profile.category.as_str(),
            profile.location.as_str(),
        ]
        .iter()
        .any(|field| contains_ignore_case(field, &term));

        if !hit {
            return false;
        }
    }

    if let Some(category) = active(&filter.category) {
        if !contains_ignore_case(&profile.category, &category) {
            return false;
        }
    }

    if let Some(platform) = filter.platform {
        if profile.platform != platform {
            return false;
        }
    }

    if let Some(tier) = filter.followers {
        if !matches_follower_tier(profile.followers, tier) {
            return false;
        }
    }

    if let Some(tier) = filter.engagement {
        if !matches_engagement_tier(profile.engagement_rate, tier) {
            return false;
        }
    }

    if let Some(location) = active(&filter.location) {
        if !contains_ignore_case(&profile.location, &location) {
            return false;
        }
    }

    true
}

/// Follower bands: micro 10k-100k, mid above 100k up to 500k, macro above 500k
#[inline]
pub fn matches_follower_tier(followers: u64, tier: FollowerTier) -> bool {
    match tier {
        FollowerTier::Micro => (10_000..=100_000).contains(&followers),
        FollowerTier::Mid => followers > 100_000 && followers <= 500_000,
        FollowerTier::Macro => followers > 500_000,
    }
}

/// Engagement bands: high from 7%, medium from 4% below 7%, low below 4%
#[inline]
pub fn matches_engagement_tier(engagement_rate: f64, tier: EngagementTier) -> bool {
    match tier {
        EngagementTier::High => engagement_rate >= 7.0,
        EngagementTier::Medium => (4.0..7.0).contains(&engagement_rate),
        EngagementTier::Low => engagement_rate < 4.0,
    }
}

impl Facets {
    /// Distinct categories, platforms and regions, in first-seen order
    ///
    /// The region of a location is the part after its first comma
    /// ("Miami, FL" -> "FL"), or the whole location when there is none.
    pub fn collect<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = &'a InfluencerProfile>,
    {
        let mut facets = Facets::default();

        for profile in profiles {
            if !facets.categories.contains(&profile.category) {
                facets.categories.push(profile.category.clone());
            }
            if !facets.platforms.contains(&profile.platform) {
                facets.platforms.push(profile.platform);
            }

            let region = region_of(&profile.location);
            if !facets.locations.iter().any(|l| l == region) {
                facets.locations.push(region.to_string());
            }
        }

        facets
    }
}

fn region_of(location: &str) -> &str {
    match location.split_once(',') {
        Some((_, rest)) => {
            let region = rest.split(',').next().unwrap_or("").trim();
            if region.is_empty() { location } else { region }
        }
        None => location,
    }
}

/// Normalized filter term, or `None` when it does not constrain anything
fn active(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
        .map(str::to_lowercase)
}

#[inline]
fn contains_ignore_case(field: &str, lowered_term: &str) -> bool {
    field.to_lowercase().contains(lowered_term)
}
