use crate::models::{InfluencerProfile, ProfileFilter};

/// Check if a profile passes the directory listing filter
///
/// Name search is a case-insensitive substring test; city and niche are
/// exact matches. Absent criteria match everything, so an empty filter
/// returns the whole roster.
#[inline]
pub fn matches_directory_filter(profile: &InfluencerProfile, filter: &ProfileFilter) -> bool {
    if let Some(search) = &filter.search {
        if !profile
            .name
            .to_lowercase()
            .contains(&search.to_lowercase())
        {
            return false;
        }
    }

    if let Some(city) = &filter.city {
        if &profile.city != city {
            return false;
        }
    }

    if let Some(niche) = &filter.niche {
        if &profile.niche != niche {
            return false;
        }
    }

    true
}

/// Apply a directory filter to the roster, preserving store order
pub fn filter_directory<'a>(
    profiles: &'a [InfluencerProfile],
    filter: &ProfileFilter,
) -> Vec<&'a InfluencerProfile> {
    profiles
        .iter()
        .filter(|p| matches_directory_filter(p, filter))
        .collect()
}
