//! Disk-backed loading of competition match days.

use tracing::debug;

use crate::bfv::http::BfvClient;
use crate::bfv::types::Competition;
use crate::cli::types::CompetitionId;
use crate::core::cache::{match_day_path, try_read_to_string, write_string};
use crate::Result;

/// Try to load the competition payload for a match day from the cache. If
/// missing, unreadable or `refresh == true`, fetch it and re-write the cache.
pub async fn load_or_fetch_match_day(
    client: &BfvClient,
    competition_id: &CompetitionId,
    match_day: u32,
    refresh: bool,
) -> Result<Competition> {
    let path = match_day_path(competition_id.as_str(), match_day);

    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(s) = try_read_to_string(&path) {
            if let Ok(cached) = serde_json::from_str::<Competition>(&s) {
                debug!(day = match_day, path = %path.display(), "match day served from cache");
                return Ok(cached);
            }
        }
    }

    // 2) Fetch from the API
    let competition = client
        .competition_for_match_day(competition_id, match_day)
        .await?;

    // 3) Write cache so future table runs skip the request
    if let Ok(json_str) = serde_json::to_string_pretty(&competition) {
        let _ = write_string(&path, &json_str);
    }

    Ok(competition)
}
