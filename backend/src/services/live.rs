//! Current conditions at a spot from the latest telemetry readings.
//!
//! Unlike swell signatures, which look for the reading nearest a session,
//! live data always shows the newest wind and swell records. Storage failures
//! never reach the caller: they produce [`LiveSpotData::unavailable`].

use log::{debug, warn};

use super::enrichment::match_analytics_spot;
use super::formatting::{
    cardinal, direction_text, effective_swell_height, format_height_value, format_period,
    format_speed, format_swell, format_wind,
};
use super::nearest::latest;
use crate::api::{LiveSpotData, LiveSwell, LiveTide, LiveWind, SpotId};
use crate::db::repository::{RepositoryResult, SpotRepository, TelemetryRepository};
use crate::db::services::get_spot;
use crate::models::{Spot, SwellRecord, WindRecord};

pub fn live_wind(record: &WindRecord) -> LiveWind {
    let speed = format_speed(record.wind_speed);
    let direction = cardinal(record.wind_direction);
    LiveWind {
        formatted: format_wind(speed, direction),
        speed,
        direction: direction.map(String::from),
        direction_degrees: record.wind_direction.filter(|d| d.is_finite()),
        timestamp: record.timestamp,
    }
}

pub fn live_swell(record: &SwellRecord) -> LiveSwell {
    let height = format_height_value(effective_swell_height(record.swell_height, record.wave_height));
    let period = format_period(record.swell_period);
    let direction = direction_text(record.swell_direction.as_deref());
    LiveSwell {
        formatted: format_swell(height.as_deref(), period, direction.as_deref()),
        height,
        period,
        direction,
        timestamp: record.timestamp,
    }
}

pub fn live_tide(record: &SwellRecord) -> Option<LiveTide> {
    format_height_value(record.tide).map(|height| LiveTide {
        formatted: format!("{} ft", height),
        height,
    })
}

/// Live data for an already-loaded spot.
pub async fn live_data_for_spot<R: TelemetryRepository + ?Sized>(repo: &R, spot: &Spot) -> LiveSpotData {
    match read_live(repo, spot).await {
        Ok(data) => data,
        Err(e) => {
            warn!("Error fetching live data for spot {}: {}", spot.id, e);
            LiveSpotData::unavailable(spot.id, spot.name.clone())
        }
    }
}

async fn read_live<R: TelemetryRepository + ?Sized>(
    repo: &R,
    spot: &Spot,
) -> RepositoryResult<LiveSpotData> {
    let mut data = LiveSpotData {
        spot_id: spot.id,
        spot_name: spot.name.clone(),
        swell: None,
        wind: None,
        tide: None,
        updated_at: None,
        error: None,
    };

    let analytics_spots = repo.fetch_analytics_spots().await?;
    let Some(analytics) = match_analytics_spot(&spot.name, &analytics_spots) else {
        debug!("Spot '{}' has no analytics counterpart", spot.name);
        return Ok(data);
    };

    let wind_records = repo.fetch_wind_records(analytics.id).await?;
    data.wind = latest(&wind_records).map(live_wind);

    if let Some(buoy_id) = repo.fetch_buoy_link(analytics.id).await? {
        let swell_records = repo.fetch_swell_records(&buoy_id).await?;
        if let Some(record) = latest(&swell_records) {
            data.swell = Some(live_swell(record));
            data.tide = live_tide(record);
        }
    }

    data.updated_at = data
        .swell
        .as_ref()
        .map(|s| s.timestamp)
        .or_else(|| data.wind.as_ref().map(|w| w.timestamp));
    Ok(data)
}

/// Live data for a spot id. Only an unknown spot is an error.
pub async fn build_live_data<R>(repo: &R, spot_id: SpotId) -> RepositoryResult<LiveSpotData>
where
    R: SpotRepository + TelemetryRepository + ?Sized,
{
    let spot = get_spot(repo, spot_id).await?;
    Ok(live_data_for_spot(repo, &spot).await)
}
