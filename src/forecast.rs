use crate::errors::{Result, VizError};
use crate::net;
use chrono::{Duration, NaiveDate};
use serde::Deserialize;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
const GEOCODE_URL: &str = "https://geocode.maps.co/search";

/// Daily maxima used before any network fetch, one per weekday.
pub const SAMPLE_TEMPERATURES: [f64; 7] = [13.0, 18.0, 21.0, 19.0, 26.0, 25.0, 16.0];

/// One (day, value) forecast sample.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySample {
    pub day: NaiveDate,
    pub value: f64,
}

/// Display band for a daily maximum temperature, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Cold,
    Mild,
    Warm,
}

impl TemperatureBand {
    pub fn classify(value: f64) -> Self {
        if value <= 17.0 {
            TemperatureBand::Cold
        } else if value >= 23.0 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Mild
        }
    }
}

/// A strategy for obtaining forecast samples.
///
/// Sources are swapped by composition: the geocoded source wraps an
/// [`OpenMeteoSource`] rather than extending it. `fetch` may block on
/// network I/O and runs on loader threads.
pub trait ForecastSource: Send {
    fn label(&self) -> String;
    fn fetch(&self) -> Result<Vec<DailySample>>;
}

/// The built-in sample week, dated from `start`.
pub struct StaticSource {
    pub start: NaiveDate,
}

impl ForecastSource for StaticSource {
    fn label(&self) -> String {
        "Sample data".to_string()
    }

    fn fetch(&self) -> Result<Vec<DailySample>> {
        Ok(SAMPLE_TEMPERATURES
            .iter()
            .enumerate()
            .map(|(i, &value)| DailySample {
                day: self.start + Duration::days(i as i64),
                value,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
}

fn to_samples(response: ForecastResponse) -> Vec<DailySample> {
    response
        .daily
        .time
        .into_iter()
        .zip(response.daily.temperature_2m_max)
        .map(|(day, value)| DailySample { day, value })
        .collect()
}

/// Daily maximum temperatures from the Open-Meteo forecast API.
pub struct OpenMeteoSource {
    pub latitude: f64,
    pub longitude: f64,
}

impl ForecastSource for OpenMeteoSource {
    fn label(&self) -> String {
        format!("Open-Meteo {:.2}, {:.2}", self.latitude, self.longitude)
    }

    fn fetch(&self) -> Result<Vec<DailySample>> {
        let response: ForecastResponse = net::get_json(
            OPEN_METEO_URL,
            &[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("daily", "temperature_2m_max".to_string()),
                ("timezone", "GMT".to_string()),
            ],
        )?;
        Ok(to_samples(response))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    // The geocoding API returns coordinates as strings
    lat: String,
    lon: String,
}

/// Resolves a city name to coordinates, then delegates to [`OpenMeteoSource`].
pub struct GeocodedSource {
    pub city: String,
}

impl GeocodedSource {
    fn resolve(&self) -> Result<OpenMeteoSource> {
        let hits: Vec<GeocodeHit> =
            net::get_json(GEOCODE_URL, &[("q", self.city.clone())])?;
        let hit = hits.into_iter().next().ok_or_else(|| VizError::CityNotFound {
            query: self.city.clone(),
        })?;

        let parse = |s: &str| {
            s.parse::<f64>().map_err(|e| VizError::RuntimeError {
                message: format!("bad coordinate '{}': {}", s, e),
            })
        };
        Ok(OpenMeteoSource {
            latitude: parse(&hit.lat)?,
            longitude: parse(&hit.lon)?,
        })
    }
}

impl ForecastSource for GeocodedSource {
    fn label(&self) -> String {
        self.city.clone()
    }

    fn fetch(&self) -> Result<Vec<DailySample>> {
        self.resolve()?.fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(TemperatureBand::classify(13.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::classify(17.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::classify(17.1), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::classify(22.9), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::classify(23.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(26.0), TemperatureBand::Warm);
    }

    #[test]
    fn static_source_dates_the_sample_week() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let samples = StaticSource { start }.fetch().unwrap();

        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0].day, start);
        assert_eq!(samples[0].value, 13.0);
        assert_eq!(samples[6].day, start + Duration::days(6));
        assert_eq!(samples[6].value, 16.0);
    }

    #[test]
    fn parses_open_meteo_daily_block() {
        let body = r#"{
            "daily": {
                "time": ["2026-08-25", "2026-08-26", "2026-08-27"],
                "temperature_2m_max": [24.5, 16.0, 19.2]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let samples = to_samples(response);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].day, NaiveDate::from_ymd_opt(2026, 8, 25).unwrap());
        assert_eq!(samples[0].value, 24.5);
        assert_eq!(TemperatureBand::classify(samples[1].value), TemperatureBand::Cold);
    }

    #[test]
    fn parses_geocode_hits_with_string_coordinates() {
        let body = r#"[{"lat": "46.5196535", "lon": "6.6322734", "display_name": "Lausanne"}]"#;
        let hits: Vec<GeocodeHit> = serde_json::from_str(body).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lat.parse::<f64>().unwrap(), 46.5196535);
    }

    #[test]
    fn uneven_daily_block_zips_to_the_shorter_side() {
        let body = r#"{
            "daily": {
                "time": ["2026-08-25", "2026-08-26"],
                "temperature_2m_max": [24.5]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(to_samples(response).len(), 1);
    }
}
