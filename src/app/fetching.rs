use crate::forecast::{ForecastSource, GeocodedSource, OpenMeteoSource, StaticSource};
use crate::pricing;

use super::{LoaderMessage, VizApp};
use chrono::Utc;

impl VizApp {
    /// Replace the forecast with whatever `source` produces.
    pub fn reload_forecast(&mut self, source: Box<dyn ForecastSource>) {
        self.forecast_loading = true;
        self.forecast_error = None;

        let label = source.label();
        self.spawn_loader(move || {
            Some(match source.fetch() {
                Ok(samples) => LoaderMessage::ForecastLoaded { label, samples },
                Err(e) => LoaderMessage::ForecastFailed {
                    label,
                    error: e.user_message(),
                },
            })
        });
    }

    pub fn reload_sample_forecast(&mut self) {
        let start = Utc::now().date_naive();
        self.reload_forecast(Box::new(StaticSource { start }));
    }

    pub fn reload_default_forecast(&mut self) {
        self.reload_forecast(Box::new(OpenMeteoSource {
            latitude: self.settings.default_latitude,
            longitude: self.settings.default_longitude,
        }));
    }

    pub fn reload_city_forecast(&mut self) {
        let city = self.city_input.trim().to_string();
        if city.is_empty() {
            return;
        }
        self.reload_forecast(Box::new(GeocodedSource { city }));
    }

    /// Fetch the trailing year of prices for every configured coin.
    pub fn fetch_prices(&mut self) {
        let (from_s, to_s) = pricing::trailing_year(Utc::now());

        for coin in self.settings.coins.clone() {
            self.prices_loading += 1;
            self.spawn_loader(move || {
                Some(match pricing::fetch_range(&coin, from_s, to_s) {
                    Ok(series) => LoaderMessage::PricesLoaded(series),
                    Err(e) => LoaderMessage::PricesFailed {
                        coin,
                        error: e.user_message(),
                    },
                })
            });
        }
    }
}
