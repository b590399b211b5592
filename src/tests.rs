#[cfg(test)]
mod tests {
    use crate::errors::VizError;
    use crate::forecast::{TemperatureBand, SAMPLE_TEMPERATURES};
    use crate::pricing::{PricePoint, PriceSeries, TimeWindow};
    use crate::settings::Settings;

    #[test]
    fn test_error_messages() {
        let error = VizError::InvalidRegion {
            width: -3,
            height: 10,
        };

        assert!(!error.is_recoverable());
        assert_eq!(error.error_code(), "INVALID_REGION");
        assert!(error.to_string().contains("-3x10"));

        let error = VizError::CityNotFound {
            query: "Atlantis".to_string(),
        };
        assert!(error.is_recoverable());
        assert_eq!(error.error_code(), "CITY_NOT_FOUND");
        assert!(error.user_message().contains("Check the spelling"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.default_city, "Lausanne");
        assert_eq!(settings.coins, vec!["bitcoin", "ethereum"]);
        assert!(settings.show_forecast && settings.show_prices && settings.show_histogram);

        // Defaults must round-trip through the JSON settings file format
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.default_city, settings.default_city);
        assert_eq!(back.window_size, settings.window_size);
    }

    #[test]
    fn test_sample_week_has_both_bands() {
        let bands: Vec<_> = SAMPLE_TEMPERATURES
            .iter()
            .map(|&t| TemperatureBand::classify(t))
            .collect();

        assert!(bands.contains(&TemperatureBand::Cold));
        assert!(bands.contains(&TemperatureBand::Warm));
        assert!(bands.contains(&TemperatureBand::Mild));
    }

    #[test]
    fn test_linked_window_narrowing() {
        let series = PriceSeries {
            coin: "bitcoin".to_string(),
            points: (0..10)
                .map(|i| PricePoint {
                    timestamp_ms: i as f64 * 1000.0,
                    price: 100.0 + i as f64,
                })
                .collect(),
        };

        let full = TimeWindow::full(&[&series]).unwrap();
        let narrowed = full.narrowed(2500.0, 6500.0);
        assert_eq!(series.visible_points(&narrowed).count(), 4);

        // Narrowing twice keeps shrinking; resetting is just using `full` again
        let tighter = narrowed.narrowed(0.0, 4000.0);
        assert_eq!(tighter.start_ms, 2500.0);
        assert_eq!(tighter.end_ms, 4000.0);
        assert_eq!(series.visible_points(&full).count(), 10);
    }
}
