use crate::errors::Result;
use crate::net;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// One price observation, millisecond timestamp against USD price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp_ms: f64,
    pub price: f64,
}

/// A coin's fetched price history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    pub coin: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn empty(coin: &str) -> Self {
        Self {
            coin: coin.to_string(),
            points: Vec::new(),
        }
    }

    /// Points whose timestamps fall inside `window`, in series order.
    pub fn visible_points<'a>(
        &'a self,
        window: &'a TimeWindow,
    ) -> impl Iterator<Item = &'a PricePoint> {
        self.points
            .iter()
            .filter(|p| p.timestamp_ms >= window.start_ms && p.timestamp_ms <= window.end_ms)
    }

    pub fn max_price(&self) -> f64 {
        self.points.iter().fold(0.0, |max, p| max.max(p.price))
    }
}

#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(f64, f64)>,
}

fn points_from_pairs(pairs: Vec<(f64, f64)>) -> Vec<PricePoint> {
    pairs
        .into_iter()
        .map(|(timestamp_ms, price)| PricePoint {
            timestamp_ms,
            price,
        })
        .collect()
}

/// Unix-second bounds for the trailing year ending at `now`.
pub fn trailing_year(now: DateTime<Utc>) -> (i64, i64) {
    ((now - Duration::days(365)).timestamp(), now.timestamp())
}

/// Fetch a coin's USD price history from the CoinGecko range endpoint.
///
/// A non-success response is a normal empty series, not a failure; transport
/// errors still surface as errors.
pub fn fetch_range(coin: &str, from_s: i64, to_s: i64) -> Result<PriceSeries> {
    let url = format!(
        "https://api.coingecko.com/api/v3/coins/{}/market_chart/range",
        coin
    );
    let response: Option<MarketChartResponse> = net::get_json_lenient(
        &url,
        &[
            ("vs_currency", "usd".to_string()),
            ("from", from_s.to_string()),
            ("to", to_s.to_string()),
        ],
    )?;

    Ok(match response {
        Some(chart) => PriceSeries {
            coin: coin.to_string(),
            points: points_from_pairs(chart.prices),
        },
        None => PriceSeries::empty(coin),
    })
}

/// The time span both price plots render through (linked brushing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start_ms: f64,
    pub end_ms: f64,
}

impl TimeWindow {
    /// Smallest window covering every point of every non-empty series.
    pub fn full(series: &[&PriceSeries]) -> Option<TimeWindow> {
        let mut bounds: Option<(f64, f64)> = None;
        for s in series {
            for p in &s.points {
                bounds = Some(match bounds {
                    None => (p.timestamp_ms, p.timestamp_ms),
                    Some((lo, hi)) => (lo.min(p.timestamp_ms), hi.max(p.timestamp_ms)),
                });
            }
        }
        bounds.map(|(start_ms, end_ms)| TimeWindow { start_ms, end_ms })
    }

    pub fn span_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// Narrow to a brush extent given in domain milliseconds.
    ///
    /// Endpoint order doesn't matter; the result is clamped to `self`. A
    /// degenerate extent (no span left after clamping) leaves the window
    /// unchanged.
    pub fn narrowed(self, a_ms: f64, b_ms: f64) -> TimeWindow {
        let lo = a_ms.min(b_ms).max(self.start_ms);
        let hi = a_ms.max(b_ms).min(self.end_ms);
        // Also rejects NaN endpoints
        if !(hi > lo) {
            return self;
        }
        TimeWindow {
            start_ms: lo,
            end_ms: hi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn series(coin: &str, stamps: &[f64]) -> PriceSeries {
        PriceSeries {
            coin: coin.to_string(),
            points: stamps
                .iter()
                .map(|&t| PricePoint {
                    timestamp_ms: t,
                    price: t / 1000.0,
                })
                .collect(),
        }
    }

    #[test]
    fn parses_market_chart_pairs() {
        let body = r#"{
            "prices": [[1700000000000, 36500.25], [1700086400000, 37012.5]],
            "market_caps": [],
            "total_volumes": []
        }"#;
        let chart: MarketChartResponse = serde_json::from_str(body).unwrap();
        let points = points_from_pairs(chart.prices);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp_ms, 1_700_000_000_000.0);
        assert_eq!(points[1].price, 37012.5);
    }

    #[test]
    fn full_window_spans_all_series() {
        let a = series("bitcoin", &[2000.0, 5000.0]);
        let b = series("ethereum", &[1000.0, 4000.0]);

        let window = TimeWindow::full(&[&a, &b]).unwrap();
        assert_eq!(window.start_ms, 1000.0);
        assert_eq!(window.end_ms, 5000.0);

        assert!(TimeWindow::full(&[&PriceSeries::empty("bitcoin")]).is_none());
    }

    #[test]
    fn narrowed_orders_and_clamps() {
        let window = TimeWindow {
            start_ms: 0.0,
            end_ms: 100.0,
        };

        // Reversed endpoints
        let w = window.narrowed(80.0, 20.0);
        assert_eq!(w.start_ms, 20.0);
        assert_eq!(w.end_ms, 80.0);

        // Clamped to the existing window
        let w = window.narrowed(-50.0, 40.0);
        assert_eq!(w.start_ms, 0.0);
        assert_eq!(w.end_ms, 40.0);
    }

    #[test]
    fn degenerate_brush_leaves_window_unchanged() {
        let window = TimeWindow {
            start_ms: 10.0,
            end_ms: 90.0,
        };
        assert_eq!(window.narrowed(50.0, 50.0), window);
        assert_eq!(window.narrowed(200.0, 300.0), window);
    }

    #[test]
    fn visible_points_respect_the_window() {
        let s = series("bitcoin", &[1000.0, 2000.0, 3000.0, 4000.0]);
        let window = TimeWindow {
            start_ms: 1500.0,
            end_ms: 3500.0,
        };

        let visible: Vec<f64> = s.visible_points(&window).map(|p| p.timestamp_ms).collect();
        assert_eq!(visible, vec![2000.0, 3000.0]);
    }

    #[test]
    fn trailing_year_bounds() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let (from_s, to_s) = trailing_year(now);

        assert_eq!(to_s, now.timestamp());
        assert_eq!(to_s - from_s, 365 * 24 * 60 * 60);
    }
}
