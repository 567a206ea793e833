use serde::Serialize;

use crate::common::cenum::CloudPosition;
use crate::common::ichimoku_exception::{ErrCode, IchimokuException};
use crate::kline::kline_unit::KLineUnit;

/// Computed Ichimoku line values
#[derive(Debug, Clone, Serialize)]
pub struct IchimokuMetric {
    pub tenkan_sen: f64,
    pub kijun_sen: f64,
    pub senkou_span_a: f64,
    pub senkou_span_b: f64,
}

impl IchimokuMetric {
    /// Distance between Senkou span A and B. Positive when span A leads.
    pub fn cloud_thickness(&self) -> f64 {
        self.senkou_span_a - self.senkou_span_b
    }

    pub fn cloud_position(&self, price: f64) -> CloudPosition {
        if price > self.senkou_span_a && price > self.senkou_span_b {
            CloudPosition::Above
        } else if price < self.senkou_span_a && price < self.senkou_span_b {
            CloudPosition::Below
        } else {
            CloudPosition::Inside
        }
    }
}

/// Closing prices of the given bars, skipping non-finite values
pub fn closing_prices(klus: &[KLineUnit]) -> Vec<f64> {
    klus.iter()
        .map(|klu| klu.close)
        .filter(|close| close.is_finite())
        .collect()
}

/// Midpoint of the highest and lowest closing price of the given bars.
///
/// Operates on every bar it receives; the caller windows the history
/// beforehand (see `KLineList::recent`). Used for Tenkan-sen, Kijun-sen
/// and Senkou span B under their nominal 9/26/52 bar windows.
pub fn line_value(klus: &[KLineUnit]) -> Result<f64, IchimokuException> {
    let closes = closing_prices(klus);
    if closes.is_empty() {
        return Err(IchimokuException::new(
            "no usable closing prices in series",
            ErrCode::EmptySeries,
        ));
    }

    let period_high = closes.iter().fold(f64::NEG_INFINITY, |acc, &c| acc.max(c));
    let period_low = closes.iter().fold(f64::INFINITY, |acc, &c| acc.min(c));

    Ok((period_high + period_low) / 2.0)
}

/// Average of two previously computed line values. Senkou span A is the
/// composite of the Kijun-sen and Tenkan-sen values.
pub fn composite_line(value_a: f64, value_b: f64) -> f64 {
    (value_a + value_b) / 2.0
}
