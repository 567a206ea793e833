use crate::common::ichimoku_exception::{ErrCode, IchimokuException};
use crate::common::time::Time;

/// A single OHLCV bar
#[derive(Debug, Clone)]
pub struct KLineUnit {
    pub time: Time,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl KLineUnit {
    pub fn new(
        time: Time,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        autofix: bool,
    ) -> Result<Self, IchimokuException> {
        let mut unit = Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        };

        unit.check(autofix)?;
        Ok(unit)
    }

    /// Construct without validating the bar. Used when the data source is
    /// trusted and `kl_data_check` is disabled.
    pub fn new_unchecked(
        time: Time,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn check(&mut self, autofix: bool) -> Result<(), IchimokuException> {
        for price in [self.open, self.high, self.low, self.close] {
            if !price.is_finite() {
                return Err(IchimokuException::new(
                    format!("{} non-finite price in bar", self.time),
                    ErrCode::KlDataInvalid,
                ));
            }
            if price < 0.0 {
                return Err(IchimokuException::new(
                    format!("{} price={} is below zero", self.time, price),
                    ErrCode::PriceBelowZero,
                ));
            }
        }

        let min_price = self.low.min(self.open).min(self.high).min(self.close);
        let max_price = self.low.max(self.open).max(self.high).max(self.close);

        if self.low > min_price {
            if autofix {
                self.low = min_price;
            } else {
                return Err(IchimokuException::new(
                    format!(
                        "{} low price={} is not min of [low={}, open={}, high={}, close={}]",
                        self.time, self.low, self.low, self.open, self.high, self.close
                    ),
                    ErrCode::KlDataInvalid,
                ));
            }
        }

        if self.high < max_price {
            if autofix {
                self.high = max_price;
            } else {
                return Err(IchimokuException::new(
                    format!(
                        "{} high price={} is not max of [low={}, open={}, high={}, close={}]",
                        self.time, self.high, self.low, self.open, self.high, self.close
                    ),
                    ErrCode::KlDataInvalid,
                ));
            }
        }
        Ok(())
    }
}

impl PartialEq for KLineUnit {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
            && self.close == other.close
            && self.open == other.open
            && self.high == other.high
            && self.low == other.low
    }
}
