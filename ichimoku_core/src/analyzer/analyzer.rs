use crate::common::cenum::LineType;
use crate::common::ichimoku_exception::IchimokuException;
use crate::common::time::Time;
use crate::config::ichimoku_config::IchimokuConfig;
use crate::kline::{kline_list::KLineList, kline_unit::KLineUnit};
use crate::math::ichimoku::{composite_line, line_value, IchimokuMetric};

/// Drives the Ichimoku line computations over an accumulating bar history.
///
/// The analyzer is the windowing caller: each line is computed from the
/// `recent(period)` slice of the history, falling back to the whole
/// history when fewer bars exist. The line calculators themselves never
/// slice.
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub kline_list: KLineList,
    config: IchimokuConfig,
}

impl Analyzer {
    pub fn new(config: IchimokuConfig) -> Self {
        Self {
            kline_list: KLineList::new(),
            config,
        }
    }

    /// Validate (per config) and append one bar.
    pub fn add_bar(
        &mut self,
        time: Time,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Result<(), IchimokuException> {
        let klu = if self.config.kl_data_check {
            KLineUnit::new(time, open, high, low, close, volume, self.config.autofix)?
        } else {
            KLineUnit::new_unchecked(time, open, high, low, close, volume)
        };
        self.kline_list.add_klu(klu)
    }

    pub fn add_klu(&mut self, klu: KLineUnit) -> Result<(), IchimokuException> {
        self.kline_list.add_klu(klu)
    }

    /// Compute one line over its configured window.
    pub fn line(&self, line: LineType) -> Result<f64, IchimokuException> {
        match line {
            LineType::TenkanSen => line_value(self.kline_list.recent(self.config.tenkan_period)),
            LineType::KijunSen => line_value(self.kline_list.recent(self.config.kijun_period)),
            LineType::SenkouSpanB => {
                line_value(self.kline_list.recent(self.config.senkou_b_period))
            }
            LineType::SenkouSpanA => {
                let kijun = self.line(LineType::KijunSen)?;
                let tenkan = self.line(LineType::TenkanSen)?;
                Ok(composite_line(kijun, tenkan))
            }
        }
    }

    /// Compute all four lines at the current bar.
    pub fn metric(&self) -> Result<IchimokuMetric, IchimokuException> {
        let tenkan_sen = self.line(LineType::TenkanSen)?;
        let kijun_sen = self.line(LineType::KijunSen)?;
        let senkou_span_b = self.line(LineType::SenkouSpanB)?;

        Ok(IchimokuMetric {
            tenkan_sen,
            kijun_sen,
            senkou_span_a: composite_line(kijun_sen, tenkan_sen),
            senkou_span_b,
        })
    }
}
