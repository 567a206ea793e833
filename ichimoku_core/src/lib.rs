pub mod analyzer;
pub mod common;
pub mod config;
pub mod kline;
pub mod math;

pub use analyzer::analyzer::Analyzer;
pub use config::ichimoku_config::IchimokuConfig;
pub use kline::kline_unit::KLineUnit;
