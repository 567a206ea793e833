use strum_macros::{Display, EnumString};

/// The four Ichimoku lines this crate computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum LineType {
    #[strum(serialize = "TENKAN_SEN")]
    TenkanSen,
    #[strum(serialize = "KIJUN_SEN")]
    KijunSen,
    #[strum(serialize = "SENKOU_SPAN_A")]
    SenkouSpanA,
    #[strum(serialize = "SENKOU_SPAN_B")]
    SenkouSpanB,
}

/// Position of a price relative to the cloud spanned by Senkou A/B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CloudPosition {
    Above,
    Below,
    Inside,
}
