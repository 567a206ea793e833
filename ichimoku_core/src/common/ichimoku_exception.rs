use std::fmt;
use strum_macros::{Display, EnumString};

/// Error codes for the Ichimoku system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // General errors (0-99)
    #[strum(serialize = "_COMMON_ERR_BEGIN")]
    CommonErrBegin = 0,
    #[strum(serialize = "COMMON_ERROR")]
    CommonError = 1,
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 2,
    #[strum(serialize = "SRC_DATA_NOT_FOUND")]
    SrcDataNotFound = 3,
    #[strum(serialize = "SRC_DATA_FORMAT_ERROR")]
    SrcDataFormatError = 4,
    #[strum(serialize = "CONFIG_ERROR")]
    ConfigError = 5,
    #[strum(serialize = "_COMMON_ERR_END")]
    CommonErrEnd = 99,

    // KL data errors (100-199)
    #[strum(serialize = "_KL_ERR_BEGIN")]
    KlErrBegin = 100,
    #[strum(serialize = "PRICE_BELOW_ZERO")]
    PriceBelowZero = 101,
    #[strum(serialize = "KL_DATA_INVALID")]
    KlDataInvalid = 102,
    #[strum(serialize = "KL_TIME_INCONSISTENT")]
    KlTimeInconsistent = 103,
    #[strum(serialize = "EMPTY_SERIES")]
    EmptySeries = 104,
    #[strum(serialize = "_KL_ERR_END")]
    KlErrEnd = 199,
}

impl ErrCode {
    pub fn is_kldata_err(&self) -> bool {
        let code = *self as i32;
        code > Self::KlErrBegin as i32 && code < Self::KlErrEnd as i32
    }

    pub fn is_common_err(&self) -> bool {
        let code = *self as i32;
        code > Self::CommonErrBegin as i32 && code < Self::CommonErrEnd as i32
    }
}

#[derive(Debug, Clone)]
pub struct IchimokuException {
    pub errcode: ErrCode,
    pub msg: String,
}

impl IchimokuException {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn is_kldata_err(&self) -> bool {
        self.errcode.is_kldata_err()
    }

    /// True when the error means "no usable data", as opposed to a logic
    /// or parameter problem. Callers are expected to match on this before
    /// deciding to fetch more history.
    pub fn is_empty_series(&self) -> bool {
        self.errcode == ErrCode::EmptySeries
    }
}

impl std::error::Error for IchimokuException {}

impl fmt::Display for IchimokuException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.errcode, self.msg)
    }
}
