use std::ops::Index;

use crate::common::ichimoku_exception::{ErrCode, IchimokuException};
use super::kline_unit::KLineUnit;

/// Ordered bar history for one symbol, oldest first
#[derive(Debug, Clone, Default)]
pub struct KLineList {
    pub lst: Vec<KLineUnit>,
}

impl KLineList {
    pub fn new() -> Self {
        Self { lst: Vec::new() }
    }

    /// Append a single KLineUnit. Bars must arrive in strictly
    /// increasing time order.
    pub fn add_klu(&mut self, klu: KLineUnit) -> Result<(), IchimokuException> {
        if let Some(last) = self.lst.last() {
            if klu.time <= last.time {
                return Err(IchimokuException::new(
                    format!(
                        "kline time inconsistent: {} comes after {}",
                        klu.time, last.time
                    ),
                    ErrCode::KlTimeInconsistent,
                ));
            }
        }
        self.lst.push(klu);
        Ok(())
    }

    pub fn last(&self) -> Option<&KLineUnit> {
        self.lst.last()
    }

    pub fn len(&self) -> usize {
        self.lst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lst.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KLineUnit> {
        self.lst.iter()
    }

    /// The last `n` bars, or the whole history when fewer than `n` bars
    /// exist. This is the windowing contract for the line calculators in
    /// [`crate::math::ichimoku`]: they operate on whatever slice they are
    /// given and never slice by period themselves.
    pub fn recent(&self, n: usize) -> &[KLineUnit] {
        let begin = self.lst.len().saturating_sub(n);
        &self.lst[begin..]
    }
}

impl Index<usize> for KLineList {
    type Output = KLineUnit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lst[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::Time;

    fn klu(minute: u32, close: f64) -> KLineUnit {
        let time = Time::new(2024, 1, 1, 9, minute, 0);
        KLineUnit::new(time, close, close, close, close, 0.0, false).unwrap()
    }

    #[test]
    fn test_add_klu_in_order() {
        let mut lst = KLineList::new();
        lst.add_klu(klu(0, 10.0)).unwrap();
        lst.add_klu(klu(1, 11.0)).unwrap();
        assert_eq!(lst.len(), 2);
        assert_eq!(lst.last().unwrap().close, 11.0);
    }

    #[test]
    fn test_add_klu_out_of_order_rejected() {
        let mut lst = KLineList::new();
        lst.add_klu(klu(5, 10.0)).unwrap();
        let err = lst.add_klu(klu(4, 11.0)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::KlTimeInconsistent);
    }

    #[test]
    fn test_add_klu_duplicate_time_rejected() {
        let mut lst = KLineList::new();
        lst.add_klu(klu(5, 10.0)).unwrap();
        let err = lst.add_klu(klu(5, 11.0)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::KlTimeInconsistent);
    }

    #[test]
    fn test_recent_returns_last_n() {
        let mut lst = KLineList::new();
        for (i, close) in [1.0, 2.0, 3.0, 4.0, 5.0].iter().enumerate() {
            lst.add_klu(klu(i as u32, *close)).unwrap();
        }
        let window = lst.recent(2);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].close, 4.0);
        assert_eq!(window[1].close, 5.0);
    }

    #[test]
    fn test_recent_with_short_history_returns_all() {
        let mut lst = KLineList::new();
        lst.add_klu(klu(0, 1.0)).unwrap();
        lst.add_klu(klu(1, 2.0)).unwrap();
        assert_eq!(lst.recent(26).len(), 2);
    }

    #[test]
    fn test_recent_on_empty_list() {
        let lst = KLineList::new();
        assert!(lst.recent(9).is_empty());
    }
}
