use std::ops::{Bound, RangeBounds};

/// 区間を受け取る操作の事前条件違反
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, thiserror::Error)]
pub enum RangeError {
    /// 閉区間`[left, right]`で`left > right`になっている.
    #[error("区間 [{left}, {right}] の左端が右端より大きい")]
    InvertedRange { left: usize, right: usize },
    /// 添字`index`が長さ`len`の列の範囲外である.
    #[error("添字 {index} が長さ {len} の範囲外")]
    IndexOutOfRange { index: usize, len: usize },
}

/// 閉区間`[left, right]`が`0..len`に含まれるか検査する
pub(crate) fn check_closed(left: usize, right: usize, len: usize) -> Result<(), RangeError> {
    if left > right {
        return Err(RangeError::InvertedRange { left, right });
    }
    if right >= len {
        return Err(RangeError::IndexOutOfRange { index: right, len });
    }
    Ok(())
}

/// `range`を半開区間`[start, end)`に直し, `0..len`に含まれるか検査する
pub(crate) fn to_half_open(
    range: impl RangeBounds<usize>,
    len: usize,
) -> Result<(usize, usize), RangeError> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i + 1,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    if end > len {
        return Err(RangeError::IndexOutOfRange { index: end - 1, len });
    }
    if start > end {
        return Err(RangeError::InvertedRange {
            left: start,
            right: end.wrapping_sub(1),
        });
    }
    Ok((start, end))
}
