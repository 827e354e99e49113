//! 영업일 계산.
//!
//! 주말(토/일)만 제외하며 공휴일은 반영하지 않습니다.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// 직전 영업일 반환.
///
/// 하루를 거슬러 올라간 뒤, 주말에 해당하면 금요일까지 계속 이동합니다.
pub fn previous_business_day(date: NaiveDate) -> NaiveDate {
    let mut prev = date - Duration::days(1);
    while matches!(prev.weekday(), Weekday::Sat | Weekday::Sun) {
        prev -= Duration::days(1);
    }
    prev
}

/// 수집 윈도우 계산: [직전 영업일, 기준일] (양끝 포함).
///
/// 기준일 자체는 주말이어도 그대로 사용합니다. 소스가 주말 데이터를
/// 반환하지 않으므로 실제 결과는 영업일 행만 포함됩니다.
pub fn fetch_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (previous_business_day(today), today)
}
