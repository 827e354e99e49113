//! 일간 수익률 계산.
//!
//! 관측치 풀을 펀드별 2일 시계열로 피벗하고 전일 대비 수익률(%)을
//! 계산합니다. 수집기와 테스트가 공유하는 순수 함수입니다.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{PriceObservation, ReturnRecord};

/// 전일 대비 수익률(%) 계산.
///
/// `(curr - prev) / prev * 100`. 0으로 나누어 생기는 무한대·NaN은
/// 0.0으로 치환합니다.
pub fn daily_return_pct(prev: f64, curr: f64) -> f64 {
    let pct = (curr - prev) / prev * 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

/// 수익률 계산 결과.
#[derive(Debug, Clone)]
pub struct ComputedReturns {
    /// 선택된 전일 (가장 이른 관측일)
    pub prev_date: NaiveDate,
    /// 선택된 당일 (두 번째로 이른 관측일)
    pub curr_date: NaiveDate,
    /// 펀드별 수익률 레코드 (코드 순 정렬)
    pub records: Vec<ReturnRecord>,
}

/// 관측치 풀에서 수익률 레코드 생성.
///
/// 1. 고유 관측일이 2개 미만이면 `None` (데이터 부족, 계산 불가)
/// 2. 가장 이른 날짜를 전일, 두 번째로 이른 날짜를 당일로 선택
/// 3. 두 날짜 모두 가격이 있는 펀드만 유지, 한쪽이라도 없으면 제외
///    (동일 (code, date) 중복 관측치는 풀 순서상 마지막 값 유지)
/// 4. 살아남은 펀드당 정확히 하나의 [`ReturnRecord`] 생성,
///    `last_updated`는 `as_of`를 YYYY-MM-DD로 포맷
pub fn compute_returns(
    observations: &[PriceObservation],
    as_of: NaiveDate,
) -> Option<ComputedReturns> {
    let mut dates: Vec<NaiveDate> = observations.iter().map(|o| o.date).collect();
    dates.sort();
    dates.dedup();

    if dates.len() < 2 {
        return None;
    }

    let prev_date = dates[0];
    let curr_date = dates[1];

    // (code, title) -> (전일 가격, 당일 가격). BTreeMap으로 코드 순 출력 보장.
    let mut series: BTreeMap<(String, String), (Option<f64>, Option<f64>)> = BTreeMap::new();

    for obs in observations {
        if obs.date != prev_date && obs.date != curr_date {
            continue;
        }
        let entry = series
            .entry((obs.code.clone(), obs.title.clone()))
            .or_insert((None, None));
        if obs.date == prev_date {
            entry.0 = Some(obs.price);
        } else {
            entry.1 = Some(obs.price);
        }
    }

    let as_of_str = as_of.format("%Y-%m-%d").to_string();

    let records: Vec<ReturnRecord> = series
        .into_iter()
        .filter_map(|((code, name), (prev, curr))| {
            let prev = prev?;
            let curr = curr?;
            Some(ReturnRecord {
                code,
                name,
                price: curr,
                daily_return: daily_return_pct(prev, curr),
                last_updated: as_of_str.clone(),
            })
        })
        .collect();

    Some(ComputedReturns {
        prev_date,
        curr_date,
        records,
    })
}
