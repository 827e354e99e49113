//! 펀드 가격 동기화 모듈.
//!
//! 실행 흐름: 수집 → 수익률 계산 → upsert. 데이터가 없거나 고유
//! 관측일이 2개 미만이면 쓰기 없이 정상 종료합니다.

use std::time::Instant;

use chrono::Utc;

use fund_core::{compute_returns, fetch_window, FundKind, PriceObservation};
use fund_data::{SupabaseWriter, TefasClient};

use crate::SyncStats;

/// 펀드 가격 동기화 실행.
///
/// 분류별 수집 실패는 경고 후 건너뛰며 작업을 중단시키지 않습니다.
pub async fn sync_prices(tefas: &TefasClient, writer: &SupabaseWriter) -> SyncStats {
    let start = Instant::now();
    let mut stats = SyncStats::new();

    let today = Utc::now().date_naive();
    let (window_start, window_end) = fetch_window(today);

    tracing::info!(
        start = %window_start.format("%Y-%m-%d"),
        end = %window_end.format("%Y-%m-%d"),
        "TEFAS 데이터 수집 시작"
    );

    // 분류별 순차 수집 (선언 순서 고정)
    let mut pool: Vec<PriceObservation> = Vec::new();
    for kind in FundKind::ALL {
        match tefas.fetch(kind, window_start, window_end).await {
            Ok(rows) => {
                stats.kinds_ok += 1;
                stats.rows_fetched += rows.len();
                pool.extend(rows);
            }
            Err(e) => {
                stats.kinds_failed += 1;
                tracing::warn!(kind = %kind, error = %e, "분류 수집 실패, 건너뜀");
            }
        }
    }

    if pool.is_empty() {
        tracing::warn!("수집된 데이터가 없어 쓰기 없이 종료합니다");
        stats.elapsed = start.elapsed();
        return stats;
    }

    tracing::info!(rows = pool.len(), "원시 행 수집 완료");

    let computed = match compute_returns(&pool, today) {
        Some(computed) => computed,
        None => {
            tracing::warn!("고유 관측일이 2개 미만이라 수익률을 계산할 수 없습니다");
            stats.elapsed = start.elapsed();
            return stats;
        }
    };

    tracing::info!(
        prev_date = %computed.prev_date.format("%Y-%m-%d"),
        curr_date = %computed.curr_date.format("%Y-%m-%d"),
        records = computed.records.len(),
        "수익률 계산 완료"
    );
    stats.records = computed.records.len();

    let write = writer.write_all(&computed.records).await;
    stats.batches = write.batches;
    stats.written = write.written;
    stats.dropped = write.dropped;

    stats.elapsed = start.elapsed();
    stats
}
