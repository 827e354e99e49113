//! 동기화 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 동기화 작업 통계.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStats {
    /// 수집 성공한 분류 수
    pub kinds_ok: usize,
    /// 수집 실패로 건너뛴 분류 수
    pub kinds_failed: usize,
    /// 수집된 원시 행 수
    pub rows_fetched: usize,
    /// 계산된 수익률 레코드 수
    pub records: usize,
    /// 시도한 배치 수
    pub batches: usize,
    /// 기록된 레코드 수
    pub written: usize,
    /// 기록 실패로 탈락한 레코드 수
    pub dropped: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SyncStats {
    /// 새 통계 객체 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 통계 요약 로그 출력.
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            kinds_ok = self.kinds_ok,
            kinds_failed = self.kinds_failed,
            rows_fetched = self.rows_fetched,
            records = self.records,
            batches = self.batches,
            written = self.written,
            dropped = self.dropped,
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "동기화 완료"
        );
    }
}
