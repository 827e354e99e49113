//! Supabase PostgREST 기록자.
//!
//! 수익률 레코드를 Supabase REST 인터페이스로 upsert합니다.
//! 충돌 키는 `code`이며 기존 행은 전체 덮어쓰기됩니다
//! (`Prefer: resolution=merge-duplicates`).
//!
//! # 쓰기 정책
//!
//! [`SupabaseWriter::write_all`]은 레코드를 고정 크기 배치로 나누어
//! 순서대로 upsert합니다. 배치가 실패하면 해당 배치만 레코드 단위로
//! 재시도하며, 그래도 실패한 레코드는 탈락시키되 개수를 집계합니다.
//! 쓰기 실패는 작업 전체를 중단시키지 않습니다.

use fund_core::ReturnRecord;

use crate::error::{DataError, Result};

/// 기본 대상 테이블.
const DEFAULT_TABLE: &str = "fund_prices";

/// 기본 배치 크기.
const DEFAULT_CHUNK_SIZE: usize = 100;

/// Supabase PostgREST 기록자.
#[derive(Clone)]
pub struct SupabaseWriter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
    chunk_size: usize,
}

/// 쓰기 결과 집계.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// 시도한 배치 수
    pub batches: usize,
    /// 기록된 레코드 수
    pub written: usize,
    /// 탈락한 레코드 수
    pub dropped: usize,
}

impl SupabaseWriter {
    /// 프로젝트 URL과 서비스 키로 기록자 생성.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("HTTP 클라이언트 생성 실패");

        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// 대상 테이블 변경.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// 배치 크기 변경 (최소 1).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// upsert 엔드포인트 URL.
    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}?on_conflict=code",
            self.base_url, self.table
        )
    }

    /// 레코드 목록을 한 번의 호출로 upsert.
    async fn post_records(&self, records: &[ReturnRecord]) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint())
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(records)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Api { status, body });
        }

        Ok(())
    }

    /// 배치 upsert.
    pub async fn upsert_batch(&self, records: &[ReturnRecord]) -> Result<()> {
        self.post_records(records).await
    }

    /// 단일 레코드 upsert (배치 실패 시 폴백 경로).
    pub async fn upsert_one(&self, record: &ReturnRecord) -> Result<()> {
        self.post_records(std::slice::from_ref(record)).await
    }

    /// 전체 레코드를 배치 단위로 기록.
    ///
    /// 배치 실패 시 레코드 단위 폴백으로 한 번 더 시도하고,
    /// 여전히 실패한 레코드는 `dropped`로 집계합니다.
    pub async fn write_all(&self, records: &[ReturnRecord]) -> WriteStats {
        let mut stats = WriteStats::default();

        if records.is_empty() {
            return stats;
        }

        let total_batches = records.len().div_ceil(self.chunk_size);

        for (idx, chunk) in records.chunks(self.chunk_size).enumerate() {
            stats.batches += 1;

            match self.upsert_batch(chunk).await {
                Ok(()) => {
                    stats.written += chunk.len();
                    tracing::info!(
                        batch = idx + 1,
                        total_batches = total_batches,
                        records = chunk.len(),
                        "배치 업로드 완료"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        batch = idx + 1,
                        error = %e,
                        "배치 업로드 실패, 레코드 단위 재시도"
                    );

                    for record in chunk {
                        match self.upsert_one(record).await {
                            Ok(()) => stats.written += 1,
                            Err(e) => {
                                stats.dropped += 1;
                                tracing::warn!(code = %record.code, error = %e, "레코드 탈락");
                            }
                        }
                    }
                }
            }
        }

        if stats.dropped > 0 {
            tracing::warn!(dropped = stats.dropped, "기록 실패로 탈락한 레코드 존재");
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, price: f64) -> ReturnRecord {
        ReturnRecord {
            code: code.to_string(),
            name: format!("Fund {}", code),
            price,
            daily_return: 1.0,
            last_updated: "2024-01-02".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_batch_headers() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/rest/v1/fund_prices?on_conflict=code")
            .match_header("apikey", "secret")
            .match_header("Authorization", "Bearer secret")
            .match_header("Prefer", "resolution=merge-duplicates,return=minimal")
            .with_status(201)
            .create_async()
            .await;

        let writer = SupabaseWriter::new(server.url(), "secret");
        writer.upsert_batch(&[record("AAK", 1.0)]).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_write_all_chunking() {
        let mut server = mockito::Server::new_async().await;

        // 250개 레코드 -> 배치 호출 정확히 3회 (100/100/50)
        let mock = server
            .mock("POST", "/rest/v1/fund_prices?on_conflict=code")
            .with_status(201)
            .expect(3)
            .create_async()
            .await;

        let records: Vec<ReturnRecord> =
            (0..250).map(|i| record(&format!("F{:03}", i), 1.0)).collect();

        let writer = SupabaseWriter::new(server.url(), "secret");
        let stats = writer.write_all(&records).await;

        mock.assert_async().await;
        assert_eq!(stats.batches, 3);
        assert_eq!(stats.written, 250);
        assert_eq!(stats.dropped, 0);
    }

    #[tokio::test]
    async fn test_write_all_empty_no_calls() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/rest/v1/fund_prices?on_conflict=code")
            .expect(0)
            .create_async()
            .await;

        let writer = SupabaseWriter::new(server.url(), "secret");
        let stats = writer.write_all(&[]).await;

        mock.assert_async().await;
        assert_eq!(stats, WriteStats::default());
    }

    #[tokio::test]
    async fn test_write_all_fallback_counts_dropped() {
        let mut server = mockito::Server::new_async().await;

        let good = record("AAA", 1.0);
        let bad = record("BBB", 2.0);

        // 두 레코드 배치는 실패
        let batch_mock = server
            .mock("POST", "/rest/v1/fund_prices?on_conflict=code")
            .match_body(mockito::Matcher::Json(
                serde_json::to_value(vec![good.clone(), bad.clone()]).unwrap(),
            ))
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        // 폴백: AAA는 성공, BBB는 계속 실패
        let single_ok = server
            .mock("POST", "/rest/v1/fund_prices?on_conflict=code")
            .match_body(mockito::Matcher::Json(
                serde_json::to_value(vec![good.clone()]).unwrap(),
            ))
            .with_status(201)
            .expect(1)
            .create_async()
            .await;

        let single_fail = server
            .mock("POST", "/rest/v1/fund_prices?on_conflict=code")
            .match_body(mockito::Matcher::Json(
                serde_json::to_value(vec![bad.clone()]).unwrap(),
            ))
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let writer = SupabaseWriter::new(server.url(), "secret").with_chunk_size(2);
        let stats = writer.write_all(&[good, bad]).await;

        batch_mock.assert_async().await;
        single_ok.assert_async().await;
        single_fail.assert_async().await;

        assert_eq!(stats.batches, 1);
        assert_eq!(stats.written, 1);
        assert_eq!(stats.dropped, 1);
    }
}
