//! TEFAS 가격 제공자.
//!
//! 터키 펀드 공시 플랫폼(TEFAS)의 공개 히스토리 API에서 분류별
//! 일일 펀드 가격을 조회합니다.
//!
//! # API
//!
//! `POST /api/DB/BindHistoryInfo` (form-encoded)
//! - `fontip`: 펀드 분류 코드 (YAT/EMK/BYF)
//! - `bastarih` / `bittarih`: 조회 구간 (DD.MM.YYYY, 양끝 포함)
//!
//! 응답의 `data` 배열에서 코드/펀드명/일자/가격만 사용합니다.
//!
//! # 사용 예시
//! ```rust,ignore
//! let client = TefasClient::new();
//! let rows = client.fetch(FundKind::Yat, start, end).await?;
//! ```

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use fund_core::{FundKind, PriceObservation};

use crate::error::{DataError, Result};

/// TEFAS 기본 URL.
const DEFAULT_BASE_URL: &str = "https://www.tefas.gov.tr";

/// TEFAS API 클라이언트.
#[derive(Clone)]
pub struct TefasClient {
    client: reqwest::Client,
    base_url: String,
}

/// API 응답 래퍼.
#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(rename = "data", default)]
    data: Vec<RawHistoryRow>,
}

/// 히스토리 행 원본 형식.
#[derive(Debug, Deserialize)]
struct RawHistoryRow {
    /// 관측일 (epoch 밀리초 문자열)
    #[serde(rename = "TARIH")]
    date_millis: String,
    /// 펀드 코드
    #[serde(rename = "FONKODU")]
    code: String,
    /// 펀드명
    #[serde(rename = "FONUNVAN")]
    title: String,
    /// 가격 (데이터 없는 날은 null)
    #[serde(rename = "FIYAT", default)]
    price: Option<f64>,
}

impl TefasClient {
    /// 운영 URL로 클라이언트 생성.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// 커스텀 base URL로 클라이언트 생성 (테스트용).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("HTTP 클라이언트 생성 실패");

        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 분류별 일일 가격 조회.
    ///
    /// 날짜 또는 가격이 파싱되지 않는 행은 건너뜁니다.
    ///
    /// # Arguments
    /// * `kind` - 펀드 분류 태그
    /// * `start` / `end` - 조회 구간 (양끝 포함)
    pub async fn fetch(
        &self,
        kind: FundKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceObservation>> {
        let url = format!("{}/api/DB/BindHistoryInfo", self.base_url);

        // TEFAS 폼 파라미터는 DD.MM.YYYY 형식
        let start_str = start.format("%d.%m.%Y").to_string();
        let end_str = end.format("%d.%m.%Y").to_string();

        tracing::debug!(
            kind = %kind,
            start = %start.format("%Y-%m-%d"),
            end = %end.format("%Y-%m-%d"),
            "TEFAS 조회 요청"
        );

        let params = [
            ("fontip", kind.api_code()),
            ("bastarih", start_str.as_str()),
            ("bittarih", end_str.as_str()),
        ];

        let response = self.client.post(&url).form(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Api { status, body });
        }

        let history: HistoryResponse = response.json().await?;

        let observations: Vec<PriceObservation> = history
            .data
            .into_iter()
            .filter_map(|row| {
                let date = parse_millis_date(&row.date_millis)?;
                Some(PriceObservation {
                    code: row.code,
                    title: row.title,
                    date,
                    price: row.price?,
                })
            })
            .collect();

        tracing::info!(kind = %kind, count = observations.len(), "TEFAS 조회 완료");
        Ok(observations)
    }
}

impl Default for TefasClient {
    fn default() -> Self {
        Self::new()
    }
}

/// epoch 밀리초 문자열을 날짜로 변환.
fn parse_millis_date(millis: &str) -> Option<NaiveDate> {
    let millis: i64 = millis.trim().parse().ok()?;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}
