//! 환경변수 기반 설정 모듈.

use crate::Result;

/// Collector 전체 설정.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Supabase 프로젝트 URL (필수)
    pub supabase_url: String,
    /// Supabase 서비스 키 (필수)
    pub supabase_key: String,
    /// upsert 대상 테이블
    pub table: String,
    /// 배치당 레코드 수
    pub chunk_size: usize,
    /// TEFAS base URL
    pub tefas_base_url: String,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드.
    ///
    /// `SUPABASE_URL` / `SUPABASE_KEY`는 필수이며, 없으면 설정 에러로
    /// 즉시 실패합니다 (어떤 수집도 시작되기 전).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let supabase_url = std::env::var("SUPABASE_URL").map_err(|_| {
            crate::error::CollectorError::Config(
                "SUPABASE_URL 환경변수가 설정되지 않았습니다".to_string(),
            )
        })?;

        let supabase_key = std::env::var("SUPABASE_KEY").map_err(|_| {
            crate::error::CollectorError::Config(
                "SUPABASE_KEY 환경변수가 설정되지 않았습니다".to_string(),
            )
        })?;

        Ok(Self {
            supabase_url,
            supabase_key,
            table: env_var_or("FUND_SYNC_TABLE", "fund_prices"),
            chunk_size: env_var_parse("FUND_SYNC_CHUNK_SIZE", 100),
            tefas_base_url: env_var_or("TEFAS_BASE_URL", "https://www.tefas.gov.tr"),
        })
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용).
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// 환경변수에서 문자열 로드 (없으면 기본값 사용).
fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
