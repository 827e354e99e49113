//! Daily fund price sync batch job.
//!
//! 이 crate는 하루 한 번 실행되는 배치 바이너리를 제공합니다:
//! - TEFAS에서 분류별(YAT/EMK/BYF) 일일 펀드 가격 수집
//! - 전일 대비 수익률(%) 계산
//! - Supabase `fund_prices` 테이블에 upsert

pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use stats::SyncStats;
