//! # Fund Data
//!
//! 펀드 동기화 작업의 외부 협력자를 제공합니다:
//! - TEFAS 가격 제공자 (데이터 소스)
//! - Supabase PostgREST 기록자 (데이터 싱크)

pub mod error;
pub mod provider;
pub mod storage;

pub use error::{DataError, Result};
pub use provider::tefas::TefasClient;
pub use storage::supabase::{SupabaseWriter, WriteStats};
