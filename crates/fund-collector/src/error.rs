//! 에러 타입 정의.

use std::fmt;

/// Collector 에러 타입.
///
/// 설정 에러만 엔트리포인트 밖으로 전파됩니다. 수집/기록 단계의
/// 실패는 발생 지점에서 로그로 변환되고 실행은 계속됩니다.
#[derive(Debug)]
pub enum CollectorError {
    /// 설정 에러 (필수 환경변수 누락 등)
    Config(String),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CollectorError {}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
