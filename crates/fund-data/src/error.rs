//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 외부 협력자(소스/싱크) 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP 요청 오류
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API가 오류 상태 코드를 반환
    #[error("API error [{status}]: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// 잘못된 응답 데이터
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, DataError>;
