//! 펀드 도메인 기본 타입.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// TEFAS 펀드 분류 태그.
///
/// 수집 요청을 분할하는 단위이며, 선언 순서대로 순차 조회됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundKind {
    /// 증권 투자 펀드 (YAT)
    Yat,
    /// 연금 펀드 (EMK)
    Emk,
    /// 상장지수 펀드 (BYF)
    Byf,
}

impl FundKind {
    /// 고정된 수집 대상 전체 (선언 순서 = 조회 순서).
    pub const ALL: [FundKind; 3] = [FundKind::Yat, FundKind::Emk, FundKind::Byf];

    /// TEFAS API 요청에 사용하는 분류 코드 반환.
    pub fn api_code(&self) -> &'static str {
        match self {
            FundKind::Yat => "YAT",
            FundKind::Emk => "EMK",
            FundKind::Byf => "BYF",
        }
    }
}

impl std::fmt::Display for FundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.api_code())
    }
}

/// 일별 펀드 가격 관측치.
///
/// 데이터 소스가 반환하는 행 단위이며, (code, date)가 고유 키입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceObservation {
    /// 펀드 코드
    pub code: String,
    /// 펀드명
    pub title: String,
    /// 관측일
    pub date: NaiveDate,
    /// 가격
    pub price: f64,
}

/// upsert 단위 수익률 레코드.
///
/// 필드명은 싱크 테이블(`fund_prices`)의 컬럼명과 일치하며,
/// 직렬화된 형태가 그대로 전송됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    /// 펀드 코드 (upsert 충돌 키)
    pub code: String,
    /// 펀드명
    pub name: String,
    /// 당일 가격
    pub price: f64,
    /// 전일 대비 수익률 (%)
    pub daily_return: f64,
    /// 기준일 (YYYY-MM-DD)
    pub last_updated: String,
}
