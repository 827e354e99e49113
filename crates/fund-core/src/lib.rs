//! # Fund Core
//!
//! 펀드 가격 동기화 작업의 핵심 도메인 모델을 제공합니다.
//!
//! 이 크레이트는 수집기 전반에서 사용되는 기본 타입을 제공합니다:
//! - 펀드 분류 태그 및 가격 관측치
//! - upsert 대상 수익률 레코드
//! - 일간 수익률 계산 (2개 기준일 피벗)
//! - 영업일 윈도우 계산

pub mod domain;
pub mod types;

pub use domain::*;
pub use types::*;
