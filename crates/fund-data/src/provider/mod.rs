//! 외부 데이터 제공자.

pub mod tefas;
