//! 동기화 모듈.

pub mod price_sync;

pub use price_sync::sync_prices;
