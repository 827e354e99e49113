//! 도메인 계산 로직.

pub mod bday;
pub mod returns;

pub use bday::{fetch_window, previous_business_day};
pub use returns::{compute_returns, daily_return_pct, ComputedReturns};
