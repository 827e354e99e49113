//! 외부 데이터 싱크.

pub mod supabase;
