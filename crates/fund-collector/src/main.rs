//! 펀드 가격 동기화 배치 엔트리포인트.
//!
//! 플래그나 설정 파일 없이 환경변수만으로 동작하는 단일 실행
//! 바이너리입니다. 싱크 자격증명 누락만 비정상 종료로 이어집니다.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fund_collector::{modules, CollectorConfig};
use fund_data::{SupabaseWriter, TefasClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 로깅 초기화
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fund_collector=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("펀드 가격 동기화 시작");

    // 설정 로드 (자격증명 누락 시 여기서 즉시 종료)
    let config = CollectorConfig::from_env()?;

    let tefas = TefasClient::with_base_url(config.tefas_base_url.as_str());
    let writer = SupabaseWriter::new(
        config.supabase_url.as_str(),
        config.supabase_key.as_str(),
    )
    .with_table(config.table.as_str())
    .with_chunk_size(config.chunk_size);

    let stats = modules::sync_prices(&tefas, &writer).await;
    stats.log_summary("펀드 가격 동기화");

    tracing::info!("펀드 가격 동기화 종료");
    Ok(())
}
