use color_eyre::eyre::Result;
use stepup_adapters::{StepUpSetting, init_tracing};
use stepup_service::StepUpService;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = StepUpSetting::load()?;
    let allowed_origins = settings.allowed_origins()?;
    let address = settings.server.socket_addr()?;

    let service = StepUpService::from_settings(&settings)?;

    let listener = TcpListener::bind(address).await?;
    tracing::info!("Starting step-up service...");

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}
