use std::sync::Arc;

use clap::Args;
use tracing::{info, warn};

use clubmail::{router, AppState, Settings};

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:8000", env = "CLUBMAIL_ADDRESS")]
    pub address: String,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let settings = Settings::from_env();
        if settings.resend_api_key.is_none() {
            // The server still starts; send requests fail with a
            // configuration error until the key is provided
            warn!("RESEND_API_KEY is not set, send requests will be rejected");
        }

        let state = Arc::new(AppState::from_settings(settings)?);
        let app = router(state);

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind(&self.address).await?;
            info!("Starting clubmail server on {}", self.address);
            axum::serve(listener, app).await?;
            Ok(())
        })
    }
}
