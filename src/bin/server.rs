use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use team_roster::{init_logging, router, Cli, ScriptUrl, SheetClient, SCRIPT_URL_VAR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let script_url = ScriptUrl::default();
    if script_url.resolve().is_none() {
        warn!("{SCRIPT_URL_VAR} is not set; the API will answer 503 until it is");
    }

    let client = SheetClient::new(script_url)?;
    let app = router(client);

    let listener = TcpListener::bind(cli.bind).await?;
    info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
