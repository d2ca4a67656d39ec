use anyhow::Result;

use ewaste2go::{config::Settings, logging, App};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    let _log_path = logging::init_logging(&settings.log_level)?;

    App::new(settings).run().await?;

    Ok(())
}
