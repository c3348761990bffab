mod app;
mod config;
mod error;
mod format;
mod logging;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    let view = config.view_settings()?;
    tracing::info!(?view, "cashbook starting");

    let mut app = app::App::new(view);
    app.run()?;

    tracing::info!(
        entries = app.state.ledger.entries().len(),
        "cashbook closed"
    );
    Ok(())
}
