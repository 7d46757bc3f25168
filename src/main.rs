use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use navshell::{
    app::App,
    infrastructure::{
        cli::Cli,
        config::Config,
        tui::{event_source::EventSource, real::RealTui, TuiLike},
    },
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new(args.config_dir.clone())?;

    if args.print_routes {
        for entry in config.navigation_model()?.entries() {
            println!("{}\t{}", entry.label(), entry.target());
        }
        return Ok(());
    }

    let tui: Arc<Mutex<dyn TuiLike>> = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut app = App::new(config, Arc::clone(&tui), EventSource::tui(tui))?;
    app.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
