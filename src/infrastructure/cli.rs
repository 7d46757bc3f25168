use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

/// Rates become `1 / rate` second intervals, so only finite positive values work.
fn positive_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("`{s}` must be a positive number"))
    }
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0,
        value_parser = positive_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0,
        value_parser = positive_rate
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory to read config.{json5,json,yaml,toml,ini} from"
    )]
    pub config_dir: Option<PathBuf>,

    #[arg(long, help = "Print the configured routes and exit")]
    pub print_routes: bool,
}
