//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use bwt_mtf::compression::transform;
use bwt_mtf::tools::cli::transform_opts_init;

use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Log to stderr; stdout may be carrying the transformed data.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let options = transform_opts_init()?;

    transform(&options)?;

    info!("Done.");
    Ok(())
}
