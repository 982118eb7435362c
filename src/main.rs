//! CLI entry point writing a mosaic as a plain-text pixmap

use clap::Parser;
use mosaic::io::cli::{Cli, MosaicRunner};

fn main() -> mosaic::Result<()> {
    let cli = Cli::parse();
    let runner = MosaicRunner::new(cli);
    runner.run()
}
