//! Command-line interface running the full mosaic pipeline

use crate::algorithm::executor::{GeneratorConfig, MosaicGenerator, StandardGenerator};
use crate::analysis::statistics::MosaicStatistics;
use crate::io::configuration::RANDOMIZER_PASSES;
use crate::io::error::Result;
use crate::io::ppm::{export_ppm, write_ppm};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::Image;
use clap::Parser;
use rand::Rng;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(
    author,
    version,
    about = "Generate a pixel mosaic where no two neighbouring pixels share a color"
)]
/// Command-line arguments; with none given the image goes to stdout
pub struct Cli {
    /// Random seed for reproducible output (default: OS entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of randomization passes over the full grid
    #[arg(short, long, default_value_t = RANDOMIZER_PASSES)]
    pub passes: usize,

    /// Write the image to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator settings derived from the arguments
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            passes: self.passes,
        }
    }
}

/// Runs generation and output according to CLI arguments
pub struct MosaicRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the standard mosaic and write it out
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the image cannot be written
    pub fn run(&self) -> Result<()> {
        let config = self.cli.generator_config();
        let mut generator = self.cli.seed.map_or_else(
            || StandardGenerator::from_os_rng(config),
            |seed| StandardGenerator::from_seed(seed, config),
        );

        let image = self.generate(&mut generator)?;
        self.report(&image)?;
        self.write(&image)
    }

    /// Drive a generator stage by stage, updating progress between stages
    ///
    /// # Errors
    ///
    /// Returns an error if the tile cannot be solved or a pass fails
    pub fn generate<
        const TILE_SIDE: usize,
        const TILE_COLORS: usize,
        const SIDE: usize,
        const COLORS: usize,
        R: Rng,
    >(
        &self,
        generator: &mut MosaicGenerator<TILE_SIDE, TILE_COLORS, SIDE, COLORS, R>,
    ) -> Result<Image<SIDE, COLORS>> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_solving(TILE_SIDE, TILE_COLORS);
        }

        let tile = generator.solve_tile()?;
        let mut image = generator.tile(&tile)?;

        let passes = generator.config().passes;
        if let Some(ref pm) = self.progress_manager {
            pm.start_randomizing(SIDE, passes);
        }

        for _ in 0..passes {
            generator.randomize_pass(&mut image)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_pass();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(image)
    }

    // Allow print for the user-facing summary line
    #[allow(clippy::print_stderr)]
    fn report<const SIDE: usize, const COLORS: usize>(
        &self,
        image: &Image<SIDE, COLORS>,
    ) -> Result<()> {
        if self.cli.quiet {
            return Ok(());
        }

        let statistics = MosaicStatistics::from_image(image)?;
        eprintln!("Generated {SIDE}x{SIDE} mosaic: {statistics}");
        Ok(())
    }

    fn write<const SIDE: usize, const COLORS: usize>(
        &self,
        image: &Image<SIDE, COLORS>,
    ) -> Result<()> {
        self.cli.output.as_deref().map_or_else(
            || {
                let mut writer = BufWriter::new(std::io::stdout().lock());
                write_ppm(image, &mut writer, Path::new("<stdout>"))
            },
            |path| export_ppm(image, path),
        )
    }
}
