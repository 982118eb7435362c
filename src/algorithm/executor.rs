use crate::{
    algorithm::randomizer::Randomizer,
    algorithm::solver::{SolverStats, TileSolver},
    algorithm::tiler::tile_image,
    io::configuration::RANDOMIZER_PASSES,
    io::error::{AlgorithmError, Result},
    spatial::grid::Image,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters controlling mosaic generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of resampling passes over the full grid
    pub passes: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            passes: RANDOMIZER_PASSES,
        }
    }
}

/// Solve-tile-randomize pipeline over compile-time grid sizes
///
/// The tile is `TILE_SIDE x TILE_SIDE` with exactly `TILE_COLORS` colors; the
/// output is `SIDE x SIDE` with up to `COLORS` colors.
#[derive(Debug)]
pub struct MosaicGenerator<
    const TILE_SIDE: usize,
    const TILE_COLORS: usize,
    const SIDE: usize,
    const COLORS: usize,
    R = StdRng,
> {
    randomizer: Randomizer<R>,
    solver: TileSolver,
    config: GeneratorConfig,
}

/// Generator producing the standard mosaic from the standard tile
pub type StandardGenerator = MosaicGenerator<
    { crate::io::configuration::TILE_SIDE },
    { crate::io::configuration::TILE_COLORS },
    { crate::io::configuration::FULL_SIDE },
    { crate::io::configuration::FULL_COLORS },
>;

impl<const TILE_SIDE: usize, const TILE_COLORS: usize, const SIDE: usize, const COLORS: usize, R>
    MosaicGenerator<TILE_SIDE, TILE_COLORS, SIDE, COLORS, R>
where
    R: Rng,
{
    /// Create a generator drawing from the given random source
    pub const fn new(rng: R, config: GeneratorConfig) -> Self {
        Self {
            randomizer: Randomizer::new(rng),
            solver: TileSolver::new(),
            config,
        }
    }

    /// Active configuration
    pub const fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Work performed by tile searches so far
    pub const fn solver_stats(&self) -> SolverStats {
        self.solver.stats()
    }

    /// Candidate draws made by the randomizer so far
    pub const fn draws(&self) -> u64 {
        self.randomizer.draws()
    }

    /// Find a complete tile that uses every tile color
    ///
    /// # Errors
    ///
    /// Returns `UnsolvableTile` when the search is exhausted rather than
    /// continuing with a partially colored tile
    pub fn solve_tile(&mut self) -> Result<Image<TILE_SIDE, TILE_COLORS>> {
        let mut tile = Image::new();
        if self.solver.solve(&mut tile)? {
            Ok(tile)
        } else {
            Err(AlgorithmError::UnsolvableTile {
                side: TILE_SIDE,
                colors: TILE_COLORS,
            })
        }
    }

    /// Repeat a tile across the full grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if the tile uses colors the full grid lacks
    // Kept as a method so callers can drive every stage through the generator
    #[allow(clippy::unused_self)]
    pub fn tile(&self, tile: &Image<TILE_SIDE, TILE_COLORS>) -> Result<Image<SIDE, COLORS>> {
        tile_image(tile)
    }

    /// Apply one resampling pass to the full grid
    ///
    /// # Errors
    ///
    /// Propagates `NoAvailableColors` from the randomizer
    pub fn randomize_pass(&mut self, image: &mut Image<SIDE, COLORS>) -> Result<()> {
        self.randomizer.pass(image)
    }

    /// Run the whole pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the tile cannot be solved or a pass fails
    pub fn generate(&mut self) -> Result<Image<SIDE, COLORS>> {
        let tile = self.solve_tile()?;
        let mut image = self.tile(&tile)?;
        self.randomizer.randomize(&mut image, self.config.passes)?;
        Ok(image)
    }
}

impl<const TILE_SIDE: usize, const TILE_COLORS: usize, const SIDE: usize, const COLORS: usize>
    MosaicGenerator<TILE_SIDE, TILE_COLORS, SIDE, COLORS, StdRng>
{
    /// Deterministic generator for reproducible output
    pub fn from_seed(seed: u64, config: GeneratorConfig) -> Self {
        Self::new(StdRng::seed_from_u64(seed), config)
    }

    /// Generator seeded from operating system entropy
    pub fn from_os_rng(config: GeneratorConfig) -> Self {
        Self::new(StdRng::from_os_rng(), config)
    }
}
