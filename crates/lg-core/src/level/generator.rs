//! Level generation driver
//!
//! Runs the two phases in order: the route walk, then template stamping.
//! A failed walk never reaches stamping.

use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, GenerationError};
use crate::rng::LevelRng;

use super::grid::LevelGrid;
use super::route::{RouteGrid, StepSource, WeightedWalk, generate_route};
use super::stamp::stamp_rooms;
use super::template::RoomTemplateLibrary;

/// Output of one successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedLevel {
    /// Seed of the RNG that produced this level
    pub seed: u64,
    pub route: RouteGrid,
    pub grid: LevelGrid,
}

/// Builds levels from a configuration and a template library
#[derive(Debug, Clone, Default)]
pub struct LevelGenerator {
    config: GeneratorConfig,
    library: RoomTemplateLibrary,
}

impl LevelGenerator {
    /// Fails if `config` has a zero step cap or attempt count
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            library: RoomTemplateLibrary::standard(),
        })
    }

    pub fn with_library(mut self, library: RoomTemplateLibrary) -> Self {
        self.library = library;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn library(&self) -> &RoomTemplateLibrary {
        &self.library
    }

    /// Route phase, driven by any step source
    pub fn generate_route<S>(&self, source: &mut S) -> Result<RouteGrid, GenerationError>
    where
        S: StepSource + ?Sized,
    {
        generate_route(source, self.config.max_walk_steps)
    }

    /// Stamp phase
    pub fn stamp_rooms(&self, route: &RouteGrid, rng: &mut LevelRng) -> LevelGrid {
        stamp_rooms(route, &self.library, rng)
    }

    /// One route attempt followed by stamping
    pub fn generate(&self, rng: &mut LevelRng) -> Result<GeneratedLevel, GenerationError> {
        let route = {
            let mut walk = WeightedWalk::new(rng, self.config.walk);
            self.generate_route(&mut walk)?
        };
        let grid = self.stamp_rooms(&route, rng);
        Ok(GeneratedLevel {
            seed: rng.seed(),
            route,
            grid,
        })
    }

    /// Retry `generate` up to `max_attempts` times on the same RNG stream.
    ///
    /// The first attempt always runs. On exhaustion the last attempt's error
    /// is kept as the source of `RetriesExhausted`.
    pub fn generate_with_retries(
        &self,
        rng: &mut LevelRng,
    ) -> Result<GeneratedLevel, GenerationError> {
        let attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.generate(rng) {
                Ok(level) => {
                    log::debug!("generated level from seed {} on attempt {}", rng.seed(), attempt);
                    return Ok(level);
                }
                Err(err) => {
                    log::warn!("level attempt {}/{} failed: {}", attempt, attempts, err);
                    if attempt >= attempts {
                        return Err(GenerationError::RetriesExhausted {
                            attempts,
                            last: Box::new(err),
                        });
                    }
                }
            }
            attempt += 1;
        }
    }
}

/// Generate a level with the default configuration.
///
/// With `None` the seed is drawn from entropy.
pub fn generate_level(seed: Option<u64>) -> Result<LevelGrid, GenerationError> {
    let mut rng = LevelRng::from_optional_seed(seed);
    LevelGenerator::default()
        .generate_with_retries(&mut rng)
        .map(|level| level.grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::WalkWeights;
    use crate::level::route::RoomClass;

    #[test]
    fn test_generate_level_is_deterministic() {
        assert_eq!(generate_level(Some(42)), generate_level(Some(42)));
    }

    #[test]
    fn test_generated_level_reports_seed() {
        let mut rng = LevelRng::new(1234);
        let level = LevelGenerator::default().generate(&mut rng).unwrap();
        assert_eq!(level.seed, 1234);
        assert_eq!(level.route.count(RoomClass::Start), 1);
        assert_eq!(level.route.count(RoomClass::End), 1);
    }

    #[test]
    fn test_retries_exhausted() {
        // Only sideways moves and a one-step cap: every attempt from the
        // top row fails
        let config = GeneratorConfig {
            walk: WalkWeights::new(1, 1, 0).unwrap(),
            max_walk_steps: 1,
            max_attempts: 4,
        };
        let generator = LevelGenerator::new(config).unwrap();
        let err = generator.generate_with_retries(&mut LevelRng::new(9)).unwrap_err();
        assert_eq!(
            err,
            GenerationError::RetriesExhausted {
                attempts: 4,
                last: Box::new(GenerationError::RouteDidNotTerminate { max_steps: 1 }),
            }
        );
    }

    #[test]
    fn test_retries_exhausted_keeps_last_failure() {
        let config = GeneratorConfig {
            walk: WalkWeights::new(1, 1, 0).unwrap(),
            max_walk_steps: 2,
            max_attempts: 1,
        };
        let generator = LevelGenerator::new(config).unwrap();
        let err = generator.generate_with_retries(&mut LevelRng::new(3)).unwrap_err();
        assert_eq!(err.to_string(), "level generation failed after 1 attempts");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("route walk did not reach the bottom row within 2 steps")
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let zero_attempts = GeneratorConfig {
            max_attempts: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            LevelGenerator::new(zero_attempts),
            Err(ConfigError::ZeroAttempts)
        ));
        let zero_steps = GeneratorConfig {
            max_walk_steps: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(LevelGenerator::new(zero_steps), Err(ConfigError::ZeroSteps)));
        assert!(LevelGenerator::new(GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_single_attempt_error_is_route_failure() {
        let config = GeneratorConfig {
            walk: WalkWeights::new(0, 0, 1).unwrap(),
            max_walk_steps: 3,
            max_attempts: 1,
        };
        let result = LevelGenerator::new(config).unwrap().generate(&mut LevelRng::new(0));
        assert_eq!(result, Err(GenerationError::RouteDidNotTerminate { max_steps: 3 }));
    }
}
