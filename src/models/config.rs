use crate::assets::AssetLoader;
use crate::services::solution_cache::DEFAULT_MAX_ENTRIES;
use filter_solver::SolverConfig;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Solver schedule and seeding
    #[serde(default)]
    pub solver: SolverConfig,

    /// HTTP server behavior
    #[serde(default)]
    pub server: ServerConfig,
}

/// Configuration of the HTTP surface
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Keep seeded solutions in memory
    #[serde(default = "default_cache_solutions")]
    pub cache_solutions: bool,

    /// Cached solutions kept before the oldest is evicted
    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,
}

fn default_cache_solutions() -> bool {
    true
}

fn default_cache_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cache_solutions: default_cache_solutions(),
            cache_max_entries: default_cache_max_entries(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to defaults on error.
    ///
    /// A solver section that parses but cannot drive a search is replaced
    /// by the default schedule.
    pub fn parse(content: &str) -> Self {
        if content.trim().is_empty() {
            return Self::default();
        }
        match serde_yaml::from_str::<Option<Self>>(content) {
            Ok(config) => {
                // A document holding only comments deserializes to None
                let mut config = config.unwrap_or_default();
                if let Err(e) = config.solver.validate() {
                    tracing::warn!(%e, "Invalid solver config, using default solver settings");
                    config.solver = SolverConfig::default();
                }
                tracing::info!(
                    seed = ?config.solver.seed,
                    parallel = config.solver.parallel_restarts,
                    restarts = config.solver.wide.restarts,
                    cache = config.server.cache_solutions,
                    cache_max_entries = config.server.cache_max_entries,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_solver::solver::{DEFAULT_RESTARTS, WIDE_STEP_SIZES};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.solver, SolverConfig::default());
        assert!(config.server.cache_solutions);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = AppConfig::load_from_assets(&AssetLoader::new(None));
        assert_eq!(config.solver, SolverConfig::default());
        assert_eq!(config.solver.wide.step_sizes, WIDE_STEP_SIZES);
        assert!(config.server.cache_solutions);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::parse(
            r#"
solver:
  seed: 42
  wide:
    restarts: 5
"#,
        );
        assert_eq!(config.solver.seed, Some(42));
        assert_eq!(config.solver.wide.restarts, 5);
        assert_eq!(config.solver.wide.iterations, 1000);
        assert_eq!(config.solver.narrow.iterations, 500);
        assert!(config.server.cache_solutions);
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        let config = AppConfig::parse("solver: [not, a, map");
        assert_eq!(config.solver.wide.restarts, DEFAULT_RESTARTS);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::parse("");
        assert_eq!(config.solver, SolverConfig::default());
    }

    #[test]
    fn test_server_section() {
        let config = AppConfig::parse("server:\n  cache_solutions: false\n");
        assert!(!config.server.cache_solutions);
        assert_eq!(config.server.cache_max_entries, DEFAULT_MAX_ENTRIES);

        let config = AppConfig::parse("server:\n  cache_max_entries: 16\n");
        assert!(config.server.cache_solutions);
        assert_eq!(config.server.cache_max_entries, 16);
    }

    #[test]
    fn test_zero_perturbation_falls_back_to_default_solver() {
        let config = AppConfig::parse(
            r#"
solver:
  wide:
    perturbation: 0
server:
  cache_solutions: false
"#,
        );
        assert_eq!(config.solver, SolverConfig::default());
        // Other sections are unaffected
        assert!(!config.server.cache_solutions);
    }

    #[test]
    fn test_invalid_schedule_values_fall_back() {
        for yaml in [
            "solver:\n  wide:\n    perturbation: -3\n",
            "solver:\n  narrow:\n    perturbation: .nan\n",
            "solver:\n  wide:\n    step_sizes: [60, 180, -1, 600, 1.2, 1.2]\n",
            "solver:\n  narrow:\n    step_weights: [0.25, 0.25, .inf, 0.25, 0.25, 0.2]\n",
            "solver:\n  wide:\n    stability: -10\n",
            "solver:\n  wide:\n    iterations: 0\n",
            "solver:\n  narrow:\n    iterations: 0\n",
        ] {
            let config = AppConfig::parse(yaml);
            assert_eq!(config.solver, SolverConfig::default(), "{yaml}");
        }
    }
}
