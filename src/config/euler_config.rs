// src/config/euler_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use std::sync::Arc;
use rayon::ThreadPool;

use crate::error::{EulerError, Result};
use crate::integer_math::range_product::{RangeProduct, DEFAULT_THRESHOLD};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EulerConfig {
    /// Longest range multiplied without splitting
    pub threshold: u64,

    /// Worker threads for the range multiplier (None = rayon's global pool)
    pub threads: Option<usize>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Threshold comparison benchmark
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

/// Settings for the threshold comparison benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Factorials to time, one run per entry
    pub upper_bounds: Vec<u64>,

    /// Thresholds compared against each other; the first is the reference
    pub thresholds: Vec<u64>,

    /// Timed repetitions per (bound, threshold) pair
    pub iterations: u32,

    /// Directory the JSON report is written to
    pub output_dir: String,
}

impl Default for EulerConfig {
    fn default() -> Self {
        EulerConfig {
            threshold: DEFAULT_THRESHOLD,
            threads: None,
            log_level: "info".to_string(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            upper_bounds: vec![1_000, 10_000, 50_000],
            thresholds: vec![100, 1_000, 10_000],
            iterations: 3,
            output_dir: ".".to_string(),
        }
    }
}

impl EulerConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> std::result::Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("euler.toml").exists() {
            builder = builder.add_source(File::with_name("euler.toml"));
        } else if Path::new("euler.yaml").exists() {
            builder = builder.add_source(File::with_name("euler.yaml"));
        }

        Self::finish(builder, Self::environment())
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder, Self::environment())
    }

    fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("threshold", DEFAULT_THRESHOLD as i64)?
            .set_default("log_level", "info")?
            .set_default("benchmark.iterations", 3)?
            .set_default("benchmark.output_dir", ".")
    }

    /// Environment overrides, e.g. `EULER__THRESHOLD=5000` or
    /// `EULER__BENCHMARK__THRESHOLDS=100,1000`.
    fn environment() -> Environment {
        Environment::with_prefix("EULER")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("benchmark.upper_bounds")
            .with_list_parse_key("benchmark.thresholds")
    }

    fn finish(builder: ConfigBuilder<DefaultState>, environment: Environment) -> std::result::Result<Self, ConfigError> {
        let config = builder.add_source(environment).build()?;
        config.try_deserialize()
    }

    /// Dedicated worker pool when `threads` is set.
    pub fn thread_pool(&self) -> Result<Option<Arc<ThreadPool>>> {
        self.threads
            .map(|threads| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|index| format!("euler-worker-{}", index))
                    .build()
                    .map(Arc::new)
                    .map_err(|e| EulerError::ThreadPool(e.to_string()))
            })
            .transpose()
    }

    /// Builds a range multiplier from `threshold`, running in a dedicated
    /// pool when `threads` is set.
    pub fn range_product(&self) -> Result<RangeProduct> {
        let engine = RangeProduct::with_threshold(self.threshold)?;
        match self.thread_pool()? {
            Some(pool) => Ok(engine.with_pool(pool)),
            None => Ok(engine),
        }
    }

    /// Thread count the multiplier will actually use.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}
