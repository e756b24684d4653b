//! `peek_min` timing driver
//!
//! For every exponent `k` in the configured range, builds a heap from a
//! shuffled permutation of `0..2^k` and measures the average wall-clock cost
//! of a single `peek_min` call over a fixed number of iterations.
//!
//! `peek_min` is O(1), so the averages should stay flat as `k` grows.
//!
//! # Configuration
//!
//! [`TimingConfig::from_env`] reads:
//!
//! | Variable                 | Default | Meaning                              |
//! |--------------------------|---------|--------------------------------------|
//! | `HEAP_TIMING_MIN_EXP`    | 10      | smallest size exponent               |
//! | `HEAP_TIMING_MAX_EXP`    | 25      | largest size exponent (inclusive)    |
//! | `HEAP_TIMING_ITERATIONS` | 10000   | timed calls per size                 |
//! | `HEAP_TIMING_WARMUP_MS`  | 1000    | busy-wait before the first size      |
//! | `HEAP_TIMING_SEED`       | random  | shuffle seed                         |

use std::env;
use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::binary_min::BinaryMinHeap;

/// Largest exponent accepted; `2^MAX_EXPONENT` elements must fit in memory
pub const MAX_EXPONENT: u32 = 30;

/// Error type for timing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable or argument could not be parsed
    Invalid {
        /// Name of the offending variable or argument
        key: String,
        /// The raw value that failed to parse
        value: String,
    },
    /// The exponent range is empty or exceeds [`MAX_EXPONENT`]
    EmptyRange {
        /// Smallest size exponent
        min: u32,
        /// Largest size exponent
        max: u32,
    },
    /// The iteration count is zero
    NoIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
            ConfigError::EmptyRange { min, max } => {
                write!(
                    f,
                    "exponent range {}..={} is empty or exceeds {}",
                    min, max, MAX_EXPONENT
                )
            }
            ConfigError::NoIterations => write!(f, "iteration count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for a timing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Smallest heap size is `2^min_exponent`
    pub min_exponent: u32,
    /// Largest heap size is `2^max_exponent`
    pub max_exponent: u32,
    /// Number of timed `peek_min` calls per size
    pub iterations: u32,
    /// Busy-wait before measuring so the CPU leaves its idle state
    pub warmup: Duration,
    /// Shuffle seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_exponent: 10,
            max_exponent: 25,
            iterations: 10_000,
            warmup: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl TimingConfig {
    /// Builds a config from `HEAP_TIMING_*` environment variables
    ///
    /// Unset variables keep their [`Default`] values.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a variable does not parse or the resulting
    /// config is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup
    ///
    /// ```rust
    /// use binary_min_heap::timing::TimingConfig;
    ///
    /// let config = TimingConfig::from_lookup(|key| match key {
    ///     "HEAP_TIMING_MAX_EXP" => Some("12".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.min_exponent, 10);
    /// assert_eq!(config.max_exponent, 12);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = parse_key(&lookup, "HEAP_TIMING_MIN_EXP")? {
            config.min_exponent = v;
        }
        if let Some(v) = parse_key(&lookup, "HEAP_TIMING_MAX_EXP")? {
            config.max_exponent = v;
        }
        if let Some(v) = parse_key(&lookup, "HEAP_TIMING_ITERATIONS")? {
            config.iterations = v;
        }
        if let Some(ms) = parse_key(&lookup, "HEAP_TIMING_WARMUP_MS")? {
            config.warmup = Duration::from_millis(ms);
        }
        if let Some(seed) = parse_key(&lookup, "HEAP_TIMING_SEED")? {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the exponent range and iteration count
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyRange`] or [`ConfigError::NoIterations`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_exponent > self.max_exponent || self.max_exponent > MAX_EXPONENT {
            return Err(ConfigError::EmptyRange {
                min: self.min_exponent,
                max: self.max_exponent,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        Ok(())
    }
}

fn parse_key<F, V>(lookup: &F, key: &str) -> Result<Option<V>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value: raw,
            }),
    }
}

/// Average `peek_min` cost for one heap size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    /// Number of elements in the heap
    pub size: usize,
    /// Mean wall-clock time of one `peek_min` call, in nanoseconds
    pub average_ns: f64,
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.size, self.average_ns)
    }
}

/// Runs the timing experiment, reporting each sample as soon as it is ready
///
/// The config is not re-validated; callers building a [`TimingConfig`] by
/// hand should call [`TimingConfig::validate`] first.
pub fn run<F>(config: &TimingConfig, mut on_sample: F) -> Vec<TimingSample>
where
    F: FnMut(&TimingSample),
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !config.warmup.is_zero() {
        tracing::debug!(warmup_ms = config.warmup.as_millis() as u64, "warming up");
        let start = Instant::now();
        while start.elapsed() < config.warmup {
            std::hint::spin_loop();
        }
    }

    let mut samples = Vec::new();
    for exp in config.min_exponent..=config.max_exponent {
        let size = 1usize << exp;

        let mut values: Vec<u64> = (0..size as u64).collect();
        values.shuffle(&mut rng);

        let mut heap = BinaryMinHeap::new();
        heap.extend(values);

        let sample = TimingSample {
            size,
            average_ns: average_peek_ns(&heap, config.iterations),
        };
        tracing::info!(size, average_ns = sample.average_ns, "measured peek_min");

        on_sample(&sample);
        samples.push(sample);
    }

    samples
}

fn average_peek_ns(heap: &BinaryMinHeap<u64>, iterations: u32) -> f64 {
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        let _ = black_box(black_box(heap).peek_min());
        total += start.elapsed();
    }
    total.as_nanos() as f64 / f64::from(iterations)
}
