//! Configuration for investigation sessions.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use canned_brain::DEFAULT_MOOD_BIAS;
use case_repository::templates_path_from_env;

/// Configuration for an [`InvestigationSession`](crate::InvestigationSession).
#[derive(Debug, Clone, PartialEq)]
pub struct InvestigationConfig {
    /// Seed for the shared random source. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Optional JSON file of case templates.
    pub templates_file: Option<PathBuf>,

    /// Minimum simulated assistant latency.
    pub assistant_delay: Duration,

    /// Extra random assistant latency, up to this much.
    pub assistant_jitter: Duration,

    /// Minimum simulated suspect latency.
    pub suspect_delay: Duration,

    /// Extra random suspect latency, up to this much.
    pub suspect_jitter: Duration,

    /// Simulated latency before a deduction is scored.
    pub deduction_delay: Duration,

    /// Simulated latency before a new case is handed out.
    pub generation_delay: Duration,

    /// Probability that a suspect's mood pool answers an unmatched question.
    pub mood_bias: f64,
}

impl Default for InvestigationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            templates_file: None,
            assistant_delay: Duration::from_millis(1000),
            assistant_jitter: Duration::from_millis(2000),
            suspect_delay: Duration::from_millis(1500),
            suspect_jitter: Duration::from_millis(2000),
            deduction_delay: Duration::from_millis(2000),
            generation_delay: Duration::from_millis(2000),
            mood_bias: DEFAULT_MOOD_BIAS,
        }
    }
}

fn env_millis(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .map(Duration::from_millis)
}

impl InvestigationConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional; unparsable values fall back to defaults.
    /// - `DETECTIVE_SEED` - Seed for the random source (default: entropy)
    /// - `DETECTIVE_TEMPLATES_FILE` - JSON case templates (default: built-in)
    /// - `DETECTIVE_ASSISTANT_DELAY_MS` - Assistant base latency (default: 1000)
    /// - `DETECTIVE_ASSISTANT_JITTER_MS` - Assistant extra latency (default: 2000)
    /// - `DETECTIVE_SUSPECT_DELAY_MS` - Suspect base latency (default: 1500)
    /// - `DETECTIVE_SUSPECT_JITTER_MS` - Suspect extra latency (default: 2000)
    /// - `DETECTIVE_DEDUCTION_DELAY_MS` - Scoring latency (default: 2000)
    /// - `DETECTIVE_GENERATION_DELAY_MS` - Case generation latency (default: 2000)
    /// - `DETECTIVE_MOOD_BIAS` - Mood pool probability, 0.0 - 1.0 (default: 0.5)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let seed = env::var("DETECTIVE_SEED")
            .ok()
            .and_then(|v| v.trim().parse().ok());

        let templates_file = templates_path_from_env();

        let mood_bias = env::var("DETECTIVE_MOOD_BIAS")
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| (0.0..=1.0).contains(v))
            .unwrap_or(defaults.mood_bias);

        Self {
            seed,
            templates_file,
            assistant_delay: env_millis("DETECTIVE_ASSISTANT_DELAY_MS")
                .unwrap_or(defaults.assistant_delay),
            assistant_jitter: env_millis("DETECTIVE_ASSISTANT_JITTER_MS")
                .unwrap_or(defaults.assistant_jitter),
            suspect_delay: env_millis("DETECTIVE_SUSPECT_DELAY_MS")
                .unwrap_or(defaults.suspect_delay),
            suspect_jitter: env_millis("DETECTIVE_SUSPECT_JITTER_MS")
                .unwrap_or(defaults.suspect_jitter),
            deduction_delay: env_millis("DETECTIVE_DEDUCTION_DELAY_MS")
                .unwrap_or(defaults.deduction_delay),
            generation_delay: env_millis("DETECTIVE_GENERATION_DELAY_MS")
                .unwrap_or(defaults.generation_delay),
            mood_bias,
        }
    }

    /// Configuration with every simulated delay set to zero.
    pub fn instant() -> Self {
        Self {
            assistant_delay: Duration::ZERO,
            assistant_jitter: Duration::ZERO,
            suspect_delay: Duration::ZERO,
            suspect_jitter: Duration::ZERO,
            deduction_delay: Duration::ZERO,
            generation_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Create a new config builder.
    pub fn builder() -> InvestigationConfigBuilder {
        InvestigationConfigBuilder::default()
    }
}

/// Builder for InvestigationConfig.
#[derive(Debug, Default)]
pub struct InvestigationConfigBuilder {
    config: InvestigationConfig,
}

impl InvestigationConfigBuilder {
    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the template file.
    pub fn templates_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.templates_file = Some(path.into());
        self
    }

    /// Set the assistant latency range.
    pub fn assistant_delay(mut self, base: Duration, jitter: Duration) -> Self {
        self.config.assistant_delay = base;
        self.config.assistant_jitter = jitter;
        self
    }

    /// Set the suspect latency range.
    pub fn suspect_delay(mut self, base: Duration, jitter: Duration) -> Self {
        self.config.suspect_delay = base;
        self.config.suspect_jitter = jitter;
        self
    }

    /// Set the scoring latency.
    pub fn deduction_delay(mut self, delay: Duration) -> Self {
        self.config.deduction_delay = delay;
        self
    }

    /// Set the case generation latency.
    pub fn generation_delay(mut self, delay: Duration) -> Self {
        self.config.generation_delay = delay;
        self
    }

    /// Turn off every simulated delay.
    pub fn no_delays(mut self) -> Self {
        let seed = self.config.seed;
        let templates_file = self.config.templates_file.take();
        let mood_bias = self.config.mood_bias;
        self.config = InvestigationConfig {
            seed,
            templates_file,
            mood_bias,
            ..InvestigationConfig::instant()
        };
        self
    }

    /// Set the mood bias, clamped to 0.0 - 1.0.
    pub fn mood_bias(mut self, bias: f64) -> Self {
        self.config.mood_bias = bias.clamp(0.0, 1.0);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> InvestigationConfig {
        self.config
    }
}
