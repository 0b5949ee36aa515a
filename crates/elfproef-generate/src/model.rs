use serde::{Deserialize, Serialize};

/// Requested flavour of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every emitted candidate passes the 11-test.
    Valid,
    /// Every emitted candidate fails the 11-test, by construction.
    Invalid,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Valid => "valid",
            Mode::Invalid => "invalid",
        }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Run seed; drawn from entropy when unset.
    pub seed: Option<u64>,
    /// Maximum redraw attempts for a single candidate.
    pub max_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: 64,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub mode: Mode,
    pub seed: u64,
    pub requested: u64,
    pub generated: u64,
    /// Candidates re-verified against the 11-test after generation.
    pub valid_count: u64,
    pub invalid_count: u64,
    /// Internal redraws; never user-visible failures.
    pub retries: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, mode: Mode, seed: u64, requested: u64) -> Self {
        Self {
            run_id,
            mode,
            seed,
            requested,
            generated: 0,
            valid_count: 0,
            invalid_count: 0,
            retries: 0,
            duration_ms: 0,
        }
    }

    pub fn record_candidate(&mut self, valid: bool) {
        self.generated += 1;
        if valid {
            self.valid_count += 1;
        } else {
            self.invalid_count += 1;
        }
    }

    pub fn record_retries(&mut self, retries: u64) {
        self.retries += retries;
    }

    /// True when every emitted candidate matches the requested mode.
    pub fn is_consistent(&self) -> bool {
        match self.mode {
            Mode::Valid => self.invalid_count == 0,
            Mode::Invalid => self.valid_count == 0,
        }
    }
}
