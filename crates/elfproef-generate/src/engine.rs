use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use uuid::Uuid;

use elfproef_core::{check_digit, is_valid, Bsn, BSN_LENGTH};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport, Mode};

/// Engine producing 9-digit candidates that pass or deliberately fail
/// the 11-test.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

/// Candidates plus the run report.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub numbers: Vec<Bsn>,
    pub report: GenerationReport,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Produce exactly `count` candidates of the requested mode.
    ///
    /// Each candidate draws from an independent `ChaCha8Rng` stream
    /// derived from the run seed, so a fixed seed reproduces the run
    /// byte for byte and parallel batching would not change output.
    pub fn generate(&self, mode: Mode, count: u64) -> Result<GenerationResult, GenerationError> {
        if count == 0 {
            return Err(GenerationError::InvalidRequest(
                "count must be a positive integer".to_string(),
            ));
        }

        let run_id = Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(rand::random);
        let start = Instant::now();
        let mut report = GenerationReport::new(run_id.clone(), mode, seed, count);

        info!(
            run_id = %run_id,
            mode = mode.as_str(),
            count,
            seed,
            "generation started"
        );

        let mut numbers = Vec::with_capacity(count as usize);
        for index in 0..count {
            let candidate = match mode {
                Mode::Valid => self.valid_candidate(seed, index, &mut report)?,
                Mode::Invalid => self.invalid_candidate(seed, index, &mut report)?,
            };
            report.record_candidate(is_valid(&candidate));
            numbers.push(candidate);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            generated = report.generated,
            retries = report.retries,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { numbers, report })
    }

    /// Draw 8 uniform digits and derive the check digit. A prefix whose
    /// check value would be 10 is unusable under the BSN rule and is
    /// redrawn, as is the degenerate all-zero construction.
    fn valid_candidate(
        &self,
        seed: u64,
        index: u64,
        report: &mut GenerationReport,
    ) -> Result<Bsn, GenerationError> {
        for attempt in 1..=self.options.max_attempts {
            let mut rng = ChaCha8Rng::seed_from_u64(hash_candidate_seed(seed, index, attempt));

            let mut prefix = [0_u8; BSN_LENGTH - 1];
            for digit in prefix.iter_mut() {
                *digit = rng.gen_range(0..=9);
            }

            let Some(check) = check_digit(&prefix) else {
                report.record_retries(1);
                continue;
            };
            let mut digits = [0_u8; BSN_LENGTH];
            digits[..BSN_LENGTH - 1].copy_from_slice(&prefix);
            digits[BSN_LENGTH - 1] = check;

            let candidate = digits_to_bsn(digits);
            if is_valid(&candidate) {
                return Ok(candidate);
            }
            report.record_retries(1);
        }

        Err(GenerationError::AttemptsExhausted {
            attempts: self.options.max_attempts,
        })
    }

    /// Draw a full candidate; when the draw happens to pass the 11-test,
    /// step the check digit modulo 10 until the sum breaks, so failure
    /// is by construction rather than coincidence.
    fn invalid_candidate(
        &self,
        seed: u64,
        index: u64,
        report: &mut GenerationReport,
    ) -> Result<Bsn, GenerationError> {
        for attempt in 1..=self.options.max_attempts {
            let mut rng = ChaCha8Rng::seed_from_u64(hash_candidate_seed(seed, index, attempt));

            let mut digits = [0_u8; BSN_LENGTH];
            for digit in digits.iter_mut() {
                *digit = rng.gen_range(0..=9);
            }

            let candidate = digits_to_bsn(digits);
            if !is_valid(&candidate) {
                return Ok(candidate);
            }

            for _ in 0..9 {
                digits[BSN_LENGTH - 1] = (digits[BSN_LENGTH - 1] + 1) % 10;
                let perturbed = digits_to_bsn(digits);
                if !is_valid(&perturbed) {
                    return Ok(perturbed);
                }
            }
            report.record_retries(1);
        }

        Err(GenerationError::AttemptsExhausted {
            attempts: self.options.max_attempts,
        })
    }
}

fn digits_to_bsn(digits: [u8; BSN_LENGTH]) -> Bsn {
    // Digits come straight from `gen_range(0..=9)` or modulo-10 steps.
    Bsn::from_digits(digits).unwrap_or_else(|_| unreachable!("digit values stay within 0..=9"))
}

fn hash_candidate_seed(seed: u64, index: u64, attempt: u32) -> u64 {
    let mut hash = seed ^ index.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(attempt);
    hash.wrapping_mul(0x100000001b3)
}
