//! Tunables for the key-recovery attack

/// Default upper bound on candidate key lengths.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Default bias towards longer key lengths in the Kasiski vote.
pub const DEFAULT_TOLERANCE: usize = 10;

/// Parameters of the Kasiski examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KasiskiConfig {
    /// Largest key length considered; clamped to the text length.
    pub max_key_length: usize,
    /// Added to a candidate's divisor count before comparing against the
    /// best count so far. Larger values favour longer keys.
    pub tolerance: usize,
}

impl Default for KasiskiConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Configuration for a full ciphertext-only attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackConfig {
    pub kasiski: KasiskiConfig,
}

impl AttackConfig {
    pub fn new(max_key_length: usize, tolerance: usize) -> Self {
        Self {
            kasiski: KasiskiConfig {
                max_key_length,
                tolerance,
            },
        }
    }

    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.kasiski.max_key_length = max_key_length;
        self
    }

    pub fn with_tolerance(mut self, tolerance: usize) -> Self {
        self.kasiski.tolerance = tolerance;
        self
    }

    pub fn max_key_length(&self) -> usize {
        self.kasiski.max_key_length
    }

    pub fn tolerance(&self) -> usize {
        self.kasiski.tolerance
    }
}
