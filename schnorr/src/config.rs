//! Engine selection and randomness policy.

use core::fmt;
use core::str::FromStr;
use std::env;

use rand::rngs::{OsRng, StdRng};
use rand::{SeedableRng, TryCryptoRng};
use serde::{Deserialize, Serialize};

use crate::constants::{ENGINE_ENV, SEED_ENV};
use crate::errors::SchnorrError;

/// Which implementation performs the curve arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Arbitrary-precision arithmetic in this workspace.
    #[default]
    Reference,
    /// libsecp256k1 through the `secp256k1` crate.
    Accelerated,
}

impl FromStr for EngineKind {
    type Err = SchnorrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pure" | "reference" => Ok(EngineKind::Reference),
            "fast" | "accelerated" => Ok(EngineKind::Accelerated),
            other => Err(SchnorrError::Config(format!(
                "{ENGINE_ENV}={other:?}, expected pure or fast"
            ))),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Reference => f.write_str("reference"),
            EngineKind::Accelerated => f.write_str("accelerated"),
        }
    }
}

/// Where auxiliary randomness and fresh keys come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomnessMode {
    /// The operating system generator, queried on every call.
    #[default]
    Os,
    /// Insecure. A `StdRng` seeded from the value, recreated on every call,
    /// so each call sees the same stream. For tests and reproducible runs.
    Seeded(u64),
}

impl RandomnessMode {
    /// Acquire a source for a single call.
    pub fn source(&self) -> EntropySource {
        match self {
            RandomnessMode::Os => EntropySource::Os(OsRng),
            RandomnessMode::Seeded(seed) => EntropySource::Seeded(StdRng::seed_from_u64(*seed)),
        }
    }
}

/// A randomness source scoped to one operation. Not retained between calls.
#[derive(Debug)]
pub enum EntropySource {
    Os(OsRng),
    Seeded(StdRng),
}

impl EntropySource {
    /// Fill `dst` completely or report why the source failed.
    pub fn fill(&mut self, dst: &mut [u8]) -> Result<(), SchnorrError> {
        match self {
            EntropySource::Os(rng) => fill_from(rng, dst),
            EntropySource::Seeded(rng) => fill_from(rng, dst),
        }
    }

    pub fn bytes<const N: usize>(&mut self) -> Result<[u8; N], SchnorrError> {
        let mut out = [0u8; N];
        self.fill(&mut out)?;
        Ok(out)
    }
}

fn fill_from<R: TryCryptoRng>(rng: &mut R, dst: &mut [u8]) -> Result<(), SchnorrError> {
    rng.try_fill_bytes(dst)
        .map_err(|e| SchnorrError::Randomness(e.to_string()))
}

/// Engine configuration, fixed once an engine is built from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub engine: EngineKind,
    pub randomness: RandomnessMode,
}

impl EngineConfig {
    pub fn new(engine: EngineKind, randomness: RandomnessMode) -> Self {
        EngineConfig { engine, randomness }
    }

    /// Read `SCHNORR_SIG` and `SCHNORR_SIG_SEED`; unset variables keep defaults.
    pub fn from_env() -> Result<Self, SchnorrError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// As [`EngineConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SchnorrError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EngineConfig::default();

        if let Some(value) = lookup(ENGINE_ENV).filter(|v| !v.trim().is_empty()) {
            config.engine = value.parse()?;
        }

        if let Some(value) = lookup(SEED_ENV).filter(|v| !v.trim().is_empty()) {
            let seed = value.trim().parse::<u64>().map_err(|e| {
                SchnorrError::Config(format!("{SEED_ENV}={value:?}: {e}"))
            })?;
            config.randomness = RandomnessMode::Seeded(seed);
        }

        Ok(config)
    }
}
