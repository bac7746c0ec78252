// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{KineticsError, KineticsResult};
use crate::factor::Factor;
use serde::{Deserialize, Serialize};

/// Kinetic parameter set for one host model.
/// Storage for the quantities themselves stays with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KineticsConfig {
    pub model_name: String,
    #[serde(default)]
    pub reactions: Vec<ReactionParams>,
    #[serde(default)]
    pub diffusions: Vec<DiffusionParams>,
}

/// Rate law used by a reaction channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLaw {
    /// Saturating rate limited by the scarcest substrate.
    Simple,
    /// As `Simple`, with accumulated product in the denominator.
    ProductInhibition,
}

/// Transfer law used by a diffusion channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffusionLaw {
    /// Linear flux in the concentration gradient, unbounded per step.
    Clamp,
    /// Flux saturating at `rate * volume_a` per step.
    Log,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionParams {
    pub name: String,
    pub law: RateLaw,
    pub rate: f64,
    /// One factor per substrate, in binding order.
    pub substrates: Vec<Factor>,
    /// One factor per product, in binding order.
    pub products: Vec<Factor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffusionParams {
    pub name: String,
    pub law: DiffusionLaw,
    pub rate: f64,
    pub volume_a: f64,
    pub volume_b: f64,
    #[serde(default)]
    pub factor_a: Factor,
    #[serde(default)]
    pub factor_b: Factor,
}

impl KineticsConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> KineticsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> KineticsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Check the caller contracts the equations themselves never check:
    /// finite non-negative rates, positive volumes, non-zero denominators,
    /// non-empty reaction groups and a non-zero largest substrate factor.
    pub fn validate(&self) -> KineticsResult<()> {
        for reaction in &self.reactions {
            reaction.validate()?;
        }
        for diffusion in &self.diffusions {
            diffusion.validate()?;
        }
        log::debug!(
            "Validated kinetics model '{}': {} reactions, {} diffusion channels",
            self.model_name,
            self.reactions.len(),
            self.diffusions.len()
        );
        Ok(())
    }
}

impl ReactionParams {
    pub fn validate(&self) -> KineticsResult<()> {
        check_rate(&self.name, self.rate)?;
        if self.substrates.is_empty() {
            return Err(KineticsError::ConfigError(format!(
                "reaction '{}' has no substrates",
                self.name
            )));
        }
        if self.products.is_empty() {
            log::warn!("Reaction '{}' has no products", self.name);
        }
        for factor in self.substrates.iter().chain(&self.products) {
            check_factor(*factor)?;
        }
        if self.substrates.iter().all(|f| f.numerator == 0) {
            return Err(KineticsError::ConfigError(format!(
                "reaction '{}' has only zero substrate factors, rate normalization is undefined",
                self.name
            )));
        }
        Ok(())
    }
}

impl DiffusionParams {
    pub fn validate(&self) -> KineticsResult<()> {
        check_rate(&self.name, self.rate)?;
        for (label, volume) in [("volume_a", self.volume_a), ("volume_b", self.volume_b)] {
            if !(volume.is_finite() && volume > 0.0) {
                return Err(KineticsError::ConfigError(format!(
                    "diffusion '{}' requires {label} > 0, got {volume}",
                    self.name
                )));
            }
        }
        check_factor(self.factor_a)?;
        check_factor(self.factor_b)?;
        if self.factor_b.numerator == 0 {
            return Err(KineticsError::ConfigError(format!(
                "diffusion '{}' has a zero factor_b, exchange ratio is undefined",
                self.name
            )));
        }
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> KineticsResult<()> {
    if !(rate.is_finite() && rate >= 0.0) {
        return Err(KineticsError::ConfigError(format!(
            "'{name}' requires a finite rate >= 0, got {rate}"
        )));
    }
    Ok(())
}

fn check_factor(factor: Factor) -> KineticsResult<()> {
    Factor::try_new(factor.numerator, factor.denominator).map(|_| ())
}
