//! Salience tiers mapping relative word weight to font size and color

use crate::io::configuration::{TIER_HIGH_THRESHOLD, TIER_MID_THRESHOLD, TIER_TOP_THRESHOLD};
use crate::io::error::{Result, invalid_argument};

/// Visual style shared by every label of similar weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    /// Class name used by renderers
    pub name: String,
    /// Fill color
    pub color: String,
    /// Font size in pixels, also the label height
    pub font_size: u32,
}

impl Tier {
    /// Create a tier
    pub fn new(name: impl Into<String>, color: impl Into<String>, font_size: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            font_size,
        }
    }
}

/// Tiers ordered from heaviest to lightest with their minimum relative weights
#[derive(Debug, Clone, PartialEq)]
pub struct TierLadder {
    rungs: Vec<(f64, Tier)>,
    fallback: Tier,
}

impl Default for TierLadder {
    fn default() -> Self {
        Self {
            rungs: vec![
                (TIER_TOP_THRESHOLD, Tier::new("top10", "blue", 128)),
                (TIER_HIGH_THRESHOLD, Tier::new("top25", "dodgerblue", 64)),
                (TIER_MID_THRESHOLD, Tier::new("top50", "lightblue", 32)),
            ],
            fallback: Tier::new("top80", "lightskyblue", 16),
        }
    }
}

impl TierLadder {
    /// Create a ladder from `(threshold, tier)` rungs and a tier for everything below
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are not strictly descending, fall
    /// outside `(0, 1]`, or any font size is zero
    pub fn new(rungs: Vec<(f64, Tier)>, fallback: Tier) -> Result<Self> {
        let mut previous = f64::INFINITY;
        for (threshold, tier) in &rungs {
            if !(*threshold > 0.0 && *threshold <= 1.0) {
                return Err(invalid_argument(
                    "threshold",
                    threshold,
                    &"tier thresholds must lie in (0, 1]",
                ));
            }
            if *threshold >= previous {
                return Err(invalid_argument(
                    "threshold",
                    threshold,
                    &"tier thresholds must be strictly descending",
                ));
            }
            if tier.font_size == 0 {
                return Err(invalid_argument(
                    "font_size",
                    &tier.name,
                    &"tier font size must be positive",
                ));
            }
            previous = *threshold;
        }
        if fallback.font_size == 0 {
            return Err(invalid_argument(
                "font_size",
                &fallback.name,
                &"tier font size must be positive",
            ));
        }

        Ok(Self { rungs, fallback })
    }

    /// Tier for a weight relative to the heaviest word
    ///
    /// The first rung whose threshold the ratio reaches wins.
    pub fn classify(&self, ratio: f64) -> &Tier {
        self.rungs
            .iter()
            .find(|(threshold, _)| ratio >= *threshold)
            .map_or(&self.fallback, |(_, tier)| tier)
    }

    /// Every tier, heaviest first
    pub fn tiers(&self) -> Vec<Tier> {
        self.rungs
            .iter()
            .map(|(_, tier)| tier.clone())
            .chain(std::iter::once(self.fallback.clone()))
            .collect()
    }
}
