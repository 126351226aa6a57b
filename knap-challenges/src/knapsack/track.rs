use crate::KnapsackError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Parameters for seeded instance generation.
///
/// The string form is `key=value` pairs joined by commas, e.g.
/// `n_items=100,budget=25`. Keys left out keep their default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub n_items: usize,
    pub max_weight: u32,
    pub max_value: u32,
    /// Capacity as a percentage of the total item weight.
    pub budget: u32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            n_items: 50,
            max_weight: 50,
            max_value: 100,
            budget: 50,
        }
    }
}

impl Track {
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.max_weight == 0 {
            return Err(KnapsackError::InvalidTrack(
                "max_weight must be at least 1".to_string(),
            ));
        }
        if self.budget > 100 {
            return Err(KnapsackError::InvalidTrack(format!(
                "budget ({}) must be a percentage in [0, 100]",
                self.budget
            )));
        }
        Ok(())
    }
}

impl FromStr for Track {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut track = Track::default();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| KnapsackError::InvalidTrack(format!("expected key=value, got '{}'", pair)))?;
            let parse_err =
                |_| KnapsackError::InvalidTrack(format!("invalid value for {}: '{}'", key, value));
            match key.trim() {
                "n_items" => track.n_items = value.trim().parse().map_err(parse_err)?,
                "max_weight" => track.max_weight = value.trim().parse().map_err(parse_err)?,
                "max_value" => track.max_value = value.trim().parse().map_err(parse_err)?,
                "budget" => track.budget = value.trim().parse().map_err(parse_err)?,
                other => {
                    return Err(KnapsackError::InvalidTrack(format!("unknown key '{}'", other)))
                }
            }
        }
        track.validate()?;
        Ok(track)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n_items={},max_weight={},max_value={},budget={}",
            self.n_items, self.max_weight, self.max_value, self.budget
        )
    }
}
