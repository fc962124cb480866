#![warn(missing_docs)]

//! Woodgrain temperature post-processing for 3D printer G-code.
//!
//! This crate rewrites a sliced G-code program, injecting randomized
//! extruder temperature commands at layer boundaries. The temperature
//! swings change how much the filament darkens as it is laid down, which
//! prints as woodgrain-style banding.
//!
//! The rewrite is purely additive: every original line is preserved
//! verbatim and in order, and a marker comment is added so an already
//! processed file is refused on a second pass.
//!
//! # Example
//!
//! ```
//! use woodgrainer::{process_lines, GrainSettings};
//!
//! let lines: Vec<String> = vec![
//!     ";LAYER:0".into(),
//!     "G1 X10 Y10 E0.5".into(),
//!     ";LAYER:1".into(),
//!     "G1 X20 Y10 E1.0".into(),
//! ];
//!
//! let result = process_lines(&lines, &GrainSettings::default()).unwrap();
//! assert_eq!(result.stats.layer_count, 2);
//! assert_eq!(result.stats.temp_change_count, 1);
//! ```

pub mod error;
pub mod layer;
pub mod marker;
pub mod temp;

pub use error::{Result, WoodgrainError};
pub use layer::is_layer_change_line;
pub use marker::{has_been_woodgrained, is_woodgrained_line, WOODGRAIN_MARKER};
pub use temp::{sample_temp, temp_change_line};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Woodgrain parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrainSettings {
    /// Lowest temperature to set (°C).
    pub min_temp: u32,
    /// Highest temperature to set (°C).
    pub max_temp: u32,
    /// How strongly samples are pulled toward the range extremes (0 to 100).
    pub intensity: u32,
    /// Layer transitions between injected temperature changes.
    pub layer_interval: u32,
}

impl Default for GrainSettings {
    fn default() -> Self {
        Self {
            min_temp: 200,
            max_temp: 250,
            intensity: 50,
            layer_interval: 1,
        }
    }
}

impl GrainSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.min_temp > self.max_temp {
            return Err(WoodgrainError::InvalidSettings(
                "min_temp must not exceed max_temp".into(),
            ));
        }
        if self.intensity > 100 {
            return Err(WoodgrainError::InvalidSettings(
                "intensity must be between 0 and 100".into(),
            ));
        }
        if self.layer_interval == 0 {
            return Err(WoodgrainError::InvalidSettings(
                "layer_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Statistics about a rewritten program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrainStats {
    /// Number of layer boundaries seen.
    pub layer_count: usize,
    /// Number of temperature changes injected.
    pub temp_change_count: usize,
}

/// Result of woodgraining a program.
#[derive(Debug, Clone)]
pub struct GrainResult {
    /// The rewritten program.
    pub lines: Vec<String>,
    /// Rewrite statistics.
    pub stats: GrainStats,
}

/// Woodgrain a program with an explicit random source.
///
/// Walks the program in order, counting layer boundaries. Temperature
/// changes are injected between layers, never before the first one: the
/// first boundary only starts the count, and every `layer_interval`-th
/// transition after it gets a freshly sampled `M104` command appended
/// right after the boundary line. The marker comment is inserted at the
/// head of the output so a second pass is refused.
///
/// Fails with [`WoodgrainError::AlreadyProcessed`] if the program already
/// carries the marker; nothing is produced in that case.
pub fn process_lines_with<R: Rng + ?Sized>(
    rng: &mut R,
    lines: &[String],
    settings: &GrainSettings,
) -> Result<GrainResult> {
    settings.validate()?;

    if marker::has_been_woodgrained(lines) {
        return Err(WoodgrainError::AlreadyProcessed);
    }

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + 1);
    let mut layers_seen: usize = 0;
    let mut transitions_since_change: u32 = 0;
    let mut temp_changes: usize = 0;

    for line in lines {
        out.push(line.clone());

        if layer::is_layer_change_line(line) {
            layers_seen += 1;
            if layers_seen > 1 {
                transitions_since_change += 1;
                if transitions_since_change >= settings.layer_interval {
                    let target = temp::sample_temp(
                        rng,
                        settings.min_temp,
                        settings.max_temp,
                        settings.intensity,
                    );
                    out.push(temp::temp_change_line(target));
                    temp_changes += 1;
                    transitions_since_change = 0;
                }
            }
        }
    }

    out.insert(0, marker::WOODGRAIN_MARKER.to_string());

    Ok(GrainResult {
        lines: out,
        stats: GrainStats {
            layer_count: layers_seen,
            temp_change_count: temp_changes,
        },
    })
}

/// Woodgrain a program using the thread-local random source.
///
/// This is the main entry point. See [`process_lines_with`] for the
/// rewrite rules; tests that need determinism can pass a seeded RNG there
/// instead.
pub fn process_lines(lines: &[String], settings: &GrainSettings) -> Result<GrainResult> {
    process_lines_with(&mut rand::thread_rng(), lines, settings)
}
