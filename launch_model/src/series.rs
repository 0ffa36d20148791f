/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of launch-sim.
 *
 * launch-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * launch-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with launch-sim. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Display, Formatter};
use ndarray::Array1;
use crate::error::{LaunchModelError, Result};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DivergenceKind {
    /// Speed became NaN or infinite
    NonFinite,
    /// The tunable decay went negative and the motor started pulling backwards
    NegativeDriveForce
}

impl DivergenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DivergenceKind::NonFinite => "speed is no longer finite",
            DivergenceKind::NegativeDriveForce => "drive force went negative"
        }
    }
}

/// Marks the first step at which a run stopped producing physically sensible values.
/// The rest of the series is still filled in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DivergenceWarning {
    pub kind: DivergenceKind,
    pub index: usize,
    pub time: f64
}

impl Display for DivergenceWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at t={}s (sample {})", self.kind.as_str(), self.time, self.index)
    }
}

/// Converts a time into the index of the sample nearest to it
pub fn index_for_time(time: f64, step: f64) -> usize {
    (time / step).round() as usize
}

/// Speed over time for a single run. Time is in seconds and speed in mph.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    step: f64,
    time: Array1<f64>,
    speed: Array1<f64>,
    divergence: Option<DivergenceWarning>
}

impl TimeSeries {
    pub(crate) fn new(step: f64,
                      time: Array1<f64>,
                      speed: Array1<f64>,
                      divergence: Option<DivergenceWarning>) -> TimeSeries {
        TimeSeries { step, time, speed, divergence }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.time
    }

    pub fn speeds_mph(&self) -> &Array1<f64> {
        &self.speed
    }

    pub fn final_speed_mph(&self) -> f64 {
        self.speed.last().copied().unwrap_or(0.0)
    }

    pub fn divergence(&self) -> Option<DivergenceWarning> {
        self.divergence
    }

    /// (time, speed) pairs in order
    pub fn points(&self) -> impl Iterator<Item=(f64, f64)> + '_ {
        self.time.iter().copied().zip(self.speed.iter().copied())
    }

    /// Speed of the sample nearest to `time`.
    ///
    /// Fails with `HorizonTooShort` if the time is beyond the end of the run.
    pub fn speed_at(&self, time: f64) -> Result<f64> {
        if !time.is_finite() || time < 0.0 {
            return Err(LaunchModelError::InvalidReference(
                format!("can't sample a series at t={}", time)));
        }
        let index = index_for_time(time, self.step);
        match self.speed.get(index) {
            Some(speed) => Ok(*speed),
            None => Err(LaunchModelError::HorizonTooShort { time, index, len: self.len() })
        }
    }
}
