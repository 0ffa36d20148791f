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

use itertools::Itertools;
use crate::error::{LaunchModelError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferencePoint {
    /// s
    pub time: f64,
    /// mph
    pub speed: f64
}

/// Measured speeds at known times, ordered by time
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceDataset {
    name: String,
    points: Vec<ReferencePoint>
}

impl ReferenceDataset {
    pub fn new(name: &str, points: Vec<ReferencePoint>) -> Result<ReferenceDataset> {
        if points.is_empty() {
            return Err(LaunchModelError::InvalidReference(format!("{} has no points", name)));
        }
        for point in &points {
            if !point.time.is_finite() || point.time < 0.0 || !point.speed.is_finite() {
                return Err(LaunchModelError::InvalidReference(
                    format!("{} has an invalid point ({}, {})", name, point.time, point.speed)));
            }
        }
        if let Some((a, b)) = points.iter().tuple_windows().find(|(a, b)| b.time <= a.time) {
            return Err(LaunchModelError::InvalidReference(
                format!("{} times must strictly increase but {} is followed by {}", name, a.time, b.time)));
        }
        Ok(ReferenceDataset { name: name.to_string(), points })
    }

    pub fn from_slices(name: &str, times: &[f64], speeds: &[f64]) -> Result<ReferenceDataset> {
        if times.len() != speeds.len() {
            return Err(LaunchModelError::InvalidReference(
                format!("{} has {} times but {} speeds", name, times.len(), speeds.len())));
        }
        ReferenceDataset::new(name, Self::zip_points(times, speeds))
    }

    /// For the built-in calibration tables, which are checked by the preset tests
    pub(crate) fn from_trusted(name: &str, times: &[f64], speeds: &[f64]) -> ReferenceDataset {
        ReferenceDataset { name: name.to_string(), points: Self::zip_points(times, speeds) }
    }

    fn zip_points(times: &[f64], speeds: &[f64]) -> Vec<ReferencePoint> {
        times.iter().zip(speeds.iter()).map(|(time, speed)| {
            ReferencePoint { time: *time, speed: *speed }
        }).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest_time(&self) -> f64 {
        self.points.last().map(|p| p.time).unwrap_or(0.0)
    }
}
