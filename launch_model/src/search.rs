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

use tracing::{debug, info};
use utils::numeric::whole_steps;
use crate::error::{LaunchModelError, Result};
use crate::fit::{FitResult, root_sum_squared_error};
use crate::force::TorqueRolloff;
use crate::integrator::{integrate, IntegrationConfig};
use crate::reference::ReferenceDataset;
use crate::vehicle::VehicleProfile;

/// Tunable factors to try: `start`, `start + step`, ... up to and including `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRange {
    pub start: f64,
    pub end: f64,
    pub step: f64
}

impl Default for SearchRange {
    fn default() -> Self {
        SearchRange { start: 1.3, end: 2.0, step: 0.01 }
    }
}

impl SearchRange {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("start", self.start), ("end", self.end), ("step", self.step)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LaunchModelError::InvalidSearchRange(
                    format!("{} must be a positive number, got {}", name, value)));
            }
        }
        if self.start > self.end {
            return Err(LaunchModelError::InvalidSearchRange(
                format!("start {} is after end {}", self.start, self.end)));
        }
        Ok(())
    }

    /// Counted in whole steps so that accumulated float error can't add or drop a candidate.
    /// A final partial step is dropped, so no candidate lies past `end`.
    pub fn candidates(&self) -> impl Iterator<Item=f64> {
        let start = self.start;
        let step = self.step;
        (0..=whole_steps(self.end - self.start, self.step)).map(move |k| start + (k as f64) * step)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub best: FitResult,
    /// Every candidate in the order it was tried
    pub evaluated: Vec<FitResult>
}

/// Grid search for the tunable factor that best reproduces the reference.
///
/// Ties go to the first (lowest) factor found.
pub fn find_optimal_factor(profile: &VehicleProfile,
                           reference: &ReferenceDataset,
                           config: &IntegrationConfig,
                           range: &SearchRange) -> Result<SearchOutcome> {
    range.validate()?;
    let mut evaluated: Vec<FitResult> = Vec::new();
    let mut best: Option<FitResult> = None;
    for factor in range.candidates() {
        let series = integrate(profile, config, TorqueRolloff::Tunable(factor))?;
        let error = root_sum_squared_error(&series, reference)?;
        debug!("{} factor {} gives error {}", profile.name, factor, error);
        let result = FitResult { tunable_factor: factor, error };
        if best.map_or(true, |current| error < current.error) {
            best = Some(result);
        }
        evaluated.push(result);
    }

    // validate() guarantees start <= end so at least one candidate ran
    let best = best.ok_or_else(|| LaunchModelError::InvalidSearchRange("no candidates to evaluate".to_string()))?;
    info!("Best factor for {} against {} is {} with error {} ({} candidates)",
          profile.name, reference.name(), best.tunable_factor, best.error, evaluated.len());
    Ok(SearchOutcome { best, evaluated })
}

#[cfg(test)]
mod tests {
    use crate::error::LaunchModelError;
    use crate::integrator::IntegrationConfig;
    use crate::presets::Vehicle;
    use crate::search::{find_optimal_factor, SearchRange};

    #[test]
    fn candidate_counts() {
        let range = SearchRange::default();
        let candidates: Vec<f64> = range.candidates().collect();
        assert_eq!(candidates.len(), 71);
        assert_eq!(candidates[0], 1.3);
        assert!((candidates[70] - 2.0).abs() < 1e-12);

        // the last step would overshoot 2.0 so it is dropped
        let uneven = SearchRange { start: 1.3, end: 2.0, step: 0.4 };
        let candidates: Vec<f64> = uneven.candidates().collect();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], 1.3);
        assert!(candidates.iter().all(|f| *f <= 2.0));

        let single = SearchRange { start: 1.5, end: 1.5, step: 0.01 };
        assert_eq!(single.candidates().collect::<Vec<f64>>(), vec![1.5]);
    }

    #[test]
    fn rejects_bad_ranges() {
        for bad in [SearchRange { start: 2.0, end: 1.3, step: 0.01 },
                    SearchRange { start: 1.3, end: 2.0, step: 0.0 },
                    SearchRange { start: -1.0, end: 2.0, step: 0.01 },
                    SearchRange { start: 1.3, end: f64::INFINITY, step: 0.01 }] {
            assert!(matches!(bad.validate(), Err(LaunchModelError::InvalidSearchRange(_))));
        }
    }

    #[test]
    fn p100d_fit() {
        let vehicle = Vehicle::ModelSP100D;
        let outcome = find_optimal_factor(&vehicle.profile(),
                                          &vehicle.reference(),
                                          &vehicle.default_integration(),
                                          &SearchRange::default()).unwrap();
        assert_eq!(outcome.evaluated.len(), 71);
        assert!((outcome.best.tunable_factor - 1.55).abs() < 1e-9);
        assert!((outcome.best.error - 8.749456899895003).abs() < 1e-6);

        let first = outcome.evaluated.first().unwrap();
        let last = outcome.evaluated.last().unwrap();
        assert!((first.error - 10.884091879572342).abs() < 1e-6);
        assert!((last.error - 11.8868353428561).abs() < 1e-6);
        assert!(outcome.best.error <= first.error);
        assert!(outcome.best.error <= last.error);
        for result in &outcome.evaluated {
            assert!(outcome.best.error <= result.error);
        }
    }

    #[test]
    fn finer_grid_does_no_worse() {
        let vehicle = Vehicle::ModelSP100D;
        let profile = vehicle.profile();
        let reference = vehicle.reference();
        let config = vehicle.default_integration();
        let coarse = find_optimal_factor(&profile, &reference, &config,
                                         &SearchRange { start: 1.4, end: 1.7, step: 0.02 }).unwrap();
        let fine = find_optimal_factor(&profile, &reference, &config,
                                       &SearchRange { start: 1.4, end: 1.7, step: 0.01 }).unwrap();
        assert_eq!(coarse.evaluated.len(), 16);
        assert_eq!(fine.evaluated.len(), 31);
        assert!(fine.best.error <= coarse.best.error);
    }

    #[test]
    fn ties_keep_the_first_factor() {
        // every candidate has the same error when the reference only covers the
        // torque-limited launch, which the factor doesn't touch
        let vehicle = Vehicle::ModelSP100D;
        let reference = crate::reference::ReferenceDataset::from_slices(
            "launch only", &[0.0, 0.5, 1.0], &[0.0, 10.0, 20.0]).unwrap();
        let config = IntegrationConfig { horizon: 2.0, step: 0.01 };
        let outcome = find_optimal_factor(&vehicle.profile(), &reference, &config,
                                          &SearchRange { start: 1.3, end: 1.4, step: 0.05 }).unwrap();
        assert_eq!(outcome.evaluated.len(), 3);
        assert_eq!(outcome.evaluated[0].error, outcome.evaluated[2].error);
        assert_eq!(outcome.best.tunable_factor, 1.3);
    }

    #[test]
    fn short_horizon_aborts_search() {
        let vehicle = Vehicle::ModelSP100D;
        let config = IntegrationConfig { horizon: 5.0, step: 0.01 };
        let result = find_optimal_factor(&vehicle.profile(), &vehicle.reference(), &config, &SearchRange::default());
        assert!(matches!(result, Err(LaunchModelError::HorizonTooShort { .. })));
    }
}
