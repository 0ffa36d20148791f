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

//! Straight-line launch model for electric cars.
//!
//! A [`VehicleProfile`] feeds a [`ForceModel`], which [`integrate`] steps forward in time to
//! produce a [`TimeSeries`] of speed. That series can be scored against measured
//! [`ReferenceDataset`]s and [`find_optimal_factor`] grid-searches the torque rolloff factor
//! that fits the measurements best.

pub mod error;
pub mod fit;
pub mod force;
pub mod integrator;
pub mod presets;
pub mod reference;
pub mod search;
pub mod series;
pub mod vehicle;

pub use error::{LaunchModelError, Result};
pub use fit::{compare, ComparisonRow, FitResult, root_sum_squared_error};
pub use force::{ForceBreakdown, ForceModel, TorqueRolloff, tunable_decay};
pub use integrator::{integrate, IntegrationConfig};
pub use presets::Vehicle;
pub use reference::{ReferenceDataset, ReferencePoint};
pub use search::{find_optimal_factor, SearchOutcome, SearchRange};
pub use series::{DivergenceKind, DivergenceWarning, index_for_time, TimeSeries};
pub use vehicle::VehicleProfile;
