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

use std::result;

pub type Result<T> = result::Result<T, LaunchModelError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LaunchModelError {
    #[error("invalid vehicle profile field `{0}`. {1}")]
    InvalidProfile(&'static str, String),
    #[error("invalid tunable factor {0}. Must be a positive number")]
    InvalidTunableFactor(f64),
    #[error("invalid integration config. {0}")]
    InvalidIntegration(String),
    #[error("invalid reference dataset. {0}")]
    InvalidReference(String),
    #[error("invalid search range. {0}")]
    InvalidSearchRange(String),
    #[error("horizon too short: reference time {time}s maps to sample {index} but the series only has {len} samples")]
    HorizonTooShort {
        time: f64,
        index: usize,
        len: usize
    }
}
