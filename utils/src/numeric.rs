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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

pub fn round_up_to_nearest_multiple(val: i32, multiple: i32) -> i32 {
    if val < multiple {
        return multiple;
    }
    ((val + (multiple-1)) / multiple) * multiple
}

/// Slack for step counting so that ratios like `20.0 / 0.01` or `0.7 / 0.01` that land a
/// hair either side of a whole number still count as that number.
const STEP_TOLERANCE: f64 = 1e-9;

fn step_ratio(span: f64, step: f64) -> Option<f64> {
    if !span.is_finite() || !step.is_finite() || span <= 0.0 || step <= 0.0 {
        return None;
    }
    Some(span / step)
}

/// Number of whole `step`s that fit inside `span` without going past it.
///
/// Returns 0 for a non-positive or non-finite span or step.
pub fn whole_steps(span: f64, step: f64) -> usize {
    match step_ratio(span, step) {
        Some(ratio) => (ratio + STEP_TOLERANCE).floor() as usize,
        None => 0
    }
}

/// Number of `step`s needed to reach or pass the end of `span`.
///
/// Returns 0 for a non-positive or non-finite span or step.
pub fn steps_to_cover(span: f64, step: f64) -> usize {
    match step_ratio(span, step) {
        Some(ratio) => (ratio - STEP_TOLERANCE).ceil() as usize,
        None => 0
    }
}

#[cfg(test)]
mod tests {
    use crate::numeric::{round_float_to, round_up_to_nearest_multiple, steps_to_cover, whole_steps};

    #[test]
    fn round_multiple_tests()  {
        assert_eq!(round_up_to_nearest_multiple(0, 1), 1);
        assert_eq!(round_up_to_nearest_multiple(2, 1), 2);
        assert_eq!(round_up_to_nearest_multiple(0, 20), 20);
        assert_eq!(round_up_to_nearest_multiple(19, 20), 20);
        assert_eq!(round_up_to_nearest_multiple(20, 20), 20);
        assert_eq!(round_up_to_nearest_multiple(185, 20), 200);
        assert_eq!(round_up_to_nearest_multiple(249, 20), 260);
    }

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(8.749456899895003, 3), 8.749);
        assert_eq!(round_float_to(1.5500000000000003, 2), 1.55);
        assert_eq!(round_float_to(-2.25, 0), -2.0);
    }

    #[test]
    fn whole_step_tests() {
        assert_eq!(whole_steps(20.0, 0.01), 2000);
        assert_eq!(whole_steps(50.0, 0.01), 5000);
        assert_eq!(whole_steps(2.0 - 1.3, 0.01), 70);
        assert_eq!(whole_steps(0.0, 0.01), 0);
        assert_eq!(whole_steps(1.0, 0.0), 0);
        assert_eq!(whole_steps(f64::NAN, 0.01), 0);
        assert_eq!(whole_steps(1.0, 1.0), 1);
        // partial steps don't count
        assert_eq!(whole_steps(2.0 - 1.3, 0.4), 1);
        assert_eq!(whole_steps(0.14, 0.1), 1);
    }

    #[test]
    fn covering_step_tests() {
        assert_eq!(steps_to_cover(20.0, 0.01), 2000);
        assert_eq!(steps_to_cover(50.0, 0.01), 5000);
        assert_eq!(steps_to_cover(1.0, 1.0), 1);
        // a partial step still needs a whole step to cover it
        assert_eq!(steps_to_cover(0.14, 0.1), 2);
        assert_eq!(steps_to_cover(0.05, 0.1), 1);
        assert_eq!(steps_to_cover(0.0, 0.01), 0);
        assert_eq!(steps_to_cover(1.0, f64::INFINITY), 0);
    }
}
