// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iterator.

use num::Complex;

/// The squared magnitude past which an orbit is known to run off to
/// infinity.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Iterate z = z² + c from z = 0 and count how many steps it takes
/// before |z|² exceeds 4.  A point that never gets there within
/// `max_iterations` steps returns `max_iterations` and is considered
/// inside the set.  An orbit sitting exactly on the boundary keeps
/// going.  A limit of zero returns zero without iterating.
pub fn escape_time(c: Complex<f64>, max_iterations: u32) -> u32 {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    let mut iterations = 0;
    while z.norm_sqr() <= ESCAPE_RADIUS_SQR && iterations < max_iterations {
        z = z * z + c;
        iterations += 1;
    }
    iterations
}

/// True if `escape_time` classifies the point as inside the set.
pub fn is_inside(c: Complex<f64>, max_iterations: u32) -> bool {
    escape_time(c, max_iterations) == max_iterations
}
