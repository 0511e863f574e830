use crate::grid::HeightGrid;
use landform_common::JitterSource;

/// Recursive midpoint displacement (diamond-square) over the grid.
///
/// Runs exactly log2(divisions) coarse-to-fine passes with the grid step
/// halving from divisions/2 down to 1. The iteration count is integral, so
/// termination never depends on floating-point equality. Boundary vertices
/// average in the 0.0 sentinel for neighbors outside the grid; that bias is
/// intentional and keeps the four corners pinned at elevation 0.
pub fn displace<J: JitterSource>(grid: &mut HeightGrid, smoothing: f64, jitter: &mut J) {
    let div = grid.divisions();
    debug_assert!(div.is_power_of_two(), "divisions must be a power of two");

    let mut step = div / 2;
    while step >= 1 {
        // Normalized pass size is 2*step/div; the jitter amplitude follows
        // log2(div * size) / log2(div), falling linearly per pass.
        let amplitude = (1.0 + (step as f64).log2()) / (div as f64).log2();

        diamond_pass(grid, step, smoothing, amplitude, jitter);
        square_pass(grid, step, smoothing, amplitude, jitter);

        step /= 2;
    }
}

/// Diamond step: every cell center at the current spacing becomes the mean
/// of its four diagonal corners plus jitter.
fn diamond_pass<J: JitterSource>(
    grid: &mut HeightGrid,
    step: u32,
    smoothing: f64,
    amplitude: f64,
    jitter: &mut J,
) {
    let div = grid.divisions();
    let s = step as i64;
    for i in (step..div).step_by(2 * step as usize) {
        for j in (step..div).step_by(2 * step as usize) {
            let (ii, jj) = (i as i64, j as i64);
            let mean = (grid.z(ii - s, jj - s)
                + grid.z(ii - s, jj + s)
                + grid.z(ii + s, jj - s)
                + grid.z(ii + s, jj + s))
                / 4.0;
            let z = mean + jitter.next_unit() / smoothing * amplitude;
            grid.set_z(i, j, z);
        }
    }
}

/// Square step: every edge midpoint at the current spacing becomes the mean
/// of its four axis neighbors plus jitter. The offset alternates per row so
/// only lattice points with odd (i/step + j/step) parity are touched.
fn square_pass<J: JitterSource>(
    grid: &mut HeightGrid,
    step: u32,
    smoothing: f64,
    amplitude: f64,
    jitter: &mut J,
) {
    let div = grid.divisions();
    let s = step as i64;
    for i in (0..=div).step_by(step as usize) {
        let start = if (i / step) % 2 == 0 { step } else { 0 };
        for j in (start..=div).step_by(2 * step as usize) {
            let (ii, jj) = (i as i64, j as i64);
            let mean = (grid.z(ii, jj - s)
                + grid.z(ii, jj + s)
                + grid.z(ii - s, jj)
                + grid.z(ii + s, jj))
                / 4.0;
            let z = mean + jitter.next_unit() / smoothing * amplitude;
            grid.set_z(i, j, z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landform_common::{NoJitter, SplitMix64};

    #[test]
    fn zero_jitter_leaves_grid_flat() {
        let mut grid = HeightGrid::new(8);
        displace(&mut grid, 6.0, &mut NoJitter);
        for i in 0..9 {
            for j in 0..9 {
                assert_eq!(grid.z(i, j), 0.0);
            }
        }
    }

    #[test]
    fn corners_stay_pinned_at_zero() {
        let mut grid = HeightGrid::new(32);
        displace(&mut grid, 6.0, &mut SplitMix64::new(42));
        let d = 32;
        assert_eq!(grid.z(0, 0), 0.0);
        assert_eq!(grid.z(0, d), 0.0);
        assert_eq!(grid.z(d, 0), 0.0);
        assert_eq!(grid.z(d, d), 0.0);
    }

    #[test]
    fn interior_vertices_are_displaced() {
        let mut grid = HeightGrid::new(16);
        displace(&mut grid, 6.0, &mut SplitMix64::new(1));
        let displaced = (0..=16)
            .flat_map(|i| (0..=16).map(move |j| (i, j)))
            .filter(|&(i, j)| grid.z(i, j) != 0.0)
            .count();
        // With nonzero jitter the bulk of the grid must have moved.
        assert!(displaced > 16 * 16 / 2);
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = HeightGrid::new(16);
        let mut b = HeightGrid::new(16);
        displace(&mut a, 6.0, &mut SplitMix64::new(7));
        displace(&mut b, 6.0, &mut SplitMix64::new(7));
        for i in 0..17 {
            for j in 0..17 {
                assert_eq!(a.z(i, j), b.z(i, j));
            }
        }
    }

    #[test]
    fn higher_smoothing_means_lower_relief() {
        let mut rough = HeightGrid::new(16);
        let mut smooth = HeightGrid::new(16);
        displace(&mut rough, 2.0, &mut SplitMix64::new(3));
        displace(&mut smooth, 20.0, &mut SplitMix64::new(3));
        let peak = |g: &HeightGrid| {
            (0..=16)
                .flat_map(|i| (0..=16).map(move |j| g.z(i, j).abs()))
                .fold(0.0_f64, f64::max)
        };
        assert!(peak(&rough) > peak(&smooth));
    }

    #[test]
    fn smallest_grid_runs_one_pass() {
        // div=2: one pass at step 1 touches the center and edge midpoints.
        let mut grid = HeightGrid::new(2);
        displace(&mut grid, 1.0, &mut SplitMix64::new(11));
        assert_ne!(grid.z(1, 1), 0.0);
        assert_eq!(grid.z(0, 0), 0.0);
        assert_eq!(grid.z(2, 2), 0.0);
    }
}
