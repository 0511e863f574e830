use crate::grid::HeightGrid;
use landform_common::Rgb;

/// Map an elevation to its color band.
///
/// The bands overlap and are evaluated in a fixed priority order; the first
/// matching branch wins. That order is part of the observable contract, so
/// do not reorder or "simplify" the ranges.
pub fn band_color(z: f64) -> Rgb {
    if z < 0.0 {
        Rgb::new(0.0, 0.3, 0.3) // teal, below water level
    } else if z < 0.1 {
        Rgb::new(0.3, 0.3, 0.0) // dark yellow
    } else if z < 0.15 {
        Rgb::new(0.0, 0.6, 0.0) // green
    } else if z > 0.3 {
        Rgb::new(0.3, 0.0, 0.3) // magenta
    } else if z > 0.25 {
        Rgb::new(0.0, 0.0, 0.6) // dark blue
    } else if z > 0.2 {
        Rgb::new(0.6, 0.0, 0.0)
    } else {
        Rgb::BLACK
    }
}

/// Per-vertex color buffer, flat with stride 3, derived purely from elevation.
pub fn color_buffer(grid: &HeightGrid) -> Vec<f64> {
    let div = grid.divisions();
    let mut buffer = Vec::with_capacity(grid.vertex_count() * 3);
    for i in 0..=div {
        for j in 0..=div {
            let c = band_color(grid.z(i as i64, j as i64));
            buffer.extend_from_slice(&c.to_array());
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_elevation_is_teal() {
        assert_eq!(band_color(-0.5), Rgb::new(0.0, 0.3, 0.3));
        assert_eq!(band_color(-1e-9), Rgb::new(0.0, 0.3, 0.3));
    }

    #[test]
    fn high_elevation_is_magenta() {
        assert_eq!(band_color(0.5), Rgb::new(0.3, 0.0, 0.3));
    }

    #[test]
    fn band_priority_order_is_exact() {
        assert_eq!(band_color(0.0), Rgb::new(0.3, 0.3, 0.0));
        assert_eq!(band_color(0.12), Rgb::new(0.0, 0.6, 0.0));
        assert_eq!(band_color(0.28), Rgb::new(0.0, 0.0, 0.6));
        assert_eq!(band_color(0.22), Rgb::new(0.6, 0.0, 0.0));
        // The gap between the < and > chains falls through to the default.
        assert_eq!(band_color(0.18), Rgb::BLACK);
        assert_eq!(band_color(0.2), Rgb::BLACK);
    }

    #[test]
    fn coloring_is_pure_in_z() {
        for &z in &[-0.3, 0.05, 0.13, 0.22, 0.27, 0.4] {
            assert_eq!(band_color(z), band_color(z));
        }
    }

    #[test]
    fn buffer_matches_pointwise_bands() {
        let mut grid = HeightGrid::new(2);
        grid.set_z(1, 1, 0.5);
        grid.set_z(0, 1, -0.5);
        let buffer = color_buffer(&grid);
        assert_eq!(buffer.len(), 9 * 3);
        let at = |i: usize, j: usize| {
            let idx = 3 * (i * 3 + j);
            Rgb::new(buffer[idx], buffer[idx + 1], buffer[idx + 2])
        };
        assert_eq!(at(1, 1), Rgb::new(0.3, 0.0, 0.3));
        assert_eq!(at(0, 1), Rgb::new(0.0, 0.3, 0.3));
        assert_eq!(at(0, 0), band_color(0.0));
    }
}
