//! # Boundary image solver
//! Approximates the solid-wall condition by superimposing mirror-image
//! vortices outside the domain (method of images).
//!
//! The correction is approximate and opt-in, see
//! [`FlowField::set_boundary_correction`](crate::field::FlowField::set_boundary_correction).
//! For circular inlets the single image follows the circle theorem. For
//! rectangular inlets a fixed seven-image table is used; it does not
//! fully enforce the wall conditions, so residual wall-normal velocity is
//! expected.
use crate::grid::{Grid, InletShape, ZERO_TICK_EPS};
use crate::vortex::{InducedVelocity, Kernel, VortexData};
use ndarray::Array2;

/// Summed (u, v) contribution of all image vortices of one real vortex,
/// evaluated through the same kernel as the real vortex
pub fn image_contribution(
    grid: &Grid,
    kernel: Kernel,
    vortex: &VortexData,
) -> (Array2<f64>, Array2<f64>) {
    let dim = grid.xg.raw_dim();
    let mut u = Array2::<f64>::zeros(dim);
    let mut v = Array2::<f64>::zeros(dim);

    for image in image_vortices(grid, vortex) {
        let (ui, vi) = kernel.induced_velocity(grid, &image);
        u += &ui;
        v += &vi;
    }
    (u, v)
}

/// Mirror positions and strengths for one real vortex
fn image_vortices(grid: &Grid, vortex: &VortexData) -> Vec<VortexData> {
    match grid.shape {
        InletShape::Rect { x_side, y_side } => {
            let [xc, yc] = vortex.centre;
            let s = vortex.strength;
            // Perpendicular distance to each wall, starting at the bottom
            // wall and going clockwise
            let d = [
                (-y_side / 2. - yc).abs(),
                (-x_side / 2. - xc).abs(),
                (y_side / 2. - yc).abs(),
                (x_side / 2. - xc).abs(),
            ];
            // Reflections across each wall plus two corner-lattice terms,
            // alternating sign. Known not to cancel the wall-normal flow
            // exactly.
            let table: [([f64; 2], f64); 7] = [
                ([xc, yc - 2. * d[0]], -s),
                ([xc - 2. * d[1], yc], -s),
                ([xc - 2. * d[1], yc - 2. * d[0]], s),
                ([xc, yc + 2. * d[1]], -s),
                ([xc, yc + 3. * d[1]], s),
                ([xc + 2. * d[3], yc], -s),
                ([xc + 3. * d[3], yc], s),
            ];
            table
                .iter()
                .map(|&(centre, strength)| VortexData {
                    centre,
                    strength,
                    ..*vortex
                })
                .collect()
        }
        InletShape::Circle { radius } => {
            let mut centre = vortex.centre;
            // A centre component exactly at the origin would put the
            // inverse point at infinity
            for c in centre.iter_mut() {
                if *c == 0. {
                    *c = ZERO_TICK_EPS;
                }
            }
            let norm2 = centre[0] * centre[0] + centre[1] * centre[1];
            let scale = radius * radius / norm2;
            // Opposite-strength image at the inverse point, circle theorem
            vec![VortexData {
                centre: [scale * centre[0], scale * centre[1]],
                strength: -vortex.strength,
                ..*vortex
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::vortex::LambOseen;

    fn circle_grid() -> Grid {
        Grid::new(InletShape::Circle { radius: 1. }, 8, 8).unwrap()
    }

    #[test]
    fn circle_image_sits_at_inverse_point() {
        let grid = circle_grid();
        let vortex = VortexData {
            centre: [0.5, 0.],
            strength: 2.,
            radius: 0.2,
            axial_vel: 1.,
        };
        let kernel = Kernel::from(LambOseen);
        let (u, v) = image_contribution(&grid, kernel, &vortex);

        // R^2 / |c|^2 * c = (2, 0), strength negated
        let expected_image = VortexData {
            centre: [2., 0.],
            strength: -2.,
            ..vortex
        };
        let (ue, ve) = kernel.induced_velocity(&grid, &expected_image);
        for (a, b) in u.iter().zip(ue.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
        for (a, b) in v.iter().zip(ve.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn circle_image_of_centred_vortex_is_negligible() {
        // A vortex at the origin mirrors to infinity; the perturbed
        // inverse point must yield a finite, essentially zero field
        let grid = circle_grid();
        let vortex = VortexData {
            centre: [0., 0.],
            strength: 2.,
            radius: 0.2,
            axial_vel: 1.,
        };
        let (u, v) = image_contribution(&grid, Kernel::from(LambOseen), &vortex);
        assert!(u.iter().all(|x| x.is_finite()));
        assert!(v.iter().all(|x| x.is_finite()));
        assert!(u.iter().all(|x| x.abs() < 1e-12));
        assert!(v.iter().all(|x| x.abs() < 1e-12));
    }

    #[test]
    fn rect_images_scale_linearly_with_strength() {
        let grid = Grid::new(
            InletShape::Rect {
                x_side: 10.,
                y_side: 10.,
            },
            10,
            10,
        )
        .unwrap();
        let base = VortexData {
            centre: [1., -2.],
            strength: 1.,
            radius: 0.5,
            axial_vel: 1.,
        };
        let doubled = VortexData {
            strength: 2.,
            ..base
        };
        let kernel = Kernel::from(LambOseen);
        let (u1, v1) = image_contribution(&grid, kernel, &base);
        let (u2, v2) = image_contribution(&grid, kernel, &doubled);
        for (a, b) in u1.iter().zip(u2.iter()) {
            assert!((2. * a - b).abs() < 1e-12);
        }
        for (a, b) in v1.iter().zip(v2.iter()) {
            assert!((2. * a - b).abs() < 1e-12);
        }
    }
}
