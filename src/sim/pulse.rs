// pulse.rs - Gaussian excitation
//
// Adds a radially symmetric bump to the current field inside a 3-sigma box
// around a cell. Wall cells and the boundary ring take no energy; repeated
// pulses accumulate, nothing is clamped at injection time.

use super::grid::Grid;

pub const AMPLITUDE: f32 = 2.0;
pub const SIGMA: f32 = 2.0;

pub fn inject(
    field: &mut [f32],
    walls: &[u8],
    grid: &Grid,
    center_i: usize,
    center_j: usize,
    amp: f32,
    sigma: f32,
) {
    let reach = (3.0 * sigma) as i32;
    let nx = grid.nx as i32;
    let ny = grid.ny as i32;

    for dj in -reach..=reach {
        let j = center_j as i32 + dj;
        if j <= 0 || j >= ny - 1 {
            continue;
        }
        for di in -reach..=reach {
            let i = center_i as i32 + di;
            if i <= 0 || i >= nx - 1 {
                continue;
            }
            let id = grid.idx(i as usize, j as usize);
            if walls[id] != 0 {
                continue;
            }
            let r2 = (di * di + dj * dj) as f32 / (sigma * sigma);
            field[id] += amp * (-0.5 * r2).exp();
        }
    }
}
