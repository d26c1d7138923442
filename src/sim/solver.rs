// solver.rs - Explicit leapfrog integration
//
// next = 2*cur - prev + c2dt2 * lap over the 5-point Laplacian, then a mild
// damping multiplier. Interior cells only: the boundary ring is never written
// and acts as a fixed zero edge. Wall cells clamp the current field to zero
// and skip the stencil, so their next value is whatever the scratch held.

use super::grid::{DX, DY, Grid};

pub const DAMPING: f32 = 0.998;

pub fn step(prev: &[f32], cur: &mut [f32], next: &mut [f32], walls: &[u8], grid: &Grid) {
    if grid.is_degenerate() {
        return;
    }
    let inv_dx2 = 1.0 / (DX * DX);
    let inv_dy2 = 1.0 / (DY * DY);

    for j in 1..grid.ny - 1 {
        let row = j * grid.nx;
        let above = row - grid.nx;
        let below = row + grid.nx;
        for i in 1..grid.nx - 1 {
            let id = row + i;

            if walls[id] != 0 {
                // Reflecting wall: pin the field
                cur[id] = 0.0;
                continue;
            }

            let lap = (cur[id - 1] + cur[id + 1] - 2.0 * cur[id]) * inv_dx2
                + (cur[above + i] + cur[below + i] - 2.0 * cur[id]) * inv_dy2;
            next[id] = (2.0 * cur[id] - prev[id] + grid.c2dt2 * lap) * DAMPING;
        }
    }
}
