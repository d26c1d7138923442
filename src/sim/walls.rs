// walls.rs - Randomized reflecting wall segments
//
// Rewrites the obstacle mask in place: a fixed number of vertical segments,
// column and span drawn uniformly. All ranges clamp on tiny grids instead of
// failing, and columns stay inside the interior so the boundary ring is never
// marked.

use super::grid::Grid;
use super::rng::Rng;

const SEGMENT_COUNT: usize = 2;
const MIN_LEN_FRAC: f32 = 0.2;
const MAX_LEN_FRAC: f32 = 0.7;

pub fn scatter(grid: &Grid, walls: &mut [u8], rng: &mut Rng) {
    walls.fill(0);
    if grid.is_degenerate() {
        return;
    }
    let nx = grid.nx as i32;
    let ny = grid.ny as i32;

    for _ in 0..SEGMENT_COUNT {
        let x = 5 + (rng.next_f32() * (nx - 10).max(1) as f32) as i32;
        let x = x.clamp(1, nx - 2);

        let min_len = (ny as f32 * MIN_LEN_FRAC) as i32;
        let max_len = (ny as f32 * MAX_LEN_FRAC) as i32;
        let len = min_len + (rng.next_f32() * (max_len - min_len).max(1) as f32) as i32;

        // Collapses to a single cell when the grid is too small for the span
        let y1 = (2 + (rng.next_f32() * (ny - 4 - len).max(1) as f32) as i32).min(ny - 2);
        let y2 = (y1 + len).min(ny - 2);

        for y in y1..=y2 {
            walls[grid.idx(x as usize, y as usize)] = 1;
        }
    }
}
