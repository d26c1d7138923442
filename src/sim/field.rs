// field.rs - Time-step field storage
//
// Three equally sized scalar buffers form a ring: previous, current and next
// relative to a head index. Advancing a step moves the head, so the roles
// rotate without copying a single cell and the old previous becomes the new
// scratch. The obstacle mask lives alongside the field: 1 marks a perfectly
// reflecting wall, 0 is free medium. It survives buffer rotation and is only
// rewritten by the wall generator or a grid rebuild.

use super::grid::Grid;

pub struct FieldRing {
    bufs: [Vec<f32>; 3],
    head: usize, // index of the `previous` buffer
    pub walls: Vec<u8>,
}

impl FieldRing {
    /// Zero-initialized buffers sized to the grid.
    pub fn allocate(grid: &Grid) -> Self {
        let size = grid.len();
        Self {
            bufs: [vec![0.0; size], vec![0.0; size], vec![0.0; size]],
            head: 0,
            walls: vec![0; size],
        }
    }

    /// Relabel the ring: previous := current, current := next, and the old
    /// previous becomes the new scratch next.
    pub fn rotate(&mut self) {
        self.head = (self.head + 1) % 3;
    }

    pub fn previous(&self) -> &[f32] {
        &self.bufs[self.head]
    }

    pub fn current(&self) -> &[f32] {
        &self.bufs[(self.head + 1) % 3]
    }

    /// All three roles at once for an integration step, plus the mask.
    /// The integrator reads previous, clamps walls in current and writes next.
    pub fn split_step(&mut self) -> (&[f32], &mut [f32], &mut [f32], &[u8]) {
        let [a, b, c] = &mut self.bufs;
        let (prev, cur, next) = match self.head {
            0 => (&*a, b, c),
            1 => (&*b, c, a),
            _ => (&*c, a, b),
        };
        (
            prev.as_slice(),
            cur.as_mut_slice(),
            next.as_mut_slice(),
            self.walls.as_slice(),
        )
    }

    /// Current buffer plus mask, for excitation.
    pub fn excite_view(&mut self) -> (&mut [f32], &[u8]) {
        let cur = (self.head + 1) % 3;
        (self.bufs[cur].as_mut_slice(), self.walls.as_slice())
    }
}
