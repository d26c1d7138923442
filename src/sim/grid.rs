// grid.rs - Discretized spatial domain
//
// The field runs at half the surface pixel resolution. Spacing, time step and
// wave speed are fixed; c2dt2 = (c*dt)^2 is derived here and nowhere else.
// Stability of the 5-point stencil requires c2dt2 <= dx^2*dy^2/(dx^2+dy^2),
// i.e. 0.5 with unit spacing. The fixed constants give 0.25; changing dt or
// the wave speed means re-deriving that bound.

pub const DX: f32 = 1.0;
pub const DY: f32 = 1.0;
pub const DT: f32 = 0.5;
pub const WAVE_SPEED: f32 = 1.0;

#[derive(Clone, Copy)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub c2dt2: f32,
}

impl Grid {
    /// Build the grid for a surface of the given pixel dimensions.
    /// A 0x0 surface yields an empty grid; every consumer tolerates it.
    pub fn from_surface(width_px: u32, height_px: u32) -> Self {
        Self {
            nx: (width_px / 2) as usize,
            ny: (height_px / 2) as usize,
            c2dt2: (WAVE_SPEED * DT) * (WAVE_SPEED * DT),
        }
    }

    /// Row-major cell index for column i, row j.
    #[inline(always)]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i + j * self.nx
    }

    /// Cell count.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// True when there are no interior cells to integrate.
    pub fn is_degenerate(&self) -> bool {
        self.nx < 3 || self.ny < 3
    }
}
