// sim/ - Wave field simulation
//
// Finite-difference time-domain integration of the 2D wave equation.
// Each concern in its own module; the Simulation aggregate owns them all
// and serializes every mutation: the frame driver calls tick(), discrete
// input events land between frames.

mod exciter;
mod field;
mod grid;
mod pulse;
mod rng;
mod solver;
mod walls;

use crate::render::Raster;
use exciter::Exciter;
use field::FieldRing;
use grid::Grid;
use rng::Rng;

/// Integrator steps per rendered frame.
const STEPS_PER_FRAME: usize = 2;

/// Wave field world: grid, buffers, walls, scheduling and output.
pub struct Simulation {
    // Surface dimensions in device pixels (pointer mapping)
    surface_w: u32,
    surface_h: u32,

    grid: Grid,
    field: FieldRing,
    exciter: Exciter,
    raster: Raster,
    rng: Rng,
}

impl Simulation {
    pub fn new(surface_w: u32, surface_h: u32, seed: u32) -> Self {
        let grid = Grid::from_surface(surface_w, surface_h);
        let mut rng = Rng::new(seed);
        let mut field = FieldRing::allocate(&grid);
        walls::scatter(&grid, &mut field.walls, &mut rng);
        Self {
            surface_w,
            surface_h,
            grid,
            field,
            exciter: Exciter::new(),
            raster: Raster::new(grid.len()),
            rng,
        }
    }

    /// Full reinitialization for a new surface size. The old grid and every
    /// dependent buffer are discarded wholesale; no field state survives.
    pub fn resize(&mut self, surface_w: u32, surface_h: u32) {
        self.surface_w = surface_w;
        self.surface_h = surface_h;
        self.grid = Grid::from_surface(surface_w, surface_h);
        self.field = FieldRing::allocate(&self.grid);
        walls::scatter(&self.grid, &mut self.field.walls, &mut self.rng);
        self.raster.resize(self.grid.len());
    }

    /// One animation frame: scheduled excitation, two integrator steps,
    /// one complete render.
    pub fn tick(&mut self) {
        if self.exciter.tick() {
            self.excite_random();
        }
        for _ in 0..STEPS_PER_FRAME {
            let (prev, cur, next, walls) = self.field.split_step();
            solver::step(prev, cur, next, walls, &self.grid);
            self.field.rotate();
        }
        self.raster.render(self.field.current(), &self.field.walls);
    }

    /// Pointer pressed at surface coordinates: pulse there, start repeating.
    pub fn pointer_down(&mut self, x_px: f32, y_px: f32) {
        self.excite_at(x_px, y_px);
        self.exciter.press();
    }

    pub fn pointer_up(&mut self) {
        self.exciter.release();
    }

    /// Rewrite the obstacle mask only; wave energy in flight persists.
    pub fn scatter_walls(&mut self) {
        walls::scatter(&self.grid, &mut self.field.walls, &mut self.rng);
    }

    /// Map surface coordinates to an interior cell and inject a pulse.
    /// Out-of-range input clamps; grids without an interior ignore it.
    pub fn excite_at(&mut self, x_px: f32, y_px: f32) {
        if self.grid.is_degenerate() || self.surface_w == 0 || self.surface_h == 0 {
            return;
        }
        let grid = self.grid;
        let ci = ((x_px * grid.nx as f32 / self.surface_w as f32) as i32)
            .clamp(1, grid.nx as i32 - 2) as usize;
        let cj = ((y_px * grid.ny as f32 / self.surface_h as f32) as i32)
            .clamp(1, grid.ny as i32 - 2) as usize;
        let (cur, walls) = self.field.excite_view();
        pulse::inject(cur, walls, &grid, ci, cj, pulse::AMPLITUDE, pulse::SIGMA);
    }

    fn excite_random(&mut self) {
        let x = self.rng.next_f32() * self.surface_w as f32;
        let y = self.rng.next_f32() * self.surface_h as f32;
        self.excite_at(x, y);
    }

    // Accessors for the WASM surface
    pub fn raster_ptr(&self) -> *const u8 {
        self.raster.ptr()
    }

    pub fn raster_len(&self) -> usize {
        self.raster.len()
    }

    pub fn nx(&self) -> usize {
        self.grid.nx
    }

    pub fn ny(&self) -> usize {
        self.grid.ny
    }
}
