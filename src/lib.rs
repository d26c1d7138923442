// lib.rs - Browser surface
//
// WAVE FIELD - interactive 2D wave equation playground
//
// JS owns the canvas, the input listeners and the requestAnimationFrame
// loop; everything behind them lives here. The raster hands over zero-copy:
// JS wraps output_ptr()/output_len() in an ImageData of width() x height()
// (the canvas runs at grid resolution, the browser scales it up).

mod render;
mod sim;

use wasm_bindgen::prelude::*;

use sim::Simulation;

#[wasm_bindgen]
pub struct WaveWorld {
    sim: Simulation,
}

#[wasm_bindgen]
impl WaveWorld {
    /// Build the world for a surface of the given pixel size: grid, zeroed
    /// field buffers and a fresh set of walls.
    #[wasm_bindgen(constructor)]
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            sim: Simulation::new(width_px, height_px, js_sys::Date::now() as u32),
        }
    }

    /// One animation frame: excitation schedule, two integration steps,
    /// one complete render.
    pub fn tick(&mut self) {
        self.sim.tick();
    }

    /// Surface size changed: rebuild everything, field state is discarded.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.sim.resize(width_px, height_px);
    }

    /// Pointer pressed at surface pixel coordinates.
    pub fn pointer_down(&mut self, x_px: f32, y_px: f32) {
        self.sim.pointer_down(x_px, y_px);
    }

    /// Pointer released anywhere.
    pub fn pointer_up(&mut self) {
        self.sim.pointer_up();
    }

    /// Re-roll the reflecting walls; the travelling field is untouched.
    /// The host page binds this to the R key.
    pub fn scatter_walls(&mut self) {
        self.sim.scatter_walls();
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const u8 {
        self.sim.raster_ptr()
    }

    pub fn output_len(&self) -> usize {
        self.sim.raster_len()
    }

    pub fn width(&self) -> u32 {
        self.sim.nx() as u32
    }

    pub fn height(&self) -> u32 {
        self.sim.ny() as u32
    }
}
