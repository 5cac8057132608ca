//! The deformable wireframe plane behind the hero content.

use crate::config;

/// Subdivisions per plane edge; the grid has `GRID_SEGMENTS + 1` points per
/// row and column.
pub const GRID_SEGMENTS: usize = 32;
pub const GRID_POINTS: usize = GRID_SEGMENTS + 1;
/// Plane edge length in world units, centered on the origin.
pub const PLANE_EXTENT: f32 = 30.0;

/// Immutable per-scene parameters, fixed at construction. The density tier
/// is derived from the width the page opened with and intentionally never
/// re-derived on resize.
#[derive(Debug, Clone, Copy)]
pub struct SceneParams {
    pub enable_animation: bool,
    pub particle_density: u32,
    pub animation_speed: f32,
}

impl SceneParams {
    pub fn for_width(viewport_width: u32) -> Self {
        let particle_density = if viewport_width > 1200 {
            120
        } else if viewport_width > 768 {
            80
        } else {
            40
        };
        Self {
            enable_animation: true,
            particle_density,
            animation_speed: config::ANIMATION_SPEED,
        }
    }
}

/// Outcome of a frame tick: either advance the wave or skip the mesh work
/// for this tick. The render loop reschedules itself in both cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameAdvance {
    Step { dt_ms: f64 },
    Skip { dt_ms: f64 },
}

/// Backpressure gate: when a frame arrives late enough that the effective
/// rate fell below ~31fps, the expensive mesh update is dropped for that
/// tick instead of trying to catch up.
#[derive(Debug, Default)]
pub struct FrameGate {
    last_ms: f64,
}

impl FrameGate {
    pub fn new() -> Self {
        Self { last_ms: 0.0 }
    }

    pub fn tick(&mut self, now_ms: f64) -> FrameAdvance {
        let dt_ms = now_ms - self.last_ms;
        self.last_ms = now_ms;
        if dt_ms >= config::FRAME_SKIP_THRESHOLD_MS {
            FrameAdvance::Skip { dt_ms }
        } else {
            FrameAdvance::Step { dt_ms }
        }
    }
}

/// A 33x33 vertex grid over a 30x30 plane. Positions are interleaved
/// `[x, y, z]` so the buffer uploads to the GPU as-is; `z` is the animated
/// height, `x`/`y` stay fixed after construction.
pub struct WaveMesh {
    positions: Vec<f32>,
    line_indices: Vec<u16>,
}

impl WaveMesh {
    pub fn new() -> Self {
        let mut positions = Vec::with_capacity(GRID_POINTS * GRID_POINTS * 3);
        let half = PLANE_EXTENT / 2.0;
        let step = PLANE_EXTENT / GRID_SEGMENTS as f32;

        for row in 0..GRID_POINTS {
            for col in 0..GRID_POINTS {
                let x = -half + col as f32 * step;
                let y = half - row as f32 * step;
                positions.extend_from_slice(&[x, y, 0.0]);
            }
        }

        // Wireframe edges: the grid lines plus one diagonal per cell.
        let mut line_indices = Vec::new();
        let idx = |row: usize, col: usize| (row * GRID_POINTS + col) as u16;
        for row in 0..GRID_POINTS {
            for col in 0..GRID_POINTS {
                if col + 1 < GRID_POINTS {
                    line_indices.extend_from_slice(&[idx(row, col), idx(row, col + 1)]);
                }
                if row + 1 < GRID_POINTS {
                    line_indices.extend_from_slice(&[idx(row, col), idx(row + 1, col)]);
                }
                if col + 1 < GRID_POINTS && row + 1 < GRID_POINTS {
                    line_indices.extend_from_slice(&[idx(row, col), idx(row + 1, col + 1)]);
                }
            }
        }

        Self {
            positions,
            line_indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn line_indices(&self) -> &[u16] {
        &self.line_indices
    }

    /// Recompute every height for the given total animation time. Each
    /// vertex's fixed x-coordinate acts as a phase offset, so the surface
    /// carries a traveling wave instead of bobbing uniformly.
    pub fn step(&mut self, time_ms: f32, speed: f32) {
        for vertex in self.positions.chunks_exact_mut(3) {
            vertex[2] = (time_ms * speed + vertex[0]).sin() * config::WAVE_AMPLITUDE;
        }
    }

    pub fn planar_x(&self, row: usize, col: usize) -> f32 {
        self.positions[(row * GRID_POINTS + col) * 3]
    }

    pub fn height_at(&self, row: usize, col: usize) -> f32 {
        self.positions[(row * GRID_POINTS + col) * 3 + 2]
    }
}

impl Default for WaveMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a pointer position to [-1, 1] on both axes.
pub fn normalized_pointer(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> (f32, f32) {
    let nx = (client_x / viewport_w) * 2.0 - 1.0;
    let ny = (client_y / viewport_h) * 2.0 - 1.0;
    (nx as f32, ny as f32)
}

/// Mesh tilt for a normalized pointer position: the plane lies flat
/// (-90 degrees about X) and leans up to 0.1 rad toward the pointer.
/// Latest input wins; there is no easing.
pub fn tilt_for_pointer(norm_x: f32, norm_y: f32) -> (f32, f32) {
    let rot_x = -std::f32::consts::FRAC_PI_2 + norm_y * config::TILT_RANGE;
    let rot_y = norm_x * config::TILT_RANGE;
    (rot_x, rot_y)
}
