use drape::{
    ClothParams, ClothSimulation, NoOpStepObserver, SimulationConfig, TopologyParameter, Vec2,
};
use wasm_bindgen::prelude::*;

fn js_error(e: drape::ClothError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn flatten(points: impl Iterator<Item = Vec2<f32>>, len: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(len * 2);
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    sim: ClothSimulation<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, spacing: f32) -> Result<ClothDemo, JsValue> {
        let params = ClothParams::new().with_size(rows, cols).with_spacing(spacing);
        let sim = ClothSimulation::new(params, SimulationConfig::new()).map_err(js_error)?;
        Ok(ClothDemo { sim })
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        self.sim.step(&mut NoOpStepObserver);
    }

    /// Grab the particle under the pointer. Returns false on a miss.
    pub fn select(&mut self, x: f32, y: f32) -> bool {
        self.sim.select_particle_at(Vec2::new(x, y)).is_some()
    }

    pub fn drag(&mut self, x: f32, y: f32) {
        self.sim.move_held_particle_to(Vec2::new(x, y));
    }

    pub fn release(&mut self) {
        self.sim.release_held_particle();
    }

    /// Apply a slider change: "rows", "cols", "spacing", "stiffness" or "damping".
    pub fn set_parameter(&mut self, name: &str, value: f32) -> Result<(), JsValue> {
        let parameter = TopologyParameter::from_name(name, value).map_err(js_error)?;
        self.sim.set_topology_parameter(parameter).map_err(js_error)
    }

    pub fn set_collisions(&mut self, enabled: bool) {
        self.sim.set_collisions_enabled(enabled);
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let particles = self.sim.particles();
        flatten(particles.iter().map(|p| p.pos), particles.len())
    }

    /// Returns flat [ax, ay, bx, by, ...], one segment per spring
    pub fn springs(&self) -> Vec<f32> {
        let count = self.sim.springs().len();
        flatten(
            self.sim.spring_segments().flat_map(|(a, b)| [a, b]),
            count * 2,
        )
    }

    pub fn radii(&self) -> Vec<f32> {
        self.sim.particles().iter().map(|p| p.radius()).collect()
    }

    /// Returns flat [r0, g0, b0, r1, g1, b1, ...] in row-major order
    pub fn colors(&self) -> Vec<u8> {
        let particles = self.sim.particles();
        let mut out = Vec::with_capacity(particles.len() * 3);
        for p in particles {
            out.extend_from_slice(&[p.color.r, p.color.g, p.color.b]);
        }
        out
    }

    pub fn particle_count(&self) -> usize {
        self.sim.particles().len()
    }

    pub fn cols(&self) -> usize {
        self.sim.topology().cols()
    }

    pub fn rows(&self) -> usize {
        self.sim.topology().rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_cover_every_particle() {
        let demo = ClothDemo::new(4, 3, 20.0).ok().unwrap();
        let n = demo.particle_count();
        assert_eq!(n, 12);
        assert_eq!(demo.positions().len(), n * 2);
        assert_eq!(demo.radii().len(), n);
        let colors = demo.colors();
        assert_eq!(colors.len(), n * 3);
        assert!(colors.iter().all(|&c| c == 0));
        // 9 horizontal + 8 vertical springs, two points each.
        assert_eq!(demo.springs().len(), 17 * 4);
    }
}
