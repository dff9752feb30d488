use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::PI;

/// Line-list mesh: `indices` holds vertex pairs, one pair per edge.
#[derive(Clone, Debug, Default)]
pub struct WireframeMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl WireframeMesh {
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Wireframe of a triangulated UV sphere.
///
/// Vertices form a `(width_segments + 1) x (height_segments + 1)` grid from the
/// north pole (+Y) down to the south pole. Each grid cell is split into two
/// triangles except at the poles where one of them collapses, and every
/// distinct triangle edge is emitted once.
pub fn uv_sphere_wireframe(radius: f32, width_segments: u32, height_segments: u32) -> WireframeMesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let row = ws + 1;

    let mut vertices = Vec::with_capacity((row * (hs + 1)) as usize);
    for iy in 0..=hs {
        let theta = iy as f32 / hs as f32 * PI;
        for ix in 0..=ws {
            let phi = ix as f32 / ws as f32 * 2.0 * PI;
            vertices.push(Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }

    let mut seen = FnvHashSet::default();
    let mut indices = Vec::new();
    let mut push_triangle = |tri: [u32; 3]| {
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let (a, b) = (tri[i], tri[j]);
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                indices.push(a);
                indices.push(b);
            }
        }
    };
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                push_triangle([a, b, d]);
            }
            if iy != hs - 1 {
                push_triangle([b, c, d]);
            }
        }
    }

    WireframeMesh { vertices, indices }
}
