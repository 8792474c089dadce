use karst_geom::Vec3;

/// One corner of a merged boundary quad. Positions are lattice corners
/// inside the shape's box, so each component fits `0..=256`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub pos: [u16; 3],
    pub normal: Vec3,
    pub material: u8,
}

/// Triangulated boundary surface of one shape. Indices reference the
/// vertex list in quad order: four vertices and two triangles per quad.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends one quad: corners `p0..p3` in merge order, shared normal
    /// and material. Triangles are `(0,1,2)` and `(2,1,3)`.
    pub(crate) fn push_quad(
        &mut self,
        corners: [[u16; 3]; 4],
        normal: Vec3,
        material: u8,
    ) {
        let base = self.vertices.len() as u32;
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
        for pos in corners {
            self.vertices.push(MeshVertex {
                pos,
                normal,
                material,
            });
        }
    }
}
