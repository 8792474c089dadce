use crate::set::VoxelSet;

/// Flat index-addressed dense byte volume: `index = x + w * (y + h * z)`.
/// Scratch arena for the transforms; one allocation per call.
#[derive(Clone, Debug)]
pub struct DenseGrid {
    w: usize,
    h: usize,
    d: usize,
    data: Vec<u8>,
}

impl DenseGrid {
    pub fn new(w: usize, h: usize, d: usize) -> Self {
        Self {
            w,
            h,
            d,
            data: vec![0u8; w * h * d],
        }
    }

    /// Grid at the shape's exact dimensions with every solid record
    /// scattered in. Holes stay 0.
    pub fn from_set(set: &VoxelSet) -> Self {
        let (sx, sy, sz) = set.dims();
        let mut grid = Self::new(sx, sy, sz);
        grid.scatter(set);
        grid
    }

    /// Writes each solid record at its own coordinates. Callers may size
    /// the grid larger than the shape (mip padding); records always fit
    /// because the set validated them against its box.
    pub fn scatter(&mut self, set: &VoxelSet) {
        for v in set.solids() {
            let i = self.idx(v.x as usize, v.y as usize, v.z as usize);
            self.data[i] = v.material;
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.w * (y + self.h * z)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.data[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: u8) {
        let i = self.idx(x, y, z);
        self.data[i] = value;
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.w, self.h, self.d)
    }

    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
