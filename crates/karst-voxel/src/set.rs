use hashbrown::{HashMap, HashSet};
use thiserror::Error;

/// Material index reserved for "no voxel here" in sparse records.
pub const HOLE: u8 = 255;
/// Value of an empty cell in every dense byte volume.
pub const EMPTY: u8 = 0;

/// Largest bounding dimension a shape may declare.
pub const MAX_DIM: usize = 256;

/// One sparse voxel record: cell coordinate plus material index.
/// Materials `1..=254` are solid; [`HOLE`] marks a hole and `0` is
/// tolerated but treated as empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voxel {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub material: u8,
}

impl Voxel {
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8, material: u8) -> Self {
        Self { x, y, z, material }
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        self.material != HOLE && self.material != EMPTY
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoxelError {
    #[error("voxel ({x}, {y}, {z}) outside declared bounds {sx}x{sy}x{sz}")]
    InvalidVoxelCoordinate {
        x: u8,
        y: u8,
        z: u8,
        sx: usize,
        sy: usize,
        sz: usize,
    },
    #[error("bounding dimension {value} on axis {axis} not in 1..={MAX_DIM}")]
    InvalidDimension { axis: char, value: usize },
}

/// One bounded voxel shape: declared bounding box plus its solid cells,
/// kept in record order, with a solid-cell index for neighbor queries.
///
/// Immutable once constructed; every record is validated against the
/// declared box. Duplicate keys collapse to the last record, kept at the
/// first occurrence's position, and a hole record removes any earlier
/// solid at its key, so iteration always agrees with the index.
#[derive(Clone, Debug)]
pub struct VoxelSet {
    sx: usize,
    sy: usize,
    sz: usize,
    voxels: Vec<Voxel>,
    occupancy: HashMap<(u8, u8, u8), u8>,
}

impl VoxelSet {
    pub fn new(sx: usize, sy: usize, sz: usize, voxels: Vec<Voxel>) -> Result<Self, VoxelError> {
        for (axis, value) in [('x', sx), ('y', sy), ('z', sz)] {
            if value == 0 || value > MAX_DIM {
                return Err(VoxelError::InvalidDimension { axis, value });
            }
        }
        let mut occupancy = HashMap::with_capacity(voxels.len());
        for v in &voxels {
            if (v.x as usize) >= sx || (v.y as usize) >= sy || (v.z as usize) >= sz {
                return Err(VoxelError::InvalidVoxelCoordinate {
                    x: v.x,
                    y: v.y,
                    z: v.z,
                    sx,
                    sy,
                    sz,
                });
            }
            if v.is_solid() {
                occupancy.insert((v.x, v.y, v.z), v.material);
            } else {
                // A hole record overwrites an earlier solid at the same key.
                occupancy.remove(&(v.x, v.y, v.z));
            }
        }
        // Rebuild the ordered list from the resolved index so every
        // consumer of the records sees exactly the surviving solids.
        let mut seen = HashSet::with_capacity(voxels.len());
        let mut resolved = Vec::with_capacity(occupancy.len());
        for v in &voxels {
            let key = (v.x, v.y, v.z);
            if seen.insert(key) {
                if let Some(&material) = occupancy.get(&key) {
                    resolved.push(Voxel::new(v.x, v.y, v.z, material));
                }
            }
        }
        Ok(Self {
            sx,
            sy,
            sz,
            voxels: resolved,
            occupancy,
        })
    }

    #[inline]
    pub fn size_x(&self) -> usize {
        self.sx
    }
    #[inline]
    pub fn size_y(&self) -> usize {
        self.sy
    }
    #[inline]
    pub fn size_z(&self) -> usize {
        self.sz
    }
    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    /// Material at a cell, or [`EMPTY`] for holes and positions outside
    /// the representable `[0, 255]` range.
    #[inline]
    pub fn material_at(&self, x: i32, y: i32, z: i32) -> u8 {
        if !(0..=u8::MAX as i32).contains(&x)
            || !(0..=u8::MAX as i32).contains(&y)
            || !(0..=u8::MAX as i32).contains(&z)
        {
            return EMPTY;
        }
        self.occupancy
            .get(&(x as u8, y as u8, z as u8))
            .copied()
            .unwrap_or(EMPTY)
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.material_at(x, y, z) != EMPTY
    }

    /// Number of distinct solid cells.
    #[inline]
    pub fn solid_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Surviving solid cells in first-record order.
    #[inline]
    pub fn solids(&self) -> impl Iterator<Item = &Voxel> {
        self.voxels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_box_records() {
        let err = VoxelSet::new(4, 4, 4, vec![Voxel::new(4, 0, 0, 1)]).unwrap_err();
        assert!(matches!(err, VoxelError::InvalidVoxelCoordinate { x: 4, .. }));
    }

    #[test]
    fn rejects_zero_and_oversize_dims() {
        assert!(matches!(
            VoxelSet::new(0, 4, 4, vec![]),
            Err(VoxelError::InvalidDimension { axis: 'x', .. })
        ));
        assert!(matches!(
            VoxelSet::new(4, 257, 4, vec![]),
            Err(VoxelError::InvalidDimension { axis: 'y', .. })
        ));
    }

    #[test]
    fn holes_are_never_solid() {
        let set = VoxelSet::new(
            2,
            2,
            2,
            vec![Voxel::new(0, 0, 0, HOLE), Voxel::new(1, 0, 0, 7)],
        )
        .unwrap();
        assert!(!set.is_solid(0, 0, 0));
        assert!(set.is_solid(1, 0, 0));
        assert_eq!(set.solid_count(), 1);
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let set = VoxelSet::new(
            2,
            1,
            1,
            vec![Voxel::new(0, 0, 0, 3), Voxel::new(0, 0, 0, 9)],
        )
        .unwrap();
        assert_eq!(set.material_at(0, 0, 0), 9);
        assert_eq!(set.solid_count(), 1);
        // Iteration sees the resolved record exactly once.
        let solids: Vec<Voxel> = set.solids().copied().collect();
        assert_eq!(solids, vec![Voxel::new(0, 0, 0, 9)]);
    }

    #[test]
    fn hole_record_supersedes_earlier_solid_everywhere() {
        let set = VoxelSet::new(
            2,
            1,
            1,
            vec![Voxel::new(0, 0, 0, 5), Voxel::new(0, 0, 0, HOLE)],
        )
        .unwrap();
        assert!(!set.is_solid(0, 0, 0));
        assert_eq!(set.solid_count(), 0);
        assert_eq!(set.solids().count(), 0);
    }

    #[test]
    fn duplicates_collapse_at_first_occurrence() {
        let set = VoxelSet::new(
            2,
            1,
            1,
            vec![
                Voxel::new(1, 0, 0, 2),
                Voxel::new(0, 0, 0, 3),
                Voxel::new(1, 0, 0, 8),
            ],
        )
        .unwrap();
        let solids: Vec<Voxel> = set.solids().copied().collect();
        assert_eq!(solids, vec![Voxel::new(1, 0, 0, 8), Voxel::new(0, 0, 0, 3)]);
    }

    #[test]
    fn out_of_range_positions_read_empty() {
        let set = VoxelSet::new(2, 2, 2, vec![Voxel::new(0, 0, 0, 1)]).unwrap();
        assert_eq!(set.material_at(-1, 0, 0), EMPTY);
        assert_eq!(set.material_at(0, 256, 0), EMPTY);
    }
}
