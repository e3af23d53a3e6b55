use crate::errors::PixelSourceError;
use crate::texture::{PixelSource, RegionRequest};
use image::{Rgb, RgbImage};

/// A volume held in memory, one RGB value per voxel and timepoint.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    width: u32,
    height: u32,
    depth: u32,
    timepoints: u32,
    voxels: Vec<Rgb<u8>>,
}

impl VoxelGrid {
    /// A single-timepoint volume whose voxel `(x, y, z)` is `f(x, y, z)`.
    pub fn from_fn(width: u32, height: u32, depth: u32, mut f: impl FnMut(u32, u32, u32) -> Rgb<u8>) -> Self {
        let mut voxels = Vec::with_capacity(width as usize * height as usize * depth as usize);
        for z in 0..depth {
            for y in 0..height {
                for x in 0..width {
                    voxels.push(f(x, y, z));
                }
            }
        }
        VoxelGrid {
            width,
            height,
            depth,
            timepoints: 1,
            voxels,
        }
    }

    /// A volume made of consecutive timepoints of equal size.
    ///
    /// Returns `None` when the grids differ in size or none is given.
    pub fn from_timepoints(grids: Vec<VoxelGrid>) -> Option<Self> {
        let first = grids.first()?;
        let (width, height, depth) = first.dimensions();
        if grids.iter().any(|grid| grid.dimensions() != (width, height, depth)) {
            return None;
        }
        let timepoints = grids.iter().map(|grid| grid.timepoints).sum();
        let voxels = grids.into_iter().flat_map(|grid| grid.voxels).collect();
        Some(VoxelGrid {
            width,
            height,
            depth,
            timepoints,
            voxels,
        })
    }

    pub const fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    pub const fn timepoints(&self) -> u32 {
        self.timepoints
    }

    pub fn get(&self, x: u32, y: u32, z: u32, t: u32) -> Option<Rgb<u8>> {
        if x >= self.width || y >= self.height || z >= self.depth || t >= self.timepoints {
            return None;
        }
        let plane = self.width as usize * self.height as usize;
        let index = (t as usize * self.depth as usize + z as usize) * plane
            + y as usize * self.width as usize
            + x as usize;
        self.voxels.get(index).copied()
    }
}

impl PixelSource for VoxelGrid {
    fn read_region(&self, request: &RegionRequest) -> Result<RgbImage, PixelSourceError> {
        let out_of_bounds = || PixelSourceError::OutOfBounds {
            x: request.x,
            y: request.y,
            z: request.z,
            width: request.width,
            height: request.height,
        };

        let fits = |start: u32, size: u32, limit: u32| start.checked_add(size).is_some_and(|end| end <= limit);
        if request.z >= self.depth
            || request.t >= self.timepoints
            || !fits(request.x, request.width, self.width)
            || !fits(request.y, request.height, self.height)
        {
            return Err(out_of_bounds());
        }

        let mut block = RgbImage::new(request.width, request.height);
        for (i, j, pixel) in block.enumerate_pixels_mut() {
            *pixel = self
                .get(request.x + i, request.y + j, request.z, request.t)
                .ok_or_else(out_of_bounds)?;
        }
        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> VoxelGrid {
        VoxelGrid::from_fn(4, 3, 2, |x, y, z| Rgb([x as u8, y as u8, z as u8]))
    }

    #[test]
    fn reads_the_requested_block() {
        let request = RegionRequest {
            x: 1,
            y: 1,
            z: 1,
            t: 0,
            width: 3,
            height: 2,
        };
        let block = gradient().read_region(&request).expect("block is inside the grid");
        assert_eq!(block.dimensions(), (3, 2));
        assert_eq!(*block.get_pixel(0, 0), Rgb([1, 1, 1]));
        assert_eq!(*block.get_pixel(2, 1), Rgb([3, 2, 1]));
    }

    #[test]
    fn rejects_blocks_outside_the_grid() {
        let request = RegionRequest {
            x: 2,
            y: 0,
            z: 0,
            t: 0,
            width: 3,
            height: 1,
        };
        assert!(matches!(
            gradient().read_region(&request),
            Err(PixelSourceError::OutOfBounds { .. })
        ));
        assert!(gradient().read_region(&RegionRequest { t: 1, ..request }).is_err());
    }

    #[test]
    fn timepoints_are_stacked() {
        let later = VoxelGrid::from_fn(4, 3, 2, |_, _, _| Rgb([9, 9, 9]));
        let grid = VoxelGrid::from_timepoints(vec![gradient(), later]).expect("grids share a size");
        assert_eq!(grid.timepoints(), 2);
        assert_eq!(grid.get(3, 2, 1, 0), Some(Rgb([3, 2, 1])));
        assert_eq!(grid.get(0, 0, 0, 1), Some(Rgb([9, 9, 9])));
        assert!(VoxelGrid::from_timepoints(Vec::new()).is_none());
    }
}
