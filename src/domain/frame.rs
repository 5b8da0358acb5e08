use super::Cell;

/// RGBA colour buffer for one frame, 4 bytes per cell in grid order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    size: usize,
    bytes: Vec<u8>,
}

impl Frame {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Create an all-black, opaque frame for a `size × size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            bytes: Cell::DEAD_RGBA.repeat(size * size),
        }
    }

    /// Side length in pixels
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Raw interleaved RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Pixel at flat index, if in range
    pub fn pixel(&self, idx: usize) -> Option<[u8; 4]> {
        let base = idx.checked_mul(Self::BYTES_PER_PIXEL)?;
        let end = base.checked_add(Self::BYTES_PER_PIXEL)?;
        let px = self.bytes.get(base..end)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of white pixels
    pub fn count_alive(&self) -> usize {
        self.pixels().filter(|px| *px == Cell::ALIVE_RGBA).count()
    }

    pub(crate) fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.bytes.chunks_exact_mut(Self::BYTES_PER_PIXEL)
    }

    fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.bytes.chunks_exact(Self::BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_black_and_opaque() {
        let frame = Frame::new(3);
        assert_eq!(frame.size(), 3);
        assert_eq!(frame.as_bytes().len(), 3 * 3 * 4);
        for idx in 0..9 {
            assert_eq!(frame.pixel(idx), Some([0, 0, 0, 255]));
        }
        assert_eq!(frame.count_alive(), 0);
    }

    #[test]
    fn test_pixel_out_of_range() {
        let frame = Frame::new(2);
        assert_eq!(frame.pixel(4), None);
        assert_eq!(frame.pixel(usize::MAX), None);
        assert_eq!(frame.pixel(usize::MAX / 4), None);
    }
}
