/// Mutable 2D grid of module values, one byte per cell
///
/// Dimensions are fixed at construction; there is no resize or clear,
/// a fresh instance is constructed instead. Cells are addressed in
/// (row, column) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ByteMatrix {
    /// Create a new matrix with given dimensions, all cells zero
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "matrix dimensions must be positive");
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell value at (row, col)
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range; out-of-bounds access is a
    /// caller bug, not a recoverable condition.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.height && col < self.width,
            "matrix access ({row}, {col}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        self.data[row * self.width + col]
    }

    /// Set cell value at (row, col)
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(
            row < self.height && col < self.width,
            "matrix access ({row}, {col}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        self.data[row * self.width + col] = value;
    }
}
