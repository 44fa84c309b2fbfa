//! Cell addressing for the cylindrical matrix
//!
//! The matrix is a fixed 16 rows tall and 14 columns around. Row 0 is the
//! bottom. Cells are stored column by column, so each column occupies a
//! contiguous run of [`ROWS`] slots.

/// Height of the matrix
pub const ROWS: u8 = 16;

/// Circumference of the matrix
pub const COLS: u8 = 14;

/// Total number of addressable cells
pub const NUM_LEDS: usize = ROWS as usize * COLS as usize;

/// Linear slot of the cell at `row`, `col`
///
/// Coordinates are not validated outside of debug builds. Passing a row
/// `>= ROWS` or a column `>= COLS` is a caller error.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn index(row: u8, col: u8) -> usize {
    debug_assert!(row < ROWS && col < COLS);
    row as usize + col as usize * ROWS as usize
}

/// Iterate over every coordinate, row outer and column inner
pub fn coords() -> impl Iterator<Item = (u8, u8)> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| (row, col)))
}

/// Fixed-size map holding one value per matrix cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: [T; NUM_LEDS],
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub const fn filled(value: T) -> Self {
        Self {
            cells: [value; NUM_LEDS],
        }
    }

    /// Read the cell at `row`, `col`
    #[inline]
    pub fn get(&self, row: u8, col: u8) -> T {
        self.cells[index(row, col)]
    }

    /// Write the cell at `row`, `col`
    #[inline]
    pub fn set(&mut self, row: u8, col: u8, value: T) {
        self.cells[index(row, col)] = value;
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Set every cell to the value computed for its coordinate
    ///
    /// Each cell is visited exactly once.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(u8, u8) -> T,
    {
        for (row, col) in coords() {
            self.set(row, col, f(row, col));
        }
    }

    /// Cells in linear-index order
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Cells in linear-index order, for whole-grid updates
    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// All cells of one column, bottom first
    pub(crate) fn column_mut(&mut self, col: u8) -> &mut [T] {
        let start = index(0, col);
        &mut self.cells[start..start + ROWS as usize]
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}
