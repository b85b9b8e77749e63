/// Weight stored on a directed edge.
pub type Weight = i32;

/// Sentinel stored in every cell that does not carry an edge.
///
/// Zero and negative values are ordinary weights, so the sentinel is the
/// smallest representable weight.
pub const NULL_EDGE: Weight = Weight::MIN;

/// A dense square weight matrix of fixed side `capacity`.
///
/// Cells are laid out row-major in a single flat slice: the cell for the
/// directed pair `(from, to)` lives at `from * capacity + to`. The matrix
/// never resizes. Callers track how many leading rows and columns are in
/// use (`len` below); every cell outside the `len x len` top-left block is
/// [`NULL_EDGE`].
///
/// ```text
///          to
///        0   1   2   3
///      +---+---+---+---+
/// from 0 | 0 | 1 | 2 | 3 |
///      +---+---+---+---+
///      1 | 4 | 5 | 6 | 7 |
///      +---+---+---+---+
///      2 | 8 | 9 |10 |11 |
///      +---+---+---+---+
///      3 |12 |13 |14 |15 |
///      +---+---+---+---+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    capacity: usize,
    cells: Box<[Weight]>,
}

impl WeightMatrix {
    /// Allocates a `capacity x capacity` matrix with every cell set to
    /// [`NULL_EDGE`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity^2` overflows `usize`.
    pub fn new(capacity: usize) -> Self {
        let size = capacity
            .checked_mul(capacity)
            .expect("WeightMatrix::new: capacity^2 overflows usize");
        Self {
            capacity,
            cells: vec![NULL_EDGE; size].into_boxed_slice(),
        }
    }

    /// Side length of the matrix.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> usize {
        debug_assert!(
            from < self.capacity && to < self.capacity,
            "WeightMatrix::index: ({from}, {to}) out of range capacity {}",
            self.capacity
        );
        from * self.capacity + to
    }

    /// Raw cell content, [`NULL_EDGE`] when there is no edge.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Weight {
        self.cells[self.index(from, to)]
    }

    /// The weight on `(from, to)`, if any.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> Option<Weight> {
        match self.get(from, to) {
            NULL_EDGE => None,
            weight => Some(weight),
        }
    }

    /// Overwrites a cell and returns its previous content.
    #[inline]
    pub fn set(&mut self, from: usize, to: usize, weight: Weight) -> Weight {
        let index = self.index(from, to);
        std::mem::replace(&mut self.cells[index], weight)
    }

    /// Resets a cell to [`NULL_EDGE`] and returns the weight it carried.
    #[inline]
    pub fn clear(&mut self, from: usize, to: usize) -> Option<Weight> {
        match self.set(from, to, NULL_EDGE) {
            NULL_EDGE => None,
            weight => Some(weight),
        }
    }

    /// The first `len` cells of row `from`.
    #[inline]
    pub fn row(&self, from: usize, len: usize) -> &[Weight] {
        debug_assert!(len <= self.capacity);
        let start = self.index(from, 0);
        &self.cells[start..start + len]
    }

    /// Number of edges in the `len x len` block in use.
    pub fn edge_count(&self, len: usize) -> usize {
        (0..len)
            .map(|from| {
                self.row(from, len)
                    .iter()
                    .filter(|&&weight| weight != NULL_EDGE)
                    .count()
            })
            .sum()
    }

    /// Removes row and column `removed` from the `len x len` block.
    ///
    /// Rows below `removed` move up by one, then columns right of
    /// `removed` move left by one, then the last row and column of the old
    /// block are reset to [`NULL_EDGE`]. Afterwards the block in use is
    /// `(len - 1) x (len - 1)` and every pair of surviving indices carries
    /// the weight it had before, under its shifted index.
    pub fn remove(&mut self, removed: usize, len: usize) {
        debug_assert!(
            removed < len && len <= self.capacity,
            "WeightMatrix::remove: index {removed} out of range len {len} (capacity {})",
            self.capacity
        );

        let capacity = self.capacity;

        // Rows first, over the full width in use.
        for from in removed..len - 1 {
            let source = (from + 1) * capacity;
            self.cells.copy_within(source..source + len, from * capacity);
        }

        // Then columns, for the rows that survive.
        for from in 0..len - 1 {
            let row = from * capacity;
            self.cells
                .copy_within(row + removed + 1..row + len, row + removed);
        }

        let last = len - 1;
        for other in 0..len {
            self.set(other, last, NULL_EDGE);
            self.set(last, other, NULL_EDGE);
        }

        debug_assert!(
            self.cells.iter().enumerate().all(|(index, &weight)| {
                let (from, to) = (index / capacity, index % capacity);
                weight == NULL_EDGE || (from < last && to < last)
            }),
            "WeightMatrix::remove: edge left outside the {last}x{last} block"
        );
    }
}
