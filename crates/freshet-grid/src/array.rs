//! Flat `(variable, k, j, i)` state-array storage.

use crate::bounds::CellBox;
use crate::error::GridError;
use smallvec::SmallVec;

/// The per-cell variable vector gathered from a [`StateArray`].
///
/// Uses `SmallVec<[f64; 8]>` so the four dynamical variables plus a
/// typical scalar count stay off the heap in per-interface hot paths;
/// larger layouts spill transparently.
pub type CellState = SmallVec<[f64; 8]>;

/// A dense four-dimensional array of cell-centered state, indexed
/// `(variable, k, j, i)` with `i` fastest.
///
/// One `StateArray` holds either conserved or primitive variables for a
/// block, ghost zones included; the variable count comes from the block's
/// layout. Kernels borrow arrays for the duration of a call — nothing
/// here allocates or retains per-call state.
///
/// Rows (`i` runs over a fixed `(variable, k, j)`) are contiguous, which
/// keeps the per-cell loops over a [`CellBox`] vectorizable.
#[derive(Clone, Debug, PartialEq)]
pub struct StateArray {
    nvar: usize,
    nx3: usize,
    nx2: usize,
    nx1: usize,
    data: Vec<f64>,
}

impl StateArray {
    /// Allocate a zero-filled array of `nvar` variables over an
    /// `nx3 x nx2 x nx1` block.
    ///
    /// Returns [`GridError::ZeroDimension`] if any extent is zero and
    /// [`GridError::SizeOverflow`] if the element count exceeds `usize`.
    pub fn new(nvar: usize, nx3: usize, nx2: usize, nx1: usize) -> Result<Self, GridError> {
        for (name, value) in [
            ("nvar", nvar),
            ("nx3", nx3),
            ("nx2", nx2),
            ("nx1", nx1),
        ] {
            if value == 0 {
                return Err(GridError::ZeroDimension { name });
            }
        }
        let len = nvar
            .checked_mul(nx3)
            .and_then(|n| n.checked_mul(nx2))
            .and_then(|n| n.checked_mul(nx1))
            .ok_or(GridError::SizeOverflow {
                nvar,
                cells: (nx3, nx2, nx1),
            })?;
        Ok(Self {
            nvar,
            nx3,
            nx2,
            nx1,
            data: vec![0.0; len],
        })
    }

    /// Variable count (the slowest index).
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Cell count along `k`.
    pub fn nx3(&self) -> usize {
        self.nx3
    }

    /// Cell count along `j`.
    pub fn nx2(&self) -> usize {
        self.nx2
    }

    /// Cell count along `i` (the fastest index).
    pub fn nx1(&self) -> usize {
        self.nx1
    }

    fn offset(&self, n: usize, k: usize, j: usize, i: usize) -> usize {
        ((n * self.nx3 + k) * self.nx2 + j) * self.nx1 + i
    }

    /// Read the value at `(n, k, j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range; in-bounds access is the
    /// caller's contract on every kernel path.
    pub fn at(&self, n: usize, k: usize, j: usize, i: usize) -> f64 {
        self.data[self.offset(n, k, j, i)]
    }

    /// Mutable access to the value at `(n, k, j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn at_mut(&mut self, n: usize, k: usize, j: usize, i: usize) -> &mut f64 {
        let offset = self.offset(n, k, j, i);
        &mut self.data[offset]
    }

    /// The contiguous `i`-row at `(n, k, j)`, all `nx1` cells.
    ///
    /// # Panics
    ///
    /// Panics if `n`, `k`, or `j` is out of range.
    pub fn row(&self, n: usize, k: usize, j: usize) -> &[f64] {
        let start = self.offset(n, k, j, 0);
        &self.data[start..start + self.nx1]
    }

    /// Mutable contiguous `i`-row at `(n, k, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `n`, `k`, or `j` is out of range.
    pub fn row_mut(&mut self, n: usize, k: usize, j: usize) -> &mut [f64] {
        let start = self.offset(n, k, j, 0);
        &mut self.data[start..start + self.nx1]
    }

    /// Whether the box lies entirely within this array's cell extents.
    pub fn contains(&self, bounds: &CellBox) -> bool {
        bounds.ku() < self.nx3 && bounds.ju() < self.nx2 && bounds.iu() < self.nx1
    }

    /// Gather the full variable vector of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `k`, `j`, or `i` is out of range.
    pub fn cell_state(&self, k: usize, j: usize, i: usize) -> CellState {
        (0..self.nvar).map(|n| self.at(n, k, j, i)).collect()
    }

    /// Fill every element from `f(n, k, j, i)`.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize, usize, usize) -> f64) {
        for n in 0..self.nvar {
            for k in 0..self.nx3 {
                for j in 0..self.nx2 {
                    let row_start = self.offset(n, k, j, 0);
                    for i in 0..self.nx1 {
                        self.data[row_start + i] = f(n, k, j, i);
                    }
                }
            }
        }
    }
}
