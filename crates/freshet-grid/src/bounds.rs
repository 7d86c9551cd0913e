//! Inclusive three-dimensional cell index bounds.

use crate::error::GridError;
use std::ops::RangeInclusive;

/// An inclusive index box `[il,iu] x [jl,ju] x [kl,ku]` over a structured
/// block.
///
/// Callers supply a box per kernel call; it may be any subset of the full
/// block, down to a single interface strip during reconstruction. Bounds
/// are validated at construction (`lo <= hi` per axis), so a `CellBox`
/// always describes at least one cell.
///
/// # Examples
///
/// ```
/// use freshet_grid::CellBox;
///
/// let bounds = CellBox::new(2, 9, 1, 6, 0, 0).unwrap();
/// assert_eq!(bounds.ni(), 8);
/// assert_eq!(bounds.cell_count(), 8 * 6);
/// assert_eq!(bounds.planes().count(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBox {
    il: usize,
    iu: usize,
    jl: usize,
    ju: usize,
    kl: usize,
    ku: usize,
}

impl CellBox {
    /// Create a box from inclusive per-axis bounds.
    ///
    /// Returns [`GridError::InvertedBounds`] when any lower bound exceeds
    /// its upper bound.
    pub fn new(
        il: usize,
        iu: usize,
        jl: usize,
        ju: usize,
        kl: usize,
        ku: usize,
    ) -> Result<Self, GridError> {
        if il > iu {
            return Err(GridError::InvertedBounds {
                axis: "i",
                lo: il,
                hi: iu,
            });
        }
        if jl > ju {
            return Err(GridError::InvertedBounds {
                axis: "j",
                lo: jl,
                hi: ju,
            });
        }
        if kl > ku {
            return Err(GridError::InvertedBounds {
                axis: "k",
                lo: kl,
                hi: ku,
            });
        }
        Ok(Self {
            il,
            iu,
            jl,
            ju,
            kl,
            ku,
        })
    }

    /// Lower `i` bound (inclusive).
    pub fn il(&self) -> usize {
        self.il
    }

    /// Upper `i` bound (inclusive).
    pub fn iu(&self) -> usize {
        self.iu
    }

    /// Lower `j` bound (inclusive).
    pub fn jl(&self) -> usize {
        self.jl
    }

    /// Upper `j` bound (inclusive).
    pub fn ju(&self) -> usize {
        self.ju
    }

    /// Lower `k` bound (inclusive).
    pub fn kl(&self) -> usize {
        self.kl
    }

    /// Upper `k` bound (inclusive).
    pub fn ku(&self) -> usize {
        self.ku
    }

    /// Cell count along `i`.
    pub fn ni(&self) -> usize {
        self.iu - self.il + 1
    }

    /// Cell count along `j`.
    pub fn nj(&self) -> usize {
        self.ju - self.jl + 1
    }

    /// Cell count along `k`.
    pub fn nk(&self) -> usize {
        self.ku - self.kl + 1
    }

    /// Total number of cells in the box.
    pub fn cell_count(&self) -> usize {
        self.ni() * self.nj() * self.nk()
    }

    /// Whether `(k, j, i)` lies inside the box.
    pub fn contains(&self, k: usize, j: usize, i: usize) -> bool {
        (self.kl..=self.ku).contains(&k)
            && (self.jl..=self.ju).contains(&j)
            && (self.il..=self.iu).contains(&i)
    }

    /// Iterate the `(k, j)` planes of the box in `k`-major order.
    ///
    /// Each `(k, j)` pair identifies one contiguous `i`-row; inner loops
    /// run over [`i_range`](Self::i_range) within that row.
    pub fn planes(self) -> impl Iterator<Item = (usize, usize)> {
        (self.kl..=self.ku).flat_map(move |k| (self.jl..=self.ju).map(move |j| (k, j)))
    }

    /// The inclusive `i` range of every row in the box.
    pub fn i_range(&self) -> RangeInclusive<usize> {
        self.il..=self.iu
    }
}
