//! Tile geometry for the parallel expander.
//!
//! A block is a rectangular sub-region of a 1-, 2-, or 3-dimensional index
//! space. Splitting bisects the longest axis at its midpoint; the splitter
//! signatures match what [`rayon::iter::split`] expects, so the runtime's
//! adaptive stealing decides how far splitting actually proceeds.

use std::ops::Range;

use crate::counter::Counter;

fn steps<I: Counter>(r: &Range<I>) -> usize {
    r.start.steps_between(r.end)
}

fn bisect<I: Counter>(r: &Range<I>) -> (Range<I>, Range<I>) {
    let mid = r.start.forward(steps(r) / 2);
    (r.start..mid, mid..r.end)
}

/// A contiguous run of a one-dimensional index space.
#[derive(Clone, Debug)]
pub(crate) struct Block<I> {
    pub(crate) axis: Range<I>,
}

impl<I: Counter> Block<I> {
    pub(crate) fn new(axis: Range<I>) -> Self {
        Self { axis }
    }

    pub(crate) fn points(&self) -> usize {
        steps(&self.axis)
    }

    pub(crate) fn split(self) -> (Self, Option<Self>) {
        if self.points() <= 1 {
            return (self, None);
        }
        let (lo, hi) = bisect(&self.axis);
        (Self::new(lo), Some(Self::new(hi)))
    }
}

/// A rectangular tile of a two-dimensional index space.
#[derive(Clone, Debug)]
pub(crate) struct Block2<I> {
    pub(crate) rows: Range<I>,
    pub(crate) cols: Range<I>,
}

impl<I: Counter> Block2<I> {
    pub(crate) fn new(rows: Range<I>, cols: Range<I>) -> Self {
        Self { rows, cols }
    }

    pub(crate) fn points(&self) -> usize {
        steps(&self.rows) * steps(&self.cols)
    }

    pub(crate) fn split(self) -> (Self, Option<Self>) {
        if self.points() <= 1 {
            return (self, None);
        }
        if steps(&self.rows) >= steps(&self.cols) {
            let (lo, hi) = bisect(&self.rows);
            (
                Self { rows: lo, cols: self.cols.clone() },
                Some(Self { rows: hi, cols: self.cols }),
            )
        } else {
            let (lo, hi) = bisect(&self.cols);
            (
                Self { rows: self.rows.clone(), cols: lo },
                Some(Self { rows: self.rows, cols: hi }),
            )
        }
    }
}

/// A rectangular tile of a three-dimensional index space.
#[derive(Clone, Debug)]
pub(crate) struct Block3<I> {
    pub(crate) pages: Range<I>,
    pub(crate) rows: Range<I>,
    pub(crate) cols: Range<I>,
}

impl<I: Counter> Block3<I> {
    pub(crate) fn new(pages: Range<I>, rows: Range<I>, cols: Range<I>) -> Self {
        Self { pages, rows, cols }
    }

    pub(crate) fn points(&self) -> usize {
        steps(&self.pages) * steps(&self.rows) * steps(&self.cols)
    }

    pub(crate) fn split(self) -> (Self, Option<Self>) {
        if self.points() <= 1 {
            return (self, None);
        }
        let (np, nr, nc) = (steps(&self.pages), steps(&self.rows), steps(&self.cols));
        if np >= nr && np >= nc {
            let (lo, hi) = bisect(&self.pages);
            (
                Self { pages: lo, rows: self.rows.clone(), cols: self.cols.clone() },
                Some(Self { pages: hi, rows: self.rows, cols: self.cols }),
            )
        } else if nr >= nc {
            let (lo, hi) = bisect(&self.rows);
            (
                Self { pages: self.pages.clone(), rows: lo, cols: self.cols.clone() },
                Some(Self { pages: self.pages, rows: hi, cols: self.cols }),
            )
        } else {
            let (lo, hi) = bisect(&self.cols);
            (
                Self { pages: self.pages.clone(), rows: self.rows.clone(), cols: lo },
                Some(Self { pages: self.pages, rows: self.rows, cols: hi }),
            )
        }
    }
}
