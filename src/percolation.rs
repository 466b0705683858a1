use crate::disjoint_set::{DisjointSet, UnionFind};
use crate::error::{PercolationError, Result};

// virtual site above row 1; the sink sits just past the last real site
const SOURCE: usize = 0;

const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An n-by-n grid of sites, each blocked or open, with the connectivity of
/// open sites tracked incrementally through a union-find over the site ids
/// plus a virtual source and sink.
///
/// Rows and columns are one-indexed: `(1, 1)` is the upper-left site.
#[derive(Debug, Clone)]
pub struct Percolation<U = DisjointSet> {
	n: usize,
	sink: usize,
	// indexed by site id, sentinel slots stay false
	open: Vec<bool>,
	uf: U,
	open_sites: usize,
}

impl Percolation {
	/// Creates an n-by-n grid with every site blocked.
	pub fn new(n: isize) -> Result<Percolation> {
		Self::with_union_find(n)
	}
}

impl<U: UnionFind> Percolation<U> {
	/// Same as [`Percolation::new`] but over any union-find implementation.
	pub fn with_union_find(n: isize) -> Result<Self> {
		if n <= 0 {
			return Err(PercolationError::invalid("n", "greater than 0", n));
		}
		let n = n as usize;
		// n*n sites plus source and sink
		let ids = n.checked_mul(n).and_then(|cells| cells.checked_add(2))
			.ok_or_else(|| PercolationError::invalid("n", "small enough that n*n+2 fits in usize", n))?;
		Ok(Percolation {
			n,
			sink: ids - 1,
			open: vec![false; ids],
			uf: U::with_size(ids),
			open_sites: 0,
		})
	}

	pub fn size(&self) -> usize {
		self.n
	}

	/// Opens the site at (row, col) if it is not open already.
	pub fn open(&mut self, row: isize, col: isize) -> Result<()> {
		let id = self.site_id(row, col)?;
		if self.open[id] {
			return Ok(());
		}

		self.open[id] = true;
		self.open_sites += 1;
		trace!("opened ({}, {}), {} sites open", row, col, self.open_sites);

		if row == 1 {
			self.uf.unite(id, SOURCE);
		}
		if row == self.n as isize {
			self.uf.unite(id, self.sink);
		}
		for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
			if let Some(neighbor) = self.open_site_id(row + dr, col + dc) {
				self.uf.unite(id, neighbor);
			}
		}
		Ok(())
	}

	pub fn is_open(&self, row: isize, col: isize) -> Result<bool> {
		let id = self.site_id(row, col)?;
		Ok(self.open[id])
	}

	/// A site is full when a chain of open sites links it to the top row.
	pub fn is_full(&mut self, row: isize, col: isize) -> Result<bool> {
		let id = self.site_id(row, col)?;
		Ok(self.uf.connected(id, SOURCE))
	}

	/// Does an open path run from the top row to the bottom row?
	pub fn percolates(&mut self) -> bool {
		let sink = self.sink;
		self.uf.connected(SOURCE, sink)
	}

	pub fn number_of_open_sites(&self) -> usize {
		self.open_sites
	}

	// Maps a one-indexed (row, col) to its id in [1, n*n], row-major.
	fn site_id(&self, row: isize, col: isize) -> Result<usize> {
		let n = self.n as isize;
		if row < 1 || row > n {
			return Err(PercolationError::invalid("row", format!("between 1 and {}", n), row));
		}
		if col < 1 || col > n {
			return Err(PercolationError::invalid("col", format!("between 1 and {}", n), col));
		}
		Ok((row - 1) as usize * self.n + (col - 1) as usize + 1)
	}

	fn open_site_id(&self, row: isize, col: isize) -> Option<usize> {
		self.site_id(row, col).ok().filter(|&id| self.open[id])
	}
}
