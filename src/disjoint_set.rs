// https://en.wikipedia.org/wiki/Disjoint-set_data_structure

/// Minimal union-find capability the percolation model is built on.
pub trait UnionFind {
	fn with_size(size: usize) -> Self;
	fn find(&mut self, x: usize) -> usize;
	fn unite(&mut self, x: usize, y: usize);

	fn connected(&mut self, x: usize, y: usize) -> bool {
		self.find(x) == self.find(y)
	}
}

#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..size).collect(),
			rank: vec![0; size],
			count: size,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	// number of disjoint sets
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn find(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.find(parent);
		}
		self.parent[x]
	}

	pub fn unite(&mut self, x: usize, y: usize) {
		let x_root = self.find(x);
		let y_root = self.find(y);
		if x_root != y_root {
			if self.rank[x_root] < self.rank[y_root] {
				self.parent[x_root] = y_root;
			} else if self.rank[x_root] > self.rank[y_root] {
				self.parent[y_root] = x_root;
			} else {
				self.parent[y_root] = x_root;
				self.rank[x_root] += 1;
			}
			self.count -= 1;
		}
	}

	pub fn connected(&mut self, x: usize, y: usize) -> bool {
		self.find(x) == self.find(y)
	}
}

impl UnionFind for DisjointSet {
	fn with_size(size: usize) -> Self {
		DisjointSet::make_singletons(size)
	}

	fn find(&mut self, x: usize) -> usize {
		DisjointSet::find(self, x)
	}

	fn unite(&mut self, x: usize, y: usize) {
		DisjointSet::unite(self, x, y)
	}
}
