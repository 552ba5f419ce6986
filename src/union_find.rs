//! Weighted union-find tracking per-component birth and maximum entry time.
//!
//! Each slot `i` starts as its own component with `birthtime[i] =
//! time_max[i] = grid.birth(i, 0)` — slots whose `i` is not a legal packed
//! 0-cell carry the threshold and never participate in a real merge.

use crate::grid::Grid2;

pub struct UnionFind {
    parent: Vec<i32>,
    birthtime: Vec<f64>,
    time_max: Vec<f64>,
}

impl UnionFind {
    pub fn new(max_of_index: usize, grid: &Grid2) -> Self {
        let mut birthtime = Vec::with_capacity(max_of_index);
        for i in 0..max_of_index {
            birthtime.push(grid.birth(i as i32, 0));
        }
        let time_max = birthtime.clone();
        let parent = (0..max_of_index as i32).collect();
        UnionFind { parent, birthtime, time_max }
    }

    pub fn birthtime(&self, i: i32) -> f64 {
        self.birthtime[i as usize]
    }

    pub fn time_max(&self, i: i32) -> f64 {
        self.time_max[i as usize]
    }

    /// Two-pass path compression: walk to the root, then relink every node
    /// on the original path directly to it.
    pub fn find(&mut self, x: i32) -> i32 {
        let mut y = x;
        let mut z = self.parent[y as usize];
        while z != y {
            y = z;
            z = self.parent[y as usize];
        }
        let root = z;

        let mut x = x;
        let mut y = self.parent[x as usize];
        while z != y {
            self.parent[x as usize] = z;
            x = y;
            y = self.parent[x as usize];
        }
        root
    }

    /// Elder-rule merge: the side with the later birth is attached under
    /// the side with the earlier birth, so the surviving root always keeps
    /// the earlier birth. Ties are broken deterministically: `x` becomes
    /// the child, `y` the parent.
    pub fn link(&mut self, x: i32, y: i32) {
        let x = self.find(x);
        let y = self.find(y);
        if x == y {
            return;
        }
        if self.birthtime[x as usize] > self.birthtime[y as usize] {
            self.parent[x as usize] = y;
            self.birthtime[y as usize] = self.birthtime[x as usize].min(self.birthtime[y as usize]);
            self.time_max[y as usize] = self.time_max[x as usize].max(self.time_max[y as usize]);
        } else if self.birthtime[x as usize] < self.birthtime[y as usize] {
            self.parent[y as usize] = x;
            self.birthtime[x as usize] = self.birthtime[x as usize].min(self.birthtime[y as usize]);
            self.time_max[x as usize] = self.time_max[x as usize].max(self.time_max[y as usize]);
        } else {
            self.parent[x as usize] = y;
            self.time_max[y as usize] = self.time_max[x as usize].max(self.time_max[y as usize]);
        }
    }
}
