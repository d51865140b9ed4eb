/// Per-run `g` and `f` tables, indexed by flat cell index.
///
/// Every score starts at `+∞`.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    g: Vec<f64>,
    f: Vec<f64>,
}

impl ScoreTable {
    /// Create a table for `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self {
            g: vec![f64::INFINITY; cells],
            f: vec![f64::INFINITY; cells],
        }
    }

    /// Cost of the best known path from the start.
    #[inline]
    pub fn g(&self, cell: usize) -> f64 {
        self.g[cell]
    }

    /// Estimated total cost through `cell`.
    #[inline]
    pub fn f(&self, cell: usize) -> f64 {
        self.f[cell]
    }

    #[inline]
    pub fn set(&mut self, cell: usize, g: f64, f: f64) {
        self.g[cell] = g;
        self.f[cell] = f;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.g.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.g.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unreached() {
        let mut t = ScoreTable::new(3);
        assert_eq!(t.len(), 3);
        assert!(t.g(2).is_infinite());
        assert!(t.f(0).is_infinite());
        t.set(1, 2.0, 5.0);
        assert_eq!(t.g(1), 2.0);
        assert_eq!(t.f(1), 5.0);
        assert!(2.0 < t.g(0));
    }
}
