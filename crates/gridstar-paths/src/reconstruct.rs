/// The best known edge into each cell, indexed by flat cell index.
#[derive(Debug, Clone)]
pub struct Predecessors {
    parent: Vec<Option<usize>>,
}

impl Predecessors {
    /// Create an empty map for `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self {
            parent: vec![None; cells],
        }
    }

    #[inline]
    pub fn get(&self, cell: usize) -> Option<usize> {
        self.parent.get(cell).copied().flatten()
    }

    #[inline]
    pub fn set(&mut self, cell: usize, parent: usize) {
        self.parent[cell] = Some(parent);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

/// Walk the predecessor chain backwards from `end`.
///
/// Returns `end` followed by every intermediate cell, nearest first. The
/// root of the chain (the one cell without a predecessor, i.e. the start)
/// is not included. Reverse the result and prepend the start for a
/// start-to-end path.
pub fn reconstruct(preds: &Predecessors, end: usize) -> Vec<usize> {
    let mut chain = vec![end];
    let mut cur = end;
    while let Some(prev) = preds.get(cur) {
        if preds.get(prev).is_none() {
            break;
        }
        chain.push(prev);
        cur = prev;
        debug_assert!(chain.len() <= preds.len(), "predecessor cycle");
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_excludes_root() {
        // 0 -> 1 -> 2 -> 3
        let mut p = Predecessors::new(5);
        p.set(1, 0);
        p.set(2, 1);
        p.set(3, 2);
        assert_eq!(reconstruct(&p, 3), vec![3, 2, 1]);
    }

    #[test]
    fn adjacent_end_has_no_intermediates() {
        let mut p = Predecessors::new(2);
        p.set(1, 0);
        assert_eq!(reconstruct(&p, 1), vec![1]);
    }

    #[test]
    fn unreached_end() {
        let p = Predecessors::new(3);
        assert_eq!(reconstruct(&p, 2), vec![2]);
        assert_eq!(p.get(7), None);
    }
}
