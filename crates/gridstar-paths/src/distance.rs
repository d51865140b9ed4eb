use gridstar_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Pos::new(0, 0);
        let b = Pos::new(4, -3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn euclidean_345() {
        assert_eq!(euclidean(Pos::new(1, 1), Pos::new(4, 5)), 5.0);
        assert_eq!(euclidean(Pos::new(2, 2), Pos::new(2, 2)), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for r in -4..=4 {
            for c in -4..=4 {
                let p = Pos::new(r, c);
                assert!(euclidean(Pos::ZERO, p) <= f64::from(manhattan(Pos::ZERO, p)));
            }
        }
    }
}
