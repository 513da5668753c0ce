/// A simplex vertex with its ranked cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<const N: usize> {
    /// The vertex coordinates.
    pub x: [f64; N],

    /// The objective value at `x`.
    ///
    /// Non-finite objective values are stored as `f64::INFINITY`, which ranks
    /// them behind every finite cost.
    pub cost: f64,
}

impl<const N: usize> Vertex<N> {
    /// Creates a vertex, ranking a non-finite cost as `f64::INFINITY`.
    #[must_use]
    pub fn new(x: [f64; N], cost: f64) -> Self {
        let cost = if cost.is_finite() { cost } else { f64::INFINITY };
        Self { x, cost }
    }

    /// Creates a vertex that ranks behind every finite cost.
    #[must_use]
    pub fn worse(x: [f64; N]) -> Self {
        Self {
            x,
            cost: f64::INFINITY,
        }
    }

    /// Returns true if the vertex has a finite cost.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cost.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_cost_is_kept() {
        let vertex = Vertex::new([1.0, 2.0], -3.5);
        assert_eq!(vertex.cost, -3.5);
        assert!(vertex.is_finite());
    }

    #[test]
    fn non_finite_costs_rank_as_infinity() {
        for cost in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let vertex = Vertex::new([0.0, 0.0], cost);
            assert_eq!(vertex.cost, f64::INFINITY);
            assert!(!vertex.is_finite());
        }
    }

    #[test]
    fn worse_vertex_keeps_coordinates() {
        let vertex = Vertex::worse([4.0, 5.0]);
        assert_eq!(vertex.x, [4.0, 5.0]);
        assert!(!vertex.is_finite());
    }
}
