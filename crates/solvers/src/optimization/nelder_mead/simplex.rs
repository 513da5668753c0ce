use super::{Config, Vertex};

/// The N+1 vertices of the search, sorted by ascending cost.
///
/// Vertices `0..N` live in `head` and vertex `N` (the worst) in `tail`, so the
/// simplex fits in fixed-size storage without an `N + 1` array length.
///
/// Sorting is stable: among equal costs, the vertex that has been in the
/// simplex longer comes first.
#[derive(Debug, Clone, Copy)]
pub(super) struct Simplex<const N: usize> {
    head: [Vertex<N>; N],
    tail: Vertex<N>,
}

impl<const N: usize> Simplex<N> {
    /// Creates a simplex whose vertices all equal `vertex`.
    pub(super) fn uniform(vertex: Vertex<N>) -> Self {
        Self {
            head: [vertex; N],
            tail: vertex,
        }
    }

    pub(super) fn vertex(&self, index: usize) -> &Vertex<N> {
        if index < N {
            &self.head[index]
        } else {
            &self.tail
        }
    }

    /// Overwrites vertex `index` without restoring the sort order.
    pub(super) fn set(&mut self, index: usize, vertex: Vertex<N>) {
        if index < N {
            self.head[index] = vertex;
        } else {
            self.tail = vertex;
        }
    }

    pub(super) fn best(&self) -> &Vertex<N> {
        &self.head[0]
    }

    pub(super) fn second_worst(&self) -> &Vertex<N> {
        &self.head[N - 1]
    }

    pub(super) fn worst(&self) -> &Vertex<N> {
        &self.tail
    }

    /// Centroid of every vertex except the worst.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn centroid(&self) -> [f64; N] {
        let mut centroid = [0.0; N];
        for vertex in &self.head {
            for (c, x) in centroid.iter_mut().zip(&vertex.x) {
                *c += x;
            }
        }
        let n = N as f64;
        centroid.map(|c| c / n)
    }

    /// Replaces the worst vertex and moves it to its sorted position.
    ///
    /// The new vertex sorts after any vertex with an equal cost.
    pub(super) fn replace_worst(&mut self, vertex: Vertex<N>) {
        self.tail = vertex;
        self.settle(N);
    }

    /// Replaces the worst vertex if `vertex` has a strictly lower cost.
    pub(super) fn accept_if_better(&mut self, vertex: Vertex<N>) {
        if vertex.cost < self.tail.cost {
            self.replace_worst(vertex);
        }
    }

    /// Stable insertion sort over all N+1 vertices.
    pub(super) fn sort(&mut self) {
        for index in 1..=N {
            self.settle(index);
        }
    }

    /// Moves vertex `index` toward the front past every strictly worse vertex.
    fn settle(&mut self, mut index: usize) {
        while index > 0 && self.vertex(index).cost < self.vertex(index - 1).cost {
            self.swap_with_previous(index);
            index -= 1;
        }
    }

    fn swap_with_previous(&mut self, index: usize) {
        if index < N {
            self.head.swap(index - 1, index);
        } else {
            std::mem::swap(&mut self.head[N - 1], &mut self.tail);
        }
    }

    /// Difference between the worst and best costs.
    ///
    /// Infinite while any vertex has a non-finite cost.
    pub(super) fn cost_spread(&self) -> f64 {
        if self.tail.is_finite() {
            self.tail.cost - self.best().cost
        } else {
            f64::INFINITY
        }
    }

    /// Largest coordinate distance of any vertex from the best vertex.
    pub(super) fn coord_spread(&self) -> f64 {
        let best = self.best();
        (1..=N)
            .flat_map(|index| {
                let vertex = self.vertex(index);
                vertex.x.iter().zip(&best.x).map(|(x, b)| (x - b).abs())
            })
            .fold(0.0, f64::max)
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.cost_spread() <= config.cost_tol && self.coord_spread() <= config.coord_tol
    }
}

/// Returns `from + t · (to - from)`, coordinate by coordinate.
///
/// Every Nelder-Mead candidate is a point on the line through two vertices:
/// reflection uses `t = -α` from the centroid toward the worst vertex, and
/// expansion, contraction and shrink use their coefficients directly.
pub(super) fn affine<const N: usize>(from: &[f64; N], to: &[f64; N], t: f64) -> [f64; N] {
    let mut point = *from;
    for (p, (f, x)) in point.iter_mut().zip(from.iter().zip(to)) {
        *p = f + t * (x - f);
    }
    point
}
