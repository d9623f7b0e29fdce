use rand_distr::Geometric;

use super::*;

/// `G(n,p)` graphs contain every possible edge between distinct vertices with probability `p`,
/// independently of each other. Self-loops are never generated; for undirected graphs every
/// unordered pair is considered once and emitted normalized.
///
/// Candidate edges are enumerated as `u * n + v` and sampled with geometric jumps, so the
/// running time is proportional to the number of generated edges rather than `n^2`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    prob: f64,
    directed: bool,
}

impl Gnp {
    /// Creates a new `G(n,p)` generator with `n = 0` and `p = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    /// ** Panics if `p` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&prob),
            "{prob} is not a valid probability"
        );
        self.prob = prob;
        self
    }

    /// Updates whether ordered pairs `(u, v)` and `(v, u)` are sampled independently
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let n = self.n as u64;
        let directed = self.directed;

        GeometricJumper::new(self.prob)
            .stop_at(n * n)
            .iter(rng)
            .map(move |x| Edge((x / n) as Node, (x % n) as Node))
            .filter(move |e| !e.is_loop() && (directed || e.is_normalized()))
    }
}

/// A geometric jumper starts at `0` and advances by steps drawn from a geometric distribution,
/// yielding every position it lands on that is below the stop value.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    prob: f64,
    stop: u64,
}

impl GeometricJumper {
    /// Creates a new jumper with success probability `prob` and no stop value
    pub fn new(prob: f64) -> Self {
        Self {
            prob,
            stop: u64::MAX,
        }
    }

    /// Updates the (exclusive) stop value
    pub fn stop_at(mut self, stop: u64) -> Self {
        self.stop = stop;
        self
    }

    /// Creates an iterator over the positions the jumper lands on
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        GeometricJumperIter {
            // `Geometric` rejects probabilities outside of `[0, 1]`; treat as "never"
            distr: (self.prob > 0.0)
                .then(|| Geometric::new(self.prob).ok())
                .flatten(),
            rng,
            stop: self.stop,
            cur: 0,
        }
    }
}

/// Iterator created by [`GeometricJumper::iter`]
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R: Rng> {
    distr: Option<Geometric>,
    rng: &'a mut R,
    stop: u64,
    cur: u64,
}

impl<R: Rng> Iterator for GeometricJumperIter<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let distr = self.distr?;
        let pos = self.cur.checked_add(self.rng.sample(distr))?;
        if pos >= self.stop {
            self.cur = self.stop;
            return None;
        }
        self.cur = pos + 1;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    #[should_panic]
    fn wrong_prob() {
        let _ = Gnp::new().prob(1.5);
    }

    #[test]
    fn jumper_edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for stop in [3, 10] {
            assert_eq!(
                GeometricJumper::new(1.0).stop_at(stop).iter(rng).collect_vec(),
                (0..stop).collect_vec()
            );
        }
        assert_eq!(GeometricJumper::new(0.0).iter(rng).count(), 0);

        let positions = GeometricJumper::new(0.3).stop_at(1000).iter(rng).collect_vec();
        assert!(positions.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(positions.iter().all(|&x| x < 1000));
    }

    #[test]
    fn gnp_extremes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        let complete = Gnp::new().nodes(6).prob(1.0).generate(rng);
        assert_eq!(complete.len(), 15);
        assert!(complete.iter().all(|e| e.is_normalized() && !e.is_loop()));

        let complete = Gnp::new().nodes(6).prob(1.0).directed(true).generate(rng);
        assert_eq!(complete.len(), 30);

        assert!(Gnp::new().nodes(6).prob(0.0).generate(rng).is_empty());
    }

    #[test]
    fn gnp_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let n = 200;
        let p = 0.1;

        let m = Gnp::new().nodes(n).prob(p).generate(rng).len() as f64;
        let expected = p * (n * (n - 1) / 2) as f64;
        assert!((m - expected).abs() < 0.15 * expected, "{m} vs {expected}");
    }
}
