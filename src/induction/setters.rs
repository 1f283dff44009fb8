use crate::induction::TreeInductionEngine;

impl TreeInductionEngine {
    // Set methods for parameters

    /// Set the depth budget on the engine.
    /// * `max_depth` - Induction fails with `DepthLimitExceeded` instead of
    ///   splitting a node at this depth. `None` removes the budget.
    pub fn set_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set whether sibling subtrees are built in parallel.
    /// * `parallel` - Build subtrees on a rayon thread pool.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.cfg.parallel = parallel;
        self
    }

    /// Set the number of threads on the engine.
    /// * `num_threads` - Set the number of threads to be used when building in parallel.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }
}
