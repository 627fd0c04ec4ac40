//! Configuration for the algorithm layer

/// Algorithm used to evaluate determinants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminantMethod {
    /// Laplace expansion along the first row, recursing on minors. O(n!)
    Cofactor,
    /// Fraction-free Gaussian elimination. O(n³), exact for integers
    Bareiss,
}

/// Parameters controlling when the rayon paths are taken
#[derive(Debug, Clone)]
pub struct ParallelParameters {
    /// Number of worker threads
    pub n_threads: usize,
    /// Minimum number of output rows before sum/multiply run in parallel
    pub min_rows_for_parallel: usize,
    /// Minimum order before cofactor expansion forks its top-level branches
    pub min_order_for_parallel_det: usize,
}

impl Default for ParallelParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
            min_rows_for_parallel: 256,
            min_order_for_parallel_det: 6,
        }
    }
}

impl ParallelParameters {
    /// Parameters that never take a parallel path
    pub fn serial() -> Self {
        Self {
            n_threads: 1,
            min_rows_for_parallel: usize::MAX,
            min_order_for_parallel_det: usize::MAX,
        }
    }
}

/// Configuration for the `*_with` entry points
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Determinant algorithm
    pub determinant_method: DeterminantMethod,

    /// Parallelism thresholds and thread count
    pub parallel: ParallelParameters,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            determinant_method: DeterminantMethod::Cofactor,
            parallel: ParallelParameters::default(),
        }
    }
}

impl EngineConfig {
    /// A configuration that keeps every operation on the calling thread
    pub fn serial() -> Self {
        Self {
            parallel: ParallelParameters::serial(),
            ..Self::default()
        }
    }

    /// Returns a copy using the given determinant method
    pub fn with_determinant_method(mut self, method: DeterminantMethod) -> Self {
        self.determinant_method = method;
        self
    }
}
