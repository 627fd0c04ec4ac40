// Matrix storage and format conversions

pub mod conversion;
pub mod csr;

pub use conversion::{from_sprs, to_sprs};
pub use csr::{Phase, SparseMatrix};
