// Algorithm layer: everything here reads matrices through the finalized CRS contract

pub mod add;
pub mod determinant;
pub mod multiply;
pub mod scale;

pub use add::{add, sum};
pub use determinant::{bareiss_determinant, cofactor_determinant, determinant, is_invertible};
pub use multiply::multiply;
pub use scale::scale;
