pub use crate::MatType;

mod csc_mat;
pub use csc_mat::{CscMat, Entry};

pub mod triang;
pub mod eigen;
