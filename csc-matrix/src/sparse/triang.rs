use log::info;
use crate::dense::DVec;
use crate::{Elem, Error, MatType, Result};
use super::CscMat;

// Back substitution over the columns of `a`, highest index first. The
// last entry of column `c` is the diagonal pivot; the remaining entries
// of the column propagate `x[c]` upwards.
pub fn solve_upper_triangular<R>(a: &CscMat<R>, b: &DVec<R>) -> Result<DVec<R>>
where R: Elem {
    if b.dim() != a.cols() {
        return Err(Error::DimensionMismatch { expected: a.cols(), got: b.dim() });
    }
    if !a.is_square() {
        return Err(Error::PreconditionViolated("matrix is not square"));
    }
    if !a.is_upper_triangular() {
        return Err(Error::PreconditionViolated("matrix is not upper-triangular"));
    }

    info!("solve upper-triangular: a = {:?}, nnz = {}", a.shape(), a.nnz());

    let mut x = b.clone();

    for j in (0..a.cols()).rev() {
        let col = a.col_entries(j);

        let piv = match col.last() {
            Some(e) if e.row == j && !e.value.is_zero() => e.value,
            _ => return Err(Error::PreconditionViolated("matrix is not invertible"))
        };

        let x_j = x[j] / piv;
        x[j] = x_j;

        for e in &col[..col.len() - 1] {
            x[e.row] -= e.value * x_j;
        }
    }

    Ok(x)
}
