use log::{info, trace};
use rand::distributions::uniform::SampleUniform;
use crate::dense::DVec;
use crate::{Elem, Error, MatType, Result};
use super::CscMat;

pub const MAX_ATTEMPTS: usize = 10;
pub const OUTER_ROUNDS: usize = 50;
pub const INNER_STEPS: usize = 20;

pub fn find_dominant_eigenvalue<R>(a: &CscMat<R>) -> Result<R>
where R: Elem + SampleUniform {
    let tolerance = R::from(1e-6).unwrap();
    find_dominant_eigenvalue_with(a, tolerance, true)
}

// Power iteration with random restarts. Each outer round runs INNER_STEPS
// unchecked multiply-normalize steps, then estimates the eigenvalue by the
// Rayleigh quotient |v·Av| / (v·v) and tests the residual ‖Av - λv‖
// (scaled by λ‖v‖ when `relative_error`) against the tolerance.
pub fn find_dominant_eigenvalue_with<R>(a: &CscMat<R>, tolerance: R, relative_error: bool) -> Result<R>
where R: Elem + SampleUniform {
    if !a.is_square() {
        return Err(Error::PreconditionViolated("eigenvalues are defined only for square matrices"));
    }

    info!("power iteration: a = {:?}, nnz = {}, tolerance = {tolerance}", a.shape(), a.nnz());

    let n = a.cols();

    for attempt in 0..MAX_ATTEMPTS {
        let mut v = DVec::random(n, R::zero()..R::one());

        for round in 0..OUTER_ROUNDS {
            for _ in 0..INNER_STEPS {
                v = a * &v;
                v.normalize();
            }

            let next = a * &v;
            let vv = v.dot(&v);

            if vv.is_zero() {
                // degenerate iterate, no estimate to test
                v = next;
                v.normalize();
                continue;
            }

            let lambda = v.dot(&next).abs() / vv;

            if lambda.is_zero() {
                trace!("attempt {attempt}: zero estimate, restarting");
                break;
            }

            let res_norm = next.diff_norm_scaled(&v, lambda);
            let error = if relative_error {
                res_norm / (lambda * v.norm())
            } else {
                res_norm
            };

            trace!("attempt {attempt}, round {round}: lambda = {lambda}, error = {error}");

            if error <= tolerance {
                info!("converged: lambda = {lambda} (attempt {attempt}, round {round})");
                return Ok(lambda);
            }

            v = next;
            v.normalize();
        }
    }

    Err(Error::ConvergenceFailed { attempts: MAX_ATTEMPTS })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diag() {
        let a = CscMat::from_dense_data((2, 2), [
            2.0, 0.0,
            0.0, 1.0
        ]);
        let lambda = find_dominant_eigenvalue(&a).unwrap();
        assert!((lambda - 2.0).abs() < 1e-4);
    }

    #[test]
    fn diag_absolute_error() {
        let a = CscMat::from_dense_data((2, 2), [
            2.0, 0.0,
            0.0, 1.0
        ]);
        let lambda = find_dominant_eigenvalue_with(&a, 1e-6, false).unwrap();
        assert!((lambda - 2.0).abs() < 1e-4);
    }

    #[test]
    fn symmetric() {
        // eigenvalues 3 and 1
        let a = CscMat::from_dense_data((2, 2), [
            2.0, 1.0,
            1.0, 2.0
        ]);
        let lambda = find_dominant_eigenvalue(&a).unwrap();
        assert!((lambda - 3.0).abs() < 1e-4);
    }

    #[test]
    fn larger_diag() {
        let n = 10;
        let a = CscMat::from_entries((n, n), (0..n).map(|i|
            (i, i, (i + 1) as f64)
        ));
        let lambda = find_dominant_eigenvalue(&a).unwrap();
        assert!((lambda - 10.0).abs() < 1e-3);
    }

    #[test]
    fn zero_matrix() {
        let a = CscMat::<f64>::from_entries((4, 4), []);
        assert_eq!(
            find_dominant_eigenvalue(&a),
            Err(Error::ConvergenceFailed { attempts: MAX_ATTEMPTS })
        );
    }

    #[test]
    fn non_square() {
        let a = CscMat::from_dense_data((2, 3), [1.0; 6]);
        assert_eq!(
            find_dominant_eigenvalue(&a),
            Err(Error::PreconditionViolated("eigenvalues are defined only for square matrices"))
        );
    }
}
