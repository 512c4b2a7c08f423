use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Display, Debug)]
pub enum Error {
    #[display("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[display("precondition violated: {_0}")]
    PreconditionViolated(&'static str),

    #[display("no eigenvalue found within tolerance after {attempts} attempts")]
    ConvergenceFailed { attempts: usize },
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = Error::DimensionMismatch { expected: 3, got: 2 };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3, got 2");

        let e = Error::PreconditionViolated("matrix is not square");
        assert_eq!(e.to_string(), "precondition violated: matrix is not square");

        let e = Error::ConvergenceFailed { attempts: 10 };
        assert_eq!(e.to_string(), "no eigenvalue found within tolerance after 10 attempts");
    }
}
