use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
use num_traits::Float;

pub trait MatType {
    fn shape(&self) -> (usize, usize);
    fn rows(&self) -> usize { self.shape().0 }
    fn cols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }
}

pub trait Elem:
    Float +
    AddAssign +
    SubAssign +
    MulAssign +
    DivAssign +
    Send +
    Sync +
    Display +
    Debug +
    'static
{}

impl<T> Elem for T where T:
    Float +
    AddAssign +
    SubAssign +
    MulAssign +
    DivAssign +
    Send +
    Sync +
    Display +
    Debug +
    'static
{}
