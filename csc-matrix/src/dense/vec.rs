use std::fmt::Display;
use std::iter::zip;
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Index, IndexMut, Range};
use auto_impl_ops::auto_ops;
use itertools::Itertools;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use crate::Elem;

cfg_if::cfg_if! {
    if #[cfg(feature = "multithread")] {
        use rayon::prelude::*;
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct DVec<R> {
    data: Vec<R>
}

impl<R> DVec<R> {
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<R> {
        self.data
    }
}

impl<R> From<Vec<R>> for DVec<R> {
    fn from(data: Vec<R>) -> Self {
        Self { data }
    }
}

impl<R> From<DVec<R>> for Vec<R> {
    fn from(v: DVec<R>) -> Self {
        v.data
    }
}

impl<R> FromIterator<R> for DVec<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect_vec())
    }
}

impl<R> DVec<R>
where R: Elem {
    pub fn zero(dim: usize) -> Self {
        Self::from(vec![R::zero(); dim])
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|a| a.is_zero())
    }

    pub fn unit(dim: usize, i: usize) -> Self {
        let mut v = Self::zero(dim);
        v[i] = R::one();
        v
    }

    pub fn random(dim: usize, range: Range<R>) -> Self
    where R: SampleUniform {
        let mut rng = rand::thread_rng();
        let dist = Uniform::from(range);
        Self::from_iter((0..dim).map(|_| dist.sample(&mut rng)))
    }

    pub fn dot(&self, other: &Self) -> R {
        assert_eq!(self.dim(), other.dim());
        self.reduce2(other, |a, b| a * b)
    }

    pub fn norm(&self) -> R {
        self.dot(self).sqrt()
    }

    pub fn diff_norm(&self, other: &Self) -> R {
        assert_eq!(self.dim(), other.dim());
        self.reduce2(other, |a, b| {
            let d = a - b;
            d * d
        }).sqrt()
    }

    // ‖self - scalar * other‖, without materializing the difference.
    pub fn diff_norm_scaled(&self, other: &Self, scalar: R) -> R {
        assert_eq!(self.dim(), other.dim());
        self.reduce2(other, move |a, b| {
            let d = a - scalar * b;
            d * d
        }).sqrt()
    }

    pub fn normalize(&mut self) {
        let n = self.norm();
        if n.is_zero() {
            // zero vector: nothing to scale
            return;
        }
        self.data.iter_mut().for_each(|a| *a /= n)
    }

    fn reduce2<F>(&self, other: &Self, f: F) -> R
    where F: Fn(R, R) -> R + Send + Sync {
        #[cfg(feature = "multithread")]
        if crate::config::is_multithread_enabled() {
            return self.data.par_iter()
                .zip(other.data.par_iter())
                .map(|(&a, &b)| f(a, b))
                .reduce(R::zero, |x, y| x + y);
        }

        zip(&self.data, &other.data).fold(R::zero(), |acc, (&a, &b)| acc + f(a, b))
    }
}

impl<R> Index<usize> for DVec<R> {
    type Output = R;
    fn index(&self, i: usize) -> &R {
        &self.data[i]
    }
}

impl<R> IndexMut<usize> for DVec<R> {
    fn index_mut(&mut self, i: usize) -> &mut R {
        &mut self.data[i]
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<'a, 'b, R> $trait<&'b DVec<R>> for &'a DVec<R>
        where R: Elem {
            type Output = DVec<R>;
            fn $method(self, rhs: &'b DVec<R>) -> Self::Output {
                assert_eq!(self.dim(), rhs.dim());
                zip(&self.data, &rhs.data).map(|(&a, &b)| $trait::$method(a, b)).collect()
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);

impl<R> MulAssign<R> for DVec<R>
where R: Elem {
    fn mul_assign(&mut self, r: R) {
        self.data.iter_mut().for_each(|a| *a *= r)
    }
}

impl<'a, R> Mul<R> for &'a DVec<R>
where R: Elem {
    type Output = DVec<R>;
    fn mul(self, r: R) -> Self::Output {
        self.iter().map(|&a| a * r).collect()
    }
}

impl<R> Mul<R> for DVec<R>
where R: Elem {
    type Output = DVec<R>;
    fn mul(mut self, r: R) -> Self::Output {
        self *= r;
        self
    }
}

impl<R> Display for DVec<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}
