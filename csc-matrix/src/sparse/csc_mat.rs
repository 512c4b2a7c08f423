use std::iter::zip;
use std::ops::{Mul, Range};
use auto_impl_ops::auto_ops;
use log::trace;
use num_traits::ToPrimitive;
use crate::dense::DVec;
use crate::{Elem, Error, MatType, Result};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Entry<R> {
    pub row: usize,
    pub value: R
}

#[derive(Clone, PartialEq, Debug)]
pub struct CscMat<R> {
    shape: (usize, usize),
    entries: Vec<Entry<R>>,
    col_offsets: Vec<usize>
}

impl<R> MatType for CscMat<R> {
    fn shape(&self) -> (usize, usize) {
        self.shape
    }
}

impl<R> CscMat<R> {
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn col_offsets(&self) -> &[usize] {
        &self.col_offsets
    }

    pub fn col_entries(&self, j: usize) -> &[Entry<R>] {
        &self.entries[self.col_range(j)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        (0..self.cols()).flat_map(move |j|
            self.col_entries(j).iter().map(move |e| (e.row, j, &e.value))
        )
    }

    pub fn density(&self) -> f64 {
        let (m, n) = self.shape();
        if m == 0 || n == 0 {
            return 0.0
        }

        let nnz = self.nnz().to_f64().unwrap();
        let total = (m * n).to_f64().unwrap();

        nnz / total
    }

    fn col_range(&self, j: usize) -> Range<usize> {
        self.col_offsets[j] .. self.col_offsets[j + 1]
    }
}

impl<R> CscMat<R>
where R: Elem {
    // `boundaries[c]` is a threshold in *raw stream positions*, not entry
    // counts: every raw index i < boundaries[c] belongs to a column < c,
    // zeros included. Zero values are dropped while scanning, so the
    // recorded offsets count retained entries only.
    pub fn from_raw_parts(
        shape: (usize, usize),
        values: &[R],
        rows: &[usize],
        boundaries: &[usize]
    ) -> Result<Self> {
        let (m, n) = shape;

        if values.len() != rows.len() {
            return Err(Error::DimensionMismatch { expected: values.len(), got: rows.len() });
        }
        if boundaries.len() != n + 1 {
            return Err(Error::DimensionMismatch { expected: n + 1, got: boundaries.len() });
        }

        let mut entries = Vec::with_capacity(values.len());
        let mut col_offsets = vec![0; n + 1];
        let mut ci = 0;

        for (i, (&a, &row)) in zip(values, rows).enumerate() {
            while ci <= n && i >= boundaries[ci] {
                col_offsets[ci] = entries.len();
                ci += 1;
            }

            if a.is_zero() {
                continue;
            }

            assert!(row < m, "row index out of range: {row} >= {m}");
            entries.push(Entry { row, value: a });
        }

        while ci <= n {
            col_offsets[ci] = entries.len();
            ci += 1;
        }

        trace!("csc: shape = {shape:?}, raw = {}, nnz = {}", values.len(), entries.len());

        let mut res = Self { shape, entries, col_offsets };
        res.sort_cols();

        Ok(res)
    }

    pub fn from_entries<T>(shape: (usize, usize), entries: T) -> Self
    where T: IntoIterator<Item = (usize, usize, R)> {
        let (m, n) = shape;
        let mut cols = vec![vec![]; n];

        for (i, j, a) in entries {
            if a.is_zero() {
                continue;
            }
            assert!(i < m, "row index out of range: {i} >= {m}");
            assert!(j < n, "col index out of range: {j} >= {n}");
            cols[j].push(Entry { row: i, value: a });
        }

        let mut entries = vec![];
        let mut col_offsets = Vec::with_capacity(n + 1);
        col_offsets.push(0);

        for mut col in cols {
            col.sort_by_key(|e| e.row);
            entries.append(&mut col);
            col_offsets.push(entries.len());
        }

        Self { shape, entries, col_offsets }
    }

    pub fn from_dense_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        let n = shape.1;
        Self::from_entries(
            shape,
            data.into_iter().enumerate().map(|(k, a)| {
                let (i, j) = (k / n, k % n);
                (i, j, a)
            })
        )
    }

    fn sort_cols(&mut self) {
        for j in 0..self.cols() {
            let r = self.col_range(j);
            self.entries[r].sort_by_key(|e| e.row);
        }
    }

    pub fn mul_vec(&self, v: &DVec<R>) -> Result<DVec<R>> {
        if v.dim() != self.cols() {
            return Err(Error::DimensionMismatch { expected: self.cols(), got: v.dim() });
        }
        Ok(self.mul_vec_unchecked(v))
    }

    fn mul_vec_unchecked(&self, v: &DVec<R>) -> DVec<R> {
        let mut res = DVec::zero(self.rows());

        for j in 0..self.cols() {
            let vj = v[j];
            for e in self.col_entries(j) {
                res[e.row] += e.value * vj;
            }
        }

        res
    }

    pub fn is_upper_triangular(&self) -> bool {
        (0..self.cols()).all(|j|
            self.col_entries(j).last().map_or(true, |e| e.row <= j)
        )
    }
}

// CscMat * DVec
#[auto_ops(val_val, val_ref, ref_val)]
impl<'a, 'b, R> Mul<&'b DVec<R>> for &'a CscMat<R>
where R: Elem {
    type Output = DVec<R>;
    fn mul(self, rhs: &'b DVec<R>) -> Self::Output {
        assert_eq!(self.cols(), rhs.dim());
        self.mul_vec_unchecked(rhs)
    }
}

#[cfg(test)]
impl CscMat<f64> {
    pub fn rand(shape: (usize, usize), density: f64) -> Self {
        use cartesian::cartesian;
        use rand::Rng;

        let (m, n) = shape;
        let range = cartesian!(0..m, 0..n);
        let mut rng = rand::thread_rng();

        Self::from_entries(shape, range.filter_map(|(i, j)|
            if rng.gen::<f64>() < density {
                Some((i, j, rng.gen::<f64>() + 0.5))
            } else {
                None
            }
        ))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use super::*;

    fn disassemble(a: &CscMat<f64>) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
        let offsets = a.col_offsets().to_vec();
        let (rows, values) = a.iter().map(|(i, _, &a)| (i, a)).unzip();
        (offsets, rows, values)
    }

    #[test]
    fn from_raw_parts() {
        // [1 0 2]
        // [0 3 0]
        // [4 0 5]
        let a = CscMat::from_raw_parts(
            (3, 3),
            &[1.0, 4.0, 3.0, 2.0, 5.0],
            &[0, 2, 1, 0, 2],
            &[0, 2, 3, 5]
        ).unwrap();

        assert_eq!(a.shape(), (3, 3));
        assert_eq!(a.nnz(), 5);
        assert_eq!(disassemble(&a), (
            vec![0, 2, 3, 5],
            vec![0, 2, 1, 0, 2],
            vec![1.0, 4.0, 3.0, 2.0, 5.0]
        ));
    }

    #[test]
    fn from_raw_parts_sorts_rows() {
        let a = CscMat::from_raw_parts(
            (3, 1),
            &[4.0, 1.0],
            &[2, 0],
            &[0, 2]
        ).unwrap();

        assert_eq!(disassemble(&a), (vec![0, 2], vec![0, 2], vec![1.0, 4.0]));
    }

    #[test]
    fn from_raw_parts_drops_zeros() {
        // the dropped zero still occupies raw position 1
        let a = CscMat::from_raw_parts(
            (2, 2),
            &[1.0, 0.0, 2.0],
            &[0, 1, 0],
            &[0, 2, 3]
        ).unwrap();

        assert_eq!(a.nnz(), 2);
        assert_eq!(disassemble(&a), (vec![0, 1, 2], vec![0, 0], vec![1.0, 2.0]));
    }

    #[test]
    fn from_raw_parts_trailing_boundaries() {
        let a = CscMat::from_raw_parts(
            (3, 3),
            &[1.0],
            &[0],
            &[0, 1, 1, 1]
        ).unwrap();

        assert_eq!(a.col_offsets(), &[0, 1, 1, 1]);
        assert_eq!(a.col_entries(0).len(), 1);
        assert_eq!(a.col_entries(1).len(), 0);
        assert_eq!(a.col_entries(2).len(), 0);
    }

    #[test]
    fn from_raw_parts_empty() {
        let a = CscMat::<f64>::from_raw_parts((0, 0), &[], &[], &[0]).unwrap();
        assert_eq!(a.nnz(), 0);
        assert_eq!(a.col_offsets(), &[0]);
    }

    #[test]
    fn from_raw_parts_len_mismatch() {
        let res = CscMat::from_raw_parts((2, 2), &[1.0, 2.0], &[0], &[0, 1, 2]);
        assert_eq!(res, Err(Error::DimensionMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn from_raw_parts_boundary_mismatch() {
        let res = CscMat::from_raw_parts((2, 2), &[1.0], &[0], &[0, 1]);
        assert_eq!(res, Err(Error::DimensionMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn from_entries() {
        let a = CscMat::from_entries((2, 2), [
            (1, 1, 4.0),
            (0, 0, 1.0),
            (1, 0, 3.0),
            (0, 1, 0.0)
        ]);

        assert_eq!(a.nnz(), 3);
        assert_eq!(disassemble(&a), (vec![0, 2, 3], vec![0, 1, 1], vec![1.0, 3.0, 4.0]));
    }

    #[test]
    fn from_dense_data() {
        let a = CscMat::from_dense_data((2, 2), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(disassemble(&a), (vec![0, 2, 4], vec![0, 1, 0, 1], vec![1.0, 3.0, 2.0, 4.0]));
    }

    #[test]
    fn mul_vec() {
        // [1 0 2]   [1]   [7]
        // [0 3 0] * [2] = [6]
        // [4 0 5]   [3]   [19]
        let a = CscMat::from_dense_data((3, 3), [
            1.0, 0.0, 2.0,
            0.0, 3.0, 0.0,
            4.0, 0.0, 5.0
        ]);
        let v = DVec::from(vec![1.0, 2.0, 3.0]);
        let w = a.mul_vec(&v).unwrap();
        assert_eq!(w.into_vec(), vec![7.0, 6.0, 19.0]);
    }

    #[test]
    fn mul_unit_basis_gives_columns() {
        let data = [
            1.0, 0.0, 2.0, 0.0,
            0.0, 0.0, 3.0, 4.0,
            5.0, 6.0, 0.0, 0.0
        ];
        let a = CscMat::from_dense_data((3, 4), data);

        for j in 0..4 {
            let e = DVec::unit(4, j);
            let col = a.mul_vec(&e).unwrap();
            let expected = (0..3).map(|i| data[i * 4 + j]).collect_vec();
            assert_eq!(col.into_vec(), expected);
        }
    }

    #[test]
    fn mul_vec_dim_mismatch() {
        let a = CscMat::from_dense_data((2, 3), [1.0; 6]);
        let v = DVec::from(vec![1.0, 2.0]);
        assert_eq!(a.mul_vec(&v), Err(Error::DimensionMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn mul_sums_duplicate_rows() {
        let a = CscMat::from_raw_parts((2, 1), &[1.0, 2.0], &[1, 1], &[0, 2]).unwrap();
        assert_eq!(a.nnz(), 2);

        let v = DVec::from(vec![1.0]);
        let w = a.mul_vec(&v).unwrap();
        assert_eq!(w.into_vec(), vec![0.0, 3.0]);
    }

    #[test]
    fn upper_triangular() {
        let u = CscMat::from_dense_data((3, 3), [
            1.0, 2.0, 3.0,
            0.0, 4.0, 5.0,
            0.0, 0.0, 6.0
        ]);
        assert!(u.is_upper_triangular());

        let a = CscMat::from_dense_data((3, 3), [
            1.0, 2.0, 3.0,
            0.0, 4.0, 5.0,
            0.0, 1.0, 6.0
        ]);
        assert!(!a.is_upper_triangular());
    }

    #[test]
    fn mul_matches_dense_reference() {
        let a = CscMat::rand((8, 8), 0.4);
        let v = DVec::random(8, -1.0..1.0);

        let mut expected = vec![0.0; 8];
        for (i, j, &x) in a.iter() {
            expected[i] += x * v[j];
        }

        assert_eq!(a.mul_vec(&v).unwrap().into_vec(), expected);
    }

    #[test]
    fn density() {
        let a = CscMat::from_dense_data((2, 2), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(a.density(), 0.5);
    }
}
