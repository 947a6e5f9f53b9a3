//! `mathcore::matrices` submodule implements NxM matrices which can be used to apply transformations
//! on vectors.
//!
//! [`Matrix3`] is the two-dimensional homogeneous transform matrix and [`Matrix4`] is the
//! three-dimensional one. Both use column vectors, so translation is stored in the last column.
//!

use crate::mathcore::{
    affine::Affine2,
    floats::{almost_equal, is_zero, FloatOperations},
    quaternions::Quaternion,
    vectors::{Vector2, Vector3},
    Sign,
};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// [`Matrix`] struct implements linear algebra functions with matrices.
///
/// It also implements various matrix operations with second operand being either matrix or number.
///
#[derive(Copy, Clone, Debug)]
pub struct Matrix<const ROWS: usize, const COLUMNS: usize> {
    /// Underlying array.
    ///
    arr: [[f32; COLUMNS]; ROWS],
}
impl<const ROWS: usize, const COLUMNS: usize> Matrix<ROWS, COLUMNS> {
    /// Returns count of matrix rows.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 4> = Matrix::zero();
    /// assert_eq!(matrix.rows(), 3);
    /// ```
    ///
    pub fn rows(&self) -> usize {
        ROWS
    }
    /// Returns count of matrix columns.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 4> = Matrix::zero();
    /// assert_eq!(matrix.columns(), 4);
    /// ```
    ///
    pub fn columns(&self) -> usize {
        COLUMNS
    }
    /// Returns matrix size as a tuple.
    ///
    pub fn size(&self) -> (usize, usize) {
        (ROWS, COLUMNS)
    }
    /// Returns matrix as an array.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 3> = Matrix::zero();
    /// assert_eq!(matrix.as_array(), [[0.0; 3]; 3]);
    /// ```
    ///
    pub fn as_array(&self) -> [[f32; COLUMNS]; ROWS] {
        self.arr
    }

    /// Initializes matrix with zeroes.
    ///
    pub fn zero() -> Self {
        Self {
            arr: [[0.0; COLUMNS]; ROWS],
        }
    }
    /// Initializes matrix with ones.
    ///
    pub fn one() -> Self {
        Self {
            arr: [[1.0; COLUMNS]; ROWS],
        }
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    /// Allows to perform custom operations on each matrix element.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let mut matrix: Matrix<1, 4> = Matrix::from([[1.0, 2.0, 3.0, 4.0]]);
    /// matrix = matrix.map(|x| x + 1.0);
    /// assert_eq!(matrix.as_array(), [[2.0, 3.0, 4.0, 5.0]]);
    /// ```
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Matrix<ROWS, COLUMNS> {
        Matrix {
            arr: self.arr.map(|row| row.map(&f)),
        }
    }
    /// Combines matrices by applying function on their elements.
    ///
    /// Allows performing operations with 2 matrices.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let m1: Matrix<1, 4> = Matrix::from([[1.0, 2.0, 2.0, 1.0]]);
    /// let m2: Matrix<1, 4> = Matrix::from([[2.0, 1.0, 1.0, 2.0]]);
    /// assert_eq!(m1.combine(m2, |a, b| a + b).as_array(), [[3.0; 4]]);
    /// ```
    ///
    pub fn combine(
        self,
        other: Matrix<ROWS, COLUMNS>,
        f: impl Fn(f32, f32) -> f32,
    ) -> Matrix<ROWS, COLUMNS> {
        let mut matrix: Matrix<ROWS, COLUMNS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                matrix[r][c] = f(self[r][c], other[r][c]);
            }
        }
        matrix
    }

    /// Returns transpose of initial matrix.
    ///
    /// Interchanges its rows into columns (flips matrix over its diagonal).
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<2, 3> = Matrix::from([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0]
    /// ]);
    /// assert_eq!(
    ///     matrix.transpose().as_array(),
    ///     [
    ///         [1.0, 4.0],
    ///         [2.0, 5.0],
    ///         [3.0, 6.0]
    ///     ]
    /// );
    /// ```
    ///
    pub fn transpose(&self) -> Matrix<COLUMNS, ROWS> {
        let mut matrix: Matrix<COLUMNS, ROWS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                matrix[c][r] = self[r][c];
            }
        }
        matrix
    }

    /// `internal_rref` reduces rows of `Vec<Vec<f32>>` by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Columns whose remaining elements are all zero are skipped.
    ///
    fn internal_rref(matrix: &mut [Vec<f32>]) {
        let rows: usize = matrix.len();
        let columns: usize = matrix.first().map_or(0, Vec::len);

        let mut lead: usize = 0;
        for c in 0..columns {
            if lead >= rows {
                break;
            }
            let Some(pivot) = (lead..rows)
                .max_by(|&a, &b| matrix[a][c].abs().total_cmp(&matrix[b][c].abs()))
            else {
                break;
            };
            if is_zero(matrix[pivot][c]) {
                continue;
            }
            matrix.swap(lead, pivot);

            let div: f32 = matrix[lead][c];
            matrix[lead].iter_mut().for_each(|elem| *elem /= div);
            let lead_row: Vec<f32> = matrix[lead].clone();
            for (r, row) in matrix.iter_mut().enumerate() {
                let mult: f32 = row[c];
                if r == lead || mult == 0.0 {
                    continue;
                }
                row.iter_mut()
                    .zip(lead_row.iter())
                    .for_each(|(elem, lead_elem)| *elem -= lead_elem * mult);
            }
            lead += 1;
        }
    }

    /// Returns reduced row echelon form of initial matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// # use ggeometry::mathcore::floats::FloatOperations;
    /// let matrix: Matrix<3, 4> = Matrix::from([
    ///     [5.0, -6.0, -7.0, 7.0],
    ///     [3.0, -2.0, 5.0, -17.0],
    ///     [2.0, 4.0, -3.0, 29.0]
    /// ]);
    /// assert_eq!(
    ///     matrix.rref().correct_to(0).as_array(),
    ///     [
    ///         [1.0, 0.0, 0.0, 2.0],
    ///         [0.0, 1.0, 0.0, 4.0],
    ///         [0.0, 0.0, 1.0, -3.0]
    ///     ],
    /// );
    /// ```
    ///
    pub fn rref(&self) -> Matrix<ROWS, COLUMNS> {
        let mut m: Vec<Vec<f32>> = self.arr.iter().map(|row| row.to_vec()).collect();
        Self::internal_rref(&mut m);

        let mut matrix: Matrix<ROWS, COLUMNS> = Matrix::zero();
        for (r, row) in m.iter().enumerate() {
            matrix[r].copy_from_slice(row);
        }
        matrix
    }

    /// Performs dot product operation on two matrices.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let m1: Matrix<1, 3> = Matrix::from([[1.0, 2.0, 3.0]]);
    /// let m2: Matrix<3, 1> = Matrix::from([[1.0], [2.0], [3.0]]);
    /// assert_eq!(m1.dot_product(m2).as_array(), [[14.0]]);
    /// ```
    ///
    pub fn dot_product<const RHS_COLUMNS: usize>(
        self,
        other: Matrix<COLUMNS, RHS_COLUMNS>,
    ) -> Matrix<ROWS, RHS_COLUMNS> {
        let mut matrix: Matrix<ROWS, RHS_COLUMNS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..RHS_COLUMNS {
                let mut res: f32 = 0.0;
                for k in 0..COLUMNS {
                    res += self[r][k] * other[k][c];
                }
                matrix[r][c] = res;
            }
        }
        matrix
    }
}
impl<const N: usize> Matrix<N, N> {
    /// Returns tuple of echelon form of initial matrix and sign of row permutation.
    ///
    /// Elimination uses partial pivoting: the row with the largest absolute value in the
    /// current column is swapped into the pivot position.
    ///
    fn internal_echelon_form(&self) -> (Matrix<N, N>, Sign) {
        let mut matrix: Matrix<N, N> = *self;
        let mut sign: Sign = Sign::Positive;
        for r in 0..N {
            let pivot: usize = (r..N)
                .max_by(|&a, &b| matrix[a][r].abs().total_cmp(&matrix[b][r].abs()))
                .unwrap_or(r);
            if matrix[pivot][r] == 0.0 {
                continue;
            }
            if pivot != r {
                matrix.arr.swap(pivot, r);
                sign = -sign;
            }
            for c in (r + 1)..N {
                let ratio: f32 = matrix[c][r] / matrix[r][r];
                if ratio == 0.0 {
                    continue;
                }
                for k in 0..N {
                    matrix[c][k] -= ratio * matrix[r][k];
                }
            }
        }
        (matrix, sign)
    }

    /// Returns echelon form of initial matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<2, 2> = Matrix::from([
    ///     [2.0, 1.0],
    ///     [4.0, 3.0]
    /// ]);
    /// assert_eq!(matrix.echelon_form().as_array(),
    ///     [
    ///         [4.0, 3.0],
    ///         [0.0, -0.5]
    ///     ]
    /// );
    /// ```
    ///
    pub fn echelon_form(&self) -> Matrix<N, N> {
        self.internal_echelon_form().0
    }

    /// Makes n-sized identity matrix.
    ///
    /// Constructs identity matrix (square matrix with 1.0 on main diagonal
    /// and 0.0 elsewhere).
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 3> = Matrix::identity();
    /// assert_eq!(
    ///     matrix.as_array(),
    ///     [
    ///         [1.0, 0.0, 0.0],
    ///         [0.0, 1.0, 0.0],
    ///         [0.0, 0.0, 1.0]
    ///     ],
    /// );
    /// ```
    ///
    pub fn identity() -> Matrix<N, N> {
        let mut matrix: Matrix<N, N> = Matrix::zero();
        for i in 0..N {
            matrix[i][i] = 1.0;
        }
        matrix
    }

    /// Returns determinant of initial matrix.
    ///
    /// Calculates determinant of a square matrix using echelon form of initial matrix. Product of
    /// its diagonal and the sign is equal to determinant.
    ///
    /// # Examples
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 3> = Matrix::from([
    ///     [1.0, 2.0, 3.0],
    ///     [2.0, 4.0, 6.0],
    ///     [1.0, 1.0, 1.0]
    /// ]);
    /// assert_eq!(matrix.determinant(), 0.0);
    /// ```
    ///
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 3> = Matrix::from([
    ///     [-3.0, 2.0, 2.0],
    ///     [43.0, 1.0, -12.0],
    ///     [5.0, 0.0, 5.0]
    /// ]);
    /// assert_eq!(matrix.determinant().round(), -575.0);
    /// ```
    ///
    pub fn determinant(&self) -> f32 {
        if N == 0 {
            return 0.0;
        }
        let (ef, sign): (Matrix<N, N>, Sign) = self.internal_echelon_form();
        let mut product: f32 = 1.0;
        for i in 0..N {
            product *= ef[i][i];
        }
        product * f32::from(sign)
    }
    /// Returns inverse of an initial matrix.
    ///
    /// Matrices which determinant is zero (within `FLOAT_ROUNDING_ERROR`) are not invertible,
    /// so `None` is returned.
    ///
    /// # Examples
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// # use ggeometry::mathcore::floats::FloatOperations;
    /// let matrix: Matrix<3, 3> = Matrix::from([
    ///     [3.0, 2.0, 2.0],
    ///     [1.0, 2.0, 2.0],
    ///     [1.0, 3.0, 2.0]
    /// ]);
    /// let inverse: Matrix<3, 3> = matrix
    ///     .inverse()
    ///     .expect("Should not fail: determinant is not equal to zero.")
    ///     .round_up_to(2);
    /// assert_eq!(
    ///     inverse.as_array(),
    ///     [
    ///         [0.5, -0.5, 0.0],
    ///         [0.0, -1.0, 1.0],
    ///         [-0.25, 1.75, -1.0]
    ///     ]
    /// );
    /// ```
    ///
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// let matrix: Matrix<2, 2> = Matrix::from([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0]
    /// ]);
    /// assert!(matrix.inverse().is_none());
    /// ```
    ///
    pub fn inverse(&self) -> Option<Matrix<N, N>> {
        if is_zero(self.determinant()) {
            return None;
        }
        let mut augmented: Vec<Vec<f32>> = vec![vec![0.0; N * 2]; N];
        for (r, row) in augmented.iter_mut().enumerate() {
            row[..N].copy_from_slice(&self[r]);
            row[N + r] = 1.0;
        }
        Self::internal_rref(&mut augmented);

        let mut inverse: Matrix<N, N> = Matrix::zero();
        for (r, row) in augmented.iter().enumerate() {
            inverse[r].copy_from_slice(&row[N..]);
        }
        Some(inverse)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> FloatOperations for Matrix<ROWS, COLUMNS> {
    /// Constructs new matrix by correcting every matrix element that may be wronged by float operations.
    ///
    /// Fixes such things as -0.0 into 0.0, 0.00000001 into 0.0 and 0.99999999 into 1.0.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix;
    /// # use ggeometry::mathcore::floats::FloatOperations;
    /// let matrix: Matrix<1, 3> = Matrix::from([[-0.0, 0.00000001, 0.99999999]]).correct_to(0);
    /// assert_eq!(matrix.as_array(), [[0.0, 0.0, 1.0]]);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
    /// Constructs new matrix by rounding every matrix element up to specified number of digits after floating
    /// point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Index<usize> for Matrix<ROWS, COLUMNS> {
    type Output = [f32; COLUMNS];

    fn index(&self, index: usize) -> &Self::Output {
        &self.arr[index]
    }
}
impl<const ROWS: usize, const COLUMNS: usize> IndexMut<usize> for Matrix<ROWS, COLUMNS> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.arr[index]
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Neg for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Returns negated matrix.
    ///
    /// Is equal to `self.map(|x| -x)` and `self * -1.0`.
    ///
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Add<Self> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Returns matrix where each element is a sum of those elements in given matrices.
    ///
    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Sub<Self> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Returns matrix where each element is a difference of those elements in given matrices.
    ///
    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl<const ROWS: usize, const COLUMNS: usize, const RHS_COLUMNS: usize>
    Mul<Matrix<COLUMNS, RHS_COLUMNS>> for Matrix<ROWS, COLUMNS>
{
    type Output = Matrix<ROWS, RHS_COLUMNS>;

    /// Performs dot product operation on two matrices.
    ///
    /// Is equal to `self.dot_product(rhs)`.
    ///
    fn mul(self, rhs: Matrix<COLUMNS, RHS_COLUMNS>) -> Self::Output {
        self.dot_product(rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> AddAssign<Self> for Matrix<ROWS, COLUMNS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> SubAssign<Self> for Matrix<ROWS, COLUMNS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Add<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Returns matrix where given value is added to each element.
    ///
    fn add(self, rhs: f32) -> Self::Output {
        self.map(|x| x + rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Sub<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Returns matrix where given value is subtracted from each element.
    ///
    fn sub(self, rhs: f32) -> Self::Output {
        self.map(|x| x - rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Mul<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Returns matrix where each element is multiplied by given multiplier.
    ///
    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Div<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Returns matrix where each element is divided by given value.
    ///
    fn div(self, rhs: f32) -> Self::Output {
        self.map(|x| x / rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> AddAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> SubAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> MulAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> DivAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> PartialEq for Matrix<ROWS, COLUMNS> {
    /// Checks if matrices are equal.
    ///
    fn eq(&self, other: &Self) -> bool {
        self.arr
            .iter()
            .flatten()
            .zip(other.arr.iter().flatten())
            .all(|(&a, &b)| almost_equal(a, b))
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Eq for Matrix<ROWS, COLUMNS> {}
impl<const ROWS: usize, const COLUMNS: usize> Default for Matrix<ROWS, COLUMNS> {
    fn default() -> Self {
        Self::zero()
    }
}
impl<const ROWS: usize, const COLUMNS: usize> From<[[f32; COLUMNS]; ROWS]>
    for Matrix<ROWS, COLUMNS>
{
    /// Shorthand for writing `Matrix { arr: ... }`.
    ///
    fn from(arr: [[f32; COLUMNS]; ROWS]) -> Self {
        Matrix { arr }
    }
}

/// Type alias for 3x1 [`Matrix`] (is used to represent two-dimensional point in homogeneous coordinates).
///
pub type Matrix3x1 = Matrix<3, 1>;
impl From<Vector2> for Matrix3x1 {
    /// `From<Vector2>` trait for `Matrix3x1` can be used in transforming.
    ///
    fn from(vector: Vector2) -> Self {
        Matrix::from([[vector.x], [vector.y], [1.0]])
    }
}
impl From<Matrix3x1> for Vector2 {
    /// `From<Matrix3x1>` trait for `Vector2` can be used in transforming.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::{Matrix3, Matrix3x1};
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// let vector: Vector2 = Vector2::from([0.0, 2.0]);
    /// let rotation_matrix: Matrix3 = Matrix3::from([
    ///     [0.66, -0.75, 0.0],
    ///     [0.75, 0.66, 0.0],
    ///     [0.0, 0.0, 1.0]
    /// ]);
    /// let res: Vector2 = Vector2::from(rotation_matrix * Matrix3x1::from(vector));
    /// assert_eq!(res, Vector2::from([-1.5, 1.32]));
    /// ```
    ///
    fn from(matrix: Matrix3x1) -> Self {
        Vector2::from([matrix[0][0], matrix[1][0]])
    }
}
/// Type alias for 3x3 [`Matrix`] (two-dimensional transform matrix).
///
pub type Matrix3 = Matrix<3, 3>;
impl Matrix3 {
    /// Transforms given point by using dot product (shorthand for writing `Vector2::from(self * Matrix3x1::from(vector))`).
    ///
    pub fn apply_to(self, vector: Vector2) -> Vector2 {
        Vector2::from(self * Matrix3x1::from(vector))
    }
}
impl From<Affine2> for Matrix3 {
    /// Extends affine transform with `0 0 1` row.
    ///
    fn from(affine: Affine2) -> Self {
        Matrix::from([
            [affine.m00, affine.m01, affine.m02],
            [affine.m10, affine.m11, affine.m12],
            [0.0, 0.0, 1.0],
        ])
    }
}

/// Type alias for 4x4 [`Matrix`] (three-dimensional transform matrix).
///
pub type Matrix4 = Matrix<4, 4>;
impl Matrix4 {
    /// Constructs matrix that translates points by given vector.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::matrices::Matrix4;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let matrix: Matrix4 = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(matrix.apply_to(Vector3::one()), Vector3::new(2.0, 3.0, 4.0));
    /// assert_eq!(matrix.translation(), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    ///
    pub fn from_translation(translation: Vector3) -> Self {
        let mut matrix: Matrix4 = Matrix4::identity();
        matrix[0][3] = translation.x;
        matrix[1][3] = translation.y;
        matrix[2][3] = translation.z;
        matrix
    }
    /// Constructs matrix that scales points along axes by components of given vector.
    ///
    pub fn from_scaling(scale: Vector3) -> Self {
        let mut matrix: Matrix4 = Matrix4::identity();
        matrix[0][0] = scale.x;
        matrix[1][1] = scale.y;
        matrix[2][2] = scale.z;
        matrix
    }
    /// Constructs matrix that rotates points by given quaternion.
    ///
    pub fn from_rotation(rotation: Quaternion) -> Self {
        rotation.to_matrix()
    }
    /// Constructs matrix that scales, then rotates and then translates points.
    ///
    pub fn from_translation_rotation_scale(
        translation: Vector3,
        rotation: Quaternion,
        scale: Vector3,
    ) -> Self {
        Matrix4::from_translation(translation)
            * Matrix4::from_rotation(rotation)
            * Matrix4::from_scaling(scale)
    }

    /// Returns translation part of the transform (last column).
    ///
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self[0][3], self[1][3], self[2][3])
    }
    /// Returns basis axis of the transform (column with given index).
    ///
    /// # Panics
    /// Panics if `index` is greater than 3.
    ///
    pub fn axis(&self, index: usize) -> Vector3 {
        Vector3::new(self[0][index], self[1][index], self[2][index])
    }

    /// Transforms given point as affine transform (`w` is assumed to be 1.0 and is not divided by).
    ///
    pub fn apply_to(&self, point: Vector3) -> Vector3 {
        Vector3::new(
            self[0][0] * point.x + self[0][1] * point.y + self[0][2] * point.z + self[0][3],
            self[1][0] * point.x + self[1][1] * point.y + self[1][2] * point.z + self[1][3],
            self[2][0] * point.x + self[2][1] * point.y + self[2][2] * point.z + self[2][3],
        )
    }
    /// Transforms given point and divides result by `w`.
    ///
    pub fn project(&self, point: Vector3) -> Vector3 {
        let w: f32 =
            self[3][0] * point.x + self[3][1] * point.y + self[3][2] * point.z + self[3][3];
        self.apply_to(point) / w
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix, Matrix3, Matrix4};
    use crate::mathcore::{
        affine::Affine2,
        floats::FloatOperations,
        quaternions::Quaternion,
        vectors::{Vector2, Vector3},
        Angle,
    };

    #[test]
    fn matrix() {
        let m1: Matrix<1, 3> = Matrix::from([[1.0, 2.0, 3.0]]);
        assert_eq!(m1[0][1], 2.0);

        let m2: Matrix<1, 3> = Matrix::from([[3.0, 2.0, 1.0]]);
        let mut m3: Matrix<1, 3> = m1;

        assert_eq!((m1 + m2).as_array(), [[4.0; 3]]);
        assert_eq!((m1 - m2).as_array(), [[-2.0, 0.0, 2.0]]);
        assert_eq!((m1 * m2.transpose()).as_array(), [[10.0]]);

        m3 += m2;
        assert_eq!(m3.as_array(), [[4.0; 3]]);
        m3 -= m2;
        assert_eq!(m3.as_array(), [[1.0, 2.0, 3.0]]);

        assert_eq!((m1 + 2.0).as_array(), [[3.0, 4.0, 5.0]]);
        assert_eq!((m1 - 2.0).as_array(), [[-1.0, 0.0, 1.0]]);
        assert_eq!((m1 * 2.0).as_array(), [[2.0, 4.0, 6.0]]);
        assert_eq!((m1 / 2.0).as_array(), [[0.5, 1.0, 1.5]]);

        m3 += 2.0;
        assert_eq!(m3.as_array(), [[3.0, 4.0, 5.0]]);
        m3 -= 2.0;
        assert_eq!(m3.as_array(), [[1.0, 2.0, 3.0]]);
        m3 *= 2.0;
        assert_eq!(m3.as_array(), [[2.0, 4.0, 6.0]]);
        m3 /= 2.0;
        assert_eq!(m3.as_array(), [[1.0, 2.0, 3.0]]);
        assert_eq!(-m3, m3 * -1.0);
    }

    #[test]
    fn pivoting() {
        let matrix: Matrix<3, 3> = Matrix::from([[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]]);
        assert_eq!(matrix.determinant().round(), -2.0);

        let inverse: Matrix<3, 3> = matrix.inverse().expect("Matrix is invertible");
        assert_eq!(matrix * inverse, Matrix::identity());

        let singular: Matrix<3, 3> = Matrix::from([[0.0, 0.0, 1.0], [0.0, 0.0, 2.0], [1.0, 1.0, 1.0]]);
        assert!(singular.inverse().is_none());
        assert_eq!(
            singular.rref().correct_to(0).as_array(),
            [[1.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn matrix3() {
        let affine: Affine2 = Affine2::from_translation(Vector2::new(2.0, 3.0));
        let matrix: Matrix3 = Matrix3::from(affine);
        assert_eq!(
            matrix.as_array(),
            [[1.0, 0.0, 2.0], [0.0, 1.0, 3.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(matrix.apply_to(Vector2::new(0.0, 2.0)), Vector2::new(2.0, 5.0));
    }

    #[test]
    fn matrix4() {
        let scaling: Matrix4 = Matrix4::from_scaling(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(scaling.apply_to(Vector3::one()), Vector3::new(2.0, 3.0, 4.0));

        let transform: Matrix4 = Matrix4::from_translation_rotation_scale(
            Vector3::new(1.0, 0.0, 0.0),
            Quaternion::from_axis_angle(Vector3::Z, Angle::DEG90),
            Vector3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(
            transform.apply_to(Vector3::new(1.0, 0.0, 0.0)),
            Vector3::new(1.0, 2.0, 0.0)
        );
        assert_eq!(transform.translation(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(transform.axis(0), Vector3::new(0.0, 2.0, 0.0));

        let inverse: Matrix4 = transform.inverse().expect("Transform is invertible");
        assert_eq!(
            inverse.apply_to(Vector3::new(1.0, 2.0, 0.0)),
            Vector3::new(1.0, 0.0, 0.0)
        );

        let mut perspective: Matrix4 = Matrix4::identity();
        perspective[3][2] = 1.0;
        perspective[3][3] = 0.0;
        assert_eq!(
            perspective.project(Vector3::new(2.0, 4.0, 2.0)),
            Vector3::new(1.0, 2.0, 1.0)
        );
    }
}
