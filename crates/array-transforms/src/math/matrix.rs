use std::error::Error;
use std::fmt;
use std::ops::Index;

use ndarray::ArrayView2;

/// Row-major two-axis container.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::new(vec![rows, cols], data.len()));
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow the matrix as an `ndarray` view with the same shape.
    pub fn view(&self) -> ArrayView2<'_, T> {
        // rows * cols == data.len() holds from construction.
        ArrayView2::from_shape(self.shape(), self.as_slice())
            .expect("Array2::view: buffer does not match shape")
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T: Clone> From<ndarray::Array2<T>> for Array2<T> {
    fn from(value: ndarray::Array2<T>) -> Self {
        let (rows, cols) = value.dim();
        Array2 {
            data: value.iter().cloned().collect(),
            rows,
            cols,
        }
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index.0 * self.cols + index.1]
    }
}

/// A buffer whose length does not match the requested shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    shape: Vec<usize>,
    len: usize,
}

impl ShapeError {
    pub(crate) fn new(shape: Vec<usize>, len: usize) -> Self {
        Self { shape, len }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn buffer_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape {:?} for buffer of length {}",
            self.shape, self.len
        )
    }
}

impl Error for ShapeError {}
