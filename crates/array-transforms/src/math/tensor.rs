use std::ops::Index;

use ndarray::ArrayView3;

use crate::math::matrix::ShapeError;

/// Row-major three-axis container, laid out as height x width x channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Array3<T> {
    data: Vec<T>,
    height: usize,
    width: usize,
    channels: usize,
}

impl<T> Array3<T> {
    pub fn from_shape_vec(
        shape: (usize, usize, usize),
        data: Vec<T>,
    ) -> Result<Self, ShapeError> {
        let (height, width, channels) = shape;
        if data.len() != height * width * channels {
            return Err(ShapeError::new(vec![height, width, channels], data.len()));
        }
        Ok(Self {
            data,
            height,
            width,
            channels,
        })
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn view(&self) -> ArrayView3<'_, T> {
        // height * width * channels == data.len() holds from construction.
        ArrayView3::from_shape(self.shape(), self.as_slice())
            .expect("Array3::view: buffer does not match shape")
    }
}

impl<T: Clone> Array3<T> {
    pub fn from_elem(shape: (usize, usize, usize), value: T) -> Self {
        let (height, width, channels) = shape;
        Array3 {
            data: vec![value; height * width * channels],
            height,
            width,
            channels,
        }
    }
}

impl<T> Index<(usize, usize, usize)> for Array3<T> {
    type Output = T;

    fn index(&self, index: (usize, usize, usize)) -> &Self::Output {
        let (row, col, channel) = index;
        &self.data[(row * self.width + col) * self.channels + channel]
    }
}
