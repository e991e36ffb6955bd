use crate::error::FigureError;

/// A dense n-dimensional array of `f64` stored in row-major order.
///
/// This is the coerced form of every numeric argument handed to a trace
/// constructor. A scalar has `ndim() == 0` and does not support iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl Array {
    /// Create an array from a shape and row-major data.
    pub fn from_shape(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, FigureError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(FigureError::InvalidShape {
                name: "data".to_owned(),
                expected: format!("{expected} elements for shape {shape:?}"),
                received: vec![data.len()],
            });
        }
        Ok(Self { shape, data })
    }

    /// A zero-dimensional array.
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Build a two dimensional array from rows. Rows must all have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, FigureError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(FigureError::InvalidShape {
                    name: "rows".to_owned(),
                    expected: format!("rows of equal length {cols}"),
                    received: vec![row.len()],
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            shape: vec![rows.len(), cols],
            data,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Length of the first axis, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        self.shape.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_iterable(&self) -> bool {
        self.ndim() > 0
    }

    /// The flat, row-major values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn into_values(self) -> Vec<f64> {
        self.data
    }

    /// Value at `(row, col)` of a two dimensional array.
    pub fn get2(&self, row: usize, col: usize) -> Option<f64> {
        match self.shape[..] {
            [rows, cols] if row < rows && col < cols => Some(self.data[row * cols + col]),
            _ => None,
        }
    }
}

impl From<f64> for Array {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl From<Vec<f64>> for Array {
    fn from(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }
}

impl From<&[f64]> for Array {
    fn from(data: &[f64]) -> Self {
        data.to_vec().into()
    }
}

impl<const N: usize> From<[f64; N]> for Array {
    fn from(data: [f64; N]) -> Self {
        data.to_vec().into()
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Array {
    fn from(rows: [[f64; C]; R]) -> Self {
        Self {
            shape: vec![R, C],
            data: rows.iter().flatten().copied().collect(),
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Array {
    type Error = FigureError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}
