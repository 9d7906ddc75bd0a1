use crate::error::CentroidError;

/// Read access to a 2D grid of non-negative samples.
///
/// A sample is foreground iff it is strictly greater than zero. Callers only
/// ever ask for `0 <= x < width()` and `0 <= y < height()`.
pub trait Mask {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn sample(&self, x: usize, y: usize) -> u32;

    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.sample(x, y) > 0
    }

    /// Check that the mask can be searched at all.
    fn validate(&self) -> Result<(), CentroidError> {
        if self.width() == 0 || self.height() == 0 {
            return Err(CentroidError::InvalidMask {
                width: self.width(),
                height: self.height(),
                len: self.width() * self.height(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MaskView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

impl<'a> MaskView<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, CentroidError> {
        let view = Self {
            width,
            height,
            data,
        };
        view.validate()?;
        Ok(view)
    }
}

impl Mask for MaskView<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn sample(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.width + x] as u32
    }

    fn validate(&self) -> Result<(), CentroidError> {
        let expected = self.width.checked_mul(self.height);
        if self.width == 0 || self.height == 0 || expected != Some(self.data.len()) {
            return Err(CentroidError::InvalidMask {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}

/// Owned row-major mask, as produced by a segmenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl MaskImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, CentroidError> {
        MaskView::new(width, height, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Mask with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self, CentroidError> {
        Self::new(width, height, vec![value; width.saturating_mul(height)])
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, CentroidError>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    pub fn view(&self) -> MaskView<'_> {
        MaskView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0).count()
    }
}

impl Mask for MaskImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn sample(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.width + x] as u32
    }

    fn validate(&self) -> Result<(), CentroidError> {
        self.view().validate()
    }
}
