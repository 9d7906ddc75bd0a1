use std::path::Path;

use crate::core::{CentroidError, CentroidSearch, MaskImage, MaskView};
use crate::report::DetectionReport;
use crate::segment::{threshold_hsv, DetectConfig, RgbView, SegmentError, SegmentParams};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error(transparent)]
    Image(#[from] ::image::ImageError),

    #[error(transparent)]
    Segment(#[from] SegmentError),

    #[error(transparent)]
    Centroid(#[from] CentroidError),
}

/// Borrow an `image::RgbImage` as the segmenter's view type.
pub fn rgb_view(img: &::image::RgbImage) -> Result<RgbView<'_>, SegmentError> {
    RgbView::new(img.width() as usize, img.height() as usize, img.as_raw())
}

/// Borrow an already-thresholded `image::GrayImage` as a mask.
pub fn gray_mask_view(img: &::image::GrayImage) -> Result<MaskView<'_>, CentroidError> {
    MaskView::new(img.width() as usize, img.height() as usize, img.as_raw())
}

/// Threshold an RGB image into a mask.
pub fn mask_from_rgb(
    img: &::image::RgbImage,
    params: &SegmentParams,
) -> Result<MaskImage, DetectError> {
    let view = rgb_view(img)?;
    Ok(threshold_hsv(&view, params)?)
}

/// Run segmentation and the centroid search end-to-end.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, cfg), fields(width = img.width(), height = img.height()))
)]
pub fn detect_object(
    img: &::image::RgbImage,
    cfg: &DetectConfig,
) -> Result<DetectionReport, DetectError> {
    let mask = mask_from_rgb(img, &cfg.segment)?;
    let result = CentroidSearch::new(cfg.search).search(&mask)?;
    let report = DetectionReport::from_search(mask.width, mask.height, result, &cfg.search);
    if !report.detected {
        log::warn!(
            "no object in {}x{} frame (mass {})",
            report.width,
            report.height,
            report.mass
        );
    }
    Ok(report)
}

/// Decode an image file and run [`detect_object`] on it.
pub fn detect_object_path(
    path: impl AsRef<Path>,
    cfg: &DetectConfig,
) -> Result<DetectionReport, DetectError> {
    let path = path.as_ref();
    let img = ::image::open(path)?.to_rgb8();
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(detect_object(&img, cfg)?.with_image_path(path.to_string_lossy()))
}
