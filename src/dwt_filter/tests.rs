use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::dwt_filter::common::error::{FilterError, Result};
use crate::dwt_filter::config::FilterConfig;
use crate::dwt_filter::convert::{Narrowing, narrow, widen};
use crate::dwt_filter::filter::DwtFilter;
use crate::dwt_filter::frame_io::{FrameReader, FrameWriter, GrayFrame};
use crate::dwt_filter::kernel::{WaveletDescriptor, WaveletFamily, resolve};
use crate::dwt_filter::mask::BandMode;
use crate::dwt_filter::pipeline::FramePipeline;
use crate::dwt_filter::reinsert::DetailWindow;
use crate::dwt_filter::transform::{TransformEngine, TransformLayout};

/// Frame side is `1 << data[0]`, filled with `data[1]`.
struct MockReader {
    should_fail: bool,
}

impl FrameReader for MockReader {
    fn read_frame(&self, data: &[u8]) -> Result<GrayFrame> {
        if self.should_fail {
            return Err(FilterError::DecodeError("Mock decode error".to_string()));
        }
        let side = 1usize << data[0];
        Ok(GrayFrame::filled(side, side, data[1]))
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<GrayFrame>>>,
}

impl FrameWriter for MockWriter {
    fn write_frame(&self, frame: &GrayFrame, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(FilterError::EncodeError("Mock encode error".to_string()));
        }
        self.written.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

fn mock_pipeline(
    reader_fails: bool,
    writer_fails: bool,
    config: FilterConfig,
) -> (FramePipeline<MockReader, MockWriter>, Arc<Mutex<Vec<GrayFrame>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let mut filter = DwtFilter::new().unwrap();
    filter.set_filter_config(config).unwrap();
    let pipeline = FramePipeline::with_custom(
        MockReader {
            should_fail: reader_fails,
        },
        MockWriter {
            should_fail: writer_fails,
            written: written.clone(),
        },
        filter,
    );
    (pipeline, written)
}

fn textured(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .map(|i| {
            let (r, c) = (i / width, i % width);
            ((r * 37 + c * 11 + (r * c) % 23) % 256) as u8
        })
        .collect()
}

/// Repeats the 2x2 block `[200 0; 100 0]`, which gives every first-level
/// cell a positive horizontal (150) and diagonal (50) Haar detail.
fn striped(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .map(|i| {
            let (r, c) = (i / width, i % width);
            match (r % 2, c % 2) {
                (0, 0) => 200,
                (1, 0) => 100,
                _ => 0,
            }
        })
        .collect()
}

/// Haar forward transform of `pixels`, narrowed the same way the filter
/// narrows coefficients.
fn narrowed_haar_coefficients(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    let kernel = resolve(WaveletDescriptor::haar()).unwrap();
    let mut engine = TransformEngine::new(width, height, TransformLayout::NonStandard).unwrap();
    let mut coeffs = vec![0.0; width * height];
    widen(pixels, &mut coeffs);
    engine.forward(&mut coeffs, &kernel).unwrap();
    let mut narrowed = vec![0u8; width * height];
    narrow(&coeffs, &mut narrowed, Narrowing::Truncate);
    narrowed
}

fn windowed_lowpass(window: Option<DetailWindow>, inverse: bool) -> FilterConfig {
    FilterConfig::builder()
        .band(BandMode::LowPass)
        .cutoff(2)
        .inverse(inverse)
        .detail_window(window)
        .draw_overlay(false)
        .build()
}

fn window_border(w: usize, window: &DetailWindow) -> Vec<usize> {
    let mut border = Vec::new();
    for x in window.x..window.x + window.width {
        border.push(window.y * w + x);
        border.push((window.y + window.width) * w + x);
    }
    for y in window.y..window.y + window.height {
        border.push(y * w + window.x);
        border.push(y * w + window.x + window.width);
    }
    border
}

#[test]
fn test_uniform_frame_with_window_overlay() {
    let (w, h) = (256, 256);
    let window = DetailWindow::new(100, 100, 20, 20);
    let mut filter = DwtFilter::new().unwrap();
    filter.configure(w, h).unwrap();
    filter
        .set_filter_config(
            FilterConfig::builder()
                .band(BandMode::LowPass)
                .cutoff(32)
                .inverse(true)
                .detail_window(Some(window))
                .build(),
        )
        .unwrap();

    let mut pixels = vec![128u8; w * h];
    filter.process(&mut pixels).unwrap();

    let border = window_border(w, &window);
    for &i in &border {
        assert_eq!(pixels[i], 255, "border pixel {}", i);
    }
    for (i, &p) in pixels.iter().enumerate() {
        if !border.contains(&i) {
            assert!((p as i32 - 128).abs() <= 1, "pixel {} = {}", i, p);
        }
    }
}

#[test]
fn test_overlay_can_be_disabled() {
    let (w, h) = (64, 64);
    let mut filter = DwtFilter::new().unwrap();
    filter.configure(w, h).unwrap();
    filter
        .set_filter_config(
            FilterConfig::builder()
                .band(BandMode::LowPass)
                .cutoff(4)
                .detail_window(Some(DetailWindow::new(8, 8, 16, 16)))
                .draw_overlay(false)
                .narrowing(Narrowing::Round)
                .build(),
        )
        .unwrap();

    let mut pixels = vec![90u8; w * h];
    filter.process(&mut pixels).unwrap();
    assert!(pixels.iter().all(|&p| p == 90));
}

#[test]
fn test_zero_cutoff_highpass_round_trips_every_kernel() {
    let (w, h) = (64, 32);
    let original = textured(w, h);
    let descriptors = [
        WaveletDescriptor::haar(),
        WaveletDescriptor::new(WaveletFamily::Daubechies, 4, false),
        WaveletDescriptor::new(WaveletFamily::Daubechies, 8, true),
        WaveletDescriptor::new(WaveletFamily::BSpline, 202, false),
        WaveletDescriptor::new(WaveletFamily::BSpline, 305, true),
    ];

    for layout in [TransformLayout::NonStandard, TransformLayout::Standard] {
        for descriptor in descriptors {
            let mut filter = DwtFilter::with_kernel(descriptor).unwrap();
            filter.configure(w, h).unwrap();
            filter
                .set_filter_config(
                    FilterConfig::builder()
                        .band(BandMode::HighPass)
                        .cutoff(0)
                        .layout(layout)
                        .build(),
                )
                .unwrap();

            let mut pixels = original.clone();
            filter.process(&mut pixels).unwrap();
            for (i, (&a, &b)) in pixels.iter().zip(&original).enumerate() {
                assert!(
                    (a as i32 - b as i32).abs() <= 1,
                    "{} {:?} pixel {}: {} vs {}",
                    descriptor,
                    layout,
                    i,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_round_narrowing_is_exact_on_identity() {
    let (w, h) = (32, 32);
    let original = textured(w, h);
    let mut filter =
        DwtFilter::with_kernel(WaveletDescriptor::new(WaveletFamily::Daubechies, 6, false)).unwrap();
    filter.configure(w, h).unwrap();
    filter
        .set_filter_config(FilterConfig::builder().narrowing(Narrowing::Round).build())
        .unwrap();

    let mut pixels = original.clone();
    filter.process(&mut pixels).unwrap();
    assert_eq!(pixels, original);
}

#[test]
fn test_failed_kernel_change_keeps_previous_kernel() {
    let mut filter = DwtFilter::new().unwrap();
    let result = filter.set_kernel(WaveletDescriptor::new(WaveletFamily::Daubechies, 3, false));
    assert!(matches!(
        result,
        Err(FilterError::InvalidWavelet {
            family: WaveletFamily::Daubechies,
            order: 3
        })
    ));
    assert_eq!(filter.kernel().descriptor(), WaveletDescriptor::haar());

    filter
        .set_kernel(WaveletDescriptor::new(WaveletFamily::Daubechies, 4, false))
        .unwrap();
    assert_eq!(filter.kernel().filter_length(), 4);
}

#[test]
fn test_oversized_cutoff_matches_min_dimension() {
    let (w, h) = (32, 16);
    let original = textured(w, h);
    let mut outputs = Vec::new();

    for cutoff in [16, 10_000] {
        let mut filter = DwtFilter::new().unwrap();
        filter.configure(w, h).unwrap();
        filter
            .set_filter_config(
                FilterConfig::builder()
                    .band(BandMode::LowPass)
                    .cutoff(cutoff)
                    .build(),
            )
            .unwrap();
        assert_eq!(filter.config().cutoff, 16);

        let mut pixels = original.clone();
        filter.process(&mut pixels).unwrap();
        outputs.push(pixels);
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_process_requires_matching_geometry() {
    let mut filter = DwtFilter::new().unwrap();
    let mut pixels = vec![0u8; 100];
    assert!(matches!(
        filter.process(&mut pixels),
        Err(FilterError::GeometryMismatch {
            expected: 0,
            actual: 100
        })
    ));

    filter.configure(16, 16).unwrap();
    assert!(matches!(
        filter.process(&mut pixels),
        Err(FilterError::GeometryMismatch {
            expected: 256,
            actual: 100
        })
    ));
}

#[test]
fn test_configure_rejects_invalid_dimensions() {
    let mut filter = DwtFilter::new().unwrap();
    assert!(matches!(
        filter.configure(48, 32),
        Err(FilterError::InvalidDimensions(48, 32))
    ));
    assert_eq!(filter.geometry(), None);

    filter.configure(32, 32).unwrap();
    assert!(filter.configure(0, 32).is_err());
    assert_eq!(filter.geometry(), Some((32, 32)));
}

#[test]
fn test_short_frame_reports_transform_length() {
    let mut filter =
        DwtFilter::with_kernel(WaveletDescriptor::new(WaveletFamily::Daubechies, 20, false)).unwrap();
    filter.configure(16, 16).unwrap();
    let mut pixels = vec![0u8; 256];
    assert!(matches!(
        filter.process(&mut pixels),
        Err(FilterError::TransformLength {
            length: 16,
            filter_length: 20
        })
    ));
}

#[test]
fn test_window_outside_frame_is_rejected() {
    let mut filter = DwtFilter::new().unwrap();
    filter.configure(32, 32).unwrap();
    let previous = filter.config().clone();

    let result = filter.set_filter_config(
        FilterConfig::builder()
            .detail_window(Some(DetailWindow::new(30, 0, 8, 8)))
            .build(),
    );
    assert!(matches!(result, Err(FilterError::InvalidWindow(_, 32, 32))));
    assert_eq!(filter.config(), &previous);
}

#[test]
fn test_overflowing_window_is_rejected() {
    let mut filter = DwtFilter::new().unwrap();
    filter.configure(32, 32).unwrap();
    let previous = filter.config().clone();

    for window in [
        DetailWindow::new(usize::MAX, 0, 2, 2),
        DetailWindow::new(0, usize::MAX, 2, 2),
        DetailWindow::new(0, 0, usize::MAX, 2),
    ] {
        let result =
            filter.set_filter_config(FilterConfig::builder().detail_window(Some(window)).build());
        assert!(matches!(result, Err(FilterError::InvalidWindow(_, 32, 32))));
        assert_eq!(filter.config(), &previous);
    }

    let mut pixels = vec![40u8; 32 * 32];
    filter.process(&mut pixels).unwrap();
}

#[test]
fn test_reinserted_cells_hold_unmasked_coefficients() {
    let (w, h) = (32, 32);
    let pixels = striped(w, h);
    let expected = narrowed_haar_coefficients(&pixels, w, h);

    let mut filter = DwtFilter::new().unwrap();
    filter.configure(w, h).unwrap();
    filter
        .set_filter_config(windowed_lowpass(Some(DetailWindow::new(8, 8, 8, 8)), false))
        .unwrap();
    let mut output = pixels.clone();
    filter.process(&mut output).unwrap();

    // first scale: 4x4 cells at (4, 4), detail quadrants offset by 16
    let in_cells = |r: usize, c: usize, r0: usize| (r0..r0 + 4).contains(&r) && (20..24).contains(&c);
    for r in 0..h {
        for c in 0..w {
            let i = r * w + c;
            let coarse = r < 2 && c < 2;
            let horizontal = in_cells(r, c, 4);
            let diagonal = in_cells(r, c, 20);
            if horizontal || diagonal {
                assert!(expected[i] > 0, "cell ({}, {}) carries no detail", r, c);
                assert_eq!(output[i], expected[i], "cell ({}, {})", r, c);
            } else if coarse {
                assert_eq!(output[i], expected[i], "coarse ({}, {})", r, c);
            } else {
                assert_eq!(output[i], 0, "masked ({}, {})", r, c);
            }
        }
    }
}

#[test]
fn test_reinserted_detail_changes_only_the_window() {
    let (w, h) = (32, 32);
    let window = DetailWindow::new(8, 8, 8, 8);
    let pixels = striped(w, h);

    let mut outputs = Vec::new();
    for detail_window in [None, Some(window)] {
        let mut filter = DwtFilter::new().unwrap();
        filter.configure(w, h).unwrap();
        filter
            .set_filter_config(windowed_lowpass(detail_window, true))
            .unwrap();
        let mut output = pixels.clone();
        filter.process(&mut output).unwrap();
        outputs.push(output);
    }
    let (plain, windowed) = (&outputs[0], &outputs[1]);

    let inside = |r: usize, c: usize| (8..16).contains(&r) && (8..16).contains(&c);
    let mut changed = 0;
    for r in 0..h {
        for c in 0..w {
            let i = r * w + c;
            if inside(r, c) {
                if windowed[i] != plain[i] {
                    changed += 1;
                }
            } else {
                assert_eq!(windowed[i], plain[i], "outside pixel ({}, {})", r, c);
            }
        }
    }
    assert!(changed > 0);
}

#[test]
fn test_window_follows_geometry_changes() {
    let window = DetailWindow::new(40, 40, 8, 8);
    let mut filter = DwtFilter::new().unwrap();
    filter.configure(64, 64).unwrap();
    filter
        .set_filter_config(FilterConfig::builder().detail_window(Some(window)).build())
        .unwrap();
    assert_eq!(filter.config().detail_window, Some(window));

    filter.configure(32, 32).unwrap();
    assert_eq!(filter.config().detail_window, None);

    filter.configure(64, 64).unwrap();
    assert_eq!(filter.config().detail_window, Some(window));
}

#[test]
fn test_disabled_inverse_emits_coefficients() {
    let (w, h) = (8, 8);
    let mut filter = DwtFilter::new().unwrap();
    filter.configure(w, h).unwrap();
    filter
        .set_filter_config(
            FilterConfig::builder()
                .band(BandMode::LowPass)
                .cutoff(8)
                .inverse(false)
                .build(),
        )
        .unwrap();

    let mut pixels = vec![2u8; w * h];
    filter.process(&mut pixels).unwrap();
    // Haar approximation of a constant 8x8 frame is 8 * value
    assert!((15..=16).contains(&pixels[0]), "approximation {}", pixels[0]);
    assert!(pixels[1..].iter().all(|&p| p == 0));
}

#[test]
fn test_process_records_stage_timings() {
    let mut filter = DwtFilter::new().unwrap();
    filter.configure(16, 16).unwrap();
    filter
        .set_filter_config(
            FilterConfig::builder()
                .detail_window(Some(DetailWindow::new(2, 2, 4, 4)))
                .build(),
        )
        .unwrap();
    let mut pixels = vec![10u8; 256];
    let timings = filter.process_with_timings(&mut pixels).unwrap();
    for stage in ["widen", "forward", "mask", "reinsert", "inverse", "narrow", "overlay"] {
        assert!(timings.get_step(stage).is_some(), "missing {}", stage);
    }
}

#[test]
fn test_successful_conversion() {
    let (mut pipeline, written) = mock_pipeline(false, false, FilterConfig::default());
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&[4, 50], &mut output);

    assert!(result.is_ok());
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!((written[0].width, written[0].height), (16, 16));
    assert!(written[0].data.iter().all(|&p| (p as i32 - 50).abs() <= 1));
}

#[test]
fn test_reader_failure() {
    let (mut pipeline, written) = mock_pipeline(true, false, FilterConfig::default());
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&[4, 50], &mut output);

    assert!(matches!(result.unwrap_err(), FilterError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let (mut pipeline, _written) = mock_pipeline(false, true, FilterConfig::default());
    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&[4, 50], &mut output);

    assert!(matches!(result.unwrap_err(), FilterError::EncodeError(_)));
}

#[test]
fn test_pipeline_reconfigures_on_size_change() {
    let (mut pipeline, written) = mock_pipeline(false, false, FilterConfig::default());
    let mut output = Cursor::new(Vec::new());

    pipeline.convert(&[3, 20], &mut output).unwrap();
    assert_eq!(pipeline.filter().geometry(), Some((8, 8)));
    pipeline.convert(&[5, 20], &mut output).unwrap();
    assert_eq!(pipeline.filter().geometry(), Some((32, 32)));

    let written = written.lock().unwrap();
    assert_eq!(written[1].data.len(), 32 * 32);
}

#[test]
fn test_missing_input_file() {
    let mut pipeline = FramePipeline::new(DwtFilter::new().unwrap());
    let result = pipeline.convert_file("/nonexistent/input.tiff", "/tmp/never-written.tiff");
    assert!(matches!(result.unwrap_err(), FilterError::InputReadError(_)));
}
