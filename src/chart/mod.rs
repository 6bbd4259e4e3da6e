//! Rank/frequency chart rendering
//!
//! [`ChartRenderer`] is the narrow seam the pipeline talks to;
//! [`PlottersRenderer`] draws a log-log line chart of the top-ranked words
//! to a PNG file with `plotters`.

mod font;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ChartConfig;
use crate::ranking::RankedEntry;

/// Chart file name inside the output directory
pub const CHART_FILE_NAME: &str = "word_frequencies.png";

pub const CHART_TITLE: &str = "Word Frequency Distribution (Log-Log Scale)";
pub const X_AXIS_LABEL: &str = "Rank (log scale)";
pub const Y_AXIS_LABEL: &str = "Frequency (log scale)";
pub const SERIES_LABEL: &str = "Word Frequencies";

/// Errors that can occur while rendering a chart
#[derive(Debug, Error)]
pub enum ChartError {
    /// The directory the chart should be written to does not exist
    #[error("output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// The output path exists but is not a directory
    #[error("output path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// No font could be registered for chart text
    #[error("failed to load chart font: {0}")]
    Font(String),

    /// The image could not be written
    #[error("failed to write chart {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Drawing the chart in memory failed
    #[error("failed to draw chart {}: {reason}", path.display())]
    Draw { path: PathBuf, reason: String },
}

/// Output image size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl From<&ChartConfig> for Dimensions {
    fn from(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

/// Renders ranked entries to an image file
pub trait ChartRenderer {
    /// Render `ranked` to `path` at the given size
    fn render(
        &self,
        ranked: &[RankedEntry],
        path: &Path,
        dimensions: Dimensions,
    ) -> Result<(), ChartError>;
}

/// PNG renderer backed by the `plotters` bitmap backend
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    top_m: usize,
    font_path: Option<PathBuf>,
}

impl PlottersRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            top_m: config.top_m,
            font_path: config.font_path.clone(),
        }
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(
        &self,
        ranked: &[RankedEntry],
        path: &Path,
        dimensions: Dimensions,
    ) -> Result<(), ChartError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            return Err(ChartError::MissingDirectory(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(ChartError::NotADirectory(dir.to_path_buf()));
        }

        let points: Vec<(f64, f64)> = ranked
            .iter()
            .take(self.top_m)
            .filter(|entry| entry.count > 0)
            .map(|entry| (entry.rank as f64, entry.count as f64))
            .collect();

        font::ensure_registered(self.font_path.as_deref())?;

        let root =
            BitMapBackend::new(path, (dimensions.width, dimensions.height)).into_drawing_area();
        draw_chart(&root, &points).map_err(|e| ChartError::Draw {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        root.present().map_err(|e| ChartError::Io {
            path: path.to_path_buf(),
            source: io::Error::other(e.to_string()),
        })?;

        tracing::debug!(
            path = %path.display(),
            points = points.len(),
            width = dimensions.width,
            height = dimensions.height,
            "Rendered chart"
        );
        Ok(())
    }
}

/// Axis bounds covering `points`, padded so nothing sits on the frame
fn axis_ranges(points: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    if points.is_empty() {
        return ((1.0, 10.0), (1.0, 10.0));
    }

    let max_rank = points.iter().map(|&(x, _)| x).fold(1.0, f64::max);
    let (min_freq, max_freq) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

    (
        (1.0, (max_rank * 1.1).max(2.0)),
        ((min_freq * 0.8).max(0.5), max_freq * 1.25),
    )
}

/// Draw the log-log chart onto any drawing area
///
/// The chart font must already be registered.
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = axis_ranges(points);

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .caption(CHART_TITLE, (font::FONT_FAMILY, 28))
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .label_style((font::FONT_FAMILY, 14))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))?
        .label(SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart.draw_series(
        points
            .iter()
            .map(|&point| Circle::new(point, 3, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((font::FONT_FAMILY, 14))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ranked(counts: &[u64]) -> Vec<RankedEntry> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| RankedEntry {
                rank: i + 1,
                word: format!("w{}", i + 1),
                count,
            })
            .collect()
    }

    fn png_size(bytes: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    #[test]
    fn test_axis_ranges() {
        let ((x_min, x_max), (y_min, y_max)) = axis_ranges(&[(1.0, 100.0), (2.0, 50.0), (3.0, 10.0)]);
        assert_eq!(x_min, 1.0);
        assert!(x_max > 3.0);
        assert!(y_min > 0.0 && y_min < 10.0);
        assert!(y_max > 100.0);
    }

    #[test]
    fn test_axis_ranges_empty() {
        assert_eq!(axis_ranges(&[]), ((1.0, 10.0), (1.0, 10.0)));
    }

    #[test]
    fn test_render_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CHART_FILE_NAME);
        let config = ChartConfig {
            width: 320,
            height: 200,
            ..ChartConfig::default()
        };

        PlottersRenderer::new(&config)
            .render(&ranked(&[120, 60, 40, 30, 24, 20]), &path, Dimensions::from(&config))
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(png_size(&bytes), (320, 200));
    }

    #[test]
    fn test_render_empty_ranking() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CHART_FILE_NAME);
        let config = ChartConfig::default();

        PlottersRenderer::new(&config)
            .render(&[], &path, Dimensions { width: 100, height: 80 })
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(CHART_FILE_NAME);
        let config = ChartConfig::default();

        let err = PlottersRenderer::new(&config)
            .render(&ranked(&[3, 2, 1]), &path, Dimensions::from(&config))
            .unwrap_err();
        assert!(matches!(err, ChartError::MissingDirectory(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_into_regular_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("results.txt");
        fs::write(&file, "not a directory").unwrap();
        let config = ChartConfig::default();

        let err = PlottersRenderer::new(&config)
            .render(&ranked(&[3, 2, 1]), &file.join(CHART_FILE_NAME), Dimensions::from(&config))
            .unwrap_err();
        assert!(matches!(err, ChartError::NotADirectory(_)));
        assert!(err.to_string().starts_with("output path is not a directory"));
    }

    #[test]
    fn test_render_unwritable_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CHART_FILE_NAME);
        fs::create_dir(&path).unwrap();
        let config = ChartConfig::default();

        let err = PlottersRenderer::new(&config)
            .render(&ranked(&[3, 2, 1]), &path, Dimensions { width: 120, height: 90 })
            .unwrap_err();
        assert!(matches!(err, ChartError::Io { .. }));
        assert!(path.is_dir());
    }

    #[test]
    fn test_title_drawn_with_unusable_font_path() {
        font::ensure_registered(Some(Path::new("/nonexistent/chart-font.ttf"))).unwrap();

        let (width, height) = (400u32, 300u32);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            draw_chart(&root, &[(1.0, 100.0), (2.0, 50.0), (3.0, 33.0)]).unwrap();
            root.present().unwrap();
        }

        // caption band between the top margin and the plotting area
        let dark_in_caption = (22..44).any(|y| {
            (width / 4..width * 3 / 4).any(|x| {
                let i = ((y * width + x) * 3) as usize;
                buffer[i..i + 3].iter().all(|&c| c < 80)
            })
        });
        assert!(dark_in_caption, "chart title was not drawn");
    }
}
