// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PNG rendering of chart models.
//!
//! Text needs a TrueType font. Without one the charts are drawn with
//! geometry only: axes, grid, series and legend swatches.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_text_mut, text_size,
};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::chart::{BarChart, Heatmap, LineChart, Series};
use crate::error::ReportError;

const LINE_CHART_SIZE: (u32, u32) = (1000, 600);
const BAR_CHART_SIZE: (u32, u32) = (1200, 600);
const HEATMAP_SIZE: (u32, u32) = (800, 500);

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const MISSING_CELL: Rgb<u8> = Rgb([210, 210, 210]);
const HEAT_LOW: [f32; 3] = [247.0, 251.0, 255.0];
const HEAT_HIGH: [f32; 3] = [8.0, 48.0, 107.0];

/// Series colours, cycled.
pub const PALETTE: [Rgb<u8>; 6] = [
    Rgb([76, 114, 176]),
    Rgb([221, 132, 82]),
    Rgb([85, 168, 104]),
    Rgb([196, 78, 82]),
    Rgb([129, 114, 179]),
    Rgb([147, 120, 96]),
];

const TITLE_SIZE: f32 = 22.0;
const LABEL_SIZE: f32 = 16.0;
const TICK_SIZE: f32 = 13.0;
const Y_TICKS: u32 = 5;
const MAX_X_LABELS: usize = 12;
const MARKER_RADIUS: i32 = 4;
const SWATCH: u32 = 12;

/// Fonts tried when none is configured.
pub const SYSTEM_FONT_PATHS: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[allow(clippy::cast_precision_loss)]
const fn len_f32(n: usize) -> f32 {
    n as f32
}

#[allow(clippy::cast_precision_loss)]
const fn dim_f32(n: u32) -> f32 {
    n as f32
}

#[allow(clippy::cast_possible_truncation)]
const fn narrow(v: f64) -> f32 {
    v as f32
}

#[allow(clippy::cast_possible_truncation)]
fn px(v: f32) -> i32 {
    v.round() as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn px_len(v: f32) -> u32 {
    v.round().max(0.0) as u32
}

/// Upper bound of the value axis: 10% headroom over the largest value.
fn axis_max<'a>(series: impl IntoIterator<Item = &'a Series>) -> f64 {
    let max: f64 = series
        .into_iter()
        .flat_map(|s| s.values.iter().flatten())
        .fold(0.0_f64, |acc, &v| acc.max(v));
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

/// Reads the first usable TrueType font.
///
/// `configured` is tried first, then [`SYSTEM_FONT_PATHS`].
#[must_use]
pub fn load_font(configured: Option<&Path>) -> Option<FontVec> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                debug!(path = %path.display(), "Loaded chart font");
                return Some(font);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Ignoring unusable font"),
        }
    }

    warn!("No TrueType font found; charts will be rendered without labels");
    None
}

#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    y_max: f64,
}

impl PlotArea {
    fn new(size: (u32, u32), margins: [f32; 4], y_max: f64) -> Self {
        let [left, top, right, bottom] = margins;
        Self {
            left,
            top,
            width: (dim_f32(size.0) - left - right).max(1.0),
            height: (dim_f32(size.1) - top - bottom).max(1.0),
            y_max,
        }
    }

    const fn right(&self) -> f32 {
        self.left + self.width
    }

    const fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn slot_width(&self, slots: usize) -> f32 {
        self.width / len_f32(slots.max(1))
    }

    fn slot_center(&self, index: usize, slots: usize) -> f32 {
        self.slot_width(slots).mul_add(len_f32(index) + 0.5, self.left)
    }

    fn y_for(&self, value: f64) -> f32 {
        let ratio: f32 = narrow((value / self.y_max).clamp(0.0, 1.0));
        ratio.mul_add(-self.height, self.bottom())
    }
}

/// Draws chart models onto PNG canvases.
pub struct ChartRenderer {
    font: Option<FontVec>,
}

impl std::fmt::Debug for ChartRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRenderer")
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

impl ChartRenderer {
    #[must_use]
    pub const fn new(font: Option<FontVec>) -> Self {
        Self { font }
    }

    /// A renderer using [`load_font`].
    #[must_use]
    pub fn discover(configured: Option<&Path>) -> Self {
        Self::new(load_font(configured))
    }

    #[must_use]
    pub const fn has_font(&self) -> bool {
        self.font.is_some()
    }

    fn text(&self, img: &mut RgbImage, color: Rgb<u8>, x: f32, y: f32, size: f32, text: &str) {
        if let Some(font) = &self.font {
            draw_text_mut(img, color, px(x), px(y), PxScale::from(size), font, text);
        }
    }

    fn text_centered(
        &self,
        img: &mut RgbImage,
        color: Rgb<u8>,
        center: (f32, f32),
        size: f32,
        text: &str,
    ) {
        if let Some(font) = &self.font {
            let (w, h) = text_size(PxScale::from(size), font, text);
            let x: f32 = center.0 - dim_f32(w) / 2.0;
            let y: f32 = center.1 - dim_f32(h) / 2.0;
            draw_text_mut(img, color, px(x), px(y), PxScale::from(size), font, text);
        }
    }

    fn text_right_aligned(
        &self,
        img: &mut RgbImage,
        color: Rgb<u8>,
        right: f32,
        middle: f32,
        size: f32,
        text: &str,
    ) {
        if let Some(font) = &self.font {
            let (w, h) = text_size(PxScale::from(size), font, text);
            let x: f32 = right - dim_f32(w);
            let y: f32 = middle - dim_f32(h) / 2.0;
            draw_text_mut(img, color, px(x), px(y), PxScale::from(size), font, text);
        }
    }

    /// Title, axis titles, axes and horizontal grid with value ticks.
    fn draw_frame(
        &self,
        img: &mut RgbImage,
        plot: &PlotArea,
        title: &str,
        x_label: &str,
        y_label: &str,
    ) {
        let (width, height) = img.dimensions();

        for tick in 0..=Y_TICKS {
            let value: f64 = plot.y_max * f64::from(tick) / f64::from(Y_TICKS);
            let y: f32 = plot.y_for(value);
            if tick > 0 {
                draw_line_segment_mut(img, (plot.left, y), (plot.right(), y), GRID);
            }
            draw_line_segment_mut(img, (plot.left - 5.0, y), (plot.left, y), INK);
            let label: String = format!("{value:.0}");
            self.text_right_aligned(img, INK, plot.left - 8.0, y, TICK_SIZE, &label);
        }

        draw_line_segment_mut(img, (plot.left, plot.top), (plot.left, plot.bottom()), INK);
        draw_line_segment_mut(
            img,
            (plot.left, plot.bottom()),
            (plot.right(), plot.bottom()),
            INK,
        );

        self.text_centered(img, INK, (dim_f32(width) / 2.0, 25.0), TITLE_SIZE, title);
        self.text_centered(
            img,
            INK,
            (plot.left + plot.width / 2.0, dim_f32(height) - 20.0),
            LABEL_SIZE,
            x_label,
        );
        self.text(img, INK, 10.0, plot.top - 28.0, LABEL_SIZE, y_label);
    }

    /// Category labels under the x axis, thinned out when there are many.
    fn draw_category_labels(&self, img: &mut RgbImage, plot: &PlotArea, labels: &[String]) {
        let step: usize = labels.len().div_ceil(MAX_X_LABELS).max(1);
        for (i, label) in labels.iter().enumerate() {
            let x: f32 = plot.slot_center(i, labels.len());
            draw_line_segment_mut(img, (x, plot.bottom()), (x, plot.bottom() + 5.0), INK);
            if i % step == 0 {
                self.text_centered(img, INK, (x, plot.bottom() + 16.0), TICK_SIZE, label);
            }
        }
    }

    fn draw_legend(&self, img: &mut RgbImage, plot: &PlotArea, title: &str, series: &[Series]) {
        let x: f32 = plot.right() + 20.0;
        self.text(img, INK, x, plot.top, LABEL_SIZE, title);

        for (i, s) in series.iter().enumerate() {
            let y: f32 = 22.0_f32.mul_add(len_f32(i), plot.top + 28.0);
            draw_filled_rect_mut(
                img,
                Rect::at(px(x), px(y)).of_size(SWATCH, SWATCH),
                PALETTE[i % PALETTE.len()],
            );
            self.text(img, INK, x + 18.0, y - 2.0, TICK_SIZE, &s.name);
        }
    }

    /// Draws a line chart with a marker at every present value. Missing
    /// values break the line.
    #[must_use]
    pub fn draw_line_chart(&self, chart: &LineChart) -> RgbImage {
        let mut img = RgbImage::from_pixel(LINE_CHART_SIZE.0, LINE_CHART_SIZE.1, BACKGROUND);
        let plot = PlotArea::new(
            LINE_CHART_SIZE,
            [90.0, 60.0, 170.0, 70.0],
            axis_max(&chart.series),
        );

        self.draw_frame(&mut img, &plot, &chart.title, &chart.x_label, &chart.y_label);
        self.draw_category_labels(&mut img, &plot, &chart.categories);

        let slots: usize = chart.categories.len();
        for (s, series) in chart.series.iter().enumerate() {
            let color: Rgb<u8> = PALETTE[s % PALETTE.len()];
            let mut previous: Option<(f32, f32)> = None;

            for (i, value) in series.values.iter().enumerate() {
                let Some(value) = value else {
                    previous = None;
                    continue;
                };
                let point: (f32, f32) = (plot.slot_center(i, slots), plot.y_for(*value));
                if let Some(prev) = previous {
                    for offset in [-1.0, 0.0, 1.0] {
                        draw_line_segment_mut(
                            &mut img,
                            (prev.0, prev.1 + offset),
                            (point.0, point.1 + offset),
                            color,
                        );
                    }
                }
                draw_filled_circle_mut(
                    &mut img,
                    (px(point.0), px(point.1)),
                    MARKER_RADIUS,
                    color,
                );
                previous = Some(point);
            }
        }

        self.draw_legend(&mut img, &plot, &chart.legend_title, &chart.series);
        img
    }

    /// Draws grouped bars: one group per category, one bar per series.
    #[must_use]
    pub fn draw_bar_chart(&self, chart: &BarChart) -> RgbImage {
        let mut img = RgbImage::from_pixel(BAR_CHART_SIZE.0, BAR_CHART_SIZE.1, BACKGROUND);
        let plot = PlotArea::new(
            BAR_CHART_SIZE,
            [90.0, 60.0, 170.0, 70.0],
            axis_max(&chart.series),
        );

        self.draw_frame(&mut img, &plot, &chart.title, &chart.x_label, &chart.y_label);
        self.draw_category_labels(&mut img, &plot, &chart.groups);

        let groups: usize = chart.groups.len();
        let slot: f32 = plot.slot_width(groups);
        let bar_width: f32 = slot * 0.8 / len_f32(chart.series.len().max(1));

        for (s, series) in chart.series.iter().enumerate() {
            let color: Rgb<u8> = PALETTE[s % PALETTE.len()];
            for (g, value) in series.values.iter().enumerate() {
                let Some(value) = value else { continue };
                let x: f32 = bar_width.mul_add(
                    len_f32(s),
                    slot.mul_add(len_f32(g), plot.left) + slot * 0.1,
                );
                let top: f32 = plot.y_for(*value);
                let height: u32 = px_len(plot.bottom() - top);
                let width: u32 = px_len(bar_width - 1.0).max(1);
                if height == 0 {
                    continue;
                }
                draw_filled_rect_mut(
                    &mut img,
                    Rect::at(px(x), px(top)).of_size(width, height),
                    color,
                );
            }
        }

        self.draw_legend(&mut img, &plot, &chart.legend_title, &chart.series);
        img
    }

    /// Draws a heatmap with each cell annotated to two decimals.
    #[must_use]
    pub fn draw_heatmap(&self, chart: &Heatmap) -> RgbImage {
        let mut img = RgbImage::from_pixel(HEATMAP_SIZE.0, HEATMAP_SIZE.1, BACKGROUND);
        let plot = PlotArea::new(HEATMAP_SIZE, [110.0, 60.0, 90.0, 70.0], 1.0);
        let (width, height) = img.dimensions();

        self.text_centered(
            &mut img,
            INK,
            (dim_f32(width) / 2.0, 25.0),
            TITLE_SIZE,
            &chart.title,
        );
        self.text_centered(
            &mut img,
            INK,
            (plot.left + plot.width / 2.0, dim_f32(height) - 20.0),
            LABEL_SIZE,
            &chart.x_label,
        );
        self.text(&mut img, INK, 10.0, plot.top - 28.0, LABEL_SIZE, &chart.y_label);

        let (low, high) = chart.value_range().unwrap_or((0.0, 1.0));
        let span: f64 = high - low;
        let cell_w: f32 = plot.width / len_f32(chart.columns.len().max(1));
        let cell_h: f32 = plot.height / len_f32(chart.rows.len().max(1));

        for (r, row_label) in chart.rows.iter().enumerate() {
            let y: f32 = cell_h.mul_add(len_f32(r), plot.top);
            self.text_right_aligned(
                &mut img,
                INK,
                plot.left - 8.0,
                y + cell_h / 2.0,
                TICK_SIZE,
                row_label,
            );

            for c in 0..chart.columns.len() {
                let x: f32 = cell_w.mul_add(len_f32(c), plot.left);
                let value: Option<f64> = chart
                    .cells
                    .get(r)
                    .and_then(|row| row.get(c))
                    .copied()
                    .flatten();
                let intensity: f32 = value.map_or(0.0, |v| {
                    if span > 0.0 { narrow((v - low) / span) } else { 0.5 }
                });
                let fill: Rgb<u8> = value.map_or(MISSING_CELL, |_| heat_color(intensity));
                let rect = Rect::at(px(x), px(y))
                    .of_size(px_len(cell_w).max(1), px_len(cell_h).max(1));
                draw_filled_rect_mut(&mut img, rect, fill);
                draw_hollow_rect_mut(&mut img, rect, BACKGROUND);

                if let Some(v) = value {
                    let ink: Rgb<u8> = if intensity > 0.5 { BACKGROUND } else { INK };
                    self.text_centered(
                        &mut img,
                        ink,
                        (x + cell_w / 2.0, y + cell_h / 2.0),
                        LABEL_SIZE,
                        &format!("{v:.2}"),
                    );
                }
            }
        }

        for (c, column_label) in chart.columns.iter().enumerate() {
            let x: f32 = cell_w.mul_add(len_f32(c) + 0.5, plot.left);
            self.text_centered(
                &mut img,
                INK,
                (x, plot.bottom() + 16.0),
                TICK_SIZE,
                column_label,
            );
        }

        self.draw_color_bar(&mut img, &plot, low, high);
        img
    }

    fn draw_color_bar(&self, img: &mut RgbImage, plot: &PlotArea, low: f64, high: f64) {
        let x: f32 = plot.right() + 20.0;
        let steps: u32 = px_len(plot.height).max(1);
        for step in 0..steps {
            let intensity: f32 = 1.0 - dim_f32(step) / dim_f32(steps);
            let y: f32 = plot.top + dim_f32(step);
            draw_line_segment_mut(img, (x, y), (x + 16.0, y), heat_color(intensity));
        }
        self.text(img, INK, x + 22.0, plot.top - 6.0, TICK_SIZE, &format!("{high:.0}"));
        self.text(img, INK, x + 22.0, plot.bottom() - 10.0, TICK_SIZE, &format!("{low:.0}"));
    }

    /// Draws and saves a line chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG cannot be written.
    pub fn render_line_chart(&self, chart: &LineChart, path: &Path) -> Result<(), ReportError> {
        save(&self.draw_line_chart(chart), path)
    }

    /// Draws and saves a grouped bar chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG cannot be written.
    pub fn render_bar_chart(&self, chart: &BarChart, path: &Path) -> Result<(), ReportError> {
        save(&self.draw_bar_chart(chart), path)
    }

    /// Draws and saves a heatmap.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG cannot be written.
    pub fn render_heatmap(&self, chart: &Heatmap, path: &Path) -> Result<(), ReportError> {
        save(&self.draw_heatmap(chart), path)
    }
}

/// Blue sequential scale; `intensity` 0 is the lightest shade.
#[must_use]
pub fn heat_color(intensity: f32) -> Rgb<u8> {
    let t: f32 = intensity.clamp(0.0, 1.0);
    let channel = |i: usize| -> u8 {
        let v: f32 = (HEAT_HIGH[i] - HEAT_LOW[i]).mul_add(t, HEAT_LOW[i]);
        u8::try_from(px(v).clamp(0, 255)).unwrap_or(u8::MAX)
    };
    Rgb([channel(0), channel(1), channel(2)])
}

fn save(img: &RgbImage, path: &Path) -> Result<(), ReportError> {
    img.save(path).map_err(|source| ReportError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Wrote chart");
    Ok(())
}
