//! Rasterization of a surface into RGBA pixels.
//!
//! Meshes, lines and feature geometry are drawn with tiny-skia. Text
//! artists, axis labels and the legend are drawn afterwards onto the
//! demultiplied image with the embedded font.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use ndarray::Array2;
use plot_common::{BoundingBox, Color, PlotError, PlotResult};
use rusttype::Font;
use serde::{Deserialize, Serialize};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::axes::{Artist, Axes, HAlign, Line, QuadMesh, TextArtist, TextCoords, VAlign};
use crate::feature::Feature;
use crate::png;
use crate::text::{self, draw_aligned, scale_for, text_extent};

/// Font size of axis labels and title, in points
const LABEL_FONT_SIZE: f32 = 10.0;
/// Font size of legend entries, in points
const LEGEND_FONT_SIZE: f32 = 9.0;
/// Gap between the plot frame and surrounding labels, in pixels
const LABEL_PAD: f32 = 4.0;

/// Output size and framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Fraction of each side reserved around the plot area
    pub margin: f32,
    pub draw_frame: bool,
    /// Pixels per inch, used to size text given in points
    pub dpi: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::WHITE,
            margin: 0.15,
            draw_frame: true,
            dpi: 100.0,
        }
    }
}

/// Mapping from surface coordinates to pixels.
struct Viewport {
    extent: BoundingBox,
    left: f32,
    top: f32,
    plot_width: f32,
    plot_height: f32,
}

impl Viewport {
    fn new(extent: BoundingBox, options: &RasterOptions) -> Self {
        let margin = options.margin.clamp(0.0, 0.45);
        let left = options.width as f32 * margin;
        let top = options.height as f32 * margin;
        Self {
            extent,
            left,
            top,
            plot_width: options.width as f32 - 2.0 * left,
            plot_height: options.height as f32 - 2.0 * top,
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let fx = (x - self.extent.min_x) / self.extent.width();
        let fy = (y - self.extent.min_y) / self.extent.height();
        (
            self.left + fx as f32 * self.plot_width,
            self.top + (1.0 - fy as f32) * self.plot_height,
        )
    }

    /// Pixel position of an axes-relative point; (0, 0) is the lower-left
    /// corner of the frame.
    fn axes_to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        (
            self.left + x as f32 * self.plot_width,
            self.top + (1.0 - y as f32) * self.plot_height,
        )
    }

    fn for_axes(axes: &Axes, options: &RasterOptions) -> Self {
        let extent = axes.data_extent();
        let extent = if extent.is_valid() {
            extent.non_degenerate()
        } else {
            BoundingBox::new(0.0, 0.0, 1.0, 1.0)
        };
        Self::new(extent, options)
    }
}

fn paint_for(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = anti_alias;
    paint
}

/// Rasterize a surface.
pub fn render_pixmap(axes: &Axes, options: &RasterOptions) -> PlotResult<Pixmap> {
    let mut pixmap = Pixmap::new(options.width, options.height).ok_or_else(|| {
        PlotError::RenderError(format!(
            "invalid raster size {}x{}",
            options.width, options.height
        ))
    })?;

    let bg = options.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

    let viewport = Viewport::for_axes(axes, options);

    for artist in axes.artists() {
        match artist {
            Artist::Mesh(mesh) => draw_mesh(&mut pixmap, axes, mesh, &viewport),
            Artist::Line(line) => draw_line(&mut pixmap, axes, line, &viewport),
            Artist::Feature(feature) => draw_feature(&mut pixmap, axes, feature, &viewport),
            // drawn by render_image once the pixels are demultiplied
            Artist::Text(_) => {}
        }
    }

    if options.draw_frame {
        draw_frame(&mut pixmap, &viewport);
    }

    tracing::debug!(
        width = options.width,
        height = options.height,
        artists = axes.artists().len(),
        "Rasterized surface"
    );

    Ok(pixmap)
}

/// Rasterize a surface including its text, labels and legend.
pub fn render_image(axes: &Axes, options: &RasterOptions) -> PlotResult<RgbaImage> {
    let pixmap = render_pixmap(axes, options)?;

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let mut img = RgbaImage::from_raw(options.width, options.height, rgba).ok_or_else(|| {
        PlotError::RenderError("pixel buffer does not match raster size".to_string())
    })?;

    let has_text = axes.texts().next().is_some()
        || axes.has_legend()
        || axes.title().is_some()
        || axes.xlabel().is_some()
        || axes.ylabel().is_some();
    if has_text {
        let font = text::load_font()?;
        let viewport = Viewport::for_axes(axes, options);
        draw_labels(&mut img, &font, axes, &viewport, options);
        for artist in axes.texts() {
            draw_text_artist(&mut img, &font, axes, artist, &viewport, options);
        }
        draw_legend(&mut img, &font, axes, &viewport, options);
    }

    Ok(img)
}

/// Rasterize a surface and encode it as PNG.
pub fn render_png(axes: &Axes, options: &RasterOptions) -> PlotResult<Vec<u8>> {
    let img = render_image(axes, options)?;
    png::encode(img.as_raw(), options.width as usize, options.height as usize)
}

/// Corner positions for cell-centered values.
///
/// Returns an array one larger in each direction. Edge corners are
/// extrapolated linearly from the two outermost centers.
pub fn cell_corners(centers: &Array2<f64>) -> Array2<f64> {
    let (ny, nx) = centers.dim();
    let mut padded = Array2::<f64>::zeros((ny + 2, nx + 2));

    for ((i, j), v) in centers.indexed_iter() {
        padded[[i + 1, j + 1]] = *v;
    }

    for i in 1..=ny {
        padded[[i, 0]] = if nx > 1 {
            2.0 * padded[[i, 1]] - padded[[i, 2]]
        } else {
            padded[[i, 1]]
        };
        padded[[i, nx + 1]] = if nx > 1 {
            2.0 * padded[[i, nx]] - padded[[i, nx - 1]]
        } else {
            padded[[i, nx]]
        };
    }
    for j in 0..nx + 2 {
        padded[[0, j]] = if ny > 1 {
            2.0 * padded[[1, j]] - padded[[2, j]]
        } else {
            padded[[1, j]]
        };
        padded[[ny + 1, j]] = if ny > 1 {
            2.0 * padded[[ny, j]] - padded[[ny - 1, j]]
        } else {
            padded[[ny, j]]
        };
    }

    Array2::from_shape_fn((ny + 1, nx + 1), |(i, j)| {
        0.25 * (padded[[i, j]] + padded[[i + 1, j]] + padded[[i, j + 1]] + padded[[i + 1, j + 1]])
    })
}

fn draw_mesh(pixmap: &mut Pixmap, axes: &Axes, mesh: &QuadMesh, viewport: &Viewport) {
    let cx = cell_corners(&mesh.x);
    let cy = cell_corners(&mesh.y);
    let transform = mesh.transform.as_ref();

    for ((i, j), value) in mesh.values.indexed_iter() {
        let color = mesh.colormap.map_value(*value, mesh.vmin, mesh.vmax);
        if color.a == 0 {
            continue;
        }

        let corners = [(i, j), (i, j + 1), (i + 1, j + 1), (i + 1, j)];
        let mut pb = PathBuilder::new();
        let mut complete = true;
        for (k, (ci, cj)) in corners.iter().enumerate() {
            let Some((sx, sy)) = axes.to_surface(transform, cx[[*ci, *cj]], cy[[*ci, *cj]]) else {
                complete = false;
                break;
            };
            let (px, py) = viewport.to_pixel(sx, sy);
            if k == 0 {
                pb.move_to(px, py);
            } else {
                pb.line_to(px, py);
            }
        }
        if !complete {
            continue;
        }
        pb.close();

        if let Some(path) = pb.finish() {
            pixmap.fill_path(
                &path,
                &paint_for(color, false),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

/// Build a polyline path, breaking it where points cannot be placed.
fn polyline_path<I>(points: I, viewport: &Viewport) -> Option<tiny_skia::Path>
where
    I: IntoIterator<Item = Option<(f64, f64)>>,
{
    let mut pb = PathBuilder::new();
    let mut pen_down = false;

    for point in points {
        match point {
            Some((x, y)) if x.is_finite() && y.is_finite() => {
                let (px, py) = viewport.to_pixel(x, y);
                if pen_down {
                    pb.line_to(px, py);
                } else {
                    pb.move_to(px, py);
                    pen_down = true;
                }
            }
            _ => pen_down = false,
        }
    }

    pb.finish()
}

fn draw_line(pixmap: &mut Pixmap, axes: &Axes, line: &Line, viewport: &Viewport) {
    let transform = line.transform.as_ref();
    let points = line
        .x
        .iter()
        .zip(&line.y)
        .map(|(x, y)| axes.to_surface(transform, *x, *y));

    if let Some(path) = polyline_path(points, viewport) {
        let stroke = Stroke {
            width: line.line_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(
            &path,
            &paint_for(line.color, true),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

fn draw_feature(pixmap: &mut Pixmap, axes: &Axes, feature: &Feature, viewport: &Viewport) {
    let Some(projection) = axes.projection() else {
        return;
    };

    for ring in &feature.geometry {
        let points = ring.iter().map(|(lon, lat)| projection.project(*lon, *lat));
        let Some(path) = polyline_path(points, viewport) else {
            continue;
        };

        if feature.face_color.a > 0 && Feature::is_closed(ring) {
            pixmap.fill_path(
                &path,
                &paint_for(feature.face_color, true),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
        if feature.edge_color.a > 0 && feature.line_width > 0.0 {
            let stroke = Stroke {
                width: feature.line_width,
                ..Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &paint_for(feature.edge_color, true),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }
}

fn draw_text_artist(
    img: &mut RgbaImage,
    font: &Font,
    axes: &Axes,
    artist: &TextArtist,
    viewport: &Viewport,
    options: &RasterOptions,
) {
    let anchor = match artist.coords {
        TextCoords::Axes => Some(viewport.axes_to_pixel(artist.x, artist.y)),
        TextCoords::Data => axes
            .to_surface(None, artist.x, artist.y)
            .map(|(x, y)| viewport.to_pixel(x, y)),
    };
    let Some((px, py)) = anchor else {
        return;
    };

    draw_aligned(
        img,
        font,
        scale_for(artist.font_size, options.dpi),
        &artist.text,
        px,
        py,
        artist.ha,
        artist.va,
        artist.color,
    );
}

/// Title centered above the frame, x label centered below it, y label
/// above the upper-left corner.
fn draw_labels(
    img: &mut RgbaImage,
    font: &Font,
    axes: &Axes,
    viewport: &Viewport,
    options: &RasterOptions,
) {
    let scale = scale_for(LABEL_FONT_SIZE, options.dpi);
    let center_x = viewport.left + viewport.plot_width / 2.0;
    let bottom = viewport.top + viewport.plot_height;

    if let Some(title) = axes.title() {
        // leave room for a y label sharing the strip above the frame
        let lift = match axes.ylabel() {
            Some(_) => text_extent(font, scale, title).1 as f32,
            None => 0.0,
        };
        let y = viewport.top - LABEL_PAD - lift;
        draw_aligned(
            img,
            font,
            scale,
            title,
            center_x,
            y,
            HAlign::Center,
            VAlign::Bottom,
            Color::BLACK,
        );
    }
    if let Some(xlabel) = axes.xlabel() {
        draw_aligned(
            img,
            font,
            scale,
            xlabel,
            center_x,
            bottom + LABEL_PAD,
            HAlign::Center,
            VAlign::Top,
            Color::BLACK,
        );
    }
    if let Some(ylabel) = axes.ylabel() {
        draw_aligned(
            img,
            font,
            scale,
            ylabel,
            viewport.left,
            viewport.top - LABEL_PAD,
            HAlign::Left,
            VAlign::Bottom,
            Color::BLACK,
        );
    }
}

/// Legend box in the upper-right corner of the frame, one swatch and label
/// per entry.
fn draw_legend(
    img: &mut RgbaImage,
    font: &Font,
    axes: &Axes,
    viewport: &Viewport,
    options: &RasterOptions,
) {
    let Some(entries) = axes.legend_entries() else {
        return;
    };
    if entries.is_empty() {
        return;
    }

    let scale = scale_for(LEGEND_FONT_SIZE, options.dpi);
    let pad = 6;
    let swatch = 20;
    let row_height = entries
        .iter()
        .map(|e| text_extent(font, scale, &e.label).1)
        .max()
        .unwrap_or(0)
        + 4;
    let label_width = entries
        .iter()
        .map(|e| text_extent(font, scale, &e.label).0)
        .max()
        .unwrap_or(0);

    let box_width = (pad * 3 + swatch + label_width).max(1);
    let box_height = (pad * 2 + row_height * entries.len() as i32).max(1);
    let box_left = (viewport.left + viewport.plot_width) as i32 - pad - box_width;
    let box_top = viewport.top as i32 + pad;

    let frame = Rect::at(box_left, box_top).of_size(box_width as u32, box_height as u32);
    draw_filled_rect_mut(img, frame, Rgba([255, 255, 255, 255]));
    draw_hollow_rect_mut(img, frame, Rgba([128, 128, 128, 255]));

    for (row, entry) in entries.iter().enumerate() {
        let center_y = box_top + pad + row_height * row as i32 + row_height / 2;
        let line = Rect::at(box_left + pad, center_y - 1).of_size(swatch as u32, 3);
        draw_filled_rect_mut(img, line, text::rgba(entry.color));
        draw_aligned(
            img,
            font,
            scale,
            &entry.label,
            (box_left + pad * 2 + swatch) as f32,
            center_y as f32,
            HAlign::Left,
            VAlign::Center,
            Color::BLACK,
        );
    }
}

fn draw_frame(pixmap: &mut Pixmap, viewport: &Viewport) {
    let rect = tiny_skia::Rect::from_xywh(
        viewport.left,
        viewport.top,
        viewport.plot_width,
        viewport.plot_height,
    );
    if let Some(rect) = rect {
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        pixmap.stroke_path(
            &path,
            &paint_for(Color::BLACK, false),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_cell_corners_regular_grid() {
        let x = arr2(&[[0.0, 1.0, 2.0], [0.0, 1.0, 2.0]]);
        let corners = cell_corners(&x);
        assert_eq!(corners.dim(), (3, 4));
        assert_eq!(corners.row(0).to_vec(), vec![-0.5, 0.5, 1.5, 2.5]);
        assert_eq!(corners.row(2).to_vec(), vec![-0.5, 0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_cell_corners_single_cell() {
        let corners = cell_corners(&arr2(&[[3.0]]));
        assert!(corners.iter().all(|v| *v == 3.0));
    }

    #[test]
    fn test_empty_surface_renders_background() {
        let options = RasterOptions {
            width: 20,
            height: 10,
            draw_frame: false,
            ..Default::default()
        };
        let pixmap = render_pixmap(&Axes::new(), &options).unwrap();
        let p = pixmap.pixel(5, 5).unwrap();
        assert_eq!((p.red(), p.green(), p.blue(), p.alpha()), (255, 255, 255, 255));
    }

    fn note(x: f64, y: f64) -> TextArtist {
        TextArtist {
            x,
            y,
            text: "Made with MOM6".to_string(),
            coords: TextCoords::Axes,
            ha: HAlign::Left,
            va: VAlign::Bottom,
            font_size: 10.0,
            color: Color::BLACK,
        }
    }

    /// Pixels that differ between two images of the same size.
    fn changed_pixels(a: &RgbaImage, b: &RgbaImage) -> Vec<(u32, u32)> {
        a.enumerate_pixels()
            .filter(|(x, y, p)| b.get_pixel(*x, *y) != *p)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_axes_text_below_left_of_frame() {
        let options = RasterOptions::default();
        let plain = render_image(&Axes::new(), &options).unwrap();

        let mut axes = Axes::new();
        axes.add_text(note(-0.1, -0.2));
        let stamped = render_image(&axes, &options).unwrap();

        let changed = changed_pixels(&plain, &stamped);
        assert!(!changed.is_empty(), "text left no ink");

        // frame spans 120..680 horizontally and 90..510 vertically
        let frame_left = 120;
        let frame_bottom = 510;
        let min_x = changed.iter().map(|(x, _)| *x).min().unwrap();
        let min_y = changed.iter().map(|(_, y)| *y).min().unwrap();
        assert!(min_x < frame_left, "ink starts at x={}", min_x);
        assert!(min_y > frame_bottom, "ink starts at y={}", min_y);
    }

    #[test]
    fn test_data_text_follows_extent() {
        let mut axes = Axes::new();
        axes.add_line(Line {
            x: vec![0.0, 10.0],
            y: vec![0.0, 10.0],
            label: None,
            color: Color::BLACK,
            line_width: 1.0,
            transform: None,
        });
        let options = RasterOptions {
            draw_frame: false,
            ..Default::default()
        };
        let before = render_image(&axes, &options).unwrap();

        let mut text = note(10.0, 0.0);
        text.coords = TextCoords::Data;
        text.ha = HAlign::Right;
        axes.add_text(text);
        let after = render_image(&axes, &options).unwrap();

        // lower-right corner of the data extent sits at (680, 510)
        let changed = changed_pixels(&before, &after);
        assert!(!changed.is_empty());
        assert!(changed.iter().all(|(x, y)| *x <= 681 && *y <= 511 && *x > 400));
    }

    #[test]
    fn test_legend_drawn_in_upper_right() {
        let mut axes = Axes::new();
        axes.add_line(Line {
            x: vec![0.0, 1.0],
            y: vec![0.0, 0.0],
            label: Some("thetao".to_string()),
            color: Color::new(255, 0, 0, 255),
            line_width: 1.0,
            transform: None,
        });
        let options = RasterOptions::default();
        let without = render_image(&axes, &options).unwrap();

        axes.legend();
        let with = render_image(&axes, &options).unwrap();

        let changed = changed_pixels(&without, &with);
        assert!(!changed.is_empty());
        assert!(changed.iter().all(|(x, y)| *x > 400 && *y < 300));
        assert!(with.pixels().any(|p| *p == Rgba([255, 0, 0, 255])));
    }

    #[test]
    fn test_labels_drawn_outside_frame() {
        let options = RasterOptions::default();
        let plain = render_image(&Axes::new(), &options).unwrap();

        let mut axes = Axes::new();
        axes.set_title("Sea surface temperature");
        axes.set_xlabel("longitude");
        let labelled = render_image(&axes, &options).unwrap();

        let changed = changed_pixels(&plain, &labelled);
        assert!(changed.iter().any(|(_, y)| *y < 90));
        assert!(changed.iter().any(|(_, y)| *y > 510));
        assert!(changed.iter().all(|(_, y)| *y < 90 || *y > 510));
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let options = RasterOptions {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            render_pixmap(&Axes::new(), &options),
            Err(PlotError::RenderError(_))
        ));
    }
}
