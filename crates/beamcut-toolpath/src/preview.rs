//! Renders a motion plan to an image.

use beamcut_core::Point;
use image::{Rgb, RgbImage};

use crate::motion::MotionEvent;

/// Background matching the UI gray.
const BACKGROUND: Rgb<u8> = Rgb([128, 128, 128]);
/// Cutting moves.
const CUT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
/// Travel moves between cuts.
const TRAVEL_COLOR: Rgb<u8> = Rgb([255, 170, 0]);

/// Renders a plan preview, cuts in white and travels in orange, scaled
/// to fit the canvas with a small margin.
pub fn render_preview(events: &[MotionEvent], width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = BACKGROUND;
    }

    let targets: Vec<Point> = events
        .iter()
        .filter_map(|event| match event {
            MotionEvent::TravelTo { target, .. } | MotionEvent::CutTo { target, .. } => {
                Some(*target)
            }
            _ => None,
        })
        .collect();
    if targets.is_empty() {
        return img;
    }

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for point in &targets {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    let data_width = max_x - min_x;
    let data_height = max_y - min_y;

    let padding = 10.0;
    let avail_width = width as f64 - 2.0 * padding;
    let avail_height = height as f64 - 2.0 * padding;

    let scale = if data_width > 0.0 && data_height > 0.0 {
        (avail_width / data_width).min(avail_height / data_height)
    } else {
        1.0
    };

    let offset_x = padding + (avail_width - data_width * scale) / 2.0 - min_x * scale;
    let offset_y = padding + (avail_height - data_height * scale) / 2.0 - min_y * scale;
    let to_pixel = |p: Point| {
        (
            (p.x * scale + offset_x) as i32,
            (p.y * scale + offset_y) as i32,
        )
    };

    // The pen positions on the first target without drawing.
    let mut current: Option<Point> = None;
    for event in events {
        let (target, color) = match event {
            MotionEvent::TravelTo { target, .. } => (*target, TRAVEL_COLOR),
            MotionEvent::CutTo { target, .. } => (*target, CUT_COLOR),
            _ => continue,
        };
        if let Some(from) = current {
            let (x0, y0) = to_pixel(from);
            let (x1, y1) = to_pixel(target);
            draw_line_segment(&mut img, x0, y0, x1, y1, color);
        }
        current = Some(target);
    }

    img
}

fn draw_line_segment(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && x < img.width() as i32 && y >= 0 && y < img.height() as i32 {
            img.put_pixel(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
