use beamcut_core::Point;
use beamcut_toolpath::{render_preview, MotionEvent};
use image::Rgb;

#[test]
fn test_preview_colors_cuts_and_travels() {
    let events = vec![
        MotionEvent::TravelTo {
            target: Point::new(0.0, 0.0),
            feed: 800.0,
        },
        MotionEvent::ToolOn,
        MotionEvent::CutTo {
            target: Point::new(10.0, 0.0),
            feed: 400.0,
        },
        MotionEvent::ToolOff,
        MotionEvent::TravelTo {
            target: Point::new(0.0, 10.0),
            feed: 800.0,
        },
    ];
    // A 10x10 plan on a 120x120 canvas maps (x, y) to (10 + 10x, 10 + 10y).
    let img = render_preview(&events, 120, 120);
    assert_eq!(*img.get_pixel(60, 10), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(60, 60), Rgb([255, 170, 0]));
    assert_eq!(*img.get_pixel(5, 5), Rgb([128, 128, 128]));
}

#[test]
fn test_preview_of_empty_plan_is_blank() {
    let img = render_preview(&[], 50, 40);
    assert_eq!(img.dimensions(), (50, 40));
    assert_eq!(*img.get_pixel(0, 0), Rgb([128, 128, 128]));
    assert_eq!(*img.get_pixel(25, 20), Rgb([128, 128, 128]));
    assert_eq!(*img.get_pixel(49, 39), Rgb([128, 128, 128]));
}

#[test]
fn test_preview_of_single_point_does_not_scale() {
    let events = vec![
        MotionEvent::ToolOn,
        MotionEvent::CutTo {
            target: Point::new(3.0, 3.0),
            feed: 400.0,
        },
        MotionEvent::ToolOff,
    ];
    let img = render_preview(&events, 64, 64);
    assert_eq!(img.dimensions(), (64, 64));
    assert_eq!(*img.get_pixel(0, 0), Rgb([128, 128, 128]));
}
