//! End-to-end drawing sessions.
//!
//! Each test drives a [`Session`] through input events and checks what reached
//! the backend: the recorded draw calls, or the pixels of a software frame.
//!
//! Run: cargo test --test session_scenarios

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use trueno_sketch::prelude::*;
use trueno_sketch::render::Command;
use trueno_sketch::script;

fn recording(exercise: Exercise) -> Session<RecordingBackend> {
    Session::new(exercise, RecordingBackend::new())
}

fn software(exercise: Exercise, size: u32) -> Session<SoftwareBackend> {
    Session::new(exercise, SoftwareBackend::new(size, size, Color::WHITE).unwrap())
}

// ============================================================================
// Recorded draw calls
// ============================================================================

#[test]
fn horizontal_line_submits_six_squares() {
    let mut s = recording(Exercise::Lines);
    s.click(Point::new(0, 0));
    let outcome = s.click(Point::new(5, 0));

    assert_eq!(
        outcome,
        Outcome::StrokeRendered {
            shape: Shape::Line {
                from: Point::new(0, 0),
                to: Point::new(5, 0),
            },
            points: 6,
            vertices: 36,
        }
    );

    let (vertices, color) = s.backend().last_draw().unwrap();
    assert_eq!(vertices.len(), 72);
    assert_eq!(color, Palette::Blue.color());
}

#[test]
fn thick_dot_expands_to_five_pixel_square() {
    let mut s = recording(Exercise::Lines);
    let events = [
        InputEvent::SelectMode(Mode::SelectThickness),
        InputEvent::Digit(5),
        InputEvent::SelectMode(Mode::DrawLine),
        InputEvent::PointerDown(Point::new(10, 10)),
        InputEvent::PointerDown(Point::new(10, 10)),
    ];
    assert_eq!(s.run(events), 1);

    let (vertices, _) = s.backend().last_draw().unwrap();
    assert_eq!(
        vertices,
        &[
            8.0, 8.0, 13.0, 8.0, 8.0, 13.0, //
            8.0, 13.0, 13.0, 8.0, 13.0, 13.0,
        ]
    );
}

#[test]
fn circle_exercise_draws_through_second_click() {
    let mut s = recording(Exercise::Circle);
    s.start();
    assert_eq!(s.status(), "Awaiting first click (center)");

    s.click(Point::new(100, 100));
    assert_eq!(s.status(), "Awaiting second click (radius)");

    let outcome = s.click(Point::new(150, 100));
    let Outcome::StrokeRendered { shape, points, .. } = outcome else {
        panic!("expected a stroke, got {outcome:?}");
    };
    assert_eq!(
        shape,
        Shape::Circle {
            center: Point::new(100, 100),
            radius: 50
        }
    );

    let center = Point::new(100, 100);
    let rasterized = shape.rasterize();
    assert_eq!(rasterized.len(), points);
    for p in rasterized {
        assert!(
            (center.distance(p) - 50.0).abs() <= 1.0,
            "{p} is off the circle"
        );
    }

    let (_, color) = s.backend().last_draw().unwrap();
    assert_eq!(color, Palette::Red.color());
}

#[test]
fn every_stroke_clears_then_draws_once() {
    let mut s = recording(Exercise::Full);
    s.start();

    let events = [
        InputEvent::PointerDown(Point::new(0, 0)),
        InputEvent::PointerDown(Point::new(9, 4)),
        InputEvent::SelectMode(Mode::DrawTriangle),
        InputEvent::PointerDown(Point::new(0, 0)),
        InputEvent::PointerDown(Point::new(9, 0)),
        InputEvent::PointerDown(Point::new(0, 9)),
        InputEvent::SelectMode(Mode::DrawCircle),
        InputEvent::PointerDown(Point::new(20, 20)),
        InputEvent::PointerDown(Point::new(20, 27)),
    ];
    assert_eq!(s.run(events), 3);

    // Initial dot plus three strokes, each one clear followed by one draw.
    let commands = s.backend().commands();
    assert_eq!(commands.len(), 8);
    for pair in commands.chunks(2) {
        assert_eq!(pair[0], Command::Clear);
        assert!(matches!(pair[1], Command::DrawTriangles { .. }));
    }
}

#[test]
fn color_change_applies_to_next_stroke_only() {
    let mut s = recording(Exercise::Lines);
    s.click(Point::new(0, 0));
    s.click(Point::new(1, 1));
    assert_eq!(s.backend().last_draw().unwrap().1, Palette::Blue.color());

    s.select_mode(Mode::SelectColor);
    s.digit(3);
    assert_eq!(s.backend().draw_count(), 1);

    s.select_mode(Mode::DrawLine);
    s.click(Point::new(0, 0));
    s.click(Point::new(1, 1));
    assert_eq!(s.backend().last_draw().unwrap().1, Palette::Yellow.color());
}

#[test]
fn strokes_at_coordinate_limits_render() {
    let mut s = recording(Exercise::Circle);
    s.click(Point::new(i32::MAX, i32::MAX));
    let outcome = s.click(Point::new(i32::MAX, i32::MAX - 3));
    assert!(matches!(
        outcome,
        Outcome::StrokeRendered {
            shape: Shape::Circle { radius: 3, .. },
            ..
        }
    ));

    let mut s = recording(Exercise::Lines);
    s.click(Point::new(i32::MIN, i32::MIN));
    assert!(matches!(
        s.click(Point::new(i32::MIN + 2, i32::MIN + 1)),
        Outcome::StrokeRendered { points: 3, .. }
    ));
}

#[test]
fn out_of_range_clicks_are_rejected_by_scripts() {
    let handler = InputHandler::default();
    let err = script::parse("key c\nclick -3000000000 0\nclick 3000000000 0", &handler)
        .unwrap_err();
    assert!(matches!(err, Error::ScriptParse { line: 2, .. }));
}

// ============================================================================
// Software frames
// ============================================================================

#[test]
fn only_the_latest_stroke_is_visible() {
    let mut s = software(Exercise::Lines, 64);
    s.start();
    assert_eq!(s.backend().framebuffer().count_pixels(Rgba::BLUE), 1);

    s.click(Point::new(0, 0));
    s.click(Point::new(5, 0));
    assert_eq!(s.backend().framebuffer().count_pixels(Rgba::BLUE), 6);

    s.click(Point::new(10, 10));
    s.click(Point::new(10, 20));

    let fb = s.backend().framebuffer();
    assert_eq!(fb.count_pixels(Rgba::BLUE), 11);
    assert_eq!(fb.pixel_at(Point::new(0, 0)), Some(Rgba::WHITE));
    assert_eq!(fb.pixel_at(Point::new(10, 15)), Some(Rgba::BLUE));
    assert_eq!(s.backend().frames(), 3);
}

#[test]
fn triangle_outline_leaves_interior_empty() {
    let mut s = software(Exercise::Lines, 32);
    s.select_mode(Mode::DrawTriangle);
    s.click(Point::new(2, 2));
    s.click(Point::new(20, 2));
    s.click(Point::new(2, 20));

    let fb = s.backend().framebuffer();
    assert_eq!(fb.pixel_at(Point::new(2, 2)), Some(Rgba::BLUE));
    assert_eq!(fb.pixel_at(Point::new(11, 2)), Some(Rgba::BLUE));
    assert_eq!(fb.pixel_at(Point::new(6, 6)), Some(Rgba::WHITE));
}

#[test]
fn strokes_off_canvas_are_clipped() {
    let mut s = software(Exercise::Lines, 16);
    s.click(Point::new(-10, 5));
    s.click(Point::new(40, 5));

    let fb = s.backend().framebuffer();
    assert_eq!(fb.count_pixels(Rgba::BLUE), 16);
}

#[test]
fn config_and_script_replay_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("sketch.yaml");
    let script_path = dir.path().join("events.txt");
    let png_path = dir.path().join("frame.png");

    std::fs::write(
        &config_path,
        "canvas: { width: 32, height: 32 }\nexercise: full\ncolor: 1\nthickness: 3\n",
    )
    .unwrap();
    std::fs::write(
        &script_path,
        "# a short thick green line\nclick 4 4\nclick 8 4\nkey z\n",
    )
    .unwrap();

    let config = SketchConfig::load(&config_path).unwrap();
    let handler = InputHandler::new(config.keys.clone());
    let events = script::load(&script_path, &handler).unwrap();
    assert_eq!(events.len(), 2);

    let backend = SoftwareBackend::new(
        config.canvas.width,
        config.canvas.height,
        config.background_color(),
    )
    .unwrap();
    let mut session = Session::from_config(&config, backend);
    assert_eq!(session.run(events), 1);

    let fb = session.into_backend().into_framebuffer();
    // Five points at thickness 3 cover columns 3..=9 on rows 3..=5.
    assert_eq!(fb.count_pixels(Palette::Green.color().to_rgba()), 21);

    PngEncoder::write_to_file(&fb, &png_path).unwrap();
    let decoder = png::Decoder::new(std::fs::File::open(&png_path).unwrap());
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().width, 32);
    assert_eq!(reader.info().height, 32);
}
