use cairo::{Context, Format, ImageSurface};
use sketchpad::config::KeybindingsConfig;
use sketchpad::draw::{
    ColoredShape, MarqueeStyle, Shape,
    color::{BLACK, BLUE, RED, WHITE},
    render_background, render_scene,
};
use sketchpad::host::HeadlessHost;
use sketchpad::input::{InputState, MouseButton, PolygonSides, Tool};
use sketchpad::util::Rect;

fn make_input_state() -> InputState {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let mut state = InputState::with_defaults(RED, 2.0, PolygonSides::Triangle, 0, action_map);
    state.update_canvas_dimensions(100, 80);
    state
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Returns (r, g, b, a) of a pixel. ARGB32 is stored native-endian as BGRA on little-endian.
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    let value = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
        (value >> 24) as u8,
    )
}

#[test]
fn background_fills_whole_surface() {
    let (mut surface, ctx) = surface_with_context(20, 10);
    render_background(&ctx, WHITE);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 0, 0), (255, 255, 255, 255));
    assert_eq!(pixel(&mut surface, 19, 9), (255, 255, 255, 255));
}

#[test]
fn later_shapes_paint_over_earlier_ones() {
    let (mut surface, ctx) = surface_with_context(40, 40);
    render_background(&ctx, WHITE);
    let shapes = vec![
        ColoredShape::new(
            Shape::Line {
                x1: 0,
                y1: 20,
                x2: 40,
                y2: 20,
            },
            RED,
            4.0,
        ),
        ColoredShape::new(
            Shape::Line {
                x1: 20,
                y1: 0,
                x2: 20,
                y2: 40,
            },
            BLUE,
            4.0,
        ),
    ];
    render_scene(&ctx, &shapes, None, None, &MarqueeStyle::default());
    drop(ctx);

    assert_eq!(pixel(&mut surface, 5, 20), (255, 0, 0, 255));
    assert_eq!(pixel(&mut surface, 20, 20), (0, 0, 255, 255));
    assert_eq!(pixel(&mut surface, 5, 5), (255, 255, 255, 255));
}

#[test]
fn shapes_are_outlines_only() {
    let (mut surface, ctx) = surface_with_context(60, 60);
    render_background(&ctx, WHITE);
    let rect = ColoredShape::new(Shape::rect_from_diagonal(10, 10, 50, 50), BLACK, 2.0);
    render_scene(&ctx, &[rect], None, None, &MarqueeStyle::default());
    drop(ctx);

    assert_eq!(pixel(&mut surface, 30, 30), (255, 255, 255, 255));
    assert_eq!(pixel(&mut surface, 30, 10), (0, 0, 0, 255));
}

#[test]
fn marquee_is_drawn_over_shapes() {
    let (mut surface, ctx) = surface_with_context(60, 60);
    render_background(&ctx, WHITE);
    let style = MarqueeStyle {
        color: BLUE,
        dash_length: 100.0,
    };
    render_scene(&ctx, &[], None, Rect::new(10, 10, 40, 40), &style);
    drop(ctx);

    // A single long dash covers the top edge
    let (r, g, b, _) = pixel(&mut surface, 30, 10);
    assert!(b > 0 && r < 255 && g < 255, "marquee edge not drawn");
    assert_eq!(pixel(&mut surface, 30, 30), (255, 255, 255, 255));
}

#[test]
fn input_state_renders_in_progress_shape() {
    let mut state = make_input_state();
    let mut host = HeadlessHost;
    state.set_tool(Tool::Line);
    state.on_mouse_press(&mut host, MouseButton::Left, 0, 40);
    state.on_mouse_motion(100, 40);

    let (mut surface, ctx) = surface_with_context(100, 80);
    state.render(&ctx);
    drop(ctx);

    assert!(state.canvas.is_empty());
    assert_eq!(pixel(&mut surface, 50, 40), (255, 0, 0, 255));
    assert_eq!(pixel(&mut surface, 50, 10), (255, 255, 255, 255));
}

#[test]
fn rasterize_matches_canvas_dimensions() {
    let mut state = make_input_state();
    let mut host = HeadlessHost;
    state.set_tool(Tool::Rect);
    state.on_mouse_press(&mut host, MouseButton::Left, 10, 10);
    state.on_mouse_motion(90, 70);
    state.on_mouse_release(MouseButton::Left, 90, 70);

    let mut surface = sketchpad::export::rasterize(&state).unwrap();

    assert_eq!((surface.width(), surface.height()), (100, 80));
    assert_eq!(pixel(&mut surface, 50, 10), (255, 0, 0, 255));
    assert_eq!(pixel(&mut surface, 50, 40), (255, 255, 255, 255));
}
