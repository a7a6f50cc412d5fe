// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end raster smoke tests: PNG header, buffer shape, hover overlay pixels.

use chart_core::{classify, render, ChartView, Dataset, PointerEvent, RawPoint, RenderOptions, Scene, Theme};
use chart_render_skia::SkiaRenderer;

fn scene() -> Scene {
    let ds = Dataset::new("smoke", vec![
        RawPoint::scalar(0.0, Some(0.0)),
        RawPoint::scalar(1.0, Some(2.0)),
        RawPoint::scalar(2.0, None),
        RawPoint::scalar(3.0, Some(3.5)),
        RawPoint::scalar(4.0, Some(2.5)),
    ]);
    render(&classify(&ds), &RenderOptions::default())
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&scene(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = renderer.render_to_png_bytes(&scene(), &[]).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 400));
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&scene(), &[]).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    // top-left pixel is opaque background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn scale_multiplies_surface() {
    let (_, w, h, _) = SkiaRenderer::new().with_scale(2.0).render_to_rgba8(&scene(), &[]).expect("rgba render");
    assert_eq!((w, h), (1600, 800));
}

#[test]
fn empty_scene_is_plain_background() {
    let theme = Theme::dark();
    let (px, _, _, _) = SkiaRenderer::new().render_to_rgba8(&Scene::empty(800.0, 400.0, theme), &[]).expect("rgba render");
    let bg = [theme.background.r, theme.background.g, theme.background.b, 255];
    assert!(px.chunks_exact(4).all(|p| p == bg));
}

#[test]
fn hover_overlay_changes_pixels() {
    let renderer = SkiaRenderer::new();
    let mut view = ChartView::new(scene());
    let plain = renderer.render_view_png(&view).expect("plain");
    view.handle(PointerEvent::Enter(1));
    let hovered = renderer.render_view_png(&view).expect("hovered");
    let a = image::load_from_memory(&plain).expect("decode").to_rgba8();
    let b = image::load_from_memory(&hovered).expect("decode").to_rgba8();
    assert_ne!(a.as_raw(), b.as_raw(), "tooltip should be visible");
}
