//! Render and measure a label against an in-process renderer.
//!
//! Run with: `cargo run --package richlabel --example render_label`

use richlabel::{Color, RenderRequest, RichLabelBridge, TextAlign, Vec2};
use richlabel_test_utils::{MockBoundary, MockFileResolver};

fn main() {
    richlabel_core::logging::init();
    richlabel_core::profiling::serve("127.0.0.1:8585");

    // Stand-in renderer: 8 pixels per character, 16 pixels tall,
    // and a link region over the whole label.
    let boundary = MockBoundary::with_renderer(|call, callbacks| {
        let width = call.text.chars().count() as i32 * 8;
        let height = 16;
        callbacks.reset();
        let (w, h) = (width as f32, height as f32);
        callbacks.deliver_link_meta(0, 0x40ff_ffffu32 as i32, 0.0, 0.0, w, h, 1);
        if call.args.shadow {
            callbacks.deliver_padding(call.args.shadow_dx.abs(), call.args.shadow_dy.abs());
        }
        let pixels = (!call.args.size_only).then(|| vec![0xff; (width * height * 4) as usize]);
        callbacks.deliver_bitmap(width, height, pixels.as_deref());
        Ok(())
    });

    let resolver = MockFileResolver::new().with_path("body.ttf", "assets/fonts/body.ttf");
    let bridge = RichLabelBridge::new(boundary, resolver);

    let size = bridge.measure("Hello, richlabel", "body.ttf", 18.0, 0, Vec2::ZERO, 0.0);
    println!("measured: {}x{}", size.width, size.height);

    let request = RenderRequest::new("Hello, richlabel", "body.ttf", 18.0)
        .with_align(TextAlign::Left)
        .with_shadow(Vec2::new(1.0, 1.0), Color::BLACK);

    let result = bridge.render_rich_text(&request);
    richlabel_core::profiling::new_frame();

    match result {
        Ok(image) => {
            println!(
                "rendered: {}x{}, {} bytes, {} link(s), padding {:?}",
                image.width(),
                image.height(),
                image.pixels().map_or(0, <[u8]>::len),
                image.links().len(),
                image.padding()
            );
            let font_path = &bridge.boundary().last_invocation().unwrap().font_path;
            println!("font path sent to renderer: {}", font_path);
        }
        Err(e) => eprintln!("render failed: {}", e),
    }
}
