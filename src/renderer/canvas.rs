//! Canvas 2D painter
//!
//! Draws a `Snapshot`: ground line, obstacles, then the player on top.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::sprites::SpriteId;
use crate::sim::Snapshot;
use crate::sim::collision::Aabb;

/// Color used while a sprite is still decoding
const FALLBACK_COLOR: &str = "#FF0000";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    size: (f64, f64),
    /// Indexed by `SpriteId::index`
    images: Vec<HtmlImageElement>,
}

impl CanvasRenderer {
    /// Grab the 2D context and start loading every sprite.
    ///
    /// `on_load` fires once per decoded image.
    pub fn new(canvas: &HtmlCanvasElement, on_load: &js_sys::Function) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let images = SpriteId::ALL
            .iter()
            .map(|sprite| {
                let img = HtmlImageElement::new()?;
                img.set_onload(Some(on_load));
                img.set_src(sprite.file_name());
                Ok(img)
            })
            .collect::<Result<Vec<_>, JsValue>>()?;

        Ok(Self {
            ctx,
            size: (canvas.width() as f64, canvas.height() as f64),
            images,
        })
    }

    /// Paint one frame
    pub fn render(&self, snapshot: &Snapshot) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.size.0, self.size.1);
        self.draw_ground(snapshot.ground_line);

        for obstacle in &snapshot.obstacles {
            self.draw_sprite(obstacle.kind.into(), &obstacle.bounds)?;
        }
        self.draw_sprite(snapshot.player.pose.into(), &snapshot.player.bounds)
    }

    fn draw_ground(&self, y: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(0.0, y as f64);
        self.ctx.line_to(self.size.0, y as f64);
        self.ctx.stroke();
    }

    fn draw_sprite(&self, sprite: SpriteId, bounds: &Aabb) -> Result<(), JsValue> {
        let (x, y) = (bounds.left() as f64, bounds.top() as f64);
        let (w, h) = (bounds.size.x as f64, bounds.size.y as f64);

        let img = &self.images[sprite.index()];
        if img.complete() && img.natural_height() != 0 {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)
        } else {
            log::warn!("{:?} sprite not ready, drawing fallback rect", sprite);
            self.ctx.set_fill_style_str(FALLBACK_COLOR);
            self.ctx.fill_rect(x, y, w, h);
            Ok(())
        }
    }
}
