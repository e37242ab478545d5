//! Layered Compositor
//!
//! Z-ordered layers composited into one output buffer. Fun Splash uses a
//! small fixed set: the screen content above the water, and the status line
//! above everything.
//!
//! Layer buffers are origin-based; the layer's bounds place it on screen at
//! composite time. A cell is transparent when it is a bare space with no
//! background color, so the water shows through around cards and sprites.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// One compositing layer
struct Layer {
    bounds: Rect,
    z_index: i32,
    visible: bool,
    buffer: Buffer,
}

impl Layer {
    fn new(bounds: Rect, z_index: i32) -> Self {
        Self {
            bounds,
            z_index,
            visible: true,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
        }
    }
}

/// The compositor owns all layers and blends them into the output buffer
pub struct Compositor {
    layers: Vec<(LayerId, Layer)>,
    next_id: u32,
    output: Buffer,
    area: Rect,
    base: Style,
}

impl Compositor {
    /// Create a compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
            base: Style::default(),
        }
    }

    /// Style painted under all layers (the water)
    pub fn set_base_style(&mut self, style: Style) {
        self.base = style;
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push((id, Layer::new(bounds, z_index)));
        self.layers.sort_by_key(|(_, l)| l.z_index);
        id
    }

    /// Mutable access to a layer's buffer for drawing
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers
            .iter_mut()
            .find(|(lid, _)| *lid == id)
            .map(|(_, l)| &mut l.buffer)
    }

    /// Move a layer to a new position
    pub fn move_layer(&mut self, id: LayerId, x: u16, y: u16) {
        if let Some((_, layer)) = self.layers.iter_mut().find(|(lid, _)| *lid == id) {
            layer.bounds.x = x;
            layer.bounds.y = y;
        }
    }

    /// Resize a layer, discarding its old contents
    pub fn resize_layer(&mut self, id: LayerId, width: u16, height: u16) {
        if let Some((_, layer)) = self.layers.iter_mut().find(|(lid, _)| *lid == id) {
            layer.bounds.width = width;
            layer.bounds.height = height;
            layer.buffer = Buffer::empty(Rect::new(0, 0, width, height));
        }
    }

    /// Show or hide a layer
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some((_, layer)) = self.layers.iter_mut().find(|(lid, _)| *lid == id) {
            layer.visible = visible;
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();
        self.output.set_style(self.area, self.base);

        for (_, layer) in &self.layers {
            if layer.visible {
                Self::blit(&mut self.output, &self.area, layer);
            }
        }

        &self.output
    }

    /// Blit one layer onto the output, skipping transparent cells
    fn blit(output: &mut Buffer, area: &Rect, layer: &Layer) {
        let lb = &layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x + lx;
                let dst_y = lb.y + ly;
                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let src_idx = layer.buffer.index_of(lx, ly);
                if src_idx >= layer.buffer.content.len() {
                    continue;
                }
                let src = &layer.buffer.content[src_idx];

                // Transparent: untouched space with no background fill
                if src.symbol() == " " && src.bg == Color::Reset {
                    continue;
                }

                let dst_idx = output.index_of(dst_x, dst_y);
                if dst_idx < output.content.len() {
                    output.content[dst_idx] = src.clone();
                }
            }
        }
    }
}
