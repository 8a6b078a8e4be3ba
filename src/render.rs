use image::{ImageBuffer, Rgba};
use std::error::Error;

/// A square RGBA launcher icon held in memory until it is saved.
pub type Icon = ImageBuffer<Rgba<u8>, Vec<u8>>;

const BACKGROUND: Rgba<u8> = Rgba([26, 26, 46, 255]); // Dark navy backdrop
const TOILET: Rgba<u8> = Rgba([139, 69, 19, 255]); // Brown toilet body
const LENS: Rgba<u8> = Rgba([47, 79, 79, 255]); // Slate camera lens
const INNER_LENS: Rgba<u8> = Rgba([255, 255, 255, 255]); // White lens highlight

/// A rectangle with rounded corners, bounds inclusive on all four edges.
struct RoundedRect {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    radius: u32,
}

impl RoundedRect {
    fn contains(&self, x: u32, y: u32) -> bool {
        if x < self.left || x > self.right || y < self.top || y > self.bottom {
            return false;
        }
        let r = self.radius as i64;
        if r == 0 {
            return true;
        }
        // Pixels outside the corner squares are always inside the shape;
        // corner pixels must fall within the arc around the corner center.
        let x = x as i64;
        let y = y as i64;
        let cx = if x < self.left as i64 + r {
            self.left as i64 + r
        } else if x > self.right as i64 - r {
            self.right as i64 - r
        } else {
            return true;
        };
        let cy = if y < self.top as i64 + r {
            self.top as i64 + r
        } else if y > self.bottom as i64 - r {
            self.bottom as i64 - r
        } else {
            return true;
        };
        let dx = x - cx;
        let dy = y - cy;
        dx * dx + dy * dy <= r * r
    }
}

/// A filled circle described by its inclusive bounding box: `edge + 1` pixels
/// across, top-left corner at (left, top).
struct CircleBox {
    left: u32,
    top: u32,
    edge: u32,
}

impl CircleBox {
    fn contains(&self, x: u32, y: u32) -> bool {
        let radius = self.edge as f32 / 2.0;
        let center_x = self.left as f32 + radius;
        let center_y = self.top as f32 + radius;
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        dx * dx + dy * dy <= radius * radius
    }
}

/// Renders one square launcher icon: a rounded-rectangle toilet body anchored
/// low on a dark background, with a camera lens circle in the top-right corner
/// and a white inner lens centered inside it.
///
/// All measurements derive from `size` by integer division, so the same size
/// always produces byte-identical pixel data.
pub fn render_icon(size: u32) -> Result<Icon, Box<dyn Error>> {
    if size == 0 {
        return Err("icon size must be a positive number of pixels".into());
    }

    // Toilet body: symmetric left/right margins, double margin on top so the
    // shape sits low in the frame.
    let toilet_margin = size / 6;
    let toilet = RoundedRect {
        left: toilet_margin,
        top: toilet_margin * 2,
        right: size - toilet_margin,
        bottom: size - toilet_margin,
        radius: size / 10,
    };

    // Camera lens: inset from the top-right corner by size/8 on both axes.
    let lens_size = size / 4;
    let lens_left = size - lens_size - size / 8;
    let lens_top = size / 8;
    let lens = CircleBox {
        left: lens_left,
        top: lens_top,
        edge: lens_size,
    };

    // Inner lens: half the lens diameter, centered within the outer circle.
    let inner = CircleBox {
        left: lens_left + lens_size / 4,
        top: lens_top + lens_size / 4,
        edge: lens_size / 2,
    };

    let mut image = ImageBuffer::from_pixel(size, size, BACKGROUND);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        // Later shapes paint over earlier ones, so test topmost first.
        if inner.contains(x, y) {
            *pixel = INNER_LENS;
        } else if lens.contains(x, y) {
            *pixel = LENS;
        } else if toilet.contains(x, y) {
            *pixel = TOILET;
        }
    }
    Ok(image)
}
