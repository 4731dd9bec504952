/// Degrees of rotation around the horizontal axis at the top/bottom edges.
pub const TILT_RANGE_X: f64 = 14.0;
/// Degrees of rotation around the vertical axis at the left/right edges.
pub const TILT_RANGE_Y: f64 = 16.0;

/// Element geometry as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<web_sys::DomRect> for Bounds {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Rotation pair in degrees, `x` around the horizontal axis and `y` around
/// the vertical one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { x: 0.0, y: 0.0 };

    /// Maps the pointer position onto the element into a tilt pair.
    ///
    /// The offset is normalized to `[0, 1]` on each axis and centred, so the
    /// result stays within `±TILT_RANGE_X / 2` and `±TILT_RANGE_Y / 2`.
    /// Degenerate boxes give the neutral tilt.
    pub fn from_pointer(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        if !(bounds.width > 0.0 && bounds.height > 0.0) {
            return Self::NEUTRAL;
        }
        let nx = normalize(client_x - bounds.left, bounds.width);
        let ny = normalize(client_y - bounds.top, bounds.height);
        Self {
            // pointer at the top tips the panel back
            x: (ny - 0.5) * -TILT_RANGE_X,
            y: (nx - 0.5) * TILT_RANGE_Y,
        }
    }

    /// Returns to the neutral tilt once the pointer leaves the element.
    pub fn reset(&mut self) {
        *self = Self::NEUTRAL;
    }

    /// Inline style feeding the CSS custom properties the stylesheet reads.
    pub fn style(&self) -> String {
        format!(
            "--hero-tilt-x: {}deg; --hero-tilt-y: {}deg",
            trim(self.x),
            trim(self.y)
        )
    }
}

fn normalize(offset: f64, extent: f64) -> f64 {
    (offset / extent).clamp(0.0, 1.0)
}

// keeps the style attribute short and avoids `-0deg`
fn trim(deg: f64) -> f64 {
    let rounded = (deg * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
