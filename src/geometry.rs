/// Axis-aligned pixel rectangle, `x`/`y` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Splits a `width` x `height` image at its floored midpoints.
///
/// Order is top-left, top-right, bottom-left, bottom-right. Odd remainders go
/// to the right column and the bottom row.
pub fn quadrants(width: u32, height: u32) -> [Rect; 4] {
    let mid_x = width / 2;
    let mid_y = height / 2;

    [
        Rect::new(0, 0, mid_x, mid_y),
        Rect::new(mid_x, 0, width - mid_x, mid_y),
        Rect::new(0, mid_y, mid_x, height - mid_y),
        Rect::new(mid_x, mid_y, width - mid_x, height - mid_y),
    ]
}
