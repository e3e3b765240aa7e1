use crate::config;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Bounces the mouse cursor around the screen so the system never sees the
/// input as idle.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseMover {
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

impl MouseMover {
    pub fn new(bounds: PhysicalSize<u32>, origin: [i32; 2], velocity: [i32; 2]) -> Self {
        let mut mover = Self {
            width: 0,
            height: 0,
            x: origin[0],
            y: origin[1],
            dx: velocity[0],
            dy: velocity[1],
        };
        mover.set_bounds(bounds);
        mover
    }

    pub fn from_config(bounds: PhysicalSize<u32>, conf: &config::Mover) -> Self {
        Self::new(bounds, conf.origin, conf.velocity)
    }

    /// Returns the position to put the cursor at now and advances to the next
    /// one, reversing direction on each axis that touched an edge.
    pub fn step(&mut self) -> PhysicalPosition<i32> {
        let pos = self.position();

        self.x = self.x.saturating_add(self.dx);
        self.y = self.y.saturating_add(self.dy);

        if self.x <= 0 || self.x >= self.width - 1 {
            self.dx = self.dx.saturating_neg();
        }
        if self.y <= 0 || self.y >= self.height - 1 {
            self.dy = self.dy.saturating_neg();
        }

        pos
    }

    /// Screen area changed; keep the cursor inside it.
    pub fn set_bounds(&mut self, bounds: PhysicalSize<u32>) {
        self.width = bounds.width.min(i32::MAX as u32) as i32;
        self.height = bounds.height.min(i32::MAX as u32) as i32;
        self.x = self.x.clamp(0, (self.width - 1).max(0));
        self.y = self.y.clamp(0, (self.height - 1).max(0));
    }

    pub fn position(&self) -> PhysicalPosition<i32> {
        PhysicalPosition::new(self.x, self.y)
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn bounds(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.width as u32, self.height as u32)
    }
}
