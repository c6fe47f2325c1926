use super::point::PointF32;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectF32 {
    // centerpoint
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectF32 {
    pub fn from_center(xc: f32, yc: f32, w: f32, h: f32) -> RectF32 {
        RectF32 { x: xc, y: yc, w, h }
    }

    pub fn from_tl(x: f32, y: f32, w: f32, h: f32) -> RectF32 {
        RectF32 {
            x: x + w / 2.,
            y: y + h / 2.,
            w,
            h,
        }
    }

    pub fn center(&self) -> PointF32 {
        PointF32 {
            x: self.x,
            y: self.y,
        }
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }
}
