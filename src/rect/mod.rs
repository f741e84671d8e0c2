use super::point::Point2D;

// An axis-aligned rectangle, y growing towards `top`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64
}

impl Rect {
    // A zero sized rect sitting on the point.
    pub fn from_point(p: Point2D) -> Rect
    {
        Rect {
            left: p.x,
            right: p.x,
            top: p.y,
            bottom: p.y
        }
    }

    // Minimum bounding box of the points, or None if there aren't any.
    pub fn from_points<I: IntoIterator<Item = Point2D>>(points: I) -> Option<Rect>
    {
        let mut points = points.into_iter();
        let first = Rect::from_point(points.next()?);
        Some(points.fold(first, |rect, p| rect.encapsulate(p)))
    }

    // We expand the rect to be the minimum axis aligned bounding box that holds both our current rect and the point.
    pub fn encapsulate(&self, p: Point2D) -> Rect
    {
        let mut lx = self.left;
        let mut ly = self.bottom;
        let mut hx = self.right;
        let mut hy = self.top;

        if p.x > hx { hx = p.x }
        if p.y > hy { hy = p.y }
        if p.x < lx { lx = p.x }
        if p.y < ly { ly = p.y }

        return Rect {
            left: lx,
            right: hx,
            top: hy,
            bottom: ly
        };
    }

    pub fn encapsulate_rect(&self, other: Rect) -> Rect
    {
        let left_bottom = Point2D { x: other.left, y: other.bottom };
        let right_top = Point2D { x: other.right, y: other.top };
        return self.encapsulate(left_bottom).encapsulate(right_top)
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    pub fn width(&self) -> f64 {
        f64::abs(self.left - self.right)
    }

    pub fn height(&self) -> f64 {
        f64::abs(self.top - self.bottom)
    }

    pub fn center(&self) -> Point2D {
        let left_bottom = Point2D::from_components(self.left, self.bottom);
        let right_top = Point2D::from_components(self.right, self.top);

        return left_bottom.lerp(right_top, 0.5);
    }
}
