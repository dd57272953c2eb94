/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect { x, y, width, height }
    }
}

impl Rect<f32> {
    /// Inclusive on the leading edges, exclusive on the trailing ones.
    pub fn contains(&self, point: Pos<f32>) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T: Default> Size<T> {
    pub fn zero() -> Self {
        Size {
            width: T::default(),
            height: T::default(),
        }
    }
}

impl Size<u32> {
    /// Number of pixels covered, `None` if it does not fit in `usize`.
    pub fn area(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(Pos::new(10.0, 20.0)));
        assert!(rect.contains(Pos::new(39.9, 59.9)));
        assert!(!rect.contains(Pos::new(40.0, 30.0)));
        assert!(!rect.contains(Pos::new(9.9, 30.0)));
    }

    #[test]
    fn test_size_area() {
        assert_eq!(Size::new(10u32, 12u32).area(), Some(120));
        assert_eq!(Size::new(0u32, 12u32).area(), Some(0));
        assert_eq!(Size::<u32>::zero(), Size::new(0, 0));
    }

    #[test]
    fn test_size_area_overflow() {
        let size = Size::new(u32::MAX, u32::MAX);
        if usize::BITS <= 32 {
            assert_eq!(size.area(), None);
        } else {
            assert_eq!(size.area(), Some(u32::MAX as usize * u32::MAX as usize));
        }
    }
}
