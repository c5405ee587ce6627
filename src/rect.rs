use crate::layout::Margins;
use crate::units::*;

/// A rectangle on the label canvas, specified by its top-left corner and its size. The canvas
/// origin is the top-left corner, with y growing downwards, as in SVG.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: Pt,
    /// The y-coordinate of the top edge.
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Rect {
    pub fn new<D: Into<Pt>>(x: D, y: D, width: D, height: D) -> Rect {
        Rect {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    /// A square with its top-left corner at the origin
    pub fn square(size: Pt) -> Rect {
        Rect {
            x: Pt(0.0),
            y: Pt(0.0),
            width: size,
            height: size,
        }
    }

    /// The rectangle left over once the margins are taken off each side. Never negative in
    /// size.
    pub fn inset(&self, margins: &Margins) -> Rect {
        Rect {
            x: self.x + margins.left,
            y: self.y + margins.top,
            width: (self.width - margins.left - margins.right).max(Pt(0.0)),
            height: (self.height - margins.top - margins.bottom).max(Pt(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insetting_shrinks_from_every_side() {
        let zone = Rect::new(Pt(0.0), Pt(256.0), Pt(512.0), Pt(256.0));
        let inner = zone.inset(&Margins::all(Pt(10.0)));
        assert_eq!(inner, Rect::new(Pt(10.0), Pt(266.0), Pt(492.0), Pt(236.0)));
    }

    #[test]
    fn insetting_never_goes_negative() {
        let zone = Rect::square(Pt(12.0));
        let inner = zone.inset(&Margins::all(Pt(10.0)));
        assert_eq!(inner.width, Pt(0.0));
        assert_eq!(inner.height, Pt(0.0));
    }
}
