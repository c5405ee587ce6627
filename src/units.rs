use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length on the label canvas. One unit is one pixel of the rendered raster, and also one
/// user unit of the generated SVG document.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}")]
pub struct Pt(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    pub fn floor(self) -> Pt {
        Pt(self.0.floor())
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for f32 {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self * rhs.0)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl From<u32> for Pt {
    fn from(value: u32) -> Self {
        Pt(value as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_points() {
        let a = Pt(10.0) + Pt(2.5);
        assert_eq!(a, Pt(12.5));
        assert_eq!(a * 2.0, Pt(25.0));
        assert_eq!(2.0 * a, Pt(25.0));
        assert_eq!(a / 5.0, Pt(2.5));
        assert_eq!(Pt(9.0) / Pt(3.0), 3.0);
        assert_eq!([Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum::<Pt>(), Pt(6.0));
    }
}
