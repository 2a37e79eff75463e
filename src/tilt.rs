/// Maximum tilt, in degrees, reached at the card corners is half of this.
pub const TILT_SCALE_DEG: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for Bounds {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// 3D rotation applied to the card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn from_pointer(x: f64, y: f64, bounds: Bounds) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::FLAT;
        }
        let nx = (x - bounds.left) / bounds.width - 0.5;
        let ny = (y - bounds.top) / bounds.height - 0.5;
        Self {
            rotate_x: ny * TILT_SCALE_DEG,
            rotate_y: -nx * TILT_SCALE_DEG,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "transform: rotateX({}deg) rotateY({}deg);",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Front/back state of the glass card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipState {
    flipped: bool,
}

impl FlipState {
    pub fn toggled(self) -> Self {
        Self {
            flipped: !self.flipped,
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 600.0,
        height: 400.0,
    };

    #[test]
    fn center_is_flat() {
        assert_eq!(Tilt::from_pointer(400.0, 250.0, CARD), Tilt::FLAT);
    }

    #[test]
    fn top_left_corner_reaches_full_tilt() {
        let tilt = Tilt::from_pointer(CARD.left, CARD.top, CARD);
        assert_eq!(tilt.rotate_x, -TILT_SCALE_DEG / 2.0);
        assert_eq!(tilt.rotate_y, TILT_SCALE_DEG / 2.0);
    }

    #[test]
    fn bottom_right_corner_mirrors_top_left() {
        let tilt = Tilt::from_pointer(CARD.left + CARD.width, CARD.top + CARD.height, CARD);
        assert_eq!(tilt.rotate_x, TILT_SCALE_DEG / 2.0);
        assert_eq!(tilt.rotate_y, -TILT_SCALE_DEG / 2.0);
    }

    #[test]
    fn zero_sized_bounds_do_not_tilt() {
        let empty = Bounds { width: 0.0, ..CARD };
        assert_eq!(Tilt::from_pointer(10.0, 10.0, empty), Tilt::FLAT);
    }

    #[test]
    fn transform_renders_both_axes() {
        let tilt = Tilt { rotate_x: -10.0, rotate_y: 5.0 };
        assert_eq!(tilt.transform(), "transform: rotateX(-10deg) rotateY(5deg);");
    }

    #[test]
    fn flip_starts_face_up() {
        assert!(!FlipState::default().is_flipped());
        assert!(FlipState::default().toggled().is_flipped());
    }

    proptest! {
        #[test]
        fn pointer_inside_card_stays_within_half_scale(fx in 0.0f64..=1.0, fy in 0.0f64..=1.0) {
            let tilt = Tilt::from_pointer(CARD.left + fx * CARD.width, CARD.top + fy * CARD.height, CARD);
            let limit = TILT_SCALE_DEG / 2.0 + 1e-9;
            prop_assert!(tilt.rotate_x.abs() <= limit);
            prop_assert!(tilt.rotate_y.abs() <= limit);
        }

        #[test]
        fn double_flip_is_identity(start in any::<bool>()) {
            let state = if start { FlipState::default().toggled() } else { FlipState::default() };
            prop_assert_eq!(state.toggled().toggled(), state);
        }
    }
}
