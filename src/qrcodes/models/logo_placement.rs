pub const PLATE_PADDING: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl LogoPlacement {
    pub fn centered(surface_width: u32, width: u32, height: u32) -> Self {
        Self {
            x: (surface_width as i64 - width as i64).div_euclid(2),
            y: (surface_width as i64 - height as i64).div_euclid(2),
            width,
            height,
        }
    }

    /// The plate rectangle as `(x, y, width, height)`.
    pub fn plate(&self) -> (i64, i64, u32, u32) {
        (
            self.x - PLATE_PADDING as i64,
            self.y - PLATE_PADDING as i64,
            self.width + 2 * PLATE_PADDING,
            self.height + 2 * PLATE_PADDING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_logo_on_surface() {
        let placement = LogoPlacement::centered(300, 40, 40);

        assert_eq!((placement.x, placement.y), (130, 130));
        assert_eq!(placement.plate(), (128, 128, 44, 44));
    }

    #[test]
    fn centers_within_rounding_for_odd_sizes() {
        let placement = LogoPlacement::centered(301, 50, 31);

        assert_eq!(placement.x, 125);
        assert_eq!(placement.y, 135);
        assert!((placement.x as f64 + 25.0 - 150.5).abs() <= 0.5);
        assert!((placement.y as f64 + 15.5 - 150.5).abs() <= 0.5);
    }

    #[test]
    fn oversized_logo_gets_negative_origin() {
        let placement = LogoPlacement::centered(100, 121, 120);

        assert_eq!((placement.x, placement.y), (-11, -10));
    }
}
