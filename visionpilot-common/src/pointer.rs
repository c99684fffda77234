/// Pointer position mapped to `[-1, 1]` on both axes, (0, 0) at the centre
/// of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parallax {
    pub x: f64,
    pub y: f64,
}

impl Parallax {
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: normalize(client_x, width),
            y: normalize(client_y, height),
        }
    }

    /// CSS translate for a layer moving `depth` pixels at full deflection.
    pub fn translate(&self, depth: f64) -> String {
        format!(
            "transform: translate3d({:.1}px, {:.1}px, 0)",
            self.x * depth,
            self.y * depth
        )
    }
}

fn normalize(position: f64, extent: f64) -> f64 {
    if extent > 0.0 && position.is_finite() {
        (position / extent * 2.0 - 1.0).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_centre() {
        assert_eq!(
            Parallax::from_pointer(0.0, 0.0, 800.0, 600.0),
            Parallax { x: -1.0, y: -1.0 }
        );
        assert_eq!(
            Parallax::from_pointer(400.0, 300.0, 800.0, 600.0),
            Parallax { x: 0.0, y: 0.0 }
        );
        assert_eq!(
            Parallax::from_pointer(800.0, 600.0, 800.0, 600.0),
            Parallax { x: 1.0, y: 1.0 }
        );
    }

    #[test]
    fn test_degenerate_viewport() {
        assert_eq!(Parallax::from_pointer(10.0, 10.0, 0.0, 0.0), Parallax::default());
    }

    #[test]
    fn test_translate() {
        let parallax = Parallax { x: 0.5, y: -1.0 };
        assert_eq!(parallax.translate(20.0), "transform: translate3d(10.0px, -20.0px, 0)");
    }
}
