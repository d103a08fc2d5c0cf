/// Maps linear progress onto eased progress. Every curve fixes 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    Cubic(f32, f32, f32, f32),
}

impl Curve {
    /// `t` is clamped to `[0.0, 1.0]` first.
    pub fn transform(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t * t,
            Curve::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Curve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Curve::Cubic(x1, y1, x2, y2) => {
                let s = bezier_param_for_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

/// One axis of a cubic bezier anchored at 0 and 1.
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Newton iterations, then bisection if the slope flattens out.
fn bezier_param_for_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut s = x;

    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;

        if err.abs() < 1e-6 {
            return s;
        }

        let slope = bezier_slope(s, x1, x2);

        if slope.abs() < 1e-6 {
            break;
        }

        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;

    for _ in 0..32 {
        let value = bezier(s, x1, x2);

        if (value - x).abs() < 1e-6 {
            break;
        }

        if value < x {
            lo = s;
        } else {
            hi = s;
        }

        s = (lo + hi) / 2.0;
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Curve; 5] = [
        Curve::Linear,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::Cubic(0.42, 0.0, 0.58, 1.0),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for curve in ALL {
            assert!(curve.transform(0.0).abs() < 1e-5, "{curve:?} at 0");
            assert!((curve.transform(1.0) - 1.0).abs() < 1e-5, "{curve:?} at 1");
        }
    }

    #[test]
    fn monotonic() {
        for curve in ALL {
            let mut prev = curve.transform(0.0);

            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let value = curve.transform(t);
                assert!(value >= prev - 1e-5, "{curve:?} dips at t={t}");
                prev = value;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Curve::Linear.transform(-0.5), 0.0);
        assert_eq!(Curve::EaseOut.transform(3.0), 1.0);
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(Curve::EaseIn.transform(0.3) < 0.3);
        assert!(Curve::EaseOut.transform(0.3) > 0.3);
        assert!((Curve::EaseInOut.transform(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn straight_bezier_is_linear() {
        let curve = Curve::Cubic(0.0, 0.0, 1.0, 1.0);

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((curve.transform(t) - t).abs() < 0.01, "at t={t}");
        }
    }
}
