//! Dial geometry
//!
//! Positions are expressed in canvas units with the dial center at the origin
//! and the y axis pointing up. Angles are degrees clockwise from 12 o'clock,
//! the same convention as [`HandAngles`](super::angles::HandAngles).

use serde::{Deserialize, Serialize};

pub const ROMAN_NUMERALS: [&str; 12] = [
    "XII", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI",
];

pub const MINUTE_TICKS: usize = 60;
pub const HOUR_POSITIONS: usize = 12;

const FULLSCREEN_SCALE: f64 = 1.1;

/// Coarse viewport size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    Compact,
    Wide,
}

impl Breakpoint {
    pub fn from_width(columns: u16, compact_below: u16) -> Self {
        if columns < compact_below {
            Breakpoint::Compact
        } else {
            Breakpoint::Wide
        }
    }
}

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from the center along `angle`.
    pub fn polar(angle: f64, radius: f64) -> Self {
        let theta = angle.to_radians();
        Self {
            x: theta.sin() * radius,
            y: theta.cos() * radius,
        }
    }
}

/// Radius lookup table for one breakpoint
///
/// The canvas is always scaled so the frame fills the area, so the radii
/// alone only shift proportions. The compact table also draws a thinner
/// checkerboard band with fewer, larger squares, which stays legible at
/// braille resolution on a narrow terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialMetrics {
    /// Half the side of the square frame
    pub frame_half: f64,
    /// Inner edge of the checkerboard band as a fraction of `frame_half`
    pub band_inner_ratio: f64,
    /// Checkerboard squares along each side of the band
    pub checker_squares: usize,
    pub face_radius: f64,
    pub face_border: f64,
    pub tick_radius: f64,
    pub marker_radius: f64,
    pub numeral_radius: f64,
    pub scale: f64,
}

impl DialMetrics {
    pub const COMPACT: Self = Self {
        frame_half: 190.0,
        band_inner_ratio: 0.94,
        checker_squares: 12,
        face_radius: 145.0,
        face_border: 10.0,
        tick_radius: 130.0,
        marker_radius: 138.0,
        numeral_radius: 105.0,
        scale: 1.0,
    };

    pub const WIDE: Self = Self {
        frame_half: 320.0,
        band_inner_ratio: 0.9,
        checker_squares: 20,
        face_radius: 250.0,
        face_border: 10.0,
        tick_radius: 225.0,
        marker_radius: 238.0,
        numeral_radius: 180.0,
        scale: 1.0,
    };

    /// Fullscreen always uses the wide table, drawn slightly enlarged.
    pub fn select(breakpoint: Breakpoint, fullscreen: bool) -> Self {
        if fullscreen {
            Self {
                scale: FULLSCREEN_SCALE,
                ..Self::WIDE
            }
        } else {
            match breakpoint {
                Breakpoint::Compact => Self::COMPACT,
                Breakpoint::Wide => Self::WIDE,
            }
        }
    }

    /// Canvas half extent, so the frame fills the view at `scale`.
    pub fn view_half(&self) -> f64 {
        self.frame_half / self.scale
    }

    pub fn inner_frame_half(&self) -> f64 {
        self.frame_half * self.band_inner_ratio
    }

    pub fn minute_ring_radius(&self) -> f64 {
        self.face_radius - self.face_border - 10.0
    }

    pub fn hour_hand_length(&self) -> f64 {
        self.face_radius * 0.6
    }

    pub fn minute_hand_length(&self) -> f64 {
        self.face_radius * 0.88
    }

    pub fn second_hand_length(&self) -> f64 {
        self.face_radius * 0.96
    }

    /// Distance of the second hand's counterweight below the center
    pub fn second_tail_length(&self) -> f64 {
        24.0
    }

    pub fn center_pin_radius(&self) -> f64 {
        16.0
    }

    /// Outer radius of the sunburst pattern
    pub fn mandala_radius(&self) -> f64 {
        self.face_radius * 0.65
    }
}

/// One minute tick, as a radial segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub angle: f64,
    pub inner: Point,
    pub outer: Point,
    pub emphasized: bool,
}

/// The 60 minute ticks; every 5th one is longer and emphasized.
pub fn minute_ticks(metrics: &DialMetrics) -> Vec<Tick> {
    (0..MINUTE_TICKS)
        .map(|i| {
            let angle = i as f64 * 6.0;
            let emphasized = i % 5 == 0;
            let half = if emphasized { 16.0 } else { 8.0 };
            Tick {
                angle,
                inner: Point::polar(angle, metrics.tick_radius - half),
                outer: Point::polar(angle, metrics.tick_radius + half),
                emphasized,
            }
        })
        .collect()
}

/// Centers of the 12 ornamental star markers
pub fn ornament_markers(metrics: &DialMetrics) -> Vec<Point> {
    (0..HOUR_POSITIONS)
        .map(|i| Point::polar(i as f64 * 30.0, metrics.marker_radius))
        .collect()
}

/// Outline of a four-point star centered on `center`, as closed segments.
pub fn star_outline(center: Point, size: f64) -> Vec<(Point, Point)> {
    let long = size;
    let short = size * 0.15;
    let tips = [0.0, 90.0, 180.0, 270.0];
    let mut segments = Vec::with_capacity(8);
    for tip in tips {
        let apex = offset(center, Point::polar(tip, long));
        let left = offset(center, Point::polar(tip - 45.0, short));
        let right = offset(center, Point::polar(tip + 45.0, short));
        segments.push((left, apex));
        segments.push((apex, right));
    }
    segments
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumeralPlacement {
    pub label: &'static str,
    pub angle: f64,
    /// Where the center of the label goes
    pub center: Point,
}

pub fn numerals(metrics: &DialMetrics) -> Vec<NumeralPlacement> {
    ROMAN_NUMERALS
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let angle = i as f64 * 30.0;
            NumeralPlacement {
                label,
                angle,
                center: Point::polar(angle, metrics.numeral_radius),
            }
        })
        .collect()
}

/// A hand drawn from `tail` (behind the center) to `tip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSegment {
    pub tail: Point,
    pub tip: Point,
}

pub fn hand(angle: f64, length: f64, tail: f64) -> HandSegment {
    HandSegment {
        tail: Point::polar(angle + 180.0, tail),
        tip: Point::polar(angle, length),
    }
}

/// Sunburst petals: 24 spokes every 15 degrees, from `inner` to `outer`.
pub fn sunburst(inner: f64, outer: f64) -> Vec<(Point, Point)> {
    (0..24)
        .map(|i| {
            let angle = i as f64 * 15.0;
            (Point::polar(angle, inner), Point::polar(angle, outer))
        })
        .collect()
}

fn offset(a: Point, b: Point) -> Point {
    Point::new(a.x + b.x, a.y + b.y)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    #[case(79, 100, Breakpoint::Compact)]
    #[case(99, 100, Breakpoint::Compact)]
    #[case(100, 100, Breakpoint::Wide)]
    #[case(240, 100, Breakpoint::Wide)]
    fn test_breakpoint(#[case] columns: u16, #[case] threshold: u16, #[case] want: Breakpoint) {
        assert_eq!(Breakpoint::from_width(columns, threshold), want);
    }

    #[rstest]
    #[case(Breakpoint::Compact, false, 130.0, 138.0, 105.0, 1.0)]
    #[case(Breakpoint::Wide, false, 225.0, 238.0, 180.0, 1.0)]
    #[case(Breakpoint::Compact, true, 225.0, 238.0, 180.0, 1.1)]
    #[case(Breakpoint::Wide, true, 225.0, 238.0, 180.0, 1.1)]
    fn test_metrics_lookup(
        #[case] breakpoint: Breakpoint,
        #[case] fullscreen: bool,
        #[case] tick: f64,
        #[case] marker: f64,
        #[case] numeral: f64,
        #[case] scale: f64,
    ) {
        let m = DialMetrics::select(breakpoint, fullscreen);
        assert_eq!(m.tick_radius, tick);
        assert_eq!(m.marker_radius, marker);
        assert_eq!(m.numeral_radius, numeral);
        assert_eq!(m.scale, scale);
    }

    #[test]
    fn test_polar_convention() {
        let top = Point::polar(0.0, 10.0);
        assert!(top.x.abs() < EPSILON && (top.y - 10.0).abs() < EPSILON);

        let right = Point::polar(90.0, 10.0);
        assert!((right.x - 10.0).abs() < EPSILON && right.y.abs() < EPSILON);

        let bottom = Point::polar(180.0, 10.0);
        assert!(bottom.x.abs() < EPSILON && (bottom.y + 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_minute_ticks() {
        let ticks = minute_ticks(&DialMetrics::WIDE);
        assert_eq!(ticks.len(), 60);

        let emphasized: Vec<_> = ticks.iter().filter(|t| t.emphasized).collect();
        assert_eq!(emphasized.len(), 12);
        for tick in emphasized {
            assert!((tick.angle % 30.0).abs() < EPSILON);
        }

        // centered on the tick radius
        for tick in &ticks {
            let inner = tick.inner.x.hypot(tick.inner.y);
            let outer = tick.outer.x.hypot(tick.outer.y);
            assert!(((inner + outer) / 2.0 - 225.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_numeral_positions() {
        let placements = numerals(&DialMetrics::COMPACT);
        assert_eq!(placements.len(), 12);

        let twelve = placements[0];
        assert_eq!(twelve.label, "XII");
        assert!(twelve.center.x.abs() < EPSILON);
        assert!((twelve.center.y - 105.0).abs() < EPSILON);

        let three = placements[3];
        assert_eq!(three.label, "III");
        assert!((three.center.x - 105.0).abs() < EPSILON);
        assert!(three.center.y.abs() < EPSILON);
    }

    #[test]
    fn test_ornament_markers() {
        let markers = ornament_markers(&DialMetrics::WIDE);
        assert_eq!(markers.len(), 12);
        for marker in markers {
            assert!((marker.x.hypot(marker.y) - 238.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_star_outline_is_closed() {
        let segments = star_outline(Point::new(5.0, 5.0), 7.0);
        assert_eq!(segments.len(), 8);
        // tips reach `size` from the center
        let (_, apex) = segments[0];
        assert!((apex.x - 5.0).abs() < EPSILON && (apex.y - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_hand_segment() {
        let segment = hand(90.0, 100.0, 20.0);
        assert!((segment.tip.x - 100.0).abs() < EPSILON);
        assert!((segment.tail.x + 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_hand_lengths_fit_inside_ring() {
        for metrics in [DialMetrics::COMPACT, DialMetrics::WIDE] {
            assert!(metrics.hour_hand_length() < metrics.minute_hand_length());
            assert!(metrics.minute_hand_length() < metrics.second_hand_length());
            assert!(metrics.second_hand_length() < metrics.face_radius);
        }
    }

    #[test]
    fn test_compact_band_is_thinner_and_coarser() {
        let compact = DialMetrics::COMPACT;
        let wide = DialMetrics::WIDE;
        let band = |m: &DialMetrics| (m.frame_half - m.inner_frame_half()) / m.frame_half;

        assert!(band(&compact) < band(&wide));
        assert!(compact.checker_squares < wide.checker_squares);
        assert!(compact.inner_frame_half() > compact.face_radius);
        assert_eq!(DialMetrics::select(Breakpoint::Compact, true).checker_squares, 20);
    }

    #[test]
    fn test_view_half_accounts_for_scale() {
        let m = DialMetrics::select(Breakpoint::Wide, true);
        assert!((m.view_half() - 320.0 / 1.1).abs() < EPSILON);
    }
}
