//! The clock dial, drawn on a braille canvas

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        angles::HandAngles,
        dial::{self, DialMetrics, HandSegment, Point},
    },
    presentation::config::Styles,
};

const STAR_SIZE: f64 = 9.0;
const CORNER_ARM: f64 = 36.0;
const COUNTERWEIGHT_RADIUS: f64 = 6.0;

/// Renders the full dial: frame, face, markings and hands.
pub struct DialWidget<'a> {
    angles: HandAngles,
    metrics: DialMetrics,
    styles: &'a Styles,
}

impl<'a> DialWidget<'a> {
    pub fn new(angles: HandAngles, metrics: DialMetrics, styles: &'a Styles) -> Self {
        Self {
            angles,
            metrics,
            styles,
        }
    }

    fn color(&self, name: &str) -> Color {
        self.styles.get_or_default(name).fg.unwrap_or(Color::Reset)
    }
}

impl Widget for DialWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let half = self.metrics.view_half();
        // Canvas units covered by one braille dot and by one terminal column
        let dot = half * 2.0 / (f64::from(area.width) * 2.0);
        let column = half * 2.0 / f64::from(area.width);
        let background = self.styles.get_or_default("background").bg;

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half, half])
            .y_bounds([-half, half])
            .paint(|ctx| {
                self.draw_frame(ctx, dot);
                ctx.layer();
                self.draw_face(ctx);
                ctx.layer();
                self.draw_markings(ctx, column);
                ctx.layer();
                self.draw_hands(ctx, dot);
            });
        if let Some(bg) = background {
            canvas = canvas.background_color(bg);
        }
        canvas.render(area, buf);
    }
}

impl DialWidget<'_> {
    fn draw_frame(&self, ctx: &mut Context<'_>, dot: f64) {
        let frame = self.color("frame");
        let outer = self.metrics.frame_half;
        let inner = self.metrics.inner_frame_half();

        for edge in [outer, inner] {
            draw_square(ctx, edge, frame);
        }

        // Two rows of alternating squares fill the band between the edges
        let band = outer - inner;
        let cell = band / 2.0;
        let squares = self.metrics.checker_squares;
        let side = outer * 2.0 / squares as f64;
        for i in 0..squares {
            let along = -outer + side * i as f64;
            // the outer row starts filled, the inner row starts empty
            let (near, far) = if i % 2 == 0 {
                (outer - cell, -outer)
            } else {
                (outer - band, -outer + cell)
            };
            fill_rect(ctx, along, near, side, cell, dot, frame);
            fill_rect(ctx, along, far, side, cell, dot, frame);
            fill_rect(ctx, far, along, cell, side, dot, frame);
            fill_rect(ctx, near, along, cell, side, dot, frame);
        }

        // Corner ornaments inside the band
        let corner = inner - 10.0;
        for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
            let origin = Point::new(corner * sx, corner * sy);
            line(
                ctx,
                origin,
                Point::new(origin.x - CORNER_ARM * sx, origin.y),
                frame,
            );
            line(
                ctx,
                origin,
                Point::new(origin.x, origin.y - CORNER_ARM * sy),
                frame,
            );
            let star = Point::new(origin.x - 16.0 * sx, origin.y - 16.0 * sy);
            for (a, b) in dial::star_outline(star, STAR_SIZE) {
                line(ctx, a, b, frame);
            }
        }
    }

    fn draw_face(&self, ctx: &mut Context<'_>) {
        let face = self.color("face");
        let ring = self.color("ring");
        let mandala = self.color("mandala");

        circle(ctx, self.metrics.face_radius, face);
        circle(ctx, self.metrics.face_radius - self.metrics.face_border, face);
        circle(ctx, self.metrics.minute_ring_radius(), ring);

        let outer = self.metrics.mandala_radius();
        let inner = self.metrics.face_radius * 0.2;
        for (a, b) in dial::sunburst(inner, outer) {
            line(ctx, a, b, mandala);
        }
        circle(ctx, outer, mandala);
        circle(ctx, inner, mandala);
    }

    fn draw_markings(&self, ctx: &mut Context<'_>, column: f64) {
        let tick = self.color("tick");
        let tick_major = self.color("tick_major");
        for t in dial::minute_ticks(&self.metrics) {
            let color = if t.emphasized { tick_major } else { tick };
            line(ctx, t.inner, t.outer, color);
        }

        let marker = self.color("marker");
        for center in dial::ornament_markers(&self.metrics) {
            for (a, b) in dial::star_outline(center, STAR_SIZE) {
                line(ctx, a, b, marker);
            }
        }

        let numeral_style = self.styles.get_or_default("numeral");
        for numeral in dial::numerals(&self.metrics) {
            // print() anchors the text's left edge, so shift by half its width
            let width = numeral.label.width() as f64;
            let x = numeral.center.x - width * column / 2.0;
            ctx.print(
                x,
                numeral.center.y,
                Span::styled(numeral.label, numeral_style),
            );
        }
    }

    fn draw_hands(&self, ctx: &mut Context<'_>, dot: f64) {
        let hour = dial::hand(self.angles.hour, self.metrics.hour_hand_length(), 0.0);
        let minute = dial::hand(self.angles.minute, self.metrics.minute_hand_length(), 0.0);
        let second = dial::hand(
            self.angles.second,
            self.metrics.second_hand_length(),
            self.metrics.second_tail_length(),
        );

        thick_hand(ctx, hour, 2, dot, self.color("hour_hand"));
        thick_hand(ctx, minute, 1, dot, self.color("minute_hand"));

        let second_color = self.color("second_hand");
        line(ctx, second.tail, second.tip, second_color);
        ctx.draw(&Circle {
            x: second.tail.x,
            y: second.tail.y,
            radius: COUNTERWEIGHT_RADIUS,
            color: second_color,
        });

        let pin = self.color("center_pin");
        circle(ctx, self.metrics.center_pin_radius(), pin);
        circle(ctx, self.metrics.center_pin_radius() / 2.0, pin);
    }
}

fn line(ctx: &mut Context<'_>, a: Point, b: Point, color: Color) {
    ctx.draw(&CanvasLine {
        x1: a.x,
        y1: a.y,
        x2: b.x,
        y2: b.y,
        color,
    });
}

fn circle(ctx: &mut Context<'_>, radius: f64, color: Color) {
    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius,
        color,
    });
}

fn draw_square(ctx: &mut Context<'_>, half: f64, color: Color) {
    let corners = [
        Point::new(-half, -half),
        Point::new(half, -half),
        Point::new(half, half),
        Point::new(-half, half),
    ];
    for i in 0..corners.len() {
        line(ctx, corners[i], corners[(i + 1) % corners.len()], color);
    }
}

/// Fill an axis-aligned rect with horizontal lines one dot apart.
fn fill_rect(
    ctx: &mut Context<'_>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    dot: f64,
    color: Color,
) {
    let step = dot.max(f64::EPSILON);
    let mut row = y;
    while row <= y + height {
        line(ctx, Point::new(x, row), Point::new(x + width, row), color);
        row += step;
    }
}

/// Draw a hand as `1 + 2 * spread` parallel lines, one dot apart.
fn thick_hand(ctx: &mut Context<'_>, hand: HandSegment, spread: i32, dot: f64, color: Color) {
    let dx = hand.tip.x - hand.tail.x;
    let dy = hand.tip.y - hand.tail.y;
    let len = dx.hypot(dy);
    if len <= f64::EPSILON {
        return;
    }
    let (nx, ny) = (-dy / len * dot, dx / len * dot);
    for k in -spread..=spread {
        let k = f64::from(k);
        line(
            ctx,
            Point::new(hand.tail.x + nx * k, hand.tail.y + ny * k),
            Point::new(hand.tip.x + nx * k, hand.tip.y + ny * k),
            color,
        );
    }
}
