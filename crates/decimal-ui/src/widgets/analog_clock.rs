use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::scene::shapes::{CircleCmd, TextCmd};
use decimal_engine::scene::{FontFamily, Glow, Stroke};
use decimal_time::DecimalTime;

use crate::layout::FaceLayout;
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::digital_readout::DigitalReadout;

const READOUT_SIZE: f32 = 18.0;

/// Analog decimal clock face.
///
/// Paint order, back to front:
/// 1. day-progress ring (track, filled arc, leading dot)
/// 2. dial background, 100 tick marks, numerals `0`–`9`
/// 3. hour, minute and second hands, center cap
/// 4. optional small digital readout below the center
pub struct AnalogClock {
    time: DecimalTime,
    size: f32,
    show_digital: bool,
}

impl AnalogClock {
    pub fn new(time: DecimalTime, size: f32) -> Self {
        Self { time, size, show_digital: true }
    }

    pub fn show_digital(mut self, v: bool) -> Self { self.show_digital = v; self }

    pub fn layout(&self) -> FaceLayout {
        FaceLayout::new(self.size)
    }
}

impl Widget for AnalogClock {
    fn measure(&self, _max_width: f32) -> Vec2 {
        Vec2::new(self.size, self.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let layout = self.layout();
        let c = rect.center();
        let p = painter.palette;
        let percent = self.time.percent_of_day;

        // Ring
        painter.circle(CircleCmd::new(c, layout.outer_radius).stroke(Stroke::new(3.0, p.border.with_opacity(0.15))));
        painter.arc(
            c,
            layout.outer_radius,
            0.0,
            percent as f32 * 3.6,
            Stroke::new(3.0, p.accent),
            Some(Glow::new(6.0, p.accent_glow)),
        );
        painter.circle(
            CircleCmd::new(layout.progress_dot(c, percent), 4.0)
                .fill(p.accent)
                .glow(Glow::new(8.0, p.accent)),
        );

        // Dial
        painter.fill_circle(c, layout.dial_radius + 5.0, p.bg_primary.with_opacity(0.4));
        for tick in layout.ticks(c) {
            let stroke = Stroke::new(tick.kind.width(), p.text_primary.with_opacity(tick.kind.opacity()));
            painter.line(tick.inner, tick.outer, stroke, None);
        }
        for (hour, pos) in layout.numerals(c) {
            painter.text(
                TextCmd::new(hour.to_string(), pos, 14.0, p.text_secondary)
                    .family(FontFamily::Mono)
                    .weight(500),
            );
        }

        // Hands
        let hands = layout.hands(c, &self.time);
        painter.line(c, hands.hour, Stroke::new(5.0, p.text_primary), None);
        painter.line(c, hands.minute, Stroke::new(3.0, p.text_primary.with_opacity(0.85)), None);
        painter.line(c, hands.second_tail, Stroke::new(2.5, p.accent.with_opacity(0.7)), None);
        painter.line(c, hands.second, Stroke::new(1.5, p.accent), Some(Glow::new(4.0, p.accent_glow)));
        painter.circle(CircleCmd::new(hands.second_tip, 3.5).fill(p.accent).glow(Glow::new(4.0, p.accent)));

        painter.circle(CircleCmd::new(c, 9.0).fill(p.bg_elevated).stroke(Stroke::new(2.0, p.border)));
        painter.circle(CircleCmd::new(c, 4.0).fill(p.accent).glow(Glow::new(4.0, p.accent_glow)));

        if self.show_digital {
            let readout = DigitalReadout::new(self.time).size(READOUT_SIZE);
            let m = readout.measure(self.size);
            let digits_y = rect.origin.y + self.size * 0.8 - 24.0;
            let top = digits_y - READOUT_SIZE * 0.6;
            readout.paint(painter, Rect::new(c.x - m.x / 2.0, top, m.x, m.y));
        }
    }
}
