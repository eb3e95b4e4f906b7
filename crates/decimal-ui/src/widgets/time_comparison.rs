use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::scene::shapes::TextCmd;
use decimal_engine::scene::{FontFamily, Stroke};
use decimal_time::{format_percent_of_day, format_standard_time, DecimalTime, StandardTime};

use crate::painter::Painter;
use crate::widget::Widget;

const VALUE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 11.0;
const MAX_WIDTH: f32 = 320.0;

/// Side-by-side standard wall-clock time and day progress.
pub struct TimeComparison {
    standard: StandardTime,
    decimal: DecimalTime,
}

impl TimeComparison {
    pub fn new(standard: StandardTime, decimal: DecimalTime) -> Self {
        Self { standard, decimal }
    }

    /// `(value, label)` for each block, left to right.
    pub fn blocks(&self) -> [(String, &'static str); 2] {
        [
            (format_standard_time(&self.standard), "Standard Time"),
            (format_percent_of_day(&self.decimal), "Day Progress"),
        ]
    }
}

impl Widget for TimeComparison {
    fn measure(&self, max_width: f32) -> Vec2 {
        Vec2::new(max_width.min(MAX_WIDTH), VALUE_SIZE * 1.4 + 6.0 + LABEL_SIZE * 1.4)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let p = painter.palette;
        let half = rect.size.x / 2.0;
        let value_y = rect.origin.y + VALUE_SIZE * 0.7;
        let label_y = rect.origin.y + VALUE_SIZE * 1.4 + 6.0 + LABEL_SIZE * 0.7;

        for (i, (value, label)) in self.blocks().into_iter().enumerate() {
            let x = rect.origin.x + half * (i as f32 + 0.5);
            painter.text(
                TextCmd::new(value, Vec2::new(x, value_y), VALUE_SIZE, p.text_primary)
                    .family(FontFamily::Mono)
                    .weight(500),
            );
            painter.text(
                TextCmd::new(label.to_uppercase(), Vec2::new(x, label_y), LABEL_SIZE, p.text_muted)
                    .weight(500)
                    .letter_spacing(0.08),
            );
        }

        let mid = rect.origin.x + half;
        painter.line(
            Vec2::new(mid, rect.origin.y + 4.0),
            Vec2::new(mid, rect.max().y - 4.0),
            Stroke::new(1.0, p.border),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use decimal_engine::scene::{DrawCmd, DrawList};
    use decimal_engine::theme::Theme;
    use decimal_time::to_decimal_time;

    use super::*;

    #[test]
    fn shows_wall_clock_and_progress() {
        let standard = StandardTime::new(18, 30, 5, 0).unwrap();
        let widget = TimeComparison::new(standard, to_decimal_time(&standard));

        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, Theme::Sunset.palette());
        widget.paint(&mut painter, Rect::new(0.0, 0.0, 320.0, 50.0));

        let texts: Vec<String> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["18:30:05", "STANDARD TIME", "77.09%", "DAY PROGRESS"]);
    }

    #[test]
    fn width_is_capped() {
        let standard = StandardTime::MIDNIGHT;
        let widget = TimeComparison::new(standard, to_decimal_time(&standard));
        assert_eq!(widget.measure(1000.0).x, MAX_WIDTH);
        assert_eq!(widget.measure(200.0).x, 200.0);
    }
}
