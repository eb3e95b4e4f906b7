//! SVG output backend.
//!
//! Walks a [`DrawList`] in paint order and emits one SVG element per draw
//! command. Glows become `feDropShadow` filters declared just before the
//! element that uses them.

use decimal_engine::coords::Vec2;
use decimal_engine::paint::Color;
use decimal_engine::scene::shapes::{ArcCmd, CircleCmd, LineCmd, RectCmd, TextCmd};
use decimal_engine::scene::{DrawCmd, DrawList, FontFamily, Glow, LineCap, Stroke, TextAnchor};

/// Serializes `draw_list` into a standalone SVG document of `viewport` size.
pub fn render_svg(draw_list: &mut DrawList, viewport: Vec2) -> String {
    let mut out = SvgWriter::new(viewport);
    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Rect(cmd) => out.rect(cmd),
            DrawCmd::Circle(cmd) => out.circle(cmd),
            DrawCmd::Arc(cmd) => out.arc(cmd),
            DrawCmd::Line(cmd) => out.line(cmd),
            DrawCmd::Text(cmd) => out.text(cmd),
        }
    }
    out.finish()
}

struct SvgWriter {
    buf: String,
    viewport: Vec2,
    next_filter: u32,
}

impl SvgWriter {
    fn new(viewport: Vec2) -> Self {
        let (w, h) = (num(viewport.x), num(viewport.y));
        let buf = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        Self { buf, viewport, next_filter: 0 }
    }

    fn finish(mut self) -> String {
        self.buf.push_str("</svg>\n");
        self.buf
    }

    // ── elements ──────────────────────────────────────────────────────────

    fn rect(&mut self, cmd: &RectCmd) {
        let r = cmd.rect;
        self.buf.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            num(r.origin.x),
            num(r.origin.y),
            num(r.size.x),
            num(r.size.y),
        ));
        if cmd.corner_radius > 0.0 {
            self.buf.push_str(&format!(" rx=\"{}\"", num(cmd.corner_radius)));
        }
        self.buf.push_str(&fill_attrs(Some(cmd.fill)));
        if let Some(stroke) = &cmd.stroke {
            self.buf.push_str(&stroke_attrs(stroke));
        }
        self.buf.push_str("/>\n");
    }

    fn circle(&mut self, cmd: &CircleCmd) {
        let filter = self.glow_filter(cmd.glow.as_ref());
        self.buf.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            num(cmd.center.x),
            num(cmd.center.y),
            num(cmd.radius),
        ));
        self.buf.push_str(&fill_attrs(cmd.fill));
        if let Some(stroke) = &cmd.stroke {
            self.buf.push_str(&stroke_attrs(stroke));
        }
        self.buf.push_str(&filter);
        self.buf.push_str("/>\n");
    }

    fn arc(&mut self, cmd: &ArcCmd) {
        let filter = self.glow_filter(cmd.glow.as_ref());
        if cmd.sweep_deg >= 360.0 {
            self.buf.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\"",
                num(cmd.center.x),
                num(cmd.center.y),
                num(cmd.radius),
            ));
        } else {
            self.buf.push_str(&format!("<path d=\"{}\" fill=\"none\"", arc_path(cmd)));
        }
        self.buf.push_str(&stroke_attrs(&cmd.stroke));
        self.buf.push_str(&filter);
        self.buf.push_str("/>\n");
    }

    fn line(&mut self, cmd: &LineCmd) {
        let filter = self.glow_filter(cmd.glow.as_ref());
        self.buf.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
            num(cmd.from.x),
            num(cmd.from.y),
            num(cmd.to.x),
            num(cmd.to.y),
        ));
        self.buf.push_str(&stroke_attrs(&cmd.stroke));
        self.buf.push_str(&filter);
        self.buf.push_str("/>\n");
    }

    fn text(&mut self, cmd: &TextCmd) {
        let family = match cmd.family {
            FontFamily::Mono => "monospace",
            FontFamily::Sans => "sans-serif",
        };
        let anchor = match cmd.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.buf.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{family}\" font-weight=\"{}\" \
             text-anchor=\"{anchor}\" dominant-baseline=\"central\"",
            num(cmd.origin.x),
            num(cmd.origin.y),
            num(cmd.size),
            cmd.weight,
        ));
        if cmd.letter_spacing != 0.0 {
            self.buf.push_str(&format!(" letter-spacing=\"{}\"", num(cmd.letter_spacing * cmd.size)));
        }
        self.buf.push_str(&fill_attrs(Some(cmd.color)));
        self.buf.push('>');
        self.buf.push_str(&escape(&cmd.text));
        self.buf.push_str("</text>\n");
    }

    /// Declares a drop-shadow filter for `glow` and returns the attribute
    /// that applies it, or an empty string.
    fn glow_filter(&mut self, glow: Option<&Glow>) -> String {
        let Some(glow) = glow else {
            return String::new();
        };
        let id = format!("glow{}", self.next_filter);
        self.next_filter += 1;
        // User-space region: a thin line has a zero-width bounding box.
        self.buf.push_str(&format!(
            "<defs><filter id=\"{id}\" filterUnits=\"userSpaceOnUse\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\">\
             <feDropShadow dx=\"0\" dy=\"0\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/>\
             </filter></defs>\n",
            num(self.viewport.x),
            num(self.viewport.y),
            num(glow.radius / 2.0),
            glow.color.to_hex(),
            num(glow.color.a),
        ));
        format!(" filter=\"url(#{id})\"")
    }
}

/// `M start A r r 0 large 1 end`, drawn clockwise in SVG's y-down space.
fn arc_path(cmd: &ArcCmd) -> String {
    let start = cmd.center.on_dial(cmd.start_deg, cmd.radius);
    let end = cmd.end_point();
    let large = if cmd.sweep_deg > 180.0 { 1 } else { 0 };
    let r = num(cmd.radius);
    format!(
        "M {} {} A {r} {r} 0 {large} 1 {} {}",
        num(start.x),
        num(start.y),
        num(end.x),
        num(end.y),
    )
}

fn fill_attrs(fill: Option<Color>) -> String {
    match fill {
        None => " fill=\"none\"".to_string(),
        Some(c) if c.a >= 1.0 => format!(" fill=\"{}\"", c.to_hex()),
        Some(c) => format!(" fill=\"{}\" fill-opacity=\"{}\"", c.to_hex(), num(c.a)),
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let cap = match stroke.cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
    };
    let mut s = format!(
        " stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{cap}\"",
        stroke.color.to_hex(),
        num(stroke.width),
    );
    if stroke.color.a < 1.0 {
        s.push_str(&format!(" stroke-opacity=\"{}\"", num(stroke.color.a)));
    }
    s
}

/// Up to three decimals, trailing zeros trimmed.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
