pub mod bars;
pub mod recommend;
pub mod scatter;

/// Linear mapping from data space to pixel space. Positions outside the
/// domain are clamped to the range so out-of-domain points stay inside
/// the plot area.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        let t = ((value - d0) / (d1 - d0)).clamp(0.0, 1.0);
        r0 + t * (r1 - r0)
    }
}

pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Pixel coordinate formatting, one decimal place.
pub fn fmt_coord(value: f64) -> String {
    format!("{:.1}", value)
}

/// Percent display: whole numbers without a decimal, otherwise one decimal.
/// 98 renders as "98", 12.5 as "12.5".
pub fn fmt_percent(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
