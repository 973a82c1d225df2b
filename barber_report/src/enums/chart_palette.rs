use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPalette {
    Viridis,
    CoolWarm,
    Blues,
}

const VIRIDIS_STOPS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

const COOL_WARM_STOPS: [(u8, u8, u8); 5] = [
    (59, 76, 192),
    (141, 176, 254),
    (221, 221, 221),
    (244, 154, 123),
    (180, 4, 38),
];

const BLUES_STOPS: [(u8, u8, u8); 4] = [
    (107, 174, 214),
    (49, 130, 189),
    (8, 81, 156),
    (8, 48, 107),
];

impl ChartPalette {
    fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            ChartPalette::Viridis => &VIRIDIS_STOPS,
            ChartPalette::CoolWarm => &COOL_WARM_STOPS,
            ChartPalette::Blues => &BLUES_STOPS,
        }
    }

    #[doc = r#"
        Color of bar `index` out of `total` bars.

        Bars are spread evenly over the palette: the first bar takes the first stop,
        the last bar the last stop, and the ones in between are linearly interpolated.
    "#]
    pub fn color_at(&self, index: usize, total: usize) -> RGBColor {
        let stops: &[(u8, u8, u8)] = self.stops();

        let t: f64 = if total > 1 {
            index.min(total - 1) as f64 / (total - 1) as f64
        } else {
            0.0
        };

        let scaled: f64 = t * (stops.len() - 1) as f64;
        let lower: usize = (scaled.floor() as usize).min(stops.len() - 1);
        let upper: usize = (lower + 1).min(stops.len() - 1);
        let frac: f64 = scaled - lower as f64;

        let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * frac).round() as u8 };

        let (r0, g0, b0) = stops[lower];
        let (r1, g1, b1) = stops[upper];

        RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_first_and_last_stop() {
        let first = ChartPalette::Viridis.color_at(0, 4);
        let last = ChartPalette::Viridis.color_at(3, 4);

        assert_eq!((first.0, first.1, first.2), VIRIDIS_STOPS[0]);
        assert_eq!((last.0, last.1, last.2), VIRIDIS_STOPS[4]);
    }

    #[test]
    fn single_bar_uses_first_stop() {
        let color = ChartPalette::Blues.color_at(0, 1);
        assert_eq!((color.0, color.1, color.2), BLUES_STOPS[0]);
    }

    #[test]
    fn index_past_total_is_clamped() {
        let clamped = ChartPalette::CoolWarm.color_at(10, 3);
        let last = ChartPalette::CoolWarm.color_at(2, 3);
        assert_eq!((clamped.0, clamped.1, clamped.2), (last.0, last.1, last.2));
    }

    #[test]
    fn palettes_differ() {
        let a = ChartPalette::Viridis.color_at(0, 3);
        let b = ChartPalette::CoolWarm.color_at(0, 3);
        let c = ChartPalette::Blues.color_at(0, 3);
        assert_ne!((a.0, a.1, a.2), (b.0, b.1, b.2));
        assert_ne!((b.0, b.1, b.2), (c.0, c.1, c.2));
    }
}
