//! SVG line chart geometry for the performance comparison view.
//!
//! DESIGN
//! ======
//! Geometry is computed here as plain numbers so the component only emits
//! `<polyline>`/`<line>`/`<text>` nodes. Categories are spaced evenly along
//! the x axis; values map top-down into the padded plot area.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Outer dimensions and padding of the chart viewport, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { width: 640.0, height: 320.0, pad_left: 48.0, pad_right: 24.0, pad_top: 16.0, pad_bottom: 64.0 }
    }
}

impl ChartLayout {
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    /// Y coordinate of the x axis (the zero line).
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.pad_top + self.plot_height()
    }
}

/// Round `max` up to the next 1/2/5 x 10^k step. Non-positive input yields 1.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Scales for a category x value chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub layout: ChartLayout,
    pub categories: usize,
    pub y_max: f64,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(layout: ChartLayout, categories: usize, max_value: f64) -> Self {
        Self { layout, categories, y_max: nice_ceiling(max_value) }
    }

    /// X coordinate of category `index`. A lone category sits mid-plot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize) -> f64 {
        let plot = self.layout.plot_width();
        if self.categories <= 1 {
            return self.layout.pad_left + plot / 2.0;
        }
        self.layout.pad_left + plot * index as f64 / (self.categories - 1) as f64
    }

    /// Y coordinate of `value`, clamped into `[0, y_max]`.
    #[must_use]
    pub fn y_at(&self, value: f64) -> f64 {
        let clamped = value.clamp(0.0, self.y_max);
        self.layout.pad_top + self.layout.plot_height() * (1.0 - clamped / self.y_max)
    }

    /// `points` attribute for an SVG `<polyline>` through `values`.
    #[must_use]
    pub fn points_attr(&self, values: &[f64]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", self.x_at(i), self.y_at(*v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Evenly spaced tick values from 0 to `y_max` inclusive.
    #[must_use]
    pub fn y_ticks(&self, intervals: usize) -> Vec<f64> {
        let intervals = intervals.max(1);
        (0..=intervals)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let frac = i as f64 / intervals as f64;
                self.y_max * frac
            })
            .collect()
    }
}
