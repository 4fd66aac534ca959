//! Plot geometry for the inline SVG charts

/// Drawing area inside a fixed `viewBox`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 300.0,
            left: 64.0,
            right: 16.0,
            top: 12.0,
            bottom: 32.0,
        }
    }
}

impl ChartFrame {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    /// Centre of slot `index` out of `count` equal slots
    pub fn slot_x(&self, index: usize, count: usize) -> f64 {
        let slot = self.plot_width() / count.max(1) as f64;
        self.left + slot * (index as f64 + 0.5)
    }

    pub fn slot_width(&self, count: usize) -> f64 {
        self.plot_width() / count.max(1) as f64
    }

    /// Evenly spaced, first and last points on the plot edges
    pub fn point_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.plot_width() / 2.0;
        }
        self.left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    pub fn y(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - self.plot_height() * (value / max).clamp(0.0, 1.0)
    }
}

/// Rounds `max` up to 1, 2 or 5 times a power of ten
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let step = max / magnitude;
    let nice = if step <= 1.0 {
        1.0
    } else if step <= 2.0 {
        2.0
    } else if step <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `count + 1` tick values from zero to `max`
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// SVG `points` attribute
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed polygon under a line, down to the baseline
pub fn area_attr(points: &[(f64, f64)], baseline: f64) -> String {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{} {:.1},{:.1} {:.1},{:.1}",
            points_attr(points),
            last.0,
            baseline,
            first.0,
            baseline
        ),
        _ => String::new(),
    }
}

/// Indexes of at most `max_labels` evenly spread x-axis labels
pub fn label_indexes(count: usize, max_labels: usize) -> Vec<usize> {
    if count == 0 || max_labels == 0 {
        return Vec::new();
    }
    let step = count.div_ceil(max_labels);
    (0..count).step_by(step.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(87.0), 100.0);
        assert_eq!(nice_max(150.0), 200.0);
        assert_eq!(nice_max(48_000.0), 50_000.0);
        assert_eq!(nice_max(500.0), 500.0);
    }

    #[test]
    fn test_frame_scaling() {
        let frame = ChartFrame::default();
        assert_eq!(frame.y(0.0, 100.0), frame.baseline());
        assert_eq!(frame.y(100.0, 100.0), frame.top);
        assert_eq!(frame.y(250.0, 100.0), frame.top);
        assert_eq!(frame.y(10.0, 0.0), frame.baseline());
        assert_eq!(frame.point_x(0, 5), frame.left);
        assert_eq!(frame.point_x(4, 5), frame.width - frame.right);
    }

    #[test]
    fn test_svg_attrs() {
        assert_eq!(points_attr(&[(1.0, 2.0), (3.26, 4.0)]), "1.0,2.0 3.3,4.0");
        assert_eq!(area_attr(&[(1.0, 2.0), (3.0, 4.0)], 10.0), "1.0,2.0 3.0,4.0 3.0,10.0 1.0,10.0");
        assert_eq!(area_attr(&[], 10.0), "");
    }

    #[test]
    fn test_label_indexes() {
        assert_eq!(label_indexes(31, 8), vec![0, 4, 8, 12, 16, 20, 24, 28]);
        assert_eq!(label_indexes(3, 8), vec![0, 1, 2]);
        assert!(label_indexes(0, 8).is_empty());
    }
}
