//! Chart binding for the dashboard canvases.
//!
//! The single piece of shared mutable state in the page is the registry of
//! live chart instances, keyed by canvas id. Re-rendering a region must
//! destroy the previous instance bound to the same canvas before installing
//! the new one, otherwise instances stack up across renders. `bind` enforces
//! that discipline; the registry never holds more than one instance per
//! canvas.
//!
//! Geometry is computed host-side so it stays unit-testable; only the actual
//! `CanvasRenderingContext2d` calls are wasm-gated.

use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::PI;

use super::summary::ChartSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Radar,
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSpec {
    pub fn from_series(kind: ChartKind, series: &ChartSeries) -> Self {
        Self {
            kind,
            labels: series.labels.clone(),
            data: series.data.clone(),
        }
    }

    /// Number of points that have both a label and a value.
    pub fn series_len(&self) -> usize {
        self.labels.len().min(self.data.len())
    }
}

#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<String, ChartSpec>,
}

impl ChartRegistry {
    /// Install `spec` on `canvas_id`, destroying any previous instance bound
    /// to the same canvas. Returns true when an instance was replaced.
    pub fn bind(&mut self, canvas_id: &str, spec: ChartSpec) -> bool {
        self.charts.insert(canvas_id.to_string(), spec).is_some()
    }

    pub fn destroy(&mut self, canvas_id: &str) -> bool {
        self.charts.remove(canvas_id).is_some()
    }

    pub fn get(&self, canvas_id: &str) -> Option<&ChartSpec> {
        self.charts.get(canvas_id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

thread_local! {
    static REGISTRY: RefCell<ChartRegistry> = RefCell::new(ChartRegistry::default());
}

/// Bind a chart to a canvas through the page-wide registry and (on wasm)
/// repaint it. Idempotent per canvas: repeated binds replace, never stack.
pub fn bind(canvas_id: &str, spec: ChartSpec) {
    let replaced = REGISTRY.with(|registry| registry.borrow_mut().bind(canvas_id, spec.clone()));
    if replaced {
        log::debug!("replacing chart instance on #{canvas_id}");
    }

    #[cfg(target_arch = "wasm32")]
    draw::paint(canvas_id, &spec);
}

/// Inspect the page-wide registry (used by tests and diagnostics).
pub fn with_registry<R>(f: impl FnOnce(&ChartRegistry) -> R) -> R {
    REGISTRY.with(|registry| f(&registry.borrow()))
}

// Colour used by the original bot webapp for accuracy series.
pub const SERIES_RGB: (u8, u8, u8) = (88, 166, 255);

pub const PALETTE: [&str; 6] = [
    "rgba(88, 166, 255, 0.85)",
    "rgba(63, 185, 80, 0.85)",
    "rgba(210, 153, 34, 0.85)",
    "rgba(248, 81, 73, 0.85)",
    "rgba(163, 113, 247, 0.85)",
    "rgba(219, 109, 40, 0.85)",
];

/// Smallest "nice" axis maximum covering `data`: the next multiple of ten,
/// never below ten.
pub fn axis_max(data: &[f64]) -> f64 {
    let max = data.iter().copied().fold(0.0_f64, f64::max);
    ((max / 10.0).ceil() * 10.0).max(10.0)
}

/// Vertices of the data polygon for a radar chart, first axis pointing up,
/// axes laid out clockwise.
pub fn radar_vertices(data: &[f64], max: f64, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let axes = data.len();
    if axes == 0 || max <= 0.0 {
        return Vec::new();
    }
    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let angle = -PI / 2.0 + (i as f64 / axes as f64) * 2.0 * PI;
            let reach = (value / max).clamp(0.0, 1.0) * radius;
            (cx + reach * angle.cos(), cy + reach * angle.sin())
        })
        .collect()
}

/// Start/end angles (radians, from the top, clockwise) of each doughnut
/// segment. Empty when the series sums to nothing.
pub fn doughnut_segments(data: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = data.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut cursor = -PI / 2.0;
    data.iter()
        .map(|value| {
            let sweep = (value.max(0.0) / total) * 2.0 * PI;
            let segment = (cursor, cursor + sweep);
            cursor += sweep;
            segment
        })
        .collect()
}

/// Bar rectangles `(x, y, w, h)` filling `width` x `height` with a fixed gap.
pub fn bar_rects(data: &[f64], max: f64, width: f64, height: f64, gap: f64) -> Vec<(f64, f64, f64, f64)> {
    let bars = data.len();
    if bars == 0 || max <= 0.0 {
        return Vec::new();
    }
    let slot = width / bars as f64;
    let bar_width = (slot - gap).max(1.0);
    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let bar_height = (value / max).clamp(0.0, 1.0) * height;
            (
                i as f64 * slot + gap / 2.0,
                height - bar_height,
                bar_width,
                bar_height,
            )
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
mod draw {
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::{
        axis_max, bar_rects, doughnut_segments, radar_vertices, ChartKind, ChartSpec, PALETTE,
        SERIES_RGB,
    };

    pub fn paint(canvas_id: &str, spec: &ChartSpec) {
        let Some(context) = context_for(canvas_id) else {
            log::warn!("canvas #{canvas_id} unavailable; skipping chart paint");
            return;
        };
        let (canvas_width, canvas_height) = match context.canvas() {
            Some(canvas) => (canvas.width() as f64, canvas.height() as f64),
            None => return,
        };

        // Destroy-before-create: the previous instance's pixels go first.
        context.clear_rect(0.0, 0.0, canvas_width, canvas_height);

        let data = &spec.data[..spec.series_len()];
        if data.is_empty() {
            return;
        }

        match spec.kind {
            ChartKind::Radar => paint_radar(&context, data, canvas_width, canvas_height),
            ChartKind::Doughnut => paint_doughnut(&context, data, canvas_width, canvas_height),
            ChartKind::Bar => paint_bar(&context, data, canvas_width, canvas_height),
        }
    }

    fn context_for(canvas_id: &str) -> Option<CanvasRenderingContext2d> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
        canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }

    fn paint_radar(context: &CanvasRenderingContext2d, data: &[f64], width: f64, height: f64) {
        let cx = width / 2.0;
        let cy = height / 2.0;
        let radius = (width.min(height) / 2.0) * 0.8;
        let max = axis_max(data);
        let (r, g, b) = SERIES_RGB;

        // Grid rings at 1/3, 2/3 and full reach.
        context.set_stroke_style_str("rgba(139, 148, 158, 0.35)");
        for ring in 1..=3 {
            let level = max * ring as f64 / 3.0;
            let grid: Vec<f64> = data.iter().map(|_| level).collect();
            trace_polygon(context, &radar_vertices(&grid, max, cx, cy, radius));
            context.stroke();
        }

        // Spokes.
        let rim: Vec<f64> = data.iter().map(|_| max).collect();
        for (x, y) in radar_vertices(&rim, max, cx, cy, radius) {
            context.begin_path();
            context.move_to(cx, cy);
            context.line_to(x, y);
            context.stroke();
        }

        // Data polygon.
        context.set_fill_style_str(&format!("rgba({r}, {g}, {b}, 0.35)"));
        context.set_stroke_style_str(&format!("rgb({r}, {g}, {b})"));
        context.set_line_width(2.0);
        trace_polygon(context, &radar_vertices(data, max, cx, cy, radius));
        context.fill();
        context.stroke();
    }

    fn paint_doughnut(context: &CanvasRenderingContext2d, data: &[f64], width: f64, height: f64) {
        let cx = width / 2.0;
        let cy = height / 2.0;
        let radius = (width.min(height) / 2.0) * 0.68;

        context.set_line_width(radius * 0.5);
        for (i, (start, end)) in doughnut_segments(data).iter().enumerate() {
            context.set_stroke_style_str(PALETTE[i % PALETTE.len()]);
            context.begin_path();
            let _ = context.arc(cx, cy, radius, *start, *end);
            context.stroke();
        }
    }

    fn paint_bar(context: &CanvasRenderingContext2d, data: &[f64], width: f64, height: f64) {
        let max = axis_max(data);
        let (r, g, b) = SERIES_RGB;
        context.set_fill_style_str(&format!("rgba({r}, {g}, {b}, 0.6)"));
        context.set_stroke_style_str(&format!("rgb({r}, {g}, {b})"));
        for (x, y, w, h) in bar_rects(data, max, width, height, 8.0) {
            context.fill_rect(x, y, w, h);
            context.stroke_rect(x, y, w, h);
        }
    }

    fn trace_polygon(context: &CanvasRenderingContext2d, vertices: &[(f64, f64)]) {
        context.begin_path();
        for (i, (x, y)) in vertices.iter().enumerate() {
            if i == 0 {
                context.move_to(*x, *y);
            } else {
                context.line_to(*x, *y);
            }
        }
        context.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ChartKind, data: &[f64]) -> ChartSpec {
        ChartSpec {
            kind,
            labels: data.iter().map(|v| format!("{v}")).collect(),
            data: data.to_vec(),
        }
    }

    #[test]
    fn rebinding_a_canvas_never_stacks_instances() {
        let mut registry = ChartRegistry::default();
        for round in 0..25 {
            registry.bind("radar-chart", spec(ChartKind::Radar, &[round as f64, 2.0, 3.0]));
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("radar-chart").unwrap().data[0],
            24.0,
            "last bind wins"
        );
    }

    #[test]
    fn distinct_canvases_hold_distinct_instances() {
        let mut registry = ChartRegistry::default();
        registry.bind("radar-chart", spec(ChartKind::Radar, &[1.0]));
        registry.bind("doughnut-chart", spec(ChartKind::Doughnut, &[1.0]));
        assert_eq!(registry.len(), 2);
        assert!(registry.destroy("radar-chart"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.destroy("radar-chart"));
    }

    #[test]
    fn bind_reports_replacement() {
        let mut registry = ChartRegistry::default();
        assert!(!registry.bind("c", spec(ChartKind::Bar, &[1.0])));
        assert!(registry.bind("c", spec(ChartKind::Bar, &[2.0])));
    }

    #[test]
    fn axis_max_rounds_up_to_tens() {
        assert_eq!(axis_max(&[81.3, 74.5]), 90.0);
        assert_eq!(axis_max(&[100.0]), 100.0);
        assert_eq!(axis_max(&[]), 10.0);
        assert_eq!(axis_max(&[0.5]), 10.0);
    }

    #[test]
    fn radar_first_vertex_points_up() {
        let vertices = radar_vertices(&[10.0, 10.0, 10.0], 10.0, 50.0, 50.0, 40.0);
        assert_eq!(vertices.len(), 3);
        let (x, y) = vertices[0];
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn doughnut_segments_cover_the_full_circle() {
        let segments = doughnut_segments(&[1.0, 2.0, 3.0]);
        assert_eq!(segments.len(), 3);
        let sweep: f64 = segments.iter().map(|(start, end)| end - start).sum();
        assert!((sweep - 2.0 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn doughnut_of_zeroes_has_no_segments() {
        assert!(doughnut_segments(&[0.0, 0.0]).is_empty());
        assert!(doughnut_segments(&[]).is_empty());
    }

    #[test]
    fn bar_rects_respect_the_axis() {
        let rects = bar_rects(&[5.0, 10.0], 10.0, 200.0, 100.0, 8.0);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].3, 50.0);
        assert_eq!(rects[1].3, 100.0);
        assert!(rects[1].0 > rects[0].0);
    }

    #[test]
    fn page_registry_keeps_one_instance_per_canvas() {
        for _ in 0..10 {
            bind("accuracy-chart", spec(ChartKind::Bar, &[1.0, 2.0]));
        }
        let count = with_registry(|registry| registry.len());
        assert_eq!(count, 1);
    }
}
