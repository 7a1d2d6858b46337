//! Isometric SVG projection of a scene.
//!
//! The projection is fitted to the scene's padded bounds (not just the drawn geometry), so the
//! axis frame and every plotted point stay inside the picture.

use std::fmt::Write;

use raycheck_core::Vec3;
use raycheck_core::scene::{MarkerKind, Scene, Segment};

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

const MARGIN: f64 = 40.0;
const TITLE_HEIGHT: f64 = 25.0;
const LEGEND_WIDTH: f64 = 90.0;

const BOX_COLOR: &str = "blue";
const RAY_COLOR: &str = "gray";
const AXIS_COLOR: &str = "#999999";

fn marker_style(kind: MarkerKind) -> (&'static str, f64) {
    match kind {
        MarkerKind::RayBegin => ("green", 6.0),
        MarkerKind::RayEnd => ("orange", 6.0),
        MarkerKind::Intersection => ("red", 4.0),
    }
}

/// Isometric projection: 3D -> 2D, Z up
fn project(p: Vec3) -> (f64, f64) {
    let angle_x: f64 = 0.6;
    let angle_z: f64 = 0.8;
    let rx = p.x * angle_z.cos() - p.y * angle_z.sin();
    let ry = p.x * angle_z.sin() + p.y * angle_z.cos();
    let pz = ry * angle_x.sin() + p.z * angle_x.cos();
    (rx, -pz)
}

/// Maps projected coordinates into the drawing area.
struct Viewport {
    min_x: f64,
    min_y: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    fn fit(scene: &Scene, width: f64, height: f64) -> Self {
        let projected = scene.bounds.corners().map(project);
        let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
        let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
        for (x, y) in projected {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let avail_w = (width - 2.0 * MARGIN - LEGEND_WIDTH).max(1.0);
        let avail_h = (height - 2.0 * MARGIN - TITLE_HEIGHT).max(1.0);
        let data_w = (max_x - min_x).max(0.001);
        let data_h = (max_y - min_y).max(0.001);
        let scale = (avail_w / data_w).min(avail_h / data_h);

        Self {
            min_x,
            min_y,
            scale,
            offset_x: MARGIN + (avail_w - data_w * scale) / 2.0,
            offset_y: MARGIN + TITLE_HEIGHT + (avail_h - data_h * scale) / 2.0,
        }
    }

    fn map(&self, p: Vec3) -> (f64, f64) {
        let (px, py) = project(p);
        (
            (px - self.min_x) * self.scale + self.offset_x,
            (py - self.min_y) * self.scale + self.offset_y,
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn line(svg: &mut String, vp: &Viewport, seg: &Segment, color: &str, width: f64, extra: &str) {
    let (x1, y1) = vp.map(seg.from);
    let (x2, y2) = vp.map(seg.to);
    let _ = writeln!(
        svg,
        "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"{width}\"{extra}/>"
    );
}

/// Render the scene as a standalone SVG document.
pub fn render_svg(scene: &Scene, width: f64, height: f64) -> String {
    let vp = Viewport::fit(scene, width, height);
    let title = escape(&scene.title);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:white\">\n\
         <title>{title}</title>\n\
         <text x=\"{}\" y=\"20\" font-family=\"monospace\" font-size=\"14\" text-anchor=\"middle\">Ray and Box in 3D ({title})</text>\n",
        width / 2.0
    );

    // Axes from the bounds' min corner, one per direction
    let origin = scene.bounds.min;
    let size = scene.bounds.size();
    let axes = [
        ("X", origin + Vec3::new(size.x, 0.0, 0.0)),
        ("Y", origin + Vec3::new(0.0, size.y, 0.0)),
        ("Z", origin + Vec3::new(0.0, 0.0, size.z)),
    ];
    for (label, tip) in axes {
        line(
            &mut svg,
            &vp,
            &Segment { from: origin, to: tip },
            AXIS_COLOR,
            0.5,
            " stroke-dasharray=\"4 3\"",
        );
        let (tx, ty) = vp.map(tip);
        let _ = writeln!(
            svg,
            "<text x=\"{tx:.2}\" y=\"{ty:.2}\" font-family=\"monospace\" font-size=\"12\" fill=\"{AXIS_COLOR}\">{label}</text>"
        );
    }

    for edge in &scene.box_edges {
        line(&mut svg, &vp, edge, BOX_COLOR, 1.0, "");
    }
    line(&mut svg, &vp, &scene.ray, RAY_COLOR, 1.0, "");

    for marker in &scene.markers {
        let (color, r) = marker_style(marker.kind);
        let (cx, cy) = vp.map(marker.at);
        let _ = writeln!(
            svg,
            "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r}\" fill=\"{color}\"><title>{} {}</title></circle>",
            marker.kind.label(),
            marker.at
        );
    }

    // Legend
    let legend_x = width - MARGIN - LEGEND_WIDTH + 10.0;
    let mut legend_y = MARGIN + TITLE_HEIGHT;
    let _ = writeln!(
        svg,
        "<line x1=\"{legend_x:.2}\" y1=\"{legend_y:.2}\" x2=\"{:.2}\" y2=\"{legend_y:.2}\" stroke=\"{RAY_COLOR}\"/>\
         <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"monospace\" font-size=\"12\">Ray</text>",
        legend_x + 14.0,
        legend_x + 20.0,
        legend_y + 4.0
    );
    for marker in &scene.markers {
        legend_y += 18.0;
        let (color, r) = marker_style(marker.kind);
        let _ = writeln!(
            svg,
            "<circle cx=\"{:.2}\" cy=\"{legend_y:.2}\" r=\"{r}\" fill=\"{color}\"/>\
             <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"monospace\" font-size=\"12\">{}</text>",
            legend_x + 7.0,
            legend_x + 20.0,
            legend_y + 4.0,
            marker.kind.label()
        );
    }

    svg.push_str("</svg>\n");
    svg
}
