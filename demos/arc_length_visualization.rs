//! Renders one frame of the arc length parametrization editor to a PNG.
//!
//! The curve is drawn twice: displaced by the naive offset with circle radii
//! growing along the raw parameter t (red), and in place with radii growing
//! along the estimated arc length (white). The debug panel lines are drawn in
//! the top left corner and logged.
//!
//! ```text
//! cargo run --example arc_length_visualization -- --segments 64 \
//!     --point 0,0,0 --point 0,0.1,0 --point 2.5,1,0 --point 4,0,0
//! ```
use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use plotters::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{fmt as log_fmt, prelude::*, EnvFilter};

use bezier_arclen::{render_frame, Canvas, CubicBezier, EditorState, PointN, Rgb};

type P3 = PointN<f64, 3>;

/// Vertices of the polygon approximating a circle
const CIRCLE_VERTICES: usize = 32;

#[derive(Parser, Debug)]
#[command(about = "Visualize naive versus arc length parametrized sampling of a cubic Bezier curve")]
struct Args {
    /// Output image
    #[arg(long, default_value = "arc_length_parametrization.png")]
    output: PathBuf,

    /// Number of segments of each sampling pass
    #[arg(long, default_value_t = bezier_arclen::DEFAULT_SEGMENTS)]
    segments: usize,

    /// Circle radius at the start and at the end of the curve
    #[arg(long, num_args = 2, value_names = ["R0", "R1"], default_values_t = [0.0, 0.5])]
    radii: Vec<f64>,

    /// Control point as x,y,z; give it four times (start, ctrl1, ctrl2, end)
    #[arg(long = "point", value_parser = parse_point)]
    points: Vec<P3>,

    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Log filter, RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log: String,
}

fn parse_point(s: &str) -> Result<P3, String> {
    let mut coords = [0.0; 3];
    let mut parts = s.split(',');
    for c in coords.iter_mut() {
        let part = parts.next().ok_or_else(|| format!("expected x,y,z, got '{}'", s))?;
        *c = part
            .trim()
            .parse()
            .map_err(|e| format!("invalid coordinate '{}': {}", part, e))?;
    }
    if parts.next().is_some() {
        return Err(format!("expected x,y,z, got '{}'", s));
    }
    Ok(PointN::new(coords))
}

fn init_logging(directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(log_fmt::layer().with_target(true))
        .with(filter)
        .init();
}

/// Screen coordinates: the curve lives in the y/z plane, looked at from +x
fn project(p: P3) -> (f64, f64) {
    (-p[2], p[1])
}

fn cross(a: P3, b: P3) -> P3 {
    PointN::new([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

/// Orthonormal pair spanning the plane orthogonal to the unit vector `n`
fn plane_basis(n: P3) -> (P3, P3) {
    let axis = if n[0].abs() < 0.9 {
        PointN::new([1.0, 0.0, 0.0])
    } else {
        PointN::new([0.0, 1.0, 0.0])
    };
    let u = cross(n, axis);
    let u = u * (1.0 / u.into_iter().map(|c| c * c).sum::<f64>().sqrt());
    (u, cross(n, u))
}

fn color(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Records the primitives of a frame, they are rasterized once the frame is complete
#[derive(Default)]
struct Recorder {
    lines: Vec<((f64, f64), (f64, f64), Rgb)>,
    polygons: Vec<(Vec<(f64, f64)>, Rgb)>,
    labels: Vec<((f64, f64), String)>,
    panel: Vec<String>,
}

impl Canvas<P3> for Recorder {
    fn draw_line(&mut self, from: P3, to: P3, color: Rgb) {
        self.lines.push((project(from), project(to), color));
    }

    fn draw_circle(&mut self, center: P3, normal: P3, radius: f64, color: Rgb) {
        let (u, v) = plane_basis(normal);
        let polygon = (0..=CIRCLE_VERTICES)
            .map(|i| {
                let phi = i as f64 / CIRCLE_VERTICES as f64 * std::f64::consts::TAU;
                project(center + u * (radius * phi.cos()) + v * (radius * phi.sin()))
            })
            .collect();
        self.polygons.push((polygon, color));
    }

    fn draw_text(&mut self, at: P3, text: &str) {
        self.labels.push((project(at), text.to_string()));
    }

    fn panel_text(&mut self, line: fmt::Arguments<'_>) {
        let line = line.to_string();
        info!("{}", line);
        self.panel.push(line);
    }
}

impl Recorder {
    fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let points = self
            .lines
            .iter()
            .flat_map(|(a, b, _)| [*a, *b])
            .chain(self.polygons.iter().flat_map(|(p, _)| p.iter().copied()));
        let (mut x, mut y) = ((f64::MAX, f64::MIN), (f64::MAX, f64::MIN));
        for (px, py) in points {
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }
        (x, y)
    }

    fn rasterize(&self, args: &Args) -> Result<()> {
        let root = BitMapBackend::new(&args.output, (args.width, args.height)).into_drawing_area();
        root.fill(&BLACK)?;

        // keep the aspect ratio of the scene, pad by a fixed margin
        let ((xmin, xmax), (ymin, ymax)) = self.bounds();
        let margin = 1.0;
        let (cx, cy) = ((xmin + xmax) / 2.0, (ymin + ymax) / 2.0);
        let aspect = args.width as f64 / args.height as f64;
        let half_h = ((ymax - ymin) / 2.0 + margin).max(((xmax - xmin) / 2.0 + margin) / aspect);
        let half_w = half_h * aspect;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d((cx - half_w)..(cx + half_w), (cy - half_h)..(cy + half_h))?;

        chart.draw_series(
            self.lines
                .iter()
                .map(|(a, b, c)| PathElement::new(vec![*a, *b], color(*c))),
        )?;
        chart.draw_series(
            self.polygons
                .iter()
                .map(|(p, c)| PathElement::new(p.clone(), color(*c).mix(0.6))),
        )?;
        chart.draw_series(self.labels.iter().map(|(at, text)| {
            Text::new(text.clone(), *at, ("sans-serif", 24).into_font().color(&WHITE))
        }))?;

        for (i, line) in self.panel.iter().enumerate() {
            root.draw(&Text::new(
                line.as_str(),
                (16, 16 + 24 * i as i32),
                ("monospace", 18).into_font().color(&WHITE),
            ))?;
        }

        root.present()
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log);
    debug!(?args, "starting");

    let mut state: EditorState<P3> = EditorState::default();
    match args.points.as_slice() {
        [] => {}
        &[start, ctrl1, ctrl2, end] => state.curve = CubicBezier::new(start, ctrl1, ctrl2, end),
        points => bail!("expected 4 control points, got {}", points.len()),
    }
    if let &[r0, r1] = args.radii.as_slice() {
        state.radii = [r0, r1];
    }
    state.segments = args.segments;

    let mut canvas = Recorder::default();
    let report = render_frame(&state, &mut canvas).context("cannot render frame")?;
    if !report.monotonic {
        info!("correction curve is not monotonic, corrected samples may run backwards");
    }
    info!(
        lines = report.lines_drawn,
        circles = report.circles_drawn,
        "frame complete"
    );

    canvas.rasterize(&args)?;
    info!(output = %args.output.display(), "image written");
    Ok(())
}
