//! Per-frame driver of the arc length parametrization demo.
//!
//! The host (a window with a camera and a debug panel, or an offline renderer)
//! owns the frame loop and the drawing primitives, exposed to this module as a
//! [`Canvas`]. Each frame it may edit the [`EditorState`] and then calls
//! [`render_frame`], which recomputes everything from the current control points:
//! nothing is cached between frames.
use core::fmt;

use num_traits::{Float, One, Zero};
use tracing::{debug, warn};

use super::correction::CorrectionCurve;
use super::cubic_bezier::{lerp, CubicBezier};
use super::error::CurveError;
use super::point::{PointNorm, Scalar};
use super::point_generic::PointN;
use super::quadrature::QuadratureOrder;
use super::NativeFloat;

/// Segment count of the sampling passes
pub const DEFAULT_SEGMENTS: usize = 256;

/// Quadrature order used for the interactive remap
pub const REMAP_ORDER: QuadratureOrder = QuadratureOrder::N10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const NAIVE_COLOR: Rgb = Rgb(255, 64, 64);
pub const CORRECTED_COLOR: Rgb = Rgb(255, 255, 255);

/// Drawing primitives provided by the host framework
pub trait Canvas<P: PointNorm> {
    fn draw_line(&mut self, from: P, to: P, color: Rgb);

    /// Circle around `center` in the plane orthogonal to the unit vector `normal`
    fn draw_circle(&mut self, center: P, normal: P, radius: P::Scalar, color: Rgb);

    fn draw_text(&mut self, at: P, text: &str);

    /// One line of the debug panel
    fn panel_text(&mut self, line: fmt::Arguments<'_>);
}

/// Editable session state, owned by the host and passed in every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorState<P: PointNorm> {
    pub curve: CubicBezier<P>,
    /// Circle radii at the start and at the end of the curve
    pub radii: [P::Scalar; 2],
    pub segments: usize,
    /// Displacement of the naive pass, so that both passes can be seen side by side
    pub naive_offset: P,
}

impl<P: PointNorm> EditorState<P> {
    pub fn new(curve: CubicBezier<P>, naive_offset: P) -> Self {
        EditorState {
            curve,
            radii: [P::Scalar::zero(), P::Scalar::from_native(0.5)],
            segments: DEFAULT_SEGMENTS,
            naive_offset,
        }
    }
}

impl Default for EditorState<PointN<NativeFloat, 3>> {
    fn default() -> Self {
        let curve = CubicBezier::new(
            PointN::new([0.0, 0.0, 0.0]),
            PointN::new([0.0, 0.1, 0.0]),
            PointN::new([0.0, 3.9, 0.0]),
            PointN::new([0.0, 4.0, 0.0]),
        );
        EditorState::new(curve, PointN::new([0.0, 0.0, -2.0]))
    }
}

/// Length of the curve over [0, t] by the three estimators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthCheck<F> {
    pub t: F,
    /// Sum of the sampled segment lengths
    pub polyline: F,
    pub n3: F,
    pub n10: F,
}

/// Everything computed during one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport<F> {
    pub correction: CorrectionCurve<F>,
    pub monotonic: bool,
    pub checks: [LengthCheck<F>; 3],
    pub lines_drawn: usize,
    pub circles_drawn: usize,
}

/// Which way the indicator radius follows the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Naive,
    Corrected,
}

/// Recompute and draw one frame.
///
/// A degenerate curve (zero total length) aborts the frame before anything is drawn.
pub fn render_frame<P, C>(state: &EditorState<P>, canvas: &mut C) -> Result<FrameReport<P::Scalar>, CurveError>
where
    P: PointNorm,
    C: Canvas<P>,
{
    let curve = &state.curve;
    let correction = match CorrectionCurve::from_curve(curve, REMAP_ORDER) {
        Ok(correction) => correction,
        Err(err) => {
            warn!(%err, "skipping frame");
            return Err(err);
        }
    };
    let monotonic = correction.is_monotonic();
    let (s1, s2) = correction.samples();
    debug!(s1 = s1.to_native(), s2 = s2.to_native(), monotonic, "fitted arc length correction");

    canvas.draw_text(curve.start, "Arc Length Parametrization");
    canvas.draw_text(curve.start + state.naive_offset, "Naive");

    let mut lines_drawn = 0;
    let mut circles_drawn = 0;
    for pass in [Pass::Naive, Pass::Corrected] {
        let (offset, color) = match pass {
            Pass::Naive => (Some(state.naive_offset), NAIVE_COLOR),
            Pass::Corrected => (None, CORRECTED_COLOR),
        };
        let place = |p: P| offset.map_or(p, |o| p + o);
        for (t0, t1) in segment_parameters::<P::Scalar>(state.segments, P::Scalar::one()) {
            let a = place(curve.eval(t0));
            let b = place(curve.eval(t1));
            canvas.draw_line(a, b, color);
            lines_drawn += 1;

            // radius grows along the raw parameter or along the estimated arc length
            let along = match pass {
                Pass::Naive => t0,
                Pass::Corrected => correction.eval(t0),
            };
            let radius = lerp(state.radii[0], state.radii[1], along);
            let tangent = curve.derivative_at(t0);
            let speed = tangent.norm();
            if speed > P::Scalar::epsilon() {
                canvas.draw_circle(a, tangent * (P::Scalar::one() / speed), radius, color);
                circles_drawn += 1;
            }
        }
    }

    let checks = length_checks(curve, state.segments);
    canvas.panel_text(format_args!(
        "s1 = {:.6}, s2 = {:.6}, monotonic = {}",
        s1, s2, monotonic
    ));
    for (i, check) in checks.iter().enumerate() {
        canvas.panel_text(format_args!(
            "{:.6} [{}], n3={:.6}, n10={:.6}",
            check.polyline, i, check.n3, check.n10
        ));
    }

    Ok(FrameReport {
        correction,
        monotonic,
        checks,
        lines_drawn,
        circles_drawn,
    })
}

/// Lengths over [0, 1/3], [0, 2/3] and [0, 1] by flattening into `segments`
/// pieces and by both quadrature orders.
pub fn length_checks<P: PointNorm>(curve: &CubicBezier<P>, segments: usize) -> [LengthCheck<P::Scalar>; 3] {
    let third = P::Scalar::one() / P::Scalar::from_native(3.0);
    [third, third + third, P::Scalar::one()].map(|t| LengthCheck {
        t,
        polyline: curve.polyline_length(t, segments),
        n3: curve.length_up_to_n3(t),
        n10: curve.length_up_to_n10(t),
    })
}

/// Consecutive parameter pairs (t_i, t_i+1) splitting [0, end] into `segments` equal pieces
pub fn segment_parameters<F: Scalar>(segments: usize, end: F) -> impl Iterator<Item = (F, F)> {
    let n = F::from_native(segments as NativeFloat);
    (0..segments).map(move |i| {
        let t0 = F::from_native(i as NativeFloat) / n * end;
        let t1 = F::from_native((i + 1) as NativeFloat) / n * end;
        (t0, t1)
    })
}
