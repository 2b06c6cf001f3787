use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::content::WEEKLY_PROGRESS;
use crate::models::ChartPoint;

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 256;

const MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 30;
const Y_LABEL_AREA: u32 = 40;
const Y_MAX: i32 = 100;

const AREA_STROKE: RGBColor = RGBColor(99, 102, 241);
const AREA_FILL: RGBColor = RGBColor(129, 140, 248);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("canvas has no 2d rendering context")]
    Context,
    #[error("chart backend error: {0}")]
    Backend(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Backend(err.to_string())
    }
}

/// Horizontal canvas coordinate of the `index`-th of `points` data points.
pub fn point_x(index: usize, points: usize) -> f64 {
    let left = (MARGIN + Y_LABEL_AREA) as f64;
    let right = (CANVAS_WIDTH - MARGIN) as f64;
    if points < 2 {
        return left;
    }
    left + (right - left) * index as f64 / (points - 1) as f64
}

/// Index of the data point closest to a pointer at `offset_x` css pixels on
/// a canvas currently displayed `rendered_width` css pixels wide.
pub fn nearest_point(offset_x: f64, rendered_width: f64, points: usize) -> Option<usize> {
    if points == 0 || rendered_width <= 0.0 {
        return None;
    }
    if points == 1 {
        return Some(0);
    }

    let x = offset_x * CANVAS_WIDTH as f64 / rendered_width;
    let step = point_x(1, points) - point_x(0, points);
    let index = ((x - point_x(0, points)) / step).round();
    Some(index.clamp(0.0, (points - 1) as f64) as usize)
}

/// Horizontal offset in css pixels of the `index`-th point on a canvas
/// displayed `rendered_width` css pixels wide.
pub fn tooltip_left_px(index: usize, points: usize, rendered_width: f64) -> f64 {
    point_x(index, points) * rendered_width / CANVAS_WIDTH as f64
}

pub fn tooltip_text(point: &ChartPoint) -> String {
    format!("{}: {}", point.label, point.value)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Hover {
    index: usize,
    left_px: f64,
}

#[derive(Properties, PartialEq)]
pub struct ChartTooltipProps {
    pub text: AttrValue,
    pub left_px: f64,
}

#[function_component(ChartTooltip)]
pub fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    html! {
        <div class="chart-tooltip" style={format!("left: {:.1}px;", props.left_px)}>
            {&props.text}
        </div>
    }
}

pub fn draw_progress<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[ChartPoint],
) -> Result<(), ChartError> {
    root.fill(&WHITE)?;

    let last = series.len().saturating_sub(1).max(1) as i32;
    let mut chart = ChartBuilder::on(root)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0..last, 0..Y_MAX)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(series.len())
        .x_label_formatter(&|x| {
            series
                .get(*x as usize)
                .map(|point| point.label.to_string())
                .unwrap_or_default()
        })
        .y_labels(6)
        .draw()?;

    chart.draw_series(
        AreaSeries::new(
            series.iter().enumerate().map(|(i, point)| (i as i32, point.value)),
            0,
            &AREA_FILL.mix(0.3),
        )
        .border_style(&AREA_STROKE),
    )?;

    chart.draw_series(
        series
            .iter()
            .enumerate()
            .map(|(i, point)| Circle::new((i as i32, point.value), 3, AREA_STROKE.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn render_canvas(canvas: HtmlCanvasElement) -> Result<(), ChartError> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::Context)?;
    let root = backend.into_drawing_area();
    draw_progress(&root, WEEKLY_PROGRESS)
}

#[function_component(ProgressChart)]
pub fn progress_chart() -> Html {
    let canvas_ref = use_node_ref();
    let hovered = use_state_eq(|| None::<Hover>);

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    match render_canvas(canvas) {
                        Ok(()) => log::debug!("Progress chart drawn"),
                        Err(err) => log::error!("Failed to draw progress chart: {}", err),
                    }
                }
                || ()
            },
            (),
        );
    }

    let onmousemove = {
        let canvas_ref = canvas_ref.clone();
        let hovered = hovered.clone();
        Callback::from(move |e: MouseEvent| {
            let rendered_width = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|canvas| canvas.client_width() as f64)
                .unwrap_or(0.0);
            let points = WEEKLY_PROGRESS.len();
            hovered.set(
                nearest_point(e.offset_x() as f64, rendered_width, points).map(|index| Hover {
                    index,
                    left_px: tooltip_left_px(index, points, rendered_width),
                }),
            );
        })
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let tooltip = (*hovered)
        .and_then(|hover| {
            WEEKLY_PROGRESS.get(hover.index).map(|point| {
                html! { <ChartTooltip text={tooltip_text(point)} left_px={hover.left_px} /> }
            })
        })
        .unwrap_or_default();

    html! {
        <div class="progress-chart">
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="max-width: 100%;"
                {onmousemove}
                {onmouseleave}
            />
            {tooltip}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_svg(series: &[ChartPoint]) -> String {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (CANVAS_WIDTH, CANVAS_HEIGHT)).into_drawing_area();
            draw_progress(&root, series).unwrap();
        }
        svg
    }

    #[test]
    fn svg_contains_every_week_label() {
        let svg = render_svg(WEEKLY_PROGRESS);
        for point in WEEKLY_PROGRESS {
            assert!(svg.contains(point.label), "missing {}", point.label);
        }
    }

    #[test]
    fn single_point_series_still_draws() {
        let svg = render_svg(&[ChartPoint { label: "Week 1", value: 30 }]);
        assert!(svg.contains("Week 1"));
    }

    #[test]
    fn nearest_point_hits_exact_positions() {
        let n = WEEKLY_PROGRESS.len();
        for index in 0..n {
            let x = point_x(index, n);
            assert_eq!(nearest_point(x, CANVAS_WIDTH as f64, n), Some(index));
        }
    }

    #[test]
    fn nearest_point_clamps_to_series() {
        let n = WEEKLY_PROGRESS.len();
        assert_eq!(nearest_point(0.0, CANVAS_WIDTH as f64, n), Some(0));
        assert_eq!(nearest_point(CANVAS_WIDTH as f64, CANVAS_WIDTH as f64, n), Some(n - 1));
    }

    #[test]
    fn nearest_point_accounts_for_css_scaling() {
        let n = WEEKLY_PROGRESS.len();
        // Canvas squeezed to half width: pointer coordinates halve too.
        let x = point_x(2, n) / 2.0;
        assert_eq!(nearest_point(x, CANVAS_WIDTH as f64 / 2.0, n), Some(2));
    }

    #[test]
    fn chart_errors_read_as_log_lines() {
        assert_eq!(ChartError::Context.to_string(), "canvas has no 2d rendering context");
        assert_eq!(
            ChartError::Backend("context lost".into()).to_string(),
            "chart backend error: context lost"
        );
    }

    #[test]
    fn tooltip_text_is_label_and_value() {
        let expected = ["Week 1: 30", "Week 2: 45", "Week 3: 65", "Week 4: 80", "Week 5: 95"];
        for (point, want) in WEEKLY_PROGRESS.iter().zip(expected) {
            assert_eq!(tooltip_text(point), want);
        }
    }

    #[test]
    fn tooltip_follows_rendered_canvas_width() {
        let n = WEEKLY_PROGRESS.len();
        for index in 0..n {
            let full = tooltip_left_px(index, n, CANVAS_WIDTH as f64);
            let half = tooltip_left_px(index, n, CANVAS_WIDTH as f64 / 2.0);
            assert!((full - point_x(index, n)).abs() < 1e-9);
            assert!((half - point_x(index, n) / 2.0).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn tooltip_renders_text_at_pixel_offset() {
        let html = yew::ServerRenderer::<ChartTooltip>::with_props(|| ChartTooltipProps {
            text: tooltip_text(&WEEKLY_PROGRESS[2]).into(),
            left_px: 290.0,
        })
        .render()
        .await;

        assert!(html.contains("Week 3: 65"));
        assert!(html.contains("left: 290.0px;"));
    }

    #[test]
    fn nearest_point_without_layout_is_none() {
        assert_eq!(nearest_point(10.0, 0.0, 5), None);
        assert_eq!(nearest_point(10.0, 600.0, 0), None);
    }
}
