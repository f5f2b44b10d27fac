// ABOUTME: Content nodes produced by classifying a slide section
// ABOUTME: Markdown text, images, iframes, structured views and captioned wrappers

use std::f64::consts::PI;

/// Renderable representation of one section
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Markdown { text: String, font_size: u32 },
    Image { path: String },
    Iframe { url: String },
    View(View),
    Captioned {
        caption: String,
        font_size: u32,
        child: Box<ContentNode>,
    },
}

impl ContentNode {
    pub fn markdown(text: impl Into<String>, font_size: u32) -> Self {
        ContentNode::Markdown {
            text: text.into(),
            font_size,
        }
    }

    /// Short name of the variant, used in logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            ContentNode::Markdown { .. } => "markdown",
            ContentNode::Image { .. } => "image",
            ContentNode::Iframe { .. } => "iframe",
            ContentNode::View(_) => "view",
            ContentNode::Captioned { .. } => "captioned",
        }
    }
}

/// Structured view such as a chart
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Timeseries(TimeseriesGraph),
    /// Produced by a host executor; the core passes it through untouched
    Opaque { kind: String, data: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeseriesGraph {
    pub y_label: String,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub t: Vec<f32>,
    pub y: Vec<f32>,
}

impl TimeseriesGraph {
    pub fn new(y_label: impl Into<String>) -> Self {
        Self {
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    pub fn add_line_series(
        &mut self,
        name: impl Into<String>,
        t: Vec<f32>,
        y: Vec<f32>,
        color: impl Into<String>,
    ) {
        self.series.push(LineSeries {
            name: name.into(),
            color: color.into(),
            t,
            y,
        });
    }
}

const EXAMPLE_SAMPLES: usize = 500;
const EXAMPLE_DURATION: f64 = 10.0;

/// Built-in example chart: a damped sine sampled over ten seconds
pub fn example_view() -> View {
    let step = EXAMPLE_DURATION / (EXAMPLE_SAMPLES - 1) as f64;
    let t: Vec<f64> = (0..EXAMPLE_SAMPLES).map(|i| i as f64 * step).collect();
    let y: Vec<f32> = t
        .iter()
        .map(|&t| ((2.0 * PI * t).sin() * (-t / 5.0).exp()) as f32)
        .collect();

    let mut graph = TimeseriesGraph::new("Amplitude");
    graph.add_line_series(
        "Damped Sine",
        t.into_iter().map(|t| t as f32).collect(),
        y,
        "blue",
    );
    View::Timeseries(graph)
}
