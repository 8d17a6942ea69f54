use crate::models::{line_display, LineStyle, RouteResult, RouteStep};

/// Display-ready form of a [`RouteResult`]
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub total_time: String,
    pub total_transfers: String,
    pub entries: Vec<TimelineEntry>,
}

/// One ride or walk on the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub style: LineStyle,
    pub heading: String,
    pub from: String,
    pub to: String,
    /// Intermediate stop count, only present for rides
    pub stops: Option<String>,
    pub duration: String,
}

impl TimelineEntry {
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("timeline-item {}", self.style.css_class())
    }
}

fn minutes(value: f64) -> String {
    format!("{value} นาที")
}

fn timeline_entry(step: &RouteStep) -> Option<TimelineEntry> {
    match step {
        RouteStep::Ride { line, from, to, stops, time_minutes } => {
            let info = line_display(line);
            Some(TimelineEntry {
                style: info.style,
                heading: format!("ขึ้น {}", info.display_name),
                from: from.clone(),
                to: to.clone(),
                stops: Some(format!("{stops} สถานี")),
                duration: format!("ประมาณ {}", minutes(*time_minutes)),
            })
        }
        RouteStep::Walk { line, from, to, time_minutes } => {
            let info = line_display(line);
            Some(TimelineEntry {
                style: info.style,
                heading: info.display_name.to_string(),
                from: from.clone(),
                to: to.clone(),
                stops: None,
                duration: format!("ประมาณ {}", minutes(*time_minutes)),
            })
        }
        RouteStep::Unknown => None,
    }
}

/// Turn a route into timeline entries, keeping the service's step order
#[must_use]
pub fn render_route(route: &RouteResult) -> RouteView {
    RouteView {
        total_time: minutes(route.total_time_minutes),
        total_transfers: format!("{} ครั้ง", route.total_transfers),
        entries: route.steps.iter().filter_map(timeline_entry).collect(),
    }
}
