//! Colorful console output for climb planning.
//!
//! Provides a custom `tracing` layer that formats planner events with
//! colors. Enabled with the `console` feature.

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "railclimb_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// is honored on top of `railclimb_solver=info`.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::from_default_env().add_directive(
            DEFAULT_DIRECTIVE
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        );

        // Another subscriber may already be installed; keep it.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ClimbConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats planner events with colors.
pub struct ClimbConsoleLayer;

impl<S: Subscriber> Layer<S> for ClimbConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("railclimb") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    reason: Option<String>,
    strategy: Option<String>,
    split: Option<String>,
    segments: Option<String>,
    units: Option<u64>,
    trips: Option<u64>,
    trip: Option<u64>,
    cut_units: Option<u64>,
    grade: Option<f64>,
    power_ratio: Option<f64>,
    capacity: Option<f64>,
    net_force: Option<f64>,
    collect_net: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "reason" => self.reason = value,
            "strategy" => self.strategy = value,
            "split" => self.split = value,
            "segments" => self.segments = value,
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "units" => self.units = Some(value),
            "trips" => self.trips = Some(value),
            "trip" => self.trip = Some(value),
            "cut_units" => self.cut_units = Some(value),
            "segments" => self.segments = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "grade" => self.grade = Some(value),
            "power_ratio" => self.power_ratio = Some(value),
            "capacity" => self.capacity = Some(value),
            "net_force" => self.net_force = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "collect_net" {
            self.collect_net = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("climb_start") => format_climb_start(v),
        Some("climb_end") => format_climb_end(v),
        Some("climb_infeasible") => format_infeasible(v),
        Some("split_start") => format_split_start(v),
        Some("split_end") => format_split_end(v),
        Some("power_collected") => format_power_collected(v),
        _ => String::new(),
    }
}

fn prefix(level: &str, tag: &str) -> String {
    let level = match level {
        "INFO" => level.bright_green().to_string(),
        "WARN" => level.bright_yellow().to_string(),
        _ => level.bright_blue().to_string(),
    };
    format!("{} {} {}", timestamp().bright_black(), level, tag.bright_cyan())
}

fn format_climb_start(v: &EventVisitor) -> String {
    let units = v.units.unwrap_or(0);
    let grade = v.grade.unwrap_or(0.0);
    let ratio = v.power_ratio.unwrap_or(1.0);
    let collect = if v.collect_net.unwrap_or(false) {
        "collecting net power".bright_magenta().to_string()
    } else {
        "fixed power".white().to_string()
    };

    format!(
        "{} planning {} units up a {} grade at {} throttle, {}",
        prefix("INFO", "[Climb]"),
        units.to_formatted_string(&Locale::en).bright_yellow(),
        format_percent(grade).bright_yellow(),
        format_percent(ratio).yellow(),
        collect
    )
}

fn format_climb_end(v: &EventVisitor) -> String {
    let trips = v.trips.unwrap_or(0);
    let summary = match trips {
        0 => "nothing to move".white().to_string(),
        1 => "single trip, no siding needed".bright_green().bold().to_string(),
        n => format!("{} trips", n.to_formatted_string(&Locale::en))
            .bright_green()
            .bold()
            .to_string(),
    };
    format!("{} plan ready: {}", prefix("INFO", "[Climb]"), summary)
}

fn format_infeasible(v: &EventVisitor) -> String {
    let reason = v.reason.as_deref().unwrap_or("unknown");
    let mut output = format!(
        "{} {} ({})",
        prefix("WARN", "[Climb]"),
        "INFEASIBLE".bright_red().bold(),
        reason
    );
    if let Some(force) = v.net_force {
        output.push_str(&format!(", power net force {}", format_force(force)));
    }
    if let Some(cut) = v.cut_units {
        output.push_str(&format!(", cut of {} units", cut.to_string().yellow()));
    }
    output
}

fn format_split_start(v: &EventVisitor) -> String {
    format!(
        "{} {} over {} units, capacity {}",
        prefix("DEBUG", "[Split]"),
        v.strategy.as_deref().unwrap_or("?").white().bold(),
        v.units.unwrap_or(0).to_formatted_string(&Locale::en).yellow(),
        format_force(v.capacity.unwrap_or(0.0))
    )
}

fn format_split_end(v: &EventVisitor) -> String {
    let result = match (&v.split, v.segments.as_deref()) {
        (Some(split), _) => split.bright_magenta().to_string(),
        (None, Some(segments)) => segments.bright_red().to_string(),
        (None, None) => "-".to_string(),
    };
    format!("{} result {}", prefix("DEBUG", "[Split]"), result)
}

fn format_power_collected(v: &EventVisitor) -> String {
    format!(
        "    {} trip {}: {} unit(s) join the power block ({})",
        "->".bright_blue(),
        v.trip.map_or(0, |t| t + 1),
        v.units.unwrap_or(0),
        format_force(v.net_force.unwrap_or(0.0))
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn format_force(force: f64) -> String {
    let rounded = force.round();
    let text = if rounded.is_finite() && rounded.abs() < i64::MAX as f64 {
        let n = rounded as i64;
        format!("{} lbf", n.to_formatted_string(&Locale::en))
    } else {
        format!("{} lbf", force)
    };
    if force > 0.0 {
        text.bright_green().to_string()
    } else {
        text.bright_red().to_string()
    }
}
