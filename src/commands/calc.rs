use crate::OutputFormat;
use crate::config::Config;
use crate::duration::{Duration, SecondUnit, Unit};
use anyhow::{Context, Result};
use serde::Serialize;
use std::cmp::Ordering;

/// Machine-readable summary of a duration
#[derive(Debug, Serialize)]
pub struct DurationReport {
    pub text: String,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: Option<u64>,
    pub total_seconds: u64,
    pub decimal_hours: f64,
}

impl From<&Duration> for DurationReport {
    fn from(d: &Duration) -> Self {
        Self {
            text: format!("{:#}", d),
            hours: d.hours().value(),
            minutes: d.minutes().value(),
            seconds: d.seconds().map(|s| s.value()),
            total_seconds: d.total_seconds(),
            decimal_hours: d.to_decimal_hours(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnitsReport {
    pub text: String,
    pub hours: HourReport,
    pub minutes: MinuteReport,
    pub seconds: Option<SecondReport>,
}

#[derive(Debug, Serialize)]
pub struct HourReport {
    pub value: u64,
    pub round: u64,
}

#[derive(Debug, Serialize)]
pub struct MinuteReport {
    pub value: u64,
    pub round: u64,
    pub total: u64,
    pub round_total: u64,
}

#[derive(Debug, Serialize)]
pub struct SecondReport {
    pub value: u64,
    pub total: u64,
}

impl From<&Duration> for UnitsReport {
    fn from(d: &Duration) -> Self {
        let hours = d.hours();
        let minutes = d.minutes();
        Self {
            text: format!("{:#}", d),
            hours: HourReport {
                value: hours.value(),
                round: hours.round(),
            },
            minutes: MinuteReport {
                value: minutes.value(),
                round: minutes.round(),
                total: minutes.total(),
                round_total: minutes.round_total(),
            },
            seconds: d.seconds().map(|s| SecondReport {
                value: s.value(),
                total: s.total(),
            }),
        }
    }
}

/// Resolve `--seconds` / `--no-seconds` against the configured default
pub fn include_seconds(config: &Config, seconds: bool, no_seconds: bool) -> bool {
    if seconds {
        true
    } else if no_seconds {
        false
    } else {
        config.parse.include_seconds
    }
}

fn operand(text: &str) -> Result<Duration> {
    text.parse()
        .with_context(|| format!("Invalid duration '{}'", text))
}

/// Text output always carries the hours segment (`0:52:00`) so it can be
/// passed back in as an operand.
pub fn render(duration: &Duration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{:#}", duration)),
        OutputFormat::Json => serde_json::to_string_pretty(&DurationReport::from(duration))
            .context("Failed to serialize duration"),
    }
}

pub fn render_units(duration: &Duration, format: OutputFormat) -> Result<String> {
    let report = UnitsReport::from(duration);
    if let OutputFormat::Json = format {
        return serde_json::to_string_pretty(&report).context("Failed to serialize units");
    }

    let mut out = format!("Duration: {}\n", report.text);
    out.push_str(&format!(
        "{:<8} value={} round={}\n",
        duration.hours().name(),
        report.hours.value,
        report.hours.round
    ));
    out.push_str(&format!(
        "{:<8} value={} round={} total={} round_total={}",
        duration.minutes().name(),
        report.minutes.value,
        report.minutes.round,
        report.minutes.total,
        report.minutes.round_total
    ));
    match duration.seconds() {
        Some(seconds) => out.push_str(&format!(
            "\n{:<8} value={} total={}",
            seconds.name(),
            seconds.value(),
            seconds.total()
        )),
        None => out.push_str(&format!("\n{:<8} (not tracked)", SecondUnit::NAME)),
    }
    Ok(out)
}

fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

pub fn now(config: &Config, seconds: bool, no_seconds: bool, format: OutputFormat) -> Result<()> {
    let duration = Duration::now(include_seconds(config, seconds, no_seconds));
    println!("{}", render(&duration, format)?);
    Ok(())
}

pub fn parse(
    config: &Config,
    text: &str,
    seconds: bool,
    no_seconds: bool,
    format: OutputFormat,
) -> Result<()> {
    let duration = Duration::parse(text, include_seconds(config, seconds, no_seconds))
        .with_context(|| format!("Failed to parse '{}'", text))?;
    println!("{}", render(&duration, format)?);
    Ok(())
}

pub fn show(text: &str, format: OutputFormat) -> Result<()> {
    let duration = operand(text)?;
    println!("{}", render_units(&duration, format)?);
    Ok(())
}

pub fn add(a: &str, b: &str, format: OutputFormat) -> Result<()> {
    let sum = operand(a)?.checked_add(&operand(b)?)?;
    println!("{}", render(&sum, format)?);
    Ok(())
}

pub fn sub(a: &str, b: &str, format: OutputFormat) -> Result<()> {
    let diff = operand(a)?.checked_sub(&operand(b)?)?;
    println!("{}", render(&diff, format)?);
    Ok(())
}

pub fn scale(a: &str, factor: f64, format: OutputFormat) -> Result<()> {
    let scaled = operand(a)?.scale(factor)?;
    println!("{}", render(&scaled, format)?);
    Ok(())
}

pub fn from(minutes: u64, seconds: u64, format: OutputFormat) -> Result<()> {
    let duration = Duration::from_overflow(minutes, seconds)?;
    println!("{}", render(&duration, format)?);
    Ok(())
}

pub fn compare(a: &str, b: &str, format: OutputFormat) -> Result<()> {
    let ordering = ordering_name(operand(a)?.cmp(&operand(b)?));
    match format {
        OutputFormat::Text => println!("{}", ordering),
        OutputFormat::Json => println!("{}", serde_json::json!({ "ordering": ordering })),
    }
    Ok(())
}
