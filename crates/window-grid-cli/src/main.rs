//! `mawin` CLI — render bilingual maintenance-window announcements from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # All four message bodies for an explicit window
//! mawin announce --date 2025-09-24 --start 00:00 --end 03:00
//!
//! # One body: pre-maintenance, English
//! mawin announce --date 2025-09-24 --start 23:00 --end 04:30 --next-day \
//!   --kind pre --lang en
//!
//! # Drive the selection engine through a preset
//! mawin preset --date 2025-09-24 --interval 60 --preset overnight
//!
//! # Print the slot label table for an interval
//! mawin slots --interval 30
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use window_grid::calendar::parse_date;
use window_grid::{
    render_all, render_announcement, render_summary, Kind, Lang, Preset, SelectionEngine,
    SelectionModel,
};

#[derive(Parser)]
#[command(
    name = "mawin",
    version,
    about = "Maintenance-window announcement generator (Thai/English)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render announcement text for an explicit time window
    Announce {
        /// Window start date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Start time, HH:MM
        #[arg(long)]
        start: String,
        /// End time, HH:MM
        #[arg(long)]
        end: String,
        /// The window ends on the day after --date
        #[arg(long)]
        next_day: bool,
        /// Announcement kind: "pre" or "ma" (both when omitted)
        #[arg(long)]
        kind: Option<String>,
        /// Language: "th" or "en" (both when omitted)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Apply a selection preset and print the committed window plus messages
    Preset {
        /// Base date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Slot interval in minutes
        #[arg(long, default_value_t = 30)]
        interval: u32,
        /// Preset name: business, overnight, all, clear
        #[arg(long)]
        preset: String,
    },
    /// Print the slot label table for an interval
    Slots {
        /// Slot interval in minutes
        #[arg(long, default_value_t = 30)]
        interval: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Announce {
            date,
            start,
            end,
            next_day,
            kind,
            lang,
        } => {
            let model = build_model(&date, &start, &end, next_day)?;
            let output = match (kind.as_deref(), lang.as_deref()) {
                (None, None) => render_all(&model),
                (kind, lang) => {
                    // An omitted axis means every value of that axis.
                    let kinds = match kind {
                        Some(k) => vec![parse_kind(k)?],
                        None => vec![Kind::Pre, Kind::DuringMaintenance],
                    };
                    let langs = match lang {
                        Some(l) => vec![parse_lang(l)?],
                        None => vec![Lang::Th, Lang::En],
                    };
                    let mut bodies = Vec::new();
                    for &k in &kinds {
                        for &l in &langs {
                            bodies.push(render_announcement(k, l, &model));
                        }
                    }
                    bodies.join("\n\n")
                }
            };
            println!("{}", output);
        }
        Commands::Preset {
            date,
            interval,
            preset,
        } => {
            let base_date =
                parse_date(&date).with_context(|| format!("Invalid --date: {}", date))?;
            let mut engine = SelectionEngine::new(interval, base_date)
                .with_context(|| format!("Invalid --interval: {}", interval))?;
            engine.apply_preset(parse_preset(&preset)?);

            match engine.committed() {
                Some(model) => {
                    println!("{}", serde_json::to_string_pretty(model)?);
                    println!();
                    println!("{}", render_summary(model));
                    println!();
                    println!("{}", render_all(model));
                }
                None => println!("No selection."),
            }
        }
        Commands::Slots { interval } => {
            let engine = SelectionEngine::new(interval, chrono::Utc::now().date_naive())
                .with_context(|| format!("Invalid --interval: {}", interval))?;
            let config = engine.config();
            println!(
                "{} slots/day at {} min ({} columns across both days)",
                config.slots_per_day(),
                config.interval_minutes(),
                config.total_slots()
            );
            for (slot, label) in config.labels().iter().enumerate() {
                println!("{:4}  {}", slot, label);
            }
        }
    }

    Ok(())
}

/// Build a committed-window model from explicit CLI arguments.
///
/// `next_day` may be omitted for windows whose end does not follow the start:
/// an equal-or-earlier end on the same date always reads as next-day.
fn build_model(date: &str, start: &str, end: &str, next_day: bool) -> Result<SelectionModel> {
    let date = parse_date(date).with_context(|| format!("Invalid --date: {}", date))?;
    Ok(SelectionModel {
        date,
        start_time: parse_clock(start).with_context(|| format!("Invalid --start: {}", start))?,
        end_time: parse_clock(end).with_context(|| format!("Invalid --end: {}", end))?,
        crosses_midnight: next_day,
    })
}

/// Validate and normalize an "HH:MM" argument to zero-padded form.
fn parse_clock(s: &str) -> Result<String> {
    let (hh, mm) = s.split_once(':').context("expected HH:MM")?;
    let hh: u32 = hh.parse().context("bad hour")?;
    let mm: u32 = mm.parse().context("bad minute")?;
    if hh >= 24 || mm >= 60 {
        bail!("time out of range: {:02}:{:02}", hh, mm);
    }
    Ok(format!("{:02}:{:02}", hh, mm))
}

fn parse_kind(s: &str) -> Result<Kind> {
    match s {
        "pre" => Ok(Kind::Pre),
        "ma" => Ok(Kind::DuringMaintenance),
        other => bail!("Unknown --kind: '{}'. Expected 'pre' or 'ma'.", other),
    }
}

fn parse_lang(s: &str) -> Result<Lang> {
    match s {
        "th" => Ok(Lang::Th),
        "en" => Ok(Lang::En),
        other => bail!("Unknown --lang: '{}'. Expected 'th' or 'en'.", other),
    }
}

fn parse_preset(s: &str) -> Result<Preset> {
    match s {
        "business" => Ok(Preset::BusinessHours),
        "overnight" => Ok(Preset::Overnight),
        "all" => Ok(Preset::FullRange),
        "clear" => Ok(Preset::Clear),
        other => bail!(
            "Unknown --preset: '{}'. Available presets: business, overnight, all, clear",
            other
        ),
    }
}
