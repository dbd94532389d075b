use clap::Parser;
use colored::{ColoredString, Colorize};
use round_trip_priority::profile::OperatorProfile;
use round_trip_priority::scenario::Scenario;
use round_trip_priority::tier::RESOURCE_TIERS;
use round_trip_priority::{LegRecord, NormalizationResult, RoundTripPriorityNormalizer, Weights};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::Tabled;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/round_trip.json")]
    scenario: PathBuf,

    /// Operator profile used to calibrate the weights, overriding the scenario's own
    #[arg(short, long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Print the score and exit
    #[arg(long)]
    once: bool,

    /// Log every intermediate value
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct LegRow<'a> {
    leg: &'static str,
    #[tabled(inline)]
    record: &'a LegRecord,
}

#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "gap")]
    range: String,
    score: f64,
}

fn colored_score(score: i64) -> ColoredString {
    let text = score.to_string();
    match score {
        75.. => text.green().bold(),
        50..=74 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

fn print_table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    println!("{}", table);
}

fn print_result(result: &NormalizationResult) {
    print_table([result]);
    println!("Round-trip priority: {}", colored_score(result.score));
}

fn score_or_report(
    normalizer: &RoundTripPriorityNormalizer,
    outbound: &LegRecord,
    inbound: &LegRecord,
) -> Option<NormalizationResult> {
    normalizer
        .normalize(outbound, inbound)
        .inspect_err(|err| {
            warn!(error = %err, "round trip could not be scored");
            println!("{} {}", "Error:".red(), err);
        })
        .ok()
}

fn tier_rows() -> Vec<TierRow> {
    let mut lower: Option<f64> = None;
    RESOURCE_TIERS
        .iter()
        .map(|tier| {
            let range = match (lower, tier.max_gap_hours.is_finite()) {
                (None, _) => format!("gap <= {}h", tier.max_gap_hours),
                (Some(lo), true) => format!("{}h < gap <= {}h", lo, tier.max_gap_hours),
                (Some(lo), false) => format!("gap > {}h", lo),
            };
            lower = Some(tier.max_gap_hours);
            TierRow { range, score: tier.score }
        })
        .collect()
}

fn set_field(leg: &mut LegRecord, field: &str, value: &str) -> Result<(), String> {
    let number = || match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("'{}' is not a finite number", value)),
    };
    match field {
        "day" => leg.day_label = value.to_string(),
        "dep" | "departure" => leg.departure_time = value.to_string(),
        "dur" | "duration" => leg.flight_duration_minutes = number()?,
        "pri" | "priority" => leg.priority_index = number()?,
        "pre" => leg.pre_flight_buffer_minutes = number()?,
        "post" => leg.post_flight_buffer_minutes = number()?,
        _ => return Err(format!("Unknown field: {}", field)),
    }
    Ok(())
}

fn resolve_weights(args: &Args, scenario: &Scenario) -> Result<Weights, Box<dyn std::error::Error>> {
    let profile = match &args.profile {
        Some(path) => Some(OperatorProfile::load_from_file(path)?),
        None => scenario.profile.clone(),
    };
    Ok(match profile {
        Some(profile) => {
            let weights = Weights::from_profile(&profile);
            info!(
                fleet = %profile.fleet_class(),
                priority = weights.priority,
                resource_waste = weights.resource_waste,
                "calibrated weights from operator profile"
            );
            weights
        }
        None => Weights::DEFAULT,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let scenario = Scenario::load_from_file(&args.scenario)?;
    let normalizer = RoundTripPriorityNormalizer::new(resolve_weights(&args, &scenario)?);

    if args.once {
        let result = normalizer.normalize(&scenario.outbound, &scenario.inbound)?;
        print_result(&result);
        return Ok(());
    }

    println!("Desk open. Loaded round trip from {}", args.scenario.display());
    let mut outbound = scenario.outbound;
    let mut inbound = scenario.inbound;

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "score", "tiers", "weights", "set", "json", "help", "exit"]
            .into_iter()
            .map(String::from)
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => print_table([
                        LegRow { leg: "outbound", record: &outbound },
                        LegRow { leg: "inbound", record: &inbound },
                    ]),
                    "score" => {
                        if let Some(result) = score_or_report(&normalizer, &outbound, &inbound) {
                            print_result(&result);
                        }
                    },
                    "json" => {
                        if let Some(result) = score_or_report(&normalizer, &outbound, &inbound) {
                            println!("{}", serde_json::to_string_pretty(&result)?);
                        }
                    },
                    "tiers" => print_table(tier_rows()),
                    "weights" => {
                        let w = normalizer.weights();
                        println!("priority: {}  resource waste: {}", w.priority, w.resource_waste);
                    },
                    "set" => {
                        if let (Some(which), Some(field), Some(value)) = (parts.get(1), parts.get(2), parts.get(3)) {
                            let leg = match *which {
                                "out" | "outbound" => Some(&mut outbound),
                                "in" | "inbound" => Some(&mut inbound),
                                _ => None,
                            };
                            match leg.map(|leg| set_field(leg, field, value)) {
                                Some(Ok(())) => println!("Updated {} {}.", which, field),
                                Some(Err(msg)) => println!("{}", msg),
                                None => println!("Unknown leg: {} (use out or in)", which),
                            }
                        } else {
                            println!("Usage: set <out|in> <day|dep|dur|pri|pre|post> <value>");
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                     - Show both legs of the round trip");
                        println!("  score                  - Score the round trip");
                        println!("  json                   - Print the score breakdown as JSON");
                        println!("  tiers                  - Show the turnaround gap tiers");
                        println!("  weights                - Show the active calibration weights");
                        println!("  set <leg> <field> <v>  - Change a field of the outbound (out) or inbound (in) leg");
                        println!("  help / ?               - Show this help menu");
                        println!("  exit / quit            - Close the desk\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg() -> LegRecord {
        LegRecord {
            day_label: "1日".into(),
            departure_time: "07:00".into(),
            flight_duration_minutes: 120.0,
            priority_index: 80.0,
            pre_flight_buffer_minutes: 30.0,
            post_flight_buffer_minutes: 20.0,
        }
    }

    #[test]
    fn test_set_field() {
        let mut record = leg();
        set_field(&mut record, "dep", "08:15").unwrap();
        set_field(&mut record, "pri", "55.5").unwrap();
        assert_eq!(record.departure_time, "08:15");
        assert_eq!(record.priority_index, 55.5);
        assert!(set_field(&mut record, "dur", "long").is_err());
        assert!(set_field(&mut record, "gate", "B12").is_err());
    }

    #[test]
    fn test_set_field_rejects_non_finite_numbers() {
        let mut record = leg();
        for value in ["NaN", "inf", "-inf", "infinity"] {
            assert!(set_field(&mut record, "pri", value).is_err(), "{value} accepted");
            assert!(set_field(&mut record, "post", value).is_err(), "{value} accepted");
        }
        assert_eq!(record, leg());
    }

    #[test]
    fn test_score_or_report_swallows_nothing() {
        let normalizer = RoundTripPriorityNormalizer::default();
        let mut outbound = leg();
        outbound.priority_index = f64::INFINITY;
        assert_eq!(score_or_report(&normalizer, &outbound, &leg()), None);
        assert!(score_or_report(&normalizer, &leg(), &leg()).is_some());
    }

    #[test]
    fn test_tier_rows() {
        let rows = tier_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].range, "gap <= 4h");
        assert_eq!(rows[1].range, "4h < gap <= 8h");
        assert_eq!(rows[3].range, "gap > 16h");
        assert_eq!(rows[3].score, 0.2);
    }
}
