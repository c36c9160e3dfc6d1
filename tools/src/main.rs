//! match-analyzer: runs one analysis pass over a match snapshot.
//!
//! Usage:
//!   match-analyzer --snapshot demos/sample_match.json --seed 7
//!   match-analyzer --snapshot match.json --json
//!   match-analyzer --ipc-mode --data-dir ./data
//!
//! In IPC mode every stdin line is a snapshot request; every reply is one
//! line of JSON. The display layer polls by sending a fresh snapshot.

use anyhow::{Context, Result};
use chrono::Utc;
use crease_core::{
    config::EngineConfig,
    engine::{MatchAnalysis, MatchAnalyzer},
    snapshot::MatchSnapshot,
    types::Innings,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Analyze { snapshot: MatchSnapshot },
    Quit,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    generated_at: String,
    seed:         u64,
    analysis:     &'a MatchAnalysis,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let as_json = args.iter().any(|a| a == "--json");
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let snapshot_path = flag_value(&args, "--snapshot");

    let analyzer = MatchAnalyzer::new(load_config(data_dir)?, seed);

    if ipc_mode {
        return run_ipc_loop(&analyzer);
    }

    let path = snapshot_path.context("--snapshot <path> is required outside --ipc-mode")?;
    let snapshot = MatchSnapshot::load(path).with_context(|| format!("loading snapshot {path}"))?;
    let analysis = analyzer.analyze(&snapshot);

    if as_json {
        let report = Report {
            generated_at: Utc::now().to_rfc3339(),
            seed: analyzer.master_seed(),
            analysis: &analysis,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("match-analyzer");
        println!("  snapshot:  {path}");
        println!("  seed:      {seed}");
        println!("  data_dir:  {data_dir}");
        println!();
        print_summary(&snapshot, &analysis);
    }
    Ok(())
}

/// Config from disk when the data directory exists, built-in otherwise.
fn load_config(data_dir: &str) -> Result<EngineConfig> {
    if Path::new(data_dir).is_dir() {
        EngineConfig::load(data_dir).with_context(|| format!("loading config from {data_dir}"))
    } else {
        log::warn!("data dir {data_dir} not found, using built-in config");
        Ok(EngineConfig::default())
    }
}

fn run_ipc_loop(analyzer: &MatchAnalyzer) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Analyze { snapshot } => {
                let analysis = analyzer.analyze(&snapshot);
                writeln!(stdout, "{}", serde_json::to_string(&analysis)?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(snapshot: &MatchSnapshot, analysis: &MatchAnalysis) {
    let fixture = &snapshot.fixture;
    let batting_first = fixture.batting_first();
    let chasing = fixture.chasing_team();

    println!("=== SCORE ===");
    println!(
        "  {batting_first:<12} {}/{} ({} ov)",
        analysis.first_innings.runs,
        analysis.first_innings.wickets,
        analysis.first_innings.overs_display()
    );
    if analysis.current_innings == Innings::Second {
        println!(
            "  {chasing:<12} {}/{} ({} ov)",
            analysis.second_innings.runs,
            analysis.second_innings.wickets,
            analysis.second_innings.overs_display()
        );
    }
    let live = match analysis.current_innings {
        Innings::First => &analysis.first_innings,
        Innings::Second => &analysis.second_innings,
    };
    println!("  run rate:    {:.2}", live.current_run_rate());

    let p = &analysis.participants;
    println!();
    println!("=== AT THE CREASE ===");
    println!("  striker:      {}", p.striker_name);
    println!("  non-striker:  {}", p.non_striker_name);
    println!("  bowler:       {}", p.bowler_name);

    if let Some(chase) = &analysis.chase {
        println!();
        println!("=== CHASE ===");
        match &chase.dls {
            Some(dls) => println!(
                "  target:       {} (DLS, par {})",
                chase.target, dls.projected_score
            ),
            None => println!("  target:       {}", chase.target),
        }
        println!(
            "  need:         {} off {} balls, {} wickets in hand",
            chase.runs_needed, chase.balls_left, chase.wickets_in_hand
        );
        if let Some(rrr) = chase.required_run_rate {
            println!("  required RR:  {rrr:.2}");
        }
        println!("  {chasing} win:  {:.1}%", chase.win_probability);
    }

    if !analysis.win_probability.is_empty() {
        println!();
        println!("=== WIN PROBABILITY ({} / {}) ===", fixture.team1_id, fixture.team2_id);
        for point in &analysis.win_probability {
            println!(
                "  over {:>2} | {:5.1}% | {:5.1}%",
                point.over, point.team1_probability, point.team2_probability
            );
        }
    }

    println!();
    println!("=== LATEST COMMENTARY ===");
    if analysis.commentary.is_empty() {
        println!("  (No balls bowled yet)");
    } else {
        for line in analysis.commentary.iter().rev().take(6) {
            println!(
                "  {}.{} {}",
                line.over_number, line.ball_number, line.text
            );
        }
    }
    if let Some(summary) = analysis.over_summaries.last() {
        println!("  {}", summary.text);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
