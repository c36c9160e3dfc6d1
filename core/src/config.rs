use crate::{
    error::{EngineError, EngineResult},
    fixture::Format,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── DLS constants ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DlsConfig {
    /// Average first-innings score in a full one-day match.
    pub g50_one_day: f64,
    /// Average first-innings score in a full 20-over match; also used for
    /// the shorter formats.
    pub g50_short: f64,
}

impl DlsConfig {
    pub fn g50(&self, format: Format) -> f64 {
        if format.is_one_day() {
            self.g50_one_day
        } else {
            self.g50_short
        }
    }
}

impl Default for DlsConfig {
    fn default() -> Self {
        Self {
            g50_one_day: 245.0,
            g50_short:   160.0,
        }
    }
}

// ── Win probability ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinProbConfig {
    /// Slope of the logistic curve over ln(achievable / needed).
    pub steepness: f64,
    /// Lower clamp for undecided chases; 0 is reserved for a lost chase.
    pub floor:     f64,
    /// Upper clamp for undecided chases; 100 is reserved for a won chase.
    pub ceiling:   f64,
}

impl Default for WinProbConfig {
    fn default() -> Self {
        Self {
            steepness: 3.0,
            floor:     0.1,
            ceiling:   99.9,
        }
    }
}

// ── Commentary templates ───────────────────────────────────────────

pub const DEFAULT_WICKET_POOL: &str = "Default";

/// Template pools. Placeholders: `{striker}`, `{bowler}`, `{runs}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentaryConfig {
    /// Keyed by normalized dismissal name ("RunOut", "LBW", ...) plus
    /// a "Default" pool for anything unlisted.
    pub wicket:        HashMap<String, Vec<String>>,
    pub six:           Vec<String>,
    pub four:          Vec<String>,
    pub wide:          Vec<String>,
    pub no_ball:       Vec<String>,
    /// Keyed by runs off the bat (0..=3).
    pub runs:          HashMap<u32, Vec<String>>,
    /// Appended to every dismissal except a run out.
    pub wicket_suffix: String,
}

fn pool(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        let wicket = [
            ("Bowled", pool(&[
                "{bowler} knocks the stumps over! Clean bowled.",
                "Through the gate! {bowler} hits the top of off.",
                "Timber! {bowler} has rattled the woodwork.",
            ])),
            ("Caught", pool(&[
                "Up in the air... and taken! {bowler} gets the breakthrough.",
                "Edged and caught! {bowler} is pumped.",
                "Straight down the fielder's throat off {bowler}.",
            ])),
            ("LBW", pool(&[
                "Trapped in front! {bowler} wins the appeal.",
                "Plumb! The finger goes up for {bowler}.",
            ])),
            ("RunOut", pool(&[
                "Direct hit! Short of the crease, that's a run out.",
                "Mix-up in the middle and they've paid for it. Run out!",
                "Brilliant work in the field, the bails are off. Run out!",
            ])),
            ("Stumped", pool(&[
                "Down the track, beaten, and the keeper whips the bails off!",
                "Stumped! {bowler} draws the batter out of the crease.",
            ])),
            (DEFAULT_WICKET_POOL, pool(&[
                "Gone! {bowler} strikes.",
                "That's a wicket! Big moment in the match.",
            ])),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let runs = [
            (0, pool(&[
                "Dot ball. {bowler} keeps it tight.",
                "Defended solidly by {striker}.",
                "No run, good length from {bowler}.",
            ])),
            (1, pool(&[
                "Pushed into the gap for a single.",
                "{striker} works it away for one.",
                "Quick single taken.",
            ])),
            (2, pool(&[
                "Driven into the deep, they come back for two.",
                "{striker} places it well and picks up a couple.",
            ])),
            (3, pool(&[
                "Excellent running! Three taken.",
                "Chased down just inside the rope, three runs.",
            ])),
        ]
        .into_iter()
        .collect();

        Self {
            wicket,
            six: pool(&[
                "SIX! {striker} launches {bowler} into the stands!",
                "That's huge! {striker} clears the ropes with ease.",
                "Massive hit! Six more to the total.",
            ]),
            four: pool(&[
                "FOUR! {striker} finds the gap and it races away.",
                "Cracking shot! {striker} pierces the field for four.",
                "Boundary! {bowler} overpitched and {striker} punished it.",
            ]),
            wide: pool(&[
                "Wide called. {bowler} strays down the leg side.",
                "Too wide, the umpire stretches the arms.",
            ]),
            no_ball: pool(&[
                "No ball! Free hit coming up.",
                "{bowler} oversteps. No ball.",
            ]),
            runs,
            wicket_suffix: " {striker} has to walk back.".into(),
        }
    }
}

// ── Engine config ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub dls:        DlsConfig,
    #[serde(default)]
    pub win_prob:   WinProbConfig,
    #[serde(default)]
    pub commentary: CommentaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct EngineConfigFile {
    #[serde(default)]
    dls:      DlsConfig,
    #[serde(default)]
    win_prob: WinProbConfig,
}

fn read_json_file(path: &str) -> EngineResult<String> {
    std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_string(),
        source,
    })
}

impl EngineConfig {
    /// Load from the data/ directory.
    /// In tests, use EngineConfig::default().
    pub fn load(data_dir: &str) -> EngineResult<Self> {
        let engine_path = format!("{data_dir}/engine/engine_config.json");
        let engine_file: EngineConfigFile = serde_json::from_str(&read_json_file(&engine_path)?)?;

        let commentary_path = format!("{data_dir}/commentary/templates.json");
        let commentary: CommentaryConfig =
            serde_json::from_str(&read_json_file(&commentary_path)?)?;

        let config = Self {
            dls: engine_file.dls,
            win_prob: engine_file.win_prob,
            commentary,
        };
        config.validate()?;
        log::info!("loaded engine config from {data_dir}");
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |reason: String| Err(EngineError::InvalidConfig { reason });

        if self.dls.g50_one_day <= 0.0 || self.dls.g50_short <= 0.0 {
            return invalid("G50 constants must be positive".into());
        }
        if self.win_prob.steepness <= 0.0 {
            return invalid("win_prob.steepness must be positive".into());
        }
        if !(0.0 <= self.win_prob.floor
            && self.win_prob.floor < self.win_prob.ceiling
            && self.win_prob.ceiling <= 100.0)
        {
            return invalid("win_prob clamp must satisfy 0 <= floor < ceiling <= 100".into());
        }

        let c = &self.commentary;
        match c.wicket.get(DEFAULT_WICKET_POOL) {
            Some(p) if !p.is_empty() => {}
            _ => return invalid(format!("wicket pool '{DEFAULT_WICKET_POOL}' must be non-empty")),
        }
        let named = [("six", &c.six), ("four", &c.four), ("wide", &c.wide), ("no_ball", &c.no_ball)];
        for (name, lines) in named {
            if lines.is_empty() {
                return invalid(format!("commentary pool '{name}' is empty"));
            }
        }
        Ok(())
    }
}
