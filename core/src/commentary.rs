//! Templated ball-by-ball commentary.
//!
//! Pool resolution is deterministic given the ball; only the choice of
//! template inside the pool is random, and that randomness comes from
//! the caller's CommentaryRng.
//!
//! Priority (first match wins):
//!   1. wicket: pool keyed by normalized dismissal, else "Default"
//!   2. six
//!   3. four
//!   4. wide
//!   5. no-ball
//!   6. runs off the bat (0..=3), else "{n} runs."

use crate::{
    ball::{BallEvent, ExtraType},
    config::{CommentaryConfig, DEFAULT_WICKET_POOL},
    rng::CommentaryRng,
    scorecard::OverSummary,
};

/// Display names for the participants on this delivery.
#[derive(Debug, Clone)]
pub struct CommentaryContext {
    pub striker_name: String,
    pub bowler_name:  String,
}

/// Which template pool a delivery draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolKey {
    /// Normalized dismissal key, or "Default".
    Wicket(String),
    Six,
    Four,
    Wide,
    NoBall,
    Runs(u32),
}

/// Resolve the pool for a delivery against the configured pools.
pub fn resolve_pool(ball: &BallEvent, pools: &CommentaryConfig) -> PoolKey {
    if ball.is_wicket {
        let key = ball
            .wicket_type
            .as_ref()
            .map(|w| w.normalized_key())
            .filter(|k| pools.wicket.get(k).is_some_and(|p| !p.is_empty()))
            .unwrap_or_else(|| DEFAULT_WICKET_POOL.to_string());
        return PoolKey::Wicket(key);
    }
    match (ball.runs_scored, ball.extra_type) {
        (6, _) => PoolKey::Six,
        (4, _) => PoolKey::Four,
        (_, ExtraType::Wide) => PoolKey::Wide,
        (_, ExtraType::NoBall) => PoolKey::NoBall,
        (n, _) => PoolKey::Runs(n),
    }
}

fn pool_for<'a>(key: &PoolKey, pools: &'a CommentaryConfig) -> &'a [String] {
    match key {
        PoolKey::Wicket(k) => pools.wicket.get(k).map(Vec::as_slice).unwrap_or_default(),
        PoolKey::Six => &pools.six,
        PoolKey::Four => &pools.four,
        PoolKey::Wide => &pools.wide,
        PoolKey::NoBall => &pools.no_ball,
        PoolKey::Runs(n) => pools.runs.get(n).map(Vec::as_slice).unwrap_or_default(),
    }
}

fn fill(template: &str, ball: &BallEvent, ctx: &CommentaryContext) -> String {
    template
        .replace("{striker}", &ctx.striker_name)
        .replace("{bowler}", &ctx.bowler_name)
        .replace("{runs}", &ball.runs_scored.to_string())
}

/// One line of commentary for a delivery.
pub fn generate_commentary(
    ball: &BallEvent,
    ctx: &CommentaryContext,
    pools: &CommentaryConfig,
    rng: &mut CommentaryRng,
) -> String {
    let key = resolve_pool(ball, pools);
    let line = match rng.pick(pool_for(&key, pools)) {
        Some(template) => fill(template, ball, ctx),
        None => format!("{} runs.", ball.runs_scored),
    };

    let run_out = ball.wicket_type.as_ref().is_some_and(|w| w.is_run_out());
    if ball.is_wicket && !run_out {
        format!("{line}{}", fill(&pools.wicket_suffix, ball, ctx))
    } else {
        line
    }
}

/// "End of Over 7. 9 runs, 1 wickets. Score: 54/3."
pub fn generate_over_summary(over: &OverSummary) -> String {
    format!(
        "End of Over {}. {} runs, {} wickets. Score: {}/{}.",
        over.over_number.saturating_add(1),
        over.runs,
        over.wickets,
        over.total,
        over.wickets_down
    )
}
