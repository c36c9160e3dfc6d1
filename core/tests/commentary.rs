use crease_core::{
    ball::{BallEvent, ExtraType, WicketType},
    commentary::{generate_commentary, generate_over_summary, resolve_pool, CommentaryContext, PoolKey},
    config::CommentaryConfig,
    rng::CommentaryRng,
    scorecard::OverSummary,
    types::Innings,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn ctx() -> CommentaryContext {
    CommentaryContext {
        striker_name: "Asha Rao".into(),
        bowler_name:  "Tom Keel".into(),
    }
}

fn delivery(runs: u32, extra_type: ExtraType) -> BallEvent {
    BallEvent {
        innings: Innings::First,
        over_number: 4,
        ball_number: 2,
        striker_id: "asha".into(),
        non_striker_id: "ben".into(),
        bowler_id: "tom".into(),
        runs_scored: runs,
        extras: if extra_type == ExtraType::None { 0 } else { 1 },
        extra_type,
        is_wicket: false,
        wicket_type: None,
        player_out_id: None,
        sequence: 0,
    }
}

fn wicket(kind: Option<&str>) -> BallEvent {
    let mut b = delivery(0, ExtraType::None);
    b.is_wicket = true;
    b.wicket_type = kind.map(WicketType::from);
    b.player_out_id = Some("asha".into());
    b
}

/// Pools where every template is unique to its pool, so the output shows
/// exactly which pool was used.
fn tagged_pools() -> CommentaryConfig {
    let mut pools = CommentaryConfig::default();
    for (key, lines) in pools.wicket.iter_mut() {
        *lines = vec![format!("[{key}]")];
    }
    pools.six = vec!["[six] {striker}".into()];
    pools.four = vec!["[four] {striker}".into()];
    pools.wide = vec!["[wide] {bowler}".into()];
    pools.no_ball = vec!["[no_ball] {bowler}".into()];
    pools.runs = (0..=3).map(|n| (n, vec![format!("[runs {n}]")])).collect();
    pools
}

const SUFFIX: &str = " Asha Rao has to walk back.";

// ── Pool resolution ──────────────────────────────────────────────────────────

#[test]
fn run_out_uses_run_out_pool_without_suffix() {
    let pools = tagged_pools();
    let ball = wicket(Some("Run Out"));
    assert_eq!(resolve_pool(&ball, &pools), PoolKey::Wicket("RunOut".into()));

    let line = generate_commentary(&ball, &ctx(), &pools, &mut CommentaryRng::new(7));
    assert_eq!(line, "[RunOut]");
    assert!(!line.contains("has to walk back"));
}

#[test]
fn other_dismissals_get_the_suffix() {
    let pools = tagged_pools();
    for (raw, key) in [("Bowled", "Bowled"), ("caught", "Caught"), ("LBW", "LBW"), ("Stumped", "Stumped")] {
        let line = generate_commentary(&wicket(Some(raw)), &ctx(), &pools, &mut CommentaryRng::new(1));
        assert_eq!(line, format!("[{key}]{SUFFIX}"), "wicket_type={raw}");
    }
}

#[test]
fn unknown_or_missing_dismissal_falls_back_to_default() {
    let pools = tagged_pools();

    let hit_wicket = wicket(Some("Hit Wicket"));
    assert_eq!(resolve_pool(&hit_wicket, &pools), PoolKey::Wicket("Default".into()));
    let line = generate_commentary(&hit_wicket, &ctx(), &pools, &mut CommentaryRng::new(3));
    assert_eq!(line, format!("[Default]{SUFFIX}"));

    let unspecified = wicket(None);
    assert_eq!(resolve_pool(&unspecified, &pools), PoolKey::Wicket("Default".into()));
}

#[test]
fn custom_dismissal_pool_is_used_when_configured() {
    let mut pools = tagged_pools();
    pools.wicket.insert("HitWicket".into(), vec!["[HitWicket]".into()]);
    let line = generate_commentary(&wicket(Some("Hit Wicket")), &ctx(), &pools, &mut CommentaryRng::new(3));
    assert_eq!(line, format!("[HitWicket]{SUFFIX}"));
}

#[test]
fn boundaries_outrank_extras() {
    let pools = tagged_pools();
    // Four runs off a no-ball is still a four.
    assert_eq!(resolve_pool(&delivery(4, ExtraType::NoBall), &pools), PoolKey::Four);
    assert_eq!(resolve_pool(&delivery(6, ExtraType::NoBall), &pools), PoolKey::Six);
    assert_eq!(resolve_pool(&delivery(0, ExtraType::Wide), &pools), PoolKey::Wide);
    assert_eq!(resolve_pool(&delivery(1, ExtraType::NoBall), &pools), PoolKey::NoBall);
    assert_eq!(resolve_pool(&delivery(2, ExtraType::LegByes), &pools), PoolKey::Runs(2));
}

#[test]
fn placeholders_are_filled() {
    let pools = tagged_pools();
    let mut rng = CommentaryRng::new(11);
    assert_eq!(generate_commentary(&delivery(6, ExtraType::None), &ctx(), &pools, &mut rng), "[six] Asha Rao");
    assert_eq!(generate_commentary(&delivery(0, ExtraType::Wide), &ctx(), &pools, &mut rng), "[wide] Tom Keel");
}

#[test]
fn runs_without_a_pool_use_generic_line() {
    let pools = tagged_pools();
    let mut rng = CommentaryRng::new(5);
    assert_eq!(generate_commentary(&delivery(5, ExtraType::None), &ctx(), &pools, &mut rng), "5 runs.");
    assert_eq!(generate_commentary(&delivery(2, ExtraType::None), &ctx(), &pools, &mut rng), "[runs 2]");
}

// ── Randomness ───────────────────────────────────────────────────────────────

#[test]
fn same_seed_same_line() {
    let pools = CommentaryConfig::default();
    let ball = delivery(4, ExtraType::None);
    for seed in [0u64, 1, 99, 0xDEAD_BEEF] {
        let a = generate_commentary(&ball, &ctx(), &pools, &mut CommentaryRng::new(seed));
        let b = generate_commentary(&ball, &ctx(), &pools, &mut CommentaryRng::new(seed));
        assert_eq!(a, b);
    }
}

#[test]
fn every_template_in_a_pool_is_reachable() {
    let pools = CommentaryConfig::default();
    let ball = delivery(6, ExtraType::None);
    let mut rng = CommentaryRng::new(2024);
    let seen: std::collections::HashSet<String> = (0..200)
        .map(|_| generate_commentary(&ball, &ctx(), &pools, &mut rng))
        .collect();
    assert_eq!(seen.len(), pools.six.len());
}

// ── Over summary ─────────────────────────────────────────────────────────────

#[test]
fn over_summary_format() {
    let over = OverSummary {
        innings: Innings::Second,
        over_number: 6,
        runs: 9,
        wickets: 1,
        total: 54,
        wickets_down: 3,
        complete: true,
    };
    assert_eq!(
        generate_over_summary(&over),
        "End of Over 7. 9 runs, 1 wickets. Score: 54/3."
    );
}
