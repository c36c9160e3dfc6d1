use crease_core::{
    ball::{BallEvent, ExtraType, WicketType},
    config::{DlsConfig, WinProbConfig},
    fixture::{FixtureState, Format, Interruption, MatchStatus, TossDecision},
    types::Innings,
    win_prob::{self, WinProbModel},
};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn model(format: Format, overs: u32) -> WinProbModel {
    WinProbModel::new(format, overs, &DlsConfig::default(), &WinProbConfig::default())
}

fn fixture(toss_decision: TossDecision) -> FixtureState {
    FixtureState {
        total_overs: 2,
        toss_winner_id: "north".into(),
        toss_decision,
        team1_id: "north".into(),
        team2_id: "south".into(),
        current_innings: Innings::Second,
        status: MatchStatus::Live,
        striker_id: None,
        non_striker_id: None,
        bowler_id: None,
        interruptions: Vec::new(),
    }
}

fn delivery(innings: Innings, over: u32, number: u32, runs: u32) -> BallEvent {
    BallEvent {
        innings,
        over_number: over,
        ball_number: number,
        striker_id: "bat-1".into(),
        non_striker_id: "bat-2".into(),
        bowler_id: "bowl-1".into(),
        runs_scored: runs,
        extras: 0,
        extra_type: ExtraType::None,
        is_wicket: false,
        wicket_type: None,
        player_out_id: None,
        sequence: 0,
    }
}

/// A full first innings of `overs` overs scoring `per_ball` off every ball.
fn first_innings(overs: u32, per_ball: u32) -> Vec<BallEvent> {
    (0..overs)
        .flat_map(|o| (1..=6).map(move |b| delivery(Innings::First, o, b, per_ball)))
        .collect()
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[test]
fn won_chase_is_certain() {
    let m = model(Format::T20, 20);
    for balls_left in [0, 1, 60, 120] {
        for wickets in 1..=10 {
            assert_eq!(m.chase_win_probability(0, balls_left, wickets, 170), 100.0);
        }
    }
}

#[test]
fn all_out_or_no_balls_is_lost() {
    let m = model(Format::T20, 20);
    for needed in [1, 20, 170] {
        assert_eq!(m.chase_win_probability(needed, 60, 0, 170), 0.0);
        assert_eq!(m.chase_win_probability(needed, 0, 8, 170), 0.0);
    }
}

#[test]
fn par_start_is_even_across_formats() {
    let t10_par = model(Format::T10, 10).achievable_runs(60, 10);
    let p = model(Format::T10, 10).chase_win_probability(t10_par.round() as u32, 60, 10, 93);
    assert!((p - 50.0).abs() < 2.0, "T10 start should be near even, got {p}");

    let p = model(Format::T20, 20).chase_win_probability(160, 120, 10, 160);
    assert!((p - 50.0).abs() < 1e-9);
}

#[test]
fn wickets_in_hand_above_ten_clamp() {
    let m = model(Format::T20, 20);
    assert_eq!(
        m.chase_win_probability(80, 60, 14, 170),
        m.chase_win_probability(80, 60, 10, 170)
    );
}

proptest! {
    #[test]
    fn non_increasing_in_runs_needed(
        needed in 1u32..300,
        extra in 1u32..50,
        balls in 1u32..=120,
        wickets in 1u32..=10,
    ) {
        let m = model(Format::T20, 20);
        let easier = m.chase_win_probability(needed, balls, wickets, 400);
        let harder = m.chase_win_probability(needed + extra, balls, wickets, 400);
        prop_assert!(harder <= easier, "needed {} -> {}: {} > {}", needed, needed + extra, harder, easier);
    }

    #[test]
    fn non_decreasing_in_wickets_in_hand(
        needed in 1u32..300,
        balls in 1u32..=120,
        wickets in 0u32..10,
    ) {
        let m = model(Format::T20, 20);
        let fewer = m.chase_win_probability(needed, balls, wickets, 400);
        let more = m.chase_win_probability(needed, balls, wickets + 1, 400);
        prop_assert!(more >= fewer);
    }

    #[test]
    fn non_decreasing_in_balls_left(
        needed in 1u32..400,
        balls in 0u32..300,
        wickets in 0u32..=10,
    ) {
        let m = model(Format::OneDay, 50);
        let fewer = m.chase_win_probability(needed, balls, wickets, 500);
        let more = m.chase_win_probability(needed, balls + 1, wickets, 500);
        prop_assert!(more >= fewer);
    }

    #[test]
    fn always_a_percentage(
        needed in 0u32..500,
        balls in 0u32..400,
        wickets in 0u32..=12,
        target in 0u32..500,
    ) {
        let p = model(Format::T20, 20).chase_win_probability(needed, balls, wickets, target);
        prop_assert!((0.0..=100.0).contains(&p));
    }
}

// ── History ──────────────────────────────────────────────────────────────────

#[test]
fn no_history_before_the_chase() {
    let mut f = fixture(TossDecision::Bat);
    f.current_innings = Innings::First;
    let log = first_innings(1, 1);
    let series = win_prob::probability_history(&log, &f, &DlsConfig::default(), &WinProbConfig::default());
    assert!(series.is_empty());
}

#[test]
fn one_point_per_completed_over() {
    let f = fixture(TossDecision::Bat);
    // First innings: 2 overs, 2 per ball = 24. Target 25.
    let mut log = first_innings(2, 2);
    // Over 1 of the chase: 6 singles. Over 2: three dots so far.
    log.extend((1..=6).map(|b| delivery(Innings::Second, 0, b, 1)));
    log.extend((1..=3).map(|b| delivery(Innings::Second, 1, b, 0)));

    let series = win_prob::probability_history(&log, &f, &DlsConfig::default(), &WinProbConfig::default());
    assert_eq!(series.len(), 1);
    let point = &series[0];
    assert_eq!(point.over, 1);
    assert_eq!(point.balls_bowled, 6);
    assert!((point.team1_probability + point.team2_probability - 100.0).abs() < 1e-9);
    // North batted first, so south is chasing 19 off 6: north is favourite.
    assert!(point.team1_probability > point.team2_probability);
}

#[test]
fn team_columns_follow_the_fixture_not_the_batting_order() {
    // North fields first and chases.
    let f = fixture(TossDecision::Field);
    let mut log = first_innings(2, 2);
    log.extend((1..=6).map(|b| delivery(Innings::Second, 0, b, 1)));

    let series = win_prob::probability_history(&log, &f, &DlsConfig::default(), &WinProbConfig::default());
    assert_eq!(series.len(), 1);
    assert!(series[0].team1_probability < series[0].team2_probability);
}

#[test]
fn chase_won_mid_over_adds_a_final_point() {
    let f = fixture(TossDecision::Bat);
    // Target 13.
    let log: Vec<BallEvent> = first_innings(2, 1)
        .into_iter()
        .chain((1..=6).map(|b| delivery(Innings::Second, 0, b, 1)))
        .chain([
            delivery(Innings::Second, 1, 1, 6),
            delivery(Innings::Second, 1, 2, 1),
            // Anything after the winning run is ignored.
            delivery(Innings::Second, 1, 3, 4),
        ])
        .collect();

    let series = win_prob::probability_history(&log, &f, &DlsConfig::default(), &WinProbConfig::default());
    assert_eq!(series.len(), 2);
    let last = series.last().expect("final point");
    assert_eq!(last.over, 2);
    assert_eq!(last.balls_bowled, 8);
    assert_eq!(last.team2_probability, 100.0);
    assert_eq!(last.team1_probability, 0.0);
}

#[test]
fn all_out_chase_ends_at_zero() {
    let f = fixture(TossDecision::Bat);
    let mut log = first_innings(2, 1);
    for b in 1..=6 {
        let mut out = delivery(Innings::Second, 0, b, 0);
        out.is_wicket = true;
        out.wicket_type = Some(WicketType::Bowled);
        out.player_out_id = Some("bat-1".into());
        log.push(out);
    }
    for b in 1..=4 {
        let mut out = delivery(Innings::Second, 1, b, 0);
        out.is_wicket = true;
        out.wicket_type = Some(WicketType::Caught);
        out.player_out_id = Some("bat-1".into());
        log.push(out);
    }

    let series = win_prob::probability_history(&log, &f, &DlsConfig::default(), &WinProbConfig::default());
    let last = series.last().expect("final point");
    assert_eq!(last.team2_probability, 0.0);
    assert_eq!(last.balls_bowled, 10);
}

#[test]
fn history_is_restartable() {
    let f = fixture(TossDecision::Bat);
    let mut log = first_innings(2, 2);
    log.extend((1..=6).map(|b| delivery(Innings::Second, 0, b, b % 3)));
    log.extend((1..=6).map(|b| delivery(Innings::Second, 1, b, 1)));

    let a = win_prob::probability_history(&log, &f, &DlsConfig::default(), &WinProbConfig::default());
    log.reverse();
    let b = win_prob::probability_history(&log, &f, &DlsConfig::default(), &WinProbConfig::default());
    assert_eq!(a, b);
}

#[test]
fn interrupted_chase_uses_revised_target() {
    let mut f = fixture(TossDecision::Bat);
    f.total_overs = 20;
    f.interruptions.push(Interruption { overs_bowled: 5.0, wickets_lost: 0, overs_lost: 5 });
    // 150 in the first innings: 120 balls, the first 30 of them twos.
    let mut log = first_innings(20, 1);
    for b in log.iter_mut().take(30) {
        b.runs_scored = 2;
    }
    assert_eq!(log.iter().map(|b| b.total_runs()).sum::<u32>(), 150);

    assert_eq!(win_prob::chase_target(&log, &f, &DlsConfig::default()), 118);
}
