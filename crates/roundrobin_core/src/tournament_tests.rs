use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn player(first: &str, rating: i64) -> Participant {
    Participant::new(first, "Test", rating).unwrap()
}

fn four_player_tournament() -> Tournament {
    let mut t = Tournament::new(date(2025, 9, 1), date(2025, 12, 31));
    t.add_participants(vec![
        player("A", 1400),
        player("B", 1600),
        player("C", 1200),
        player("D", 1800),
    ]);
    t
}

fn id(i: usize) -> ParticipantId {
    ParticipantId(i)
}

#[test]
fn test_register_single_and_batch() {
    let mut t = Tournament::new(date(2025, 9, 1), date(2025, 5, 30));
    let first = t.add_participants(player("Laura", 1400));
    let batch = t.add_participants([player("John", 1450), player("Jane", 1750)]);
    let slice = [player("Emily", 1600)];
    let more = t.add_participants(&slice[..]);

    assert_eq!(first, vec![id(0)]);
    assert_eq!(batch, vec![id(1), id(2)]);
    assert_eq!(more, vec![id(3)]);
    assert_eq!(t.participants().len(), 4);
    assert_eq!(t.participant(id(2)).unwrap().first_name, "Jane");
    assert!(t.participant(id(4)).is_none());
}

#[test]
fn test_identical_players_are_distinct() {
    let mut t = Tournament::new(date(2025, 1, 1), date(2025, 2, 1));
    let twin = player("Twin", 1500);
    let ids = t.add_participants(vec![twin.clone(), twin]);
    t.generate_schedule().unwrap();

    assert_ne!(ids[0], ids[1]);
    // equal values, still two entries
    assert_eq!(t.participants()[0], t.participants()[1]);
    assert_eq!(t.scoreboard().len(), 2);
    let only = &t.matchdays()[0].matches[0];
    assert_ne!(only.white(), only.black());
}

#[test]
fn test_end_before_start_is_accepted() {
    let t = Tournament::new(date(2025, 9, 1), date(2025, 5, 30));
    assert!(t.end_date() < t.start_date());
}

#[test]
fn test_from_date_strs() {
    let t = Tournament::from_date_strs("2025-09-01", "2025-12-31").unwrap();
    assert_eq!(t.start_date(), date(2025, 9, 1));

    let err = Tournament::from_date_strs("next monday", "2025-12-31").unwrap_err();
    assert_eq!(err, TournamentError::InvalidDate("next monday".to_string()));
}

#[test]
fn test_schedule_needs_two_players() {
    let mut t = Tournament::new(date(2025, 1, 1), date(2025, 2, 1));
    assert_eq!(
        t.generate_schedule().unwrap_err(),
        TournamentError::NotEnoughParticipants { count: 0 }
    );

    t.add_participants(player("Solo", 1000));
    assert_eq!(
        t.generate_schedule().unwrap_err(),
        TournamentError::NotEnoughParticipants { count: 1 }
    );
    assert!(t.matchdays().is_empty());
}

#[test]
fn test_four_player_schedule_layout() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();

    let days: Vec<Vec<[ParticipantId; 2]>> = t
        .matchdays()
        .iter()
        .map(|day| day.matches.iter().map(|m| m.opponents).collect())
        .collect();

    assert_eq!(
        days,
        vec![
            vec![[id(0), id(1)], [id(3), id(2)]],
            vec![[id(2), id(0)], [id(1), id(3)]],
            vec![[id(0), id(3)], [id(2), id(1)]],
        ]
    );
    assert!(t.matchdays().iter().all(|day| day.bye.is_none()));
}

#[test]
fn test_handicap_follows_player_through_swap() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();

    // A (1400) white vs B (1600): B gives up 5 minutes
    assert_eq!(t.matchdays()[0].matches[0].time_limits, [60, 55]);
    // D (1800) white vs C (1200): D gives up 15 minutes
    assert_eq!(t.matchdays()[0].matches[1].time_limits, [45, 60]);
    // A (1400) vs C (1200), built with A first then swapped: A keeps 55
    let swapped = &t.matchdays()[1].matches[0];
    assert_eq!(swapped.opponents, [id(2), id(0)]);
    assert_eq!(swapped.time_limits, [60, 55]);
}

#[test]
fn test_odd_roster_gets_byes() {
    let mut t = Tournament::new(date(2025, 1, 1), date(2025, 2, 1));
    t.add_participants(vec![player("A", 1000), player("B", 1000), player("C", 1000)]);
    t.generate_schedule().unwrap();

    assert_eq!(t.matchdays().len(), 3);
    let byes: Vec<Option<ParticipantId>> = t.matchdays().iter().map(|d| d.bye).collect();
    assert_eq!(byes, vec![Some(id(2)), Some(id(1)), Some(id(0))]);

    for day in t.matchdays() {
        assert_eq!(day.len(), 1);
        let bye = day.bye.unwrap();
        assert!(day.match_of(bye).is_none());
    }
}

#[test]
fn test_regenerating_replaces_schedule() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();
    t.set_result(0, 0, MatchResult::WhiteWins).unwrap();
    t.evaluate_all().unwrap();

    t.generate_schedule().unwrap();
    assert_eq!(t.matchdays().len(), 3);
    assert!(t.matches().all(|m| !m.is_decided()));
    assert_eq!(t.standing(id(0)), Some(Standing::default()));
}

#[test]
fn test_schedule_staleness() {
    let mut t = four_player_tournament();
    assert!(!t.is_schedule_stale());

    t.generate_schedule().unwrap();
    assert!(!t.is_schedule_stale());

    t.add_participants(player("E", 1500));
    assert!(t.is_schedule_stale());
    // the new player has no scoreboard entry until a reset
    assert_eq!(t.standing(id(4)), None);

    t.reset_scoreboard();
    assert_eq!(t.standing(id(4)), Some(Standing::default()));

    t.generate_schedule().unwrap();
    assert!(!t.is_schedule_stale());
    assert_eq!(t.matchdays().len(), 5);
}

#[test]
fn test_match_lookup() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();

    assert!(t.match_mut(2, 1).is_ok());
    assert_eq!(
        t.match_mut(3, 0).unwrap_err(),
        TournamentError::MatchNotFound { matchday: 3, index: 0 }
    );
    assert_eq!(
        t.set_result(0, 2, MatchResult::Draw).unwrap_err(),
        TournamentError::MatchNotFound { matchday: 0, index: 2 }
    );
    assert!(matches!(
        t.set_result(0, 0, MatchResult::Ongoing).unwrap_err(),
        TournamentError::InvalidResult(_)
    ));
}

#[test]
fn test_evaluate_match_returns_award() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();
    t.matchday_mut(0).unwrap().matches[1].black_wins();

    let game = t.matchdays()[0].matches[1].clone();
    let eval = t.evaluate_match(&game).unwrap();
    assert_eq!(eval.opponents, [id(3), id(2)]);
    assert_eq!(eval.scores, [0, 3]);
    assert_eq!(t.standing(id(2)), Some(Standing { games: 1, score: 3 }));
}

#[test]
fn test_evaluate_match_double_counts() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();
    t.set_result(0, 0, MatchResult::WhiteWins).unwrap();

    let game = t.matchdays()[0].matches[0].clone();
    t.evaluate_match(&game).unwrap();
    t.evaluate_match(&game).unwrap();

    assert_eq!(t.standing(id(0)), Some(Standing { games: 2, score: 6 }));
    assert_eq!(t.standing(id(1)), Some(Standing { games: 2, score: 0 }));

    // a full recount repairs it
    t.evaluate_all().unwrap();
    assert_eq!(t.standing(id(0)), Some(Standing { games: 1, score: 3 }));
}

#[test]
fn test_evaluate_foreign_match_fails_cleanly() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();

    let stranger = player("Z", 2000);
    let mut foreign = Match::new((id(0), &t.participants()[0].clone()), (id(9), &stranger), &TimeControl::default());
    foreign.draw();

    assert_eq!(
        t.evaluate_match(&foreign).unwrap_err(),
        TournamentError::UnknownParticipant(id(9))
    );
    assert_eq!(t.standing(id(0)), Some(Standing::default()));
}

#[test]
fn test_evaluate_all_is_idempotent() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();
    t.set_result(0, 0, MatchResult::BlackWins).unwrap();
    t.set_result(1, 1, MatchResult::Draw).unwrap();
    t.set_result(2, 0, MatchResult::WhiteWins).unwrap();

    t.evaluate_all().unwrap();
    let first = t.scoreboard().clone();
    t.evaluate_all().unwrap();
    assert_eq!(t.scoreboard(), &first);
}

#[test]
fn test_custom_scoring_rules() {
    let mut t = four_player_tournament();
    t.scoring = ScoringRules { win: 2, draw: 1 };
    t.generate_schedule().unwrap();
    t.set_result(0, 1, MatchResult::WhiteWins).unwrap();
    t.evaluate_all().unwrap();

    assert_eq!(t.standing(id(3)), Some(Standing { games: 1, score: 2 }));
}

#[test]
fn test_serde_round_trip_drops_scoreboard() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();
    t.set_result(0, 0, MatchResult::Draw).unwrap();
    t.evaluate_all().unwrap();

    let json = serde_json::to_string(&t).unwrap();
    let mut restored: Tournament = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.matchdays(), t.matchdays());
    assert_eq!(restored.participants(), t.participants());
    assert!(restored.scoreboard().is_empty());

    restored.evaluate_all().unwrap();
    assert_eq!(restored.scoreboard(), t.scoreboard());
}

#[test]
fn test_validate_rejects_broken_pairings() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();
    assert_eq!(t.validate(), Ok(()));

    let mut self_paired = t.clone();
    self_paired.matchdays[1].matches[0].opponents = [id(2), id(2)];
    assert_eq!(
        self_paired.validate(),
        Err(TournamentError::InvalidPairing { matchday: 1, index: 0 })
    );

    let mut stranger = t.clone();
    stranger.matchdays[0].matches[1].opponents[1] = id(7);
    assert_eq!(stranger.validate(), Err(TournamentError::UnknownParticipant(id(7))));

    let mut bad_bye = t.clone();
    bad_bye.matchdays[2].bye = Some(id(4));
    assert_eq!(bad_bye.validate(), Err(TournamentError::UnknownParticipant(id(4))));

    let mut busy_bye = t;
    let playing = busy_bye.matchdays[2].matches[1].white();
    busy_bye.matchdays[2].bye = Some(playing);
    assert_eq!(
        busy_bye.validate(),
        Err(TournamentError::InvalidPairing { matchday: 2, index: 1 })
    );
}

#[test]
fn test_deserialize_rejects_self_pairing() {
    let mut t = four_player_tournament();
    t.generate_schedule().unwrap();
    t.matchdays[0].matches[0].opponents = [id(0), id(0)];
    t.matchdays[0].matches[0].draw();

    let json = serde_json::to_string(&t).unwrap();
    let err = serde_json::from_str::<Tournament>(&json).unwrap_err();
    assert!(err.to_string().contains("does not pair two distinct participants"));
}

#[test]
fn test_schedule_with_extreme_ratings() {
    let mut t = Tournament::new(date(2025, 9, 1), date(2025, 12, 31));
    t.add_participants(vec![player("Big", i64::MAX / 2), player("Zero", 0), player("Max", i64::MAX)]);
    t.generate_schedule().unwrap();

    assert_eq!(t.matchdays().len(), 3);
    let weakest = id(1);
    for m in t.matches().filter(|m| m.involves(weakest)) {
        let weak_side = if m.white() == weakest { 0 } else { 1 };
        assert_eq!(m.time_limits[weak_side], 60);
        assert!(m.time_limits[1 - weak_side] < 0);
    }
}
