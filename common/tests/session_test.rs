use anyhow::Result;
use common::{
    Color, CountdownStep, GameConfig, GameEvent, GameEventMessage, Glyph, Heading, Key, Phase,
    PlayerSetup, Position, Seat, Session, SetupError,
};
use std::time::Duration;

const COUNTDOWN: Duration = Duration::from_millis(3800);
const TICK: Duration = Duration::from_millis(500);

fn config() -> GameConfig {
    GameConfig { edge_offset: 4, ..GameConfig::default() }
}

fn roster(names: &[&str]) -> Vec<PlayerSetup> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| PlayerSetup::new(*n, Color::rgb(40 * i as u8, 200, 90), Glyph::new(i).unwrap()))
        .collect()
}

fn playing_session(names: &[&str]) -> Result<Session> {
    let mut session = Session::new(config(), roster(names))?;
    session.update(COUNTDOWN)?;
    assert!(session.is_playing());
    Ok(session)
}

fn events(messages: &[GameEventMessage]) -> Vec<GameEvent> {
    messages.iter().map(|m| m.event.clone()).collect()
}

fn position(session: &Session, seat: Seat) -> Position {
    session.state().player(seat).unwrap().position
}

#[test]
fn test_wall_crash_awards_the_survivor() -> Result<()> {
    let mut session = playing_session(&["ann", "bea"])?;
    assert_eq!(position(&session, Seat::First), Position::new(4, 4));
    assert_eq!(position(&session, Seat::Second), Position::new(36, 36));

    session.handle_key(Key::ArrowLeft)?;
    session.handle_key(Key::Char('w'))?;

    for step in 1..=4 {
        let out = session.update(TICK)?;
        assert!(!events(&out).iter().any(|e| matches!(e, GameEvent::PlayerEliminated { .. })));
        assert_eq!(position(&session, Seat::First), Position::new(4 - step, 4));
        assert_eq!(position(&session, Seat::Second), Position::new(36, 36 - step));
    }

    let out = events(&session.update(TICK)?);
    assert!(out.contains(&GameEvent::PlayerEliminated {
        seat: Seat::First,
        position: Position::new(-1, 4),
        color: Color::rgb(0, 200, 90),
    }));
    assert!(out.contains(&GameEvent::RoundEnded { winner: Some(Seat::Second) }));
    assert!(out.contains(&GameEvent::ScoreChanged {
        seat: Seat::Second,
        name: "bea".to_string(),
        wins: 1
    }));

    assert_eq!(session.scores().get("bea"), Some(1));
    assert_eq!(session.scores().get("ann"), Some(0));
    assert!(!session.is_ticking());
    assert!(matches!(session.phase(), Phase::RoundOver { .. }));
    Ok(())
}

#[test]
fn test_next_round_starts_after_delay_and_keeps_scores() -> Result<()> {
    let mut session = playing_session(&["ann", "bea"])?;
    session.handle_key(Key::ArrowUp)?;
    for _ in 0..5 {
        session.update(TICK)?;
    }
    assert!(matches!(session.phase(), Phase::RoundOver { .. }));

    assert!(session.update(Duration::from_millis(1999))?.is_empty());
    let out = events(&session.update(Duration::from_millis(1))?);
    assert_eq!(out[0], GameEvent::RoundStarted { round: 2 });
    assert_eq!(out[1], GameEvent::CountdownChanged { step: CountdownStep::Count(3) });

    assert_eq!(session.round(), 2);
    assert_eq!(session.countdown_label().as_deref(), Some("3"));
    assert!(session.state().trails.is_empty());
    assert!(session.state().players.iter().all(|p| p.is_alive && p.heading == Heading::Stationary));
    assert_eq!(position(&session, Seat::First), Position::new(4, 4));
    assert_eq!(session.scores().get("bea"), Some(1));
    Ok(())
}

#[test]
fn test_crossing_own_trail_is_fatal() -> Result<()> {
    let mut session = playing_session(&["ann", "bea"])?;

    session.handle_key(Key::ArrowRight)?;
    session.update(TICK)?; // (5, 4)
    session.update(TICK)?; // (6, 4)
    session.handle_key(Key::ArrowDown)?;
    session.update(TICK)?; // (6, 5)
    session.handle_key(Key::ArrowLeft)?;
    session.update(TICK)?; // (5, 5)
    session.handle_key(Key::ArrowUp)?;
    assert!(session.state().player(Seat::First).unwrap().is_alive);

    let out = events(&session.update(TICK)?);
    assert!(out.iter().any(|e| matches!(
        e,
        GameEvent::PlayerEliminated { seat: Seat::First, position, .. } if *position == Position::new(5, 4)
    )));
    assert_eq!(session.scores().get("bea"), Some(1));
    Ok(())
}

#[test]
fn test_everyone_out_on_the_same_tick_scores_nobody() -> Result<()> {
    let mut session = playing_session(&["ann", "bea", "cal"])?;
    session.handle_key(Key::ArrowLeft)?; // (4, 4) heading left
    session.handle_key(Key::Char('d'))?; // (36, 36) heading right, out on tick 4
    session.handle_key(Key::Char('j'))?; // (4, 36) heading left

    for _ in 0..4 {
        session.update(TICK)?;
    }
    assert_eq!(session.state().alive_count(), 2);

    let out = events(&session.update(TICK)?);
    assert!(out.contains(&GameEvent::RoundEnded { winner: None }));
    assert!(!out.iter().any(|e| matches!(e, GameEvent::ScoreChanged { .. })));
    assert!(session.scores().entries().iter().all(|e| e.wins == 0));
    Ok(())
}

#[test]
fn test_reverse_key_is_ignored() -> Result<()> {
    let mut session = playing_session(&["ann", "bea"])?;
    session.handle_key(Key::ArrowRight)?;
    assert!(session.handle_key(Key::ArrowLeft)?.is_empty());
    session.update(TICK)?;
    assert_eq!(position(&session, Seat::First), Position::new(5, 4));
    Ok(())
}

#[test]
fn test_keys_are_ignored_until_go() -> Result<()> {
    let mut session = Session::new(config(), roster(&["ann", "bea"]))?;
    assert!(session.handle_key(Key::ArrowRight)?.is_empty());

    let out = events(&session.update(Duration::from_millis(3000))?);
    assert_eq!(
        out,
        vec![
            GameEvent::RoundStarted { round: 1 },
            GameEvent::CountdownChanged { step: CountdownStep::Count(3) },
            GameEvent::CountdownChanged { step: CountdownStep::Count(2) },
            GameEvent::CountdownChanged { step: CountdownStep::Count(1) },
            GameEvent::CountdownChanged { step: CountdownStep::Go },
        ]
    );
    assert!(!session.is_ticking());
    assert!(session.handle_key(Key::ArrowRight)?.is_empty());

    session.update(Duration::from_millis(800))?;
    assert!(session.is_ticking());
    assert_eq!(session.handle_key(Key::ArrowRight)?.len(), 1);
    Ok(())
}

#[test]
fn test_trail_only_grows_within_a_round() -> Result<()> {
    let mut session = playing_session(&["ann", "bea", "cal", "dee"])?;
    session.handle_key(Key::ArrowDown)?;
    session.handle_key(Key::Char('w'))?;
    session.handle_key(Key::Char('l'))?;
    session.handle_key(Key::Char('g'))?;

    let mut previous = session.state().trails.clone();
    for _ in 0..10 {
        session.update(TICK)?;
        let trails = &session.state().trails;
        assert!(previous.iter().all(|cell| trails.contains(cell)));
        assert!(trails.len() >= previous.len());
        previous = trails.clone();
    }
    assert_eq!(previous.len(), 40);
    Ok(())
}

#[test]
fn test_restarting_a_round_resets_everything() -> Result<()> {
    let mut session = playing_session(&["ann", "bea"])?;
    session.handle_key(Key::ArrowRight)?;
    session.update(TICK)?;

    session.start_round();
    session.start_round();
    assert!(!session.is_ticking());
    assert!(session.state().trails.is_empty());
    assert_eq!(position(&session, Seat::First), Position::new(4, 4));
    assert!(session.state().players.iter().all(|p| p.is_alive && p.heading == Heading::Stationary));

    // one step per interval once the new countdown is over
    session.update(COUNTDOWN)?;
    session.handle_key(Key::ArrowRight)?;
    let out = events(&session.update(TICK)?);
    assert_eq!(
        out.iter().filter(|e| matches!(e, GameEvent::PlayerMoved { .. })).count(),
        1
    );
    Ok(())
}

#[test]
fn test_first_round_opening_is_delivered_once() -> Result<()> {
    let mut session = Session::new(config(), roster(&["ann", "bea"]))?;
    let out = session.update(Duration::from_millis(10))?;
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].round, 1);
    assert_eq!(
        events(&out),
        vec![
            GameEvent::RoundStarted { round: 1 },
            GameEvent::CountdownChanged { step: CountdownStep::Count(3) },
        ]
    );
    assert!(session.update(Duration::from_millis(10))?.is_empty());
    Ok(())
}

#[test]
fn test_stalled_frame_does_not_burst_ticks() -> Result<()> {
    let mut session = playing_session(&["ann", "bea"])?;
    session.handle_key(Key::ArrowRight)?;

    session.update(Duration::from_secs(5))?;
    assert_eq!(session.state().current_tick(), 2);
    assert_eq!(position(&session, Seat::First), Position::new(6, 4));

    // the backlog is gone, not deferred
    session.update(TICK)?;
    assert_eq!(session.state().current_tick(), 3);
    Ok(())
}

#[test]
fn test_invalid_roster_is_rejected() {
    let err = Session::new(config(), roster(&["ann", " "])).err().unwrap();
    assert_eq!(err.downcast_ref::<SetupError>(), Some(&SetupError::BlankName { seat: 2 }));

    let bad = GameConfig { tick_interval_ms: 0, ..config() };
    assert!(Session::new(bad, roster(&["ann"])).is_err());
}
