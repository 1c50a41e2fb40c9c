//! Dino Run game logic: phase transitions, physics, spawning, collisions.

use super::types::*;
use crate::input::FrameInput;

/// Things that happened during one call to [`update_session`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Started,
    Restarted,
    Spawned,
    /// Cacti that scrolled off the left edge and were dropped.
    Culled { count: usize },
    Jumped,
    Collision { lives_left: u32 },
    GameOver { score: u64 },
}

/// Advance the session by `dt` seconds with this frame's input.
pub fn update_session(session: &mut GameSession, dt: f64, input: &FrameInput) -> Vec<SessionEvent> {
    let mut events = Vec::new();

    match session.phase {
        GamePhase::NotStarted => {
            if input.pressed() {
                session.phase = GamePhase::Playing;
                log::info!("session started");
                events.push(SessionEvent::Started);
            }
        }
        GamePhase::Playing => step_playing(session, dt, input, &mut events),
        GamePhase::GameOver => {
            if input.pressed() {
                session.restart();
                log::info!("session restarted");
                events.push(SessionEvent::Restarted);
            }
        }
    }

    events
}

/// One simulation frame while playing.
fn step_playing(
    session: &mut GameSession,
    dt: f64,
    input: &FrameInput,
    events: &mut Vec<SessionEvent>,
) {
    // 1. Score is time survived
    session.score += dt;

    // 2. Background
    scroll_background(session, dt);

    // 3. Move cacti, drop the ones gone past the left edge
    for obstacle in &mut session.obstacles {
        obstacle.update(dt);
    }
    let before = session.obstacles.len();
    session.obstacles.retain(|o| !o.is_offscreen());
    let culled = before - session.obstacles.len();
    if culled > 0 {
        log::debug!("culled {} off-screen cacti", culled);
        events.push(SessionEvent::Culled { count: culled });
    }

    // 4. Spawn timer
    session.spawn_timer += dt;
    if session.spawn_timer >= session.config.spawn_delay {
        session.spawn_timer = 0.0;
        session.spawn_obstacle();
        events.push(SessionEvent::Spawned);
    }

    // 5. Gravity
    apply_gravity(session, dt);

    // 6. Jump (no grounded check: the dino may re-jump mid-air)
    if input.jump {
        session.dino.velocity = session.config.jump_velocity;
        events.push(SessionEvent::Jumped);
    }

    // 7. At most one collision per frame
    if let Some(index) = find_collision(session) {
        session.obstacles.remove(index);
        session.lives = session.lives.saturating_sub(1);
        log::info!("hit a cactus, {} lives left", session.lives);
        events.push(SessionEvent::Collision {
            lives_left: session.lives,
        });

        // 8. Out of lives
        if session.lives == 0 {
            session.phase = GamePhase::GameOver;
            let score = session.displayed_score();
            log::info!("game over with score {}", score);
            events.push(SessionEvent::GameOver { score });
        }
    }
}

/// Advance the background offset, wrapping at the art width.
fn scroll_background(session: &mut GameSession, dt: f64) {
    let width = session.config.bg_width;
    session.bg_offset += session.config.bg_scroll_speed * dt;
    if session.bg_offset >= width {
        session.bg_offset %= width;
    }
}

/// Integrate velocity and position, clamping between ground and ceiling.
/// Returns true if a clamp zeroed the velocity.
fn apply_gravity(session: &mut GameSession, dt: f64) -> bool {
    let ground = session.config.ground_y;
    let ceiling = session.config.ceiling_y();
    let dino = &mut session.dino;

    dino.velocity += session.config.gravity * dt;
    dino.y += dino.velocity * dt;

    if dino.y < ground {
        dino.y = ground;
        dino.velocity = 0.0;
        true
    } else if dino.y > ceiling {
        dino.y = ceiling;
        dino.velocity = 0.0;
        true
    } else {
        false
    }
}

/// Index of the cactus the dino hits, scanning newest first.
fn find_collision(session: &GameSession) -> Option<usize> {
    let dino = session.dino.bounds();
    session
        .obstacles
        .iter()
        .rposition(|o| dino.overlaps(&o.bounds()))
}
