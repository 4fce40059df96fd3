//! Street Racer entry point
//!
//! Headless native runner: loads the saved record, lets a simple autopilot
//! drive until it crashes (or the frame cap is hit), then enters the result
//! on the leaderboard.
//!
//! Usage: `street-racer [NAME]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Street Racer (native) starting...");

    let name = std::env::args().nth(1).unwrap_or_else(|| "AUTOPILOT".to_string());
    let mut app = street_racer::App::load(street_racer::Config::from_env());
    run(&mut app, &name);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend; the library is driven by the host page
}

/// Ten simulated minutes
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u32 = 6_000;

#[cfg(not(target_arch = "wasm32"))]
fn run(app: &mut street_racer::App, name: &str) {
    use street_racer::consts::TICK_INTERVAL_MS;
    use street_racer::renderer::render;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    app.start_game(seed);

    let mut frames = 0;
    while !app.is_game_over() && frames < MAX_FRAMES {
        if let Some(key) = autopilot_key(app) {
            app.on_key_press(&key);
        }
        app.advance_clock(TICK_INTERVAL_MS);
        frames += 1;

        if let Some(session) = app.session() {
            let commands = render(&session.render_state());
            log::trace!("Frame {}: {} draw commands", frames, commands.len());
        }
    }

    let score = app.session().map(|s| s.score()).unwrap_or(0);
    println!("Drove {} frames, score {}", frames, score);

    if app.is_game_over() {
        match app.submit_name(name) {
            Ok(Some(rank)) => println!("{} placed #{} on the leaderboard", name, rank),
            Ok(None) => println!("{} did not make the leaderboard", name),
            Err(e) => log::error!("Could not record score: {}", e),
        }
    } else if let Err(e) = app.save() {
        log::error!("Could not save game: {}", e);
    }

    println!("\nHigh scores:");
    for (i, entry) in app.leaderboard_top10().iter().enumerate() {
        println!("{:>2}. {:<16} {}", i + 1, entry.name, entry.score);
    }
}

/// Steer out of the enemy's lane while it is still ahead of us
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_key(app: &street_racer::App) -> Option<String> {
    use street_racer::Action;
    use street_racer::consts::{CAR_HALF_WIDTH, PLAYER_MAX_X, PLAYER_MIN_X, STEER_STEP};

    let session = app.session()?;
    let player = session.player().pos;
    let enemy = session.enemy().pos;
    if enemy.y > player.y || (enemy.x - player.x).abs() > 2 * CAR_HALF_WIDTH {
        return None;
    }

    let want_left = enemy.x >= player.x && player.x - STEER_STEP >= PLAYER_MIN_X
        || player.x + STEER_STEP > PLAYER_MAX_X;
    let action = match (want_left, session.mirrored_controls()) {
        (true, false) | (false, true) => Action::MoveLeft,
        _ => Action::MoveRight,
    };
    Some(app.key_bindings().keysym(action).to_string())
}
