//! Headless balance simulator.
//!
//! Drives the engine through N seconds of scripted play — production ticks,
//! auto-attacks, wave respawns, typed words at a configurable WPM — exactly
//! the way the external schedulers would, then prints a progress report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 600 simulated seconds at 60 WPM
//!   cargo run --bin simulate -- -s 3600 -w 90   # One hour at 90 WPM
//!   cargo run --bin simulate -- --splash 3      # Splash-3 attacks

use std::env;
use typestorm::core::constants::{KILL_XP_PER_WAVE, WAVE_RESPAWN_DELAY_SECONDS};
use typestorm::factories::tick_production;
use typestorm::GameState;

struct SimConfig {
    seconds: u64,
    wpm: f64,
    splash: usize,
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig {
        seconds: 600,
        wpm: 60.0,
        splash: 1,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seconds" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.seconds = v;
                }
                i += 2;
            }
            "-w" | "--wpm" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.wpm = v;
                }
                i += 2;
            }
            "--splash" => {
                if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.splash = v;
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    config
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("typestorm balance simulator");
    println!("  duration: {}s  wpm: {}  splash: {}", config.seconds, config.wpm, config.splash);
    println!();

    let mut now_ms = chrono::Utc::now().timestamp_millis();
    let mut state = GameState::new(now_ms);
    state.update_typing_stats(config.wpm, 95.0);

    // One typed word deals damage proportional to WPM; words land at the
    // configured rate spread across the second.
    let words_per_second = config.wpm / 60.0;
    let word_damage = 2.0 + config.wpm / 20.0;

    let mut waves_cleared = 0u32;
    let mut total_kills = 0u32;
    let mut respawn_countdown = 0u64;
    let mut word_accum = 0.0;

    for second in 0..config.seconds {
        now_ms += 1000;
        state.play_time_seconds += 1;
        tick_production(&mut state, now_ms);

        if state.enemies.is_empty() {
            if respawn_countdown == 0 {
                respawn_countdown = WAVE_RESPAWN_DELAY_SECONDS;
            }
            respawn_countdown -= 1;
            if respawn_countdown == 0 {
                state.spawn_wave();
            }
            continue;
        }

        // Auto-attack tick
        if let Some(target) = state.enemies.first().map(|e| e.id.clone()) {
            let report = state.damage_enemy(&target, 0.0, 1, now_ms);
            total_kills += report.kills;
            if report.wave_cleared {
                waves_cleared += 1;
            }
        }

        // Typed words this second
        word_accum += words_per_second;
        let words = word_accum.floor() as u32;
        word_accum -= words as f64;
        for _ in 0..words {
            let Some(target) = state.enemies.first().map(|e| e.id.clone()) else {
                break;
            };
            let report = state.damage_enemy(&target, word_damage, config.splash, now_ms);
            total_kills += report.kills;
            if report.wave_cleared {
                waves_cleared += 1;
            }
        }

        // Spend on the cheapest affordable factory step now and then
        if second % 10 == 0 {
            let ids: Vec<String> = state.factories.iter().map(|f| f.id.clone()).collect();
            for id in ids {
                if state.upgrade_factory(&id) {
                    break;
                }
            }
        }
    }

    println!("Result after {} simulated seconds:", config.seconds);
    println!("  wave:          {}", state.wave);
    println!("  waves cleared: {}", waves_cleared);
    println!("  kills:         {}", total_kills);
    println!("  level:         {}", state.level);
    println!("  money:         {:.0}", state.money);
    for resource in &state.resources {
        println!(
            "  {:<13} {:.0} ({:+.1}/s)",
            format!("{}:", resource.name),
            resource.amount,
            resource.per_second
        );
    }
    println!(
        "  xp/kill at current wave: {:.0}",
        KILL_XP_PER_WAVE * state.wave as f64
    );
}
