//! Optional stop-sound playback.
//!
//! Playback failures never block the stop sequence; they are logged as
//! warnings and forgotten.

use std::process::{Command, Stdio};

use crate::Config;

/// Plays the configured stop sound, if enabled.
///
/// With a `sound_command` configured the command is spawned detached so
/// the player outlives the stop sequence; otherwise a terminal bell is
/// emitted.
pub fn play_stop_sound(config: &Config) {
    if !config.play_sound {
        return;
    }
    match &config.sound_command {
        Some(command) => spawn_player(command),
        None => {
            use std::io::Write;
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

fn spawn_player(command: &str) {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        tracing::warn!("sound command is empty");
        return;
    };
    match Command::new(program)
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_child) => tracing::debug!(command, "playing stop sound"),
        Err(error) => tracing::warn!(%error, command, "failed to play stop sound"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(play_sound: bool, sound_command: Option<&str>) -> Config {
        Config {
            log_path: "Time Tracker.md".into(),
            play_sound,
            sound_command: sound_command.map(String::from),
            capture_annotation: true,
        }
    }

    #[test]
    fn test_disabled_sound_is_a_no_op() {
        play_stop_sound(&config(false, Some("definitely-not-a-real-player")));
    }

    #[test]
    fn test_missing_player_does_not_panic() {
        // Spawn failure is a soft warning only.
        play_stop_sound(&config(true, Some("definitely-not-a-real-player xyz.mp3")));
    }

    #[test]
    fn test_empty_command_does_not_panic() {
        play_stop_sound(&config(true, Some("   ")));
    }
}
