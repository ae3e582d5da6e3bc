use std::{env, path::PathBuf, time::Duration};

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("STICKMAN_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

/// Path of the game file listing lives and levels.
pub fn config_path() -> PathBuf {
    env::var("STICKMAN_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/game.toml"))
}

pub fn tick_interval() -> Duration {
    tick_interval_from(env::var("STICKMAN_TICK_HZ").ok().as_deref())
}

// Values outside MIN_TICK_HZ..=MAX_TICK_HZ fall back to the default.
fn tick_interval_from(value: Option<&str>) -> Duration {
    let hz = value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|hz| (MIN_TICK_HZ..=MAX_TICK_HZ).contains(hz))
        .unwrap_or(DEFAULT_TICK_HZ);
    Duration::from_micros(1_000_000 / hz)
}

pub const DEFAULT_TICK_HZ: u64 = 60;
pub const MIN_TICK_HZ: u64 = 1;
pub const MAX_TICK_HZ: u64 = 1000;
pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_rate_defaults_to_sixty_hertz() {
        assert_eq!(tick_interval_from(None), Duration::from_micros(16_666));
        assert_eq!(tick_interval_from(Some("fast")), Duration::from_micros(16_666));
    }

    #[test]
    fn tick_rate_within_range_is_used() {
        assert_eq!(tick_interval_from(Some("1")), Duration::from_secs(1));
        assert_eq!(tick_interval_from(Some(" 1000 ")), Duration::from_millis(1));
    }

    #[test]
    fn out_of_range_tick_rate_never_yields_a_zero_period() {
        for value in ["0", "1001", "2000000", "18446744073709551615"] {
            let interval = tick_interval_from(Some(value));
            assert_eq!(interval, Duration::from_micros(16_666), "hz {value}");
            assert!(!interval.is_zero());
        }
    }
}
