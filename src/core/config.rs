use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub tracking: TrackingConfig,
    pub playback: PlaybackConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    /// Hands below this tracker score are skipped before classification.
    pub min_tracking_confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackConfig {
    /// JSON-lines recording of tracked frames for the replay binary.
    pub recording_path: String,
    /// Sleep between frames to mimic the original capture rate.
    pub realtime: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            tracking: TrackingConfig {
                min_tracking_confidence: env::var("MIN_TRACKING_CONFIDENCE")
                    .unwrap_or_else(|_| "0.7".to_string())
                    .parse()
                    .unwrap_or(0.7),
            },
            playback: PlaybackConfig {
                recording_path: env::var("RECORDING_PATH")
                    .unwrap_or_else(|_| "recordings/session.jsonl".to_string()),
                realtime: env::var("REALTIME_PLAYBACK")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .unwrap_or(false),
            },
            monitoring: MonitoringConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}
