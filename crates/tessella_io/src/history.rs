//! Run-history persistence.
//!
//! A run is recorded as a JSONL event stream: one `Started` header carrying
//! the configuration fingerprint, one `Snapshot` per generation, and a
//! `Finished` summary. Finished logs can be archived as gzip and snapshots
//! can be read back for analysis.

use crate::error::{IoError, Result};
use chrono::Utc;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tessella_data::{GenerationStats, RunSummary};

/// RFC 3339 timestamp for event records.
#[must_use]
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// One record in the run-history stream.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event")]
pub enum RunEvent {
    Started {
        grid_size: usize,
        wraparound: bool,
        pattern: String,
        seed: u64,
        fingerprint: String,
        timestamp: String,
    },
    Snapshot {
        generation: u64,
        stats: GenerationStats,
        timestamp: String,
    },
    Finished {
        summary: RunSummary,
        timestamp: String,
    },
}

/// Appends run events to `<log_dir>/run.jsonl`.
pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    log_dir: String,
}

impl HistoryLogger {
    pub fn new() -> Result<Self> {
        Self::new_at("logs")
    }

    pub fn new_at(dir: &str) -> Result<Self> {
        if !Path::new(dir).exists() {
            std::fs::create_dir_all(dir)?;
        }
        let file_path = format!("{}/run.jsonl", dir);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            log_dir: dir.to_string(),
        })
    }

    /// Logger that discards everything; used by tests and dry runs.
    #[must_use]
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            log_dir: String::new(),
        }
    }

    pub fn log_event(&mut self, event: &RunEvent) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(event)?;
            writeln!(file, "{}", json)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Reads every snapshot event back from the live log, in order.
    pub fn get_snapshots(&self) -> Result<Vec<(u64, GenerationStats)>> {
        let file_path = format!("{}/run.jsonl", self.log_dir);
        let file = match File::open(file_path) {
            Ok(f) => f,
            Err(_) => return Ok(vec![]),
        };
        let reader = BufReader::new(file);
        let mut snapshots = Vec::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            if let Ok(RunEvent::Snapshot {
                generation, stats, ..
            }) = serde_json::from_str::<RunEvent>(&line)
            {
                snapshots.push((generation, stats));
            }
        }
        Ok(snapshots)
    }

    /// Compresses the live log to `run.jsonl.gz` and returns the archive
    /// path. The live log itself is left in place.
    pub fn archive(&self) -> Result<String> {
        let source_path = format!("{}/run.jsonl", self.log_dir);
        if !Path::new(&source_path).exists() {
            return Err(IoError::not_found(source_path));
        }
        let archive_path = format!("{}.gz", source_path);
        let mut source = File::open(&source_path)?;
        let target = File::create(&archive_path)?;
        let mut encoder = GzEncoder::new(target, Compression::default());
        std::io::copy(&mut source, &mut encoder)?;
        encoder
            .finish()
            .map_err(|e| IoError::compression(e.to_string()))?;
        Ok(archive_path)
    }

    /// Reads all events out of a gzip archive produced by [`archive`].
    ///
    /// [`archive`]: HistoryLogger::archive
    pub fn read_archive(path: &str) -> Result<Vec<RunEvent>> {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(file);
        let mut decoded = String::new();
        decoder
            .read_to_string(&mut decoded)
            .map_err(|e| IoError::compression(e.to_string()))?;
        let mut events = Vec::new();
        for line in decoded.lines().filter(|l| !l.is_empty()) {
            events.push(serde_json::from_str::<RunEvent>(line)?);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_dir(tag: &str) -> String {
        let dir = std::env::temp_dir().join(format!(
            "tessella_history_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir.to_string_lossy().into_owned()
    }

    fn sample_stats(generation: u64) -> GenerationStats {
        GenerationStats {
            generation,
            stability: 0.9,
            alive_fraction: 0.25,
            alive_count: 4,
            dead_count: 12,
            alive_dead_ratio: 4.0 / 12.0,
            mean_stability: 0.9,
            stddev_stability: 0.0,
        }
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = temp_log_dir("round_trip");
        let mut logger = HistoryLogger::new_at(&dir).unwrap();
        for generation in 1..=3 {
            logger
                .log_event(&RunEvent::Snapshot {
                    generation,
                    stats: sample_stats(generation),
                    timestamp: now_rfc3339(),
                })
                .unwrap();
        }
        let snapshots = logger.get_snapshots().unwrap();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].0, 1);
        assert_eq!(snapshots[2].1, sample_stats(3));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_dummy_logger_discards() {
        let mut logger = HistoryLogger::new_dummy();
        logger
            .log_event(&RunEvent::Snapshot {
                generation: 1,
                stats: sample_stats(1),
                timestamp: now_rfc3339(),
            })
            .unwrap();
        assert!(logger.get_snapshots().unwrap().is_empty());
    }

    #[test]
    fn test_archive_round_trip() {
        let dir = temp_log_dir("archive");
        let mut logger = HistoryLogger::new_at(&dir).unwrap();
        logger
            .log_event(&RunEvent::Started {
                grid_size: 16,
                wraparound: true,
                pattern: "Random".to_string(),
                seed: 42,
                fingerprint: "deadbeef".to_string(),
                timestamp: now_rfc3339(),
            })
            .unwrap();
        logger
            .log_event(&RunEvent::Snapshot {
                generation: 1,
                stats: sample_stats(1),
                timestamp: now_rfc3339(),
            })
            .unwrap();

        let archive_path = logger.archive().unwrap();
        let events = HistoryLogger::read_archive(&archive_path).unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], RunEvent::Started { grid_size: 16, .. }));
        assert!(matches!(events[1], RunEvent::Snapshot { generation: 1, .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_archive_without_log_fails() {
        let logger = HistoryLogger::new_dummy();
        assert!(logger.archive().is_err());
    }
}
