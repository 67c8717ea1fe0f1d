use crate::{format::format_elapsed, tracker::Checkpoint};

use chrono::{DateTime, Local};

use std::fmt;

#[derive(Debug, Clone)]
pub struct CheckpointEntry {
    pub checkpoint: Checkpoint,
    pub recorded_at: DateTime<Local>,
}

impl CheckpointEntry {
    pub fn new(checkpoint: Checkpoint) -> CheckpointEntry {
        CheckpointEntry {
            checkpoint,
            recorded_at: Local::now(),
        }
    }
}

impl fmt::Display for CheckpointEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checkpoint {}: {}",
            self.checkpoint.index,
            format_elapsed(self.checkpoint.delta)
        )
    }
}

/// Append only record of checkpoints taken since the last reset
#[derive(Debug, Default)]
pub struct CheckpointLog {
    entries: Vec<CheckpointEntry>,
}

impl CheckpointLog {
    pub fn push(&mut self, entry: CheckpointEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CheckpointEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// One line per entry, newline terminated, as shown in the log view
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    fn entry(index: u32, secs: u64) -> CheckpointEntry {
        CheckpointEntry::new(Checkpoint {
            index,
            delta: Duration::from_secs(secs),
        })
    }

    #[test]
    fn test_entry_text() {
        assert_eq!(entry(1, 10).to_string(), "Checkpoint 1: 00:10");
        assert_eq!(entry(12, 125).to_string(), "Checkpoint 12: 02:05");
    }

    #[test]
    fn test_log_order() {
        let mut log = CheckpointLog::default();
        assert!(log.is_empty());
        assert_eq!(log.to_text(), "");

        log.push(entry(1, 10));
        log.push(entry(2, 70));
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[0].checkpoint.index, 1);
        assert_eq!(
            log.to_text(),
            "Checkpoint 1: 00:10\nCheckpoint 2: 01:10\n"
        );

        log.clear();
        assert!(log.is_empty());
    }
}
