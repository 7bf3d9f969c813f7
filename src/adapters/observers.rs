//! Episode observer adapters.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    error::Error,
    identifiers::WorldId,
    ports::EpisodeObserver,
    report::{EpisodeReport, StepRecord},
};

/// Progress bar observer.
///
/// A full episode takes roughly 25 minutes at the server's 15-second move
/// delay, so step-level feedback matters to an operator.
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_reward: f64,
}

impl ProgressObserver {
    /// Create a new progress observer.
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            total_reward: 0.0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeObserver for ProgressObserver {
    fn on_episode_start(&mut self, world: &WorldId, max_steps: usize) -> Result<()> {
        self.total_reward = 0.0;
        let pb = ProgressBar::new(max_steps as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} steps (reward: {msg})",
                )
                .map_err(|e| Error::Serialization {
                    operation: "build progress bar template".to_string(),
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        pb.set_message("0.0");
        pb.println(format!("learning in world {world}"));
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_step(&mut self, record: &StepRecord) -> Result<()> {
        self.total_reward += record.reward;
        if let Some(pb) = &self.progress_bar {
            pb.set_position(record.step as u64 + 1);
            pb.set_message(format!("{:.1}", self.total_reward));
        }
        Ok(())
    }

    fn on_episode_end(&mut self, report: &EpisodeReport) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message(format!("{:.1} ({:?})", report.total_reward, report.outcome));
        }
        Ok(())
    }
}

/// JSONL observer - writes one JSON record per step for offline analysis.
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create an observer writing to the given path, truncating any existing
    /// file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("create observations file {:?}", path.as_ref()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl EpisodeObserver for JsonlObserver {
    fn on_step(&mut self, record: &StepRecord) -> Result<()> {
        let line = serde_json::to_string(record).map_err(|e| Error::Serialization {
            operation: "serialize step record".to_string(),
            message: e.to_string(),
        })?;
        writeln!(self.writer, "{line}").map_err(|source| Error::Io {
            operation: "write step record".to_string(),
            source,
        })
    }

    fn on_episode_end(&mut self, _report: &EpisodeReport) -> Result<()> {
        self.writer.flush().map_err(|source| Error::Io {
            operation: "flush observations file".to_string(),
            source,
        })
    }
}
