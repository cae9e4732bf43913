//! # Progress Reporting (`common::ui::progress`)
//!
//! File: cli/src/common/ui/progress.rs
//!
//! Feedback for operations of unknown length, such as a chat-completion
//! request. The reporter only draws; it never holds up the operation it
//! describes.
//!
use indicatif::{ProgressBar, ProgressStyle};
use std::{sync::Mutex, time::Duration};

/// Frames of the request spinner.
pub const SPINNER_CHARS: [&str; 8] = ["⠏", "⠛", "⠹", "⢸", "⣰", "⣤", "⣆", "⡇"];

pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Receives start/finish notifications for a long-running operation.
pub trait ProgressReporter: Send + Sync {
    fn start(&self, message: &str);

    fn finish(&self, message: &str);

    fn finish_with_error(&self, message: &str);
}

/// Ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _message: &str) {}
    fn finish(&self, _message: &str) {}
    fn finish_with_error(&self, _message: &str) {}
}

/// Indeterminate spinner on stderr, ticking on indicatif's own thread.
#[derive(Debug, Default)]
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let mut frames = SPINNER_CHARS.to_vec();
        // indicatif shows the last frame once finished.
        frames.push("✔");
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&frames);
        pb.set_style(style);
        pb
    }
}

impl ProgressReporter for SpinnerProgress {
    fn start(&self, message: &str) {
        let pb = Self::create_spinner();
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(previous) = guard.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish(&self, message: &str) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut guard| guard.take()) {
            pb.finish_with_message(message.to_string());
        }
    }

    fn finish_with_error(&self, message: &str) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut guard| guard.take()) {
            pb.abandon_with_message(message.to_string());
        }
    }
}
