//! Spinner shown while the documents are fetched.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A single steady-ticking spinner that clears itself when done.
pub(crate) struct LoadSpinner {
    bar: ProgressBar,
}

impl LoadSpinner {
    /// Start a spinner with `msg`. When `quiet` is true the spinner is hidden.
    pub(crate) fn start(msg: String, quiet: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");
        bar.set_style(style);
        bar.set_message(msg);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop ticking and clear the line.
    pub(crate) fn finish(self) {
        self.bar.disable_steady_tick();
        self.bar.finish_and_clear();
    }
}
