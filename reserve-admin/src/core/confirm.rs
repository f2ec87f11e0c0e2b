//! Modal confirmation before destructive actions

use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Blocks until the user accepts or declines
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<T: Confirm + ?Sized> Confirm for Arc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Terminal prompt; `assume_yes` skips the question
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm {
    pub assume_yes: bool,
}

impl StdinConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

/// `y` / `yes`, any case; everything else declines
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = io::stderr();
        if write!(stderr, "{} [y/N] ", message).and_then(|_| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}
