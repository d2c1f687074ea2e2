/// Cross-cutting observer for capture session events.
///
/// Decouples the session from any particular output so a CLI, a GUI
/// preview, or a test can watch the same orchestration unchanged.
pub trait SessionLogger: Send {
    /// Buffer fill progress after an accepted frame.
    fn frame_progress(&mut self, captured: usize, target: usize);

    /// Gate feedback for a rejected frame (advisory, shown live).
    fn gate_feedback(&mut self, message: &str);

    /// Human-readable status message.
    fn info(&mut self, message: &str);

    /// End-of-session report. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger for tests and callers with their own progress surface.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn frame_progress(&mut self, _captured: usize, _target: usize) {}
    fn gate_feedback(&mut self, _message: &str) {}
    fn info(&mut self, _message: &str) {}
}

/// Stdout logger with accept/reject counts and a session summary.
pub struct StdoutSessionLogger {
    accepted: usize,
    rejected: usize,
    last_feedback: Option<String>,
}

impl StdoutSessionLogger {
    pub fn new() -> Self {
        Self {
            accepted: 0,
            rejected: 0,
            last_feedback: None,
        }
    }

    pub fn summary_string(&self) -> String {
        let mut line = format!(
            "Session summary: {} frame(s) accepted, {} rejected",
            self.accepted, self.rejected
        );
        if let Some(feedback) = &self.last_feedback {
            line.push_str(&format!(" (last feedback: {feedback})"));
        }
        line
    }
}

impl Default for StdoutSessionLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLogger for StdoutSessionLogger {
    fn frame_progress(&mut self, captured: usize, target: usize) {
        self.accepted = captured;
        println!("Captured frame {captured}/{target}");
    }

    fn gate_feedback(&mut self, message: &str) {
        self.rejected += 1;
        self.last_feedback = Some(message.to_string());
        println!("Frame rejected: {message}");
    }

    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn summary(&self) {
        println!("{}", self.summary_string());
    }
}
