//! Player-facing message log

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Success,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Success => "good",
            Severity::Danger => "DANGER",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMessage {
    pub text: String,
    pub severity: Severity,
}

impl GameMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Warning)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Danger)
    }
}

impl fmt::Display for GameMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.text)
    }
}

/// Bounded FIFO of messages; the oldest entry is dropped when full
#[derive(Debug, Clone, Serialize)]
pub struct MessageLog {
    entries: VecDeque<GameMessage>,
    capacity: usize,
    /// Messages ever pushed; survives `clear`
    pushed: usize,
}

impl MessageLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            pushed: 0,
        }
    }

    pub fn push(&mut self, message: GameMessage) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
        self.pushed += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Running count of pushes, for callers that want to show only new
    /// messages
    pub fn total_pushed(&self) -> usize {
        self.pushed
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &GameMessage> {
        self.entries.iter()
    }

    /// The most recent `count` messages, oldest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &GameMessage> {
        self.entries.iter().skip(self.entries.len().saturating_sub(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut log = MessageLog::with_capacity(200);
        for i in 0..250 {
            log.push(GameMessage::info(format!("msg {i}")));
        }
        assert_eq!(log.len(), 200);
        assert_eq!(log.iter().next().map(|m| m.text.as_str()), Some("msg 50"));
        assert_eq!(log.iter().last().map(|m| m.text.as_str()), Some("msg 249"));
    }

    #[test]
    fn test_recent() {
        let mut log = MessageLog::with_capacity(10);
        for i in 0..5 {
            log.push(GameMessage::info(format!("{i}")));
        }
        let recent: Vec<&str> = log.recent(2).map(|m| m.text.as_str()).collect();
        assert_eq!(recent, ["3", "4"]);
        assert_eq!(log.recent(50).count(), 5);
    }

    #[test]
    fn test_total_pushed_survives_clear() {
        let mut log = MessageLog::with_capacity(2);
        for i in 0..3 {
            log.push(GameMessage::info(format!("{i}")));
        }
        log.clear();
        log.push(GameMessage::info("again"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.total_pushed(), 4);
    }

    #[test]
    fn test_display_includes_severity() {
        assert_eq!(GameMessage::danger("Ouch").to_string(), "[DANGER] Ouch");
    }
}
