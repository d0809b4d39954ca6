//! Request lifecycle tracking.

use std::time::{Duration, Instant};

/// Where a streamed response currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Nothing written yet.
    Start,
    /// Head and header flushed.
    ShellSent,
    /// The named section was the last one written.
    SectionSent(String),
    /// No more writes accepted.
    Completed,
}

/// A point recorded while serving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingMark {
    ShellSent,
    SectionSent(String),
    Completed,
}

/// Offsets of each mark from the start of the request, in recording order.
#[derive(Debug, Clone)]
pub struct RequestTiming {
    start: Instant,
    marks: Vec<(TimingMark, Duration)>,
}

impl RequestTiming {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    pub fn record(&mut self, mark: TimingMark) {
        self.marks.push((mark, self.start.elapsed()));
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn marks(&self) -> &[(TimingMark, Duration)] {
        &self.marks
    }

    /// Offset at which the shell was flushed.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.offset_of(|m| *m == TimingMark::ShellSent)
    }

    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.offset_of(|m| matches!(m, TimingMark::SectionSent(_)))
    }

    /// Section that took longest to write, measured from the previous mark.
    pub fn slowest_section(&self) -> Option<(&str, Duration)> {
        let mut previous = Duration::ZERO;
        let mut slowest: Option<(&str, Duration)> = None;
        for (mark, at) in &self.marks {
            let took = at.saturating_sub(previous);
            previous = *at;
            if let TimingMark::SectionSent(name) = mark {
                if slowest.map_or(true, |(_, best)| took > best) {
                    slowest = Some((name.as_str(), took));
                }
            }
        }
        slowest
    }

    fn offset_of(&self, pred: impl Fn(&TimingMark) -> bool) -> Option<Duration> {
        self.marks.iter().find(|(m, _)| pred(m)).map(|(_, at)| *at)
    }
}

impl Default for RequestTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_keep_recording_order() {
        let mut timing = RequestTiming::new();
        assert!(timing.time_to_shell().is_none());

        timing.record(TimingMark::ShellSent);
        timing.record(TimingMark::SectionSent("hero".into()));
        timing.record(TimingMark::SectionSent("features".into()));
        timing.record(TimingMark::Completed);

        let shell = timing.time_to_shell().expect("shell mark");
        let first = timing.time_to_first_section().expect("section mark");
        assert!(first >= shell);
        assert!(timing.elapsed() >= first);
        assert_eq!(timing.marks().len(), 4);
        assert_eq!(timing.marks()[3].0, TimingMark::Completed);
    }

    #[test]
    fn test_slowest_section() {
        let mut timing = RequestTiming::new();
        assert!(timing.slowest_section().is_none());

        timing.record(TimingMark::ShellSent);
        timing.record(TimingMark::SectionSent("hero".into()));
        std::thread::sleep(Duration::from_millis(5));
        timing.record(TimingMark::SectionSent("faq".into()));

        let (name, took) = timing.slowest_section().expect("sections recorded");
        assert_eq!(name, "faq");
        assert!(took >= Duration::from_millis(5));
    }
}
