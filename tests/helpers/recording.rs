//! A trace sink that keeps events for assertions.

use pegweave::{TraceEvent, TraceSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub depth: usize,
    pub parser: String,
    pub event: String,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Recorded>,
}

impl RecordingSink {
    /// Events as `"<depth> <event> <parser>"` lines.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|r| format!("{} {} {}", r.depth, r.event, r.parser))
            .collect()
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, depth: usize, parser: &str, event: TraceEvent<'_>) {
        let event = match event {
            TraceEvent::Enter { .. } => "enter".to_string(),
            TraceEvent::Flatten { before, after } => {
                format!("flatten {}->{}", before.len(), after.len())
            }
            TraceEvent::FlattenSkipped { .. } => "flatten-skipped".to_string(),
            TraceEvent::HandlerInput { .. } => "handler-in".to_string(),
            TraceEvent::HandlerOutput { .. } => "handler-out".to_string(),
            TraceEvent::HandlerRejected => "handler-rejected".to_string(),
            TraceEvent::Exit { outcome } => format!("exit {}", outcome.matched),
        };
        self.events.push(Recorded {
            depth,
            parser: parser.to_string(),
            event,
        });
    }
}
