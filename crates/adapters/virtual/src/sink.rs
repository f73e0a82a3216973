//! Command-recording action sink.

use dewflow_app::ports::ActionSink;
use dewflow_domain::id::MacroId;

/// A single command the controller issued to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A macro execution request.
    Macro(MacroId),
    /// A named event signal.
    Event(String),
}

/// [`ActionSink`] that records every command in order, for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Vec<Command>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Names of the events signalled so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::Event(name) => Some(name.as_str()),
                Command::Macro(_) => None,
            })
            .collect()
    }
}

impl ActionSink for RecordingSink {
    fn run_macro(&mut self, id: MacroId) {
        self.commands.push(Command::Macro(id));
    }

    fn signal_event(&mut self, name: &str) {
        self.commands.push(Command::Event(name.to_string()));
    }
}
