//! Action/event port — commands issued back to the host controller.

use dewflow_domain::id::MacroId;

/// Outbound commands to the host: macro execution and event signalling.
///
/// Neither call has an observable return value; failures are the host's
/// concern.
pub trait ActionSink {
    /// Fire a host-defined macro (automation routine).
    fn run_macro(&mut self, id: MacroId);

    /// Emit a named event for other controller components to observe.
    fn signal_event(&mut self, name: &str);
}
