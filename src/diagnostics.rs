use std::cell::RefCell;

/// Receives a message whenever a parse fails. Nothing is reported for
/// successful parses.
pub trait DiagnosticSink {
    fn log(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::warn!(target: "lemur_xml", "{}", message);
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: RefCell<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        CollectingSink::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn take_messages(&self) -> Vec<String> {
        self.messages.take()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}
