use biometrics::{Collector, Counter};

pub(crate) static COMPLETION_REQUESTS: Counter = Counter::new("delphi.client.requests");
pub(crate) static COMPLETION_ERRORS: Counter = Counter::new("delphi.client.request_errors");

pub(crate) static COMMANDS_DISPATCHED: Counter = Counter::new("delphi.chat.commands");
pub(crate) static COMMAND_FALLBACKS: Counter = Counter::new("delphi.chat.fallbacks");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&COMPLETION_REQUESTS);
    collector.register_counter(&COMPLETION_ERRORS);

    collector.register_counter(&COMMANDS_DISPATCHED);
    collector.register_counter(&COMMAND_FALLBACKS);
}
