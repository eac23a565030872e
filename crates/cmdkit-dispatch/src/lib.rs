//! Command registry and argument dispatch.
//!
//! Commands are registered by name with a fixed arity, a doc string and a
//! failure policy. The processor walks the program's argument vector, looks
//! each token up in the registry, hands the next `arity` tokens to the
//! matched handler, and folds the handler results into an exit code.

mod builtins;
mod params;
mod processor;
mod registry;
mod sanitize;

/// A single command parameter with typed conversions.
pub use params::Param;
/// Borrowed view over the parameters of one invocation.
pub use params::Params;
/// Result of converting a parameter to a typed value.
pub use params::Parsed;
/// Per-token record of what the processor did.
pub use processor::Event;
/// Walks an argument vector and dispatches commands.
pub use processor::Processor;
/// Exit codes returned by the processor.
pub use processor::{EXIT_FAILURE, EXIT_SUCCESS};
/// Processor-wide policy switches.
pub use processor::ProcessorConfig;
/// Outcome of one processor run.
pub use processor::Report;
/// A registered command.
pub use registry::CommandDescriptor;
/// Registry of available commands.
pub use registry::CommandRegistry;
/// Context handed to every handler invocation.
pub use registry::Environment;
/// Callable invoked when a command matches.
pub use registry::Handler;
/// Startup hook that registers a group of commands.
pub use registry::Registrar;
/// Canonical dispatch name for a raw identifier.
pub use sanitize::{SEPARATOR, sanitize};

pub use cmdkit_types::AppInfo;
