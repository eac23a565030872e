//! Argument processing: the dispatch loop over a program's argument vector.
//!
//! Tokens are consumed strictly left to right. A token that names a
//! registered command takes the next `arity` tokens as its parameters; a
//! token that names nothing is reported and skipped, and a command with too
//! few tokens after it is skipped together with them. Handler failures are
//! folded into the exit code, and two conditions stop the run at once:
//! an unrecognized token while `halt_on_unrecognized` is set, and a failing
//! command registered with `halt_on_fail`.

use std::io::Write;

use serde::Serialize;

use crate::params::Params;
use crate::registry::{CommandRegistry, Environment};

/// Exit code for a run in which every invoked command succeeded.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for a failed or halted run.
pub const EXIT_FAILURE: i32 = 1;

/// Processor-wide policy switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Stop with a failure at the first token that names no command.
    pub halt_on_unrecognized: bool,
}

/// What the processor did with one token group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A handler ran with the given parameters.
    Invoked {
        command: String,
        params: Vec<String>,
        success: bool,
    },
    /// The token matched no registered command.
    Unrecognized { token: String },
    /// The command matched but fewer than `arity` tokens followed it.
    TooFewParameters {
        command: String,
        arity: u32,
        available: usize,
    },
}

/// Outcome of one processor run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub exit_code: i32,
    /// Whether the run stopped before exhausting its arguments.
    pub halted: bool,
    pub events: Vec<Event>,
}

impl Report {
    fn finished(success: bool, events: Vec<Event>) -> Self {
        Self {
            exit_code: if success { EXIT_SUCCESS } else { EXIT_FAILURE },
            halted: false,
            events,
        }
    }

    fn halted(events: Vec<Event>) -> Self {
        Self {
            exit_code: EXIT_FAILURE,
            halted: true,
            events,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == EXIT_SUCCESS
    }

    /// Number of handler invocations, successful or not.
    pub fn invocations(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Invoked { .. }))
            .count()
    }
}

/// Walks an argument vector and dispatches commands from a registry.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ProcessorConfig {
        self.config
    }

    /// Process `args` and return only the exit code (0 or 1).
    ///
    /// `args` is the full argument vector; the first element is the program
    /// name and is never dispatched.
    pub fn process<S: AsRef<str>>(
        &self,
        registry: &CommandRegistry,
        args: &[S],
        out: &mut dyn Write,
    ) -> i32 {
        self.run(registry, args, out).exit_code
    }

    /// Process `args` and return the full report.
    ///
    /// Console messages for unrecognized commands and short parameter lists
    /// go to `out`, as does anything the handlers print. A failure to write
    /// to `out` never changes the outcome.
    pub fn run<S: AsRef<str>>(
        &self,
        registry: &CommandRegistry,
        args: &[S],
        out: &mut dyn Write,
    ) -> Report {
        let argv: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let argc = argv.len();
        let mut events = Vec::new();
        let mut success = true;
        let mut i = 1;

        while i < argc {
            let token = argv[i];

            let Some(cmd) = registry.lookup(token) else {
                let _ = writeln!(out, "unrecognized command: {token}");
                events.push(Event::Unrecognized {
                    token: token.to_string(),
                });
                if self.config.halt_on_unrecognized {
                    log::warn!("Halting on unrecognized command '{token}'");
                    return Report::halted(events);
                }
                log::warn!("Skipping unrecognized command '{token}'");
                i += 1;
                continue;
            };

            let arity = cmd.arity() as usize;
            if i.saturating_add(arity) >= argc {
                let _ = writeln!(out, "too few parameters: {token}");
                let available = argc - i - 1;
                log::warn!("'{token}' needs {arity} parameter(s), {available} available");
                events.push(Event::TooFewParameters {
                    command: token.to_string(),
                    arity: cmd.arity(),
                    available,
                });
                // The partial parameters go with their command.
                i += 1 + arity;
                continue;
            }

            let params = Params::new(&argv[i + 1..=i + arity]);
            log::debug!("Dispatching '{token}' with {arity} parameter(s)");
            let ok = {
                let mut env = Environment {
                    out: &mut *out,
                    registry,
                };
                cmd.invoke(params, &mut env)
            };
            events.push(Event::Invoked {
                command: token.to_string(),
                params: params.iter().map(|p| p.to_string()).collect(),
                success: ok,
            });

            if !ok {
                success = false;
                if cmd.halt_on_fail() {
                    log::warn!("'{token}' failed, halting");
                    return Report::halted(events);
                }
                log::debug!("'{token}' failed, continuing");
            }
            i += 1 + arity;
        }

        Report::finished(success, events)
    }
}
