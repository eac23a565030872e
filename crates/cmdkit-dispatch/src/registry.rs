//! Command descriptors and the registry that owns them.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use cmdkit_types::AppInfo;

use crate::params::Params;
use crate::sanitize::sanitize;

/// Columns added after the longest command name in `help` output.
const HELP_PADDING: usize = 3;

/// Shared context passed to every handler invocation.
pub struct Environment<'a> {
    /// Console sink for anything the command prints.
    pub out: &'a mut dyn Write,
    /// The registry the command was dispatched from.
    pub registry: &'a CommandRegistry,
}

/// Callable invoked when its command matches. Returns `true` on success.
pub type Handler = Box<dyn Fn(Params<'_>, &mut Environment<'_>) -> bool>;

/// Startup hook that registers a group of commands.
pub type Registrar = fn(&mut CommandRegistry);

/// A registered command.
pub struct CommandDescriptor {
    name: String,
    handler: Handler,
    doc: String,
    arity: u32,
    halt_on_fail: bool,
}

impl CommandDescriptor {
    /// The sanitized name the command is dispatched under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Exact number of parameters the command consumes.
    pub fn arity(&self) -> u32 {
        self.arity
    }

    /// Whether a failure of this command stops the whole run.
    pub fn halt_on_fail(&self) -> bool {
        self.halt_on_fail
    }

    pub fn invoke(&self, params: Params<'_>, env: &mut Environment<'_>) -> bool {
        (self.handler)(params, env)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("arity", &self.arity)
            .field("halt_on_fail", &self.halt_on_fail)
            .finish_non_exhaustive()
    }
}

/// Registry of available commands.
///
/// Also holds the application info printed by the `version` and `help`
/// builtins, which are registered on construction.
pub struct CommandRegistry {
    commands: HashMap<String, CommandDescriptor>,
    longest_cmd: usize,
    info: AppInfo,
}

impl CommandRegistry {
    /// Create a registry holding only the builtin commands.
    pub fn new() -> Self {
        let mut reg = Self {
            commands: HashMap::new(),
            longest_cmd: 0,
            info: AppInfo::default(),
        };
        crate::builtins::register_builtins(&mut reg);
        reg
    }

    /// Build a registry for `info` and run every registrar in order.
    pub fn with_registrars(info: AppInfo, registrars: &[Registrar]) -> Self {
        let mut reg = Self::new();
        reg.set_info(info);
        for registrar in registrars {
            registrar(&mut reg);
        }
        log::debug!("Registry ready with {} commands", reg.len());
        reg
    }

    /// Set the application name and version.
    pub fn init(&mut self, app_name: &str, version: &str) {
        self.set_info(AppInfo::new(app_name, version));
    }

    pub fn set_info(&mut self, info: AppInfo) {
        self.info = info;
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    /// Register a command under the sanitized form of `name`.
    ///
    /// Replaces any existing command with the same sanitized name.
    pub fn register<F>(
        &mut self,
        name: &str,
        handler: F,
        arity: u32,
        doc: &str,
        halt_on_fail: bool,
    ) where
        F: Fn(Params<'_>, &mut Environment<'_>) -> bool + 'static,
    {
        let name = sanitize(name);
        self.longest_cmd = self.longest_cmd.max(name.len() + HELP_PADDING);
        let descriptor = CommandDescriptor {
            name: name.clone(),
            handler: Box::new(handler),
            doc: doc.to_string(),
            arity,
            halt_on_fail,
        };
        if self.commands.insert(name.clone(), descriptor).is_some() {
            log::debug!("Replaced command '{name}'");
        } else {
            log::debug!("Registered command '{name}' (arity {arity})");
        }
    }

    /// Find a command by its dispatch name.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Width of the name column in `help` output.
    pub fn longest_cmd(&self) -> usize {
        self.longest_cmd
    }

    /// Every registered command, sorted by name.
    pub fn descriptors(&self) -> Vec<&CommandDescriptor> {
        let mut cmds: Vec<&CommandDescriptor> = self.commands.values().collect();
        cmds.sort_by(|a, b| a.name.cmp(&b.name));
        cmds
    }

    /// Return a sorted list of (name, doc) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.descriptors()
            .into_iter()
            .map(|c| (c.name(), c.doc()))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
