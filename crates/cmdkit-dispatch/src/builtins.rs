//! Builtin `version` and `help` commands.

use std::io;

use crate::params::Params;
use crate::registry::{CommandRegistry, Environment};

/// Register the builtin commands into a registry.
pub(crate) fn register_builtins(reg: &mut CommandRegistry) {
    reg.register("version", version, 0, "Print version.", false);
    reg.register("help", help, 0, "Print help.", false);
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

fn version(_params: Params<'_>, env: &mut Environment<'_>) -> bool {
    // Output failures are not command failures.
    let _ = write_version(env);
    true
}

fn write_version(env: &mut Environment<'_>) -> io::Result<()> {
    writeln!(env.out, "{}", env.registry.info().version_line())
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

fn help(_params: Params<'_>, env: &mut Environment<'_>) -> bool {
    let _ = write_help(env);
    true
}

fn write_help(env: &mut Environment<'_>) -> io::Result<()> {
    write_version(env)?;
    let width = env.registry.longest_cmd();
    for cmd in env.registry.descriptors() {
        writeln!(env.out, "{:<width$}{}", cmd.name(), cmd.doc())?;
    }
    Ok(())
}
