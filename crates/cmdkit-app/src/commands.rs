//! Sample commands shipped with the demo binary.

use cmdkit_dispatch::{CommandRegistry, Environment, Params, Registrar};

/// Every registrar the demo binary runs at startup.
pub const REGISTRARS: &[Registrar] = &[register_arithmetic, register_text, register_checks];

// ---------------------------------------------------------------------------
// arithmetic: add_two_values, multiply, negate
// ---------------------------------------------------------------------------

pub fn register_arithmetic(reg: &mut CommandRegistry) {
    reg.register("add_two_values", add_two_values, 2, "Add two integers.", false);
    reg.register("multiply", multiply, 2, "Multiply two real numbers.", false);
    reg.register("negate", negate, 1, "Print the negation of a boolean.", false);
}

fn add_two_values(params: Params<'_>, env: &mut Environment<'_>) -> bool {
    let (Some(a), Some(b)) = (params.get(0), params.get(1)) else {
        return false;
    };
    let (a, b) = (a.as_int(), b.as_int());
    if !a.result || !b.result {
        return false;
    }
    match a.value.checked_add(b.value) {
        Some(sum) => writeln!(env.out, "{sum}").is_ok(),
        None => false,
    }
}

fn multiply(params: Params<'_>, env: &mut Environment<'_>) -> bool {
    let product = params
        .iter()
        .map(|p| p.as_real().ok())
        .try_fold(1.0, |acc, v| v.map(|v| acc * v));
    match product {
        Some(product) => writeln!(env.out, "{product}").is_ok(),
        None => false,
    }
}

fn negate(params: Params<'_>, env: &mut Environment<'_>) -> bool {
    match params.get(0).and_then(|p| p.as_bool().ok()) {
        Some(b) => writeln!(env.out, "{}", !b).is_ok(),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// text: echo
// ---------------------------------------------------------------------------

pub fn register_text(reg: &mut CommandRegistry) {
    reg.register("echo", echo, 1, "Print a parameter verbatim.", false);
}

fn echo(params: Params<'_>, env: &mut Environment<'_>) -> bool {
    match params.get(0) {
        Some(p) => writeln!(env.out, "{p}").is_ok(),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// checks: must_pass
// ---------------------------------------------------------------------------

pub fn register_checks(reg: &mut CommandRegistry) {
    reg.register(
        "must_pass",
        must_pass,
        0,
        "Always fail and stop processing.",
        true,
    );
}

fn must_pass(_params: Params<'_>, env: &mut Environment<'_>) -> bool {
    let _ = writeln!(env.out, "must-pass: failing on purpose");
    false
}

#[cfg(test)]
mod tests {
    use cmdkit_dispatch::{AppInfo, Processor, ProcessorConfig, Report};

    use super::*;

    fn registry() -> CommandRegistry {
        CommandRegistry::with_registrars(AppInfo::new("cmdkit", "0.1.0"), REGISTRARS)
    }

    fn run(tokens: &[&str]) -> (Report, String) {
        let reg = registry();
        let mut args = vec!["cmdkit"];
        args.extend_from_slice(tokens);
        let mut out = Vec::new();
        let report = Processor::new(ProcessorConfig::default()).run(&reg, &args, &mut out);
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn all_commands_registered() {
        let reg = registry();
        for name in [
            "add-two-values",
            "multiply",
            "negate",
            "echo",
            "must-pass",
            "help",
            "version",
        ] {
            assert!(reg.contains(name), "missing {name}");
        }
        assert_eq!(reg.len(), 7);
    }

    #[test]
    fn add_two_values_sums() {
        let (report, out) = run(&["add-two-values", "13", "15"]);
        assert_eq!(report.exit_code, 0);
        assert_eq!(out, "28\n");
    }

    #[test]
    fn add_two_values_rejects_text() {
        let (report, out) = run(&["add-two-values", "abc", "1"]);
        assert_eq!(report.exit_code, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn add_two_values_overflow_fails() {
        let (report, _) = run(&["add-two-values", "9223372036854775807", "1"]);
        assert_eq!(report.exit_code, 1);
    }

    #[test]
    fn multiply_reals() {
        let (report, out) = run(&["multiply", "2.5", "4"]);
        assert_eq!(report.exit_code, 0);
        assert_eq!(out, "10\n");
    }

    #[test]
    fn negate_bool() {
        let (report, out) = run(&["negate", "true", "negate", "0"]);
        assert_eq!(report.exit_code, 0);
        assert_eq!(out, "false\ntrue\n");
    }

    #[test]
    fn negate_rejects_non_bool() {
        let (report, _) = run(&["negate", "maybe"]);
        assert_eq!(report.exit_code, 1);
    }

    #[test]
    fn echo_verbatim() {
        let (_, out) = run(&["echo", "hello world"]);
        assert_eq!(out, "hello world\n");
    }

    #[test]
    fn must_pass_halts() {
        let (report, out) = run(&["must-pass", "echo", "unreachable"]);
        assert_eq!(report.exit_code, 1);
        assert!(report.halted);
        assert!(!out.contains("unreachable"));
    }

    #[test]
    fn help_lists_demo_commands() {
        let (_, out) = run(&["help"]);
        assert!(out.starts_with("cmdkit 0.1.0\n"));
        assert!(out.contains("Add two integers."));
        assert!(out.contains("Always fail and stop processing."));
        assert_eq!(out.lines().count(), 8);
    }
}
