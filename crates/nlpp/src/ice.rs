//! Internal error handling for nlpp
//!
//! A panic inside the preprocessor is always a bug. The hook installed here
//! prints a bug report notice with the version and command line before the
//! default panic output.

use std::panic::PanicHookInfo;

/// Prints the internal error notice, then defers to the default hook
fn ice_hook(
    default_panic_hook: &'static (dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo<'_>,
) {
    eprintln!("error: internal preprocessor error encountered: thread panicked");
    eprintln!("note: this is not your fault! this is ALWAYS a bug in nlpp.");
    eprintln!("note: please report it together with the input file that caused it.");
    eprintln!();
    eprintln!(
        "{}",
        super::build_info::version()
            .lines()
            .map(|line| format!("note: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    eprintln!();
    eprintln!(
        "note: command line arguments: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );
    eprintln!();
    default_panic_hook(panic_info);
    eprintln!();
    eprintln!("error: end internal preprocessor error. no output was written.");
}

/// Configures the global panic hook
///
/// The previous hook is leaked to obtain the `'static` reference the panic
/// hook API requires. It is installed once per process.
pub fn setup_panic_hook() {
    let default_panic_hook: &'static _ = Box::leak(std::panic::take_hook());

    std::panic::set_hook(Box::new(|panic_info| {
        ice_hook(default_panic_hook, panic_info);
    }));
}
