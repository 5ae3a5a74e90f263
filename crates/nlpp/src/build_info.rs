//! Build information module

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// Returns the string which represents the current nlpp version
pub fn version() -> String {
    format!(
        concat!(
            "{name} version {version} ({commit}, {taint_string}) built for {target}",
            "\n{rust_version}"
        ),
        name = build::PROJECT_NAME,
        version = build::PKG_VERSION,
        commit = build::SHORT_COMMIT,
        taint_string = if build::GIT_CLEAN {
            "not tainted"
        } else {
            "tainted!"
        },
        target = build::BUILD_TARGET,
        rust_version = build::RUST_VERSION,
    )
}
