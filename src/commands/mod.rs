use std::path::PathBuf;

pub type CmdResult<T> = appgen::Result<(T, i32)>;

pub mod controller;
pub mod model;

/// Resolve the application root: an explicit flag wins, otherwise the
/// working directory.
fn resolve_app_path(app_path: Option<PathBuf>) -> appgen::Result<PathBuf> {
    match app_path {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| {
            appgen::Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
        }),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        appgen::output::map_cmd_result_to_json($module::run_json($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (appgen::Result<serde_json::Value>, i32) {
    appgen::tty::status("appgen is working...");

    match command {
        crate::Commands::Controller(args) => dispatch!(args, controller),
        crate::Commands::Model(args) => dispatch!(args, model),
    }
}
