use clap::Args;
use std::path::PathBuf;

use appgen::generate::{self, ControllerRequest, GenerateRequest, GeneratedModule};

use super::CmdResult;

#[derive(Args)]
pub struct ControllerArgs {
    /// Module identity, e.g. `user`
    pub id: String,

    /// Action names to scaffold into the controller
    pub actions: Vec<String>,

    /// Override the generated global identity
    #[arg(long, value_name = "ID")]
    pub global_id: Option<String>,

    /// File extension for the generated module
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Path to the application root (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub app_path: Option<PathBuf>,

    /// Validate and report without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run_json(args: ControllerArgs) -> CmdResult<GeneratedModule> {
    let app_path = super::resolve_app_path(args.app_path)?;

    let output = generate::run(
        GenerateRequest::Controller(ControllerRequest {
            identity: args.id,
            global_identity: args.global_id,
            actions: args.actions,
            ext: args.ext,
            dry_run: args.dry_run,
        }),
        &app_path,
    )?;

    Ok((output, 0))
}
