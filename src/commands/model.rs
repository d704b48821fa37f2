use clap::Args;
use std::path::PathBuf;

use appgen::generate::{self, GenerateRequest, GeneratedModule, ModelRequest};

use super::CmdResult;

#[derive(Args)]
pub struct ModelArgs {
    /// Module identity, e.g. `user`
    pub id: String,

    /// Attribute declarations in `name[:type]` notation
    pub attributes: Vec<String>,

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

pub fn run_json(args: ModelArgs) -> CmdResult<GeneratedModule> {
    let app_path = super::resolve_app_path(args.app_path)?;

    let output = generate::run(
        GenerateRequest::Model(ModelRequest {
            identity: args.id,
            global_identity: args.global_id,
            attributes: args.attributes,
            ext: args.ext,
            dry_run: args.dry_run,
        }),
        &app_path,
    )?;

    Ok((output, 0))
}
