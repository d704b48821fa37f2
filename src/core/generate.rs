//! Module generation.
//!
//! Orchestrates a generation request: validate declarations, render the
//! module template, and write the result at the conventional path. Never
//! overwrites an existing file, and never touches the filesystem when
//! validation fails or `dry_run` is set.

use serde::Serialize;
use std::path::Path;

use crate::core::config::AppConfig;
use crate::core::declaration::{
    self, ActionDeclaration, AttributeDeclaration,
};
use crate::core::{identity, templates};
use crate::error::{Error, Result};
use crate::log_status;
use crate::utils::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Controller,
    Model,
}

#[derive(Debug, Clone)]
pub struct ControllerRequest {
    /// Module identity, e.g. `user`.
    pub identity: String,
    /// Explicit global identity; derived from the identity when absent.
    pub global_identity: Option<String>,
    /// Raw action names to scaffold.
    pub actions: Vec<String>,
    /// File extension; falls back to the app config.
    pub ext: Option<String>,
    /// Validate and report without writing.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub identity: String,
    pub global_identity: Option<String>,
    /// Raw `name[:type]` attribute declarations.
    pub attributes: Vec<String>,
    pub ext: Option<String>,
    pub dry_run: bool,
}

/// A generation request, one variant per module kind.
#[derive(Debug, Clone)]
pub enum GenerateRequest {
    Controller(ControllerRequest),
    Model(ModelRequest),
}

/// Outcome of a generation run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedModule {
    pub command: &'static str,
    pub module: ModuleKind,
    pub identity: String,
    pub global_identity: String,
    pub filename: String,
    pub path: String,
    pub dry_run: bool,
    /// False on a dry run; true once the file is on disk.
    pub created: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionDeclaration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDeclaration>,
}

/// Run a generation request against the application at `app_path`.
pub fn run(request: GenerateRequest, app_path: &Path) -> Result<GeneratedModule> {
    let config = AppConfig::load(app_path)?;

    match request {
        GenerateRequest::Controller(req) => controller(req, app_path, &config),
        GenerateRequest::Model(req) => model(req, app_path, &config),
    }
}

fn controller(
    req: ControllerRequest,
    app_path: &Path,
    config: &AppConfig,
) -> Result<GeneratedModule> {
    let identity = identity::normalize(&req.identity)?;
    let global_identity = format!(
        "{}Controller",
        identity::global_identity(&identity, req.global_identity.as_deref())?
    );

    let actions = declaration::validate_actions(&req.actions)?;

    let ext = req.ext.as_deref().unwrap_or(&config.ext);
    let filename = format!("{}.{}", global_identity, ext);
    let dir = app_path.join(&config.controllers_dir);
    let target = dir.join(&filename);

    if !req.dry_run {
        write_module(&dir, &target, &global_identity, || {
            templates::controller(&filename, &global_identity, &identity, &actions)
        })?;
    }

    report_controller(&global_identity, &actions, &target, req.dry_run);

    Ok(GeneratedModule {
        command: "generate.controller",
        module: ModuleKind::Controller,
        identity,
        global_identity,
        filename,
        path: target.display().to_string(),
        dry_run: req.dry_run,
        created: !req.dry_run,
        actions,
        attributes: Vec::new(),
    })
}

fn model(req: ModelRequest, app_path: &Path, config: &AppConfig) -> Result<GeneratedModule> {
    let identity = identity::normalize(&req.identity)?;
    let global_identity = identity::global_identity(&identity, req.global_identity.as_deref())?;

    let attributes = declaration::validate_attributes(&req.attributes)?;

    let ext = req.ext.as_deref().unwrap_or(&config.ext);
    let filename = format!("{}.{}", global_identity, ext);
    let dir = app_path.join(&config.models_dir);
    let target = dir.join(&filename);

    if !req.dry_run {
        write_module(&dir, &target, &global_identity, || {
            templates::model(&filename, &global_identity, &attributes)
        })?;
    }

    report_model(&global_identity, &attributes, &target, req.dry_run);

    Ok(GeneratedModule {
        command: "generate.model",
        module: ModuleKind::Model,
        identity,
        global_identity,
        filename,
        path: target.display().to_string(),
        dry_run: req.dry_run,
        created: !req.dry_run,
        actions: Vec::new(),
        attributes,
    })
}

/// Render and write a module file. The target must not already exist;
/// rendering only happens once that is settled.
fn write_module(
    dir: &Path,
    target: &Path,
    global_identity: &str,
    render: impl FnOnce() -> String,
) -> Result<()> {
    if target.exists() {
        return Err(Error::generate_target_exists(
            global_identity,
            target.display().to_string(),
        ));
    }

    io::ensure_dir(dir, "create module directory")?;
    io::create_new_file(target, &render(), "write module")
}

fn report_controller(
    global_identity: &str,
    actions: &[ActionDeclaration],
    target: &Path,
    dry_run: bool,
) {
    let action_taken = report_prelude(dry_run);

    if actions.is_empty() {
        log_status!(
            "generate",
            "{} controller `{}`!",
            action_taken,
            global_identity
        );
    } else {
        log_status!(
            "generate",
            "{} a new controller called {} with actions:",
            action_taken,
            global_identity
        );
        for action in actions {
            log_status!("generate", "  {}.{}()", global_identity, action.name);
        }
    }

    report_target(target, dry_run);
}

fn report_model(
    global_identity: &str,
    attributes: &[AttributeDeclaration],
    target: &Path,
    dry_run: bool,
) {
    let action_taken = report_prelude(dry_run);

    if attributes.is_empty() {
        log_status!("generate", "{} model `{}`!", action_taken, global_identity);
    } else {
        log_status!(
            "generate",
            "{} a new model called {} with attributes:",
            action_taken,
            global_identity
        );
        for attribute in attributes {
            log_status!(
                "generate",
                "  {}    ({})",
                attribute.name,
                attribute.data_type
            );
        }
    }

    report_target(target, dry_run);
}

fn report_prelude(dry_run: bool) -> &'static str {
    if dry_run {
        log_status!("generate", "DRY RUN:");
        "Would have generated"
    } else {
        "Generated"
    }
}

fn report_target(target: &Path, dry_run: bool) {
    if dry_run {
        log_status!(
            "generate",
            "New file would have been created: {}",
            target.display()
        );
    } else {
        log_status!("generate", "New file created: {}", target.display());
    }
}
