//! Command dispatch

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, AuditService, RenameService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{self, ReportSink};
use crate::config::Settings;
use crate::domain::{DomainError, NamingRules, RenamePlan};
use crate::infrastructure::{load_document, write_document, InfraError};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Check { file }) => _check(file),
        Some(Commands::Rename {
            file,
            environment,
            center,
            datacenter,
            output,
        }) => _rename(file, environment, center, datacenter.as_deref(), output.as_deref()),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Info) => _info(),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn from_domain(e: DomainError) -> CliError {
    CliError::Infra(InfraError::Application(ApplicationError::Domain(e)))
}

fn from_application(e: ApplicationError) -> CliError {
    CliError::Infra(InfraError::Application(e))
}

#[instrument]
fn _check(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let rules = NamingRules::new().map_err(from_domain)?;
    let document = load_document(file)?;

    let mut sink = ReportSink::new();
    AuditService::new(&rules).audit(&document, &mut sink);
    debug!(
        "checked {} items, {} violations",
        sink.checked(),
        sink.violations()
    );
    Ok(())
}

#[instrument]
fn _rename(
    file: &Path,
    environment: &str,
    center: &str,
    datacenter: Option<&str>,
    output: Option<&Path>,
) -> CliResult<()> {
    debug!("file: {:?}, environment: {:?}, center: {:?}", file, environment, center);
    let settings = Settings::load().map_err(from_application)?;

    let datacenter = match datacenter.map(str::to_string).or(settings.datacenter) {
        Some(d) => d,
        None => {
            return Err(CliError::Usage(
                "no --datacenter given and no default configured".to_string(),
            ))
        }
    };

    // Plan parameters are checked before the document is opened.
    let plan = RenamePlan::new(environment, center, &datacenter).map_err(from_domain)?;
    let rules = NamingRules::new().map_err(from_domain)?;

    let mut document = load_document(file)?;
    RenameService::new(&rules, &plan).apply(&mut document);

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(file, &settings.output_suffix),
    };
    write_document(&document, &output_path)?;
    output::action(
        "Rewrote",
        &format!("{} -> {}", file.display(), output_path.display()),
    );
    Ok(())
}

/// `defs.xml` becomes `defs<suffix>.xml` next to the input.
fn default_output_path(file: &Path, suffix: &str) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match file.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    file.with_file_name(name)
}

#[instrument]
fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load().map_err(from_application)?;
            let rendered = settings.to_toml().map_err(from_application)?;
            output::info(&rendered);
            Ok(())
        }
        ConfigCommands::Path => match Settings::global_path() {
            Some(path) => {
                output::info(&path.display());
                Ok(())
            }
            None => Err(CliError::Usage(
                "cannot resolve a config directory on this system".to_string(),
            )),
        },
        ConfigCommands::Init => {
            let path = Settings::global_path().ok_or_else(|| {
                CliError::Usage("cannot resolve a config directory on this system".to_string())
            })?;
            if path.exists() {
                output::warning(&format!("config already exists: {}", path.display()));
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            let template = Settings::default().to_toml().map_err(from_application)?;
            fs::write(&path, template)
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
            Ok(())
        }
    }
}

fn _info() -> CliResult<()> {
    let command = Cli::command();
    if let Some(author) = command.get_author() {
        println!("AUTHOR: {}", author);
    }
    if let Some(version) = command.get_version() {
        println!("VERSION: {}", version);
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_keeps_the_extension() {
        assert_eq!(
            default_output_path(Path::new("/tmp/defs.xml"), "_renamed"),
            PathBuf::from("/tmp/defs_renamed.xml")
        );
    }

    #[test]
    fn default_output_without_extension_appends_suffix() {
        assert_eq!(
            default_output_path(Path::new("defs"), "_renamed"),
            PathBuf::from("defs_renamed")
        );
    }
}
