mod cli;

use cli::Args;
use stack_exports::application::dto::{NormalizeRequest, TemplateFormat};
use stack_exports::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use stack_exports::application::use_cases::NormalizeOutputsUseCase;
use stack_exports::config::{discover_config, load_config_from_path, ConfigFile};
use stack_exports::output_normalization::domain::NormalizationError;
use stack_exports::prelude::{FileSystemReader, StderrProgressReporter};
use stack_exports::shared::error::{ExitCode, ExportsError};
use stack_exports::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }

    process::exit(ExitCode::Success.as_i32());
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<NormalizationError>().is_some() {
        ExitCode::OutputsRejected
    } else {
        ExitCode::ApplicationError
    }
}

fn run(args: Args) -> Result<()> {
    validate_template_path(&args.template)?;

    let config = load_config(&args)?.unwrap_or_default();

    // The template is always parsed by extension; flags and config only pick the output
    let input_format = TemplateFormat::from_path(&args.template);

    // Command-line flags take precedence over the config file
    let format = args
        .format
        .or_else(|| config.template_format())
        .unwrap_or(input_format);
    let section = args.section.clone().or(config.section);
    let verbose = args.verbose || config.verbose.unwrap_or(false);

    let use_case = NormalizeOutputsUseCase::new(
        FileSystemReader::new(),
        FormatterFactory::create(input_format),
        FormatterFactory::create(format),
        StderrProgressReporter::new(verbose),
    );

    let request = NormalizeRequest::new(args.template.clone(), format)
        .with_section(section)
        .with_check_only(args.check);

    let response = use_case.execute(request)?;

    if let Some(content) = response.content {
        let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
        presenter.present(&content)?;

        if let Some(output) = &args.output {
            eprintln!("✅ Output complete: {}", output.display());
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return load_config_from_path(path).map(Some);
    }

    let template_dir = args
        .template
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    discover_config(template_dir)
}

fn validate_template_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExportsError::InvalidTemplatePath {
            path: path.to_path_buf(),
            reason: "File does not exist".to_string(),
        }
        .into());
    }

    if path.is_dir() {
        return Err(ExportsError::InvalidTemplatePath {
            path: path.to_path_buf(),
            reason: "Path is a directory, expected a template file".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_template_path_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("template.yml");
        fs::write(&template, "Resources: {}").unwrap();

        assert!(validate_template_path(&template).is_ok());
    }

    #[test]
    fn test_validate_template_path_nonexistent() {
        let path = PathBuf::from("/nonexistent/template.yml");
        let err = validate_template_path(&path).unwrap_err();
        assert!(format!("{}", err).contains("File does not exist"));
    }

    #[test]
    fn test_validate_template_path_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = validate_template_path(temp_dir.path()).unwrap_err();
        assert!(format!("{}", err).contains("Path is a directory"));
    }

    #[test]
    fn test_exit_code_for_normalization_error() {
        let error: anyhow::Error = NormalizationError::DuplicateKey {
            key: "key".to_string(),
        }
        .into();
        assert_eq!(exit_code_for(&error), ExitCode::OutputsRejected);

        let error = anyhow::anyhow!("disk full");
        assert_eq!(exit_code_for(&error), ExitCode::ApplicationError);
    }
}
