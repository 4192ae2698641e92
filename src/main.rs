//! Headless command-line front end.
//!
//! Usage:
//!   imagemap export <project.imap> [-o <out.html>] [--map-name <name>]
//!                   [--screen-standard] [--fragment]
//!   imagemap info <project.imap>

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use imagemap::constants::export::PROJECT_EXTENSION;
use imagemap::format::WarningSeverity;
use imagemap::{AppConfig, Editor, FormatError, LoadReport};

const USAGE: &str = "Usage:
  imagemap export <project.imap> [-o <out.html>] [--map-name <name>] [--screen-standard] [--fragment]
  imagemap info <project.imap>";

enum Command {
    Export(ExportArgs),
    Info { project: PathBuf },
    Help,
}

struct ExportArgs {
    project: PathBuf,
    output: Option<PathBuf>,
    map_name: Option<String>,
    screen_standard: bool,
    fragment: bool,
}

impl Command {
    fn from_args(args: &[String]) -> Result<Self, String> {
        let Some(command) = args.first() else {
            return Ok(Command::Help);
        };

        match command.as_str() {
            "export" => {
                let mut project = None;
                let mut output = None;
                let mut map_name = None;
                let mut screen_standard = false;
                let mut fragment = false;

                let mut i = 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "-o" | "--output" => {
                            i += 1;
                            let value = args.get(i).ok_or("-o needs a file name")?;
                            output = Some(PathBuf::from(value));
                        }
                        "--map-name" => {
                            i += 1;
                            let value = args.get(i).ok_or("--map-name needs a value")?;
                            map_name = Some(value.clone());
                        }
                        "--screen-standard" => screen_standard = true,
                        "--fragment" => fragment = true,
                        other if other.starts_with('-') => {
                            return Err(format!("Unknown option: {}", other));
                        }
                        other => {
                            if project.replace(PathBuf::from(other)).is_some() {
                                return Err("Only one project file can be exported".to_string());
                            }
                        }
                    }
                    i += 1;
                }

                Ok(Command::Export(ExportArgs {
                    project: project.ok_or("Missing project file")?,
                    output,
                    map_name,
                    screen_standard,
                    fragment,
                }))
            }
            "info" => match args.get(1) {
                Some(path) => Ok(Command::Info {
                    project: PathBuf::from(path),
                }),
                None => Err("Missing project file".to_string()),
            },
            "help" | "-h" | "--help" => Ok(Command::Help),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

fn print_warnings(report: &LoadReport) {
    for warning in &report.warnings {
        let label = match warning.severity {
            WarningSeverity::Info => "info",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Error => "error",
        };
        eprintln!("{}: {}", label, warning.message);
    }
}

fn load(editor: &mut Editor, project: &Path) -> Result<LoadReport, FormatError> {
    if project.extension().and_then(|e| e.to_str()) != Some(PROJECT_EXTENSION) {
        log::warn!(
            "{} does not have the .{} extension",
            project.display(),
            PROJECT_EXTENSION
        );
    }
    let report = editor.load_project_file(project)?;
    print_warnings(&report);
    Ok(report)
}

fn run_export(config: &AppConfig, args: ExportArgs) -> Result<(), FormatError> {
    let mut editor = Editor::from_config(config);
    load(&mut editor, &args.project)?;

    if let Some(name) = args.map_name {
        editor.set_map_name(name);
    }
    if args.screen_standard {
        editor.set_screen_standard(true);
    }

    let output = args
        .output
        .unwrap_or_else(|| args.project.with_extension("html"));

    match editor.export_html_file(&output, !args.fragment) {
        Ok(()) => {
            println!(
                "Exported {} hotspots to {}",
                editor.store().len(),
                output.display()
            );
            Ok(())
        }
        Err(FormatError::NothingToExport) => {
            println!("Nothing to export: the project needs an image and at least one hotspot");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run_info(config: &AppConfig, project: &Path) -> Result<(), FormatError> {
    let mut editor = Editor::from_config(config);
    let report = load(&mut editor, project)?;

    println!("Project:  {}", project.display());
    println!("Map name: {}", report.map_name);
    match report.image_dimensions {
        Some((w, h)) => println!("Image:    {} ({} x {} px)", report.image_path, w, h),
        None if report.image_path.is_empty() => println!("Image:    (none)"),
        None => println!("Image:    {} (not found)", report.image_path),
    }
    println!("Hotspots: {}", report.hotspots_loaded);
    for hotspot in editor.store().iter() {
        println!(
            "  [{}] {} coords={}",
            hotspot.id(),
            hotspot.display_label(),
            hotspot.coords_string(editor.mapper())
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = AppConfig::load_from_default_path().unwrap_or_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{}\n\n{}", msg, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Export(args) => run_export(&config, args),
        Command::Info { project } => run_info(&config, &project),
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
