use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use beamcut::{
    init_logging, plan_motion, planner_config, render_preview, total_cut_length, Config,
    GcodeWriter,
};

/// Canvas size for `--preview` output.
const PREVIEW_WIDTH: u32 = 800;
const PREVIEW_HEIGHT: u32 = 600;

struct Args {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    preview: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage: beamcut <input.svg> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>    Output G-code file (default: input with .gcode)");
    eprintln!("  -c, --config <file>    Configuration file (JSON or TOML)");
    eprintln!("      --preview <file>   Also render a PNG preview of the plan");
    eprintln!("      --version          Show version information");
    eprintln!("  -h, --help             Show this help");
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut input = None;
    let mut output = None;
    let mut config = None;
    let mut preview = None;

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("missing value for '{}'", arg))?;
                output = Some(PathBuf::from(value));
            }
            "-c" | "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("missing value for '{}'", arg))?;
                config = Some(PathBuf::from(value));
            }
            "--preview" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("missing value for '{}'", arg))?;
                preview = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{}'", other));
            }
            other => {
                if input.is_some() {
                    return Err(format!("unexpected argument '{}'", other));
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let input = input.ok_or_else(|| "missing input file".to_string())?;
    let output = output.unwrap_or_else(|| input.with_extension("gcode"));
    Ok(Args {
        input,
        output,
        config,
        preview,
    })
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    if let Some(path) = &args.config {
        return Config::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()));
    }
    // Without -c, pick up the persisted config when one exists.
    match Config::default_config_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        _ => Ok(Config::default()),
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args)?;

    let paths = beamcut::load_paths_from_file(&args.input)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    info!("Loaded {} paths from {}", paths.len(), args.input.display());

    let events = plan_motion(&paths, &planner_config(&config));
    info!(
        "Planned {} motion events, {:.3} mm of cuts",
        events.len(),
        total_cut_length(&events)
    );

    let writer = GcodeWriter::new(
        config.start_gcode.clone(),
        config.end_gcode.clone(),
        config.tool_on_gcode.clone(),
        config.tool_off_gcode.clone(),
    );
    let gcode = writer.generate(&events);
    std::fs::write(&args.output, &gcode)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("Wrote G-code to {}", args.output.display());

    if let Some(path) = &args.preview {
        let image = render_preview(&events, PREVIEW_WIDTH, PREVIEW_HEIGHT);
        image
            .save(path)
            .with_context(|| format!("writing preview to {}", path.display()))?;
        info!("Wrote preview to {}", path.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }
    if argv.iter().any(|arg| arg == "--version") {
        println!("beamcut {} (built {})", beamcut::VERSION, beamcut::BUILD_DATE);
        return Ok(());
    }

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("beamcut: {}", message);
            print_usage();
            std::process::exit(1);
        }
    };

    run(&args)
}
