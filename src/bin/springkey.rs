use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "springkey", version)]
struct Cli {
    /// Log sampling and generation details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate CSS and Web Animations keyframes for a spring.
    Generate(GenerateArgs),
    /// Print the default parameters as JSON.
    Defaults,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Parameter JSON (missing fields take defaults).
    #[arg(long)]
    params: Option<PathBuf>,

    /// Envelope decay rate.
    #[arg(long)]
    damping: Option<f64>,

    /// Oscillation frequency.
    #[arg(long)]
    frequency: Option<f64>,

    /// Stop threshold in percent of the initial amplitude.
    #[arg(long)]
    threshold: Option<f64>,

    /// Nominal playback duration in milliseconds.
    #[arg(long)]
    duration: Option<u64>,

    /// Rotation multiplier (degrees).
    #[arg(long, allow_negative_numbers = true)]
    rotation: Option<f64>,

    /// Translation multiplier (pixels).
    #[arg(long, allow_negative_numbers = true)]
    translation: Option<f64>,

    /// Scale multiplier.
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Opacity multiplier.
    #[arg(long, allow_negative_numbers = true)]
    opacity: Option<f64>,

    /// Transform origin X in percent.
    #[arg(long, allow_negative_numbers = true)]
    origin_x: Option<f64>,

    /// Transform origin Y in percent.
    #[arg(long, allow_negative_numbers = true)]
    origin_y: Option<f64>,

    /// Channels to enable, replacing the configured set (e.g. `rotateX,opacity`).
    #[arg(long, value_delimiter = ',')]
    enable: Vec<String>,

    /// Write the CSS output here.
    #[arg(long)]
    css_out: Option<PathBuf>,

    /// Write the animation-object output here.
    #[arg(long)]
    js_out: Option<PathBuf>,

    /// Append a rule playing the CSS at the nominal duration.
    #[arg(long)]
    playback: bool,

    /// Print a JSON report instead of the raw text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_defaults() -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(&springkey::ParameterRecord::default())
        .context("serialize default parameters")?;
    println!("{s}");
    Ok(())
}

fn load_params(args: &GenerateArgs) -> anyhow::Result<springkey::ParameterRecord> {
    let mut p = match &args.params {
        Some(path) => springkey::ParameterRecord::from_path(path)?,
        None => springkey::ParameterRecord::default(),
    };

    if let Some(v) = args.damping {
        p.damping = v;
    }
    if let Some(v) = args.frequency {
        p.frequency = v;
    }
    if let Some(v) = args.threshold {
        p.amplitude_threshold_percent = v;
    }
    if let Some(v) = args.duration {
        p.css_duration_ms = v;
    }
    if let Some(v) = args.rotation {
        p.multipliers.rotation = v;
    }
    if let Some(v) = args.translation {
        p.multipliers.translation = v;
    }
    if let Some(v) = args.scale {
        p.multipliers.scale = v;
    }
    if let Some(v) = args.opacity {
        p.multipliers.opacity = v;
    }
    if let Some(v) = args.origin_x {
        p.transform_origin.x = v;
    }
    if let Some(v) = args.origin_y {
        p.transform_origin.y = v;
    }
    if !args.enable.is_empty() {
        let channels = args
            .enable
            .iter()
            .map(|s| springkey::Channel::parse(s))
            .collect::<springkey::SpringResult<Vec<_>>>()?;
        p.enabled = springkey::EnabledProperties::from_channels(channels);
    }

    p.validate()?;
    Ok(p)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let outcome = load_params(&args).and_then(|p| springkey::generate(&p).map_err(Into::into));

    if args.json {
        let report = match &outcome {
            Ok(r) => {
                let mut v = serde_json::to_value(r).context("serialize report")?;
                v["success"] = serde_json::Value::Bool(true);
                v
            }
            Err(e) => serde_json::json!({ "success": false, "error": e.to_string() }),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        );
        if outcome.is_err() {
            std::process::exit(1);
        }
    }

    let result = outcome?;
    let css = if args.playback {
        result.playback_stylesheet()
    } else {
        result.css_keyframes.clone()
    };

    if let Some(path) = &args.css_out {
        write_output(path, &css)?;
    }
    if let Some(path) = &args.js_out {
        write_output(path, &result.js_keyframes)?;
    }
    if !args.json && args.css_out.is_none() && args.js_out.is_none() {
        println!("{css}\n");
        println!("{}", result.js_keyframes);
    }

    eprintln!(
        "{} frames, keyframes {}ms, playback {}ms, threshold {}%{}",
        result.total_frames,
        result.keyframes_duration_ms,
        result.css_animation_duration_ms,
        springkey::fmt_num(result.amplitude_threshold_percent),
        if result.stopped_early {
            " (stopped early)"
        } else {
            ""
        }
    );
    Ok(())
}

fn write_output(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
