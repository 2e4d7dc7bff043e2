use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use declutter_lib::{
    init_logging,
    replay::{load_trace, run_trace, GestureResolution, RecordingHost},
    EngineConfig, Variant,
};

/// Replay a recorded accessibility-event trace through the decision engine
/// and print every effect it had on the host.
#[derive(Debug, Parser)]
#[command(name = "declutter-replay", version)]
struct Args {
    /// JSON-lines trace, one event per line.
    trace: PathBuf,

    /// JSON config file; environment defaults apply otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured variant (feed_demarcator | distractions).
    #[arg(long, value_parser = parse_variant)]
    variant: Option<Variant>,

    /// Height reported for the maximum window bounds.
    #[arg(long, default_value_t = 2400)]
    window_height: i32,

    /// Have the host reject every gesture.
    #[arg(long)]
    reject_gestures: bool,

    /// Cancel accepted gestures instead of completing them.
    #[arg(long)]
    cancel_gestures: bool,

    #[arg(long)]
    debug: bool,
}

fn parse_variant(value: &str) -> Result<Variant, String> {
    Variant::parse(value).ok_or_else(|| format!("unknown variant: {value}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::from_env(),
    };
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    config.debug |= args.debug;

    init_logging(config.debug);
    log::info!("Declutter replay starting ({:?})", config.variant);

    let events = load_trace(&args.trace)?;
    let mut host = RecordingHost::new(args.window_height);
    host.set_accept_gestures(!args.reject_gestures);
    let resolution = if args.cancel_gestures {
        GestureResolution::Cancel
    } else {
        GestureResolution::Complete
    };

    let report = run_trace(&mut host, config, &events, resolution)
        .with_context(|| format!("Replay of {} failed", args.trace.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
