use clap::Parser;

#[derive(Parser)]
#[command(name = "tagdeck", about = "tagdeck — terminal tag chips")]
struct Cli {
    /// Write debug logs to /tmp/tagdeck-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Force the light theme regardless of config.
    #[arg(long)]
    light: bool,

    /// Start in read-only viewer mode.
    #[arg(long)]
    viewer: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/tagdeck-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("tagdeck debug log started — tail -f /tmp/tagdeck-debug.log");
    }

    tagdeck_tui::run(tagdeck_tui::Launch {
        light: cli.light,
        viewer: cli.viewer,
    })
}
