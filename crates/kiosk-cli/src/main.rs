use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kiosk_core::KioskConfig;

/// kiosk: university fair launcher.
///
/// Shows a splash screen, then one card per university. Click a card to read
/// about it and open its official site.
#[derive(Parser, Debug)]
#[command(name = "kiosk", version, about)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/kiosk/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding logo, university artwork and click sound.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Frame rate override.
    #[arg(long)]
    fps: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<KioskConfig> {
        let mut config = match self.config {
            Some(ref path) => KioskConfig::load_from(path)?,
            None => KioskConfig::load().unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
                KioskConfig::default()
            }),
        };
        if let Some(ref dir) = self.assets {
            config.assets.dir = dir.clone();
        }
        if let Some(fps) = self.fps {
            config.display.fps = fps;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Log to a file: the terminal belongs to the kiosk. If the log file
    // can't be opened, discard logs rather than drawing over the UI.
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kiosk");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_path = log_dir.join("kiosk.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
                )
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
    }

    let config = cli.load_config()?;

    tracing::info!(
        "Starting kiosk v{} with {} catalog entries",
        env!("CARGO_PKG_VERSION"),
        config.catalog.len()
    );

    let mut app = kiosk_tui::App::new(&config);
    app.run().await?;

    tracing::info!("kiosk exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_config() {
        let cli = Cli::parse_from(["kiosk", "--assets", "/srv/fair", "--fps", "30", "-vv"]);
        assert_eq!(cli.verbose, 2);
        let config = cli.load_config().unwrap();
        assert_eq!(config.display.fps, 30);
        assert_eq!(
            config.asset_path(std::path::Path::new("isb.png")),
            PathBuf::from("/srv/fair/isb.png")
        );
    }

    #[test]
    fn zero_fps_override_is_rejected() {
        let dir = std::env::temp_dir().join(format!("kiosk-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[display]\nfps = 24\n").unwrap();

        let cli = Cli::parse_from(["kiosk", "--config", path.to_str().unwrap(), "--fps", "0"]);
        assert!(cli.load_config().is_err());

        let cli = Cli::parse_from(["kiosk", "--config", path.to_str().unwrap()]);
        assert_eq!(cli.load_config().unwrap().display.fps, 24);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["kiosk", "--config", "/no/such/kiosk.toml"]);
        assert!(cli.load_config().is_err());
    }
}
