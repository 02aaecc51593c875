//! Command-line driver for Philips Hue lights.
//!
//! Pairing is kept in a JSON settings file between runs.
//!
//! Run with: cargo run --example hue_cli -- --help

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hue_light_driver::{
    AdapterConfig, BooleanProps, BrightnessColour, BrightnessProps, Colour, ColourState, Error,
    EventKind, HsbProps, HttpConnector, HueLightAdapter, PlatformDevice, Settings, SettingsStore,
};

#[derive(Parser)]
#[command(name = "hue-cli")]
#[command(about = "Control Philips Hue lights from the command line", long_about = None)]
struct Cli {
    /// Where the bridge pairing is stored
    #[arg(short, long, global = true, default_value = "hue-settings.json")]
    settings: PathBuf,

    /// Transition time in seconds
    #[arg(short, long, global = true, default_value = "0.4")]
    duration: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair with the bridge (press its link button first)
    Pair,

    /// List the lights known to the bridge
    Discover,

    /// Turn a light on
    On { id: String },

    /// Turn a light off
    Off { id: String },

    /// Set brightness (0-1)
    Brightness { id: String, level: f64 },

    /// Set colour: hue (0-360), saturation (0-1), brightness (0-1)
    Colour {
        id: String,
        hue: f64,
        saturation: f64,
        brightness: f64,
    },

    /// Forget the paired bridge
    Unpair,
}

/// Settings kept in a JSON file next to the binary.
struct FileStore(PathBuf);

impl SettingsStore for FileStore {
    async fn get(&self) -> Result<Settings, Error> {
        match std::fs::read(&self.0) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(Error::JsonLoad),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(Error::Settings(e.to_string())),
        }
    }

    async fn set(&self, settings: &Settings) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(settings).map_err(Error::JsonDump)?;
        std::fs::write(&self.0, bytes).map_err(|e| Error::Settings(e.to_string()))
    }
}

fn print_event(kind: EventKind, id: &str, state: &ColourState) {
    println!(
        "{kind} {id}: on={} hue={} saturation={:.2} brightness={:.2}",
        state.on, state.colour.hue, state.colour.saturation, state.colour.brightness
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AdapterConfig::default();
    let connector = HttpConnector::new(&config)?;
    let store = FileStore(cli.settings.clone());
    let mut adapter = HueLightAdapter::new(connector, store, print_event, config).await?;

    match cli.command {
        Commands::Pair => {
            for step in adapter.authentication_steps() {
                println!("{}", step.message);
            }
            let result = adapter.authentication_step0(&serde_json::Value::Null).await;
            if result.success {
                println!("Paired with bridge at {:?}", adapter.settings().bridge_address);
            } else {
                eprintln!("Pairing failed: {}", result.message.unwrap_or_default());
            }
        }
        Commands::Discover => {
            let devices = adapter.discover().await?;
            if devices.is_empty() {
                println!("No lights found on the bridge.");
            }
            for device in devices {
                let commands: Vec<String> =
                    device.commands.iter().map(|c| c.to_string()).collect();
                println!(
                    "  {:>3}  {:24}  {:26}  {}",
                    device.original_id,
                    device.name,
                    device.light_type.to_string(),
                    commands.join(", ")
                );
            }
        }
        Commands::On { id } => {
            let device = find(&adapter, &id).await?;
            let props = BooleanProps {
                on: true,
                duration: cli.duration,
            };
            adapter.command_set_boolean_state(&device, &props).await?;
        }
        Commands::Off { id } => {
            let device = find(&adapter, &id).await?;
            let props = BooleanProps {
                on: false,
                duration: cli.duration,
            };
            adapter.command_set_boolean_state(&device, &props).await?;
        }
        Commands::Brightness { id, level } => {
            let device = find(&adapter, &id).await?;
            let props = BrightnessProps {
                colour: BrightnessColour { brightness: level },
                duration: cli.duration,
            };
            adapter.command_set_brightness_state(&device, &props).await?;
        }
        Commands::Colour {
            id,
            hue,
            saturation,
            brightness,
        } => {
            let Some(colour) = Colour::create(hue, saturation, brightness) else {
                eprintln!("Colour out of range: hue 0-360, saturation and brightness 0-1");
                return Ok(());
            };
            let device = find(&adapter, &id).await?;
            let props = HsbProps {
                colour,
                duration: cli.duration,
            };
            adapter.command_set_hsb_state(&device, &props).await?;
        }
        Commands::Unpair => {
            adapter.unpair().await?;
            println!("Bridge pairing cleared.");
        }
    }

    Ok(())
}

async fn find<E>(
    adapter: &HueLightAdapter<HttpConnector, FileStore, E>,
    id: &str,
) -> Result<PlatformDevice, Box<dyn std::error::Error>>
where
    E: hue_light_driver::EventSink,
{
    let device = adapter
        .discover()
        .await?
        .into_iter()
        .find(|d| d.original_id == id)
        .ok_or_else(|| format!("no light with id {id}"))?;
    Ok(PlatformDevice::new(&format!("cli-{id}"), device))
}
