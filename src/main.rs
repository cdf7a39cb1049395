use clap::{ArgAction, Parser};

use pinemark::Config;
use pinemark::bridge::{JsonSettingsStore, SettingsStore};

#[derive(Parser, Debug)]
#[command(name = "pinemark")]
#[command(version, about = "Annotation overlay engine for the Pine screen marker")]
struct Cli {
    /// Validate the config file and print the effective values
    #[arg(long, action = ArgAction::SetTrue)]
    check_config: bool,

    /// Write a documented default config file
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Print the persisted settings (hotkeys)
    #[arg(long, action = ArgAction::SetTrue)]
    show_settings: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    if cli.check_config {
        let config = Config::load()?;
        let brush = config.initial_brush();
        println!("Config OK");
        println!("  brush color:  {}", brush.color.to_hex());
        println!("  stroke width: {:.1}", brush.width);
        match &config.capture.save_directory {
            Some(dir) => println!("  save to:      {dir}"),
            None => println!("  save to:      download folder"),
        }
        return Ok(());
    }

    if cli.show_settings {
        let store = JsonSettingsStore::at_default_location()?;
        let settings = store.load()?;
        println!("Settings at {}", store.path().display());
        println!("  toggle overlay: {}", settings.hotkeys.toggle_pine);
        return Ok(());
    }

    // No flags: show usage
    println!("pinemark: annotation overlay engine for the Pine screen marker");
    println!();
    println!("This binary is the engine's maintenance tool; the overlay itself");
    println!("is started by the Pine shell, which embeds the pinemark library.");
    println!();
    println!("Usage:");
    println!("  pinemark --check-config    Validate config and print effective values");
    println!("  pinemark --init-config     Write a documented default config file");
    println!("  pinemark --show-settings   Print the persisted hotkey settings");
    println!("  pinemark --help            Show help");

    Ok(())
}
