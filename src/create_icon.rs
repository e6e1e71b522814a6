use anyhow::Result;
use clap::Parser;
use watam_icons::config::Config;
use watam_icons::constants::sizes;
use watam_icons::{icon, resample};

#[derive(Parser)]
#[command(name = "create-icon")]
#[command(about = "Generate the WATAM AI app icon PNG set", long_about = None)]
struct Cli {
    /// Output directory for the generated PNGs (overrides icon.yaml)
    #[arg(long)]
    out_dir: Option<String>,

    /// Single character drawn at the canvas center (overrides icon.yaml)
    #[arg(long)]
    glyph: Option<char>,
}

fn main() {
    if let Err(e) = run(&Cli::parse()) {
        println!("❌ Error: {e:#}");
        println!("   Check that the output directory is writable and re-run create-icon.");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load_or_default()?;
    if let Some(glyph) = cli.glyph {
        config.glyph = glyph.to_string();
    }
    if let Some(out_dir) = &cli.out_dir {
        config.output_dir = out_dir.clone();
    }
    config.validate()?;

    println!("Generating app icon...");
    let base = icon::create_base_icon(&config)?;
    let written = resample::write_png_set(&base, &config.output_dir(), sizes::PNG_SIZES)?;

    println!("✅ Icons created successfully!");
    for path in &written {
        println!("   - {}", path.display());
    }

    Ok(())
}
