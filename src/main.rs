use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use rgbstrobe::preview::Preview;
use rgbstrobe::scripts::describe;
use rgbstrobe::tooloptions::ToolOptions;
use rgbstrobe::{HostColor, RgbScript, Strobe};

#[derive(Parser)]
#[command(about = "Inspect and preview the strobe RGB script")]
struct Cli {
    /// TOML file with tool defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// Frequency written to the script before running, as the host widget would
    #[arg(short, long, value_name = "STEPS", allow_hyphen_values = true)]
    freq: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct MatrixArgs {
    /// Matrix width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Matrix height in pixels
    #[arg(long)]
    height: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the metadata the host reads when loading the script
    Describe,
    /// Print how many steps one cycle takes
    Steps {
        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Print the map for a single step as JSON
    Render {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Color as #rrggbb
        #[arg(long, value_name = "HEX")]
        color: Option<String>,

        #[arg(long, default_value_t = 0)]
        step: u32,
    },
    /// Play the animation in the terminal until Ctrl-C
    Preview {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Color as #rrggbb
        #[arg(long, value_name = "HEX")]
        color: Option<String>,

        /// Steps per second
        #[arg(long)]
        fps: Option<f32>,

        /// Stop after this many full cycles
        #[arg(long)]
        cycles: Option<u32>,
    },
}

fn load_options(args: &Cli) -> Result<ToolOptions, Box<dyn std::error::Error>> {
    let mut options = match args.config.as_deref() {
        Some(path) => ToolOptions::load(path)?,
        None => ToolOptions::new(),
    };

    if let Some(freq) = args.freq.as_ref() {
        options.freq = Some(freq.clone());
    }

    let (matrix, color) = match &args.command {
        Command::Describe => return Ok(options),
        Command::Steps { matrix } => (matrix, None),
        Command::Render { matrix, color, .. } => (matrix, color.as_ref()),
        Command::Preview {
            matrix,
            color,
            fps,
            cycles,
        } => {
            if let Some(fps) = fps {
                options.fps = *fps;
            }
            if cycles.is_some() {
                options.cycles = *cycles;
            }
            (matrix, color.as_ref())
        }
    };

    if let Some(width) = matrix.width {
        options.width = width;
    }
    if let Some(height) = matrix.height {
        options.height = height;
    }
    if let Some(color) = color {
        options.color = color.clone();
    }

    options.validate()?;
    Ok(options)
}

fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = load_options(args)?;
    log::debug!("Options: {:?}", options);

    let mut strobe = Strobe::new();
    if let Some(freq) = options.freq.as_deref() {
        strobe.set_frequency(freq)?;
    }
    let script: &dyn RgbScript<HostColor> = &strobe;

    match &args.command {
        Command::Describe => {
            println!("{}", json::stringify_pretty(describe(script), 2));
        }
        Command::Steps { .. } => {
            let steps = script.rgb_map_step_count(options.width, options.height)?;
            println!("{}", steps);
        }
        Command::Render { step, .. } => {
            let color = HostColor::from_hex(&options.color)?;
            let map = script.rgb_map(options.width, options.height, color, *step)?;
            println!("{}", json::stringify(map.to_json()));
        }
        Command::Preview { .. } => {
            let color = HostColor::from_hex(&options.color)?;
            if color.is_off() {
                log::warn!("Previewing with {color}, lit steps will look the same as dark ones");
            }
            let stop = Arc::new(AtomicBool::new(false));
            let handler_stop = Arc::clone(&stop);
            ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst))?;

            log::info!(
                "Previewing {}x{} at {} fps, Ctrl-C to stop",
                options.width,
                options.height,
                options.fps
            );
            let stdout = std::io::stdout();
            Preview::new(script, stdout.lock(), options.width, options.height, color).run(
                options.fps,
                options.cycles,
                &stop,
            )?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("rgbstrobe-cli-{}-{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const FILE: &str = "width = 16\nheight = 2\ncolor = \"#ff0000\"\nfps = 5.0\nfreq = \"4\"\ncycles = 3\n";

    #[test]
    fn flags_override_file_values() {
        let path = write_temp("override.toml", FILE);
        let args = Cli::try_parse_from([
            "rgbstrobe",
            "--config",
            path.to_str().unwrap(),
            "--freq",
            "7",
            "preview",
            "--width",
            "3",
            "--color",
            "#00ff00",
            "--fps",
            "20",
        ])
        .unwrap();
        let options = load_options(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.freq.as_deref(), Some("7"));
        assert_eq!(options.width, 3);
        assert_eq!(options.height, 2);
        assert_eq!(options.color, "#00ff00");
        assert_eq!(options.fps, 20.0);
        assert_eq!(options.cycles, Some(3));
    }

    #[test]
    fn file_values_apply_without_flags() {
        let path = write_temp("plain.toml", FILE);
        let args = Cli::try_parse_from(["rgbstrobe", "-c", path.to_str().unwrap(), "render"]).unwrap();
        let options = load_options(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.freq.as_deref(), Some("4"));
        assert_eq!(options.width, 16);
        assert_eq!(options.height, 2);
        assert_eq!(options.color, "#ff0000");
    }

    #[test]
    fn describe_ignores_matrix_settings() {
        let args = Cli::try_parse_from(["rgbstrobe", "--freq", "-1", "describe"]).unwrap();
        let options = load_options(&args).unwrap();
        assert_eq!(options.freq.as_deref(), Some("-1"));
        assert_eq!(options, ToolOptions { freq: Some("-1".to_string()), ..ToolOptions::new() });
    }

    #[test]
    fn zero_fps_is_refused() {
        let args = Cli::try_parse_from(["rgbstrobe", "preview", "--fps", "0"]).unwrap();
        assert!(load_options(&args).is_err());
    }
}
