use clap::{Parser, Subcommand};
use imgshift::prefs::{self, Prefs, Theme};
use imgshift::{ConversionSession, RustCodec, TargetFormat, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "imgshift")]
#[command(about = "Convert a single image between formats")]
#[command(long_about = "\
Convert a single image between formats

Decodes the input (JPEG, PNG, WebP, GIF, BMP, or TIFF), re-encodes it as
the chosen target format, and saves the result next to where you run it,
with the extension swapped to match:

  imgshift convert photo.png                 # PNG defaults to JPEG → photo.jpg
  imgshift convert photo.jpg --format webp   # explicit target → photo.webp
  imgshift convert art.png -f jpeg -q 70     # quality for JPEG/WebP targets

Targets without alpha support (JPEG, BMP) get transparent pixels
flattened onto white. Run 'imgshift formats' for the full format table.")]
#[command(version = version_string())]
struct Cli {
    /// Preferences file (theme)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an image to a target format
    Convert {
        /// Input image path
        input: PathBuf,
        /// Target format; defaults per source type (JPEG source → png, otherwise → jpeg)
        #[arg(short, long)]
        format: Option<TargetFormat>,
        /// Encode quality 0-100 (JPEG and WebP targets only)
        #[arg(short, long, default_value_t = 90)]
        quality: u8,
        /// Output path; defaults to the derived filename in the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show image metadata without converting
    Info {
        /// Input image path
        input: PathBuf,
        /// Emit JSON instead of the human-readable display
        #[arg(long)]
        json: bool,
    },
    /// List supported target formats
    Formats,
    /// Show or change the persisted color theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Get,
    /// Set the theme
    Set { theme: Theme },
    /// Switch between dark and light
    Toggle,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let prefs_path = cli.prefs.unwrap_or_else(prefs::default_prefs_path);

    match cli.command {
        Command::Convert { input, format, quality, output: out_path } => {
            let mut session = ConversionSession::new(RustCodec::new());
            session.select_path(&input)?;
            if let Some(format) = format {
                session.set_target_format(format);
            }
            session.set_quality(quality);

            session.convert()?;
            let filename = session.download()?.filename;
            let path = out_path.unwrap_or_else(|| PathBuf::from(&filename));
            let saved_as = path.display().to_string();

            let source = session.source().ok_or("no source after conversion")?;
            let artifact = session.artifact().ok_or("no artifact after conversion")?;
            std::fs::write(&path, &artifact.bytes)?;
            output::print_lines(&output::format_convert_summary(
                source,
                artifact,
                session.target_format(),
                session.quality().percent(),
                &saved_as,
            ));
        }
        Command::Info { input, json } => {
            let mut session = ConversionSession::new(RustCodec::new());
            session.select_path(&input)?;
            let source = session.source().ok_or("no source after selection")?;
            let dims = session.dimensions().ok_or("no decoded image")?;
            if json {
                let value = serde_json::json!({
                    "name": source.name,
                    "mime": source.mime,
                    "size": source.size,
                    "width": dims.width,
                    "height": dims.height,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                output::print_lines(&output::format_info(source, dims));
            }
        }
        Command::Formats => {
            output::print_lines(&output::format_formats_list());
        }
        Command::Theme { action } => {
            let mut prefs = Prefs::load(&prefs_path)?;
            match action {
                ThemeAction::Get => println!("{}", prefs.theme.as_str()),
                ThemeAction::Set { theme } => {
                    prefs.theme = theme;
                    prefs.save(&prefs_path)?;
                    println!("{}", prefs.theme.as_str());
                }
                ThemeAction::Toggle => {
                    prefs.theme = prefs.theme.toggled();
                    prefs.save(&prefs_path)?;
                    println!("{}", prefs.theme.as_str());
                }
            }
        }
    }

    Ok(())
}
