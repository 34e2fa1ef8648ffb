//! uinal CLI: Maya vigesimal numeral engine.

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use uinal::convert;
use uinal::digit::Digit;
use uinal::export;
use uinal::glyph::codepoint;
use uinal::glyph::pictogram::Pictogram;
use uinal::glyph::render::{self, GlyphPolicy, RenderConfig};

#[derive(Parser)]
#[command(name = "uinal", version, about = "Maya vigesimal numeral engine")]
struct Cli {
    /// Disable ANSI colors even on a TTY.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a decimal number to Maya numerals.
    Convert {
        /// Non-negative decimal integer.
        number: String,

        /// Render composed dot/bar pictograms instead of code points.
        #[arg(long)]
        pictogram: bool,

        /// Render on a single line instead of stacking digits vertically.
        #[arg(long)]
        inline: bool,

        /// Print the conversion as JSON instead of rendering glyphs.
        #[arg(long)]
        json: bool,
    },

    /// Show details of a single base-20 digit.
    Digit {
        /// Digit value, 0–19.
        value: i64,
    },

    /// Print the full 20-glyph reference table.
    Codex,

    /// Export numeral data as JSON.
    Export {
        #[command(subcommand)]
        action: ExportAction,
    },
}

#[derive(Subcommand)]
enum ExportAction {
    /// Export the 20-entry glyph catalog as JSON.
    Catalog,
    /// Export a conversion as JSON.
    Conversion {
        /// Non-negative decimal integer.
        number: String,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let color = !cli.no_color && RenderConfig::default().color;

    match cli.command {
        Commands::Convert {
            number,
            pictogram,
            inline,
            json,
        } => {
            let n = convert::parse_decimal(&number).into_diagnostic()?;

            if json {
                let exported = export::export_conversion(n).into_diagnostic()?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&exported).into_diagnostic()?
                );
                return Ok(());
            }

            let digits = convert::to_base20(n).into_diagnostic()?;
            let config = RenderConfig {
                color,
                policy: if pictogram {
                    GlyphPolicy::Pictogram
                } else {
                    GlyphPolicy::Codepoint
                },
                stacked: !inline,
            };

            println!("{}", render::render_number(&digits, &config));
            println!();
            let values: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
            println!("base-20 digits: [{}]", values.join(", "));
        }

        Commands::Digit { value } => {
            let digit = Digit::new(value).into_diagnostic()?;
            let entry = codepoint::lookup(digit);
            let pic = Pictogram::for_digit(digit);

            println!("Digit: {}", entry.value);
            println!("  name:      {}", entry.name);
            println!("  glyph:     {}", entry.codepoint);
            println!("  codepoint: U+{:04X}", entry.codepoint as u32);
            println!("  bars:      {}", pic.bars);
            println!("  dots:      {}", pic.dots);
        }

        Commands::Codex => {
            let config = RenderConfig {
                color,
                ..Default::default()
            };
            println!("{}", render::render_codex(&config));
        }

        Commands::Export { action } => match action {
            ExportAction::Catalog => {
                let exports = export::export_catalog();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&exports).into_diagnostic()?
                );
            }
            ExportAction::Conversion { number } => {
                let n = convert::parse_decimal(&number).into_diagnostic()?;
                let exported = export::export_conversion(n).into_diagnostic()?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&exported).into_diagnostic()?
                );
            }
        },
    }

    Ok(())
}
