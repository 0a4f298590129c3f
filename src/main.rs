use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use beadboard::api;
use beadboard::models::{build_palette, AppConfig, PaletteColor};
use beadboard::server;
use beadboard::services::{BeadService, ImageSource};
use bead_grid::{export_palette, histogram_csv, import_palette, Palette};

#[derive(Parser)]
#[command(name = "beadboard")]
#[command(about = "Beadboard - turn images into bead boards with color usage statistics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render a bead preview to a PNG file
    Preview {
        /// Input image: file path, http(s) URL or data URL
        input: String,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Bead size in source pixels (1-100, drawn at least 5)
        #[arg(
            short,
            long,
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(1..=100)
        )]
        size: u32,

        /// Palette file (one `#RRGGBB,name` entry per line)
        #[arg(long, conflicts_with = "palette_name")]
        palette: Option<PathBuf>,

        /// Name of a palette from the configuration
        #[arg(long)]
        palette_name: Option<String>,

        /// Also write the color usage as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the color usage as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Pixelate an image to a PNG file
    Pixelate {
        /// Input image: file path, http(s) URL or data URL
        input: String,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Block size in source pixels (1-100)
        #[arg(
            short,
            long,
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(1..=100)
        )]
        size: u32,
    },
    /// Print the bead color usage of an image
    Analyze {
        /// Input image: file path, http(s) URL or data URL
        input: String,

        /// Bead size in source pixels (1-100, counted at least 5)
        #[arg(
            short,
            long,
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(1..=100)
        )]
        size: u32,

        /// Write the color usage as CSV instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Validate a palette file and print it in normalized form
    Palette {
        /// Palette file (one `#RRGGBB,name` entry per line)
        file: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beadboard API",
        description = "Turn images into bead boards with color usage statistics",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_pixelate,
        api::handle_bead_preview,
        api::handle_bead_colors,
        api::handle_bead_colors_csv,
        api::handle_list_palettes,
        api::handle_import_palette,
    ),
    components(schemas(
        api::PixelateRequest,
        api::PixelateResponse,
        api::BeadPreviewRequest,
        api::BeadPreviewResponse,
        api::BeadColorsRequest,
        api::BeadColorsResponse,
        api::BeadColor,
        api::GridSizeResponse,
        api::NamedPalette,
        api::PaletteListResponse,
        api::PaletteImportResponse,
        PaletteColor,
    )),
    tags(
        (name = "Images", description = "Pixelation, bead previews and color analysis"),
        (name = "Palettes", description = "Configured palettes and palette file import")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Preview {
            input,
            output,
            size,
            palette,
            palette_name,
            csv,
            json,
        }) => {
            init_cli_logging();
            run_preview_command(
                &input,
                &output,
                size,
                palette.as_deref(),
                palette_name.as_deref(),
                csv.as_deref(),
                json.as_deref(),
            )
            .await
        }
        Some(Commands::Pixelate {
            input,
            output,
            size,
        }) => {
            init_cli_logging();
            run_pixelate_command(&input, &output, size).await
        }
        Some(Commands::Analyze { input, size, csv }) => {
            init_cli_logging();
            run_analyze_command(&input, size, csv.as_deref()).await
        }
        Some(Commands::Palette { file }) => run_palette_command(&file),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadboard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn read_palette_file(path: &Path) -> anyhow::Result<Palette> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette file {}", path.display()))?;
    import_palette(&text).with_context(|| format!("Invalid palette file {}", path.display()))
}

/// Render a bead preview directly to a PNG file (no server needed)
async fn run_preview_command(
    input: &str,
    output: &Path,
    size: u32,
    palette_file: Option<&Path>,
    palette_name: Option<&str>,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> anyhow::Result<()> {
    let config = AppConfig::load_from_env();

    let palette = match (palette_file, palette_name) {
        (Some(path), _) => Some(read_palette_file(path)?),
        (None, Some(name)) => {
            let colors = config
                .palette(name)
                .with_context(|| format!("Palette '{name}' is not configured"))?;
            build_palette(colors).with_context(|| format!("Invalid configured palette '{name}'"))?
        }
        (None, None) => None,
    };

    let service = BeadService::new(&config);
    let preview = service
        .bead_preview(ImageSource::from_cli_arg(input), size, palette)
        .await
        .context("Failed to generate bead preview")?;

    std::fs::write(output, &preview.png)?;
    println!(
        "Rendered {} ({}x{} beads, {} colors, {} bytes)",
        output.display(),
        preview.stats.grid.cols,
        preview.stats.grid.rows,
        preview.stats.unique_colors,
        preview.png.len()
    );

    if let Some(path) = csv {
        std::fs::write(path, histogram_csv(&preview.stats.histogram))?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = json {
        let body = serde_json::to_string_pretty(&api::BeadColorsResponse::from(&preview.stats))?;
        std::fs::write(path, body)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Pixelate an image directly to a PNG file
async fn run_pixelate_command(input: &str, output: &Path, size: u32) -> anyhow::Result<()> {
    let config = AppConfig::load_from_env();
    let service = BeadService::new(&config);

    let pixelated = service
        .pixelate(ImageSource::from_cli_arg(input), size)
        .await
        .context("Failed to pixelate image")?;

    std::fs::write(output, &pixelated.png)?;
    println!(
        "Pixelated {} ({}x{}, {} bytes)",
        output.display(),
        pixelated.width,
        pixelated.height,
        pixelated.png.len()
    );

    Ok(())
}

/// Print or export the bead color usage of an image
async fn run_analyze_command(input: &str, size: u32, csv: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load_from_env();
    let service = BeadService::new(&config);

    let stats = service
        .analyze(ImageSource::from_cli_arg(input), size)
        .await
        .context("Failed to analyze bead colors")?;

    if let Some(path) = csv {
        std::fs::write(path, histogram_csv(&stats.histogram))?;
        println!("Wrote {} ({} colors)", path.display(), stats.unique_colors);
        return Ok(());
    }

    println!(
        "Grid: {}x{} ({} beads, {} colors)\n",
        stats.grid.cols, stats.grid.rows, stats.total_beads, stats.unique_colors
    );
    for entry in &stats.histogram {
        println!(
            "  {:<10} {:<18} {:>6}  {}%",
            entry.label,
            entry.rgb.to_css(),
            entry.count,
            entry.percentage
        );
    }

    Ok(())
}

fn run_palette_command(file: &Path) -> anyhow::Result<()> {
    let palette = read_palette_file(file)?;
    eprintln!("{} colors", palette.len());
    println!("{}", export_palette(&palette));
    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Beadboard v{VERSION}");
    println!("Turn images into bead boards with color usage statistics\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("\nConfig:  {config_source}");

    let config = AppConfig::load_from_env();
    let names: Vec<&str> = config.palettes.keys().map(String::as_str).collect();
    if names.is_empty() {
        println!("Palettes: (none)");
    } else {
        println!("Palettes: {}", names.join(", "));
    }

    // Commands section
    println!("\nCommands:");
    println!("  beadboard serve      Start the HTTP server");
    println!("  beadboard preview    Render a bead preview to PNG file");
    println!("  beadboard pixelate   Pixelate an image to PNG file");
    println!("  beadboard analyze    Print bead color usage");
    println!("  beadboard palette    Validate a palette file");
    println!("\nRun 'beadboard --help' for more details.");
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok();
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = config_file.as_deref().unwrap_or("embedded"),
        "Configuration source"
    );

    // Create application state using shared server module
    let state = server::create_app_state(AppConfig::load_from_env());

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Beadboard server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
