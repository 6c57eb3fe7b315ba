//! Teselar CLI - build, validate, and serve treemap pages.

use clap::{Parser, Subcommand};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use teselar_core::{parse_dataset, HierarchyError, HierarchyNode};
use teselar_svg::{Chart, Manifest, ManifestError, Page};
use tiny_http::{Header, Response, Server};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "teselar")]
#[command(about = "Squarified treemap pages from hierarchical JSON")]
#[command(version)]
struct Cli {
    /// Log layout decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the multi-dataset page described by a manifest
    Build {
        /// Path to the YAML manifest
        #[arg(short, long, default_value = "teselar.yaml")]
        config: PathBuf,

        /// Output file (defaults to the manifest's `output`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Render a single dataset to a standalone page
    Render {
        /// Dataset JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Output file (defaults to the dataset path with a new extension)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Page heading
        #[arg(short, long)]
        title: Option<String>,

        /// Emit bare SVG instead of a full page
        #[arg(long)]
        svg: bool,
    },

    /// Validate datasets and report their shape
    Check {
        /// Dataset JSON files
        #[arg(short, long, required = true, num_args = 1..)]
        data: Vec<PathBuf>,
    },

    /// Serve a directory of built pages
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Directory to serve
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

/// Failures reported to the user, with the offending path attached
/// wherever one exists.
#[derive(Debug)]
enum BuildError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Hierarchy { path: PathBuf, source: HierarchyError },
    Manifest(ManifestError),
    Write { path: PathBuf, source: io::Error },
    Server(String),
    Invalid { failed: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid JSON in {}: {source}", path.display())
            }
            Self::Hierarchy { path, source } => {
                write!(f, "invalid dataset {}: {source}", path.display())
            }
            Self::Manifest(err) => write!(f, "manifest error: {err}"),
            Self::Write { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
            Self::Server(msg) => write!(f, "server error: {msg}"),
            Self::Invalid { failed } => write!(f, "{failed} dataset(s) failed validation"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Hierarchy { source, .. } => Some(source),
            Self::Manifest(err) => Some(err),
            Self::Server(_) | Self::Invalid { .. } => None,
        }
    }
}

impl From<ManifestError> for BuildError {
    fn from(err: ManifestError) -> Self {
        Self::Manifest(err)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build { config, out } => run_build(&config, out.as_deref()),
        Commands::Render {
            data,
            out,
            title,
            svg,
        } => run_render(&data, out.as_deref(), title.as_deref(), svg),
        Commands::Check { data } => run_check(&data),
        Commands::Serve { port, dir } => run_serve(port, &dir),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Logging is off unless `RUST_LOG` asks for it; `-v` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Reads, parses, and builds one dataset file.
fn load_hierarchy(path: &Path) -> Result<HierarchyNode, BuildError> {
    let text = fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_dataset(&text).map_err(|source| BuildError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    HierarchyNode::build(&data).map_err(|source| BuildError::Hierarchy {
        path: path.to_path_buf(),
        source,
    })
}

fn run_build(config: &Path, out: Option<&Path>) -> Result<(), BuildError> {
    let manifest = Manifest::load(config)?;
    info!(
        config = %config.display(),
        datasets = manifest.datasets.len(),
        "building page"
    );

    // Load every dataset before emitting anything, so one bad file can
    // never leave a half-updated page behind.
    let mut charts = Vec::with_capacity(manifest.datasets.len());
    for dataset in &manifest.datasets {
        let root = load_hierarchy(&dataset.source)?;
        charts.push(Chart::build(&root));
    }

    let mut page = Page::new(&manifest.title);
    for (dataset, chart) in manifest.datasets.iter().zip(charts) {
        page = page.with_panel(&dataset.key, &dataset.label, chart);
    }
    let html = page.with_initial(manifest.initial_key()).to_html();

    let target = out.unwrap_or(&manifest.output);
    write_output(target, &html)?;
    println!("Wrote {}", target.display());
    Ok(())
}

fn run_render(
    data: &Path,
    out: Option<&Path>,
    title: Option<&str>,
    svg: bool,
) -> Result<(), BuildError> {
    let root = load_hierarchy(data)?;
    let chart = Chart::build(&root);
    let heading = title.unwrap_or("Treemap");

    let (target, contents) = if svg {
        (default_out(data, out, "svg"), chart.to_svg())
    } else {
        let html = Page::new(heading)
            .with_panel("chart", heading, chart)
            .to_html();
        (default_out(data, out, "html"), html)
    };

    write_output(&target, &contents)?;
    println!("Wrote {}", target.display());
    Ok(())
}

fn run_check(paths: &[PathBuf]) -> Result<(), BuildError> {
    let mut failed = 0;
    for path in paths {
        match load_hierarchy(path) {
            Ok(root) => println!(
                "ok {}: {} nodes, {} leaves, {} categories",
                path.display(),
                root.node_count(),
                root.leaf_count(),
                root.categories().len()
            ),
            Err(err) => {
                eprintln!("{err}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(BuildError::Invalid { failed });
    }
    Ok(())
}

fn run_serve(port: u16, dir: &Path) -> Result<(), BuildError> {
    let addr = format!("0.0.0.0:{port}");
    let server = Server::http(&addr).map_err(|err| BuildError::Server(err.to_string()))?;
    println!("Serving {} at http://localhost:{port}", dir.display());
    println!("Press Ctrl+C to stop");

    for request in server.incoming_requests() {
        let url = request.url().to_string();
        let Some(path) = resolve_request(dir, &url) else {
            let _ = request.respond(Response::from_string("404 Not Found").with_status_code(404));
            continue;
        };
        debug!(path = %path.display(), "request");

        let response = match fs::read(&path) {
            Ok(content) => {
                let mut response = Response::from_data(content);
                if let Ok(header) = Header::from_bytes(
                    &b"Content-Type"[..],
                    content_type(&path).as_bytes(),
                ) {
                    response = response.with_header(header);
                }
                response
            }
            Err(_) => Response::from_string("404 Not Found").with_status_code(404),
        };
        let _ = request.respond(response);
    }
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn default_out(data: &Path, out: Option<&Path>, ext: &str) -> PathBuf {
    out.map_or_else(|| data.with_extension(ext), Path::to_path_buf)
}

/// Maps a request URL to a file under `dir`. The empty path serves
/// `index.html`; anything that steps outside `dir` is rejected.
fn resolve_request(dir: &Path, url: &str) -> Option<PathBuf> {
    let raw = url.split_once('?').map_or(url, |(path, _)| path);
    let trimmed = raw.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };
    let relative = Path::new(relative);
    if relative
        .components()
        .any(|part| !matches!(part, Component::Normal(_)))
    {
        return None;
    }
    let path = dir.join(relative);
    path.is_file().then_some(path)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("yaml" | "yml") => "text/yaml",
        _ => "application/octet-stream",
    }
}
