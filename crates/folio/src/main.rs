//! Folio - resilient image loading for the portfolio page
//!
//! Usage: folio [OPTIONS] <SOURCE>...

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio_util::sync::CancellationToken;
use url::Url;

use folio_assets::{classify, extract_file_id, is_drive_url, normalize_key, to_view_url};
use folio_net::HttpClient;
use folio_session::{
    FailedUrlRegistry, FileSessionStore, MemorySessionStore, SessionStore, SharedRegistry,
    FAILED_URLS_KEY,
};
use folio_shell::{
    drive, AssetFetcher, ImageLoadController, ImageProps, ImageView, LoadReport, LoaderConfig,
    SystemClock,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the invocation asks for
#[derive(Debug)]
enum Mode {
    Help,
    Version,
    Resolve(String),
    ListFailed,
    EndSession,
    Load(Vec<String>),
}

/// Parsed command line
#[derive(Debug)]
struct Options {
    mode: Mode,
    session: Option<PathBuf>,
    assets: PathBuf,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    fallback_text: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("folio");

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            return ExitCode::FAILURE;
        }
    };

    let result = match options.mode {
        Mode::Help => {
            print_usage(program);
            Ok(())
        }
        Mode::Version => {
            println!("Folio {}", VERSION);
            Ok(())
        }
        Mode::Resolve(ref src) => {
            print_resolution(src);
            Ok(())
        }
        Mode::ListFailed => list_failed(&options),
        Mode::EndSession => end_session(&options),
        Mode::Load(ref sources) => load_sources(&options, sources).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Folio {} - resilient image loading for the portfolio page

USAGE:
    {} [OPTIONS] <SOURCE>...

OPTIONS:
    -h, --help            Print this help message
    -V, --version         Print version information
    --resolve <URL>       Show how a source is classified and rewritten
    --failed              List URLs recorded as failed in the session
    --end-session         End the session, forgetting recorded failures
    --session <PATH>      Keep session state in a file (default: in memory)
    --assets <DIR>        Directory bundled assets are served from (default: .)
    --base <URL>          Page URL protocol-relative sources resolve against
    --timeout <MS>        Load timeout per attempt in milliseconds
    --fallback <TEXT>     Text shown when an image cannot be loaded

EXAMPLES:
    {} /assets/headshot.png https://example.com/banner.jpg
    {} --resolve "https://drive.google.com/file/d/ABC123/view?usp=sharing"
    {} --session .folio/session.json --failed

"#,
        VERSION, program, program, program, program
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        mode: Mode::Load(Vec::new()),
        session: None,
        assets: PathBuf::from("."),
        base_url: None,
        timeout: None,
        fallback_text: None,
    };
    let mut sources = Vec::new();
    let mut mode = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };

        match arg.as_str() {
            "--help" | "-h" => mode = Some(Mode::Help),
            "--version" | "-V" => mode = Some(Mode::Version),
            "--failed" => mode = Some(Mode::ListFailed),
            "--end-session" => mode = Some(Mode::EndSession),
            "--resolve" => mode = Some(Mode::Resolve(value("--resolve")?)),
            "--session" => options.session = Some(PathBuf::from(value("--session")?)),
            "--assets" => options.assets = PathBuf::from(value("--assets")?),
            "--fallback" => options.fallback_text = Some(value("--fallback")?),
            "--base" => {
                let base = value("--base")?;
                let url = Url::parse(&base).map_err(|e| format!("Invalid --base URL: {}", e))?;
                options.base_url = Some(url);
            }
            "--timeout" => {
                let ms = value("--timeout")?;
                let ms: u64 = ms
                    .parse()
                    .map_err(|_| format!("Invalid --timeout value: {}", ms))?;
                options.timeout = Some(Duration::from_millis(ms));
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {}", flag)),
            source => sources.push(source.to_string()),
        }
    }

    options.mode = match mode {
        Some(mode) => mode,
        None if sources.is_empty() => Mode::Help,
        None => Mode::Load(sources),
    };
    Ok(options)
}

/// Show classification, Drive rewriting and the normalized key of a source
fn print_resolution(src: &str) {
    println!("source:     {}", src);
    println!("kind:       {:?}", classify(src));
    println!("drive:      {}", is_drive_url(src));
    println!("file id:    {}", extract_file_id(src).unwrap_or("-"));
    println!("view url:   {}", to_view_url(src));
    println!("key:        {}", normalize_key(src));
}

fn list_failed(options: &Options) -> Result<(), String> {
    let path = options
        .session
        .as_ref()
        .ok_or("--failed needs a --session file")?;
    let registry = FailedUrlRegistry::new(FileSessionStore::new(path));

    if let Err(e) = registry.store().get(FAILED_URLS_KEY) {
        warn!("Session {} unreadable: {}", path.display(), e);
    }

    let failed = registry.failed_urls();
    if failed.is_empty() {
        println!("No failed images in session {}", path.display());
    }
    for url in failed {
        println!("{}", url);
    }
    Ok(())
}

fn end_session(options: &Options) -> Result<(), String> {
    let path = options
        .session
        .as_ref()
        .ok_or("--end-session needs a --session file")?;
    FileSessionStore::new(path)
        .end_session()
        .map_err(|e| e.to_string())?;
    info!("Removed session file {}", path.display());
    println!("Ended session {}", path.display());
    Ok(())
}

/// Load every source in turn against one shared registry
async fn load_sources(options: &Options, sources: &[String]) -> Result<(), String> {
    match options.session {
        Some(ref path) => {
            let registry = Arc::new(FailedUrlRegistry::new(FileSessionStore::new(path)));
            run_loads(options, sources, registry).await
        }
        None => {
            let registry = Arc::new(FailedUrlRegistry::new(MemorySessionStore::new()));
            run_loads(options, sources, registry).await
        }
    }
}

async fn run_loads<S>(
    options: &Options,
    sources: &[String],
    registry: Arc<FailedUrlRegistry<S>>,
) -> Result<(), String>
where
    S: SessionStore + Send + Sync + 'static,
{
    let client = HttpClient::new().map_err(|e| e.to_string())?;
    let mut fetcher = AssetFetcher::new(client, &options.assets);
    if let Some(ref base) = options.base_url {
        fetcher = fetcher.with_base_url(base.clone());
    }

    let mut config = LoaderConfig::default();
    if let Some(timeout) = options.timeout {
        config.load_timeout = timeout;
    }

    info!(
        "Loading {} image(s), timeout {}ms, assets from {}",
        sources.len(),
        config.load_timeout.as_millis(),
        options.assets.display()
    );

    let shared: SharedRegistry = registry;
    let cancel = CancellationToken::new();

    for source in sources {
        info!("Mounting image {}", source);
        let mut props = ImageProps::new(source.as_str(), source.as_str());
        if let Some(ref text) = options.fallback_text {
            props = props.with_fallback_text(text.as_str());
        }

        let (controller, commands) = ImageLoadController::mount(
            props,
            shared.clone(),
            Arc::new(SystemClock),
            config.clone(),
        );
        let report = drive(controller, commands, &fetcher, &cancel).await;
        print_report(source, &report);
    }

    Ok(())
}

fn print_report(source: &str, report: &LoadReport) {
    match &report.view {
        ImageView::Image(_) => {
            let size = report
                .image
                .as_ref()
                .map(|img| format!("{}x{}", img.width, img.height))
                .unwrap_or_else(|| "?".to_string());
            let retried = if report.retries > 0 {
                format!(", via {}", report.src)
            } else {
                String::new()
            };
            println!("loaded   {} ({}{})", source, size, retried);
        }
        ImageView::Fallback(panel) => {
            println!("failed   {} -> \"{}\"", source, panel.text);
        }
        ImageView::Spinner { .. } => {
            println!("pending  {}", source);
        }
    }
}
