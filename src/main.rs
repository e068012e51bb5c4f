//! CLI entry point for postgrid

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postgrid")]
#[command(version)]
#[command(about = "Serve a small blog from JSON data and HTML templates", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the blog server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port in _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip in _config.yml)
        #[arg(short, long)]
        ip: Option<String>,

        /// Re-read templates from disk on every request
        #[arg(long)]
        reload: bool,
    },

    /// List posts
    List,

    /// Render one path to stdout
    Render {
        /// Request path, e.g. / or /hello-world
        #[arg(default_value = "/")]
        path: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postgrid=debug,tower_http=debug,info"
    } else {
        "postgrid=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            postgrid::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::Server { port, ip, reload } => {
            let mut blog = postgrid::Blog::new(&base_dir)?;
            if reload && !blog.config.reload_templates {
                blog.templates = postgrid::templates::Templates::load(
                    blog.base_dir.join(&blog.config.template_dir),
                    true,
                )?;
            }

            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            postgrid::server::start(blog, &ip, port).await?;
        }

        Commands::List => {
            let blog = postgrid::Blog::new(&base_dir)?;
            postgrid::commands::list::run(&blog)?;
        }

        Commands::Render { path } => {
            let blog = postgrid::Blog::new(&base_dir)?;
            postgrid::commands::render::run(&blog, &path).await?;
        }

        Commands::Version => {
            println!("postgrid version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
