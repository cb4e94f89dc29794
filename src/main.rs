use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopfront::api::ApiClient;
use shopfront::authoring::AuthoringWorkflow;
use shopfront::catalog::{Product, ResultStore};
use shopfront::config::Config;
use shopfront::dispatcher::QueryDispatcher;

#[derive(Parser)]
#[command(
    name = "shopfront",
    about = "Catalog browsing, search and authoring client",
    version
)]
struct Cli {
    /// Override the catalog service base URL from config.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the featured homepage collection.
    Browse,
    /// Text search over the catalog.
    Search {
        /// Query string, sent as-is.
        query: String,
    },
    /// Visual search with an image file.
    SearchImage {
        /// Path to the query image.
        image: PathBuf,
    },
    /// Author a new product from an image: upload, caption, generate,
    /// save.
    Author {
        /// Path to the product image.
        image: PathBuf,
        /// Replace the machine caption before generating.
        #[arg(long)]
        caption: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load().context("loading configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let client = ApiClient::new(config.base_url.clone(), config.timeouts());
    let store = ResultStore::new();
    let dispatcher = QueryDispatcher::new(client.clone(), store.clone());

    match cli.command {
        Command::Browse => {
            dispatcher.load_homepage().await?;
            print_products(&store.snapshot());
        }
        Command::Search { query } => {
            dispatcher.search_text(&query).await?;
            if let Some(answer) = store.answer() {
                println!("Answer: {answer}\n");
            }
            print_products(&store.snapshot());
        }
        Command::SearchImage { image } => {
            let (bytes, file_name) = read_image(&image)?;
            dispatcher.search_image(bytes, file_name).await?;
            print_products(&store.snapshot());
        }
        Command::Author { image, caption } => {
            let workflow = AuthoringWorkflow::new(client, config.saved_reset_delay());
            let (bytes, file_name) = read_image(&image)?;

            workflow.select_file(bytes, &file_name).await?;
            let draft = workflow.draft();
            println!("Caption: {}", draft.caption);

            if let Some(caption) = caption {
                workflow.edit_caption(caption);
            }

            workflow.generate().await?;
            let draft = workflow.draft();
            if let Some(generated) = &draft.generated {
                println!("Title: {}", generated.title);
                println!("Tags: {}", generated.tags.join(", "));
            }

            let product_id = workflow.save().await?;
            println!("Saved as product {product_id}");
        }
    }

    Ok(())
}

fn read_image(path: &Path) -> Result<(Vec<u8>, String)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading image '{}'", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok((bytes, file_name))
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products.");
        return;
    }
    for product in products {
        println!(
            "{}  {}  [{}]",
            product.id,
            product.content.title,
            product.content.tags.join(", ")
        );
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
