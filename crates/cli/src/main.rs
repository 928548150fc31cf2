use anyhow::{Context, Result, anyhow};
use catalog::{Listing, ListingCatalog, ListingId, fixtures, parser};
use clap::{Parser, Subcommand};
use colored::Colorize;
use discovery::{PRICE_CEILING, PRICE_STEP, PricePreset, QueryState, SortKey, discover};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Luggy - find a place to store your luggage
#[derive(Parser)]
#[command(name = "luggy")]
#[command(about = "Search, sort and save storage listings", long_about = None)]
struct Cli {
    /// Directory containing listings.json and favorites.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Use the built-in storage spots instead of --data-dir
    #[arg(long)]
    fixtures: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort listings
    Discover {
        /// Case-insensitive text matched against title and distance
        #[arg(long, default_value = "")]
        search: String,

        /// Price preset (under-30k, 30k-50k, over-50k), applied before explicit bounds
        #[arg(long)]
        preset: Option<PricePreset>,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<u64>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<u64>,

        /// nearest, price-ascending, price-descending or rating-descending
        #[arg(long, default_value = "nearest")]
        sort: SortKey,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one listing in detail
    Show {
        #[arg(long)]
        id: String,
    },

    /// List saved listings
    Favorites,

    /// Save or unsave a listing
    ToggleFavorite {
        #[arg(long)]
        id: String,
    },

    /// Time `discover` over synthetic listings
    Benchmark {
        /// Number of synthetic listings
        #[arg(long, default_value = "2000")]
        listings: usize,

        /// Number of timed runs
        #[arg(long, default_value = "200")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Discover {
            search,
            preset,
            min_price,
            max_price,
            sort,
            json,
        } => {
            let catalog = load_catalog(&cli.data_dir, cli.fixtures)?;
            let mut query = QueryState::new();
            query.set_search(search);
            if let Some(preset) = preset {
                query.apply_preset(preset);
            }
            if let Some(min) = min_price {
                query.set_min_price(min);
            }
            if let Some(max) = max_price {
                query.set_max_price(max);
            }
            query.set_sort(sort);
            handle_discover(&catalog, &query, json)?
        }
        Commands::Show { id } => {
            let catalog = load_catalog(&cli.data_dir, cli.fixtures)?;
            handle_show(&catalog, &ListingId::new(id))?
        }
        Commands::Favorites => handle_favorites(&load_catalog(&cli.data_dir, cli.fixtures)?),
        Commands::ToggleFavorite { id } => {
            handle_toggle_favorite(&cli.data_dir, cli.fixtures, &ListingId::new(id))?
        }
        Commands::Benchmark {
            listings,
            iterations,
        } => handle_benchmark(listings, iterations)?,
    }

    Ok(())
}

fn load_catalog(data_dir: &Path, use_fixtures: bool) -> Result<ListingCatalog> {
    if use_fixtures {
        info!("Using built-in storage spots");
        return Ok(ListingCatalog::from_listings(fixtures::storage_spots()));
    }
    ListingCatalog::load_from_dir(data_dir)
        .with_context(|| format!("Failed to load listings from {}", data_dir.display()))
}

/// Handle the 'discover' command
fn handle_discover(catalog: &ListingCatalog, query: &QueryState, json: bool) -> Result<()> {
    debug!("Query: {:?}", query);
    let found = discover(catalog.listings(), query);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    let mut header = format!("{} ({})", "Popular hosts".bold().blue(), query.sort.label());
    if query.has_active_filters() {
        header.push_str(&format!(
            " - ₩{} to ₩{}",
            format_price(query.price.min),
            format_price(query.price.max)
        ));
    }
    println!("{header}");

    if found.is_empty() {
        println!("No listings found. Try adjusting your filters.");
        return Ok(());
    }

    for (rank, listing) in found.iter().enumerate() {
        print_listing_line(rank + 1, listing);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &ListingCatalog, id: &ListingId) -> Result<()> {
    let listing = catalog
        .get_listing(id)
        .ok_or_else(|| anyhow!("Listing {} not found", id))?;

    println!("{}", listing.title.bold().blue());
    println!("{}Distance: {} away", "• ".green(), listing.distance);
    println!("{}Price: ₩{}/mo", "• ".green(), format_price(listing.price));
    println!(
        "{}Rating: {:.1} ({} reviews)",
        "• ".cyan(),
        listing.rating,
        listing.review_count
    );
    if !listing.image_url.is_empty() {
        println!("{}Image: {}", "• ".cyan(), listing.image_url);
    }
    println!(
        "{}Saved: {}",
        "• ".cyan(),
        if listing.is_favorite { "yes" } else { "no" }
    );
    Ok(())
}

/// Handle the 'favorites' command
fn handle_favorites(catalog: &ListingCatalog) {
    let favorites = catalog.favorites();
    println!(
        "{} saved listing{}",
        favorites.len(),
        if favorites.len() == 1 { "" } else { "s" }
    );

    if favorites.is_empty() {
        println!("No Favorites Yet. Start exploring and save your favorite listings.");
        return;
    }

    for (rank, listing) in favorites.iter().enumerate() {
        print_listing_line(rank + 1, listing);
    }
}

/// Handle the 'toggle-favorite' command
fn handle_toggle_favorite(data_dir: &Path, use_fixtures: bool, id: &ListingId) -> Result<()> {
    if use_fixtures {
        return Err(anyhow!("--fixtures is read-only; use --data-dir to save favorites"));
    }

    let catalog = load_catalog(data_dir, false)?;
    let toggled = catalog.with_favorite_toggled(id)?;

    let path = data_dir.join("favorites.json");
    info!("Writing {} favorites to {}", toggled.favorite_ids().len(), path.display());
    parser::write_favorites(&path, &toggled.favorite_ids())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let saved = toggled
        .get_listing(id)
        .map(|listing| listing.is_favorite)
        .unwrap_or(false);
    println!(
        "{} {}",
        if saved { "Saved".green() } else { "Removed".yellow() },
        id
    );
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(count: usize, iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(anyhow!("--iterations must be at least 1"));
    }

    let listings = random_listings(count);
    let mut rng = rand::rng();

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let mut query = QueryState::new();
        query.set_sort(SortKey::ALL[rng.random_range(0..SortKey::ALL.len())]);
        query.set_min_price(rng.random_range(0..=10) * PRICE_STEP);
        query.set_max_price(rng.random_range(10..=20) * PRICE_STEP);
        if rng.random_bool(0.5) {
            query.set_search(["locker", "campus", "km", "storage"][rng.random_range(0..4)]);
        }

        let start = Instant::now();
        let found = discover(&listings, &query);
        timings.push(start.elapsed());
        let _ = std::hint::black_box(found);
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];

    println!("Benchmark results ({} listings, {} runs):", count, iterations);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);

    Ok(())
}

fn random_listings(count: usize) -> Vec<Listing> {
    const NAMES: [&str; 5] = [
        "Student Locker",
        "Basement Storage",
        "Campus Center",
        "Climate Unit",
        "Garage Corner",
    ];
    let mut rng = rand::rng();

    (0..count)
        .map(|i| {
            let distance = if rng.random_bool(0.02) {
                "N/A".to_string()
            } else {
                format!("{:.1}km", rng.random_range(0.1..15.0))
            };
            Listing::new(
                i as u64,
                format!("{} {}", NAMES[rng.random_range(0..NAMES.len())], i),
                distance,
                rng.random_range(0..=PRICE_CEILING / PRICE_STEP) * PRICE_STEP,
                (rng.random_range(0..=50) as f32) / 10.0,
            )
        })
        .collect()
}

fn print_listing_line(rank: usize, listing: &Listing) {
    let heart = if listing.is_favorite { "♥".red() } else { " ".normal() };
    println!(
        "{}. {} {} - {} away - ₩{}/mo - ★ {:.1} ({} reviews)",
        rank.to_string().green(),
        heart,
        listing.title,
        listing.distance,
        format_price(listing.price),
        listing.rating,
        listing.review_count
    );
}

/// 45000 -> "45,000"
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
