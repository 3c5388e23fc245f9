use std::sync::Arc;

use structopt::StructOpt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use photodeck::{Client, Favorites, Feed, Photo};

#[derive(StructOpt)]
#[structopt(about = "Browse random and searched Unsplash photos")]
struct Opt {
    /// Search query; fetches random photos when omitted.
    query: Vec<String>,

    /// How many random photos to fetch.
    #[structopt(short, long, default_value = "30")]
    count: u32,

    /// Photo ids to mark as favorites after fetching.
    #[structopt(short, long, number_of_values = 1)]
    favorite: Vec<String>,
}

fn print_photo(photo: &Photo) {
    println!("{}", photo.id);
    println!("  By: {}", photo.creator.name);
    println!(
        "  {}",
        photo
            .display_description()
            .unwrap_or("No description available"),
    );
    println!("  Views: {}", photo.views.unwrap_or(0));
    println!("  Downloads: {}", photo.downloads.unwrap_or(0));

    match photo.creation_date() {
        Some(date) => println!("  Created at: {date}"),
        None => println!("  Created at: N/A"),
    }

    match photo.location.as_ref().and_then(|location| location.resolved()) {
        Some(place) => {
            println!(
                "  Location: {}, {}, {}",
                place.name, place.city, place.country,
            );
            println!(
                "  Coordinates: Lat {}, Long {}",
                place.latitude, place.longitude,
            );
        }

        None => {
            println!("  Location: N/A");
            println!("  Coordinates: N/A");
        }
    }
}

async fn run(opt: Opt) -> photodeck::Result<()> {
    let client = Client::new_from_env()?;
    let feed = Feed::new(Arc::new(client));

    if opt.query.is_empty() {
        feed.refresh(opt.count).await?;
    } else {
        feed.search(&opt.query.join(" ")).await?;
    }

    let favorites = Favorites::new();
    for photo in feed.photos() {
        print_photo(&photo);

        if opt.favorite.contains(&photo.id) {
            favorites.add(photo);
        }
    }

    if !favorites.is_empty() {
        println!("Favorites:");
        for photo in favorites.list() {
            println!("  {} ({})", photo.id, photo.creator.name);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photodeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(Opt::from_args()).await {
        eprintln!("{}", e);
    }
}
