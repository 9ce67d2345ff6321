// demos/batch_download.rs
//
// Downloads wind simulations for every row of a `lat,lon,name` CSV file.
//
//   NINJA_TOKEN=... RUST_LOG=info cargo run --example batch_download -- locations.csv ninja_wind
use renewables_ninja::{Location, NinjaClient, NinjaError, Query, WindParameters};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), NinjaError> {
    // Set RUST_LOG=info (or debug) to see progress and pauses
    env_logger::init();

    let mut args = env::args().skip(1);
    let locations_file = PathBuf::from(args.next().unwrap_or_else(|| "locations.csv".into()));
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "ninja_wind".into()));

    let client = NinjaClient::from_env()?;
    let locations = Location::read_csv(&locations_file)?;

    let summary = client
        .batch()
        .run(
            &locations,
            &Query::Wind(WindParameters::default()),
            &output_dir,
        )
        .await?;

    for file in summary.files {
        println!("{}", file.display());
    }
    Ok(())
}
