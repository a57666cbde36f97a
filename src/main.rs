use std::env;
use std::io;

use trip_planner::annealing::{AnnealingConfig, SimulatedAnnealing};
use trip_planner::config::resolve_budget;
use trip_planner::haversine::HaversineMatrix;
use trip_planner::loader::load_points_or_default;
use trip_planner::render::{GeoJsonRenderer, LeafletHtmlRenderer, write_artifact};
use trip_planner::report::format_report;
use trip_planner::traits::RouteRenderer;
use trip_planner::{Planner, TravelMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_POINTS_PATH: &str = "trip.json";
const DEFAULT_OUTPUT_PATH: &str = "route.html";

fn print_help() {
    eprintln!(
        "\
Usage: trip-planner [OPTIONS]

Options:
  --points=PATH     JSON file of [lat, lon, priority, name] records (default: trip.json)
  --mode=MODE       walk, bike or car (prompted when omitted)
  --hours=F         Maximum travel time in hours (prompted when omitted)
  --seed=N          Seed for the tour heuristic
  --output=PATH     Map file to write (default: route.html)
  --geojson         Write GeoJSON instead of an HTML map
  --help            Show this help message"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let arg = |name: &str| {
        let prefix = format!("--{}=", name);
        args.iter()
            .find_map(|a| a.strip_prefix(prefix.as_str()).map(str::to_string))
    };

    let points_path = arg("points").unwrap_or_else(|| DEFAULT_POINTS_PATH.to_string());
    let output_path = arg("output").unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
    let geojson = args.iter().any(|a| a == "--geojson");
    let seed = arg("seed").map(|s| s.parse::<u64>()).transpose()?;

    // A flag that was given is used as is; only the missing value is prompted for.
    let mode = arg("mode").map(|m| m.parse::<TravelMode>()).transpose()?;
    let hours = arg("hours").map(|h| h.parse::<f64>()).transpose()?;
    let budget = resolve_budget(mode, hours, io::stdin().lock(), io::stdout())?;

    let points = load_points_or_default(&points_path);

    let orderer = SimulatedAnnealing::new(AnnealingConfig {
        seed,
        ..AnnealingConfig::default()
    });
    let planner = Planner::new(HaversineMatrix, orderer);
    let outcome = planner.plan(&points, budget)?;

    println!();
    print!("{}", format_report(&points, &outcome.route));

    if outcome.is_infeasible() {
        return Ok(());
    }

    let artifact = if geojson {
        GeoJsonRenderer.render(&points, &outcome.route)?
    } else {
        LeafletHtmlRenderer::default().render(&points, &outcome.route)?
    };
    write_artifact(&output_path, &artifact)?;
    println!("\nMap saved to '{}'", output_path);

    Ok(())
}
