use std::time::Instant;

use canny_edge::{visualize_edges, CannyConfig, EdgeDetector};
use env_logger::Builder;
use image::open;
use log::{error, info};

fn main() {
    Builder::from_default_env().format_timestamp_nanos().init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "test_image/edge.png".to_string());
    let img = open(&input).unwrap().to_luma8();
    info!("loaded {input}: {}x{}", img.width(), img.height());

    let detector = EdgeDetector::new(CannyConfig::default());

    let instance = Instant::now();
    let stages = match detector.detect_stages(&img) {
        Ok(stages) => stages,
        Err(err) => {
            error!("edge detection failed: {err}");
            std::process::exit(1);
        }
    };
    let elapsed = instance.elapsed();
    info!("detection took {elapsed:?}");
    info!(
        "mean {} std_dev {} -> thresholds {:?}",
        stages.field.stats().mean,
        stages.field.stats().std_dev,
        stages.thresholds
    );

    let stem = input.rsplit_once('.').map_or(input.as_str(), |(stem, _)| stem);
    stages.edges.save(format!("{stem}_canny.png")).unwrap();

    let overlay = visualize_edges(&img, &stages.edges, detector.border());
    overlay.save(format!("{stem}_overlay.png")).unwrap();

    let edge_count = stages.edges.pixels().filter(|p| p[0] == 255).count();
    info!("found {edge_count} edge pixels");
}
