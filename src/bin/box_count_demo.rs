use box_counting::config::sweep::{load_config, SweepToolConfig};
use box_counting::diagnostics::CacheReport;
use box_counting::raster::io::{load_mask_image, save_binary_grid, write_json_file};
use box_counting::raster::GridView;
use box_counting::source::{MaskImageSource, SourceSweep};
use box_counting::{run_sweep, BoxSchedule, Feature};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let grid = load_mask_image(&config.input, config.threshold)?;
    let schedule = config
        .schedule
        .clone()
        .unwrap_or_else(|| BoxSchedule::dyadic_for(grid.width(), grid.height()));
    let sizes = schedule.sizes()?;

    let mut root = Feature::new(grid);
    let mut report = run_sweep(&mut root, &sizes).map_err(|e| e.to_string())?;

    if !config.compare_source.is_empty() {
        report.source_points = run_source_sweep(&config)?;
    }

    if let Some(dir) = &config.output.debug_dir {
        for size in &sizes {
            let covering = root
                .find_covering(*size)
                .ok_or_else(|| format!("Covering {size} missing after sweep"))?;
            save_binary_grid(covering.grid(), &dir.join(format!("covering_{size}.png")))?;
        }
        write_json_file(&dir.join("cache.json"), &CacheReport::from_feature(&root))?;
    }

    let summary = DemoSummary {
        input: config.input.display().to_string(),
        threshold: config.threshold,
        report: &report,
    };
    write_json_file(&config.output.report_json, &summary)?;

    for level in &report.levels {
        println!(
            "box={}x{} count={} grid={}x{} ({:.3} ms)",
            level.box_width,
            level.box_height,
            level.count,
            level.grid_width,
            level.grid_height,
            level.elapsed_ms
        );
    }
    println!(
        "Saved {} covering points to {}",
        report.points.len(),
        config.output.report_json.display()
    );

    Ok(())
}

fn run_source_sweep(
    config: &SweepToolConfig,
) -> Result<Vec<box_counting::source::SourcePoint>, String> {
    let source = MaskImageSource::open(&config.input, config.threshold)?;
    let mut sweep = SourceSweep::new();
    sweep
        .run(&source, &config.compare_source)
        .map_err(|e| e.to_string())?;
    Ok(sweep.points())
}

fn usage() -> String {
    "Usage: box_count_demo <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoSummary<'a> {
    input: String,
    threshold: u8,
    report: &'a box_counting::diagnostics::SweepReport,
}
