use inventory_eoq::analysis::config::AnalysisConfig;
use inventory_eoq::analysis::engine::InventoryAnalysis;
use inventory_eoq::io::reporting;
use inventory_eoq::{
    logging, BackorderEoq, BasicEoq, DiscountEoq, InventoryModel, InventoryResult,
    OrderModelParameters, ProductionEoq,
};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("analysis failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> InventoryResult<()> {
    info!("=== EOQ model analysis ===");

    // 1. SETUP CONFIGURATION
    // Optional first argument: where the CSV files go.
    let mut config = AnalysisConfig {
        verbose: true,
        ..AnalysisConfig::default()
    };
    if let Some(dir) = env::args().nth(1) {
        config.output_dir = dir;
    }

    // 2. DEFINE MODELS
    let models: Vec<Box<dyn InventoryModel>> = vec![
        Box::new(BasicEoq::new(OrderModelParameters::new(10.0, 1200.0, 50.0, 0.2)?)),
        Box::new(ProductionEoq::new(
            OrderModelParameters::new(12.0, 500.0, 40.0, 0.25)?,
            1000.0,
        )?),
        Box::new(DiscountEoq::new(
            OrderModelParameters::new(15.0, 1000.0, 40.0, 0.25)?,
            [(500, 0.05), (1200, 0.10)],
        )?),
        Box::new(BackorderEoq::new(
            OrderModelParameters::new(9.0, 1500.0, 45.0, 0.22)?,
            3.0,
        )?),
    ];

    // 3. RUN
    let analysis = InventoryAnalysis::new(config, models)?;
    let reports = analysis.run()?;

    // 4. EXPORT RESULTS
    let out_dir = Path::new(&analysis.config().output_dir);
    std::fs::create_dir_all(out_dir)?;

    for report in &reports {
        let file = out_dir.join(format!("{}_curve.csv", report.summary.model));
        reporting::write_inventory_curve(&file, &report.curve)?;
    }
    let summaries: Vec<_> = reports.iter().map(|r| r.summary.clone()).collect();
    reporting::write_summary(out_dir.join("summary.csv"), &summaries)?;

    // 5. PRINT SUMMARY
    for summary in &summaries {
        info!(
            "{}: Q = {:.2}, ROP = {:.2}",
            summary.model, summary.order_quantity, summary.reorder_point
        );
    }

    info!("Analysis complete.");
    Ok(())
}
