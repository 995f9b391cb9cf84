/*!
 * Command-line interface for ctxgen
 */

use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use ctxgen::config::{Args, Config};
use ctxgen::generator::ContextGenerator;
use ctxgen::report::{ReportFormat, Reporter};
use ctxgen::utils::count_files;

fn main() -> ctxgen::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Shell completion generation short-circuits the scan
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    // Create progress bar over the decision pass
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)",
            )
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📊 Scanning");

    // Count files for progress tracking
    let total_files = count_files(&config.target_dir);
    progress.set_length(total_files);
    progress.set_message(format!("Found {} files to process", total_files));

    // Run the scan and write the report
    let generator = ContextGenerator::new(config, Arc::new(progress.clone()));
    let summary = generator.generate()?;

    // Clear the progress bar
    progress.finish_and_clear();

    // Print the completion report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&summary);

    Ok(())
}
