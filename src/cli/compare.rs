use std::path::Path;
use crate::cli::commands::CompareArgs;
use crate::compare::BatchComparer;
use crate::config;
use crate::errors::PlagError;
use crate::reporting;

pub async fn handle_compare(args: CompareArgs, quiet: bool) -> Result<(), PlagError> {
    let mut config = config::load_config(args.config.as_deref().map(Path::new)).await?;
    if args.workers.is_some() {
        config.server.workers = args.workers;
    }

    let comparer = BatchComparer::from_config(&config);
    let results = comparer
        .compare(Path::new(&args.file), Path::new(&args.folder))
        .await?;

    if args.json {
        println!("{}", reporting::format_results_json(&results)?);
        return Ok(());
    }

    print!("{}", reporting::format_results_table(&results, args.threshold));
    if !quiet {
        println!();
        println!("{}", reporting::format_summary(&results, args.threshold));
    }
    Ok(())
}
