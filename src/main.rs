use clap::Parser;
use entra_ip_chunker::cli::{Args, Command};
use entra_ip_chunker::config::Settings;
use entra_ip_chunker::output::report;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = Args::parse();
    let settings = Settings::resolve(args.lists_dir, args.chunk_size)?;

    match args.command {
        Command::Import {
            provider,
            file,
            format,
            dry_run,
            no_chunk,
        } => {
            let list = entra_ip_chunker::import_provider(
                &settings, &provider, &file, format, dry_run, no_chunk,
            )?;
            println!("Imported {list}");
            if dry_run {
                println!("(dry run - no files were modified)");
            }
        }
        Command::Split { providers, dry_run } => {
            let written = entra_ip_chunker::split_providers(&settings, &providers, dry_run)?;
            println!("Wrote {written} chunk file(s)");
            if dry_run {
                println!("(dry run - no files were modified)");
            }
        }
        Command::Verify { providers } => {
            let reports = entra_ip_chunker::verify_providers(&settings, &providers)?;
            for rep in &reports {
                report::print_verify(rep);
            }
            let failed = reports.iter().filter(|r| !r.is_ok()).count();
            if failed > 0 {
                return Err(format!("Verification failed for {failed} provider(s)").into());
            }
        }
        Command::Count { providers } => {
            let rows = entra_ip_chunker::count_providers(&settings, &providers)?;
            report::print_counts(&rows);
        }
        Command::List => report::print_registry(),
    }

    Ok(())
}
