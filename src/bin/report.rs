use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

use airframe::{run_study, StudyConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let config_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: airframe_report <study.yaml> [output_dir]");
            std::process::exit(2);
        }
    };
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("report"));

    let config = StudyConfig::from_file(&config_path)?;
    let report = run_study(&config)?;

    match report.cg {
        Some(cg) => println!("CG: ({:.4}, {:.4})", cg.x, cg.y),
        None => println!("CG: unavailable"),
    }
    if let Some(lemac) = report.cg_lemac {
        println!("CG from LEMAC: ({:.4}, {:.4})", lemac.x, lemac.y);
    }
    if let Some(estimate) = &report.class_ii {
        println!("Class II weight estimate [lb]:");
        for (group, weight) in estimate.breakdown() {
            println!("  {:<16} {:>10.1}", group, weight);
        }
        println!("  {:<16} {:>10.1}", "Total", estimate.total());
    }

    let written = report.write_outputs(&output_dir, config.render)?;
    for path in written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
