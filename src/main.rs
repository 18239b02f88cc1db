use log::info;
use ppm_edge::config::load_config;
use ppm_edge::image::io::write_json_file;
use ppm_edge::pipeline::{EdgePipeline, PipelineOptions};
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

/// One filter run resolved from the command line.
#[derive(Debug)]
struct Job {
    input: PathBuf,
    output: PathBuf,
    report_json: Option<PathBuf>,
    options: PipelineOptions,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let job = parse_args(&args)?;

    let pipeline = EdgePipeline::new(job.options);
    let report = pipeline.run_file(&job.input, &job.output)?;
    info!(
        "Filtered {} ({}x{}) -> {} in {:.3} ms",
        job.input.display(),
        report.width,
        report.height,
        job.output.display(),
        report.timing.total_ms
    );

    if let Some(path) = &job.report_json {
        write_json_file(path, &report)?;
        info!("Saved report to {}", path.display());
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Job, Box<dyn Error>> {
    match args {
        [flag, config] if flag == "--config" || flag == "-c" => {
            let config = load_config(Path::new(config))?;
            Ok(Job {
                input: config.input,
                output: config.output.image,
                report_json: config.output.report_json,
                options: config.pipeline,
            })
        }
        [input, output] if !input.starts_with('-') && !output.starts_with('-') => Ok(Job {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            report_json: None,
            options: PipelineOptions::default(),
        }),
        _ => Err(usage().into()),
    }
}

fn usage() -> String {
    "Usage: ppm_edge <input.ppm> <output.ppm>\n       ppm_edge --config <config.json>".to_string()
}
