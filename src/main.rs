use anyhow::{Context, Result};
use applegrid_cv::pipeline::{self, PipelineConfig, RecognitionOutcome};
use applegrid_cv::template::TemplateLibrary;
use clap::Parser;
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Recognize the digit board in a captured image
#[derive(Debug, Parser)]
#[command(name = "applegrid")]
struct Args {
    /// Board capture to recognize
    board: PathBuf,

    /// Directory holding the digit templates `1.png`..`9.png`
    #[arg(long, default_value = "img")]
    templates: PathBuf,

    /// Write the reconstructed grid to this path as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Single-line operator confirmation after a failed balance check.
/// Blocks until a line arrives; only `n` aborts.
fn prompt_operator() -> String {
    println!("Balance check failed: the board is likely unclearable. Continue? (Y/n)");
    print!("> ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    let _ = io::stdin().lock().read_line(&mut answer);
    answer
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let gray = image::open(&args.board)
        .with_context(|| format!("failed to load board image {}", args.board.display()))?
        .to_luma8();
    let binary = threshold(&gray, otsu_level(&gray), ThresholdType::Binary);

    let library = TemplateLibrary::load_from_dir(&args.templates);
    let config = PipelineConfig::default();

    match pipeline::recognize_board(&binary, &library, &config, prompt_operator)? {
        RecognitionOutcome::Aborted => {
            println!("Recognition aborted by operator.");
        }
        RecognitionOutcome::Board(grid) => {
            for row in grid.iter_rows() {
                let line: String = row
                    .iter()
                    .map(|cell| match cell {
                        Some(obs) => char::from(b'0' + obs.digit.value()),
                        None => '.',
                    })
                    .collect();
                println!("{line}");
            }
            println!(
                "{} of {} cells recognized",
                grid.occupied(),
                grid.rows() * grid.cols()
            );

            if let Some(path) = args.json {
                pipeline::export_json(&grid, &path)?;
                println!("Grid written to {}", path.display());
            }
        }
    }

    Ok(())
}
