//! woodgrainer CLI - woodgrain temperature post-processing for G-code
//!
//! Reads a sliced G-code file, injects randomized extruder temperature
//! changes at layer boundaries, and writes the rewritten program back out.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use woodgrainer::{has_been_woodgrained, is_layer_change_line, process_lines, GrainSettings};

#[derive(Parser)]
#[command(name = "woodgrainer")]
#[command(about = "Woodgrain temperature post-processor for 3D printer G-code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject woodgrain temperature changes into a G-code file
    Process {
        /// Input G-code file
        input: PathBuf,
        /// Output file (default: rewrite the input in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Lowest temperature to set (°C)
        #[arg(long, default_value_t = 200)]
        min_temp: u32,
        /// Highest temperature to set (°C)
        #[arg(long, default_value_t = 250)]
        max_temp: u32,
        /// Pull toward the range extremes, 0-100
        #[arg(long, default_value_t = 50)]
        intensity: u32,
        /// Layer transitions between temperature changes
        #[arg(long, default_value_t = 1)]
        interval: u32,
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display information about a G-code file without modifying it
    Check {
        /// Path to the G-code file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            min_temp,
            max_temp,
            intensity,
            interval,
            json,
        } => {
            let settings = GrainSettings {
                min_temp,
                max_temp,
                intensity,
                layer_interval: interval,
            };
            process_file(&input, output.as_deref(), &settings, json)?;
        }
        Commands::Check { file } => {
            show_info(&file)?;
        }
    }

    Ok(())
}

fn process_file(
    input: &Path,
    output: Option<&Path>,
    settings: &GrainSettings,
    json: bool,
) -> Result<()> {
    let lines = read_lines(input)?;
    let result = process_lines(&lines, settings)?;

    let target = output.unwrap_or(input);
    write_lines(target, &result.lines)?;

    if json {
        println!("{}", serde_json::to_string(&result.stats)?);
    } else {
        println!(
            "Wrote {} ({} layers, {} temperature changes)",
            target.display(),
            result.stats.layer_count,
            result.stats.temp_change_count
        );
    }

    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let lines = read_lines(file)?;
    let layer_count = lines.iter().filter(|l| is_layer_change_line(l)).count();
    let grained = has_been_woodgrained(&lines);

    println!("File: {}", file.display());
    println!("Lines: {}", lines.len());
    println!("Layers: {}", layer_count);
    println!("Woodgrained: {}", if grained { "yes" } else { "no" });

    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(|l| l.to_string()).collect())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part.gcode");

        let lines: Vec<String> = [";LAYER:1", "G1 X100", ";LAYER:2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        write_lines(&path, &lines).unwrap();
        assert_eq!(read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn test_process_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part.gcode");

        let lines: Vec<String> = [";LAYER:1", "G1 X100", ";LAYER:2", "G1 X110"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        write_lines(&path, &lines).unwrap();

        process_file(&path, None, &GrainSettings::default(), false).unwrap();

        let rewritten = read_lines(&path).unwrap();
        assert!(rewritten.len() > lines.len());
        assert!(has_been_woodgrained(&rewritten));

        // A second pass must refuse the marked file.
        let err = process_file(&path, None, &GrainSettings::default(), false);
        assert!(err.is_err());
    }
}
