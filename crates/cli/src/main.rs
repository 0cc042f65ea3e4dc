use clap::{Parser, Subcommand};
use mms_core::{all_symptoms, predict_medicines, reference_table, SelectionSet};
use mms_files::{load_for_display, FileContent};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mms")]
#[command(about = "MMS medical management system CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable symptom labels
    Symptoms,
    /// Show the reference table
    Dataset,
    /// Predict medicines from symptom labels
    Predict {
        /// Symptom labels (exact match, e.g. "fever" "body aches")
        symptoms: Vec<String>,
    },
    /// Read a report file the way the viewer would display it
    ReadFile {
        /// Path to the file
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Symptoms) => {
            for symptom in all_symptoms(reference_table()) {
                println!("{}", symptom);
            }
        }
        Some(Commands::Dataset) => {
            for record in reference_table() {
                println!(
                    "{}: symptoms [{}] -> medicines [{}]",
                    record.condition,
                    record.symptoms.join(", "),
                    record.medicines.join(", ")
                );
            }
        }
        Some(Commands::Predict { symptoms }) => {
            let selection = SelectionSet::from_labels(symptoms);
            let medicines = predict_medicines(&selection, reference_table());
            if medicines.is_empty() {
                println!("No matching medicines found.");
            } else {
                for medicine in medicines {
                    println!("{}", medicine);
                }
            }
        }
        Some(Commands::ReadFile { path }) => match load_for_display(&path) {
            Ok(loaded) => {
                println!(
                    "{} ({} bytes)",
                    loaded.metadata.original_filename, loaded.metadata.size_bytes
                );
                match &loaded.content {
                    FileContent::Text(text) => println!("{}", text),
                    FileContent::DataUrl(url) => {
                        // The full base64 payload is for an embedded viewer, not a terminal
                        let preview: String = url.chars().take(64).collect();
                        println!("{}… ({} chars)", preview, url.len());
                    }
                }
            }
            Err(e) => eprintln!("Error reading file: {}", e),
        },
        None => {
            println!("Use 'mms --help' for commands");
        }
    }

    Ok(())
}
