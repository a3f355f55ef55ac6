use clap::{Parser, ValueEnum};
use respell::{
    format_names, parse_sheet, spell_chord, spell_sheet, to_musicxml_sheet, SpellError,
    SpelledChord,
};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Spell chord tones relative to the bass and the key signature
#[derive(Parser, Debug)]
#[command(name = "respell", version, about, allow_negative_numbers = true)]
struct Args {
    /// Key signature: sharps positive, flats negative (e.g. -3 for E-flat major)
    #[arg(required_unless_present = "batch")]
    key_signature: Option<i32>,

    /// Note names from lowest to highest (e.g. Ab C# Eb F A#)
    #[arg(required_unless_present = "batch", num_args = 1..)]
    notes: Vec<String>,

    /// Read chords from a YAML chord sheet instead of the command line
    #[arg(short, long, conflicts_with_all = ["key_signature", "notes"])]
    batch: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Yaml,
    Musicxml,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let (title, chords) = match &args.batch {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };
            match parse_sheet(&content).and_then(|sheet| {
                let chords = spell_sheet(&sheet)?;
                Ok((sheet.title, chords))
            }) {
                Ok(result) => result,
                Err(e) => fail(e),
            }
        }
        None => {
            let key_signature = args.key_signature.unwrap_or(0);
            if !(-7..=7).contains(&key_signature) {
                log::warn!("key signature {} is outside -7..=7", key_signature);
            }
            match spell_chord(&args.notes, key_signature) {
                Ok(chord) => (None, vec![chord]),
                Err(e) => fail(e),
            }
        }
    };

    match args.format {
        Format::Text => {
            for chord in &chords {
                println!("{}", format_names(&chord.names()));
            }
        }
        Format::Yaml => print_yaml(&chords, args.batch.is_some()),
        Format::Musicxml => print!("{}", to_musicxml_sheet(title.as_deref(), &chords)),
    }
}

fn print_yaml(chords: &[SpelledChord], as_list: bool) {
    let yaml = match chords {
        [chord] if !as_list => serde_yaml::to_string(chord),
        _ => serde_yaml::to_string(chords),
    };
    match yaml {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Error writing YAML: {}", e);
            process::exit(1);
        }
    }
}

fn fail(e: SpellError) -> ! {
    eprintln!("Error: {}", e);
    process::exit(1);
}
