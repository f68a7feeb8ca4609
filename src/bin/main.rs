/// CLI tool for the unform survey language
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use unform::{diagnostic, parse, render, total_permutations, RenderOptions};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  unform <file> [seed]       Validate and render a survey file");
    eprintln!("  unform -                   Read survey text from stdin");
    eprintln!("  unform --help              Show this help message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  <file>      Path to a tab-delimited survey file");
    eprintln!("  [seed]      Optional seed for deterministic randomized blocks");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  unform survey.txt          # Random choice of randomized texts");
    eprintln!("  unform survey.txt 42       # Deterministic output with seed 42");
    eprintln!("  cat survey.txt | unform -  # Read from stdin");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_usage();
        process::exit(0);
    }

    // Read survey text
    let survey_text = if args[1] == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).unwrap_or_else(|e| {
            eprintln!("Error reading from stdin: {}", e);
            process::exit(1);
        });
        buffer
    } else {
        fs::read_to_string(&args[1]).unwrap_or_else(|e| {
            eprintln!("Error reading file '{}': {}", args[1], e);
            process::exit(1);
        })
    };

    let source_name = if args[1] == "-" { "<stdin>" } else { &args[1] };

    let parsed = parse(&survey_text);
    if !parsed.issues.is_empty() {
        eprint!(
            "{}",
            diagnostic::report_issues(source_name, &survey_text, &parsed.issues)
        );
        process::exit(1);
    }

    let mut rng = if args.len() > 2 {
        let seed = args[2].parse::<u64>().unwrap_or_else(|e| {
            eprintln!("Error parsing seed '{}': {}", args[2], e);
            process::exit(1);
        });
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let permutations = total_permutations(&parsed.survey);
    eprintln!(
        "{} blocks; up to {} distinct letters.",
        parsed.survey.len(),
        permutations
    );

    let options = RenderOptions::new(source_name);
    println!("{}", render(&parsed.survey, &options, &mut rng));
}
