use anyhow::Context;
use jokermig_core::{migrate_text, ConversionTable, EntityOutcome, MigrationReport};
use jokermig_data::{builtin_table, load_table};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: jokermig [--table <path>] [--dry-run] <file>";

#[derive(Debug, Clone)]
struct CliOptions {
    /// External table path; `None` means the built-in table.
    table: Option<PathBuf>,
    dry_run: bool,
    target: PathBuf,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut table = std::env::var_os("JOKERMIG_TABLE").map(PathBuf::from);
    let mut dry_run = false;
    let mut target: Option<PathBuf> = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--table" | "-t" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| format!("--table requires a path\n{}", USAGE))?;
                table = Some(PathBuf::from(value));
                idx += 1;
            }
            "--dry-run" | "-n" => dry_run = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown flag {}\n{}", other, USAGE));
            }
            other => {
                if target.is_some() {
                    return Err(format!("unexpected extra argument {}\n{}", other, USAGE));
                }
                target = Some(PathBuf::from(other));
            }
        }
        idx += 1;
    }
    let target = target.ok_or_else(|| USAGE.to_string())?;
    Ok(CliOptions {
        table,
        dry_run,
        target,
    })
}

fn load_conversion_table(options: &CliOptions) -> anyhow::Result<ConversionTable> {
    match &options.table {
        Some(path) => load_table(path),
        None => Ok(builtin_table()),
    }
}

fn print_report(report: &MigrationReport) {
    for (id, outcome) in &report.outcomes {
        match outcome {
            EntityOutcome::Converted => println!("{}: converted", id),
            EntityOutcome::Skipped => println!("{}: skipped (no old-schema block)", id),
            EntityOutcome::Invalid(reason) => eprintln!("{}: invalid ({})", id, reason),
        }
    }
    println!(
        "{} converted, {} skipped, {} invalid",
        report.converted(),
        report.skipped(),
        report.invalid()
    );
}

/// Write the rewritten text to a sibling temp file, then rename it over the
/// target. The original content survives any failure mid-write.
fn persist(target: &Path, text: &str) -> anyhow::Result<()> {
    let file_name = target
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("target {} has no file name", target.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp = target.with_file_name(tmp_name);
    fs::write(&tmp, text).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, target).with_context(|| format!("replace {}", target.display()))?;
    Ok(())
}

fn run(options: &CliOptions) -> anyhow::Result<MigrationReport> {
    let table = load_conversion_table(options)?;
    let input = fs::read_to_string(&options.target)
        .with_context(|| format!("read {}", options.target.display()))?;
    let (rewritten, report) = migrate_text(&table, &input);
    print_report(&report);
    if options.dry_run {
        println!("dry run, {} not modified", options.target.display());
    } else if report.converted() == 0 {
        println!("no blocks converted, {} left unchanged", options.target.display());
    } else {
        persist(&options.target, &rewritten)?;
        println!("joker conversion complete: {}", options.target.display());
    }
    Ok(report)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return;
    }
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };
    match run(&options) {
        Ok(report) if report.invalid() > 0 => std::process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
