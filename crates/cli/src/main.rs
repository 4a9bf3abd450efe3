// MailScrub CLI - scrub candidate email lists against suppression lists

mod exit_codes;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use exit_codes::{exit_code_for, EXIT_SUCCESS};
use mailscrub_core::{engine, Fingerprint, InputFormat, MatchOptions, ScrubError};
use mailscrub_core::model::DEFAULT_SAMPLE_SIZE;

#[derive(Parser)]
#[command(name = "mscrub")]
#[command(about = "Partition an email list into clean / suppressed subsets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a candidate list against a suppression list
    #[command(after_help = "\
Examples:
  mscrub run --emails leads.txt --suppression optouts.csv
  mscrub run --emails leads.csv --suppression hashes.txt -o results/
  mscrub run --emails leads.dat --emails-format table --suppression s.txt --json

The suppression list may mix raw emails with pre-hashed 32-hex-char
fingerprints; fingerprints are used verbatim, emails are hashed.")]
    Run {
        /// Candidate email list (.txt = one per line, .csv = 'email' column)
        #[arg(long)]
        emails: Option<PathBuf>,

        /// Suppression list (same formats; entries may be pre-hashed)
        #[arg(long)]
        suppression: Option<PathBuf>,

        /// Candidate list format (auto = by extension)
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        emails_format: FormatArg,

        /// Suppression list format (auto = by extension)
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        suppression_format: FormatArg,

        /// Write clean_emails.txt / suppressed_emails.txt into this directory
        #[arg(long, short = 'o')]
        out_dir: Option<PathBuf>,

        /// Number of clean emails to preview
        #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample: usize,

        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the fingerprint of one or more email addresses
    #[command(after_help = "\
Examples:
  mscrub fingerprint alice@example.com
  mscrub fingerprint ' Alice@Example.COM '   # same fingerprint as above")]
    Fingerprint {
        /// Email addresses to hash
        #[arg(required = true)]
        emails: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Pick by file extension (.csv = table, otherwise lines)
    Auto,
    /// One raw email per line, blank lines skipped
    Lines,
    /// CSV with an 'email' column
    Table,
}

impl FormatArg {
    fn resolve(self, path: &Path) -> InputFormat {
        match self {
            Self::Auto => mailscrub_io::detect_format(path),
            Self::Lines => InputFormat::Lines,
            Self::Table => InputFormat::Table,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            emails,
            suppression,
            emails_format,
            suppression_format,
            out_dir,
            sample,
            json,
        } => cmd_run(
            emails.as_deref(),
            suppression.as_deref(),
            emails_format,
            suppression_format,
            out_dir.as_deref(),
            sample,
            json,
        ),
        Commands::Fingerprint { emails } => cmd_fingerprint(&emails),
    };

    match outcome {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn cmd_run(
    emails: Option<&Path>,
    suppression: Option<&Path>,
    emails_format: FormatArg,
    suppression_format: FormatArg,
    out_dir: Option<&Path>,
    sample: usize,
    json: bool,
) -> Result<(), ScrubError> {
    // Both lists are required; surfaced as one message like any other error
    let emails = emails.ok_or_else(|| ScrubError::MissingInput("emails".into()))?;
    let suppression =
        suppression.ok_or_else(|| ScrubError::MissingInput("suppression".into()))?;

    let candidates =
        mailscrub_io::load_list("emails", emails, Some(emails_format.resolve(emails)))?;
    let entries = mailscrub_io::load_list(
        "suppression",
        suppression,
        Some(suppression_format.resolve(suppression)),
    )?;

    let options = MatchOptions {
        sample_size: sample,
    };
    let result = engine::run(&candidates, &entries, &options);

    if json {
        println!("{}", mailscrub_io::summary_json(&result)?);
    } else {
        println!("Clean emails:      {}", result.summary.clean_count);
        println!("Suppressed emails: {}", result.summary.suppressed_count);
        if !result.summary.sample.is_empty() {
            println!();
            println!("Sample clean emails:");
            for email in &result.summary.sample {
                println!("  {email}");
            }
        }
    }

    if let Some(dir) = out_dir {
        mailscrub_io::write_result(dir, &result)?;
        if !json {
            println!();
            println!("Wrote {}", dir.join("clean_emails.txt").display());
            println!("Wrote {}", dir.join("suppressed_emails.txt").display());
        }
    }

    Ok(())
}

fn cmd_fingerprint(emails: &[String]) -> Result<(), ScrubError> {
    for email in emails {
        println!("{}  {}", Fingerprint::of(email), email);
    }
    Ok(())
}
