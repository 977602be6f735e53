use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use homework_diary_cli::application::{
    build_sheet, export_schemas, format_entries, render_entries, render_sheet,
};
use homework_diary_cli::infrastructure::load_entries;
use homework_diary_cli::{LogConfig, OutputFormat, RenderConfig, Result};
use homework_diary_core::{format_english, format_homework_activity, ActivityInput};
use tracing::info;

#[derive(Parser)]
#[command(name = "homework-diary")]
#[command(
    version,
    about = "Homework Diary - format daily homework into diary sentences"
)]
struct Cli {
    /// Debug-level logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// No log output
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Directory with NotoSansTelugu/NotoSansDevanagari fonts; subjects
    /// whose script has no font fall back to English
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// English sentences for every subject
    #[arg(long)]
    english_only: bool,
}

impl RenderArgs {
    fn config(&self) -> RenderConfig {
        let config = RenderConfig::new().english_only(self.english_only);
        match &self.fonts_dir {
            Some(dir) => config.with_fonts_dir(dir),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Format every entry of a JSON file
    Format {
        /// JSON array of homework entries
        #[arg(short = 'i', long)]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,

        /// Abort on the first invalid entry
        #[arg(long)]
        strict: bool,

        #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the diary sheet of one class for one day
    Sheet {
        /// JSON array of homework entries
        #[arg(short = 'i', long)]
        input: PathBuf,

        #[arg(short = 'c', long)]
        class: String,

        /// Diary date (YYYY-MM-DD)
        #[arg(short = 'd', long)]
        date: NaiveDate,

        /// Subject order, comma separated (default: order of first appearance)
        #[arg(short = 's', long, value_delimiter = ',')]
        subjects: Vec<String>,

        #[command(flatten)]
        render: RenderArgs,

        #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Format a single homework activity
    Sentence {
        #[arg(short = 'a', long)]
        activity: String,

        #[arg(short = 's', long)]
        subject: String,

        #[arg(long)]
        source: Option<String>,

        #[arg(long)]
        chapter: Option<String>,

        #[arg(long)]
        page: Option<String>,

        #[arg(long, default_value = "")]
        description: String,

        /// English vocabulary regardless of subject
        #[arg(long)]
        english: bool,
    },

    /// Write JSON schemas of the data shapes
    Schema {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let mut config = if self.verbose {
            LogConfig::dev()
        } else {
            LogConfig::default()
        };
        if self.json_logs {
            config = config.with_json();
        }
        if self.quiet {
            config = config.without_logs();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log_config().init()?;

    match cli.command {
        Commands::Format {
            input,
            render,
            strict,
            output,
        } => {
            let entries = load_entries(&input)?;
            let formatted = format_entries(&entries, render.config().script_support(), strict)?;
            println!("{}", render_entries(&formatted, output)?);
        }
        Commands::Sheet {
            input,
            class,
            date,
            subjects,
            render,
            output,
        } => {
            let entries = load_entries(&input)?;
            let subjects = (!subjects.is_empty()).then_some(subjects.as_slice());
            let sheet = build_sheet(
                &entries,
                &class,
                date,
                subjects,
                render.config().script_support(),
            )?;
            println!("{}", render_sheet(&sheet, output)?);
        }
        Commands::Sentence {
            activity,
            subject,
            source,
            chapter,
            page,
            description,
            english,
        } => {
            let input = ActivityInput {
                activity_type: activity,
                subject_name: subject,
                source,
                chapter,
                page,
                description,
            };
            let text = if english {
                format_english(&input)
            } else {
                format_homework_activity(&input)
            };
            println!("{}", text);
        }
        Commands::Schema { out_dir } => {
            let written = export_schemas(&out_dir)?;
            info!("✓ Wrote {} schema files to {}", written.len(), out_dir.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sheet() {
        let cli = Cli::try_parse_from([
            "homework-diary",
            "sheet",
            "-i",
            "homework.json",
            "--class",
            "10th",
            "--date",
            "2024-06-12",
            "--subjects",
            "English,Maths,Telugu",
            "--fonts-dir",
            "fonts",
        ])
        .unwrap();

        match cli.command {
            Commands::Sheet {
                date,
                subjects,
                render,
                output,
                ..
            } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
                assert_eq!(subjects, vec!["English", "Maths", "Telugu"]);
                assert_eq!(render.fonts_dir, Some(PathBuf::from("fonts")));
                assert_eq!(output, OutputFormat::Text);
            }
            _ => panic!("expected sheet command"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "homework-diary",
            "sheet",
            "-i",
            "homework.json",
            "--class",
            "10th",
            "--date",
            "12/06/2024",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_json_log_config() {
        let cli = Cli::try_parse_from([
            "homework-diary",
            "--quiet",
            "--json-logs",
            "schema",
        ])
        .unwrap();

        let config = cli.log_config();
        assert!(!config.show_logs);
        assert!(config.json_format);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["homework-diary", "-v", "-q", "schema"]);
        assert!(result.is_err());
    }
}
