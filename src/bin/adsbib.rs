//! CLI binary for exporting ADS libraries.
//!
//! Usage: adsbib --macros AAS_macros.txt --out-dir bib/

#[cfg(feature = "cli")]
mod cli {
    use adsbib::error::{Error, Result};
    use adsbib::{AdsClient, ExportFormat, ExportSummary, Exporter, MacroTable};
    use clap::{Args, Parser, Subcommand};
    use log::{info, warn};
    use std::path::PathBuf;

    const DEFAULT_TOKEN_FILE: &str = "ADS_token.txt";
    const DEFAULT_MACRO_FILE: &str = "AAS_macros.txt";

    #[derive(Parser)]
    #[command(
        name = "adsbib",
        about = "Export NASA ADS libraries to BibTeX with journal macros expanded",
        version,
        args_conflicts_with_subcommands = true
    )]
    struct Cli {
        /// File whose first line is the ADS API token
        /// (default: ADS_API_TOKEN / SCIX_API_TOKEN, then ADS_token.txt)
        #[arg(long, global = true)]
        token_file: Option<PathBuf>,

        /// ADS API base URL
        #[arg(long, global = true)]
        base_url: Option<String>,

        /// Output format for listings and summaries
        #[arg(long, global = true, default_value = "table")]
        output: OutputFormat,

        /// More log output (-v debug, -vv trace); RUST_LOG overrides
        #[arg(short, long, global = true, action = clap::ArgAction::Count)]
        verbose: u8,

        #[command(flatten)]
        export: ExportArgs,

        #[command(subcommand)]
        command: Option<Commands>,
    }

    #[derive(Clone, Copy, clap::ValueEnum)]
    enum OutputFormat {
        Table,
        Json,
    }

    #[derive(Args)]
    struct ExportArgs {
        /// Two-column journal macro reference file
        #[arg(short, long, default_value = DEFAULT_MACRO_FILE)]
        macros: PathBuf,
        /// Directory to write citation files into
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,
        /// Page size when listing library documents
        #[arg(short, long, default_value = "100")]
        rows: u32,
        /// Export format (bibtex, bibtexabs, aastex, mnras, icarus, soph, ris)
        #[arg(short, long, default_value = "bibtex")]
        format: String,
        /// Only export the named library (repeatable)
        #[arg(short, long = "library")]
        libraries: Vec<String>,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Export libraries to citation files (the default)
        Export(ExportArgs),
        /// List your ADS libraries
        Libraries,
        /// Expand journal macros in a local BibTeX file
        Expand {
            /// BibTeX file to expand
            input: PathBuf,
            /// Two-column journal macro reference file
            #[arg(short, long, default_value = DEFAULT_MACRO_FILE)]
            macros: PathBuf,
            /// Write here instead of stdout
            #[arg(short, long)]
            output_file: Option<PathBuf>,
        },
    }

    fn init_logging(verbose: u8) {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .format_timestamp(None)
            .init();
    }

    fn make_client(token_file: Option<PathBuf>, base_url: Option<&str>) -> Result<AdsClient> {
        let client = match token_file {
            Some(path) => AdsClient::from_token_file(path)?,
            None => match AdsClient::from_env() {
                Ok(client) => client,
                Err(Error::AuthRequired) => AdsClient::from_token_file(DEFAULT_TOKEN_FILE)?,
                Err(e) => return Err(e),
            },
        };
        match base_url {
            Some(url) => client.with_base_url(url),
            None => Ok(client),
        }
    }

    fn print_summaries_table(summaries: &[ExportSummary]) {
        use comfy_table::{ContentArrangement, Table};

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Library", "File", "Documents", "Expanded", "Unresolved"]);
        for s in summaries {
            table.add_row(vec![
                s.library.clone(),
                s.path.display().to_string(),
                s.documents.to_string(),
                s.expanded.to_string(),
                s.unresolved.join(", "),
            ]);
        }
        println!("{table}");
    }

    async fn export(
        args: ExportArgs,
        token_file: Option<PathBuf>,
        base_url: Option<&str>,
        output: OutputFormat,
    ) -> Result<()> {
        let format = ExportFormat::from_str_loose(&args.format)
            .ok_or_else(|| Error::Config(format!("Unknown export format: {}", args.format)))?;
        let macros = MacroTable::load(&args.macros)?;
        if macros.is_empty() {
            warn!("{} has no journal macros", args.macros.display());
        }
        let client = make_client(token_file, base_url)?;

        let summaries = Exporter::new(client, macros)
            .with_output_dir(args.out_dir)
            .with_rows(args.rows)
            .with_format(format)
            .with_libraries(args.libraries)
            .run()
            .await?;

        match output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
            OutputFormat::Table => print_summaries_table(&summaries),
        }
        Ok(())
    }

    pub async fn run() -> Result<()> {
        let cli = Cli::parse();
        init_logging(cli.verbose);
        let base_url = cli.base_url.as_deref();

        match cli.command {
            None => export(cli.export, cli.token_file, base_url, cli.output).await?,
            Some(Commands::Export(args)) => {
                export(args, cli.token_file, base_url, cli.output).await?
            }

            Some(Commands::Libraries) => {
                let client = make_client(cli.token_file, base_url)?;
                let libs = client.list_libraries().await?;
                match cli.output {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&libs)?);
                    }
                    OutputFormat::Table => {
                        use comfy_table::{ContentArrangement, Table};
                        let mut table = Table::new();
                        table.set_content_arrangement(ContentArrangement::Dynamic);
                        table.set_header(vec!["ID", "Name", "Documents", "Public"]);
                        for lib in &libs {
                            table.add_row(vec![
                                &lib.id,
                                &lib.name,
                                &lib.num_documents.to_string(),
                                &lib.public.to_string(),
                            ]);
                        }
                        println!("{table}");
                    }
                }
            }

            Some(Commands::Expand {
                input,
                macros,
                output_file,
            }) => {
                let macros = MacroTable::load(&macros)?;
                let text = std::fs::read_to_string(&input).map_err(|e| Error::io(&input, e))?;
                let resolution = adsbib::resolve_with_report(&text, &macros);
                for key in &resolution.unresolved {
                    warn!("No journal name for macro \\{}", key);
                }
                match output_file {
                    Some(path) => {
                        adsbib::exporter::write_output(&path, &resolution.text)?;
                        info!(
                            "Expanded {} journal fields into {}",
                            resolution.expanded,
                            path.display()
                        );
                    }
                    None => print!("{}", resolution.text),
                }
            }
        }

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary requires the 'cli' feature. Build with: cargo build --features cli");
    std::process::exit(1);
}
