use clap::{Args, Parser, Subcommand};
use cyrcipher::cli::{decrypt_text, encrypt_text, run_request, show_info, TransformOptions};
use cyrcipher::{CipherResponse, Method, Result};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CYRCIPHER_VERSION");
const BUILD: &str = env!("CYRCIPHER_BUILD");
const PROFILE: &str = env!("CYRCIPHER_PROFILE");
const GIT_HASH: &str = env!("CYRCIPHER_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cyrcipher")]
#[command(author, about = "Rail-fence and progressive Vigenère ciphers for Cyrillic text", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log cipher steps to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt the Cyrillic letters of a text
    #[command(alias = "e")]
    Encrypt(TransformArgs),

    /// Decrypt the Cyrillic letters of a text
    #[command(alias = "d")]
    Decrypt(TransformArgs),

    /// Answer a JSON request {text, key, method, operation}
    #[command(alias = "r")]
    Run {
        /// Request file, or - for stdin
        request: PathBuf,
    },

    /// Show the alphabet, methods and how a key would be read
    #[command(alias = "i")]
    Info {
        /// Key to describe
        #[arg(long)]
        key: Option<String>,
    },
}

#[derive(Args)]
struct TransformArgs {
    /// Text to process
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from a UTF-8 file
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Cipher method
    #[arg(long, short, default_value = "rail-fence", value_parser = parse_method)]
    method: Method,

    /// Key: digits give the rail count, Cyrillic letters the Vigenère key.
    /// Defaults to 3 for rail-fence and "ключ" for vigenere
    #[arg(long, short)]
    key: Option<String>,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,
}

impl TransformArgs {
    fn options(&self) -> TransformOptions {
        TransformOptions {
            method: self.method,
            key: self.key.clone(),
            text: self.text.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}

fn parse_method(s: &str) -> std::result::Result<Method, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn print_response(response: &CipherResponse, json: bool, to_file: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else if !to_file {
        println!("{}", response.result);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.version {
        println!("cyrcipher {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt(args) => encrypt_text(&args.options())
            .and_then(|response| print_response(&response, args.json, args.output.is_some())),

        Commands::Decrypt(args) => decrypt_text(&args.options())
            .and_then(|response| print_response(&response, args.json, args.output.is_some())),

        Commands::Run { request } => {
            run_request(&request).and_then(|response| print_response(&response, true, false))
        }

        Commands::Info { key } => {
            print!("{}", show_info(key.as_deref()));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
