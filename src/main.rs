use anyhow::Result;
use clap::Parser;
use echointel::commands::{self, ReportFormat, config::Settings, customers};
use echointel::config::{
    ENV_ADMIN_SECRET, ENV_API_URL, ENV_CUSTOMER_API_ID, ENV_RETRY_ATTEMPTS, ENV_RETRY_DELAY_MS,
    ENV_SECRET, ENV_TIMEOUT_MS,
};
use std::path::PathBuf;

/// echointel - EchoIntel analytics API client
///
/// Calls the EchoIntel API and prints the JSON response.
///
/// Credentials are read from ECHOINTEL_CUSTOMER_API_ID, ECHOINTEL_SECRET and
/// ECHOINTEL_ADMIN_SECRET unless given on the command line.
///
/// Examples:
///   echointel health
///   echointel call nps --data responses.json
///   echointel report i18n --lang es --data - < transactions.json
///   echointel customers list --include-disabled
#[derive(Parser, Debug)]
#[command(author, version = env!("ECHOINTEL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (apiUrl, customerApiId, secret, ...)
    #[arg(long = "config", short = 'c', value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// API base URL (defaults to https://ai.echosistema.live)
    #[arg(long = "api-url", env = ENV_API_URL, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Customer API id
    #[arg(long = "customer-api-id", env = ENV_CUSTOMER_API_ID, value_name = "ID", global = true)]
    pub customer_api_id: Option<String>,

    /// Customer secret
    #[arg(long = "secret", env = ENV_SECRET, hide_env_values = true, global = true)]
    pub secret: Option<String>,

    /// Admin secret, required by the customers commands
    #[arg(long = "admin-secret", env = ENV_ADMIN_SECRET, hide_env_values = true, global = true)]
    pub admin_secret: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long = "timeout", env = ENV_TIMEOUT_MS, value_name = "MS", global = true)]
    pub timeout: Option<u64>,

    /// Attempts per request
    #[arg(long = "retry-attempts", env = ENV_RETRY_ATTEMPTS, value_name = "N", global = true)]
    pub retry_attempts: Option<u32>,

    /// Delay between attempts in milliseconds
    #[arg(long = "retry-delay", env = ENV_RETRY_DELAY_MS, value_name = "MS", global = true)]
    pub retry_delay: Option<u64>,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            config_file: self.config_file.clone(),
            api_url: self.api_url.clone(),
            customer_api_id: self.customer_api_id.clone(),
            secret: self.secret.clone(),
            admin_secret: self.admin_secret.clone(),
            timeout_ms: self.timeout,
            retry_attempts: self.retry_attempts,
            retry_delay_ms: self.retry_delay,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check API health
    Health,

    /// Call any operation by name
    Call(CallArgs),

    /// Generate a segmentation report
    Report(ReportArgs),

    /// Manage API customers (admin)
    #[command(subcommand)]
    Customers(CustomersCommand),

    /// List available operations
    Operations,
}

#[derive(clap::Args, Debug)]
pub struct CallArgs {
    /// Operation name, e.g. "forecast-revenue" (see `echointel operations`)
    #[arg(value_name = "OPERATION")]
    pub operation: String,

    /// JSON payload file, or "-" for stdin
    #[arg(long, short = 'd', value_name = "FILE")]
    pub data: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    #[arg(value_enum)]
    pub format: ReportFormat,

    /// Report language
    #[arg(long)]
    pub lang: Option<String>,

    /// JSON payload file, or "-" for stdin
    #[arg(long, short = 'd', value_name = "FILE")]
    pub data: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum CustomersCommand {
    /// List customers
    List {
        /// Include disabled customers
        #[arg(long)]
        include_disabled: bool,
    },
    /// Show one customer
    Get {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Create a customer from a JSON definition
    Create {
        #[arg(long, short = 'd', value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Update a customer from a JSON definition
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(long, short = 'd', value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Delete a customer
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let client = || cli.settings().client();

    let output = match &cli.command {
        Commands::Operations => commands::operations(),
        Commands::Health => commands::health(&client()?).await?,
        Commands::Call(args) => {
            commands::call(&client()?, &args.operation, args.data.as_deref()).await?
        }
        Commands::Report(args) => {
            commands::report(
                &client()?,
                args.format,
                args.lang.as_deref(),
                args.data.as_deref(),
            )
            .await?
        }
        Commands::Customers(command) => match command {
            CustomersCommand::List { include_disabled } => {
                customers::list(&client()?, *include_disabled).await?
            }
            CustomersCommand::Get { id } => customers::get(&client()?, id).await?,
            CustomersCommand::Create { data } => {
                customers::create(&client()?, data.as_deref()).await?
            }
            CustomersCommand::Update { id, data } => {
                customers::update(&client()?, id, data.as_deref()).await?
            }
            CustomersCommand::Delete { id } => customers::delete(&client()?, id).await?,
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
