/// Wallet analysis CLI tool
///
/// Runs one analysis against the live upstream API and prints the card
/// fields to the terminal, the quickest way to eyeball what the front-end
/// card would show for a wallet.
///
/// Usage: tool_analyze_wallet <address> [--config <path>] [--debug-api]
use std::sync::Arc;

use colored::Colorize;

use solpack::{
    analysis::Analyzer,
    apis::helius::HeliusClient,
    arguments::{get_cmd_args, get_config_path, patterns},
    config::Config,
    constants::{MAX_ADDRESS_LEN, MIN_ADDRESS_LEN},
    ecosystems::EcosystemRegistry,
    logger::{self, LogTag},
};

#[tokio::main]
async fn main() {
    logger::init();

    if patterns::is_help_requested() {
        print_usage();
        std::process::exit(0);
    }

    // First positional argument is the wallet address; flag values are skipped
    let address = match find_address_argument() {
        Some(address) => address,
        None => {
            print_usage();
            std::process::exit(1);
        }
    };

    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len()) {
        logger::error(
            LogTag::System,
            &format!("Invalid Solana address length: {}", address.len()),
        );
        std::process::exit(1);
    }

    let config = match Config::load(&get_config_path()) {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("Failed to load config: {}", e));
            std::process::exit(1);
        }
    };

    let helius = match HeliusClient::new(&config.helius) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            logger::error(LogTag::Api, &format!("Failed to create Helius client: {}", e));
            std::process::exit(1);
        }
    };

    let analyzer = Analyzer::new(
        helius,
        Arc::new(EcosystemRegistry::builtin()),
        config.analysis.holdings_ranking,
    );

    logger::info(LogTag::Analysis, &format!("Analyzing wallet {}", address));
    let analysis = analyzer.analyze(&address).await;

    // Card printout
    println!();
    println!(
        "{} {}",
        "💳".bold(),
        "Wallet Card".bright_white().bold()
    );
    println!("{}", "─".repeat(50).dimmed());
    print_key_value("Address", &analysis.address);
    print_key_value(
        "Tier",
        &format!(
            "{} ({:.4} SOL)",
            analysis.whale_status.tier, analysis.whale_status.sol_balance
        ),
    );

    match (
        analysis.og_status.first_transaction_date,
        analysis.og_status.days_since_first,
    ) {
        (Some(date), Some(days)) => {
            print_key_value("First seen", &format!("{} ({} days ago)", date.date_naive(), days));
        }
        _ => print_key_value("First seen", "no transaction history"),
    }
    match (
        analysis.last_seen.last_transaction_date,
        analysis.last_seen.days_since_last,
    ) {
        (Some(date), Some(days)) => {
            print_key_value("Last seen", &format!("{} ({} days ago)", date.date_naive(), days));
        }
        _ => print_key_value("Last seen", "no transaction history"),
    }

    println!();
    println!("  {}", "Top holdings".bright_white().bold());
    for holding in &analysis.top_holdings {
        print_balance(&holding.symbol, holding.amount, holding.usd_value);
    }

    println!();
    println!("  {}", "Top ecosystems".bright_white().bold());
    if analysis.top_ecosystems.is_empty() {
        println!("  {}", "none in the last 30 days".dimmed());
    }
    for ecosystem in &analysis.top_ecosystems {
        println!(
            "  {} {} {}",
            "🔗".bright_cyan(),
            ecosystem.name.bright_white().bold(),
            format!("({} interactions)", ecosystem.interaction_count).dimmed()
        );
    }
    println!();
}

fn find_address_argument() -> Option<String> {
    let args = get_cmd_args();
    let mut skip_next = false;
    for arg in args.iter().skip(1) {
        if skip_next {
            skip_next = false;
            continue;
        }
        // Flags that consume the following token
        if arg == "--config" || arg == "--log-level" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        return Some(arg.clone());
    }
    None
}

fn print_usage() {
    println!("Usage: tool_analyze_wallet <address> [--config <path>] [--debug-api]");
}

fn print_key_value(key: &str, value: &str) {
    println!(
        "  {} {}",
        format!("{}:", key).dimmed(),
        value.bright_white().bold()
    );
}

fn print_balance(token: &str, amount: f64, usd_value: Option<f64>) {
    match usd_value {
        Some(usd) if usd > 0.0 => println!(
            "  {} {} {} {}",
            "💎".bright_green(),
            token.bright_white().bold(),
            format!("{:.4}", amount).bright_white().bold(),
            format!("(${:.2})", usd).green().bold()
        ),
        _ => println!(
            "  {} {} {}",
            "💎".bright_green(),
            token.bright_white().bold(),
            format!("{:.4}", amount).bright_white().bold()
        ),
    }
}
