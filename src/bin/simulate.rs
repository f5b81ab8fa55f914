use clap::Parser;
use equity_sim::models::SimulationParams;
use equity_sim::simulation::SimulationRunner;
use equity_sim::Result;

/// Simulate win/loss equity curves under static and compounding risk sizing
#[derive(Parser, Debug)]
#[command(name = "simulate")]
struct Args {
    /// Number of independent sequences to generate
    #[arg(long, default_value_t = 5)]
    num_sequences: u32,

    /// Number of trades per sequence
    #[arg(long, default_value_t = 50)]
    num_trades: u32,

    /// Win rate percentage (0-100)
    #[arg(long, default_value_t = 50.0)]
    win_rate: f64,

    /// Payoff multiple applied on winning trades
    #[arg(long, default_value_t = 2.0)]
    r_multiple: f64,

    /// Starting account balance
    #[arg(long, default_value_t = 10000.0)]
    starting_balance: f64,

    /// Percentage of balance risked per trade (0-100)
    #[arg(long, default_value_t = 1.0)]
    risk_percentage: f64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the full record list as JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("equity_sim=info")
        .init();

    let args = Args::parse();

    let params = SimulationParams {
        num_sequences: args.num_sequences,
        num_trades: args.num_trades,
        win_rate: args.win_rate,
        r_multiple: args.r_multiple,
        starting_balance: args.starting_balance,
        risk_percentage: args.risk_percentage,
    };

    let mut runner = match args.seed {
        Some(seed) => SimulationRunner::new(seed),
        None => SimulationRunner::from_entropy(),
    };

    let records = runner.run(&params)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).expect("records serialize to JSON")
        );
        return Ok(());
    }

    println!("\n╔═══════════════════════════════════════════════════════╗");
    println!("║              EQUITY CURVE SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════╝\n");

    println!(
        "Parameters: {} sequences x {} trades, win rate {}%, R {}, balance ${:.2}, risk {}%\n",
        params.num_sequences,
        params.num_trades,
        params.win_rate,
        params.r_multiple,
        params.starting_balance,
        params.risk_percentage
    );

    if params.num_trades > 0 {
        println!(
            "{:<10} {:>10} {:>18} {:>18}",
            "Sequence", "Trades", "Static Balance", "Compound Balance"
        );
        println!("{}", "─".repeat(60));

        for chunk in records.chunks(params.num_trades as usize) {
            if let Some(last) = chunk.last() {
                println!(
                    "{:<10} {:>10} {:>18.2} {:>18.2}",
                    last.sequence,
                    last.trade,
                    last.static_balance,
                    last.compound_balance
                );
            }
        }
    }

    println!("\nTotal records: {}\n", records.len());

    Ok(())
}
