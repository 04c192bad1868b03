use anyhow::Result;

use claude_agent_usage::cli::Args;
use claude_agent_usage::display::render_report;
use claude_agent_usage::usage::scan_file;

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // Usage errors go to stdout; --help/--version keep clap's behavior
        Err(err) if err.use_stderr() => {
            println!("{err}");
            std::process::exit(2);
        }
        Err(err) => err.exit(),
    };

    if !args.transcript.exists() {
        println!(
            "Error: transcript not found: {}",
            args.transcript.display()
        );
        std::process::exit(1);
    }

    let breakdown = scan_file(&args.transcript)?;
    let rates = args.rates();

    print!("{}", render_report(&breakdown, &rates));

    if args.debug {
        eprintln!();
        eprintln!("=== Debug Information ===");
        eprintln!(
            "Lines: {} read, {} skipped",
            breakdown.lines_read, breakdown.lines_skipped
        );
        eprintln!(
            "Agents: main + {} subagent(s)",
            breakdown.subagents.len()
        );
        eprintln!("=========================");
    }
    Ok(())
}
