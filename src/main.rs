use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr only; stdout belongs to the interactive session.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut data_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                data_path = args.next().map(PathBuf::from);
                if data_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("abook - contact directory with birthday reminders");
                println!();
                println!("Usage: abook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Data file path (default: .data/phonebook.json)");
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let data_path = data_path.unwrap_or_else(|| PathBuf::from(".data").join("phonebook.json"));

    abook::cli::run(&data_path);
}
