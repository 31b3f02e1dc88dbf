use capsel::commands::{parse_command, Runner};
use capsel::speech::describe_sequence;
use capsel::{discover_settings, load_symbol_store, Session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("CAPSEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let (settings, settings_dir) = discover_settings(&cwd);
    let symbols = load_symbol_store(&settings, &settings_dir);
    let mut runner = Runner::new(Session::new(&settings, symbols));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("failed to read stdin: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(command)) => {
                for utterance in runner.apply(command) {
                    println!("{}", describe_sequence(&utterance.sequence));
                }
            }
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }
}
