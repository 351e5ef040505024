use dotenvy::dotenv;
use tokio::{
    io::{self, BufReader},
    select,
    signal::unix::{signal, SignalKind},
    sync::watch,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outlet::console::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    // enable logging to stderr so the menu owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outlet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // set the killswitch
    let (stop_tx, stop_rx) = watch::channel(());
    listen_killswitch(stop_tx);

    let console = Console::new()
        .with_io(BufReader::new(io::stdin()), io::stdout())
        .with_killswitch(stop_rx);

    let code = match console.run().await {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!("{}", err);
            1
        }
    };

    // a pending stdin read would otherwise hold the runtime open
    std::process::exit(code)
}

fn listen_killswitch(tx: watch::Sender<()>) {
    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
                (Err(err), _) | (_, Err(err)) => {
                    tracing::error!("Could not install signal handlers: {}", err);
                    return;
                }
            };
        loop {
            select! {
                _ = sigterm.recv() => tracing::warn!("Received SIGTERM"),
                _ = sigint.recv() => tracing::warn!("Received SIGINT"),
            };
            if tx.send(()).is_err() {
                break;
            }
        }
    });
}
