use std::time::{Duration, Instant};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::select;
use tokio::sync::watch;

use crate::adapters::{LaptopAdapter, Outlet, RefrigeratorAdapter, SmartphoneAdapter};
use crate::console::choice::Choice;
use crate::console::error::ConsoleError;
use crate::console::stdio::{Attached, Detached};
use crate::devices::{Laptop, Refrigerator, SmartphoneCharger};

pub const MENU: &str = "Choose a device to plug in:
1. Laptop
2. Refrigerator
3. Smartphone
4. Exit
Enter your choice: ";

pub const EXIT_MESSAGE: &str = "Exiting...";

pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingChoice,
    Exiting,
}

/// Menu-driven front end owning one adapter per device.
pub struct Console<S> {
    laptop: LaptopAdapter,
    refrigerator: RefrigeratorAdapter,
    smartphone: SmartphoneAdapter,
    stdio: S,
    killswitch: Option<watch::Receiver<()>>,
}

impl Console<Detached> {
    pub fn new() -> Self {
        Console {
            laptop: LaptopAdapter::new(Laptop::new()),
            refrigerator: RefrigeratorAdapter::new(Refrigerator::new()),
            smartphone: SmartphoneAdapter::new(SmartphoneCharger::new()),
            stdio: Detached,
            killswitch: None,
        }
    }
}

impl Default for Console<Detached> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Console<S> {
    pub fn with_io<R, W>(self, reader: R, writer: W) -> Console<Attached<R, W>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        Console {
            laptop: self.laptop,
            refrigerator: self.refrigerator,
            smartphone: self.smartphone,
            stdio: Attached { reader, writer },
            killswitch: self.killswitch,
        }
    }

    pub fn with_killswitch(mut self, killswitch: watch::Receiver<()>) -> Self {
        self.killswitch = Some(killswitch);
        self
    }

    /// The outlet registered for a menu entry. `Exit` has none.
    pub fn outlet(&self, choice: Choice) -> Option<&dyn Outlet> {
        match choice {
            Choice::Laptop => Some(&self.laptop),
            Choice::Refrigerator => Some(&self.refrigerator),
            Choice::Smartphone => Some(&self.smartphone),
            Choice::Exit => None,
        }
    }

    /// Applies one menu selection, returning the next state and the line to
    /// show the user.
    pub fn transition(&self, choice: Choice) -> (State, &'static str) {
        match self.outlet(choice) {
            Some(outlet) => {
                tracing::debug!("Plugging in {:?}", choice);
                (State::AwaitingChoice, outlet.plug_in())
            }
            None => (State::Exiting, EXIT_MESSAGE),
        }
    }
}

impl<R, W> Console<Attached<R, W>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Runs the menu loop until the user exits, input ends, or the
    /// killswitch fires.
    pub async fn run(mut self) -> Result<(), ConsoleError> {
        let started = Instant::now();
        tracing::info!("Console session started");

        let mut state = State::AwaitingChoice;
        let mut line = Vec::new();

        while state == State::AwaitingChoice {
            self.write(MENU).await?;

            line.clear();
            let read = select! {
                read = self.stdio.reader.read_until(b'\n', &mut line) => read?,
                _ = killed(&mut self.killswitch) => {
                    tracing::warn!("Killswitch triggered, shutting down");
                    break;
                }
            };

            if read == 0 {
                tracing::warn!("Console input closed, ending session");
                break;
            }

            // undecodable bytes fall through to the invalid-choice path
            state = match String::from_utf8_lossy(&line).parse::<Choice>() {
                Ok(choice) => {
                    let (next, message) = self.transition(choice);
                    self.write_line(message).await?;
                    next
                }
                Err(err) => {
                    tracing::warn!("Rejected menu input: {}", err);
                    self.write_line(INVALID_CHOICE).await?;
                    State::AwaitingChoice
                }
            };
        }

        tracing::info!(
            "Console session ended after {}",
            humantime::format_duration(Duration::from_secs(started.elapsed().as_secs()))
        );
        Ok(())
    }

    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.stdio.writer.write_all(text.as_bytes()).await?;
        self.stdio.writer.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.stdio.writer.write_all(text.as_bytes()).await?;
        self.write("\n").await
    }
}

/// Resolves once the killswitch fires. Never resolves without one, or once
/// its sender is gone.
async fn killed(killswitch: &mut Option<watch::Receiver<()>>) {
    if let Some(rx) = killswitch {
        if rx.changed().await.is_ok() {
            return;
        }
    }
    std::future::pending::<()>().await
}
