#![cfg(feature = "std")]

//! Async driver that owns a [`Game`] and plays the computer's turn after a
//! delay on the caller's tokio runtime.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::common::{FireResult, GameError};
use crate::config::COMPUTER_DELAY_MS;
use crate::domain::Snapshot;
use crate::game::{Game, GamePhase};

type PendingTurn = JoinHandle<Result<FireResult, GameError>>;

/// Single owner of a match. Every command publishes a fresh [`Snapshot`]
/// to subscribers once it has been applied.
///
/// Rejected commands come back as an `anyhow::Error` wrapping a
/// [`GameError`] and leave the match untouched.
pub struct Session {
    game: Arc<Mutex<Game>>,
    updates: Arc<watch::Sender<Snapshot>>,
    pending: Option<PendingTurn>,
    delay: Duration,
}

impl Session {
    pub fn new(game: Game, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::from(&game));
        Self {
            game: Arc::new(Mutex::new(game)),
            updates: Arc::new(tx),
            pending: None,
            delay,
        }
    }

    /// Session with the standard computer delay.
    pub fn with_default_delay(game: Game) -> Self {
        Self::new(game, Duration::from_millis(COMPUTER_DELAY_MS))
    }

    /// Receiver that observes a new snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> Snapshot {
        Snapshot::from(&*self.game.lock().await)
    }

    pub async fn phase(&self) -> GamePhase {
        self.game.lock().await.phase()
    }

    /// Time the computer waits before answering a player shot.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// `true` while a computer turn is scheduled and has not finished.
    pub fn computer_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    async fn apply<T>(&mut self, f: impl FnOnce(&mut Game) -> Result<T, GameError>) -> anyhow::Result<T> {
        let mut game = self.game.lock().await;
        let out = f(&mut *game)?;
        self.updates.send_replace(Snapshot::from(&*game));
        Ok(out)
    }

    pub async fn select_ship(&mut self, name: &str) -> anyhow::Result<()> {
        self.apply(|g| g.select_ship(name)).await
    }

    pub async fn rotate_ship(&mut self) -> anyhow::Result<()> {
        self.apply(Game::rotate_ship).await
    }

    pub async fn set_candidate(&mut self, x: usize, y: usize) -> anyhow::Result<()> {
        self.apply(|g| g.set_candidate(x, y)).await
    }

    pub async fn clear_candidate(&mut self) -> anyhow::Result<()> {
        self.apply(Game::clear_candidate).await
    }

    pub async fn place_ship(&mut self) -> anyhow::Result<()> {
        self.apply(Game::place_ship).await
    }

    pub async fn start_match(&mut self) -> anyhow::Result<()> {
        self.apply(Game::start_match).await
    }

    /// Player shot. When the turn passes to the computer its reply is
    /// scheduled after the session delay.
    ///
    /// Fails without touching the match when called outside a tokio runtime.
    pub async fn fire_at(&mut self, index: usize) -> anyhow::Result<FireResult> {
        let runtime = Handle::try_current().context("session used outside a tokio runtime")?;
        let result = self.apply(|g| g.fire_at(index)).await?;
        if self.phase().await == GamePhase::ComputerTurn {
            self.schedule_computer_turn(&runtime);
        }
        Ok(result)
    }

    fn schedule_computer_turn(&mut self, runtime: &Handle) {
        let game = Arc::clone(&self.game);
        let updates = Arc::clone(&self.updates);
        let delay = self.delay;
        debug!("computer turn scheduled in {:?}", delay);
        self.pending = Some(runtime.spawn(async move {
            sleep(delay).await;
            let mut game = game.lock().await;
            let result = game.computer_turn();
            updates.send_replace(Snapshot::from(&*game));
            result
        }));
    }

    /// Wait for the scheduled computer turn, if any, and return its result.
    pub async fn wait_computer(&mut self) -> anyhow::Result<Option<FireResult>> {
        let Some(handle) = self.pending.take() else {
            return Ok(None);
        };
        let result = handle
            .await
            .map_err(|e| anyhow!("computer turn did not complete: {}", e))??;
        Ok(Some(result))
    }

    /// Cancel any scheduled computer turn and start over in placement.
    pub async fn reset(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let mut game = self.game.lock().await;
        game.reset();
        self.updates.send_replace(Snapshot::from(&*game));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                warn!("session dropped with a computer turn pending");
            }
            handle.abort();
        }
    }
}
