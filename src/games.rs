//! Sessions keyed by chat.
//!
//! Each key owns one [`SessionMode`] behind its own mutex, so guesses for the
//! same chat are serialised while different chats proceed independently. The
//! dictionary and atlas are shared read-only.

use crate::atlas::TileAtlas;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::feedback::ScoringRule;
use crate::render::Canvas;
use crate::session::{GuessOutcome, Session};
use log::{debug, info};
use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Per-chat state.
#[derive(Debug, Clone, Default)]
pub enum SessionMode {
    /// Enabled, but no game has been started.
    #[default]
    Uninitialized,
    Active(Session),
    /// Games are switched off for this chat.
    Disabled,
}

/// Mode requested by an enable/disable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMode {
    Active,
    Disabled,
}

/// What the transport should send back for a guess.
#[derive(Debug, Clone)]
pub enum GuessReply {
    /// The guess was scored and appended. `just_won` is set only on the guess
    /// that solved the game, never on later replies.
    NewRow { canvas: Canvas, just_won: bool },
    /// The game was already solved; the canvas shows the unchanged board.
    AlreadyWon { canvas: Canvas },
    /// Not a valid word; nothing was rendered.
    InvalidWord,
}

pub struct Games<K, R> {
    dictionary: Arc<Dictionary>,
    atlas: Arc<TileAtlas>,
    rule: ScoringRule,
    rng: Mutex<R>,
    sessions: RwLock<HashMap<K, Arc<Mutex<SessionMode>>>>,
}

impl<K, R> Games<K, R>
where
    K: Eq + Hash + Clone,
    R: Rng,
{
    /// Fails if the dictionary has no answers to draw secrets from.
    pub fn new(
        dictionary: Arc<Dictionary>,
        atlas: Arc<TileAtlas>,
        rule: ScoringRule,
        rng: R,
    ) -> Result<Self, GameError> {
        if dictionary.answers().is_empty() {
            return Err(GameError::EmptyPool);
        }
        Ok(Self {
            dictionary,
            atlas,
            rule,
            rng: Mutex::new(rng),
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Start a new game for `key`, discarding any game in progress.
    pub fn create_session(&self, key: K) -> Result<(), GameError> {
        let slot = self.slot_or_insert(key);
        let mut mode = lock(&slot);
        if matches!(*mode, SessionMode::Disabled) {
            return Err(GameError::Disabled);
        }

        let secret = self
            .dictionary
            .pick_secret(&mut *lock(&self.rng))
            .map_err(|_| GameError::EmptyPool)?;
        debug!("Started game");
        *mode = SessionMode::Active(Session::with_rule(secret, self.rule));
        Ok(())
    }

    /// Submit a guess to the active game for `key` and render the result.
    pub fn submit_guess(&self, key: &K, text: &str) -> Result<GuessReply, GameError> {
        let slot = self.slot(key).ok_or(GameError::UnknownSession)?;
        let mut mode = lock(&slot);
        let SessionMode::Active(session) = &mut *mode else {
            return Err(GameError::UnknownSession);
        };

        let reply = match session.submit_guess(text, &self.dictionary) {
            Ok(GuessOutcome::Accepted { won }) => GuessReply::NewRow {
                canvas: session.render(&self.atlas),
                just_won: won,
            },
            Ok(GuessOutcome::AlreadyWon) => GuessReply::AlreadyWon {
                canvas: session.render(&self.atlas),
            },
            Err(_) => GuessReply::InvalidWord,
        };
        Ok(reply)
    }

    /// Enable or disable games for `key`, returning the previous mode.
    ///
    /// Enabling always resets the chat to [`SessionMode::Uninitialized`].
    pub fn set_session_mode(&self, key: K, mode: SetMode) -> SessionMode {
        let slot = self.slot_or_insert(key);
        let next = match mode {
            SetMode::Active => SessionMode::Uninitialized,
            SetMode::Disabled => SessionMode::Disabled,
        };
        let previous = mem::replace(&mut *lock(&slot), next);
        info!("Session mode set to {:?}", mode);
        previous
    }

    pub fn is_disabled(&self, key: &K) -> bool {
        self.slot(key)
            .map(|slot| matches!(*lock(&slot), SessionMode::Disabled))
            .unwrap_or(false)
    }

    /// Render the current board without guessing.
    pub fn render(&self, key: &K) -> Result<Canvas, GameError> {
        self.with_session(key, |session| session.render(&self.atlas))
    }

    pub fn share_text(&self, key: &K) -> Result<String, GameError> {
        self.with_session(key, Session::share_text)
    }

    fn with_session<T>(&self, key: &K, f: impl FnOnce(&Session) -> T) -> Result<T, GameError> {
        let slot = self.slot(key).ok_or(GameError::UnknownSession)?;
        let mode = lock(&slot);
        match &*mode {
            SessionMode::Active(session) => Ok(f(session)),
            _ => Err(GameError::UnknownSession),
        }
    }

    fn slot(&self, key: &K) -> Option<Arc<Mutex<SessionMode>>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn slot_or_insert(&self, key: K) -> Arc<Mutex<SessionMode>> {
        if let Some(slot) = self.slot(&key) {
            return slot;
        }
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_default()
            .clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
