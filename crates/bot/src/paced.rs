use std::thread;
use std::time::Duration;

use varchess_core::{Board, Color, Engine, SearchResult};

/// Wraps an engine and waits a fixed delay before every search, so an
/// automated opponent does not answer instantly.
#[derive(Debug, Clone)]
pub struct PacedEngine<E> {
    inner: E,
    delay: Duration,
}

impl<E: Engine> PacedEngine<E> {
    pub fn new(inner: E, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Engine> Engine for PacedEngine<E> {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.inner.search(board, side)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn author(&self) -> &str {
        self.inner.author()
    }

    fn new_game(&mut self) {
        self.inner.new_game()
    }
}
