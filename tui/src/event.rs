use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

/// Terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    /// Key press event.
    KeyPress(KeyCode),
    /// Terminal resize event.
    Resize,
    /// The frame deadline has passed.
    Tick,
}

/// Terminal events handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Channel to receive events from the event thread.
    rx: Receiver<TermEvent>,
}

impl EventHandler {
    /// Create a new [`EventHandler`].
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || -> Result<()> {
            log::debug!("Event thread started.");
            loop {
                match event::read()? {
                    Event::Key(e) => {
                        // Send the event only if it is a key press.
                        if e.kind == KeyEventKind::Press {
                            tx.send(TermEvent::KeyPress(e.code))?;
                        }
                    }
                    Event::Resize(_, _) => {
                        tx.send(TermEvent::Resize)?;
                    }
                    _ => {}
                }
            }
        });

        Self { rx }
    }

    /// Receive an event, blocking until one arrives.
    pub fn recv(&self) -> Result<TermEvent> {
        Ok(self.rx.recv()?)
    }

    /// Receive an event, or [`TermEvent::Tick`] once the ticker's deadline has passed.
    ///
    /// Events arriving before the deadline do not move it, so ticks keep their pace under
    /// a steady stream of key presses.
    pub fn next_event(&self, ticker: &mut Ticker) -> Result<TermEvent> {
        if ticker.poll() {
            return Ok(TermEvent::Tick);
        }

        match self.rx.recv_timeout(ticker.remaining()) {
            Ok(event) => Ok(event),
            Err(RecvTimeoutError::Timeout) => {
                ticker.advance();
                Ok(TermEvent::Tick)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Fixed-rate frame deadlines.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    /// Delay between two ticks.
    delay: Duration,
    /// When the next tick is due.
    next_tick: Instant,
}

impl Ticker {
    /// Create a new [`Ticker`] whose first tick is one delay from now.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_tick: Instant::now() + delay,
        }
    }

    /// Restart the schedule from now, e.g. when resuming from a pause.
    pub fn reset(&mut self) {
        self.next_tick = Instant::now() + self.delay;
    }

    /// Time left before the next tick.
    fn remaining(&self) -> Duration {
        self.next_tick.saturating_duration_since(Instant::now())
    }

    /// If the next tick is due, schedule the one after it and return `true`.
    fn poll(&mut self) -> bool {
        if Instant::now() >= self.next_tick {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Move the deadline forward by one delay.
    ///
    /// A ticker that fell more than one delay behind skips the missed ticks instead of
    /// firing them in a burst.
    fn advance(&mut self) {
        let now = Instant::now();
        self.next_tick += self.delay;
        if self.next_tick <= now {
            self.next_tick = now + self.delay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_under_key_stream() {
        let (tx, rx) = mpsc::channel();
        let handler = EventHandler { rx };

        let run_for = Duration::from_millis(1000);
        thread::spawn(move || {
            let start = Instant::now();
            while start.elapsed() < run_for + Duration::from_millis(200) {
                if tx.send(TermEvent::KeyPress(KeyCode::Char('x'))).is_err() {
                    break;
                }
                thread::sleep(Duration::from_millis(20));
            }
        });

        let mut ticker = Ticker::new(Duration::from_millis(100));
        let start = Instant::now();
        let mut ticks = 0;
        let mut keys = 0;

        while start.elapsed() < run_for {
            match handler.next_event(&mut ticker).unwrap() {
                TermEvent::Tick => ticks += 1,
                TermEvent::KeyPress(_) => keys += 1,
                TermEvent::Resize => {}
            }
        }

        assert!(keys > 0);
        // About 10 ticks are due; leave room for a slow scheduler.
        assert!((5..=11).contains(&ticks), "{ticks} ticks");
    }

    #[test]
    fn test_ticker_skips_missed_ticks() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        assert!(!ticker.poll());

        thread::sleep(Duration::from_millis(50));
        assert!(ticker.poll());
        assert!(!ticker.poll());
        assert!(ticker.remaining() <= Duration::from_millis(10));
    }
}
