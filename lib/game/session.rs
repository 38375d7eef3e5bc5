use crate::chess::{Outcome, Rules};
use crate::game::{Event, Pacer, Phase, Surface};
use crate::ui::{Highlights, Point, Renderer, Selection, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument, trace};

/// Holds the state of a game of chess played by two people on the same device.
#[derive(Debug)]
pub struct Game<R, S, P> {
    rules: R,
    renderer: Renderer,
    surface: S,
    pacer: P,
    linger: Duration,
    selector: Selector,
    phase: Phase,
}

impl<R, S, P> Game<R, S, P>
where
    R: Rules,
    S: Surface,
    P: Pacer,
{
    /// Constructs a game that starts from the board held by `rules`.
    ///
    /// Once the game ends, the final position stays on screen for `linger`
    /// before the outcome is announced.
    pub fn new(rules: R, renderer: Renderer, surface: S, pacer: P, linger: Duration) -> Self {
        Game {
            rules,
            renderer,
            surface,
            pacer,
            linger,
            selector: Selector::default(),
            phase: Phase::Active,
        }
    }

    /// The rules engine holding the board.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The presentation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The current [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current [`Selection`].
    pub fn selection(&self) -> Selection {
        self.selector.selection()
    }

    /// Plays until the window is closed.
    ///
    /// Returns the [`Outcome`] of the game, or `None` if the window was closed
    /// before the game ended.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<Option<Outcome>, S::Error> {
        let outcome = loop {
            self.present()?;
            self.pacer.tick();

            while let Some(e) = self.surface.poll()? {
                match e {
                    Event::Close => {
                        info!("window closed while playing");
                        return Ok(None);
                    }

                    Event::Press(p) => self.press(p),
                }
            }

            if let Some(o) = self.rules.outcome() {
                break o;
            }
        };

        self.present()?;
        self.pacer.pause(self.linger);

        self.phase = Phase::Over(outcome);
        info!(%outcome, "game over");
        self.present()?;

        loop {
            match self.surface.wait()? {
                Event::Close => break Ok(Some(outcome)),
                Event::Press(p) => trace!(%p, "ignored press after the game ended"),
            }
        }
    }

    fn press(&mut self, p: Point) {
        if self.phase.is_over() || self.rules.is_game_over() {
            trace!(%p, "ignored press after the game ended");
            return;
        }

        match self.renderer.layout().square_at(p) {
            None => debug!(%p, "ignored press off the board"),
            Some(s) => {
                self.selector.click(&mut self.rules, s);
            }
        }
    }

    fn present(&mut self) -> Result<(), S::Error> {
        let highlights = match self.phase {
            Phase::Active => Highlights::new(&self.rules, self.selector.selection()),
            Phase::Over(_) => Highlights::default(),
        };

        let frame = self.renderer.render(&self.rules, &highlights, self.phase);
        self.surface.present(&frame)
    }
}
