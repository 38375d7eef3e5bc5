use crate::terminal::Terminal;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::Position;
use lib::game::{Config, Game, Throttle};
use lib::ui::{headline, Directory, Glyphs, Renderer, SpriteSheet};
use std::io::{stdin, stdout};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Plays a game of chess between two people taking turns on the same device.
///
/// Squares are picked by typing the pixel coordinates of a press, e.g. `340 500`,
/// or the name of a square, e.g. `e2`. Type `quit` to leave.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The game configuration.
    #[clap(short, long, default_value_t)]
    config: Config,

    /// A directory holding piece images named like `wK.png` or `bP.png`.
    ///
    /// Unicode chess figures are used if omitted.
    #[clap(short, long)]
    assets: Option<PathBuf>,

    /// The starting position in FEN notation.
    #[clap(default_value_t)]
    pos: Position,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let layout = self.config.layout();
        let size = layout.cell().unsigned_abs();

        let sprites = match &self.assets {
            Some(dir) => SpriteSheet::load(&Directory::new(dir), size),
            None => SpriteSheet::load(&Glyphs, size),
        }
        .context("failed to load the piece sprites")?;

        let renderer = Renderer::new(layout, self.config.theme, self.config.banner, sprites);
        let surface = Terminal::new(stdout(), stdin(), layout);
        let pacer = Throttle::new(self.config.interval());

        let mut game = Game::new(self.pos, renderer, surface, pacer, self.config.linger);
        match game.run().context("the terminal stopped responding")? {
            Some(o) => info!(outcome = %o, "{}", headline(o)),
            None => info!("game abandoned"),
        }

        Ok(())
    }
}
