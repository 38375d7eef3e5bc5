use crate::chess::{Color, Outcome, Rules, Square};
use crate::game::Phase;
use crate::ui::{Canvas, Frame, Highlights, Layout, Mark, Point, SpriteSheet, Theme};
use tracing::instrument;

/// The width of the outline around the selected square.
const SELECTION_WIDTH: u32 = 3;

/// The width of the ring around capturing destinations.
const CAPTURE_WIDTH: u32 = 3;

/// The width of the strokes crossing the losing king.
const CROSS_WIDTH: u32 = 5;

/// The text announcing an [`Outcome`].
pub fn headline(outcome: Outcome) -> &'static str {
    match outcome.winner() {
        Some(Color::White) => "White wins!",
        Some(Color::Black) => "Black wins!",
        None => "Draw",
    }
}

/// Draws the board, its pieces and decorations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Renderer {
    layout: Layout,
    theme: Theme,
    banner: u32,
    sprites: SpriteSheet,
}

impl Renderer {
    /// A renderer for the given geometry, colors, banner font size and sprites.
    pub fn new(layout: Layout, theme: Theme, banner: u32, sprites: SpriteSheet) -> Self {
        Renderer {
            layout,
            theme,
            banner,
            sprites,
        }
    }

    /// The geometry of the board.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draws a whole frame.
    ///
    /// Once the game is over the losing king is crossed out and the outcome is
    /// announced at the center of the board, over everything else.
    #[instrument(level = "trace", skip(self, canvas, rules, highlights))]
    pub fn draw<C, R>(&self, canvas: &mut C, rules: &R, highlights: &Highlights, phase: Phase)
    where
        C: Canvas + ?Sized,
        R: Rules + ?Sized,
    {
        self.draw_board(canvas);
        self.draw_pieces(canvas, rules);
        self.draw_highlights(canvas, highlights);

        if let Some(outcome) = phase.outcome() {
            self.draw_outcome(canvas, rules, outcome);
        }
    }

    /// Draws a whole frame into a new [`Frame`].
    pub fn render<R: Rules + ?Sized>(&self, rules: &R, highlights: &Highlights, phase: Phase) -> Frame {
        let mut frame = Frame::new();
        self.draw(&mut frame, rules, highlights, phase);
        frame
    }

    fn draw_board<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for s in Square::iter() {
            let color = if (s.file().index() + s.rank().index()) % 2 == 0 {
                self.theme.dark
            } else {
                self.theme.light
            };

            canvas.fill_rect(self.layout.cell_of(s), color);
        }
    }

    fn draw_pieces<C: Canvas + ?Sized, R: Rules + ?Sized>(&self, canvas: &mut C, rules: &R) {
        for s in Square::iter() {
            if let Some(p) = rules.piece_at(s) {
                let cell = self.layout.cell_of(s);
                canvas.blit(Point::new(cell.x, cell.y), &self.sprites[p]);
            }
        }
    }

    fn draw_highlights<C: Canvas + ?Sized>(&self, canvas: &mut C, highlights: &Highlights) {
        let cell = self.layout.cell().unsigned_abs();

        for (s, mark) in highlights.iter() {
            let r = self.layout.cell_of(s);
            match mark {
                Mark::Selection => canvas.stroke_rect(r, self.theme.selection, SELECTION_WIDTH),
                Mark::Quiet => canvas.fill_circle(r.center(), cell / 8, self.theme.quiet),
                Mark::Capture => {
                    canvas.stroke_circle(r.center(), cell / 2, self.theme.capture, CAPTURE_WIDTH)
                }
            }
        }
    }

    fn draw_outcome<C, R>(&self, canvas: &mut C, rules: &R, outcome: Outcome)
    where
        C: Canvas + ?Sized,
        R: Rules + ?Sized,
    {
        if let Some(king) = outcome.loser().and_then(|c| rules.king_of(c)) {
            let r = self.layout.cell_of(king);
            let (left, right) = (r.x, r.x + r.width);
            let (top, bottom) = (r.y, r.y + r.height);

            canvas.line(
                Point::new(left, top),
                Point::new(right, bottom),
                self.theme.cross,
                CROSS_WIDTH,
            );

            canvas.line(
                Point::new(right, top),
                Point::new(left, bottom),
                self.theme.cross,
                CROSS_WIDTH,
            );
        }

        canvas.text(
            self.layout.center(),
            headline(outcome),
            self.banner,
            self.theme.banner,
        );
    }
}
