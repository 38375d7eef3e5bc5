use lib::chess::{File, Rank, Square};
use lib::game::{Event, Surface};
use lib::ui::{Canvas, Frame, Layout, Point, Rect, Rgb, Sprite, Texture};
use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{instrument, trace, warn};

/// Interprets a line typed by the player.
///
/// A line is either the pixel coordinates of a press, the name of a square,
/// or one of `quit`, `exit` and `q`.
fn parse(line: &str, layout: &Layout) -> Option<Event> {
    let line = line.trim();

    match line {
        "quit" | "exit" | "q" => return Some(Event::Close),
        _ => {}
    }

    if let Ok(s) = line.parse::<Square>() {
        return Some(Event::Press(layout.cell_of(s).center()));
    }

    let mut coordinates = line.split_whitespace().map(str::parse::<i32>);
    match (coordinates.next(), coordinates.next(), coordinates.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some(Event::Press(Point::new(x, y))),
        _ => None,
    }
}

/// A presentation surface that reads input lines and prints the board as text.
///
/// Input is read on a separate thread that plays the part of the window
/// system's event queue, so that polling never blocks. All game state stays
/// on the thread running the loop.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    writer: W,
    events: Receiver<Event>,
    layout: Layout,
    last: Option<Frame>,
}

impl<W: Write> Terminal<W> {
    /// Constructs a terminal that prints to `writer` and reads from `reader`.
    pub fn new<R: Read + Send + 'static>(writer: W, reader: R, layout: Layout) -> Self {
        let (tx, events) = channel();

        let spawned = thread::Builder::new()
            .name("input".into())
            .spawn(move || {
                for line in BufReader::new(reader).lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            warn!("{}", e);
                            break;
                        }
                    };

                    match parse(&line, &layout) {
                        None => warn!(%line, "ignored malformed input"),
                        Some(e) => {
                            trace!(%e, "received");
                            if tx.send(e).is_err() {
                                return;
                            }
                        }
                    }
                }

                tx.send(Event::Close).ok();
            });

        if let Err(e) = spawned {
            warn!("failed to spawn the input thread: {}", e);
        }

        Terminal {
            writer,
            events,
            layout,
            last: None,
        }
    }
}

impl<W: Write> Surface for Terminal<W> {
    type Error = io::Error;

    fn poll(&mut self) -> io::Result<Option<Event>> {
        match self.events.try_recv() {
            Ok(e) => Ok(Some(e)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Ok(Some(Event::Close)),
        }
    }

    fn wait(&mut self) -> io::Result<Event> {
        Ok(self.events.recv().unwrap_or(Event::Close))
    }

    #[instrument(level = "trace", skip(self, frame), err)]
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }

        let mut raster = Raster::new(self.layout);
        frame.replay(&mut raster);
        writeln!(self.writer, "{}", raster)?;
        self.writer.flush()?;

        self.last = Some(frame.clone());
        Ok(())
    }
}

/// What a single board cell looks like as text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Cell {
    left: char,
    glyph: char,
    right: char,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            left: ' ',
            glyph: ' ',
            right: ' ',
        }
    }
}

/// A [`Canvas`] that rasterizes drawing onto one text cell per square.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Raster {
    layout: Layout,
    cells: [[Cell; 8]; 8],
    banner: Option<String>,
}

impl Raster {
    fn new(layout: Layout) -> Self {
        Raster {
            layout,
            cells: Default::default(),
            banner: None,
        }
    }

    fn cell(&mut self, p: Point) -> Option<&mut Cell> {
        let s = self.layout.square_at(p)?;
        Some(&mut self.cells[s.rank().index() as usize][s.file().index() as usize])
    }

    fn is_dark(color: Rgb) -> bool {
        u32::from(color.0) + u32::from(color.1) + u32::from(color.2) < 3 * 176
    }
}

impl Canvas for Raster {
    fn fill_rect(&mut self, r: Rect, color: Rgb) {
        if let Some(cell) = self.cell(r.center()) {
            let shade = if Raster::is_dark(color) { '·' } else { ' ' };
            *cell = Cell {
                left: ' ',
                glyph: shade,
                right: ' ',
            };
        }
    }

    fn stroke_rect(&mut self, r: Rect, _: Rgb, _: u32) {
        if let Some(cell) = self.cell(r.center()) {
            cell.left = '[';
            cell.right = ']';
        }
    }

    fn fill_circle(&mut self, center: Point, _: u32, _: Rgb) {
        if let Some(cell) = self.cell(center) {
            cell.glyph = '•';
        }
    }

    fn stroke_circle(&mut self, center: Point, _: u32, _: Rgb, _: u32) {
        if let Some(cell) = self.cell(center) {
            cell.left = '(';
            cell.right = ')';
        }
    }

    fn line(&mut self, from: Point, to: Point, _: Rgb, _: u32) {
        let midpoint = Point::new((from.x + to.x) / 2, (from.y + to.y) / 2);
        if let Some(cell) = self.cell(midpoint) {
            cell.left = 'x';
            cell.right = 'x';
        }
    }

    fn blit(&mut self, at: Point, sprite: &Sprite) {
        let glyph = match sprite.texture {
            Texture::Glyph(c) => c,
            Texture::Image(_) => sprite.piece.figure(),
        };

        if let Some(cell) = self.cell(at) {
            cell.glyph = glyph;
        }
    }

    fn text(&mut self, _: Point, text: &str, _: u32, _: Rgb) {
        self.banner = Some(text.to_owned());
    }
}

impl Display for Raster {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} ", rank)?;
            for cell in &self.cells[rank.index() as usize] {
                write!(f, "{}{}{}", cell.left, cell.glyph, cell.right)?;
            }

            writeln!(f)?;
        }

        write!(f, "  ")?;
        for file in File::ALL {
            write!(f, " {} ", file)?;
        }

        if let Some(banner) = &self.banner {
            write!(f, "\n\n  {}", banner)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::{Color, Outcome, Position, Rules};
    use lib::game::Phase;
    use lib::ui::{Glyphs, Highlights, Renderer, Selection, SpriteSheet, Theme};
    use std::io::empty;
    use std::str;
    use test_strategy::proptest;

    fn renderer(layout: Layout) -> Renderer {
        let sprites = SpriteSheet::load(&Glyphs, layout.cell().unsigned_abs()).unwrap();
        Renderer::new(layout, Theme::default(), 74, sprites)
    }

    #[proptest]
    fn pixel_coordinates_are_parsed_as_a_press(x: i32, y: i32) {
        let layout = Layout::new(640);
        assert_eq!(
            parse(&format!("{} {}", x, y), &layout),
            Some(Event::Press(Point::new(x, y)))
        );
    }

    #[proptest]
    fn square_names_are_parsed_as_a_press_at_the_center_of_the_cell(s: Square) {
        let layout = Layout::new(640);
        let Some(Event::Press(p)) = parse(&s.to_string(), &layout) else {
            panic!("expected a press");
        };

        assert_eq!(layout.square_at(p), Some(s));
    }

    #[proptest]
    fn quit_is_parsed_as_close() {
        let layout = Layout::new(640);
        assert_eq!(parse("quit", &layout), Some(Event::Close));
        assert_eq!(parse("  q  ", &layout), Some(Event::Close));
    }

    #[proptest]
    fn malformed_lines_are_rejected(#[strategy("[a-z]{3,8} [a-z]{3,8}")] line: String) {
        assert_eq!(parse(&line, &Layout::new(640)), None);
    }

    #[proptest]
    fn events_are_received_in_order_and_close_follows_end_of_input() {
        let input = "e2\n320 480\nnonsense\nquit\n";
        let mut terminal = Terminal::new(io::sink(), input.as_bytes(), Layout::new(640));

        assert!(matches!(terminal.wait()?, Event::Press(_)));
        assert_eq!(terminal.wait()?, Event::Press(Point::new(320, 480)));
        assert_eq!(terminal.wait()?, Event::Close);
        assert_eq!(terminal.wait()?, Event::Close);
    }

    #[proptest]
    fn polling_an_exhausted_input_closes() {
        let mut terminal = Terminal::new(io::sink(), empty(), Layout::new(640));
        assert_eq!(terminal.wait()?, Event::Close);
        assert_eq!(terminal.poll()?, Some(Event::Close));
    }

    #[proptest]
    fn identical_frames_are_printed_once(pos: Position) {
        let layout = Layout::new(640);
        let frame = renderer(layout).render(&pos, &Highlights::default(), Phase::Active);

        let mut buffer = Vec::new();
        let mut terminal = Terminal::new(&mut buffer, empty(), layout);
        terminal.present(&frame)?;
        terminal.present(&frame)?;
        drop(terminal);

        let printed = str::from_utf8(&buffer)?;
        assert_eq!(printed.matches("a  b  c").count(), 1);
    }

    #[proptest]
    fn pieces_are_printed_on_their_squares() {
        let layout = Layout::new(640);
        let pos = Position::default();
        let mut raster = Raster::new(layout);
        renderer(layout).render(&pos, &Highlights::default(), Phase::Active).replay(&mut raster);

        let printed = raster.to_string();
        let lines: Vec<_> = printed.lines().collect();
        assert!(lines[0].starts_with("8 "));
        assert!(lines[0].contains('♜'));
        assert!(lines[7].starts_with("1 "));
        assert!(lines[7].contains('♔'));
    }

    #[proptest]
    fn highlights_are_printed_around_cells() {
        let layout = Layout::new(640);
        let pos: Position = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2".parse()?;
        let highlights = Highlights::new(&pos, Selection::Selected("e4".parse()?));

        let mut raster = Raster::new(layout);
        renderer(layout).render(&pos, &highlights, Phase::Active).replay(&mut raster);

        let e4 = raster.cells[3][4];
        let d5 = raster.cells[4][3];
        let e5 = raster.cells[4][4];
        assert_eq!((e4.left, e4.glyph, e4.right), ('[', '♙', ']'));
        assert_eq!((d5.left, d5.glyph, d5.right), ('(', '♟', ')'));
        assert_eq!(e5.glyph, '•');
    }

    #[proptest]
    fn outcome_is_printed_below_the_board() {
        let layout = Layout::new(640);
        let pos: Position = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3".parse()?;
        let outcome = pos.outcome().unwrap();

        let mut raster = Raster::new(layout);
        renderer(layout).render(&pos, &Highlights::default(), Phase::Over(outcome)).replay(&mut raster);

        let e1 = raster.cells[0][4];
        assert_eq!((e1.left, e1.glyph, e1.right), ('x', '♔', 'x'));
        assert!(raster.to_string().ends_with("Black wins!"));
        assert_eq!(outcome, Outcome::Checkmate(Color::Black));
    }
}
