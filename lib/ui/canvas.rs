use crate::ui::{Point, Rect, Rgb, Sprite};
use derive_more::Deref;

/// Trait for drawing targets.
///
/// Coordinates are in pixels from the top-left corner, stroke widths and radii
/// are in pixels too.
pub trait Canvas {
    /// Fills a rectangle.
    fn fill_rect(&mut self, r: Rect, color: Rgb);

    /// Outlines a rectangle with a stroke of the given width drawn inwards.
    fn stroke_rect(&mut self, r: Rect, color: Rgb, width: u32);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb);

    /// Outlines a circle with a stroke of the given width drawn inwards.
    fn stroke_circle(&mut self, center: Point, radius: u32, color: Rgb, width: u32);

    /// Draws a straight line between two points.
    fn line(&mut self, from: Point, to: Point, color: Rgb, width: u32);

    /// Draws a [`Sprite`] with its top-left corner at the given point.
    fn blit(&mut self, at: Point, sprite: &Sprite);

    /// Writes text centered at the given point.
    fn text(&mut self, center: Point, text: &str, size: u32, color: Rgb);
}

/// A drawing primitive recorded by a [`Frame`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Shape {
    FillRect(Rect, Rgb),
    StrokeRect(Rect, Rgb, u32),
    FillCircle(Point, u32, Rgb),
    StrokeCircle(Point, u32, Rgb, u32),
    Line(Point, Point, Rgb, u32),
    Blit(Point, Sprite),
    Text(Point, String, u32, Rgb),
}

/// A display list that records everything drawn on it.
///
/// Shapes are kept in the order they were drawn, later ones on top.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deref)]
pub struct Frame(Vec<Shape>);

impl Frame {
    /// An empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every recorded shape on another [`Canvas`], in order.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for shape in &self.0 {
            match shape {
                Shape::FillRect(r, c) => canvas.fill_rect(*r, *c),
                Shape::StrokeRect(r, c, w) => canvas.stroke_rect(*r, *c, *w),
                Shape::FillCircle(p, r, c) => canvas.fill_circle(*p, *r, *c),
                Shape::StrokeCircle(p, r, c, w) => canvas.stroke_circle(*p, *r, *c, *w),
                Shape::Line(a, b, c, w) => canvas.line(*a, *b, *c, *w),
                Shape::Blit(p, s) => canvas.blit(*p, s),
                Shape::Text(p, t, s, c) => canvas.text(*p, t, *s, *c),
            }
        }
    }
}

impl Canvas for Frame {
    fn fill_rect(&mut self, r: Rect, color: Rgb) {
        self.0.push(Shape::FillRect(r, color));
    }

    fn stroke_rect(&mut self, r: Rect, color: Rgb, width: u32) {
        self.0.push(Shape::StrokeRect(r, color, width));
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        self.0.push(Shape::FillCircle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: u32, color: Rgb, width: u32) {
        self.0.push(Shape::StrokeCircle(center, radius, color, width));
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb, width: u32) {
        self.0.push(Shape::Line(from, to, color, width));
    }

    fn blit(&mut self, at: Point, sprite: &Sprite) {
        self.0.push(Shape::Blit(at, sprite.clone()));
    }

    fn text(&mut self, center: Point, text: &str, size: u32, color: Rgb) {
        self.0.push(Shape::Text(center, text.to_owned(), size, color));
    }
}
