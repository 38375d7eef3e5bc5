/// Chess domain types and the rules of the game.
pub mod chess;
/// The game loop and its collaborators.
pub mod game;
/// Board geometry, move selection and rendering.
pub mod ui;
