//! Shape module - piece geometry declared by the settings stream
//!
//! Pieces arrive entirely over the wire: an id, an edge size, and one
//! square cell grid per rotation. A shape precomputes its occupied
//! coordinates at construction; grid and coordinate list cannot drift
//! apart because neither is mutable afterwards.

/// Position of one occupied cell, relative to the shape's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// One rotation of a piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
    coords: Vec<Coord>,
}

impl Shape {
    /// Build a shape from its cell grid, row-major top to bottom.
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        let mut coords = Vec::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                if occupied {
                    coords.push(Coord::new(row as i32, col as i32));
                }
            }
        }
        Self { rows, coords }
    }

    /// Edge length of the grid
    pub fn size(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Cell grid, row-major
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Occupied cells in row-major order
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
}

/// A piece and its rotations, in server-declared order.
///
/// Rotation counts are not bounded: the standard pieces use one to four,
/// but the model takes whatever the stream declares.
#[derive(Debug, Clone)]
pub struct Piece {
    pub id: char,
    pub size: i32,
    pub shapes: Vec<Shape>,
}

impl Piece {
    pub fn new(id: char, size: i32) -> Self {
        Self {
            id,
            size,
            shapes: Vec::new(),
        }
    }
}
