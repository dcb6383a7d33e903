//! Seat catalog.
//!
//! A classroom is a grid of seats. Rows are 1-based and counted from the
//! front, so row 1 is closest to the board. Seats flagged unavailable
//! (broken, reserved, aisle) stay in the catalog but never take part in an
//! arrangement.

use serde::{Deserialize, Serialize};

/// A physical seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Seat identifier, unique within its classroom.
    pub id: String,
    /// Row (1-based, front first).
    pub row: u32,
    /// Column (1-based).
    pub col: u32,
    /// Whether the seat can be assigned.
    pub available: bool,
}

impl Seat {
    /// Creates an available seat.
    pub fn new(id: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            id: id.into(),
            row,
            col,
            available: true,
        }
    }

    /// Marks the seat unavailable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Human-readable position, e.g. `R2-C4`.
    pub fn label(&self) -> String {
        format!("R{}-C{}", self.row, self.col)
    }
}

/// A classroom and its seat catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Classroom identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
    /// Seats in catalog order.
    pub seats: Vec<Seat>,
}

impl Classroom {
    /// Creates an empty classroom.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            rows: 0,
            cols: 0,
            seats: Vec::new(),
        }
    }

    /// Creates a fully available `rows x cols` grid.
    ///
    /// Seat ids are `"{row}-{col}"`, laid out row by row from the front.
    ///
    /// # Example
    /// ```
    /// use seat_arrange::models::Classroom;
    ///
    /// let room = Classroom::grid("R101", 5, 2);
    /// assert_eq!(room.available_seat_count(), 10);
    /// assert_eq!(room.max_row(), 5);
    /// ```
    pub fn grid(id: impl Into<String>, rows: u32, cols: u32) -> Self {
        let seats = (1..=rows)
            .flat_map(|r| (1..=cols).map(move |c| Seat::new(format!("{r}-{c}"), r, c)))
            .collect();
        Self {
            id: id.into(),
            name: String::new(),
            rows,
            cols,
            seats,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a seat, growing the grid dimensions to cover it.
    pub fn with_seat(mut self, seat: Seat) -> Self {
        self.rows = self.rows.max(seat.row);
        self.cols = self.cols.max(seat.col);
        self.seats.push(seat);
        self
    }

    /// Marks a seat unavailable by id. Unknown ids are ignored.
    pub fn with_unavailable(mut self, seat_id: &str) -> Self {
        if let Some(seat) = self.seats.iter_mut().find(|s| s.id == seat_id) {
            seat.available = false;
        }
        self
    }

    /// Available seats, in catalog order.
    pub fn available_seats(&self) -> Vec<&Seat> {
        self.seats.iter().filter(|s| s.available).collect()
    }

    /// Number of available seats.
    pub fn available_seat_count(&self) -> usize {
        self.seats.iter().filter(|s| s.available).count()
    }

    /// Largest row index among available seats (0 if none).
    pub fn max_row(&self) -> u32 {
        self.seats
            .iter()
            .filter(|s| s.available)
            .map(|s| s.row)
            .max()
            .unwrap_or(0)
    }

    /// Looks up a seat by id.
    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }
}
