//! Tile grid the level is played on.
//!
//! Dimensions are fixed once built. The only mutation is `clear_cell`,
//! used when a dot is shot or an alien is destroyed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    Dot,
    /// A cell whose dot or alien has been destroyed.
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    dots: usize,
}

impl TileGrid {
    /// Build a grid from rows of equal width.
    ///
    /// Panics if the rows are ragged; the level parser pads them first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == width),
            "tile grid rows must share one width"
        );
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let dots = cells.iter().filter(|&&c| c == Cell::Dot).count();
        TileGrid {
            cells,
            width,
            height,
            dots,
        }
    }

    /// An all-open grid, handy for building states by hand.
    pub fn open(width: usize, height: usize) -> Self {
        TileGrid::from_rows(vec![vec![Cell::Open; width]; height])
    }

    /// An open grid surrounded by a one-cell wall border.
    pub fn walled(width: usize, height: usize) -> Self {
        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        if row == 0 || col == 0 || row + 1 == height || col + 1 == width {
                            Cell::Wall
                        } else {
                            Cell::Open
                        }
                    })
                    .collect()
            })
            .collect();
        TileGrid::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Wall
    }

    /// Set a cell to `Empty`. Clearing twice is a no-op.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);
        if self.cells[i] == Cell::Dot {
            self.dots -= 1;
        }
        self.cells[i] = Cell::Empty;
    }

    pub fn dots_remaining(&self) -> usize {
        self.dots
    }

    /// Leftmost and rightmost columns holding at least one non-wall cell.
    pub fn walkable_columns(&self) -> Option<(usize, usize)> {
        let walkable = |col: &usize| (0..self.height).any(|row| !self.is_wall(row, *col));
        let left = (0..self.width).find(walkable)?;
        let right = (0..self.width).rev().find(walkable)?;
        Some((left, right))
    }

    /// Iterate rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero chunk size
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}
