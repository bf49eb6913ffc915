/// Delay between a flip click and the cell counting as flipped, in milliseconds.
pub const FLIP_SETTLE_DELAY: f64 = 50.0;
/// Time a flipping cell ignores further clicks, in milliseconds.
pub const FLIP_LOCK: f64 = 800.0;
/// Time an unflip takes, during which the cell ignores clicks, in milliseconds.
pub const UNFLIP_DURATION: f64 = 800.0;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Click {
    /// The cell started turning face up; the host should play the flip effects.
    Flip,
    /// The cell started turning back face down.
    Unflip,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum GridEvent {
    Flipped(usize, usize),
    Unflipped(usize, usize),
    /// Every cell is face up.
    Completed,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    click: Click,
    settle_at: f64,
    unlock_at: f64,
    settled: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct Cell {
    flipped: bool,
    transition: Option<Transition>,
}

/// Flip state of a square grid of cells, driven by clicks and the frame clock.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Grid {
        Grid {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    pub fn is_flipped(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .map_or(false, |index| self.cells[index].flipped)
    }

    pub fn all_flipped(&self) -> bool {
        self.cells.iter().all(|cell| cell.flipped)
    }

    /// Whether any cell is still mid-transition.
    pub fn is_animating(&self) -> bool {
        self.cells.iter().any(|cell| cell.transition.is_some())
    }

    /// Base hue for effects of a cell, sweeping from blue in the top-left corner to
    /// purple in the bottom-right.
    pub fn hue_base(&self, row: usize, col: usize) -> f64 {
        let span = (self.size * 2).saturating_sub(2);

        if span == 0 {
            240.0
        } else {
            240.0 + (row + col) as f64 / span as f64 * 60.0
        }
    }

    /// Starts a transition on the cell, unless it is out of bounds or still animating.
    pub fn click(&mut self, row: usize, col: usize, now: f64) -> Option<Click> {
        let index = self.index(row, col)?;
        let cell = &mut self.cells[index];

        if cell.transition.is_some() {
            return None;
        }

        let transition = if cell.flipped {
            Transition {
                click: Click::Unflip,
                settle_at: now + UNFLIP_DURATION,
                unlock_at: now + UNFLIP_DURATION,
                settled: false,
            }
        } else {
            Transition {
                click: Click::Flip,
                settle_at: now + FLIP_SETTLE_DELAY,
                unlock_at: now + FLIP_LOCK,
                settled: false,
            }
        };

        cell.transition = Some(transition);

        Some(transition.click)
    }

    /// Applies every transition step that is due at `now` and reports what changed.
    pub fn update(&mut self, now: f64) -> Vec<GridEvent> {
        let mut events = Vec::new();

        for index in 0..self.cells.len() {
            let (row, col) = (index / self.size, index % self.size);

            let Some(mut transition) = self.cells[index].transition else {
                continue;
            };

            if !transition.settled && now >= transition.settle_at {
                transition.settled = true;

                match transition.click {
                    Click::Flip => {
                        self.cells[index].flipped = true;
                        events.push(GridEvent::Flipped(row, col));

                        if self.all_flipped() {
                            events.push(GridEvent::Completed);
                        }
                    }
                    Click::Unflip => {
                        self.cells[index].flipped = false;
                        events.push(GridEvent::Unflipped(row, col));
                    }
                }
            }

            self.cells[index].transition = if transition.settled && now >= transition.unlock_at {
                None
            } else {
                Some(transition)
            };
        }

        events
    }
}
