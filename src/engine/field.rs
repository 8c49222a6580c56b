use super::FieldError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Bounded Game of Life field.
///
/// Cells outside the field are dead and stay dead; the neighbor window is
/// clipped at the edges, not wrapped. Updates are double-buffered: the next
/// generation is written into a scratch buffer and the two are swapped, so
/// no allocation happens per step.
pub struct LifeField {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    generation: u64,
    changed: bool,
}

impl LifeField {
    /// Create an all-dead field with the given dimensions.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        let size = width * height;
        Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            generation: 1,
            changed: false,
        }
    }

    /// `(width, height)` of the field.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells_curr[col + row * self.width]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&c| c).count()
    }

    /// Generation number, starting from 1. Incremented by [`Self::step`],
    /// reset back to 1 whenever the field is edited directly.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last operation altered at least one cell. Auto-play
    /// keeps stepping until this turns false.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Kill every cell and restart the generation count.
    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
        self.generation = 1;
        self.changed = false;
    }

    /// Repopulate the field with exactly `count` live cells at distinct
    /// positions chosen uniformly at random; every other cell dies.
    ///
    /// `seed` fixes the RNG for reproducibility (`None` seeds from entropy).
    ///
    /// Returns the chosen `(row, col)` positions in row-major order, or
    /// `SeedCountTooLarge` (leaving the field untouched) if `count` exceeds
    /// the cell count.
    pub fn randomize(
        &mut self,
        seed: Option<u64>,
        count: usize,
    ) -> Result<Vec<(usize, usize)>, FieldError> {
        let capacity = self.width * self.height;
        if count > capacity {
            return Err(FieldError::SeedCountTooLarge {
                count,
                width: self.width,
                height: self.height,
            });
        }

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut chosen = rand::seq::index::sample(&mut rng, capacity, count).into_vec();
        chosen.sort_unstable();

        self.cells_curr.fill(false);
        let mut seeded = Vec::with_capacity(count);
        for idx in chosen {
            self.cells_curr[idx] = true;
            seeded.push((idx / self.width, idx % self.width));
        }
        self.generation = 1;
        self.changed = true;
        Ok(seeded)
    }

    /// Invert a single cell, returning its new state, or `OutOfBounds`
    /// (leaving the field untouched) if the coordinates miss the grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, FieldError> {
        if row >= self.height || col >= self.width {
            return Err(FieldError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = col + row * self.width;
        self.cells_curr[idx] = !self.cells_curr[idx];
        self.generation = 1;
        self.changed = true;
        Ok(self.cells_curr[idx])
    }

    /// Advance the field by one generation of Conway's rule.
    ///
    /// The next state is computed entirely from the current buffer, then the
    /// buffers swap. The change flag records whether any cell differs from
    /// the previous generation; the generation number always advances.
    pub fn step(&mut self) {
        let mut changed = false;
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = col + row * self.width;
                let neibs = self.count_neibs(row, col);
                let next = if self.cells_curr[idx] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                changed |= next != self.cells_curr[idx];
                self.cells_next[idx] = next;
            }
        }
        std::mem::swap(&mut self.cells_curr, &mut self.cells_next);
        self.generation += 1;
        self.changed = changed;
    }

    /// Live cells in the 3x3 window around `(row, col)`, clipped at the
    /// edges, excluding the cell itself. At most 8.
    fn count_neibs(&self, row: usize, col: usize) -> usize {
        let r0 = row.saturating_sub(1);
        let r1 = (row + 2).min(self.height);
        let c0 = col.saturating_sub(1);
        let c1 = (col + 2).min(self.width);
        let mut neibs = 0;
        for r in r0..r1 {
            for c in c0..c1 {
                neibs += self.cells_curr[c + r * self.width] as usize;
            }
        }
        neibs - self.cells_curr[col + row * self.width] as usize
    }
}
