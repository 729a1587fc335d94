//! Sand digging simulation
//!
//! The player picks a scoop from a small inventory, then clicks a cell to dig
//! a square of sand. Every dug cell gets one level deeper and pays
//! `points * depth²`, so re-digging the same spot is worth more each time.
//! The game ends when the turns run out.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::shapes::Rect;
use crate::settings::DigSettings;

/// Scoop variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Mini,
    Standard,
    Medium,
    Big,
}

/// Every scoop that can be drawn into an inventory slot
pub const TOOL_CATALOG: [ToolKind; 4] = [ToolKind::Mini, ToolKind::Standard, ToolKind::Medium, ToolKind::Big];

impl ToolKind {
    /// Side length of the square this scoop digs (always >= 1)
    pub fn footprint(self) -> usize {
        match self {
            ToolKind::Mini => 1,
            ToolKind::Standard => 2,
            ToolKind::Medium => 3,
            ToolKind::Big => 4,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::Mini => "Digs a single cell",
            ToolKind::Standard => "Digs 4 cells",
            ToolKind::Medium => "Digs 9 cells",
            ToolKind::Big => "Digs 16 cells",
        }
    }
}

/// Dig depth per cell, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl DigGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Resize to `width` x `height` and fill with zeros
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, 0);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Depth of a cell, `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.index(x, y).map(|i| self.cells[i])
    }

    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut u32> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Rows of cell depths, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks() panics on zero; an empty grid simply has no rows
        self.cells.chunks(self.width.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The square of cells one scoop use affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Top-left cell
    pub x: usize,
    pub y: usize,
    /// Side length
    pub size: usize,
}

impl Footprint {
    /// Clamp a `size` x `size` square at `(cell_x, cell_y)` so it stays on the grid.
    ///
    /// Known quirk: the y origin is bounded by the grid *width*, not its
    /// height. On square grids this is exact; on tall or wide grids the
    /// footprint may be shifted or clipped at the bottom edge.
    pub fn clamped(cell_x: usize, cell_y: usize, size: usize, grid: &DigGrid) -> Self {
        let bound = grid.width().saturating_sub(size);
        Self {
            x: cell_x.min(bound),
            y: cell_y.min(bound),
            size,
        }
    }

    /// All `(x, y)` cells covered, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let Footprint { x, y, size } = *self;
        (y..y + size).flat_map(move |cy| (x..x + size).map(move |cx| (cx, cy)))
    }
}

/// One inventory slot: a scoop bound to an on-screen region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSlot {
    pub tool: ToolKind,
    pub region: Rect,
    pub index: usize,
}

/// Currently selected scoop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Armed {
    pub tool: ToolKind,
    /// Slot the scoop came from (`None` for the fixed tool)
    pub slot: Option<usize>,
}

/// Result of a successful dig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigReport {
    pub footprint: Footprint,
    /// Points gained by this dig
    pub gained: u64,
    pub turns_remaining: u32,
    /// True exactly once: on the dig that used the last turn
    pub terminal: bool,
}

/// Sand digging game state
#[derive(Debug, Clone)]
pub struct DigSimulation<R: Rng = Pcg32> {
    grid: DigGrid,
    inventory: Vec<ItemSlot>,
    armed: Option<Armed>,
    inventory_enabled: bool,
    turns_remaining: u32,
    score: u64,
    points: u64,
    rng: R,
}

impl<R: Rng> DigSimulation<R> {
    /// Start a game. `grid` is cleared and resized to the configured size.
    pub fn new(settings: &DigSettings, mut grid: DigGrid, rng: R) -> Self {
        grid.reset(settings.width, settings.height);

        let (inventory, armed) = if settings.inventory_enabled {
            let slots = settings
                .slot_centers
                .iter()
                .zip(&settings.initial_tools)
                .enumerate()
                .map(|(index, (&center, &tool))| ItemSlot {
                    tool,
                    region: Rect::from_center(center, glam::Vec2::splat(settings.slot_size)),
                    index,
                })
                .collect();
            (slots, None)
        } else {
            let fixed = Armed {
                tool: settings.fixed_tool,
                slot: None,
            };
            (Vec::new(), Some(fixed))
        };

        Self {
            grid,
            inventory,
            armed,
            inventory_enabled: settings.inventory_enabled,
            turns_remaining: settings.turns,
            score: 0,
            points: settings.points,
            rng,
        }
    }

    /// Toggle selection: arms the scoop in slot `index`, or disarms if
    /// something is already armed. Returns whether a scoop is now armed.
    pub fn select_slot(&mut self, index: usize) -> bool {
        if !self.inventory_enabled || self.is_finished() {
            return self.armed.is_some();
        }

        if self.armed.take().is_some() {
            log::debug!("Scoop put down");
            return false;
        }

        match self.inventory.get(index) {
            Some(slot) => {
                log::debug!("Armed {:?} from slot {}", slot.tool, index);
                self.armed = Some(Armed {
                    tool: slot.tool,
                    slot: Some(index),
                });
                true
            }
            None => false,
        }
    }

    /// Dig with the armed scoop at `(cell_x, cell_y)`.
    ///
    /// Returns `None` (and changes nothing) when nothing is armed or the
    /// game is over. Positions past the grid edge are clamped.
    pub fn dig_at(&mut self, cell_x: usize, cell_y: usize) -> Option<DigReport> {
        if self.is_finished() {
            return None;
        }
        let armed = self.armed?;

        let footprint = Footprint::clamped(cell_x, cell_y, armed.tool.footprint(), &self.grid);
        let mut gained = 0;
        for (x, y) in footprint.cells() {
            // Only the width-bounded y origin can push a cell off the grid
            let Some(depth) = self.grid.get_mut(x, y) else {
                continue;
            };
            *depth += 1;
            let depth = u64::from(*depth);
            gained += self.points * depth * depth;
        }
        self.score += gained;
        self.turns_remaining -= 1;

        // The scoop stays in hand; only its slot is restocked
        if let Some(slot) = armed.slot {
            let tool = TOOL_CATALOG[self.rng.random_range(0..TOOL_CATALOG.len())];
            self.inventory[slot].tool = tool;
        }

        log::debug!(
            "Dug {:?} at ({}, {}) for {} points, {} turns left",
            armed.tool,
            footprint.x,
            footprint.y,
            gained,
            self.turns_remaining
        );

        Some(DigReport {
            footprint,
            gained,
            turns_remaining: self.turns_remaining,
            terminal: self.turns_remaining == 0,
        })
    }

    /// Footprint a dig at `(cell_x, cell_y)` would cover, if armed
    pub fn preview(&self, cell_x: usize, cell_y: usize) -> Option<Footprint> {
        if self.is_finished() {
            return None;
        }
        let armed = self.armed?;
        Some(Footprint::clamped(cell_x, cell_y, armed.tool.footprint(), &self.grid))
    }

    pub fn is_finished(&self) -> bool {
        self.turns_remaining == 0
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn armed(&self) -> Option<Armed> {
        self.armed
    }

    pub fn inventory(&self) -> &[ItemSlot] {
        &self.inventory
    }

    pub fn grid(&self) -> &DigGrid {
        &self.grid
    }

    /// Hand the grid back, leaving an empty one behind
    pub fn take_grid(&mut self) -> DigGrid {
        std::mem::take(&mut self.grid)
    }
}
