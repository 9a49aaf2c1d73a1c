//! Hard AI: a four-state machine over BFS, visibility, spiral search and
//! intercept planning.
//!
//! - Hunt: the target is (or just was) in sight; chase it, then its last
//!   known position.
//! - Search: walk a spiral of waypoints around the last known position.
//! - Intercept: extrapolate the target's motion and cut it off on the way to
//!   the exit.
//! - Patrol: alternate between the exit and the map center.
//!
//! Seeing the target always snaps back to Hunt. Otherwise the state decays
//! with the number of turns since the last sighting.

use micromegas_tracing::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::intercept::find_intercept;
use crate::ai::pathfinder::{distance, first_step};
use crate::ai::spiral::spiral_search;
use crate::ai::visibility::has_line_of_sight;
use crate::ai::{Difficulty, Strategy, StrategySnapshot};
use crate::components::Position;
use crate::config::HardTuning;
use crate::error::AiError;
use crate::grid::{GridQuery, GridView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardState {
    Hunt,
    Search,
    Intercept,
    Patrol,
}

/// Hard memory minus the spiral path, which is re-derived from its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardSnapshot {
    pub state: HardState,
    pub last_known_player: Option<Position>,
    pub previous_player: Option<Position>,
    pub turns_since_last_seen: u32,
    pub search_center: Option<Position>,
    pub search_index: usize,
}

#[derive(Debug, Clone)]
pub struct HardAi {
    tuning: HardTuning,
    exit: Position,
    state: HardState,
    last_known_player: Option<Position>,
    previous_player: Option<Position>,
    turns_since_last_seen: u32,
    search_center: Option<Position>,
    search_path: Vec<Position>,
    search_index: usize,
}

impl HardAi {
    /// Fails with [`AiError::InvalidConfig`] on tuning that would stall the
    /// state machine.
    pub fn new(exit: Position, tuning: HardTuning) -> Result<Self, AiError> {
        tuning.validate()?;
        info!("hard ai ready, guarding exit {}", exit);
        Ok(Self {
            tuning,
            exit,
            state: HardState::Patrol,
            last_known_player: None,
            previous_player: None,
            turns_since_last_seen: 0,
            search_center: None,
            search_path: Vec::new(),
            search_index: 0,
        })
    }

    /// Reads the exit from the grid.
    pub fn from_grid(grid: &dyn GridQuery, tuning: HardTuning) -> Result<Self, AiError> {
        GridView::new(grid)?;
        let exit = grid.exit_position().ok_or(AiError::MissingExit)?;
        Self::new(exit, tuning)
    }

    pub fn state(&self) -> HardState {
        self.state
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn last_known_player(&self) -> Option<Position> {
        self.last_known_player
    }

    pub fn turns_since_last_seen(&self) -> u32 {
        self.turns_since_last_seen
    }

    pub fn search_path(&self) -> &[Position] {
        &self.search_path
    }

    pub fn search_index(&self) -> usize {
        self.search_index
    }

    fn enter(&mut self, next: HardState) {
        if self.state != next {
            debug!(
                "hard ai {:?} -> {:?} after {} unseen turns",
                self.state, next, self.turns_since_last_seen
            );
            self.state = next;
        }
    }

    fn sighted(&mut self, target: Position) {
        self.enter(HardState::Hunt);
        self.last_known_player = Some(target);
        self.previous_player = Some(target);
        self.turns_since_last_seen = 0;
    }

    fn begin_search(&mut self, grid: &GridView<'_>) {
        self.enter(HardState::Search);
        self.search_center = self.last_known_player;
        self.search_path = self
            .search_center
            .map(|center| spiral_search(center, self.tuning.search_radius, grid))
            .unwrap_or_default();
        self.search_index = 0;
    }

    /// Time-based decay, at most one transition per turn.
    fn decay(&mut self, grid: &GridView<'_>) {
        let unseen = self.turns_since_last_seen;
        match self.state {
            HardState::Hunt if unseen >= self.tuning.search_after() => self.begin_search(grid),
            HardState::Search if unseen >= self.tuning.intercept_after() => {
                self.enter(HardState::Intercept)
            }
            HardState::Intercept if unseen >= self.tuning.patrol_after() => {
                self.enter(HardState::Patrol)
            }
            _ => {}
        }
    }

    fn hunt(&mut self, mummy: Position, grid: &GridView<'_>) -> Position {
        match self.last_known_player {
            Some(last_known) if last_known != mummy => first_step(mummy, last_known, grid),
            _ => {
                self.begin_search(grid);
                mummy
            }
        }
    }

    fn search(&mut self, mummy: Position, grid: &GridView<'_>) -> Position {
        let Some(&waypoint) = self.search_path.get(self.search_index) else {
            self.enter(HardState::Intercept);
            return mummy;
        };
        if mummy != waypoint {
            return first_step(mummy, waypoint, grid);
        }
        self.search_index += 1;
        match self.search_path.get(self.search_index) {
            Some(&next) => first_step(mummy, next, grid),
            None => mummy,
        }
    }

    /// Last known position pushed one more step along the observed motion.
    fn suspected_player(&self, grid: &GridView<'_>) -> Position {
        let Some(last_known) = self.last_known_player else {
            return self.exit;
        };
        let (vrow, vcol) = self
            .previous_player
            .map_or((0, 0), |prev| (last_known.row - prev.row, last_known.col - prev.col));
        grid.clamp_interior(Position::new(last_known.row + vrow, last_known.col + vcol))
    }

    fn intercept(&self, mummy: Position, grid: &GridView<'_>) -> Position {
        let suspect = self.suspected_player(grid);
        let waypoint = find_intercept(mummy, suspect, self.exit, grid);
        if mummy != waypoint {
            return first_step(mummy, waypoint, grid);
        }
        if distance(mummy, self.exit, grid) > self.tuning.exit_guard_distance {
            first_step(mummy, self.exit, grid)
        } else {
            mummy
        }
    }

    fn patrol(&self, mummy: Position, grid: &GridView<'_>) -> Position {
        let center = grid.center();
        let period = self.tuning.patrol_period;
        let (goal, other) = if self.turns_since_last_seen % period < period / 2 {
            (self.exit, center)
        } else {
            (center, self.exit)
        };
        let goal = if mummy == goal { other } else { goal };
        first_step(mummy, goal, grid)
    }
}

impl Strategy for HardAi {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn decide_move(
        &mut self,
        mummy: Position,
        target: Position,
        grid: &dyn GridQuery,
    ) -> Result<Position, AiError> {
        span_scope!("hard_ai");
        let grid = GridView::new(grid)?;
        grid.check_inside(mummy)?;

        if has_line_of_sight(mummy, target, &grid) {
            self.sighted(target);
            let next = first_step(mummy, target, &grid);
            if has_line_of_sight(next, target, &grid) {
                self.sighted(target);
            }
            return Ok(next);
        }

        self.turns_since_last_seen += 1;
        self.decay(&grid);

        let next = match self.state {
            HardState::Hunt => self.hunt(mummy, &grid),
            HardState::Search => self.search(mummy, &grid),
            HardState::Intercept => self.intercept(mummy, &grid),
            HardState::Patrol => self.patrol(mummy, &grid),
        };

        self.previous_player = Some(target);

        if has_line_of_sight(next, target, &grid) {
            self.sighted(target);
        }
        Ok(next)
    }

    fn snapshot(&self) -> StrategySnapshot {
        StrategySnapshot::Hard(HardSnapshot {
            state: self.state,
            last_known_player: self.last_known_player,
            previous_player: self.previous_player,
            turns_since_last_seen: self.turns_since_last_seen,
            search_center: self.search_center,
            search_index: self.search_index,
        })
    }

    fn restore(&mut self, snapshot: &StrategySnapshot, grid: &dyn GridQuery) -> Result<(), AiError> {
        let grid = GridView::new(grid)?;
        let saved = match snapshot {
            StrategySnapshot::Hard(saved) => saved,
            other => {
                warn!("hard ai ignoring {} snapshot", other.difficulty());
                return Err(AiError::SnapshotMismatch {
                    expected: Difficulty::Hard,
                    found: other.difficulty(),
                });
            }
        };

        let search_path = match (saved.state, saved.search_center) {
            (HardState::Search, Some(center)) => {
                spiral_search(center, self.tuning.search_radius, &grid)
            }
            _ => Vec::new(),
        };
        if saved.state == HardState::Search && saved.search_index > search_path.len() {
            warn!(
                "hard ai search cursor {} past path of {} cells",
                saved.search_index,
                search_path.len()
            );
            return Err(AiError::SearchCursorOutOfRange {
                index: saved.search_index,
                len: search_path.len(),
            });
        }

        self.state = saved.state;
        self.last_known_player = saved.last_known_player;
        self.previous_player = saved.previous_player;
        self.turns_since_last_seen = saved.turns_since_last_seen;
        self.search_center = saved.search_center;
        self.search_path = search_path;
        self.search_index = saved.search_index;
        info!("hard ai restored in {:?}", self.state);
        Ok(())
    }
}
