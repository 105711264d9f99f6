//! A tile-grid `ObstacleMap`/`Obstacle` implementation: the concrete
//! collaborator `slopewalk_core`'s sensors probe against. Solid tiles
//! block from every direction; cloud tiles are one-way platforms the
//! core's sensor-read step filters per its own rules.
//!
//! Grounded on the teacher's tile-grid level data (`TileMap`/`TileType`):
//! same `from_string` parsing convention, same grid-range tile scan used
//! to collect candidate rects near a query region.

use slopewalk_core::{Direction, MovMode, Obstacle, ObstacleMap};

/// What a single grid cell is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Solid,
    /// One-way platform: solid from above only, passable otherwise.
    Cloud,
}

impl TileKind {
    fn from_char(ch: char) -> Self {
        match ch {
            '#' | '\u{2588}' | '\u{2593}' => TileKind::Solid,
            '_' | '=' => TileKind::Cloud,
            _ => TileKind::Empty,
        }
    }
}

/// A single grid layer: front or back geometry for layered levels.
#[derive(Debug, Clone)]
struct TileGrid {
    tiles: Vec<Vec<TileKind>>,
    width: usize,
    height: usize,
}

impl TileGrid {
    fn from_string(data: &str) -> Self {
        let lines: Vec<&str> = data.lines().filter(|l| !l.is_empty()).collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut tiles = vec![vec![TileKind::Empty; width]; height];
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                tiles[y][x] = TileKind::from_char(ch);
            }
        }
        Self { tiles, width, height }
    }

    fn get(&self, x: i64, y: i64) -> TileKind {
        if x < 0 || y < 0 {
            return TileKind::Empty;
        }
        self.tiles
            .get(y as usize)
            .and_then(|row| row.get(x as usize).copied())
            .unwrap_or(TileKind::Empty)
    }
}

/// A single tile obstacle, sized and positioned in world space.
#[derive(Debug, Clone, Copy)]
pub struct TileObstacle {
    kind: TileKind,
    x: f32,
    y: f32,
    size: f32,
}

impl Obstacle for TileObstacle {
    fn is_solid(&self) -> bool {
        self.kind == TileKind::Solid
    }

    fn ground_position(&self, _x: f32, _y: f32, direction: Direction) -> f32 {
        match direction {
            Direction::Down => self.y,
            Direction::Up => self.y + self.size,
            Direction::Left => self.x + self.size,
            Direction::Right => self.x,
        }
    }

    fn point_collision(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }

    fn got_collision(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> bool {
        let (min_x, max_x) = (x1.min(x2), x1.max(x2));
        let (min_y, max_y) = (y1.min(y2), y1.max(y2));
        min_x < self.x + self.size && max_x > self.x && min_y < self.y + self.size && max_y > self.y
    }
}

/// A two-layer tile-grid obstacle map: `layer` 0 is front geometry,
/// any other layer value reads the back layer, mirroring the actor's
/// opaque layer tag (§6.1).
#[derive(Debug, Clone)]
pub struct TileObstacleMap {
    front: TileGrid,
    back: Option<TileGrid>,
    tile_size: f32,
}

impl TileObstacleMap {
    pub fn from_string(data: &str, tile_size: f32) -> Self {
        Self {
            front: TileGrid::from_string(data),
            back: None,
            tile_size,
        }
    }

    pub fn with_back_layer(mut self, data: &str) -> Self {
        self.back = Some(TileGrid::from_string(data));
        self
    }

    fn grid_for(&self, layer: i32) -> &TileGrid {
        if layer == 0 {
            &self.front
        } else {
            self.back.as_ref().unwrap_or(&self.front)
        }
    }

    fn cell_rect(&self, gx: i64, gy: i64) -> (f32, f32) {
        (gx as f32 * self.tile_size, gy as f32 * self.tile_size)
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn width(&self) -> usize {
        self.front.width
    }

    pub fn height(&self) -> usize {
        self.front.height
    }
}

impl ObstacleMap for TileObstacleMap {
    type Obstacle = TileObstacle;

    fn best_obstacle_at(
        &self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        _movmode: MovMode,
        layer: i32,
    ) -> Option<TileObstacle> {
        let grid = self.grid_for(layer);
        let min_gx = (x1.min(x2) / self.tile_size).floor() as i64;
        let max_gx = (x1.max(x2) / self.tile_size).floor() as i64;
        let min_gy = (y1.min(y2) / self.tile_size).floor() as i64;
        let max_gy = (y1.max(y2) / self.tile_size).floor() as i64;

        let origin_x = x1;
        let origin_y = y1;
        let mut best: Option<(f32, TileObstacle)> = None;

        for gy in min_gy..=max_gy {
            for gx in min_gx..=max_gx {
                let kind = grid.get(gx, gy);
                if kind == TileKind::Empty {
                    continue;
                }
                let (x, y) = self.cell_rect(gx, gy);
                let obstacle = TileObstacle { kind, x, y, size: self.tile_size };
                let cx = x + self.tile_size / 2.0;
                let cy = y + self.tile_size / 2.0;
                let dist = (cx - origin_x).powi(2) + (cy - origin_y).powi(2);
                if best.as_ref().map_or(true, |(best_dist, _)| dist < *best_dist) {
                    best = Some((dist, obstacle));
                }
            }
        }

        best.map(|(_, obstacle)| obstacle)
    }

    fn obstacle_exists(&self, x: f32, y: f32, layer: i32) -> bool {
        let grid = self.grid_for(layer);
        let gx = (x / self.tile_size).floor() as i64;
        let gy = (y / self.tile_size).floor() as i64;
        grid.get(gx, gy) != TileKind::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_solid_and_cloud_tiles() {
        let map = TileObstacleMap::from_string("#_\n##", 16.0);
        assert_eq!(map.front.get(0, 0), TileKind::Solid);
        assert_eq!(map.front.get(1, 0), TileKind::Cloud);
        assert_eq!(map.front.get(0, 1), TileKind::Solid);
    }

    #[test]
    fn test_best_obstacle_picks_nearest_candidate() {
        let map = TileObstacleMap::from_string("##\n##", 16.0);
        let obstacle = map
            .best_obstacle_at(0.0, 0.0, 31.0, 31.0, MovMode::Floor, 0)
            .expect("at least one solid tile in range");
        assert!(obstacle.is_solid());
    }

    #[test]
    fn test_obstacle_exists_respects_layer_fallback() {
        let map = TileObstacleMap::from_string("#", 16.0);
        assert!(map.obstacle_exists(4.0, 4.0, 0));
        // No back layer registered: falls back to front.
        assert!(map.obstacle_exists(4.0, 4.0, 1));
    }

    #[test]
    fn test_cloud_tile_is_not_solid() {
        let map = TileObstacleMap::from_string("_", 16.0);
        let obstacle = map.best_obstacle_at(0.0, 0.0, 15.0, 15.0, MovMode::Floor, 0).unwrap();
        assert!(!obstacle.is_solid());
    }
}
