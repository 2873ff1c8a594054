use crate::hostcolor::HostColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<C> {
    Off,
    Color(C),
}

impl<C> Cell<C> {
    pub fn is_off(&self) -> bool {
        matches!(self, Cell::Off)
    }

    pub fn or_off(self, off: C) -> C {
        match self {
            Cell::Off => off,
            Cell::Color(color) => color,
        }
    }
}

/// A `height` x `width` grid, indexed `[y][x]` like the host expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMap<C> {
    width: usize,
    rows: Vec<Vec<Cell<C>>>,
}

impl<C: Clone> PixelMap<C> {
    pub fn filled(width: usize, height: usize, cell: Cell<C>) -> PixelMap<C> {
        PixelMap {
            width,
            rows: vec![vec![cell; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell<C>> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    pub fn rows(&self) -> &[Vec<Cell<C>>] {
        &self.rows
    }

    pub fn to_host(&self, off: C) -> Vec<Vec<C>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.clone().or_off(off.clone()))
                    .collect()
            })
            .collect()
    }
}

impl<C: PartialEq> PixelMap<C> {
    pub fn is_uniform(&self) -> bool {
        let mut cells = self.rows.iter().flatten();
        match cells.next() {
            Some(first) => cells.all(|cell| cell == first),
            None => true,
        }
    }
}

impl PixelMap<HostColor> {
    pub fn to_json(&self) -> json::JsonValue {
        let rows = self
            .to_host(HostColor::OFF)
            .into_iter()
            .map(|row| json::JsonValue::Array(row.into_iter().map(|c| c.into()).collect()))
            .collect();
        json::JsonValue::Array(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_follow_constructor() {
        let map = PixelMap::filled(4, 3, Cell::Color("red"));
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 3);
        assert_eq!(map.rows().len(), 3);
        assert!(map.rows().iter().all(|row| row.len() == 4));
        assert_eq!(map.get(3, 2), Some(&Cell::Color("red")));
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, 3), None);
    }

    #[test]
    fn empty_maps() {
        let map: PixelMap<u32> = PixelMap::filled(0, 2, Cell::Off);
        assert_eq!(map.height(), 2);
        assert!(map.rows().iter().all(|row| row.is_empty()));
        assert!(map.is_uniform());

        let map: PixelMap<u32> = PixelMap::filled(5, 0, Cell::Off);
        assert_eq!(map.height(), 0);
        assert!(map.is_uniform());
    }

    #[test]
    fn off_cells_become_zero_on_the_wire() {
        let map = PixelMap::filled(2, 1, Cell::<HostColor>::Off);
        assert_eq!(json::stringify(map.to_json()), "[[0,0]]");

        let map = PixelMap::filled(2, 2, Cell::Color(HostColor(0xff0000)));
        assert_eq!(
            json::stringify(map.to_json()),
            "[[16711680,16711680],[16711680,16711680]]"
        );
    }

    #[test]
    fn uniformity_detects_mixed_cells() {
        let mut map = PixelMap::filled(2, 2, Cell::Color(1u32));
        assert!(map.is_uniform());
        map.rows[1][0] = Cell::Off;
        assert!(!map.is_uniform());
    }
}
