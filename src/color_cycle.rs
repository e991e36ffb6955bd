use std::collections::VecDeque;

use crate::Color;

/// The palette a new figure cycles through.
pub const DEFAULT_COLORS: [Color; 9] = [
    Color::from_rgb8(255, 59, 59),
    Color::from_rgb8(52, 71, 217),
    Color::from_rgb8(4, 168, 2),
    Color::from_rgb8(224, 146, 0),
    Color::from_rgb8(224, 0, 183),
    Color::from_rgb8(0, 230, 214),
    Color::from_rgb8(140, 0, 0),
    Color::from_rgb8(9, 0, 140),
    Color::from_rgb8(107, 0, 96),
];

/// Round-robin queue of default trace colors.
///
/// Each pick returns the front color and moves it to the back.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    queue: VecDeque<Color>,
}

impl ColorCycle {
    /// Create a cycle over `palette`. An empty palette falls back to [`DEFAULT_COLORS`].
    pub fn new(palette: impl IntoIterator<Item = Color>) -> Self {
        let queue: VecDeque<Color> = palette.into_iter().collect();
        if queue.is_empty() {
            return Self::default();
        }
        Self { queue }
    }

    /// Take the next color.
    pub fn pick(&mut self) -> Color {
        // The queue is never empty.
        let color = self.queue[0];
        self.queue.rotate_left(1);
        log::trace!(target: "plot_facade", "picked default color {color:?}");
        color
    }

    /// The color the next [`pick`](Self::pick) returns.
    pub fn peek(&self) -> Color {
        self.queue[0]
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self {
            queue: DEFAULT_COLORS.into_iter().collect(),
        }
    }
}
