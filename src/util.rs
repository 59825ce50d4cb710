use crate::consts;
use crate::level::template::LevelTemplate;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::time::Duration;

/// Values shared by all screens and threaded from one to the next as the
/// user moves through the application
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    /// The level to (re)build play sessions from
    pub(crate) template: LevelTemplate,

    /// Time between simulation frames
    pub(crate) frame_period: Duration,
}

impl Default for Globals {
    fn default() -> Globals {
        Globals {
            template: LevelTemplate::builtin(),
            frame_period: consts::FRAME_PERIOD,
        }
    }
}

/// Return the central 80x24 (or smaller) area of the terminal in which all
/// drawing takes place
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return a `Rect` of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

/// Navigation helpers for field-less `Enum` types
pub(crate) trait EnumExt: Enum + Copy {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum + Copy> EnumExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Tribool {
        No,
        Maybe,
        Yes,
    }

    #[test]
    fn enum_ext_endpoints() {
        assert_eq!(Tribool::min(), Tribool::No);
        assert_eq!(Tribool::max(), Tribool::Yes);
        assert_eq!(
            Tribool::iter().collect::<Vec<_>>(),
            [Tribool::No, Tribool::Maybe, Tribool::Yes]
        );
    }

    #[rstest]
    #[case(Tribool::No, None, Some(Tribool::Maybe))]
    #[case(Tribool::Maybe, Some(Tribool::No), Some(Tribool::Yes))]
    #[case(Tribool::Yes, Some(Tribool::Maybe), None)]
    fn enum_ext_steps(
        #[case] value: Tribool,
        #[case] prev: Option<Tribool>,
        #[case] next: Option<Tribool>,
    ) {
        assert_eq!(value.prev(), prev);
        assert_eq!(value.next(), next);
    }

    #[test]
    fn display_area_centered() {
        let display = get_display_area(Rect::new(0, 0, 100, 30));
        assert_eq!(display, Rect::new(10, 3, 80, 24));
    }

    #[test]
    fn display_area_small_terminal() {
        let display = get_display_area(Rect::new(0, 0, 40, 12));
        assert_eq!(display.width, 40);
        assert_eq!(display.height, 12);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 6), Rect::new(30, 9, 20, 6))]
    #[case(Rect::new(10, 10, 20, 10), Size::new(10, 4), Rect::new(15, 13, 10, 4))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] expected: Rect) {
        assert_eq!(center_rect(area, size), expected);
    }
}
