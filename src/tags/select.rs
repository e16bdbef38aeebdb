//! Picture selection, independent of any tag library.
//!
//! Adapters map their native picture type onto [`PictureKind`] and ask one of
//! these functions which index to rewrite.

/// Adapter-neutral picture role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureKind {
    /// Picture type 3, "Cover (front)".
    FrontCover,
    Other,
}

/// Index of the first front cover, ignoring every other picture type.
///
/// Used where the container tracks picture types and more than one picture
/// may be embedded.
pub fn select_front_cover<I>(kinds: I) -> Option<usize>
where
    I: IntoIterator<Item = PictureKind>,
{
    kinds
        .into_iter()
        .position(|kind| kind == PictureKind::FrontCover)
}

/// Index of the first picture regardless of its type.
pub fn select_first<I>(kinds: I) -> Option<usize>
where
    I: IntoIterator<Item = PictureKind>,
{
    kinds.into_iter().next().map(|_| 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PictureKind::{FrontCover, Other};

    #[test]
    fn front_cover_skips_leading_other_pictures() {
        assert_eq!(select_front_cover([Other, Other, FrontCover]), Some(2));
    }

    #[test]
    fn front_cover_takes_the_first_of_several() {
        assert_eq!(select_front_cover([FrontCover, Other, FrontCover]), Some(0));
    }

    #[test]
    fn front_cover_none_without_type_three() {
        assert_eq!(select_front_cover([Other, Other]), None);
        assert_eq!(select_front_cover(Vec::<PictureKind>::new()), None);
    }

    #[test]
    fn first_ignores_type() {
        assert_eq!(select_first([Other, FrontCover]), Some(0));
        assert_eq!(select_first(Vec::<PictureKind>::new()), None);
    }
}
