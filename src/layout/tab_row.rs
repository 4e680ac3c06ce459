//! Tab row measurement with Taffy.
//!
//! Builds a one-level flex row (root + one leaf per tab) and reads back each
//! tab button's box in the row's coordinate space. The boxes are what a
//! real host would report through its measurement callbacks.

use taffy::{
    AlignItems, AvailableSpace, Dimension, FlexDirection, JustifyContent, LengthPercentage, Rect,
    Size, Style, TaffyTree,
};
use unicode_width::UnicodeWidthStr;

use crate::error::TabBarError;
use crate::types::{EdgeInsets, RenderSet, TabLayout, TabLayoutMode};

/// Intrinsic size of one tab's content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabContentSize {
    pub width: f32,
    pub height: f32,
}

/// Display width of a label in terminal cells.
pub fn label_width(text: &str) -> f32 {
    UnicodeWidthStr::width(text) as f32
}

/// Content size for a tab showing `parts`. The icon is `icon_size` square;
/// a label is one row tall.
pub fn content_size(parts: RenderSet, label: Option<&str>, icon_size: f32) -> TabContentSize {
    let label_w = if parts.contains(RenderSet::LABEL) {
        label.map(label_width).unwrap_or(0.0)
    } else {
        0.0
    };
    let (icon_w, icon_h) = if parts.contains(RenderSet::ICON) {
        (icon_size, icon_size)
    } else {
        (0.0, 0.0)
    };
    let label_h = if parts.contains(RenderSet::LABEL) { 1.0 } else { 0.0 };

    TabContentSize {
        width: label_w.max(icon_w),
        height: icon_h + label_h,
    }
}

fn layout_error(err: impl std::fmt::Debug) -> TabBarError {
    TabBarError::Layout(format!("{err:?}"))
}

fn to_taffy_padding(padding: &EdgeInsets) -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(padding.top),
        right: LengthPercentage::Length(padding.right),
        bottom: LengthPercentage::Length(padding.bottom),
        left: LengthPercentage::Length(padding.left),
    }
}

fn tab_style(item: &TabContentSize, row_height: f32, mode: TabLayoutMode) -> Style {
    match mode {
        TabLayoutMode::Stretch => Style {
            flex_grow: 1.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Length(0.0),
            size: Size {
                width: Dimension::Auto,
                height: Dimension::Length(row_height),
            },
            ..Default::default()
        },
        TabLayoutMode::Compact => Style {
            flex_grow: 0.0,
            flex_shrink: 1.0,
            size: Size {
                width: Dimension::Length(item.width),
                height: Dimension::Length(row_height),
            },
            ..Default::default()
        },
    }
}

/// Lay out a row of tabs `row_width` wide.
///
/// Returns one box per item, in item order. Boxes include the row padding
/// offset. All tabs share the height of the tallest content.
pub fn compute_tab_row(
    items: &[TabContentSize],
    row_width: f32,
    padding: &EdgeInsets,
    mode: TabLayoutMode,
) -> Result<Vec<TabLayout>, TabBarError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    if padding.horizontal() >= row_width {
        log::warn!(
            "tab row padding ({}) leaves no room in a row {row_width} wide",
            padding.horizontal()
        );
    }

    let row_height = items.iter().map(|item| item.height).fold(0.0, f32::max);
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let mut children = Vec::with_capacity(items.len());
    for item in items {
        let node = tree
            .new_leaf(tab_style(item, row_height, mode))
            .map_err(layout_error)?;
        children.push(node);
    }

    let root_style = Style {
        flex_direction: FlexDirection::Row,
        justify_content: Some(match mode {
            TabLayoutMode::Stretch => JustifyContent::FlexStart,
            TabLayoutMode::Compact => JustifyContent::SpaceAround,
        }),
        align_items: Some(AlignItems::Center),
        size: Size {
            width: Dimension::Length(row_width),
            height: Dimension::Auto,
        },
        padding: to_taffy_padding(padding),
        ..Default::default()
    };
    let root = tree
        .new_with_children(root_style, &children)
        .map_err(layout_error)?;

    let available = Size {
        width: AvailableSpace::Definite(row_width),
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root, available).map_err(layout_error)?;

    children
        .iter()
        .map(|&node| {
            let layout = tree.layout(node).map_err(layout_error)?;
            Ok(TabLayout::new(
                layout.location.x,
                layout.location.y,
                layout.size.width,
                layout.size.height,
            ))
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(width: f32) -> TabContentSize {
        TabContentSize { width, height: 2.0 }
    }

    #[test]
    fn test_content_size_follows_render_set() {
        let both = RenderSet::ICON | RenderSet::LABEL;
        assert_eq!(
            content_size(both, Some("Home"), 1.0),
            TabContentSize { width: 4.0, height: 2.0 }
        );
        assert_eq!(
            content_size(RenderSet::ICON, Some("Home"), 1.0),
            TabContentSize { width: 1.0, height: 1.0 }
        );
        assert_eq!(
            content_size(RenderSet::LABEL, Some("Home"), 3.0),
            TabContentSize { width: 4.0, height: 1.0 }
        );
        // Wide characters take two cells
        assert_eq!(label_width("设置"), 4.0);
    }

    #[test]
    fn test_stretch_splits_row_evenly() {
        let boxes = compute_tab_row(
            &[item(4.0), item(10.0), item(6.0)],
            300.0,
            &EdgeInsets::ZERO,
            TabLayoutMode::Stretch,
        )
        .unwrap();

        assert_eq!(boxes.len(), 3);
        for (i, tab) in boxes.iter().enumerate() {
            assert_eq!(tab.x, 100.0 * i as f32);
            assert_eq!(tab.width, 100.0);
            assert_eq!(tab.height, 2.0);
        }
    }

    #[test]
    fn test_stretch_respects_padding() {
        let padding = EdgeInsets {
            top: 1.0,
            right: 30.0,
            bottom: 1.0,
            left: 30.0,
        };
        let boxes = compute_tab_row(
            &[item(4.0), item(4.0), item(4.0)],
            300.0,
            &padding,
            TabLayoutMode::Stretch,
        )
        .unwrap();

        assert_eq!(boxes[0].x, 30.0);
        assert_eq!(boxes[1].x, 110.0);
        assert_eq!(boxes[2].x, 190.0);
        assert!(boxes.iter().all(|b| b.width == 80.0 && b.y == 1.0));
    }

    #[test]
    fn test_compact_spaces_around() {
        let boxes = compute_tab_row(
            &[item(10.0), item(20.0), item(30.0)],
            120.0,
            &EdgeInsets::ZERO,
            TabLayoutMode::Compact,
        )
        .unwrap();

        assert_eq!(boxes[0], TabLayout::new(10.0, 0.0, 10.0, 2.0));
        assert_eq!(boxes[1], TabLayout::new(40.0, 0.0, 20.0, 2.0));
        assert_eq!(boxes[2], TabLayout::new(80.0, 0.0, 30.0, 2.0));
    }

    #[test]
    fn test_padding_wider_than_row_collapses_tabs() {
        let boxes = compute_tab_row(
            &[item(4.0), item(4.0)],
            40.0,
            &EdgeInsets {
                left: 30.0,
                right: 30.0,
                ..EdgeInsets::ZERO
            },
            TabLayoutMode::Stretch,
        )
        .unwrap();

        assert_eq!(boxes.len(), 2);
        assert!(boxes.iter().all(|b| b.width == 0.0));
    }

    #[test]
    fn test_empty_row() {
        let boxes =
            compute_tab_row(&[], 80.0, &EdgeInsets::ZERO, TabLayoutMode::Stretch).unwrap();
        assert!(boxes.is_empty());
    }
}
