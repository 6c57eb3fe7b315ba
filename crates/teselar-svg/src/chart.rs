//! Chart assembly and SVG serialization.
//!
//! A [`Chart`] binds the pieces together: it lays the hierarchy's leaves
//! out inside a [`Frame`], assigns category colors in tile order, computes
//! the legend, and serializes the whole scene as one `<svg>` element.

use std::fmt::Write;
use teselar_core::{split_label, Color, HierarchyNode, OrdinalScale};
use teselar_layout::{Frame, LegendConfig, Tile, TreemapLayout};

/// A fully laid-out chart, ready to serialize.
#[derive(Debug, Clone)]
pub struct Chart {
    title: String,
    frame: Frame,
    legend: LegendConfig,
    tiles: Vec<Tile>,
    categories: Vec<(String, Color)>,
}

impl Chart {
    /// Lays out `root` with the default frame, tiling and palette.
    #[must_use]
    pub fn build(root: &HierarchyNode) -> Self {
        Self::with_config(
            root,
            Frame::default(),
            TreemapLayout::default(),
            LegendConfig::default(),
            OrdinalScale::category_ten(),
        )
    }

    /// Lays out `root` with explicit geometry and palette. The treemap is
    /// resized to the frame's tiling area.
    #[must_use]
    pub fn with_config(
        root: &HierarchyNode,
        frame: Frame,
        treemap: TreemapLayout,
        legend: LegendConfig,
        mut scale: OrdinalScale,
    ) -> Self {
        let treemap = treemap.with_size(frame.inner_size());
        let origin = frame.origin();
        let tiles: Vec<Tile> = treemap
            .layout(root)
            .into_iter()
            .map(|tile| tile.offset(origin))
            .collect();
        // Colors are assigned in tile order, so the first category drawn
        // gets the first palette entry.
        for tile in &tiles {
            scale.color(tile.category.as_deref().unwrap_or_default());
        }
        let categories = scale
            .categories()
            .iter()
            .filter_map(|name| scale.get(name).map(|color| (name.clone(), color)))
            .collect();
        Self {
            title: root.name.clone(),
            frame,
            legend,
            tiles,
            categories,
        }
    }

    /// Dataset root name, drawn as the caption.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Laid-out leaf tiles, in leaf order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Categories with their assigned colors, in first-encounter order.
    #[must_use]
    pub fn categories(&self) -> &[(String, Color)] {
        &self.categories
    }

    fn fill(&self, category: &str) -> Color {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map_or(Color::BLACK, |(_, color)| *color)
    }

    /// Serializes the chart as a standalone `<svg>` element.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(self.tiles.len() * 256 + 2048);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="legend" width="{}" height="{}">"#,
            self.frame.width, self.frame.height
        );
        for tile in &self.tiles {
            self.write_cell(&mut svg, tile);
        }
        self.write_caption(&mut svg);
        self.write_legend(&mut svg);
        svg.push_str("</svg>\n");
        svg
    }

    fn write_cell(&self, svg: &mut String, tile: &Tile) {
        let category = tile.category.as_deref().unwrap_or_default();
        let _ = writeln!(
            svg,
            r#"<g class="group" transform="translate({},{})">"#,
            tile.x0(),
            tile.y0()
        );
        let _ = writeln!(
            svg,
            r#"<rect id="{}" class="tile" width="{}" height="{}" data-name="{}" data-category="{}" data-value="{}" fill="{}"></rect>"#,
            escape(&tile.id),
            tile.rect.width,
            tile.rect.height,
            escape(&tile.name),
            escape(category),
            tile.value,
            self.fill(category).to_hex()
        );
        svg.push_str(r#"<text class="tile-text">"#);
        for (line_index, line) in split_label(&tile.name).iter().enumerate() {
            let _ = write!(
                svg,
                r#"<tspan x="4" y="{}">{}</tspan>"#,
                13 + line_index * 10,
                escape(line)
            );
        }
        svg.push_str("</text>\n</g>\n");
    }

    fn write_caption(&self, svg: &mut String) {
        let anchor = self.frame.caption_anchor();
        let _ = writeln!(
            svg,
            r#"<text class="title" id="description" x="{}" y="{}" text-anchor="start">{}</text>"#,
            anchor.x,
            anchor.y,
            escape(&self.title)
        );
    }

    fn write_legend(&self, svg: &mut String) {
        let _ = writeln!(
            svg,
            r#"<g transform="translate({},{})">"#,
            self.legend.origin.x, self.legend.origin.y
        );
        let label = self.legend.label_offset();
        for (index, (category, color)) in self.categories.iter().enumerate() {
            let slot = self.legend.slot(index);
            let _ = writeln!(
                svg,
                r#"<g transform="translate({},{})"><rect class="legend-item" width="{}" height="{}" fill="{}"></rect><text x="{}" y="{}">{}</text></g>"#,
                slot.x,
                slot.y,
                self.legend.swatch,
                self.legend.swatch,
                color.to_hex(),
                label.x,
                label.y,
                escape(category)
            );
        }
        svg.push_str("</g>\n");
    }
}

/// Escapes text for use in XML attribute values and element content.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use teselar_core::{DatasetNode, RawValue, CATEGORY_TEN};

    fn sample_chart() -> Chart {
        let data = DatasetNode::branch(
            "Video Game Sales",
            vec![
                DatasetNode::branch(
                    "Wii",
                    vec![
                        DatasetNode::leaf("Wii Sports", "Wii", 82.53),
                        DatasetNode::leaf("Wii Play", "Wii", 28.92),
                    ],
                ),
                DatasetNode::branch(
                    "DS",
                    vec![DatasetNode::leaf("Nintendogs", "DS", 24.67)],
                ),
            ],
        );
        Chart::build(&HierarchyNode::build(&data).unwrap())
    }

    #[test]
    fn svg_has_canvas_dimensions_and_legend_id() {
        let svg = sample_chart().to_svg();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="legend" width="960" height="600">"#
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn cells_carry_data_attributes() {
        let svg = sample_chart().to_svg();
        assert!(svg.contains(r#"data-name="Wii Sports""#));
        assert!(svg.contains(r#"data-category="Wii""#));
        assert!(svg.contains(r#"data-value="82.53""#));
        assert!(svg.contains(r#"id="Video Game Sales.Wii.Wii Sports""#));
    }

    #[test]
    fn first_category_gets_first_palette_color() {
        let chart = sample_chart();
        // Wii leads the leaf order (larger platform total).
        assert_eq!(chart.categories()[0].0, "Wii");
        assert_eq!(chart.categories()[0].1, CATEGORY_TEN[0]);
        assert!(chart.to_svg().contains(r##"fill="#1f77b4""##));
    }

    #[test]
    fn legend_lists_each_category_once() {
        let chart = sample_chart();
        let svg = chart.to_svg();
        assert_eq!(chart.categories().len(), 2);
        assert_eq!(svg.matches(r#"class="legend-item""#).count(), 2);
        assert!(svg.contains(r#"<g transform="translate(600,500)">"#));
        // Legend labels sit 18 px right, 13 px down from the swatch corner.
        assert!(svg.contains(r#"<text x="18" y="13">Wii</text>"#));
    }

    #[test]
    fn legend_agrees_with_hierarchy_categories() {
        // An uncategorized leaf groups under an empty entry in both the
        // hierarchy's category list and the rendered legend.
        let data = DatasetNode::branch(
            "root",
            vec![
                DatasetNode::leaf("a", "alpha", 5.0),
                DatasetNode {
                    name: "b".to_string(),
                    category: None,
                    value: Some(RawValue::Number(3.0)),
                    children: None,
                },
            ],
        );
        let root = HierarchyNode::build(&data).unwrap();
        let chart = Chart::build(&root);
        let names: Vec<&str> = chart.categories().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, root.categories());
        let svg = chart.to_svg();
        assert_eq!(svg.matches(r#"class="legend-item""#).count(), 2);
    }

    #[test]
    fn caption_is_anchored_at_reference_position() {
        let svg = sample_chart().to_svg();
        assert!(svg.contains(
            r#"<text class="title" id="description" x="1" y="580" text-anchor="start">Video Game Sales</text>"#
        ));
    }

    #[test]
    fn labels_split_into_stacked_tspans() {
        let svg = sample_chart().to_svg();
        // "Nintendogs" is one line; "Wii Play" splits at the capital P.
        assert!(svg.contains(r#"<tspan x="4" y="13">Nintendogs</tspan>"#));
        assert!(svg.contains(r#"<tspan x="4" y="13">Wii </tspan><tspan x="4" y="23">Play</tspan>"#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = sample_chart().to_svg();
        let b = sample_chart().to_svg();
        assert_eq!(a, b);
    }

    #[test]
    fn markup_is_escaped() {
        let data = DatasetNode::branch(
            "A & B",
            vec![DatasetNode::leaf("Ratchet <Clank>", "\"quotes\"", 5.0)],
        );
        let svg = Chart::build(&HierarchyNode::build(&data).unwrap()).to_svg();
        assert!(svg.contains("data-name=\"Ratchet &lt;Clank&gt;\""));
        assert!(svg.contains("data-category=\"&quot;quotes&quot;\""));
        assert!(svg.contains(">A &amp; B</text>"));
        assert!(!svg.contains("<Clank>"));
    }

    #[test]
    fn tiles_are_offset_into_the_frame() {
        let chart = sample_chart();
        for tile in chart.tiles() {
            assert!(tile.x0() >= 1.0 - 1e-9);
            assert!(tile.y0() >= 1.0 - 1e-9);
            assert!(tile.x1() <= 959.0 + 1e-9);
            assert!(tile.y1() <= 423.0 + 1e-9);
        }
    }
}
