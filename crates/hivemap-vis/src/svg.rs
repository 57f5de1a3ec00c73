//! Static SVG rendering of a hive map.

use std::fmt::{self, Write};

use hivemap_layout::Transform;

use crate::detail::Tooltip;
use crate::filter::FilterState;
use crate::hive::HiveMap;

/// Render `hive` into a standalone SVG document.
///
/// Each hexagon is a `g.hex-group` translated to its cell center, holding
/// the outline path, the risk name label and a `<title>` tooltip. Hexagons
/// hidden by `filter` are dimmed and ignore pointer events.
pub fn render(hive: &HiveMap, transform: Transform, filter: &FilterState, width: f64, height: f64) -> String {
    let mut out = String::new();
    write_document(&mut out, hive, transform, filter, width, height)
        .expect("formatting into a String cannot fail");
    out
}

fn write_document(
    out: &mut impl Write,
    hive: &HiveMap,
    transform: Transform,
    filter: &FilterState,
    width: f64,
    height: f64,
) -> fmt::Result {
    let outline = hive.geometry().outline_path();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(out, r#"  <g id="hive-container" transform="{}">"#, transform.to_svg())?;

    for cell in hive.cells() {
        let record = &cell.item.record;
        let visibility = filter.visibility(record);
        let pointer_events = if visibility.interactive { "all" } else { "none" };

        writeln!(
            out,
            r#"    <g class="hex-group" transform="translate({},{})" data-index="{}" data-process="{}" data-nist="{}" opacity="{}" pointer-events="{}">"#,
            cell.pixel.x,
            cell.pixel.y,
            cell.index,
            escape(&record.process_name),
            escape(&record.nist_stage),
            visibility.opacity,
            pointer_events,
        )?;
        writeln!(
            out,
            "      <title>{}</title>",
            escape(&Tooltip::for_record(record).to_text())
        )?;
        writeln!(
            out,
            r##"      <path class="hexagon" d="{}" fill="{}" stroke="#ffffff" stroke-width="2"/>"##,
            outline,
            escape(&cell.item.color),
        )?;
        writeln!(
            out,
            r#"      <text class="hex-label" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            escape(&record.risk_name)
        )?;
        writeln!(out, "    </g>")?;
    }

    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

/// Escape text for use in XML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HiveConfig;
    use crate::filter::Selection;
    use serde_json::json;

    fn hive() -> HiveMap {
        let rows = json!([
            {"Process": "1. Plan", "Risk": "Scope <creep>", "NIST": "Map"},
            {"Process": "2. Build", "Risk": "Bias & drift"}
        ]);
        HiveMap::from_rows(&rows, &HiveConfig::default()).unwrap()
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"a<b>&"c"'"#), "a&lt;b&gt;&amp;&quot;c&quot;&apos;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn one_group_per_cell() {
        let hive = hive();
        let svg = render(&hive, Transform::IDENTITY, &FilterState::default(), 800.0, 600.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="hex-group""#).count(), 2);
        assert!(svg.contains(r#"<g id="hive-container" transform="translate(0,0) scale(1)">"#));
        assert!(svg.contains("Scope &lt;creep&gt;"));
        assert!(svg.contains("Bias &amp; drift"));
        assert!(svg.contains(r##"fill="#2E8B57""##));
        assert!(svg.contains(r##"fill="#4682B4""##));
        assert_eq!(svg.matches(r##"stroke="#ffffff" stroke-width="2"/>"##).count(), 2);
    }

    #[test]
    fn filtered_cells_are_dimmed() {
        let hive = hive();
        let filter = FilterState::default().with_process(Selection::Only("1. Plan".into()));
        let svg = render(&hive, Transform::IDENTITY, &filter, 800.0, 600.0);
        assert_eq!(svg.matches(r#"opacity="1" pointer-events="all""#).count(), 1);
        assert_eq!(svg.matches(r#"opacity="0.1" pointer-events="none""#).count(), 1);
    }

    #[test]
    fn tooltip_title_is_embedded() {
        let svg = render(&hive(), Transform::IDENTITY, &FilterState::default(), 800.0, 600.0);
        assert!(svg.contains("AI Lifecycle Stage (by NIST): Map"));
    }
}
