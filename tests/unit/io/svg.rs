//! Tests for SVG rendering and cloud output paths

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use textcloud::io::svg::{
        aggregate_cloud_path, cloud_directory, cloud_file_name, escape_xml, render_svg, tier_rule,
        write_svg,
    };
    use textcloud::layout::canvas::Canvas;
    use textcloud::layout::placement::{LayoutOutcome, PlacedLabel};
    use textcloud::layout::tier::{Tier, TierLadder};

    fn outcome(labels: &[(&str, i32, i32)]) -> LayoutOutcome {
        let tier = Tier::new("top10", "blue", 128);
        LayoutOutcome {
            labels: labels
                .iter()
                .map(|&(text, x, y)| PlacedLabel {
                    text: text.to_string(),
                    tier: tier.clone(),
                    x,
                    y,
                })
                .collect(),
            legend: TierLadder::default().tiers(),
            exhausted: Vec::new(),
            out_of_bounds: Vec::new(),
        }
    }

    // Tests tier rules set weight, size, family and color
    // Verified by omitting the color
    #[test]
    fn test_tier_rule() {
        let rule = tier_rule(&Tier::new("top25", "dodgerblue", 64));
        assert_eq!(rule, ".top25 { font: bold 64px sans-serif; fill: dodgerblue; }");
    }

    // Tests markup characters are escaped and plain text is borrowed
    // Verified by escaping only ampersands
    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert!(matches!(escape_xml("plain"), std::borrow::Cow::Borrowed("plain")));
    }

    // Tests the document declares the viewport, every tier and every label
    // Verified by leaving the legend out of the style block
    #[test]
    fn test_render_svg() {
        let svg = render_svg(&outcome(&[("cat", 300, 200), ("<dog>", 500, 400)]), &Canvas::default());

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
        assert!(svg.contains("viewBox=\"0 0 1920 1080\""));
        assert!(svg.contains("background-color:white"));
        for class in ["top10", "top25", "top50", "top80"] {
            assert!(svg.contains(&format!(".{class} {{")));
        }
        assert!(svg.contains("<text x=\"300\" y=\"200\" class=\"top10\">cat</text>"));
        assert!(svg.contains(">&lt;dog&gt;</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<text ").count(), 2);
    }

    // Tests writing creates missing parent directories
    // Verified by writing without creating directories
    #[test]
    fn test_write_svg_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/out/cloud.svg");

        write_svg(&outcome(&[("cat", 300, 200)]), &Canvas::default(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains(">cat</text>"));
    }

    // Tests default and targeted output locations
    // Verified by replacing the target extension
    #[test]
    fn test_output_paths() {
        assert_eq!(aggregate_cloud_path(None), PathBuf::from("word_cloud.svg"));
        assert_eq!(
            aggregate_cloud_path(Some(Path::new("out/summary"))),
            PathBuf::from("out/summary.svg")
        );
        assert_eq!(
            aggregate_cloud_path(Some(Path::new("out/summary.v2"))),
            PathBuf::from("out/summary.v2.svg")
        );
        assert_eq!(cloud_directory(None), PathBuf::from("word_clouds"));
        assert_eq!(cloud_directory(Some(Path::new("clouds"))), PathBuf::from("clouds"));
    }

    // Tests identifiers flatten into a single hidden-free file name
    // Verified by keeping the leading dot
    #[test]
    fn test_cloud_file_name() {
        assert_eq!(cloud_file_name("./notes/a.txt"), "notes-a.txt.svg");
        assert_eq!(cloud_file_name("/abs/path/b.txt"), "abs-path-b.txt.svg");
        assert_eq!(cloud_file_name("dir\\c.txt"), "dir-c.txt.svg");
        assert_eq!(cloud_file_name("plain.txt"), "plain.txt.svg");
    }
}
