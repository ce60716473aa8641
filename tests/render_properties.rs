use qrstyle::matrix::{is_finder, FINDER_SIZE};
use qrstyle::shape::CellShape;
use qrstyle::style::OVERLAY_RATIO;
use qrstyle::{
    render, BackgroundPattern, FinderShape, ModuleMatrix, ModuleShape, OverlayImage, StyleConfig,
};

const N: usize = 25;

/// Active cells in one standard 7x7 locator block.
const FINDER_ACTIVE: usize = 33;

fn scenario_style() -> StyleConfig {
    StyleConfig {
        module_shape: ModuleShape::Circle,
        finder_shape: FinderShape::Square,
        background_pattern: BackgroundPattern::None,
        foreground_color: "#000000".to_owned(),
        background_color: "#ffffff".to_owned(),
        finder_color: "#111111".to_owned(),
        canvas_size: 300,
    }
}

/// Finder blocks plus a deterministic scatter of data modules.
fn mixed_matrix() -> ModuleMatrix {
    let mut matrix = ModuleMatrix::with_finder_patterns(N).unwrap();
    for row in 0..N {
        for col in 0..N {
            if !is_finder(row, col, N) && (row * 7 + col * 3) % 5 < 2 {
                matrix.set(row, col, true);
            }
        }
    }
    matrix
}

fn data_dark_count(matrix: &ModuleMatrix) -> usize {
    matrix
        .dark_cells()
        .filter(|&(row, col)| !matrix.is_finder(row, col))
        .count()
}

fn count_elements(svg: &str, element: &str, color: &str) -> usize {
    let open = format!("<{element} ");
    let fill = format!("fill=\"{color}\"");
    svg.split(open.as_str())
        .skip(1)
        .filter(|rest| rest.split("/>").next().unwrap_or_default().contains(&fill))
        .count()
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let matrix = mixed_matrix();
    let overlay = OverlayImage::new("data:image/png;base64,iVBORw0KGgo=").unwrap();
    for pattern in BackgroundPattern::ALL {
        let style = StyleConfig {
            background_pattern: *pattern,
            ..scenario_style()
        };
        let a = render(&matrix, &style, Some(&overlay)).unwrap();
        let b = render(&matrix, &style, Some(&overlay)).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}

#[test]
fn one_primitive_per_active_data_cell_for_every_module_shape() {
    let matrix = mixed_matrix();
    let expected = data_dark_count(&matrix);
    assert!(expected > 0);

    for shape in ModuleShape::ALL {
        let style = StyleConfig {
            module_shape: *shape,
            foreground_color: "#0000aa".to_owned(),
            ..scenario_style()
        };
        let doc = render(&matrix, &style, None).unwrap();
        let element = CellShape::from(*shape).element(false);
        assert_eq!(
            count_elements(doc.as_str(), element, "#0000aa"),
            expected,
            "module shape {shape}"
        );
    }
}

#[test]
fn finder_cells_always_use_finder_color() {
    let mut matrix = ModuleMatrix::new(N).unwrap();
    for row in 0..N {
        for col in 0..N {
            matrix.set(row, col, is_finder(row, col, N));
        }
    }

    for shape in FinderShape::ALL {
        let style = StyleConfig {
            finder_shape: *shape,
            ..scenario_style()
        };
        let doc = render(&matrix, &style, None).unwrap();
        let svg = doc.as_str();
        let element = CellShape::from(*shape).element(true);
        assert_eq!(
            count_elements(svg, element, "#111111"),
            3 * FINDER_SIZE * FINDER_SIZE,
            "finder shape {shape}"
        );
        assert!(!svg.contains("fill=\"#000000\""), "finder shape {shape}");
    }
}

#[test]
fn no_texture_leaves_no_pattern_artifacts() {
    let matrix = mixed_matrix();
    let doc = render(&matrix, &scenario_style(), None).unwrap();
    let svg = doc.as_str();
    assert!(!svg.contains("<defs"));
    assert!(!svg.contains("<pattern"));
    assert!(!svg.contains("url(#"));

    let header = r#"<svg width="300" height="300" viewBox="0 0 300 300" xmlns="http://www.w3.org/2000/svg">"#;
    let background = r##"<rect width="300" height="300" fill="#ffffff"/>"##;
    assert!(svg.starts_with(&format!("{header}{background}")));
}

#[test]
fn overlay_adds_one_backing_rect_and_one_image() {
    let matrix = mixed_matrix();
    let style = scenario_style();
    let without = render(&matrix, &style, None).unwrap();
    assert!(!without.as_str().contains("<image"));

    let overlay = OverlayImage::new("data:image/png;base64,AAAA").unwrap();
    let with = render(&matrix, &style, Some(&overlay)).unwrap();
    let svg = with.as_str();
    assert_eq!(svg.matches("<image ").count(), 1);
    assert_eq!(svg.matches("stroke-width=\"2\"").count(), 1);

    let canvas = f64::from(style.canvas_size);
    let size = canvas * OVERLAY_RATIO;
    let origin = (canvas - size) / 2.0;
    assert!(svg.contains(&format!(
        r#"<image x="{origin}" y="{origin}" width="{size}" height="{size}" href="data:image/png;base64,AAAA""#
    )));

    let body = without.as_str().trim_end_matches("</svg>");
    assert!(svg.starts_with(body));
    let added = &svg[body.len()..];
    assert!(added.starts_with(r#"<rect x="115" y="115" width="70" height="70""#));
    assert_eq!(added.matches("<rect ").count(), 1);
    assert_eq!(added.matches("<image ").count(), 1);
}

#[test]
fn finder_only_scenario_with_circle_modules() {
    let matrix = ModuleMatrix::with_finder_patterns(N).unwrap();
    let doc = render(&matrix, &scenario_style(), None).unwrap();
    let svg = doc.as_str();

    assert_eq!(count_elements(svg, "rect", "#111111"), 3 * FINDER_ACTIVE);
    assert_eq!(svg.matches("<circle ").count(), 0);
    assert_eq!(svg.matches(r##"fill="#ffffff""##).count(), 1);
    assert!(!svg.contains("<defs>"));
    assert!(svg.starts_with(r#"<svg width="300" height="300" viewBox="0 0 300 300""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn finder_only_scenario_with_dots_texture() {
    let matrix = ModuleMatrix::with_finder_patterns(N).unwrap();
    let style = StyleConfig {
        background_pattern: BackgroundPattern::Dots,
        ..scenario_style()
    };
    let doc = render(&matrix, &style, None).unwrap();
    let svg = doc.as_str();

    assert_eq!(svg.matches("<defs>").count(), 1);
    assert_eq!(svg.matches("<pattern ").count(), 1);
    assert_eq!(svg.matches(r#"r="2""#).count(), 1);

    let texture_rect = svg
        .find(r#"<rect width="300" height="300" fill="url(#bg-pattern)"/>"#)
        .unwrap();
    let solid_rect = svg
        .find(r##"<rect width="300" height="300" fill="#ffffff"/>"##)
        .unwrap();
    assert!(svg.find("<defs>").unwrap() < texture_rect);
    assert!(texture_rect < solid_rect);
}

#[test]
fn light_cells_render_nothing() {
    let matrix = ModuleMatrix::new(N).unwrap();
    let doc = render(&matrix, &scenario_style(), None).unwrap();
    assert_eq!(
        doc.as_str(),
        concat!(
            r#"<svg width="300" height="300" viewBox="0 0 300 300" xmlns="http://www.w3.org/2000/svg">"#,
            r##"<rect width="300" height="300" fill="#ffffff"/>"##,
            "</svg>"
        )
    );
}
