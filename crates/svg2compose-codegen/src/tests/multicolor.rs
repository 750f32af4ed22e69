use crate::multicolor::{color_mappings_from_value, color_overrides};
use crate::*;
use minijinja::Value;
use std::collections::BTreeSet;
use svg2compose_core::{Color, parse_svg};

const TWO_COLORS: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24">
  <circle fill="#2196F3" cx="6" cy="6" r="4"/>
  <rect fill="#FF9800" x="10" y="2" width="8" height="8"/>
</svg>"##;

const THEMED: &str = r##"{{ imports }}

{%- set color_mappings = {
    "#2196F3": {"semantic_name": "primaryColor", "replacement": "MaterialTheme.colorScheme.primary"},
    "#FF9800": {"semantic_name": "accentColor", "replacement": "Color(0xFFFF9800)"}
} %}

@Composable
fun {{ name.name_part_pascal }}(
{%- for color_hex, mapping in color_mappings.items() if color_hex in used_colors %}
  {{ mapping.semantic_name }}: Color = {{ mapping.replacement }}{{ "," if not loop.last }}
{%- endfor %}
): ImageVector {
  return {{ build_code_with_color_params }}
}"##;

fn colors(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn render(svg: &str, template: &str, name: &str) -> Option<String> {
    let image_vector = parse_svg(svg).unwrap();
    let names = NameResolver::new().resolve_str(name);
    TemplateEngine::new()
        .render_multicolor(template, &ImageVectorGenerator::new(), &image_vector, &names)
        .unwrap()
}

#[test]
fn analysis_collects_solid_colors() {
    let analysis = ColorAnalysis::of(&parse_svg(TWO_COLORS).unwrap());
    assert_eq!(analysis.used_colors, colors(&["#2196F3", "#FF9800"]));
    assert_eq!(analysis.color_count(), 2);
    assert!(analysis.is_multicolor());

    let single = r##"<svg viewBox="0 0 24 24"><path fill="#000000" d="M 0 0 L 24 0 L 24 24 L 0 24 Z"/></svg>"##;
    let analysis = ColorAnalysis::of(&parse_svg(single).unwrap());
    assert_eq!(analysis.used_colors, colors(&["#000000"]));
    assert!(!analysis.is_multicolor());
}

#[test]
fn analysis_includes_gradient_stops_and_strokes() {
    let svg = r##"<svg viewBox="0 0 24 24">
      <defs>
        <linearGradient id="grad1">
          <stop offset="0%" stop-color="#FF0000"/>
          <stop offset="100%" stop-color="#00FF00"/>
        </linearGradient>
      </defs>
      <rect fill="url(#grad1)" x="0" y="0" width="24" height="24"/>
      <circle fill="none" stroke="#0000FF" cx="12" cy="12" r="4"/>
    </svg>"##;
    let analysis = ColorAnalysis::of(&parse_svg(svg).unwrap());
    assert_eq!(analysis.used_colors, colors(&["#FF0000", "#00FF00", "#0000FF"]));
}

#[test]
fn translucent_colors_are_keyed_with_and_without_alpha() {
    let svg = r##"<svg viewBox="0 0 24 24">
      <circle fill="#2196F3" fill-opacity="0.5" cx="6" cy="6" r="4"/>
      <rect fill="rgba(255, 152, 0, 0.8)" x="10" y="2" width="8" height="8"/>
      <path fill="#4CAF50" opacity="0.3" d="M 0 12 L 12 12 L 6 24 Z"/>
    </svg>"##;
    let analysis = ColorAnalysis::of(&parse_svg(svg).unwrap());
    assert_eq!(
        analysis.used_colors,
        colors(&["#2196F3", "#FF9800", "#4CAF50", "#CCFF9800"])
    );
    assert_eq!(analysis.color_count(), 4);
}

#[test]
fn template_selection_needs_a_shared_color() {
    let analysis = ColorAnalysis {
        used_colors: colors(&["#2196F3", "#FF9800", "#9C27B0"]),
    };
    assert!(analysis.should_use_multicolor_template(["#2196f3", "#4CAF50"]));
    assert!(!analysis.should_use_multicolor_template(["#009688"]));
    assert!(!analysis.should_use_multicolor_template([]));
}

#[test]
fn mappings_accept_parameters_and_direct_replacements() {
    let table = Value::from_serialize(serde_json::json!({
        "#ff0000": {"semantic_name": "errorColor", "replacement": "Color.Red"},
        "#0000FF": "MaterialTheme.colorScheme.primary",
        "#FFFF00": {"semantic_name": "warningColor", "default_value": "Color.Yellow"},
        "teal": "Color.Cyan",
        "#00FF00": {"semantic_name": "orphan"},
    }));
    let mappings = color_mappings_from_value(&table);
    assert_eq!(
        mappings.keys().map(String::as_str).collect::<Vec<_>>(),
        ["#FF0000", "#0000FF", "#FFFF00"]
    );
    assert_eq!(
        mappings["#FFFF00"],
        ColorMapping::Parameter {
            semantic_name: "warningColor".to_string(),
            replacement: "Color.Yellow".to_string(),
        }
    );
    assert_eq!(
        mappings["#0000FF"],
        ColorMapping::Direct("MaterialTheme.colorScheme.primary".to_string())
    );

    let overrides = color_overrides(&mappings);
    assert_eq!(
        overrides.get(&Color::from_argb(0xFFFF0000)).map(String::as_str),
        Some("errorColor")
    );
    assert_eq!(overrides.get(&Color::from_argb(0x80FF0000)), None);
}

#[test]
fn mapped_colors_become_parameters() {
    let svg = r##"<svg width="24" height="24" viewBox="0 0 24 24">
      <circle fill="#2196F3" cx="6" cy="6" r="4"/>
      <rect fill="#FF9800" x="10" y="2" width="8" height="8"/>
      <path fill="#9C27B0" d="M 0 12 L 12 12 L 6 24 Z"/>
    </svg>"##;
    let out = render(svg, THEMED, "TestIcon").unwrap();
    assert!(
        out.contains(
            "@Composable\nfun TestIcon(\n  primaryColor: Color = MaterialTheme.colorScheme.primary,\n  accentColor: Color = Color(0xFFFF9800)\n): ImageVector {\n  return ImageVector.Builder("
        ),
        "{out}"
    );
    assert!(out.contains("fill = SolidColor(primaryColor),"), "{out}");
    assert!(out.contains("fill = SolidColor(accentColor),"), "{out}");
    assert!(out.contains("SolidColor(Color(0xFF9C27B0))"), "{out}");
    assert!(!out.contains("SolidColor(Color(0xFF2196F3))"));
    assert!(
        out.starts_with("import androidx.compose.ui.graphics.Color\n"),
        "{out}"
    );
    assert!(
        out.contains("import androidx.compose.ui.unit.dp\n\n@Composable\n"),
        "{out}"
    );
    assert!(out.trim_end().ends_with("}.build()\n}"), "{out}");
}

#[test]
fn only_used_mapped_colors_become_parameters() {
    let svg = r##"<svg viewBox="0 0 24 24"><circle fill="#2196F3" cx="6" cy="6" r="4"/></svg>"##;
    let out = render(svg, THEMED, "dot").unwrap();
    assert!(
        out.contains(
            "fun Dot(\n  primaryColor: Color = MaterialTheme.colorScheme.primary\n): ImageVector {"
        ),
        "{out}"
    );
    assert!(!out.contains("accentColor"), "{out}");
}

#[test]
fn icons_without_mapped_colors_fall_through() {
    let svg = r##"<svg viewBox="0 0 24 24">
      <circle fill="#9C27B0" cx="12" cy="12" r="8"/>
      <rect fill="#009688" x="0" y="0" width="8" height="8"/>
    </svg>"##;
    assert_eq!(render(svg, THEMED, "TestIcon"), None);
    assert_eq!(
        render(TWO_COLORS, "fun {{ icon_name }}() = Unit", "TestIcon"),
        None
    );
}

#[test]
fn named_colors_and_gradient_stops_are_substituted() {
    let svg = r##"<svg viewBox="0 0 24 24">
      <defs>
        <linearGradient id="g">
          <stop offset="0" stop-color="#2196F3"/>
          <stop offset="1" stop-color="#FF9800"/>
        </linearGradient>
      </defs>
      <rect fill="url(#g)" width="24" height="24"/>
      <circle fill="#000000" cx="12" cy="12" r="4"/>
    </svg>"##;
    let template = r##"{%- set color_mappings = {
    "#2196F3": {"semantic_name": "primaryColor", "replacement": "MaterialTheme.colorScheme.primary"},
    "#FF9800": "Color(0xFFFF9800)",
    "#000000": {"semantic_name": "inkColor", "default_value": "Color.Black"}
} -%}
{{ build_code_with_color_params }}"##;
    let out = render(svg, template, "Badge").unwrap();
    assert!(out.contains("0f to primaryColor,"), "{out}");
    assert!(out.contains("1f to Color(0xFFFF9800),"), "{out}");
    assert!(out.contains("fill = SolidColor(inkColor),"), "{out}");
    assert!(!out.contains("Color.Black"), "{out}");
}

#[test]
fn translucent_colors_need_their_own_key() {
    let svg = r##"<svg viewBox="0 0 24 24">
      <circle cx="6" cy="6" r="4" fill="rgba(33, 150, 243, 0.8)"/>
      <rect x="10" y="2" width="8" height="8" fill="rgba(33, 150, 243, 0.6)"/>
      <path d="M 0 12 L 12 12 L 6 24 Z" fill="#4CAF50"/>
    </svg>"##;
    let template = r##"{%- set color_mappings = {
    "#CC2196F3": {"semantic_name": "primaryColor", "replacement": "MaterialTheme.colorScheme.primary"},
    "#2196F3": {"semantic_name": "opaqueColor", "replacement": "Color.Blue"},
    "#4CAF50": "Color.Green"
} -%}
{{ build_code_with_color_params }}"##;
    let out = render(svg, template, "Translucent").unwrap();
    assert!(out.contains("fill = SolidColor(primaryColor),"), "{out}");
    assert!(out.contains("fill = SolidColor(Color(0x992196F3)),"), "{out}");
    assert!(out.contains("fill = SolidColor(Color.Green),"), "{out}");
    assert!(!out.contains("opaqueColor"), "{out}");
}

#[test]
fn parameters_can_be_filtered_by_mapping_kind() {
    let svg = r##"<svg viewBox="0 0 24 24">
      <rect width="8" height="8" fill="#FF0000"/>
      <rect x="8" width="8" height="8" fill="#0000FF"/>
    </svg>"##;
    let template = r##"{%- set color_mappings = {
    "#FF0000": {"semantic_name": "errorColor", "replacement": "Color.Red"},
    "#0000FF": "MaterialTheme.colorScheme.primary"
} -%}
fun {{ name.name_part_pascal }}(
{%- for color_hex, mapping in color_mappings.items() if color_hex in used_colors %}
  {%- if mapping is mapping and mapping.semantic_name is defined %}
  {{ mapping.semantic_name }}: Color = {{ mapping.replacement }}
  {%- endif %}
{%- endfor %}
)"##;
    let out = render(svg, template, "Mixed").unwrap();
    assert_eq!(out, "fun Mixed(\n  errorColor: Color = Color.Red\n)");
}
