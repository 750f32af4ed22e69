use svg2compose::codegen::{BuiltinTemplate, ConverterConfig};
use svg2compose::{ConvertError, ConvertOptions, ParseOptions, Warning, convert_svg};

const UNNAMED: &str = r##"<svg viewBox="0 0 24 24"><path d="M0 0L24 24" stroke="#000"/></svg>"##;
const NAMED: &str = r##"<svg id="heart" viewBox="0 0 24 24"><path d="M0 0L24 24"/></svg>"##;

#[test]
fn explicit_name_wins_over_document_and_file() {
    let options = ConvertOptions::default()
        .with_name("navigation.home")
        .with_file_path("icons/arrow-left.svg");
    let conversion = convert_svg(NAMED, &options).unwrap();
    assert_eq!(conversion.names.categories, vec!["navigation", "home"]);
    assert_eq!(conversion.image_vector.name, "navigation.home");
    assert!(conversion.code.contains("  name = \"navigation.home\",\n"));
}

#[test]
fn document_id_wins_over_file_stem() {
    let options = ConvertOptions::default().with_file_path("icons/arrow-left.svg");
    let conversion = convert_svg(NAMED, &options).unwrap();
    assert_eq!(conversion.names.name, "heart");
}

#[test]
fn file_stem_names_unnamed_documents() {
    let options = ConvertOptions::default().with_file_path("icons/arrow-left.svg");
    let conversion = convert_svg(UNNAMED, &options).unwrap();
    assert_eq!(conversion.names.name, "arrow_left");
    assert_eq!(conversion.names.name_part_pascal(), "ArrowLeft");
    assert!(conversion.code.contains("name = \"arrow_left\""));
}

#[test]
fn without_any_name_source_the_default_name_is_kept() {
    let conversion = convert_svg(UNNAMED, &ConvertOptions::default()).unwrap();
    assert_eq!(conversion.image_vector.name, svg2compose::DEFAULT_ICON_NAME);
}

#[test]
fn val_declaration_template_wraps_the_builder() {
    let options = ConvertOptions::default()
        .with_name("arrow_left")
        .with_template(BuiltinTemplate::ValDeclaration);
    let code = convert_svg(UNNAMED, &options).unwrap().code;
    assert!(
        code.contains("\n\nval ArrowLeftIcon: ImageVector = ImageVector.Builder(\n"),
        "{code}"
    );
    assert!(code.starts_with("import androidx.compose.ui.graphics.Color\n"));
    assert!(code.ends_with("}.build()"));
}

#[test]
fn composable_template_adds_runtime_imports() {
    let options = ConvertOptions::default()
        .with_name("heart")
        .with_template(BuiltinTemplate::ComposableFunction);
    let conversion = convert_svg(NAMED, &options).unwrap();
    assert!(
        conversion
            .code
            .starts_with("import androidx.compose.runtime.Composable\nimport androidx.compose.runtime.remember\n\n"),
        "{}",
        conversion.code
    );
    assert!(
        conversion.code.contains(
            "@Composable\nfun HeartIcon(\n  modifier: Modifier = Modifier,\n  tint: Color = Color.Unspecified\n): ImageVector {\n"
        ),
        "{}",
        conversion.code
    );
    assert!(conversion.code.contains("    ImageVector.Builder(\n"));
    assert!(!conversion.imports.contains("androidx.compose.runtime.Composable"));
}

#[test]
fn flat_imports_have_no_blank_lines() {
    let config = ConverterConfig {
        group_imports: false,
        ..Default::default()
    };
    let options = ConvertOptions::default()
        .with_name("heart")
        .with_template(BuiltinTemplate::ComposableFunction)
        .with_config(config);
    let code = convert_svg(NAMED, &options).unwrap().code;
    let (imports, _) = code.split_once("\n\n").unwrap();
    assert!(imports.lines().all(|l| l.starts_with("import ")), "{imports}");
    assert!(imports.contains("import androidx.compose.ui.Modifier"));
}

#[test]
fn custom_template_file_replaces_builtin_templates() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("icon.kt.template");
    std::fs::write(
        &template_path,
        "package icons.{{ namespace | snake_case }}\n\n{{imports}}\n\nval {{ icon_name }}: ImageVector = {{ build_code }}\n",
    )
    .unwrap();

    let config = ConverterConfig {
        template_path: Some(template_path),
        ..Default::default()
    };
    let options = ConvertOptions::default()
        .with_name("social.ThumbUp")
        .with_template(BuiltinTemplate::IconObject)
        .with_config(config);
    let code = convert_svg(NAMED, &options).unwrap().code;

    assert!(code.starts_with("package icons.social\n\nimport "), "{code}");
    assert!(code.contains("val ThumbUp: ImageVector = ImageVector.Builder("));
    assert!(!code.contains("object "));
}

const THEMED_TEMPLATE: &str = r##"{%- set color_mappings = {
    "#2196F3": {"semantic_name": "primaryColor", "replacement": "MaterialTheme.colorScheme.primary"}
} -%}
@Composable
fun {{ name.name_part_pascal }}(
{%- for color_hex, mapping in color_mappings.items() if color_hex in used_colors %}
  {{ mapping.semantic_name }}: Color = {{ mapping.replacement }}{{ "," if not loop.last }}
{%- endfor %}
): ImageVector = {{ build_code_with_color_params }}
"##;

fn multicolor_options(dir: &std::path::Path) -> ConvertOptions {
    let template_path = dir.join("themed.kt.j2");
    std::fs::write(&template_path, THEMED_TEMPLATE).unwrap();
    let config = ConverterConfig {
        multicolor_template_path: Some(template_path),
        ..Default::default()
    };
    ConvertOptions::default()
        .with_name("brand")
        .with_template(BuiltinTemplate::ValDeclaration)
        .with_config(config)
}

#[test]
fn multicolor_template_applies_to_icons_with_mapped_colors() {
    let dir = tempfile::tempdir().unwrap();
    let svg = r##"<svg viewBox="0 0 24 24"><path d="M0 0L24 24" fill="#2196F3"/><path d="M0 24L24 0" fill="#FF9800"/></svg>"##;
    let code = convert_svg(svg, &multicolor_options(dir.path()))
        .unwrap()
        .code;
    assert!(
        code.starts_with(
            "@Composable\nfun Brand(\n  primaryColor: Color = MaterialTheme.colorScheme.primary\n): ImageVector = ImageVector.Builder(\n"
        ),
        "{code}"
    );
    assert!(code.contains("fill = SolidColor(primaryColor),"), "{code}");
    assert!(code.contains("fill = SolidColor(Color(0xFFFF9800)),"), "{code}");
}

#[test]
fn multicolor_template_falls_back_to_the_selected_template() {
    let dir = tempfile::tempdir().unwrap();
    let svg = r##"<svg viewBox="0 0 24 24"><path d="M0 0L24 24" fill="#9C27B0"/></svg>"##;
    let code = convert_svg(svg, &multicolor_options(dir.path()))
        .unwrap()
        .code;
    assert!(
        code.contains("\n\nval BrandIcon: ImageVector = ImageVector.Builder(\n"),
        "{code}"
    );
    assert!(!code.contains("@Composable"), "{code}");
}

#[test]
fn missing_template_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConverterConfig {
        template_path: Some(dir.path().join("missing.template")),
        ..Default::default()
    };
    let err = convert_svg(NAMED, &ConvertOptions::default().with_config(config)).unwrap_err();
    assert!(matches!(err, ConvertError::Codegen(_)), "{err:?}");
}

#[test]
fn parse_errors_surface_as_parse_variant() {
    let err = convert_svg("<html/>", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)), "{err:?}");
}

#[test]
fn lenient_parsing_reports_dropped_paths() {
    let svg = r#"<svg><path d="M0 0 L"/><path id="ok" d="M1 1L2 2"/></svg>"#;
    assert!(convert_svg(svg, &ConvertOptions::default()).is_err());

    let options = ConvertOptions::default().with_parse_options(ParseOptions::lenient());
    let conversion = convert_svg(svg, &options).unwrap();
    assert_eq!(conversion.image_vector.path_count(), 1);
    assert!(matches!(
        conversion.warnings.as_slice(),
        [Warning::MalformedPathData { .. }]
    ));
}

#[test]
fn config_options_reach_the_generator() {
    let config = ConverterConfig {
        indent_size: 4,
        use_trailing_comma: false,
        use_named_colors: false,
        ..Default::default()
    };
    let svg = r#"<svg><path d="M0 0L1 1" fill="red"/></svg>"#;
    let options = ConvertOptions::default().with_name("dot").with_config(config);
    let code = convert_svg(svg, &options).unwrap().code;
    assert!(code.contains("        fill = SolidColor(Color(0xFFFF0000))\n    ) {"), "{code}");
    assert!(code.contains("    viewportHeight = 24f\n).apply {"), "{code}");
}
