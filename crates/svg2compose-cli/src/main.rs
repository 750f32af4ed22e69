use std::io::Read;
use std::path::{Path, PathBuf};
use svg2compose::codegen::{BuiltinTemplate, ConfigOverrides, ConverterConfig, color_expression};
use svg2compose::{
    ConvertError, ConvertOptions, Fill, ImageVector, ParseOptions, SvgParser, VectorNode,
    convert_svg,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Convert(ConvertError),
    Codegen(svg2compose::codegen::Error),
    Json(serde_json::Error),
    BatchFailed(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Convert(err) => write!(f, "Error: {err}"),
            CliError::Codegen(err) => write!(f, "Error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::BatchFailed(n) => write!(f, "{n} file(s) failed to convert"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConvertError> for CliError {
    fn from(value: ConvertError) -> Self {
        Self::Convert(value)
    }
}

impl From<svg2compose::Error> for CliError {
    fn from(value: svg2compose::Error) -> Self {
        Self::Convert(ConvertError::Parse(value))
    }
}

impl From<svg2compose::codegen::Error> for CliError {
    fn from(value: svg2compose::codegen::Error) -> Self {
        Self::Codegen(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Help,
    Convert,
    Batch,
    Info,
    Templates,
    Version,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    name: Option<String>,
    template: Option<BuiltinTemplate>,
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    lenient: bool,
    json: bool,
    dry_run: bool,
    overwrite: bool,
    namespace_dirs: bool,
}

fn usage() -> &'static str {
    "svg2compose\n\
\n\
USAGE:\n\
  svg2compose convert [-o <out>] [-n <name>] [-t <template>] [--template-file <path>] [--config <path>] [OPTIONS] [<path>|-]\n\
  svg2compose batch <dir> [-o <out-dir>] [-t <template>] [--dry-run] [--overwrite] [--no-namespace-dirs] [--config <path>] [OPTIONS]\n\
  svg2compose info [--json] [--lenient] [<path>|-]\n\
  svg2compose templates\n\
  svg2compose version\n\
\n\
OPTIONS:\n\
  --lenient              drop malformed paths (with a warning) instead of failing\n\
  --indent <n>           indentation width of the generated code\n\
  --no-named-colors      always emit Color(0xAARRGGBB) literals\n\
  --no-trailing-comma    omit trailing commas in argument lists\n\
  --flat-imports         do not group imports by package\n\
  --multicolor-template <path>\n\
                         template with a color_mappings table, used for icons painting a mapped color\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - convert prints Kotlin to stdout by default; use -o to write a file.\n\
  - batch writes <out-dir>/<namespace>/<Name>.kt for every .svg under <dir>; subdirectories\n\
    become the icon namespace. The default batch template is val_declaration.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) to see conversion diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        namespace_dirs: true,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "convert" => args.command = Command::Convert,
            "batch" => args.command = Command::Batch,
            "info" => args.command = Command::Info,
            "templates" => args.command = Command::Templates,
            "version" | "--version" | "-V" => args.command = Command::Version,
            "--output" | "-o" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--name" | "-n" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.name = Some(name.clone());
            }
            "--template" | "-t" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.template = Some(BuiltinTemplate::lookup(name)?);
            }
            "--template-file" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.overrides.template_path = Some(PathBuf::from(path));
            }
            "--multicolor-template" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.overrides.multicolor_template_path = Some(PathBuf::from(path));
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config_path = Some(PathBuf::from(path));
            }
            "--indent" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.overrides.indent_size =
                    Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--no-named-colors" => args.overrides.use_named_colors = Some(false),
            "--no-trailing-comma" => args.overrides.use_trailing_comma = Some(false),
            "--flat-imports" => args.overrides.group_imports = Some(false),
            "--lenient" => args.lenient = true,
            "--json" => args.json = true,
            "--dry-run" => args.dry_run = true,
            "--overwrite" => args.overwrite = true,
            "--no-namespace-dirs" => args.namespace_dirs = false,
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: &Path) -> Result<(), CliError> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, format!("{text}\n"))?;
    Ok(())
}

fn parse_options(args: &Args) -> ParseOptions {
    if args.lenient {
        ParseOptions::lenient()
    } else {
        ParseOptions::strict()
    }
}

fn load_config(args: &Args) -> Result<ConverterConfig, CliError> {
    let config = match &args.config_path {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    Ok(config.merge_with_options(&args.overrides))
}

fn run_convert(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut options = ConvertOptions::default()
        .with_config(load_config(args)?)
        .with_template(args.template.unwrap_or_default())
        .with_parse_options(parse_options(args));
    if let Some(name) = &args.name {
        options = options.with_name(name.clone());
    }
    if let Some(input) = args.input.as_deref().filter(|p| *p != "-") {
        options = options.with_file_path(input);
    }

    let conversion = convert_svg(&text, &options)?;

    match &args.out {
        None => println!("{}", conversion.code),
        Some(out) => {
            write_text(&conversion.code, Path::new(out))?;
            println!("Generated {out}");
        }
    }
    Ok(())
}

fn list_svg_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
            {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

/// `navigation/arrow-back.svg` under the batch root becomes `navigation.arrow_back`.
fn batch_icon_name(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut parts: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if let Some(stem) = file.file_stem() {
        parts.push(stem.to_string_lossy().replace(['-', ' '], "_"));
    }
    parts.join(".")
}

#[derive(Debug, Default)]
struct BatchSummary {
    processed: usize,
    skipped: usize,
    failed: usize,
}

fn run_batch(args: &Args) -> Result<(), CliError> {
    let Some(root) = args.input.as_deref().filter(|p| *p != "-") else {
        return Err(CliError::Usage(usage()));
    };
    let root = Path::new(root);
    if !root.is_dir() {
        return Err(CliError::Usage("batch expects an input directory"));
    }
    let out_dir = PathBuf::from(args.out.as_deref().unwrap_or("."));
    let config = load_config(args)?;
    let template = args.template.unwrap_or(BuiltinTemplate::ValDeclaration);

    let files = list_svg_files(root);
    println!("Found {} SVG files", files.len());
    if args.dry_run {
        println!("DRY RUN - no files will be written");
    }

    let mut summary = BatchSummary::default();
    for file in &files {
        let options = ConvertOptions::default()
            .with_name(batch_icon_name(root, file))
            .with_file_path(file)
            .with_template(template)
            .with_config(config.clone())
            .with_parse_options(parse_options(args));

        let conversion = match std::fs::read_to_string(file)
            .map_err(CliError::from)
            .and_then(|text| Ok(convert_svg(&text, &options)?))
        {
            Ok(conversion) => conversion,
            Err(err) => {
                eprintln!("Failed: {}: {err}", file.display());
                summary.failed += 1;
                continue;
            }
        };
        if !conversion.warnings.is_empty() {
            tracing::info!(
                file = %file.display(),
                warnings = conversion.warnings.len(),
                "converted with warnings"
            );
        }

        let mut target = out_dir.clone();
        if args.namespace_dirs {
            for category in conversion.names.namespace_part().split('.') {
                if !category.is_empty() {
                    target.push(category.to_lowercase());
                }
            }
        }
        target.push(format!("{}.kt", conversion.names.name_part_pascal()));

        if target.exists() && !args.overwrite {
            tracing::info!(path = %target.display(), "output exists, skipping");
            println!("Skipped (exists): {}", target.display());
            summary.skipped += 1;
            continue;
        }
        if args.dry_run {
            println!("Would create: {}", target.display());
            summary.processed += 1;
            continue;
        }
        match write_text(&conversion.code, &target) {
            Ok(()) => {
                println!("Generated {}", target.display());
                summary.processed += 1;
            }
            Err(err) => {
                eprintln!("Failed: {}: {err}", file.display());
                summary.failed += 1;
            }
        }
    }

    println!();
    println!("Successfully processed: {}", summary.processed);
    println!("Skipped: {}", summary.skipped);
    println!("Failed: {}", summary.failed);
    if summary.failed > 0 {
        return Err(CliError::BatchFailed(summary.failed));
    }
    Ok(())
}

fn run_info(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let parsed = SvgParser::new()
        .with_options(parse_options(args))
        .parse(&text)?;

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &parsed)?;
        println!();
        return Ok(());
    }

    let iv = &parsed.image_vector;
    println!("File: {}", args.input.as_deref().unwrap_or("-"));
    println!("Dimensions: {}x{} dp", iv.default_width, iv.default_height);
    println!("Viewport: {}x{}", iv.viewport_width, iv.viewport_height);
    println!("Vector name: {}", iv.name);
    println!("Auto-mirror: {}", iv.auto_mirror);
    print_nodes(iv);
    if !parsed.warnings.is_empty() {
        println!("Warnings: {}", parsed.warnings.len());
        for warning in &parsed.warnings {
            println!("  - {warning}");
        }
    }
    Ok(())
}

fn print_nodes(iv: &ImageVector) {
    println!("Nodes: {} ({} paths)", iv.nodes.len(), iv.path_count());
    for (idx, node) in iv.nodes.iter().enumerate() {
        match node {
            VectorNode::Path(path) => {
                println!("  Path {}: {} commands", idx + 1, path.commands.len());
                if let Some(fill) = &path.fill {
                    println!("    Fill: {}", paint_summary(fill));
                }
                if let Some(stroke) = &path.stroke {
                    println!("    Stroke: {}", paint_summary(stroke));
                }
            }
            VectorNode::Group(group) => {
                println!(
                    "  Group {}: {} children",
                    idx + 1,
                    group.children.len()
                );
            }
        }
    }
}

fn paint_summary(fill: &Fill) -> String {
    match fill {
        Fill::SolidColor(color) => color_expression(*color, true),
        Fill::LinearGradient { color_stops, .. } => {
            format!("linear gradient ({} stops)", color_stops.len())
        }
        Fill::RadialGradient { color_stops, .. } => {
            format!("radial gradient ({} stops)", color_stops.len())
        }
    }
}

fn run_templates() {
    println!("Built-in templates:");
    for template in BuiltinTemplate::ALL {
        println!("  {:<20} {}", template.name(), template.description());
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Help => {
            print!("{}", usage());
            Ok(())
        }
        Command::Convert => run_convert(&args),
        Command::Batch => run_batch(&args),
        Command::Info => run_info(&args),
        Command::Templates => {
            run_templates();
            Ok(())
        }
        Command::Version => {
            println!("svg2compose {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
