use risk_chart::api::{RiskChart, RiskChartConfig};
use risk_chart::core::ScenarioResult;
use risk_chart::render::NullRenderer;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
struct CliArgs {
    result_path: Option<PathBuf>,
    baseline_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    hover: Option<(f64, f64)>,
    rows_json: bool,
}

fn main() {
    let _ = risk_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => RiskChartConfig::from_json_str(&read_file(path)?)
            .map_err(|err| format!("config `{}`: {err}", path.display()))?,
        None => RiskChartConfig::default(),
    };
    let scenario_result = args.result_path.as_deref().map(load_result).transpose()?;
    let baseline_result = args.baseline_path.as_deref().map(load_result).transpose()?;

    let mut chart = RiskChart::new(NullRenderer::default(), config)
        .map_err(|err| format!("chart init failed: {err}"))?;
    chart.set_scenario_result(scenario_result);
    chart.set_baseline_result(baseline_result);
    if let Some((x, y)) = args.hover {
        chart.pointer_move(x, y);
    }
    chart
        .render()
        .map_err(|err| format!("frame validation failed: {err}"))?;

    if let Some(output_path) = &args.output_path {
        write_png(&chart, output_path)?;
    }
    if args.rows_json || args.output_path.is_none() {
        let json = chart
            .rows_json_contract_v1_pretty()
            .map_err(|err| format!("failed to serialize rows: {err}"))?;
        println!("{json}");
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(chart: &RiskChart<NullRenderer>, output_path: &Path) -> Result<(), String> {
    use risk_chart::render::{CairoRenderer, Renderer};

    let viewport = chart.config().viewport;
    let width = i32::try_from(viewport.width).map_err(|_| "viewport width overflows i32")?;
    let height = i32::try_from(viewport.height).map_err(|_| "viewport height overflows i32")?;

    let frame = chart
        .build_render_frame()
        .map_err(|err| format!("frame build failed: {err}"))?;
    let mut renderer =
        CairoRenderer::new(width, height).map_err(|err| format!("renderer init failed: {err}"))?;
    renderer
        .set_clear_color(chart.style().page_background_color)
        .map_err(|err| format!("renderer init failed: {err}"))?;
    renderer
        .render(&frame)
        .map_err(|err| format!("render failed: {err}"))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            format!("failed to create output dir `{}`: {err}", parent.display())
        })?;
    }
    renderer
        .write_png(output_path)
        .map_err(|err| err.to_string())?;
    eprintln!("wrote {}", output_path.display());
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_chart: &RiskChart<NullRenderer>, _output_path: &Path) -> Result<(), String> {
    Err("--output requires feature `cairo-backend`".to_owned())
}

fn load_result(path: &Path) -> Result<ScenarioResult, String> {
    ScenarioResult::from_json_str(&read_file(path)?)
        .map_err(|err| format!("result `{}`: {err}", path.display()))
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--result" => parsed.result_path = Some(PathBuf::from(value_for("--result")?)),
            "--baseline" => parsed.baseline_path = Some(PathBuf::from(value_for("--baseline")?)),
            "--config" => parsed.config_path = Some(PathBuf::from(value_for("--config")?)),
            "--output" => parsed.output_path = Some(PathBuf::from(value_for("--output")?)),
            "--hover" => parsed.hover = Some(parse_point(&value_for("--hover")?)?),
            "--rows-json" => parsed.rows_json = true,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(parsed)
}

fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `<x>,<y>`, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate `{part}`: {err}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn usage_message() -> &'static str {
    "Usage: render_risk_chart [options]\n\nOptions:\n  --result <path>     Scenario result JSON (placeholder rows when omitted)\n  --baseline <path>   Baseline scenario result JSON\n  --config <path>     Chart config JSON\n  --hover <x>,<y>     Pointer position used for cursor and tooltip\n  --output <path>     Write PNG (requires feature `cairo-backend`)\n  --rows-json         Print chart rows contract (default when no --output)\n  -h, --help          Show this message"
}
