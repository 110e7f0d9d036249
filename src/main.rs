use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use perovskite_leaching_toolbox::{
    app::{self, AppError},
    config::{self, Config},
    i18n::keys,
    leaching::{self, LeachingInputs, PanelFootprint},
    report,
};

/// 페로브스카이트 PV 패널 주변 토양의 납 오염 추정 도구.
#[derive(Debug, Parser)]
#[command(name = "perovskite_leaching_toolbox", version, about)]
struct Cli {
    /// 출력 언어 (auto/en/ko)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,
    /// 없으면 대화형 메뉴를 실행한다.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 토양 납 농도를 한 번 계산한다. 지정하지 않은 값은 설정의 기본값을 쓴다.
    Compute(ComputeArgs),
    /// 흡수층 두께로 패널 납 함량 [g/m2]을 추정한다.
    Derive {
        #[arg(long)]
        thickness_nm: f64,
        #[arg(long, default_value = "MAPbI3")]
        material: String,
    },
    /// 재료/토양 참고 테이블과 가이드라인 값을 출력한다.
    Tables,
}

#[derive(Debug, Args)]
struct ComputeArgs {
    /// PV 면적 [m2]
    #[arg(long, allow_negative_numbers = true)]
    surface: Option<f64>,
    /// 납 함량 [g/m2]
    #[arg(long, allow_negative_numbers = true)]
    concentration: Option<f64>,
    /// 용출률 [%]
    #[arg(long, allow_negative_numbers = true)]
    leached: Option<f64>,
    /// 최대 확산 거리 [m]
    #[arg(long, allow_negative_numbers = true)]
    distance: Option<f64>,
    /// 최대 토양 깊이 [m]
    #[arg(long, allow_negative_numbers = true)]
    depth: Option<f64>,
    /// 토양 밀도 [kg/m3]
    #[arg(long, allow_negative_numbers = true)]
    density: Option<f64>,
    /// 흡착률 [%]
    #[arg(long, allow_negative_numbers = true)]
    sorption: Option<f64>,
    #[arg(long, value_enum)]
    footprint: Option<FootprintArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FootprintArg {
    /// 패널 주변 토양만
    Exclude,
    /// 패널 아래 토양 포함
    Include,
}

impl ComputeArgs {
    fn apply(&self, defaults: LeachingInputs) -> LeachingInputs {
        LeachingInputs {
            panel_surface_m2: self.surface.unwrap_or(defaults.panel_surface_m2),
            pb_concentration_g_per_m2: self
                .concentration
                .unwrap_or(defaults.pb_concentration_g_per_m2),
            leached_percent: self.leached.unwrap_or(defaults.leached_percent),
            spread_distance_m: self.distance.unwrap_or(defaults.spread_distance_m),
            soil_depth_m: self.depth.unwrap_or(defaults.soil_depth_m),
            soil_density_kg_per_m3: self.density.unwrap_or(defaults.soil_density_kg_per_m3),
            sorption_percent: self.sorption.unwrap_or(defaults.sorption_percent),
            footprint: match self.footprint {
                Some(FootprintArg::Exclude) => PanelFootprint::ExcludePanelFootprint,
                Some(FootprintArg::Include) => PanelFootprint::IncludePanelFootprint,
                None => defaults.footprint,
            },
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let (mut cfg, load_err) = config::load_or_fallback_at(&cli.config);
    if let Some(err) = load_err {
        eprintln!("{}: {err}", cli.config.display());
    }
    match try_run(&cli, &mut cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let tr = app::translator_for(&cfg, &cli.lang);
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli, cfg: &mut Config) -> Result<(), AppError> {
    let tr = app::translator_for(cfg, &cli.lang);
    match &cli.command {
        None => app::run(cfg, &cli.config, &cli.lang)?,
        Some(Command::Compute(args)) => {
            let input = args.apply(cfg.defaults);
            let result = leaching::compute_leaching(input)?;
            print!("{}", report::summary_table(&tr, &result, input.footprint));
            print!("{}", report::series_table(&tr, &result));
            print!("{}", report::guidance_lines(&tr));
        }
        Some(Command::Derive {
            thickness_nm,
            material,
        }) => {
            let concentration = leaching::derive_concentration(*thickness_nm, material)?;
            println!("{}: {concentration:.3} g/m2", tr.t(keys::DERIVE_RESULT));
        }
        Some(Command::Tables) => {
            print!("{}", report::reference_tables(&tr));
            print!("{}", report::guidance_lines(&tr));
        }
    }
    Ok(())
}
