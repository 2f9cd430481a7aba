use blind_estimator::app::commands::Command;
use blind_estimator::app::export::{self, ExportFormat};
use blind_estimator::domain::ports::{Presenter, SessionDefaults};
use blind_estimator::utils::{logger, validation::Validate};
use blind_estimator::{
    resolve_settings, CliConfig, EnvironmentLocale, EstimateConfig, Estimator, Session,
    TerminalPresenter,
};
use clap::Parser;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting blind-estimator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入估價單
    let estimate = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading estimate from: {}", path);
            let loaded = EstimateConfig::from_file(path).and_then(|estimate| {
                estimate.validate()?;
                Ok(estimate)
            });
            match loaded {
                Ok(estimate) => Some(estimate),
                Err(e) => {
                    tracing::error!("❌ Failed to load estimate file '{}': {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    // 命令列 > 配置檔 > 系統語系
    let environment = EnvironmentLocale::from_env();
    let mut sources: Vec<&dyn SessionDefaults> = vec![&config];
    if let Some(estimate) = &estimate {
        sources.push(estimate);
    }
    sources.push(&environment);
    let settings = resolve_settings(&sources)?;
    tracing::info!("🔧 Unit: {}, tier: {}", settings.unit.name(), settings.tier);

    let mut estimator = Estimator::new(settings);
    if let Some(estimate) = &estimate {
        for seed in estimate.seed_items() {
            estimator.add_seed(seed);
        }
        tracing::info!("📋 Loaded {} item(s)", estimator.len());
    }

    if let Some(format) = &config.export {
        let format: ExportFormat = format.parse()?;
        println!("{}", export::render(&estimator, format)?.trim_end());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut presenter = TerminalPresenter::new(stdout.lock());
    presenter.message("Blind estimator. Type 'help' for commands.")?;
    presenter.relabel_unit(estimator.profile())?;

    let mut session = Session::new(estimator, presenter);
    if !session.estimator().is_empty() {
        session.dispatch(Command::List)?;
    }

    let stdin = io::stdin();
    session.run(stdin.lock())?;

    let (estimator, presenter) = session.into_parts();
    let mut out = presenter.into_inner();
    out.flush()?;
    tracing::info!(
        "✅ Session finished with {} item(s), total $ {}",
        estimator.len(),
        estimator.final_total()
    );

    Ok(())
}
