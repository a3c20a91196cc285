use clap::Parser;
use std::rc::Rc;
use viper_greeting::adapters::{person_source_from_config, ConsoleSurface, NullSurface};
use viper_greeting::core::{RenderSurface, SettingsProvider};
use viper_greeting::utils::error::EXIT_INVALID_INPUT;
use viper_greeting::utils::{logger, validation::Validate};
use viper_greeting::{build_scene, CliConfig, SceneRunner};

fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(EXIT_INVALID_INPUT);
        }
        // --help / --version
        Err(e) => e.exit(),
    };

    // 先解析配置，才知道日誌格式
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_format());
    tracing::info!("Starting viper-greeting");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let surface: Rc<dyn RenderSurface> = if cli.quiet {
        Rc::new(NullSurface)
    } else {
        Rc::new(ConsoleSurface::new(format!("{:>5} ", config.pattern().as_str())))
    };

    let report = build_scene(&config, person_source_from_config(&config.person), surface)
        .and_then(|scene| SceneRunner::new(scene).run(config.taps()));

    match report {
        Ok(report) => {
            tracing::info!(
                "📋 {}: '{}' -> '{}' after {} tap(s)",
                report.pattern,
                report.initial_greeting,
                report.final_greeting,
                report.taps
            );
            // 非 quiet 模式下 surface 已經印過最終標籤
            if let Some(line) = report.final_output(!cli.quiet) {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
