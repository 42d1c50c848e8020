use anyhow::Context;
use clap::Parser;
use robot_sim::utils::logger::{self, TracingLogger};
use robot_sim::utils::validation::Validate;
use robot_sim::{
    Board, CliConfig, ConsoleLineSource, FileLineSource, LineSource, Logger, RunSummary, SimError,
    Simulation, TomlConfig,
};

fn main() {
    // --help 與參數錯誤由 clap 直接處理並結束程式
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.loglevel);
    let log = TracingLogger::new(config.loglevel);

    log.info("Simulator started");
    log.debug(&format!("Log level set to: {}", config.loglevel));

    // 驗證配置
    if let Err(e) = config.validate() {
        log.error(&format!("❌ Configuration validation failed: {}", e));
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config, &log) {
        let sim_error = e.downcast_ref::<SimError>();
        if let Some(inner) = sim_error {
            log.error(&format!(
                "❌ Simulation aborted: {:#} (Category: {:?})",
                e,
                inner.category()
            ));
        }
        eprintln!("❌ Error: {:#}", e);

        // 根據錯誤類別決定退出碼
        let exit_code = sim_error.map(SimError::exit_code).unwrap_or(1);
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig, log: &TracingLogger) -> anyhow::Result<RunSummary> {
    let board = match &config.config {
        Some(path) => {
            log.info(&format!("Loading board configuration from: {}", path));
            TomlConfig::from_file(path)
                .and_then(|toml| toml.board())
                .with_context(|| format!("failed to load board configuration '{}'", path))?
        }
        None => Board::default(),
    };
    log.debug(&format!("Board size: {}x{}", board.width(), board.height()));

    // 建立輸入來源
    let mut source: Box<dyn LineSource> = match &config.file {
        Some(path) => {
            log.info(&format!("Reading from file: {}", path));
            Box::new(FileLineSource::new(path))
        }
        None => {
            println!("Enter lines (empty line to finish):");
            Box::new(ConsoleLineSource::stdin())
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut simulation = Simulation::new(board, log);
    let summary = simulation.run(source.as_mut(), &mut out)?;

    Ok(summary)
}
