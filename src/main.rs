use asset_tools::utils::{logger, validation::Validate};
use asset_tools::{
    AssetEngine, AssetError, CliConfig, Command, ImagePipeline, LocalStorage, OptimizePipeline,
    ToolConfig,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match ToolConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => exit_with(&e),
            }
        }
        None => ToolConfig::default(),
    };

    let outcome = match cli.command {
        Command::Images {
            output_dir,
            font,
            quality,
        } => {
            config.apply_image_overrides(output_dir, font, quality);
            run_images(config).await
        }
        Command::Optimize {
            input,
            output,
            json,
        } => {
            config.apply_optimizer_overrides(input, output);
            run_optimize(config, json).await
        }
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }

    Ok(())
}

async fn run_images(config: ToolConfig) -> asset_tools::Result<()> {
    let settings = config.images;
    settings.validate()?;

    let output_dir = settings.output_dir.clone();
    let storage = LocalStorage::new(output_dir.clone());
    let engine = AssetEngine::new("images", ImagePipeline::new(storage, settings));

    let written = engine.run().await?;

    println!();
    println!("📁 Images saved to: {}/", output_dir);
    for path in &written {
        let name = std::path::Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        println!("   - {}", name);
    }

    Ok(())
}

async fn run_optimize(config: ToolConfig, json: bool) -> asset_tools::Result<()> {
    let settings = config.optimizer;
    settings.validate()?;

    // 路徑相對於目前工作目錄
    let storage = LocalStorage::new(".");
    let engine = AssetEngine::new("optimize", OptimizePipeline::new(storage, settings));

    let report = engine.run().await?;
    println!("{}", report);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn exit_with(e: &AssetError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
