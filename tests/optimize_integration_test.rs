use asset_tools::{AssetEngine, LocalStorage, OptimizePipeline, OptimizerSettings};
use tempfile::TempDir;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <!-- page styles -->
    <style>
      /* layout */
      body {
        margin: 0;
        font-family: sans-serif;
      }
      .promo , .banner { color : #333 ; }
    </style>
    <!--[if IE]><link rel="stylesheet" href="ie.css"><![endif]-->
  </head>
  <body>
    <div class="promo">
      <h1>Order   today</h1>
      <p>Free    shipping on    every order</p>
    </div>
  </body>
</html>
"#;

async fn optimize_in(dir: &TempDir, html: &str) -> (asset_tools::OptimizationReport, String) {
    let input = dir.path().join("index.html");
    let output = dir.path().join("index-optimized.html");
    std::fs::write(&input, html).unwrap();

    let settings = OptimizerSettings {
        input: input.to_str().unwrap().to_string(),
        output: output.to_str().unwrap().to_string(),
    };
    let pipeline = OptimizePipeline::new(LocalStorage::new("."), settings);
    let engine = AssetEngine::new("optimize", pipeline);

    let report = engine.run().await.unwrap();
    let optimized = std::fs::read_to_string(&output).unwrap();
    (report, optimized)
}

#[tokio::test]
async fn test_optimizes_landing_page() {
    let temp_dir = TempDir::new().unwrap();
    let (report, optimized) = optimize_in(&temp_dir, LANDING_PAGE).await;

    assert_eq!(
        optimized,
        "<!DOCTYPE html><html><head><style>body{margin:0;font-family:sans-serif}.promo,.banner{color:#333}</style><!--[if IE]><link rel=\"stylesheet\" href=\"ie.css\"><![endif]--></head><body><div class=\"promo\"><h1>Order today</h1><p>Free shipping on every order</p></div></body></html>"
    );
    assert!(!optimized.contains("page styles"));

    assert_eq!(report.original_size, LANDING_PAGE.len() as u64);
    assert_eq!(report.optimized_size, optimized.len() as u64);
    assert!(report.optimized_size <= report.original_size);

    let expected = (1.0 - report.optimized_size as f64 / report.original_size as f64) * 100.0;
    assert_eq!(
        report.to_string().lines().last().unwrap(),
        format!("Reduction: {:.1}%", expected)
    );
}

#[tokio::test]
async fn test_second_pass_does_not_shrink_further() {
    let first_dir = TempDir::new().unwrap();
    let (first, optimized) = optimize_in(&first_dir, LANDING_PAGE).await;

    let second_dir = TempDir::new().unwrap();
    let (second, reoptimized) = optimize_in(&second_dir, &optimized).await;

    assert_eq!(second.original_size, first.optimized_size);
    assert_eq!(second.optimized_size, second.original_size);
    assert_eq!(reoptimized, optimized);
}

#[tokio::test]
async fn test_missing_input_file_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("index-optimized.html");

    let settings = OptimizerSettings {
        input: temp_dir.path().join("index.html").to_str().unwrap().to_string(),
        output: output.to_str().unwrap().to_string(),
    };
    let pipeline = OptimizePipeline::new(LocalStorage::new("."), settings);
    let engine = AssetEngine::new("optimize", pipeline);

    let err = engine.run().await.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(!output.exists());
}
