use asset_tools::{AssetEngine, ImagePipeline, ImageSettings, LocalStorage};
use image::GenericImageView;
use tempfile::TempDir;

#[tokio::test]
async fn test_generates_both_placeholders_into_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("images/order-bump");
    let output_str = output_dir.to_str().unwrap().to_string();

    let settings = ImageSettings {
        output_dir: output_str.clone(),
        font_path: "/nonexistent/Helvetica.ttc".to_string(),
        quality: 95,
    };

    let storage = LocalStorage::new(output_str.clone());
    let engine = AssetEngine::new("images", ImagePipeline::new(storage, settings));

    let written = engine.run().await.unwrap();
    assert_eq!(written.len(), 2);

    for name in ["sunglasses.jpeg", "wallet.jpeg"] {
        let path = output_dir.join(name);
        assert!(path.exists(), "{} should exist", name);

        let bytes = std::fs::read(&path).unwrap();
        assert!(!bytes.is_empty());

        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg)
            .unwrap();
        assert_eq!(decoded.dimensions(), (400, 400));
    }
}

#[tokio::test]
async fn test_rerun_overwrites_existing_images() {
    let temp_dir = TempDir::new().unwrap();
    let output_str = temp_dir.path().to_str().unwrap().to_string();

    for _ in 0..2 {
        let settings = ImageSettings {
            output_dir: output_str.clone(),
            quality: 50,
            ..ImageSettings::default()
        };
        let storage = LocalStorage::new(output_str.clone());
        let engine = AssetEngine::new("images", ImagePipeline::new(storage, settings));
        engine.run().await.unwrap();
    }

    let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 2);
}
