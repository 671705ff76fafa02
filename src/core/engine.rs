use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AssetEngine<P: Pipeline> {
    name: &'static str,
    pipeline: P,
}

impl<P: Pipeline> AssetEngine<P> {
    pub fn new(name: &'static str, pipeline: P) -> Self {
        Self { name, pipeline }
    }

    pub async fn run(&self) -> Result<P::Loaded> {
        tracing::info!("🚀 Starting {} pipeline", self.name);

        // Extract
        tracing::debug!("Extracting...");
        let extracted = self.pipeline.extract().await?;

        // Transform
        tracing::debug!("Transforming...");
        let transformed = self.pipeline.transform(extracted).await?;

        // Load
        tracing::debug!("Loading...");
        let loaded = self.pipeline.load(transformed).await?;

        tracing::info!("✅ {} pipeline finished", self.name);
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AssetError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingPipeline {
        stages: Mutex<Vec<&'static str>>,
        fail_transform: bool,
    }

    #[async_trait]
    impl Pipeline for RecordingPipeline {
        type Extracted = u32;
        type Transformed = u32;
        type Loaded = String;

        async fn extract(&self) -> Result<u32> {
            self.stages.lock().unwrap().push("extract");
            Ok(20)
        }

        async fn transform(&self, data: u32) -> Result<u32> {
            self.stages.lock().unwrap().push("transform");
            if self.fail_transform {
                return Err(AssetError::ConfigError {
                    message: "boom".to_string(),
                });
            }
            Ok(data + 1)
        }

        async fn load(&self, result: u32) -> Result<String> {
            self.stages.lock().unwrap().push("load");
            Ok(result.to_string())
        }
    }

    #[tokio::test]
    async fn test_stages_run_in_order() {
        let engine = AssetEngine::new(
            "test",
            RecordingPipeline {
                stages: Mutex::new(Vec::new()),
                fail_transform: false,
            },
        );

        let loaded = engine.run().await.unwrap();
        assert_eq!(loaded, "21");
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_pipeline() {
        let engine = AssetEngine::new(
            "test",
            RecordingPipeline {
                stages: Mutex::new(Vec::new()),
                fail_transform: true,
            },
        );

        assert!(engine.run().await.is_err());
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform"]
        );
    }
}
