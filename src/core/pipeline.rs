use crate::core::airport_lookup::AirportDirectory;
use crate::core::scanner::prettify_all;
use crate::core::{ConfigProvider, ItinerarySource, Pipeline, PrettifiedItinerary, Storage};
use crate::utils::error::{ItineraryError, Result};

pub struct ItineraryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ItineraryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ItineraryPipeline<S, C> {
    async fn extract(&self) -> Result<ItinerarySource> {
        let input_path = self.config.input_path();
        let lookup_path = self.config.airport_lookup_path();

        if !self.storage.exists(input_path).await {
            return Err(ItineraryError::InputNotFound {
                path: input_path.to_string(),
            });
        }
        if !self.storage.exists(lookup_path).await {
            return Err(ItineraryError::LookupNotFound {
                path: lookup_path.to_string(),
            });
        }

        tracing::debug!("Reading itinerary from: {}", input_path);
        let raw = self.storage.read_file(input_path).await?;
        let text = String::from_utf8(raw).map_err(|e| {
            ItineraryError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        tracing::debug!("Reading airport lookup from: {}", lookup_path);
        let airport_lookup = self.storage.read_file(lookup_path).await?;

        Ok(ItinerarySource {
            text,
            airport_lookup,
        })
    }

    async fn transform(&self, source: ItinerarySource) -> Result<PrettifiedItinerary> {
        let directory = AirportDirectory::from_csv_reader(source.airport_lookup.as_slice())?;
        if directory.is_empty() {
            tracing::warn!("Airport lookup has no rows; airport codes will be left as-is");
        } else {
            tracing::info!("Loaded {} airports", directory.len());
        }

        Ok(prettify_all(&source.text, &directory))
    }

    async fn load(&self, result: &PrettifiedItinerary) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} bytes of plain itinerary to storage",
            result.plain.len()
        );
        self.storage
            .write_file(output_path, result.plain.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    const LOOKUP_CSV: &str = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
Charles de Gaulle Airport,FR,Paris,LFPG,CDG,\"2.55, 49.01\"
";

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put(&self, path: &str, data: &[u8]) {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn exists(&self, path: &str) -> bool {
            self.files.lock().await.contains_key(path)
        }

        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ItineraryError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn config() -> CliConfig {
        CliConfig::new("input.txt", "output.txt", "airports.csv")
    }

    #[tokio::test]
    async fn test_extract_reports_missing_input_first() {
        let storage = MockStorage::new();
        let pipeline = ItineraryPipeline::new(storage, config());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ItineraryError::InputNotFound { .. }));
    }

    #[tokio::test]
    async fn test_extract_reports_missing_lookup() {
        let storage = MockStorage::new();
        storage.put("input.txt", b"#CDG").await;
        let pipeline = ItineraryPipeline::new(storage, config());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ItineraryError::LookupNotFound { .. }));
    }

    #[tokio::test]
    async fn test_extract_rejects_invalid_utf8() {
        let storage = MockStorage::new();
        storage.put("input.txt", &[0xff, 0xfe, 0x00]).await;
        storage.put("airports.csv", LOOKUP_CSV.as_bytes()).await;
        let pipeline = ItineraryPipeline::new(storage, config());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ItineraryError::IoError(_)));
    }

    #[tokio::test]
    async fn test_transform_builds_both_renderings() {
        let pipeline = ItineraryPipeline::new(MockStorage::new(), config());
        let source = ItinerarySource {
            text: "Via   *#CDG".to_string(),
            airport_lookup: LOOKUP_CSV.as_bytes().to_vec(),
        };

        let result = pipeline.transform(source).await.unwrap();
        assert_eq!(result.plain, "Via Paris");
        assert_eq!(result.highlighted, "Via \x1b[36mParis\x1b[0m");
    }

    #[tokio::test]
    async fn test_transform_fails_on_malformed_lookup() {
        let pipeline = ItineraryPipeline::new(MockStorage::new(), config());
        let source = ItinerarySource {
            text: "#CDG".to_string(),
            airport_lookup: b"name,iata_code\nParis,CDG\n".to_vec(),
        };

        let err = pipeline.transform(source).await.unwrap_err();
        assert!(matches!(err, ItineraryError::SchemaError { .. }));
    }

    #[tokio::test]
    async fn test_load_writes_plain_rendering() {
        let storage = MockStorage::new();
        let pipeline = ItineraryPipeline::new(storage.clone(), config());
        let result = PrettifiedItinerary {
            plain: "Via Paris".to_string(),
            highlighted: "Via \x1b[36mParis\x1b[0m".to_string(),
        };

        let path = pipeline.load(&result).await.unwrap();
        assert_eq!(path, "output.txt");
        assert_eq!(storage.get_file("output.txt").await.unwrap(), b"Via Paris");
    }
}
