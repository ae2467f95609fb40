use crate::domain::model::{ItinerarySource, PrettifiedItinerary};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn airport_lookup_path(&self) -> &str;
    fn color_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ItinerarySource>;
    async fn transform(&self, source: ItinerarySource) -> Result<PrettifiedItinerary>;
    async fn load(&self, result: &PrettifiedItinerary) -> Result<String>;
}
