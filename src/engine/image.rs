/*!
 * Engine Image Source
 * Retrieval and once-per-process caching of the engine's binary image
 */

use bytes::Bytes;
use futures::future::BoxFuture;
use log::info;
use tokio::sync::OnceCell;

use super::EngineError;

/// Provides the engine's compiled binary image
pub trait ImageSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, Result<Bytes, EngineError>>;
}

/// Caches the first successful fetch for the life of the process
///
/// Failed fetches are not cached; the next pass retries the underlying
/// source.
pub struct CachedImageSource<S> {
    source: S,
    cell: OnceCell<Bytes>,
}

impl<S: ImageSource> CachedImageSource<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }
}

impl<S: ImageSource> ImageSource for CachedImageSource<S> {
    fn fetch(&self) -> BoxFuture<'_, Result<Bytes, EngineError>> {
        Box::pin(async move {
            self.cell
                .get_or_try_init(|| async {
                    let image = self.source.fetch().await?;
                    info!("engine image cached ({} bytes)", image.len());
                    Ok(image)
                })
                .await
                .cloned()
        })
    }
}

/// Fetches the engine image over HTTP
pub struct HttpImageSource {
    client: reqwest::Client,
    url: String,
}

impl HttpImageSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Bytes, EngineError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.url)
                .send()
                .await
                .map_err(|e| EngineError::Load(e.to_string()))?;
            if !response.status().is_success() {
                return Err(EngineError::Load(format!(
                    "unable to load engine image ({})",
                    response.status()
                )));
            }
            response
                .bytes()
                .await
                .map_err(|e| EngineError::Load(e.to_string()))
        })
    }
}
