use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

struct FixedEncoder {
    out: Vec<f64>,
    dims: usize,
}

impl TextEncoder for FixedEncoder {
    fn dimensions(&self) -> usize {
        self.dims
    }

    fn encode(&self, _text: &str) -> MoodResult<EmbeddingVector> {
        Ok(self.out.clone())
    }
}

struct CountingLoader {
    loads: AtomicUsize,
    out: Vec<f64>,
    dims: usize,
}

impl CountingLoader {
    fn new(out: Vec<f64>, dims: usize) -> Self {
        Self {
            loads: AtomicUsize::new(0),
            out,
            dims,
        }
    }
}

#[async_trait]
impl ModelLoader for CountingLoader {
    type Encoder = FixedEncoder;

    fn name(&self) -> &str {
        "fixed"
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    async fn load(&self) -> MoodResult<FixedEncoder> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(FixedEncoder {
            out: self.out.clone(),
            dims: self.dims,
        })
    }
}

#[tokio::test]
async fn embed_before_initialize_is_not_initialized() {
    let provider = ModelEmbeddingProvider::new(CountingLoader::new(vec![1.0, 0.0], 2));
    assert!(!provider.is_initialized());
    let err = provider.embed("hello").await.unwrap_err();
    assert!(matches!(err, MoodError::NotInitialized { ref provider } if provider == "fixed"));
}

#[tokio::test]
async fn initialize_loads_once() {
    let provider = ModelEmbeddingProvider::new(CountingLoader::new(vec![1.0, 0.0], 2));
    provider.initialize().await.unwrap();
    provider.initialize().await.unwrap();
    assert!(provider.is_initialized());
    assert_eq!(provider.loader.loads.load(Ordering::SeqCst), 1);
    assert_eq!(provider.embed("x").await.unwrap(), vec![1.0, 0.0]);
}

#[tokio::test]
async fn wrong_length_output_is_an_embedding_failure() {
    let provider = ModelEmbeddingProvider::new(CountingLoader::new(vec![1.0], 2));
    provider.initialize().await.unwrap();
    let err = provider.embed("x").await.unwrap_err();
    assert!(matches!(err, MoodError::EmbeddingFailure(_)));
}

#[tokio::test]
async fn non_finite_output_is_an_embedding_failure() {
    let provider = ModelEmbeddingProvider::new(CountingLoader::new(vec![f64::NAN, 0.0], 2));
    provider.initialize().await.unwrap();
    assert!(matches!(
        provider.embed("x").await.unwrap_err(),
        MoodError::EmbeddingFailure(_)
    ));
}
